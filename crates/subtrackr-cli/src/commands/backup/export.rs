use std::io::Write;
use std::path::PathBuf;

use subtrackr_core::backup::default_backup_filename;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let bytes = ledger.export()?;

    let destination = args
        .destination
        .clone()
        .unwrap_or_else(default_backup_filename);
    if destination == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = PathBuf::from(&destination);
    subtrackr_core::fs::write_atomic(&path, &bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write backup {}: {}", path.display(), e))?;
    tracing::info!(path = %path.display(), count = ledger.len(), "exported backup");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let count = ledger.len().to_string();
        let size = format!("{} bytes", bytes.len());
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Exported backup",
                &[
                    ("Path", destination.as_str()),
                    ("Subscriptions", count.as_str()),
                    ("Size", size.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
