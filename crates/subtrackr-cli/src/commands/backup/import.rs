use std::io::Read;
use std::path::Path;

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::commands::ensure_saved;
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let bytes = read_backup(&args.file)?;
    let mut ledger = ctx.open_ledger()?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes && !ledger.is_empty() && args.file != "-" && ui_ctx.is_interactive() {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Replace {} existing subscription(s) with {}?",
                ledger.len(),
                args.file
            ))
            .default(false)
            .interact()?;
        if !proceed {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Import cancelled"));
                }
                OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
            }
            return Ok(());
        }
    }

    let count = ledger.import(&bytes)?;
    ensure_saved(&ledger)?;

    if !ctx.quiet() {
        let count = count.to_string();
        let source = if args.file == "-" { "stdin" } else { args.file.as_str() };
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Imported backup",
                &[("Source", source), ("Subscriptions", count.as_str())],
            ),
        );
    }
    Ok(())
}

fn read_backup(file: &str) -> anyhow::Result<Vec<u8>> {
    if file == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer);
    }

    let path = Path::new(file);
    if !path.exists() {
        return Err(CliError::not_found(
            format!("Backup file not found: {}", path.display()),
            "Check the path, or pipe the backup in with `subtrackr import -`.",
        )
        .into());
    }
    std::fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
