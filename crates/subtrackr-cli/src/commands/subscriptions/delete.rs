use crate::app::{resolve_subscription_id, AppContext};
use crate::cli::DeleteArgs;
use crate::commands::ensure_saved;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let id = resolve_subscription_id(ledger.all(), &args.id)?;

    let removed = ledger.remove(&id).ok_or_else(|| {
        CliError::not_found(
            format!("Subscription not found: {}", id),
            "Run `subtrackr list` to see subscription IDs.",
        )
    })?;
    ensure_saved(&ledger)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let id = removed.id.to_string();
        let remaining = ledger.len().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Deleted subscription",
                &[
                    ("ID", id.as_str()),
                    ("Name", removed.name()),
                    ("Remaining", remaining.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
