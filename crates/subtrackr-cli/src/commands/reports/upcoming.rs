use crate::app::AppContext;
use crate::cli::UpcomingArgs;
use crate::output::{subscriptions_json, upcoming_columns, upcoming_rows};
use crate::ui::{
    badge, blank_line, check_format, header, print, table, Badge, OutputMode, TableStyle,
};

pub fn handle_upcoming(ctx: &AppContext, args: &UpcomingArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let horizon = ctx.horizon_days(args.days)?;
    let today = ctx.today()?;
    let ledger = ctx.open_ledger()?;
    let due = ledger.upcoming_renewals(today, horizon);
    tracing::debug!(horizon, count = due.len(), "upcoming renewals");

    match ui_ctx.mode {
        OutputMode::Json => {
            let value = subscriptions_json(due.iter().copied(), today)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputMode::Pretty => {
            if !ctx.quiet() {
                let window = format!("next {}d", horizon);
                print(&ui_ctx, &header(&ui_ctx, "upcoming", Some(&window)));
                blank_line(&ui_ctx);
            }
            if due.is_empty() {
                let message = format!("Nothing renews in the next {} days", horizon);
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, &message));
                return Ok(());
            }
            let rows = upcoming_rows(&ui_ctx, &due, today);
            print(&ui_ctx, &table(&ui_ctx, TableStyle::Bare, &upcoming_columns(), &rows));
        }
        OutputMode::Plain => {
            let rows = upcoming_rows(&ui_ctx, &due, today);
            if !rows.is_empty() {
                print(&ui_ctx, &table(&ui_ctx, TableStyle::Bare, &upcoming_columns(), &rows));
            }
        }
    }
    Ok(())
}
