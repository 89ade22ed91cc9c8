use crate::app::AppContext;
use crate::cli::TotalsArgs;
use crate::output::totals_json;
use crate::ui::{blank_line, check_format, format_money, header, kv, print, OutputMode};

pub fn handle_totals(ctx: &AppContext, args: &TotalsArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let ledger = ctx.open_ledger()?;
    let totals = ledger.totals();

    match ui_ctx.mode {
        OutputMode::Json => {
            let value = totals_json(&totals, ledger.len());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputMode::Pretty => {
            if !ctx.quiet() {
                print(&ui_ctx, &header(&ui_ctx, "totals", None));
                blank_line(&ui_ctx);
            }
            print(&ui_ctx, &kv(&ui_ctx, "Monthly", &format_money(totals.monthly)));
            print(&ui_ctx, &kv(&ui_ctx, "Yearly", &format_money(totals.yearly)));
            if !ctx.quiet() {
                print(&ui_ctx, &kv(&ui_ctx, "Subscriptions", &ledger.len().to_string()));
            }
        }
        OutputMode::Plain => {
            print(&ui_ctx, &kv(&ui_ctx, "Monthly", &totals.monthly.to_string()));
            print(&ui_ctx, &kv(&ui_ctx, "Yearly", &totals.yearly.to_string()));
            print(&ui_ctx, &kv(&ui_ctx, "Count", &ledger.len().to_string()));
        }
    }
    Ok(())
}
