use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{subscription_columns, subscription_rows, subscriptions_json};
use crate::ui::{
    badge, blank_line, check_format, format_money, header, hint, kv, print, table, Badge,
    OutputMode, TableStyle,
};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let ledger = ctx.open_ledger()?;
    let today = ctx.today()?;

    if ui_ctx.mode.is_json() {
        let value = subscriptions_json(ledger.all(), today)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            if !ctx.quiet() {
                let count = format!("{} total", ledger.len());
                print(&ui_ctx, &header(&ui_ctx, "list", Some(&count)));
                blank_line(&ui_ctx);
            }
            if ledger.is_empty() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "No subscriptions yet"));
                if !ctx.quiet() {
                    blank_line(&ui_ctx);
                    print(&ui_ctx, &hint(&ui_ctx, "subtrackr add"));
                }
                return Ok(());
            }
            let rows = subscription_rows(&ui_ctx, ledger.all(), today);
            print(&ui_ctx, &table(&ui_ctx, TableStyle::Boxed, &subscription_columns(), &rows));
            if !ctx.quiet() {
                let totals = ledger.totals();
                blank_line(&ui_ctx);
                print(&ui_ctx, &kv(&ui_ctx, "Monthly", &format_money(totals.monthly)));
                print(&ui_ctx, &kv(&ui_ctx, "Yearly", &format_money(totals.yearly)));
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            let rows = subscription_rows(&ui_ctx, ledger.all(), today);
            if !rows.is_empty() {
                print(&ui_ctx, &table(&ui_ctx, TableStyle::Boxed, &subscription_columns(), &rows));
            }
        }
    }
    Ok(())
}
