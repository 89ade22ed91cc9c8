use std::str::FromStr;

use subtrackr_core::dates::{format_date, parse_local_date};
use subtrackr_core::storage::{BillingCycle, Category, Cost};
use subtrackr_core::SubscriptionInput;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::commands::ensure_saved;
use crate::errors::CliError;
use crate::ui::{format_cost, print, prompt, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = !args.no_input && ui_ctx.is_interactive();

    let name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => prompt::required_text("Name")?,
        None => String::new(),
    };
    let cost = match &args.cost {
        Some(cost) => cost.clone(),
        None if interactive => prompt::cost("Cost")?,
        None => String::new(),
    };
    let billing_cycle = match args.cycle.as_deref() {
        Some(value) => BillingCycle::from_str(value)?,
        None if interactive => {
            let items = vec!["monthly".to_string(), "yearly".to_string()];
            match prompt::choose("Billing cycle", &items, 0)? {
                1 => BillingCycle::Yearly,
                _ => BillingCycle::Monthly,
            }
        }
        None => BillingCycle::default(),
    };
    let next_billing = match &args.next_billing {
        Some(date) => date.clone(),
        None if interactive => prompt::date("Next billing date", &format_date(ctx.today()?))?,
        None => String::new(),
    };
    let category = match args.category.as_deref() {
        Some(value) => Category::from_str(value)?,
        None if interactive => {
            let items: Vec<String> = Category::KNOWN
                .iter()
                .map(|c| format!("{} {}", c.icon(), c))
                .collect();
            let index = prompt::choose("Category", &items, 0)?;
            Category::KNOWN.get(index).cloned().unwrap_or_default()
        }
        None => Category::default(),
    };

    check_cost(&cost)?;
    check_date(&next_billing)?;

    let input = SubscriptionInput::new(name, cost, next_billing)
        .with_cycle(billing_cycle)
        .with_category(category);

    let mut ledger = ctx.open_ledger()?;
    let added = ledger.add(input)?;
    ensure_saved(&ledger)?;

    if !ctx.quiet() {
        let id = added.id.to_string();
        let cost = format_cost(added.amount(), added.billing_cycle.as_ref());
        let next = added.next_billing.clone().unwrap_or_default();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Added subscription",
                &[
                    ("ID", id.as_str()),
                    ("Name", added.name()),
                    ("Cost", cost.as_str()),
                    ("Next billing", next.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

/// A given cost must read as a non-negative amount. Blank is left for the
/// ledger to reject as a missing field.
fn check_cost(cost: &str) -> anyhow::Result<()> {
    if cost.trim().is_empty() || Cost::from(cost).amount().is_some() {
        return Ok(());
    }
    Err(CliError::invalid_input_with_hint(
        format!("Invalid cost: {}", cost),
        "Use a non-negative amount such as 9.99.",
    )
    .into())
}

fn check_date(date: &str) -> anyhow::Result<()> {
    if date.trim().is_empty() || parse_local_date(date.trim()).is_some() {
        return Ok(());
    }
    Err(CliError::invalid_input_with_hint(
        format!("Invalid next billing date: {}", date),
        "Use YYYY-MM-DD, e.g. 2025-07-01.",
    )
    .into())
}
