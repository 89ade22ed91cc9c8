//! Table rows for subscription listings.

use chrono::NaiveDate;

use subtrackr_core::renewals::due_label;
use subtrackr_core::totals::annual_equivalent;
use subtrackr_core::Subscription;

use crate::ui::theme::{styled, urgency_style};
use crate::ui::{category_label, format_cost, format_money, short_id, single_line, truncate};
use crate::ui::{Column, UiContext};

const NAME_WIDTH: usize = 32;

pub fn subscription_columns() -> [Column; 7] {
    [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Category"),
        Column::right("Cost"),
        Column::right("Per year"),
        Column::new("Next billing"),
        Column::new("Due"),
    ]
}

/// One row per subscription, in ledger order.
///
/// Pretty rows use short ids and icons; plain rows keep full ids so they
/// can be fed back into `delete`.
pub fn subscription_rows(
    ctx: &UiContext,
    subs: &[Subscription],
    today: NaiveDate,
) -> Vec<Vec<String>> {
    subs.iter()
        .map(|sub| {
            vec![
                display_id(ctx, sub),
                display_name(ctx, sub),
                category_label(sub.category.as_ref(), ctx.unicode && ctx.mode.is_pretty()),
                format_cost(sub.amount(), sub.billing_cycle.as_ref()),
                format_money(annual_equivalent(sub)),
                sub.next_billing.clone().unwrap_or_else(|| "-".to_string()),
                due_cell(ctx, sub, today),
            ]
        })
        .collect()
}

pub fn upcoming_columns() -> [Column; 5] {
    [
        Column::new("ID"),
        Column::new("Name"),
        Column::right("Cost"),
        Column::new("Next billing"),
        Column::new("Due"),
    ]
}

/// Rows for renewals, already sorted soonest first.
pub fn upcoming_rows(ctx: &UiContext, subs: &[&Subscription], today: NaiveDate) -> Vec<Vec<String>> {
    subs.iter()
        .map(|sub| {
            vec![
                display_id(ctx, sub),
                display_name(ctx, sub),
                format_cost(sub.amount(), sub.billing_cycle.as_ref()),
                sub.next_billing.clone().unwrap_or_else(|| "-".to_string()),
                due_cell(ctx, sub, today),
            ]
        })
        .collect()
}

/// Due label, colored by urgency in pretty mode.
pub fn due_cell(ctx: &UiContext, sub: &Subscription, today: NaiveDate) -> String {
    match due_label(sub.next_billing.as_deref(), today) {
        Some(label) => styled(&label.text, urgency_style(label.urgency), ctx.color),
        None => "-".to_string(),
    }
}

fn display_id(ctx: &UiContext, sub: &Subscription) -> String {
    if ctx.mode.is_pretty() {
        short_id(&sub.id)
    } else {
        sub.id.to_string()
    }
}

fn display_name(ctx: &UiContext, sub: &Subscription) -> String {
    let name = single_line(sub.name());
    if ctx.mode.is_pretty() {
        truncate(&name, NAME_WIDTH)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use subtrackr_core::storage::{BillingCycle, Category};
    use subtrackr_core::{SubscriptionId, SubscriptionInput};

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: mode == OutputMode::Pretty,
            color: false,
            unicode: true,
            width: 120,
            mode,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
    }

    fn netflix() -> Subscription {
        SubscriptionInput::new("Netflix", "15.49", "2025-06-23")
            .with_category(Category::Entertainment)
            .into_subscription(SubscriptionId::from("0190a1b2-7c3d-7e4f-8a9b-0c1d2e3f4a5b"))
    }

    #[test]
    fn test_plain_row_keeps_full_id() {
        let rows = subscription_rows(&ctx(OutputMode::Plain), &[netflix()], today());
        assert_eq!(
            rows[0],
            vec![
                "0190a1b2-7c3d-7e4f-8a9b-0c1d2e3f4a5b",
                "Netflix",
                "entertainment",
                "$15.49/mo",
                "$185.88",
                "2025-06-23",
                "Overdue by 2d",
            ]
        );
    }

    #[test]
    fn test_pretty_row_uses_short_id_and_icon() {
        let rows = subscription_rows(&ctx(OutputMode::Pretty), &[netflix()], today());
        assert_eq!(rows[0][0], "0190a1b2");
        assert_eq!(rows[0][2], "\u{1F3AC} entertainment");
    }

    #[test]
    fn test_upcoming_row() {
        let sub = SubscriptionInput::new("Domain", "12", "2025-06-25")
            .with_cycle(BillingCycle::Yearly)
            .into_subscription(SubscriptionId::from(7_i64));
        let rows = upcoming_rows(&ctx(OutputMode::Plain), &[&sub], today());
        assert_eq!(rows[0], vec!["7", "Domain", "$12.00/yr", "2025-06-25", "Due today"]);
    }

    #[test]
    fn test_due_cell_without_date() {
        let mut sub = netflix();
        sub.next_billing = Some("soon".to_string());
        assert_eq!(due_cell(&ctx(OutputMode::Plain), &sub, today()), "-");
    }
}
