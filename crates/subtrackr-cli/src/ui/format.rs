//! String formatting utilities for UI rendering.

use subtrackr_core::storage::{BillingCycle, Category};
use subtrackr_core::totals::Money;
use subtrackr_core::SubscriptionId;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Short form of an id for tables.
///
/// Generated ids are UUIDs and show their first 8 characters; legacy
/// numeric ids are short enough to show whole.
pub fn short_id(id: &SubscriptionId) -> String {
    match id {
        SubscriptionId::Text(text) if text.len() > 8 => text.chars().take(8).collect(),
        other => other.to_string(),
    }
}

/// Money with a currency symbol, e.g. `$19.98`.
pub fn format_money(amount: Money) -> String {
    format!("${}", amount)
}

/// Per-period cost with its cycle, e.g. `$9.99/mo`.
pub fn format_cost(cost: Option<f64>, cycle: Option<&BillingCycle>) -> String {
    let amount = match cost {
        Some(value) => format_money(Money::from_raw(value)),
        None => "-".to_string(),
    };
    match cycle {
        Some(BillingCycle::Monthly) => format!("{}/mo", amount),
        Some(BillingCycle::Yearly) => format!("{}/yr", amount),
        Some(BillingCycle::Other(name)) => format!("{} ({})", amount, name),
        None => amount,
    }
}

/// Category name, prefixed with its icon when unicode is enabled.
pub fn category_label(category: Option<&Category>, unicode: bool) -> String {
    let category = category.cloned().unwrap_or(Category::Other);
    if unicode {
        format!("{} {}", category.icon(), category)
    } else {
        category.to_string()
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
