//! JSON output formatting for subscriptions.

use chrono::NaiveDate;
use serde_json::{json, Value};

use subtrackr_core::renewals::due_label;
use subtrackr_core::totals::{annual_equivalent, Totals};
use subtrackr_core::Subscription;

/// A stored record plus its computed `annualCost` and `due` status.
pub fn subscription_json(sub: &Subscription, today: NaiveDate) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(sub)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "annualCost".to_string(),
            serde_json::to_value(annual_equivalent(sub))?,
        );
        map.insert(
            "due".to_string(),
            serde_json::to_value(due_label(sub.next_billing.as_deref(), today))?,
        );
    }
    Ok(value)
}

/// Convert multiple subscriptions to a JSON array for output.
pub fn subscriptions_json<'a>(
    subs: impl IntoIterator<Item = &'a Subscription>,
    today: NaiveDate,
) -> anyhow::Result<Value> {
    let items = subs
        .into_iter()
        .map(|sub| subscription_json(sub, today))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Value::Array(items))
}

pub fn totals_json(totals: &Totals, count: usize) -> Value {
    json!({
        "monthly": totals.monthly,
        "yearly": totals.yearly,
        "count": count,
    })
}
