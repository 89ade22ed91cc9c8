//! Core data types for the subscription ledger.
//!
//! These types mirror the persisted JSON shape exactly: the field names
//! (`id`, `name`, `cost`, `billingCycle`, `nextBilling`, `category`) are the
//! backup file contract and must not change.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::dates::parse_local_date;
use crate::error::LedgerError;

/// Identifier of a subscription record.
///
/// Records created by this crate carry UUIDv7 strings. Older backups carry
/// numeric (sometimes fractional) ids; those are kept exactly as written.
///
/// Numeric ids compare by value, so `1` and `1.0` are the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscriptionId {
    Number(Number),
    Text(String),
}

impl SubscriptionId {
    /// Whether the id's display form starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.to_string().starts_with(prefix)
    }
}

impl PartialEq for SubscriptionId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SubscriptionId::Number(a), SubscriptionId::Number(b)) => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => x == y,
                    _ => a == b,
                }
            }
            (SubscriptionId::Text(a), SubscriptionId::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SubscriptionId {}

impl Hash for SubscriptionId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            SubscriptionId::Number(n) => {
                state.write_u8(0);
                match n.as_f64() {
                    // Adding 0.0 folds -0.0 into 0.0 so both hash alike.
                    Some(value) => (value + 0.0).to_bits().hash(state),
                    None => n.to_string().hash(state),
                }
            }
            SubscriptionId::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionId::Number(n) => write!(f, "{}", n),
            SubscriptionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<Uuid> for SubscriptionId {
    fn from(id: Uuid) -> Self {
        SubscriptionId::Text(id.to_string())
    }
}

impl From<&str> for SubscriptionId {
    fn from(id: &str) -> Self {
        SubscriptionId::Text(id.to_string())
    }
}

impl From<i64> for SubscriptionId {
    fn from(id: i64) -> Self {
        SubscriptionId::Number(Number::from(id))
    }
}

/// Cost of one billing period, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Number(Number),
    Text(String),
}

impl Cost {
    /// The numeric amount, if the stored value reads as a finite,
    /// non-negative number.
    ///
    /// Text is read leniently: leading whitespace is skipped and the longest
    /// numeric prefix is used, so `"9.99 USD"` reads as `9.99`.
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            Cost::Number(n) => n.as_f64(),
            Cost::Text(s) => parse_leading_float(s),
        }?;
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

impl From<&str> for Cost {
    fn from(value: &str) -> Self {
        Cost::Text(value.to_string())
    }
}

impl From<String> for Cost {
    fn from(value: String) -> Self {
        Cost::Text(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Number(n) => write!(f, "{}", n),
            Cost::Text(s) => f.write_str(s),
        }
    }
}

fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digit_run = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digit_run(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digit_run(end + 1);
        if frac_end > end + 1 {
            mantissa_digits += frac_end - (end + 1);
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digit_run(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// How often a subscription bills.
///
/// Unrecognized values read from storage are kept in `Other` so they
/// survive a save/export unchanged; they contribute nothing to totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
    Other(String),
}

impl BillingCycle {
    pub fn as_str(&self) -> &str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
            BillingCycle::Other(raw) => raw,
        }
    }
}

impl From<String> for BillingCycle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "monthly" => BillingCycle::Monthly,
            "yearly" => BillingCycle::Yearly,
            _ => BillingCycle::Other(value),
        }
    }
}

impl From<BillingCycle> for String {
    fn from(cycle: BillingCycle) -> Self {
        match cycle {
            BillingCycle::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = LedgerError;

    /// Strict parse for user input: only the known cycles are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            other => Err(LedgerError::InvalidInput(format!(
                "Unknown billing cycle \"{}\" (use monthly or yearly)",
                other
            ))),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display grouping for a subscription. No computation depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Entertainment,
    Productivity,
    Fitness,
    News,
    Other,
    Custom(String),
}

impl Category {
    pub const KNOWN: [Category; 5] = [
        Category::Entertainment,
        Category::Productivity,
        Category::Fitness,
        Category::News,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Entertainment => "entertainment",
            Category::Productivity => "productivity",
            Category::Fitness => "fitness",
            Category::News => "news",
            Category::Other => "other",
            Category::Custom(raw) => raw,
        }
    }

    /// Icon shown next to the subscription name.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Entertainment => "\u{1F3AC}",
            Category::Productivity => "\u{1F4BC}",
            Category::Fitness => "\u{1F4AA}",
            Category::News => "\u{1F4F0}",
            Category::Other | Category::Custom(_) => "\u{1F4E6}",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::KNOWN
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or(Category::Custom(value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Strict parse for user input: only the known categories are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::KNOWN
            .iter()
            .find(|known| known.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!(
                    "Unknown category \"{}\" (use entertainment, productivity, fitness, news or other)",
                    wanted
                ))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored subscription record.
///
/// Fields written as `null` are kept in `extra` so they are written back
/// as `null` rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct Subscription {
    /// Unique identifier, assigned once and never reused
    pub id: SubscriptionId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,

    /// Next renewal date as written (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Fields this version does not know about, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record keys with a typed slot besides `id`.
const VALUE_FIELDS: [&str; 5] = ["name", "cost", "billingCycle", "nextBilling", "category"];

/// Whether `value` has the JSON type the record field `key` expects.
fn value_fits(key: &str, value: &Value) -> bool {
    match key {
        "cost" => value.is_string() || value.is_number(),
        _ => value.is_string(),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFields {
    id: SubscriptionId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cost: Option<Cost>,
    #[serde(default)]
    billing_cycle: Option<BillingCycle>,
    #[serde(default)]
    next_billing: Option<String>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Subscription {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Subscription::from_fields(fields, |_, value| value.is_null())
    }
}

impl Subscription {
    /// Read a record the way it was stored, without rejecting it over a
    /// field of the wrong type.
    ///
    /// Such a value moves to `extra` unchanged, so saving writes it back
    /// exactly as found. Only an unreadable `id` fails.
    pub fn from_stored(fields: Map<String, Value>) -> serde_json::Result<Self> {
        Subscription::from_fields(fields, |key, value| value.is_null() || !value_fits(key, value))
    }

    fn from_fields(
        mut fields: Map<String, Value>,
        set_aside: impl Fn(&str, &Value) -> bool,
    ) -> serde_json::Result<Self> {
        let mut aside = Vec::new();
        for key in VALUE_FIELDS {
            if fields.get(key).is_some_and(|value| set_aside(key, value)) {
                if let Some(value) = fields.remove(key) {
                    aside.push((key.to_string(), value));
                }
            }
        }

        let record: RecordFields = serde_json::from_value(Value::Object(fields))?;
        let mut extra = record.extra;
        extra.extend(aside);
        Ok(Subscription {
            id: record.id,
            name: record.name,
            cost: record.cost,
            billing_cycle: record.billing_cycle,
            next_billing: record.next_billing,
            category: record.category,
            extra,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Cost per billing period, if it reads as a usable amount.
    pub fn amount(&self) -> Option<f64> {
        self.cost.as_ref().and_then(Cost::amount)
    }

    /// Parsed renewal date, if present and well-formed.
    pub fn next_billing_date(&self) -> Option<NaiveDate> {
        self.next_billing.as_deref().and_then(parse_local_date)
    }
}

/// Input for creating a subscription.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionInput {
    pub name: String,
    pub cost: String,
    pub billing_cycle: BillingCycle,
    pub next_billing: String,
    pub category: Category,
}

impl SubscriptionInput {
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        next_billing: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            next_billing: next_billing.into(),
            ..Self::default()
        }
    }

    pub fn with_cycle(mut self, billing_cycle: BillingCycle) -> Self {
        self.billing_cycle = billing_cycle;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Name of the first required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.cost.trim().is_empty() {
            Some("cost")
        } else if self.next_billing.trim().is_empty() {
            Some("nextBilling")
        } else {
            None
        }
    }

    /// Turn the input into a stored record under `id`.
    pub fn into_subscription(self, id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            name: Some(self.name),
            cost: Some(Cost::Text(self.cost)),
            billing_cycle: Some(self.billing_cycle),
            next_billing: Some(self.next_billing),
            category: Some(self.category),
            extra: Map::new(),
        }
    }
}
