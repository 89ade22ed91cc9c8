//! Spend aggregation.
//!
//! Monthly and yearly figures are normalized views of the same ledger:
//! a yearly charge counts as one twelfth per month, a monthly charge as
//! twelve per year. Totals are always recomputed from the records passed
//! in; nothing is cached.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::storage::{BillingCycle, Subscription};

/// A currency amount rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    /// Round a raw amount to cents, halves away from zero.
    ///
    /// Amounts too large to scale to cents are kept as they are; a
    /// non-finite amount becomes the largest finite one.
    pub fn from_raw(amount: f64) -> Self {
        let amount = saturate(amount);
        let scaled = amount * 100.0;
        let cents = if scaled.is_finite() {
            scaled.round() / 100.0
        } else {
            amount
        };
        // Avoid rendering "-0.00".
        Money(if cents == 0.0 { 0.0 } else { cents })
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Clamp an overflowed amount to the largest finite one.
fn saturate(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else if amount < 0.0 {
        f64::MIN
    } else {
        f64::MAX
    }
}

fn sum_shares(ledger: &[Subscription], share: fn(&Subscription) -> f64) -> f64 {
    ledger
        .iter()
        .map(share)
        .fold(0.0, |total, amount| saturate(total + amount))
}

/// One record's contribution to the monthly view.
fn monthly_share(sub: &Subscription) -> f64 {
    let Some(cost) = sub.amount() else {
        return 0.0;
    };
    match sub.billing_cycle {
        Some(BillingCycle::Monthly) => cost,
        Some(BillingCycle::Yearly) => cost / 12.0,
        _ => 0.0,
    }
}

/// One record's contribution to the yearly view.
fn yearly_share(sub: &Subscription) -> f64 {
    let Some(cost) = sub.amount() else {
        return 0.0;
    };
    match sub.billing_cycle {
        Some(BillingCycle::Monthly) => saturate(cost * 12.0),
        Some(BillingCycle::Yearly) => cost,
        _ => 0.0,
    }
}

/// Total spend per month across the ledger.
pub fn monthly_total(ledger: &[Subscription]) -> Money {
    Money::from_raw(sum_shares(ledger, monthly_share))
}

/// Total spend per year across the ledger.
pub fn yearly_total(ledger: &[Subscription]) -> Money {
    Money::from_raw(sum_shares(ledger, yearly_share))
}

/// What a single subscription costs over a year.
pub fn annual_equivalent(sub: &Subscription) -> Money {
    Money::from_raw(yearly_share(sub))
}

/// Both totals, as reported together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub monthly: Money,
    pub yearly: Money,
}

impl Totals {
    pub fn of(ledger: &[Subscription]) -> Self {
        Self {
            monthly: monthly_total(ledger),
            yearly: yearly_total(ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Cost, SubscriptionId, SubscriptionInput};

    fn sub(cost: &str, cycle: BillingCycle) -> Subscription {
        SubscriptionInput::new("test", cost, "2025-01-01")
            .with_cycle(cycle)
            .into_subscription(SubscriptionId::from("id"))
    }

    #[test]
    fn test_mixed_cycle_totals() {
        let ledger = vec![
            sub("9.99", BillingCycle::Monthly),
            sub("119.88", BillingCycle::Yearly),
        ];
        assert_eq!(monthly_total(&ledger).to_string(), "19.98");
        assert_eq!(yearly_total(&ledger).to_string(), "239.76");
    }

    #[test]
    fn test_annual_equivalent() {
        assert_eq!(annual_equivalent(&sub("10", BillingCycle::Monthly)).to_string(), "120.00");
        assert_eq!(annual_equivalent(&sub("120", BillingCycle::Yearly)).to_string(), "120.00");
        assert_eq!(annual_equivalent(&sub("oops", BillingCycle::Monthly)).to_string(), "0.00");
    }

    #[test]
    fn test_monthly_only_ledger_scales_by_twelve() {
        let ledger = vec![
            sub("4.99", BillingCycle::Monthly),
            sub("12.50", BillingCycle::Monthly),
            sub("0.99", BillingCycle::Monthly),
        ];
        let monthly = monthly_total(&ledger).value();
        let yearly = yearly_total(&ledger).value();
        assert!((yearly - monthly * 12.0).abs() < 0.01);
    }

    #[test]
    fn test_unusable_records_contribute_nothing() {
        let mut missing_cost = sub("5", BillingCycle::Monthly);
        missing_cost.cost = None;
        let mut no_cycle = sub("5", BillingCycle::Monthly);
        no_cycle.billing_cycle = None;
        let ledger = vec![
            sub("abc", BillingCycle::Monthly),
            sub("8", BillingCycle::Other("weekly".to_string())),
            missing_cost,
            no_cycle,
            sub("-3", BillingCycle::Monthly),
        ];
        assert_eq!(Totals::of(&ledger), Totals { monthly: Money::ZERO, yearly: Money::ZERO });
    }

    #[test]
    fn test_numeric_cost_counts() {
        let mut numeric = sub("0", BillingCycle::Yearly);
        numeric.cost = Some(serde_json::from_str::<Cost>("60").unwrap());
        assert_eq!(monthly_total(&[numeric]).to_string(), "5.00");
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(monthly_total(&[]).to_string(), "0.00");
        assert_eq!(yearly_total(&[]).to_string(), "0.00");
    }

    #[test]
    fn test_money_rounds_half_up_and_serializes_as_string() {
        assert_eq!(Money::from_raw(0.125).to_string(), "0.13");
        assert_eq!(serde_json::to_string(&Money::from_raw(19.98)).unwrap(), "\"19.98\"");
    }

    #[test]
    fn test_huge_costs_stay_finite() {
        let ledger = vec![
            sub("1e308", BillingCycle::Monthly),
            sub("1.7e308", BillingCycle::Yearly),
        ];
        let yearly = yearly_total(&ledger);
        assert_eq!(yearly.value(), f64::MAX);
        assert!(!yearly.to_string().contains("inf"));
        assert!(monthly_total(&ledger).value().is_finite());

        let annual = annual_equivalent(&ledger[0]);
        assert_eq!(annual.value(), f64::MAX);
        assert!(!annual.to_string().contains("inf"));
        assert_eq!(Money::from_raw(f64::INFINITY).value(), f64::MAX);
    }
}
