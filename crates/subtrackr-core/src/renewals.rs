//! Renewal scheduling: which subscriptions bill soon, and how urgent each is.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::dates::{days_between, parse_local_date};
use crate::storage::Subscription;

/// Default look-ahead window for upcoming renewals, in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 10;

/// How pressing a renewal is relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    Today,
    Normal,
}

/// Human-readable due status for a renewal date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueLabel {
    pub text: String,
    pub urgency: Urgency,
    /// Signed days from today to the renewal date
    pub days: i64,
}

/// Label a renewal date relative to `today`.
///
/// Returns `None` when the date is missing or does not parse.
pub fn due_label(next_billing: Option<&str>, today: NaiveDate) -> Option<DueLabel> {
    let due = parse_local_date(next_billing?)?;
    let diff = days_between(today, due);
    let (text, urgency) = match diff {
        d if d < 0 => (format!("Overdue by {}d", d.unsigned_abs()), Urgency::Overdue),
        0 => ("Due today".to_string(), Urgency::Today),
        d => (format!("Due in {}d", d), Urgency::Normal),
    };
    Some(DueLabel {
        text,
        urgency,
        days: diff,
    })
}

/// Subscriptions renewing between `today` and `today + horizon_days`,
/// both ends inclusive, soonest first.
///
/// Records without a usable date are left out entirely. Records sharing a
/// date keep their ledger order.
pub fn upcoming_renewals(
    ledger: &[Subscription],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<&Subscription> {
    let Some(last_day) = today.checked_add_days(Days::new(u64::from(horizon_days))) else {
        return Vec::new();
    };

    let mut due: Vec<(NaiveDate, &Subscription)> = ledger
        .iter()
        .filter_map(|sub| sub.next_billing_date().map(|date| (date, sub)))
        .filter(|(date, _)| *date >= today && *date <= last_day)
        .collect();
    due.sort_by_key(|(date, _)| *date);
    due.into_iter().map(|(_, sub)| sub).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::format_date;
    use crate::storage::{SubscriptionId, SubscriptionInput};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn in_days(n: i64) -> String {
        let date = if n >= 0 {
            today() + Days::new(n as u64)
        } else {
            today() - Days::new(n.unsigned_abs())
        };
        format_date(date)
    }

    fn sub(name: &str, next_billing: &str) -> Subscription {
        SubscriptionInput::new(name, "1", next_billing).into_subscription(SubscriptionId::from(name))
    }

    #[test]
    fn test_due_label_bands() {
        let overdue = due_label(Some(&in_days(-3)), today()).unwrap();
        assert_eq!(overdue.text, "Overdue by 3d");
        assert_eq!(overdue.urgency, Urgency::Overdue);

        let due_today = due_label(Some(&in_days(0)), today()).unwrap();
        assert_eq!(due_today.text, "Due today");
        assert_eq!(due_today.urgency, Urgency::Today);

        let later = due_label(Some(&in_days(5)), today()).unwrap();
        assert_eq!(later.text, "Due in 5d");
        assert_eq!(later.urgency, Urgency::Normal);
        assert_eq!(later.days, 5);
    }

    #[test]
    fn test_due_label_missing_or_invalid() {
        assert!(due_label(None, today()).is_none());
        assert!(due_label(Some(""), today()).is_none());
        assert!(due_label(Some("soon"), today()).is_none());
    }

    #[test]
    fn test_horizon_is_inclusive() {
        let ledger = vec![
            sub("ten", &in_days(10)),
            sub("eleven", &in_days(11)),
            sub("today", &in_days(0)),
            sub("yesterday", &in_days(-1)),
        ];
        let names: Vec<&str> = upcoming_renewals(&ledger, today(), DEFAULT_HORIZON_DAYS)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["today", "ten"]);
    }

    #[test]
    fn test_sorted_by_date_with_stable_ties() {
        let ledger = vec![
            sub("c", &in_days(7)),
            sub("a", &in_days(2)),
            sub("b", &in_days(2)),
            sub("d", &in_days(1)),
        ];
        let names: Vec<&str> = upcoming_renewals(&ledger, today(), 10)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_records_without_dates_never_upcoming() {
        let mut first = sub("first", "");
        first.next_billing = None;
        let second = sub("second", "");
        let ledger = vec![first, second];
        assert!(upcoming_renewals(&ledger, today(), 10).is_empty());
        assert!(upcoming_renewals(&ledger, today(), u32::MAX).is_empty());
    }

    #[test]
    fn test_zero_horizon_only_today() {
        let ledger = vec![sub("today", &in_days(0)), sub("tomorrow", &in_days(1))];
        let upcoming = upcoming_renewals(&ledger, today(), 0);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name(), "today");
    }
}
