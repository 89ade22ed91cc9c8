//! Calendar date helpers.
//!
//! Renewal dates are plain calendar days. They are parsed into
//! [`NaiveDate`] and compared as such, so there is no time-of-day and no
//! timezone offset that could shift a date by one.

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone, Utc};

/// Parse a `YYYY-MM-DD` date.
///
/// The first three `-`separated components must be non-zero integers.
/// Months and days past the end roll forward into the following month or
/// year (`2025-02-30` is `2025-03-02`), the way stored dates have always
/// been read.
pub fn parse_local_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-').map(|part| part.trim().parse::<u32>().ok());
    let year = parts.next()??;
    let month = parts.next()??;
    let day = parts.next()??;
    if year == 0 || month == 0 || day == 0 {
        return None;
    }

    let months_from_jan = month - 1;
    let year = i32::try_from(year).ok()?.checked_add(i32::try_from(months_from_jan / 12).ok()?)?;
    let first_of_month = NaiveDate::from_ymd_opt(year, months_from_jan % 12 + 1, 1)?;
    first_of_month.checked_add_days(Days::new(u64::from(day - 1)))
}

/// Today's date in the local timezone.
pub fn start_of_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date in the given timezone.
pub fn start_of_today_in<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

/// Whole days from `a` to `b`; positive when `b` is after `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Format a date the way it is stored.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
