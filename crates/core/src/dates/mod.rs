//! Calendar arithmetic on proleptic Gregorian dates
//!
//! Month lengths and leap years are left to `chrono`. The helpers here only
//! add the policies the tools need on top of it, most notably how a
//! 29 February anniversary is observed in common years.

pub mod age;
pub mod memorial;

use chrono::{Datelike, Days, Months, NaiveDate};

pub use age::{calculate_age, date_difference, AgeResult, DateDifference};
pub use memorial::{
    memorial_schedule, next_memorial, upcoming, DayCounting, MemorialDate, MemorialKind,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Target date {target} is before the start date {start}")]
    TargetBeforeBirth { start: NaiveDate, target: NaiveDate },

    #[error("Date is out of the supported range")]
    OutOfRange,
}

/// Parse `YYYY-MM-DD`, also accepting `.` and `/` as separators
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    let normalized: String = trimmed
        .chars()
        .map(|c| if c == '.' || c == '/' { '-' } else { c })
        .collect();

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .map_err(|_| DateError::InvalidDate(trimmed.to_string()))
}

pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted.ok_or(DateError::OutOfRange)
}

/// Shift by calendar months, clamping to the last day of the target month
pub fn add_months(date: NaiveDate, months: i32) -> Result<NaiveDate, DateError> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted.ok_or(DateError::OutOfRange)
}

pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate, DateError> {
    let months = years.checked_mul(12).ok_or(DateError::OutOfRange)?;
    add_months(date, months)
}

/// Signed number of days from `start` to `end`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Number of days in the given month, `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

/// The date in `year` on which the yearly recurrence of `date` is observed
///
/// A 29 February recurrence falls on 1 March in common years.
pub fn anniversary_in(date: NaiveDate, year: i32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .ok_or(DateError::OutOfRange)
}
