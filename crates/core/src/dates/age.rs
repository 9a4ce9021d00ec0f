//! Age calculation
//!
//! Years, months and days are computed with the borrow algorithm: the
//! fields are subtracted one by one and a negative day count borrows the
//! length of the month preceding the target month, a negative month count
//! borrows twelve months from the years.
//!
//! When the start day does not exist in that preceding month (a 31st
//! against a 30-day month, 29 February against a common February) the
//! borrowed days are clamped at zero, so the month boundary is reached on
//! the first day of the following month. This is the same policy
//! [`super::anniversary_in`] applies to leap-day birthdays.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{anniversary_in, days_between, DateError};

/// Calendar difference between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub birth: NaiveDate,
    pub target: NaiveDate,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: u32,
    /// Target year minus birth year, ignoring the birthday
    pub year_age: i32,
    /// East-Asian reckoning: one at birth, plus one every new year
    pub counting_age: i32,
    pub next_birthday: NaiveDate,
    pub days_until_next_birthday: i64,
    pub is_birthday: bool,
}

fn previous_month_length(date: NaiveDate) -> i32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

/// Years, months and days from `start` to `end` using the borrow algorithm
///
/// Borrowed days are clamped at zero when `start.day()` does not exist in the
/// month before `end`, so several end dates can share one result:
/// 2023-01-31 to 2023-03-01, 03-02 and 03-03 are all 0y 1m 0d.
pub fn date_difference(start: NaiveDate, end: NaiveDate) -> Result<DateDifference, DateError> {
    if end < start {
        return Err(DateError::TargetBeforeBirth { start, target: end });
    }

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        days = (days + previous_month_length(end)).max(0);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(DateDifference {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// First observed birthday on or after `target`
fn next_birthday(birth: NaiveDate, target: NaiveDate) -> Result<NaiveDate, DateError> {
    let this_year = anniversary_in(birth, target.year())?;
    if this_year >= target {
        return Ok(this_year);
    }

    let next_year = target.year().checked_add(1).ok_or(DateError::OutOfRange)?;
    anniversary_in(birth, next_year)
}

/// Age of someone born on `birth` as of `target`
pub fn calculate_age(birth: NaiveDate, target: NaiveDate) -> Result<AgeResult, DateError> {
    let difference = date_difference(birth, target)?;
    let total_days = days_between(birth, target);
    let next = next_birthday(birth, target)?;
    let year_age = target.year() - birth.year();

    Ok(AgeResult {
        birth,
        target,
        years: difference.years,
        months: difference.months,
        days: difference.days,
        total_days,
        total_weeks: total_days / 7,
        total_months: difference.years * 12 + difference.months,
        year_age,
        counting_age: year_age + 1,
        next_birthday: next,
        days_until_next_birthday: days_between(target, next),
        is_birthday: next == target && target > birth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ymd(diff: DateDifference) -> (u32, u32, u32) {
        (diff.years, diff.months, diff.days)
    }

    // ============================================================================
    // date_difference tests
    // ============================================================================

    #[test]
    fn test_date_difference_simple() {
        let diff = date_difference(date(1990, 5, 15), date(2024, 8, 20)).unwrap();
        assert_eq!(ymd(diff), (34, 3, 5));
    }

    #[test]
    fn test_date_difference_borrows_days() {
        // 20 - 25 borrows July (31 days)
        let diff = date_difference(date(1990, 5, 25), date(2024, 8, 20)).unwrap();
        assert_eq!(ymd(diff), (34, 2, 26));
    }

    #[test]
    fn test_date_difference_borrows_months() {
        let diff = date_difference(date(1990, 11, 10), date(2024, 3, 10)).unwrap();
        assert_eq!(ymd(diff), (33, 4, 0));
    }

    #[test]
    fn test_date_difference_same_day() {
        let diff = date_difference(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(ymd(diff), (0, 0, 0));
    }

    #[test]
    fn test_date_difference_leap_day_before_birthday() {
        let diff = date_difference(date(2000, 2, 29), date(2024, 2, 28)).unwrap();
        assert_eq!(ymd(diff), (23, 11, 30));
    }

    #[test]
    fn test_date_difference_leap_day_observed_on_march_first() {
        let diff = date_difference(date(2000, 2, 29), date(2023, 3, 1)).unwrap();
        assert_eq!(ymd(diff), (23, 0, 0));

        let diff = date_difference(date(2000, 2, 29), date(2023, 2, 28)).unwrap();
        assert_eq!(ymd(diff), (22, 11, 30));
    }

    #[test]
    fn test_date_difference_end_of_month_clamps() {
        // 1 - 31 + 28 is still negative; clamped at zero
        let diff = date_difference(date(2023, 1, 31), date(2023, 3, 1)).unwrap();
        assert_eq!(ymd(diff), (0, 1, 0));
    }

    #[test]
    fn test_date_difference_clamped_targets_share_a_result() {
        for day in 1..=3 {
            let diff = date_difference(date(2023, 1, 31), date(2023, 3, day)).unwrap();
            assert_eq!(ymd(diff), (0, 1, 0), "2023-03-0{day}");
        }

        let diff = date_difference(date(2023, 1, 31), date(2023, 3, 4)).unwrap();
        assert_eq!(ymd(diff), (0, 1, 1));
    }

    #[test]
    fn test_date_difference_rejects_reversed_dates() {
        let err = date_difference(date(2024, 1, 2), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DateError::TargetBeforeBirth { .. }));
    }

    #[test]
    fn test_date_difference_approximates_day_count() {
        let starts = [date(1999, 12, 31), date(2000, 2, 29), date(2010, 6, 15), date(2021, 1, 31)];
        let ends = [date(2024, 2, 28), date(2024, 3, 1), date(2030, 12, 1), date(2021, 3, 1)];

        for start in starts {
            for end in ends {
                if end < start {
                    continue;
                }
                let diff = date_difference(start, end).unwrap();
                let approx = diff.years as i64 * 365 + diff.months as i64 * 30 + diff.days as i64;
                let actual = days_between(start, end);
                assert!(
                    (approx - actual).abs() <= 31,
                    "{start} -> {end}: {approx} vs {actual}"
                );
            }
        }
    }

    // ============================================================================
    // calculate_age tests
    // ============================================================================

    #[test]
    fn test_calculate_age_fields() {
        let age = calculate_age(date(1990, 5, 15), date(2024, 8, 20)).unwrap();
        assert_eq!(age.years, 34);
        assert_eq!(age.total_months, 34 * 12 + 3);
        assert_eq!(age.year_age, 34);
        assert_eq!(age.counting_age, 35);
        assert_eq!(age.total_days, days_between(date(1990, 5, 15), date(2024, 8, 20)));
        assert_eq!(age.total_weeks, age.total_days / 7);
        assert_eq!(age.next_birthday, date(2025, 5, 15));
        assert!(!age.is_birthday);
    }

    #[test]
    fn test_calculate_age_on_birthday() {
        let age = calculate_age(date(1990, 5, 15), date(2024, 5, 15)).unwrap();
        assert!(age.is_birthday);
        assert_eq!(age.years, 34);
        assert_eq!(age.days_until_next_birthday, 0);
    }

    #[test]
    fn test_calculate_age_on_birth_date() {
        let age = calculate_age(date(2024, 5, 15), date(2024, 5, 15)).unwrap();
        assert_eq!(age.years, 0);
        assert_eq!(age.counting_age, 1);
        assert!(!age.is_birthday);
    }

    #[test]
    fn test_calculate_age_leap_day_birthday() {
        let age = calculate_age(date(2000, 2, 29), date(2024, 2, 28)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 11, 30));
        assert_eq!(age.next_birthday, date(2024, 2, 29));
        assert_eq!(age.days_until_next_birthday, 1);

        let age = calculate_age(date(2000, 2, 29), date(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 0, 0));
        assert!(age.is_birthday);

        let age = calculate_age(date(2000, 2, 29), date(2023, 2, 28)).unwrap();
        assert_eq!(age.next_birthday, date(2023, 3, 1));
    }

    #[test]
    fn test_calculate_age_next_birthday_rolls_over() {
        let age = calculate_age(date(1985, 1, 10), date(2024, 12, 31)).unwrap();
        assert_eq!(age.next_birthday, date(2025, 1, 10));
        assert_eq!(age.days_until_next_birthday, 10);
    }

    #[test]
    fn test_calculate_age_rejects_future_birth() {
        assert!(calculate_age(date(2030, 1, 1), date(2024, 1, 1)).is_err());
    }
}
