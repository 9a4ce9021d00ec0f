//! Memorial dates after a death
//!
//! The schedule holds the third-day rite, the seven weekly rites up to the
//! 49th day, the 100th day and any number of yearly anniversaries. Dates
//! stay structured from start to end; filtering "upcoming" entries compares
//! `NaiveDate` values directly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{add_days, anniversary_in, days_between, DateError};

/// How the date of death is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCounting {
    /// The date of death is day 1
    #[default]
    Inclusive,
    /// The date of death is day 0
    Exclusive,
}

impl DayCounting {
    /// Days to add to the date of death to reach `day_number`
    pub fn offset(&self, day_number: u32) -> i64 {
        match self {
            DayCounting::Inclusive => day_number as i64 - 1,
            DayCounting::Exclusive => day_number as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "n", rename_all = "snake_case")]
pub enum MemorialKind {
    ThirdDay,
    /// Weekly rite `n` of 7, held on day `7 * n`
    Weekly(u8),
    HundredthDay,
    /// Yearly anniversary `n`
    Anniversary(u32),
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl MemorialKind {
    /// Day number counted from the date of death; anniversaries have none
    pub fn day_number(&self) -> Option<u32> {
        match self {
            MemorialKind::ThirdDay => Some(3),
            MemorialKind::Weekly(week) => Some(7 * *week as u32),
            MemorialKind::HundredthDay => Some(100),
            MemorialKind::Anniversary(_) => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            MemorialKind::ThirdDay => "3rd day".to_string(),
            MemorialKind::Weekly(7) => "49th day (final week)".to_string(),
            MemorialKind::Weekly(week) => {
                format!("{} day (week {week})", ordinal(7 * *week as u32))
            }
            MemorialKind::HundredthDay => "100th day".to_string(),
            MemorialKind::Anniversary(year) => format!("{} anniversary", ordinal(*year)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorialDate {
    pub kind: MemorialKind,
    pub label: String,
    pub date: NaiveDate,
    pub weekday: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_from_today: Option<i64>,
}

impl MemorialDate {
    fn new(kind: MemorialKind, date: NaiveDate) -> Self {
        Self {
            kind,
            label: kind.label(),
            date,
            weekday: date.weekday().to_string(),
            days_from_today: None,
        }
    }

    /// Attach the signed distance from `today`; negative for past dates
    pub fn with_reference(mut self, today: NaiveDate) -> Self {
        self.days_from_today = Some(days_between(today, self.date));
        self
    }
}

/// Full memorial schedule for a date of death, sorted by date
pub fn memorial_schedule(
    death: NaiveDate,
    counting: DayCounting,
    anniversaries: u32,
) -> Result<Vec<MemorialDate>, DateError> {
    let mut kinds = vec![MemorialKind::ThirdDay];
    kinds.extend((1..=7).map(MemorialKind::Weekly));
    kinds.push(MemorialKind::HundredthDay);

    let mut schedule = kinds
        .into_iter()
        .map(|kind| {
            let day_number = kind.day_number().unwrap_or_default();
            add_days(death, counting.offset(day_number)).map(|date| MemorialDate::new(kind, date))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for year in 1..=anniversaries {
        let target_year = i32::try_from(year)
            .ok()
            .and_then(|offset| death.year().checked_add(offset))
            .ok_or(DateError::OutOfRange)?;
        let date = anniversary_in(death, target_year)?;
        schedule.push(MemorialDate::new(MemorialKind::Anniversary(year), date));
    }

    schedule.sort_by_key(|entry| entry.date);
    Ok(schedule)
}

/// Entries on or after `today`
pub fn upcoming(schedule: &[MemorialDate], today: NaiveDate) -> Vec<&MemorialDate> {
    schedule.iter().filter(|entry| entry.date >= today).collect()
}

/// The closest entry on or after `today`
pub fn next_memorial(schedule: &[MemorialDate], today: NaiveDate) -> Option<&MemorialDate> {
    schedule
        .iter()
        .filter(|entry| entry.date >= today)
        .min_by_key(|entry| entry.date)
}
