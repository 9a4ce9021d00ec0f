//! Microwave cooking time conversion
//!
//! Energy delivered is wattage times time, so a cooking time written for one
//! oven converts to another as `seconds * from_watts / to_watts`, rounded to
//! the nearest second.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Wattages commonly printed on food packaging
pub const COMMON_WATTAGES: [u32; 8] = [500, 600, 700, 800, 900, 1000, 1100, 1200];

static UNIT_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s*m(?:in)?)?\s*(?:(\d+)\s*s(?:ec)?)?$").expect("duration pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MicrowaveError {
    #[error("Invalid cooking time '{0}'. Use seconds, m:ss or 2m30s")]
    InvalidDuration(String),

    #[error("Wattage must be greater than zero")]
    ZeroWattage,

    #[error("Cooking time is too long")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookTime {
    pub watts: u32,
    pub seconds: u32,
    pub formatted: String,
}

fn parse_number(digits: &str, input: &str) -> Result<u32, MicrowaveError> {
    digits
        .parse::<u32>()
        .map_err(|_| MicrowaveError::InvalidDuration(input.to_string()))
}

/// Parse a cooking time into seconds
///
/// Accepts plain seconds (`90`), clock notation (`1:30`, `0:45`) and unit
/// notation (`1m30s`, `2 min`, `45s`).
pub fn parse_duration(input: &str) -> Result<u32, MicrowaveError> {
    let trimmed = input.trim();
    let invalid = || MicrowaveError::InvalidDuration(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some((minutes, seconds)) = trimmed.split_once(':') {
        if seconds.len() != 2 {
            return Err(invalid());
        }
        let minutes = parse_number(minutes.trim(), input)?;
        let seconds = parse_number(seconds, input)?;
        if seconds >= 60 {
            return Err(invalid());
        }
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or(MicrowaveError::Overflow);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return parse_number(trimmed, input);
    }

    let lowered = trimmed.to_lowercase();
    let captures = UNIT_DURATION.captures(&lowered).ok_or_else(invalid)?;
    let minutes = captures.get(1).map(|m| m.as_str().to_string());
    let seconds = captures.get(2).map(|s| s.as_str().to_string());

    if minutes.is_none() && seconds.is_none() {
        return Err(invalid());
    }

    let minutes = minutes.map(|m| parse_number(&m, input)).transpose()?.unwrap_or(0);
    let seconds = seconds.map(|s| parse_number(&s, input)).transpose()?.unwrap_or(0);

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or(MicrowaveError::Overflow)
}

/// `m:ss`, or `h:mm:ss` from one hour on
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Convert a cooking time written for `from_watts` to an oven of `to_watts`
pub fn convert_cook_time(seconds: u32, from_watts: u32, to_watts: u32) -> Result<u32, MicrowaveError> {
    if from_watts == 0 || to_watts == 0 {
        return Err(MicrowaveError::ZeroWattage);
    }

    let energy = seconds as u64 * from_watts as u64;
    let to = to_watts as u64;
    let rounded = (energy + to / 2) / to;

    u32::try_from(rounded).map_err(|_| MicrowaveError::Overflow)
}

/// Equivalent cooking times for every wattage in [`COMMON_WATTAGES`]
pub fn cook_time_table(seconds: u32, from_watts: u32) -> Result<Vec<CookTime>, MicrowaveError> {
    COMMON_WATTAGES
        .iter()
        .map(|watts| {
            convert_cook_time(seconds, from_watts, *watts).map(|converted| CookTime {
                watts: *watts,
                seconds: converted,
                formatted: format_duration(converted),
            })
        })
        .collect()
}
