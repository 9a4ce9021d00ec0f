//! Number base conversion between binary, octal, decimal and hexadecimal
//!
//! Values are carried as `i128`. Input may carry a sign, the radix prefix
//! (`0b`, `0o`, `0x`), `_` or space digit grouping and either letter case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BaseError {
    #[error("No digits to convert")]
    Empty,

    #[error("Invalid digit '{digit}' for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("Value does not fit in 128 bits")]
    Overflow,

    #[error("Unknown base: {0}. Valid bases: 2, 8, 10, 16")]
    UnknownRadix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hex];

    pub fn value(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(Radix::Binary),
            "8" | "oct" | "octal" => Ok(Radix::Octal),
            "10" | "dec" | "decimal" => Ok(Radix::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Radix::Hex),
            _ => Err(BaseError::UnknownRadix(s.to_string())),
        }
    }
}

fn strip_radix_prefix(digits: &str, radix: Radix) -> &str {
    let prefix = radix.prefix();
    if prefix.is_empty() {
        return digits;
    }

    match digits.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &digits[prefix.len()..],
        _ => digits,
    }
}

/// Sign and lowercase digits, validated against the radix
fn clean_digits(input: &str, radix: Radix) -> Result<(bool, String), BaseError> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = strip_radix_prefix(unsigned, radix)
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if digits.is_empty() {
        return Err(BaseError::Empty);
    }

    if let Some(digit) = digits.chars().find(|c| !c.is_digit(radix.value())) {
        return Err(BaseError::InvalidDigit {
            digit,
            radix: radix.value(),
        });
    }

    Ok((negative, digits))
}

/// Canonical spelling of a number in its own base
///
/// Lowercase digits without prefix, grouping or leading zeros; zero is
/// always `0`, never `-0`.
pub fn normalize(input: &str, radix: Radix) -> Result<String, BaseError> {
    let (negative, digits) = clean_digits(input, radix)?;
    let significant = digits.trim_start_matches('0');

    if significant.is_empty() {
        return Ok("0".to_string());
    }

    Ok(if negative {
        format!("-{significant}")
    } else {
        significant.to_string()
    })
}

pub fn from_base(input: &str, radix: Radix) -> Result<i128, BaseError> {
    let (negative, digits) = clean_digits(input, radix)?;
    let magnitude = u128::from_str_radix(&digits, radix.value()).map_err(|_| BaseError::Overflow)?;

    let value = if negative {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };

    value.ok_or(BaseError::Overflow)
}

pub fn to_base(value: i128, radix: Radix) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match radix {
        Radix::Binary => format!("{magnitude:b}"),
        Radix::Octal => format!("{magnitude:o}"),
        Radix::Decimal => format!("{magnitude}"),
        Radix::Hex => format!("{magnitude:x}"),
    };

    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

pub fn convert_base(input: &str, from: Radix, to: Radix) -> Result<String, BaseError> {
    from_base(input, from).map(|value| to_base(value, to))
}

/// One value spelled in every supported base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseConversion {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hex: String,
}

pub fn convert_all_bases(input: &str, from: Radix) -> Result<BaseConversion, BaseError> {
    let value = from_base(input, from)?;

    Ok(BaseConversion {
        binary: to_base(value, Radix::Binary),
        octal: to_base(value, Radix::Octal),
        decimal: to_base(value, Radix::Decimal),
        hex: to_base(value, Radix::Hex),
    })
}
