//! Full-width / half-width conversion
//!
//! Printable ASCII (`!` to `~`) maps onto the Fullwidth Forms block at a
//! fixed offset and the ASCII space maps onto the ideographic space. A
//! [`WidthFilter`] restricts which characters are touched; everything else
//! passes through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FULL_WIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidthError {
    #[error("Unknown width filter: {0}. Valid filters: all, alphanumeric, alphabet, digit, symbol, space")]
    UnknownFilter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthDirection {
    ToFull,
    ToHalf,
}

/// Which half-width characters a conversion applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthFilter {
    #[default]
    All,
    Alphanumeric,
    Alphabet,
    Digit,
    Symbol,
    Space,
}

impl WidthFilter {
    pub const ALL: [WidthFilter; 6] = [
        WidthFilter::All,
        WidthFilter::Alphanumeric,
        WidthFilter::Alphabet,
        WidthFilter::Digit,
        WidthFilter::Symbol,
        WidthFilter::Space,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidthFilter::All => "all",
            WidthFilter::Alphanumeric => "alphanumeric",
            WidthFilter::Alphabet => "alphabet",
            WidthFilter::Digit => "digit",
            WidthFilter::Symbol => "symbol",
            WidthFilter::Space => "space",
        }
    }

    /// Whether the half-width form `c` is covered by this filter
    fn accepts(&self, c: char) -> bool {
        match self {
            WidthFilter::All => true,
            WidthFilter::Alphanumeric => c.is_ascii_alphanumeric(),
            WidthFilter::Alphabet => c.is_ascii_alphabetic(),
            WidthFilter::Digit => c.is_ascii_digit(),
            WidthFilter::Symbol => c.is_ascii_punctuation(),
            WidthFilter::Space => c == ' ',
        }
    }
}

impl fmt::Display for WidthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidthFilter {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        WidthFilter::ALL
            .into_iter()
            .find(|filter| filter.name() == wanted)
            .ok_or_else(|| WidthError::UnknownFilter(s.to_string()))
    }
}

fn full_width_char(c: char) -> Option<char> {
    match c {
        ' ' => Some(IDEOGRAPHIC_SPACE),
        '!'..='~' => char::from_u32(c as u32 + FULL_WIDTH_OFFSET),
        _ => None,
    }
}

fn half_width_char(c: char) -> Option<char> {
    match c {
        IDEOGRAPHIC_SPACE => Some(' '),
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET),
        _ => None,
    }
}

pub fn to_full_width(input: &str, filter: WidthFilter) -> String {
    input
        .chars()
        .map(|c| match full_width_char(c) {
            Some(full) if filter.accepts(c) => full,
            _ => c,
        })
        .collect()
}

pub fn to_half_width(input: &str, filter: WidthFilter) -> String {
    input
        .chars()
        .map(|c| match half_width_char(c) {
            Some(half) if filter.accepts(half) => half,
            _ => c,
        })
        .collect()
}

pub fn convert_width(input: &str, direction: WidthDirection, filter: WidthFilter) -> String {
    match direction {
        WidthDirection::ToFull => to_full_width(input, filter),
        WidthDirection::ToHalf => to_half_width(input, filter),
    }
}
