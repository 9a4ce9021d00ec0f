//! Deterministic string and number-format transformations
//!
//! Every function here is total over its input type or returns a typed error;
//! none of them hold state between calls.

pub mod base;
pub mod case;
pub mod width;

pub use base::{
    convert_all_bases, convert_base, from_base, normalize, to_base, BaseConversion, BaseError,
    Radix,
};
pub use case::{
    convert_all_cases, convert_case, split_words, text_stats, CaseError, CaseStyle, TextStats,
};
pub use width::{
    convert_width, to_full_width, to_half_width, WidthDirection, WidthError, WidthFilter,
};
