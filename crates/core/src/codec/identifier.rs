use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use super::CodecError;

/// Output spelling of a UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidFormat {
    pub uppercase: bool,
    pub hyphens: bool,
    pub braces: bool,
}

impl Default for UuidFormat {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
            braces: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UuidInfo {
    pub canonical: String,
    pub version: usize,
    pub variant: String,
    pub is_nil: bool,
}

pub fn format_uuid(id: Uuid, format: &UuidFormat) -> String {
    let text = if format.hyphens {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    };

    let text = if format.uppercase {
        text.to_uppercase()
    } else {
        text
    };

    if format.braces {
        format!("{{{text}}}")
    } else {
        text
    }
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::NCS => "NCS",
        Variant::RFC4122 => "RFC 4122",
        Variant::Microsoft => "Microsoft",
        Variant::Future => "Future",
        _ => "Unknown",
    }
}

/// Parse any common spelling (hyphenated, simple, braced, URN) and describe it
pub fn inspect_uuid(input: &str) -> Result<UuidInfo, CodecError> {
    let id = Uuid::parse_str(input.trim()).map_err(|e| CodecError::InvalidUuid(e.to_string()))?;

    Ok(UuidInfo {
        canonical: id.hyphenated().to_string(),
        version: id.get_version_num(),
        variant: variant_name(id.get_variant()).to_string(),
        is_nil: id.is_nil(),
    })
}
