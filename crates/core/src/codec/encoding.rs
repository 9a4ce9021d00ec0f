use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::CodecError;

const PADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(true)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

const UNPADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PADDED);
const STANDARD_NO_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, UNPADDED);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PADDED);
const URL_SAFE_NO_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, UNPADDED);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base64Variant {
    #[default]
    Standard,
    UrlSafe,
}

fn engine(variant: Base64Variant, padded: bool) -> &'static GeneralPurpose {
    match (variant, padded) {
        (Base64Variant::Standard, true) => &STANDARD,
        (Base64Variant::Standard, false) => &STANDARD_NO_PAD,
        (Base64Variant::UrlSafe, true) => &URL_SAFE,
        (Base64Variant::UrlSafe, false) => &URL_SAFE_NO_PAD,
    }
}

pub fn encode_base64(data: &[u8], variant: Base64Variant, padded: bool) -> String {
    engine(variant, padded).encode(data)
}

/// Decode Base64, ignoring whitespace and accepting missing padding
pub fn decode_base64(input: &str, variant: Base64Variant) -> Result<Vec<u8>, CodecError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    engine(variant, true)
        .decode(compact.as_bytes())
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

pub fn decode_base64_text(input: &str, variant: Base64Variant) -> Result<String, CodecError> {
    let bytes = decode_base64(input, variant)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}
