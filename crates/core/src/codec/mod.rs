//! Thin adapters over codec and format libraries
//!
//! Base64 (`base64`), digests (`md5`, `sha2`), UUID formatting (`uuid`),
//! JSON/YAML (`serde_json`, `serde_yaml`) and QR rendering (`qrcode`). The
//! adapters only pick engines and options and turn library errors into
//! [`CodecError`] or [`QrError`].
//!
//! UUID *generation* needs a random source and lives in the shell; this
//! module only formats and inspects identifiers.

pub mod digest;
pub mod encoding;
pub mod identifier;
pub mod qr;
pub mod structured;

pub use digest::{hash_all, hash_hex, HashAlgorithm};
pub use encoding::{decode_base64, decode_base64_text, encode_base64, Base64Variant};
pub use identifier::{format_uuid, inspect_uuid, UuidFormat, UuidInfo};
pub use qr::{render_qr, EcLevel, QrError, QrFormat, QrOptions};
pub use structured::{format_json, json_to_yaml, yaml_to_json, JsonStyle};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Malformed YAML at line {line}, column {column}: {message}")]
    MalformedYaml {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}
