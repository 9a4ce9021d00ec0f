use qrcode::render::{svg, unicode};
use qrcode::types::QrError as EncodeError;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    #[error("Nothing to encode")]
    Empty,

    #[error("Data is too long for a QR code at this error correction level")]
    DataTooLong,

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Unknown error correction level: {0}. Valid levels: L, M, Q, H")]
    UnknownLevel(String),
}

/// Error correction level, from ~7% (L) to ~30% (H) recoverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            _ => Err(QrError::UnknownLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    /// Unicode half blocks, two module rows per text line
    #[default]
    Text,
    Svg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    pub ec_level: EcLevel,
    pub format: QrFormat,
    pub quiet_zone: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::default(),
            format: QrFormat::default(),
            quiet_zone: true,
        }
    }
}

pub fn render_qr(data: &str, options: &QrOptions) -> Result<String, QrError> {
    if data.is_empty() {
        return Err(QrError::Empty);
    }

    let code = QrCode::with_error_correction_level(data.as_bytes(), options.ec_level.into())
        .map_err(|e| match e {
            EncodeError::DataTooLong => QrError::DataTooLong,
            other => QrError::Encode(other.to_string()),
        })?;

    let rendered = match options.format {
        QrFormat::Text => code
            .render::<unicode::Dense1x2>()
            .quiet_zone(options.quiet_zone)
            .build(),
        QrFormat::Svg => code
            .render::<svg::Color>()
            .min_dimensions(200, 200)
            .quiet_zone(options.quiet_zone)
            .build(),
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_qr_text() {
        let rendered = render_qr("https://example.com", &QrOptions::default()).unwrap();
        assert!(rendered.lines().count() > 10);
        assert!(rendered.contains('█') || rendered.contains('▀') || rendered.contains('▄'));
    }

    #[test]
    fn test_render_qr_svg() {
        let options = QrOptions {
            format: QrFormat::Svg,
            ..QrOptions::default()
        };
        let rendered = render_qr("hello", &options).unwrap();
        assert!(rendered.contains("<svg"));
    }

    #[test]
    fn test_render_qr_is_deterministic() {
        let options = QrOptions::default();
        assert_eq!(
            render_qr("same input", &options).unwrap(),
            render_qr("same input", &options).unwrap()
        );
    }

    #[test]
    fn test_higher_ec_level_is_not_smaller() {
        let low = QrOptions {
            ec_level: EcLevel::L,
            ..QrOptions::default()
        };
        let high = QrOptions {
            ec_level: EcLevel::H,
            ..QrOptions::default()
        };
        let data = "a moderately long payload for comparing symbol sizes";
        let low_lines = render_qr(data, &low).unwrap().lines().count();
        let high_lines = render_qr(data, &high).unwrap().lines().count();
        assert!(high_lines >= low_lines);
    }

    #[test]
    fn test_render_qr_errors() {
        assert_eq!(render_qr("", &QrOptions::default()), Err(QrError::Empty));
        assert_eq!(
            render_qr(&"a".repeat(3000), &QrOptions::default()),
            Err(QrError::DataTooLong)
        );
    }

    #[test]
    fn test_ec_level_from_str() {
        assert_eq!("h".parse::<EcLevel>().unwrap(), EcLevel::H);
        assert!("x".parse::<EcLevel>().is_err());
    }
}
