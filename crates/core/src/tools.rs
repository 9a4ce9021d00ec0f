//! Catalog of every tool the application exposes
//!
//! Tool ids are the stable kebab-case identifiers stored in the favorites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Converter,
    Text,
    Generator,
    Calculator,
    Network,
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolCategory::Converter => "converter",
            ToolCategory::Text => "text",
            ToolCategory::Generator => "generator",
            ToolCategory::Calculator => "calculator",
            ToolCategory::Network => "network",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    AreaConverter,
    PressureConverter,
    SpeedConverter,
    MemoryConverter,
    CaseConverter,
    WidthConverter,
    BaseConverter,
    AgeCalculator,
    MemorialDates,
    MicrowaveTime,
    Base64,
    HashGenerator,
    UuidGenerator,
    QrGenerator,
    YamlJson,
    HeaderInspector,
    IpLookup,
}

impl ToolId {
    pub const ALL: [ToolId; 17] = [
        ToolId::AreaConverter,
        ToolId::PressureConverter,
        ToolId::SpeedConverter,
        ToolId::MemoryConverter,
        ToolId::CaseConverter,
        ToolId::WidthConverter,
        ToolId::BaseConverter,
        ToolId::AgeCalculator,
        ToolId::MemorialDates,
        ToolId::MicrowaveTime,
        ToolId::Base64,
        ToolId::HashGenerator,
        ToolId::UuidGenerator,
        ToolId::QrGenerator,
        ToolId::YamlJson,
        ToolId::HeaderInspector,
        ToolId::IpLookup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::AreaConverter => "area-converter",
            ToolId::PressureConverter => "pressure-converter",
            ToolId::SpeedConverter => "speed-converter",
            ToolId::MemoryConverter => "memory-converter",
            ToolId::CaseConverter => "case-converter",
            ToolId::WidthConverter => "width-converter",
            ToolId::BaseConverter => "base-converter",
            ToolId::AgeCalculator => "age-calculator",
            ToolId::MemorialDates => "memorial-dates",
            ToolId::MicrowaveTime => "microwave-time",
            ToolId::Base64 => "base64",
            ToolId::HashGenerator => "hash-generator",
            ToolId::UuidGenerator => "uuid-generator",
            ToolId::QrGenerator => "qr-generator",
            ToolId::YamlJson => "yaml-json",
            ToolId::HeaderInspector => "header-inspector",
            ToolId::IpLookup => "ip-lookup",
        }
    }

    pub fn info(&self) -> ToolInfo {
        let (name, category) = match self {
            ToolId::AreaConverter => ("Area converter", ToolCategory::Converter),
            ToolId::PressureConverter => ("Pressure converter", ToolCategory::Converter),
            ToolId::SpeedConverter => ("Speed converter", ToolCategory::Converter),
            ToolId::MemoryConverter => ("Memory size converter", ToolCategory::Converter),
            ToolId::CaseConverter => ("Text case converter", ToolCategory::Text),
            ToolId::WidthConverter => ("Full/half-width converter", ToolCategory::Text),
            ToolId::BaseConverter => ("Number base converter", ToolCategory::Converter),
            ToolId::AgeCalculator => ("Age calculator", ToolCategory::Calculator),
            ToolId::MemorialDates => ("Memorial date calculator", ToolCategory::Calculator),
            ToolId::MicrowaveTime => ("Microwave time converter", ToolCategory::Calculator),
            ToolId::Base64 => ("Base64 encoder/decoder", ToolCategory::Text),
            ToolId::HashGenerator => ("Hash generator", ToolCategory::Generator),
            ToolId::UuidGenerator => ("UUID generator", ToolCategory::Generator),
            ToolId::QrGenerator => ("QR code generator", ToolCategory::Generator),
            ToolId::YamlJson => ("YAML/JSON converter", ToolCategory::Text),
            ToolId::HeaderInspector => ("HTTP header inspector", ToolCategory::Network),
            ToolId::IpLookup => ("IP address lookup", ToolCategory::Network),
        };

        ToolInfo {
            id: *self,
            name,
            category,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub id: ToolId,
    pub name: &'static str,
    pub category: ToolCategory,
}

pub fn catalog() -> Vec<ToolInfo> {
    ToolId::ALL.iter().map(ToolId::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for id in ToolId::ALL {
            assert_eq!(id.as_str().parse::<ToolId>().unwrap(), id);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for id in ToolId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_lenient_on_case_and_separator() {
        assert_eq!("UUID_Generator".parse::<ToolId>().unwrap(), ToolId::UuidGenerator);
        assert!("spreadsheet".parse::<ToolId>().is_err());
    }

    #[test]
    fn test_catalog_covers_every_tool() {
        let catalog = catalog();
        assert_eq!(catalog.len(), ToolId::ALL.len());
        assert_eq!(catalog[0].id, ToolId::AreaConverter);
        assert_eq!(catalog[0].category, ToolCategory::Converter);
    }
}
