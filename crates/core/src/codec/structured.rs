use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Pretty { indent: usize },
    Minified,
}

impl Default for JsonStyle {
    fn default() -> Self {
        JsonStyle::Pretty { indent: 2 }
    }
}

fn parse_json(input: &str) -> Result<Value, CodecError> {
    serde_json::from_str(input).map_err(|e| CodecError::MalformedJson {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

fn parse_yaml(input: &str) -> Result<Value, CodecError> {
    serde_yaml::from_str(input).map_err(|e| {
        let (line, column) = e
            .location()
            .map(|location| (location.line(), location.column()))
            .unwrap_or((0, 0));
        CodecError::MalformedYaml {
            line,
            column,
            message: e.to_string(),
        }
    })
}

fn write_json(value: &Value, style: JsonStyle) -> Result<String, CodecError> {
    match style {
        JsonStyle::Minified => {
            serde_json::to_string(value).map_err(|e| CodecError::Serialization(e.to_string()))
        }
        JsonStyle::Pretty { indent } => {
            let indent = " ".repeat(indent);
            let mut buffer = Vec::new();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            value
                .serialize(&mut serializer)
                .map_err(|e| CodecError::Serialization(e.to_string()))?;
            String::from_utf8(buffer).map_err(|_| CodecError::InvalidUtf8)
        }
    }
}

/// Re-indent or minify a JSON document
pub fn format_json(input: &str, style: JsonStyle) -> Result<String, CodecError> {
    let value = parse_json(input)?;
    write_json(&value, style)
}

pub fn yaml_to_json(input: &str, style: JsonStyle) -> Result<String, CodecError> {
    let value = parse_yaml(input)?;
    write_json(&value, style)
}

pub fn json_to_yaml(input: &str) -> Result<String, CodecError> {
    let value = parse_json(input)?;
    serde_yaml::to_string(&value).map_err(|e| CodecError::Serialization(e.to_string()))
}
