use crate::prelude::{println, *};
use quicktools_core::codec::{format_json, json_to_yaml, yaml_to_json, JsonStyle};

use super::invalid;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum YamlDirection {
    /// YAML in, JSON out
    ToJson,
    /// JSON in, YAML out
    FromJson,
}

#[derive(Debug, clap::Args, Clone)]
pub struct JsonOptions {
    /// JSON document, `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Print on a single line
    #[arg(short, long)]
    pub minify: bool,

    /// Spaces per indentation level
    #[arg(long, default_value = "2")]
    pub indent: usize,
}

#[derive(Debug, clap::Args, Clone)]
pub struct YamlOptions {
    #[arg(value_enum)]
    pub direction: YamlDirection,

    /// Document to convert, `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Print JSON output on a single line
    #[arg(short, long)]
    pub minify: bool,

    /// Spaces per indentation level of JSON output
    #[arg(long, default_value = "2")]
    pub indent: usize,
}

fn style(minify: bool, indent: usize) -> JsonStyle {
    if minify {
        JsonStyle::Minified
    } else {
        JsonStyle::Pretty { indent }
    }
}

pub fn run_json(options: JsonOptions, _global: crate::Global) -> Result<()> {
    let input = crate::input::read_text(&options.input)?;
    let output = format_json(&input, style(options.minify, options.indent)).map_err(invalid)?;
    println!("{output}");
    Ok(())
}

pub fn run_yaml(options: YamlOptions, _global: crate::Global) -> Result<()> {
    let input = crate::input::read_text(&options.input)?;

    let output = match options.direction {
        YamlDirection::ToJson => {
            yaml_to_json(&input, style(options.minify, options.indent)).map_err(invalid)?
        }
        YamlDirection::FromJson => json_to_yaml(&input).map_err(invalid)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
