mod data;
mod encode;
mod ids;
mod qr;

use crate::prelude::*;
use quicktools_core::codec::CodecError;

#[derive(Debug, clap::Parser)]
#[command(name = "codec")]
#[command(about = "Base64, hashes, UUIDs, QR codes, JSON and YAML")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Encode or decode Base64
    #[clap(name = "base64")]
    Base64(encode::Base64Options),

    /// MD5 and SHA-2 digests
    #[clap(name = "hash")]
    Hash(encode::HashOptions),

    /// Generate random (v4) UUIDs
    #[clap(name = "uuid")]
    Uuid(ids::UuidOptions),

    /// Parse a UUID and show its version and variant
    #[clap(name = "uuid-inspect")]
    UuidInspect(ids::InspectOptions),

    /// Render a QR code as terminal text or SVG
    #[clap(name = "qr")]
    Qr(qr::QrOptions),

    /// Pretty-print or minify JSON
    #[clap(name = "json")]
    Json(data::JsonOptions),

    /// Convert between YAML and JSON
    #[clap(name = "yaml")]
    Yaml(data::YamlOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Base64(options) => encode::run_base64(options, global),
        Commands::Hash(options) => encode::run_hash(options, global),
        Commands::Uuid(options) => ids::run_generate(options, global),
        Commands::UuidInspect(options) => ids::run_inspect(options, global),
        Commands::Qr(options) => qr::run(options, global),
        Commands::Json(options) => data::run_json(options, global),
        Commands::Yaml(options) => data::run_yaml(options, global),
    }
}

fn invalid(error: CodecError) -> color_eyre::eyre::Report {
    Error::InvalidInput(error.to_string()).into()
}
