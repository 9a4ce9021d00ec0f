use crate::prelude::{println, *};
use quicktools_core::codec::{
    decode_base64_text, encode_base64, hash_all, hash_hex, Base64Variant, HashAlgorithm,
};

use super::invalid;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, clap::Args, Clone)]
pub struct Base64Options {
    #[arg(value_enum)]
    pub direction: Direction,

    /// Text to encode or Base64 to decode, `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Use the URL and filename safe alphabet (`-` and `_`)
    #[arg(long)]
    pub url_safe: bool,

    /// Omit `=` padding when encoding
    #[arg(long)]
    pub no_pad: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct HashOptions {
    /// Text to hash, `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// md5, sha224, sha256, sha384 or sha512; omit it for every algorithm
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_base64(options: Base64Options, _global: crate::Global) -> Result<()> {
    let variant = if options.url_safe {
        Base64Variant::UrlSafe
    } else {
        Base64Variant::Standard
    };

    let text = crate::input::read_text(&options.input)?;
    let output = match options.direction {
        Direction::Encode => encode_base64(text.as_bytes(), variant, !options.no_pad),
        Direction::Decode => decode_base64_text(&text, variant).map_err(invalid)?,
    };

    println!("{output}");
    Ok(())
}

pub fn run_hash(options: HashOptions, _global: crate::Global) -> Result<()> {
    let text = crate::input::read_text(&options.input)?;

    let digests = match &options.algorithm {
        Some(algorithm) => {
            let algorithm: HashAlgorithm = algorithm.parse().map_err(invalid)?;
            vec![(algorithm, hash_hex(text.as_bytes(), algorithm))]
        }
        None => hash_all(text.as_bytes()),
    };

    if options.json {
        let map: serde_json::Map<String, serde_json::Value> = digests
            .into_iter()
            .map(|(algorithm, digest)| (algorithm.to_string(), digest.into()))
            .collect();
        return print_json(&map);
    }

    if let [(_, digest)] = digests.as_slice() {
        println!("{digest}");
        return Ok(());
    }

    let mut table = new_table();
    for (algorithm, digest) in &digests {
        table.add_row(prettytable::row![algorithm, digest]);
    }
    table.printstd();

    Ok(())
}
