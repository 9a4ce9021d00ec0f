use crate::prelude::{eprintln, println, *};
use quicktools_core::codec::{render_qr, EcLevel, QrError, QrFormat};
use std::path::PathBuf;

#[derive(Debug, clap::Args, Clone)]
pub struct QrOptions {
    /// Text or URL to encode, `-` reads stdin
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Error correction level: L, M, Q or H
    #[arg(short, long, default_value = "M")]
    pub ec_level: String,

    /// Render SVG instead of terminal blocks
    #[arg(long)]
    pub svg: bool,

    /// Drop the white border around the symbol
    #[arg(long)]
    pub no_quiet_zone: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(options: QrOptions, global: crate::Global) -> Result<()> {
    let text = crate::input::read_line(&options.text)?;
    let ec_level: EcLevel = options
        .ec_level
        .parse()
        .map_err(|e: QrError| Error::InvalidInput(e.to_string()))?;

    let rendered = render_qr(
        &text,
        &quicktools_core::codec::QrOptions {
            ec_level,
            format: if options.svg {
                QrFormat::Svg
            } else {
                QrFormat::Text
            },
            quiet_zone: !options.no_quiet_zone,
        },
    )
    .map_err(|e| Error::InvalidInput(e.to_string()))?;

    match options.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| f!("Failed to write QR code to {}", path.display()))?;
            if global.verbose {
                eprintln!("QR code written to {}", path.display());
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
