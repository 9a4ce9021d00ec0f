use crate::prelude::{println, *};
use quicktools_core::text::{convert_width, WidthDirection, WidthFilter};

#[derive(Debug, Clone, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Full-width (ＡＢＣ１２３)
    Full,
    /// Half-width (ABC123)
    Half,
}

impl From<Target> for WidthDirection {
    fn from(target: Target) -> Self {
        match target {
            Target::Full => WidthDirection::ToFull,
            Target::Half => WidthDirection::ToHalf,
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct WidthOptions {
    /// Width to convert to
    #[arg(value_enum)]
    pub to: Target,

    /// Text to convert, `-` reads stdin
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Characters to touch: all, alphanumeric, alphabet, digit, symbol, space
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: WidthOptions, _global: crate::Global) -> Result<()> {
    let text = crate::input::read_line(&options.text)?;
    let filter: WidthFilter = options
        .filter
        .parse()
        .map_err(|e: quicktools_core::text::WidthError| Error::InvalidInput(e.to_string()))?;

    let converted = convert_width(&text, options.to.into(), filter);

    if options.json {
        print_json(&serde_json::json!({
            "filter": filter,
            "text": converted,
        }))
    } else {
        println!("{converted}");
        Ok(())
    }
}
