use crate::prelude::{println, *};
use colored::Colorize;
use quicktools_core::text::{convert_all_bases, convert_base, BaseError, Radix};

#[derive(Debug, clap::Args, Clone)]
pub struct BaseOptions {
    /// Integer to convert; prefixes (0b, 0o, 0x), `_` and a sign are accepted
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Radix of VALUE: 2, 8, 10, 16 or bin, oct, dec, hex
    #[arg(short, long, default_value = "10")]
    pub from: String,

    /// Target radix; omit it for every base
    #[arg(short, long)]
    pub to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_radix(value: &str) -> Result<Radix> {
    value
        .parse()
        .map_err(|e: BaseError| Error::InvalidInput(e.to_string()).into())
}

pub fn run(options: BaseOptions, _global: crate::Global) -> Result<()> {
    let from = parse_radix(&options.from)?;

    match &options.to {
        Some(to) => {
            let to = parse_radix(to)?;
            let converted = convert_base(&options.value, from, to)
                .map_err(|e| Error::InvalidInput(e.to_string()))?;

            if options.json {
                print_json(&serde_json::json!({ "radix": to.value(), "value": converted }))?;
            } else {
                let (sign, digits) = match converted.strip_prefix('-') {
                    Some(digits) => ("-", digits),
                    None => ("", converted.as_str()),
                };
                println!("{sign}{}{digits}", to.prefix().bright_black());
            }
        }
        None => {
            let all = convert_all_bases(&options.value, from)
                .map_err(|e| Error::InvalidInput(e.to_string()))?;

            if options.json {
                print_json(&all)?;
            } else {
                let mut table = new_table();
                table.add_row(prettytable::row![Radix::Binary, all.binary]);
                table.add_row(prettytable::row![Radix::Octal, all.octal]);
                table.add_row(prettytable::row![Radix::Decimal, all.decimal]);
                table.add_row(prettytable::row![Radix::Hex, all.hex]);
                table.printstd();
            }
        }
    }

    Ok(())
}
