use crate::prelude::{println, *};
use colored::Colorize;
use quicktools_core::codec::{format_uuid, inspect_uuid, UuidFormat};
use uuid::Uuid;

use super::invalid;

#[derive(Debug, clap::Args, Clone)]
pub struct UuidOptions {
    /// How many UUIDs to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    #[arg(long)]
    pub uppercase: bool,

    #[arg(long)]
    pub no_hyphens: bool,

    /// Wrap each UUID in `{}`
    #[arg(long)]
    pub braces: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct InspectOptions {
    /// UUID in any common spelling
    #[arg(value_name = "UUID")]
    pub uuid: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// `count` fresh v4 UUIDs spelled according to `format`
pub fn generate(count: usize, format: &UuidFormat) -> Vec<String> {
    (0..count)
        .map(|_| format_uuid(Uuid::new_v4(), format))
        .collect()
}

pub fn run_generate(options: UuidOptions, _global: crate::Global) -> Result<()> {
    if options.count == 0 {
        return Err(Error::InvalidInput("count must be at least 1".to_string()).into());
    }

    let format = UuidFormat {
        uppercase: options.uppercase,
        hyphens: !options.no_hyphens,
        braces: options.braces,
    };
    let ids = generate(options.count, &format);

    if options.json {
        return print_json(&ids);
    }

    for id in ids {
        println!("{id}");
    }

    Ok(())
}

pub fn run_inspect(options: InspectOptions, _global: crate::Global) -> Result<()> {
    let info = inspect_uuid(&options.uuid).map_err(invalid)?;

    if options.json {
        return print_json(&info);
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Canonical", info.canonical]);
    table.add_row(prettytable::row!["Version", info.version]);
    table.add_row(prettytable::row!["Variant", info.variant]);
    table.printstd();

    if info.is_nil {
        println!("{}", "This is the nil UUID".yellow());
    }

    Ok(())
}
