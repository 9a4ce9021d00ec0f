use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use quicktools_core::units::{
    build_output, convert_all, format_value, AreaTable, ConversionOutput, ConversionTable,
    ConvertError, Converter, MemoryMode, MemoryTable, PressureTable, SpeedTable,
};
use std::str::FromStr;

#[derive(Debug, clap::Parser)]
#[command(name = "convert")]
#[command(about = "Convert area, pressure, speed and memory size units")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Area (m², ha, acre, ft², pyeong, ...)
    #[clap(name = "area")]
    Area(ConvertOptions),

    /// Pressure (Pa, kPa, bar, atm, psi, mmHg, ...)
    #[clap(name = "pressure")]
    Pressure(ConvertOptions),

    /// Speed (m/s, km/h, mph, knot, mach, ...)
    #[clap(name = "speed")]
    Speed(ConvertOptions),

    /// Memory size (bit, B, KB, MB, GB, ...)
    #[clap(name = "memory")]
    Memory(MemoryOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// Amount to convert
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: String,

    /// Source unit (symbol or name)
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target unit; omit it to list the amount in every unit
    #[arg(value_name = "TO")]
    pub to: Option<String>,

    /// Exchange the source and target units before converting
    #[arg(long)]
    pub swap: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct MemoryOptions {
    #[clap(flatten)]
    pub convert: ConvertOptions,

    /// Step prefixes by 1000 instead of 1024
    #[arg(long)]
    pub decimal: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Area(options) => run_conversion(AreaTable, options, &global),
        Commands::Pressure(options) => run_conversion(PressureTable, options, &global),
        Commands::Speed(options) => run_conversion(SpeedTable, options, &global),
        Commands::Memory(options) => {
            let mode = if options.decimal {
                MemoryMode::Decimal
            } else {
                MemoryMode::Binary
            };
            run_conversion(MemoryTable::new(mode), options.convert, &global)
        }
    }
}

fn parse_unit<T>(name: &str) -> Result<T::Unit>
where
    T: ConversionTable,
    T::Unit: FromStr<Err = ConvertError>,
{
    name.parse::<T::Unit>()
        .map_err(|e| Error::InvalidInput(e.to_string()).into())
}

fn invalid_amount(amount: &str) -> color_eyre::eyre::Report {
    Error::InvalidInput(f!("'{amount}' is not a finite number")).into()
}

fn run_conversion<T>(table: T, options: ConvertOptions, global: &crate::Global) -> Result<()>
where
    T: ConversionTable + Copy,
    T::Unit: FromStr<Err = ConvertError>,
{
    let from = parse_unit::<T>(&options.from)?;

    if global.verbose {
        eprintln!(
            "Converting {} through base unit {}",
            table.quantity(),
            table.base_unit()
        );
    }

    match &options.to {
        Some(to) => {
            let to = parse_unit::<T>(to)?;
            let output = convert_single(table, &options.amount, from, to, options.swap)?;

            if options.json {
                print_json(&output)?;
            } else {
                println!(
                    "{} {} = {} {}",
                    format_value(output.amount),
                    output.from,
                    output.formatted.bright_green().bold(),
                    output.to
                );
            }
        }
        None => {
            let outputs = convert_every_unit(table, &options.amount, from)?;

            if options.json {
                print_json(&outputs)?;
            } else {
                let mut table = new_table();
                table.add_row(prettytable::row!["Unit", "Value"]);
                for output in &outputs {
                    table.add_row(prettytable::row![output.to, output.formatted]);
                }
                table.printstd();
            }
        }
    }

    Ok(())
}

/// One conversion through [`Converter`], which keeps the amount across a swap
pub fn convert_single<T: ConversionTable + Copy>(
    table: T,
    amount: &str,
    from: T::Unit,
    to: T::Unit,
    swap: bool,
) -> Result<ConversionOutput> {
    let mut converter = Converter::new(table, from, to);
    converter.set_input(amount);
    if swap {
        converter.swap();
    }

    let amount = converter
        .last_valid_input()
        .ok_or_else(|| invalid_amount(amount))?;

    log::debug!(
        "{} {} -> {} = {}",
        amount,
        converter.from_unit(),
        converter.to_unit(),
        converter.formatted_output()
    );

    build_output(&table, amount, converter.from_unit(), converter.to_unit())
        .ok_or_else(|| Error::InvalidInput("result is not a finite number".to_string()).into())
}

pub fn convert_every_unit<T: ConversionTable + Copy>(
    table: T,
    amount: &str,
    from: T::Unit,
) -> Result<Vec<ConversionOutput>> {
    let amount = quicktools_core::units::parse_amount(amount).ok_or_else(|| invalid_amount(amount))?;

    Ok(convert_all(&table, amount, from)
        .into_iter()
        .filter_map(|(unit, _)| build_output(&table, amount, from, unit))
        .collect())
}
