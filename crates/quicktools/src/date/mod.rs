mod age;
mod memorial;

use crate::prelude::{println, *};
use chrono::{Datelike, NaiveDate};
use quicktools_core::dates::{
    add_days, add_months, add_years, date_difference, days_between, days_in_month, parse_date,
    DateError,
};

#[derive(Debug, clap::Parser)]
#[command(name = "date")]
#[command(about = "Age, memorial dates and calendar arithmetic")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Exact age in years, months and days
    #[clap(name = "age")]
    Age(age::AgeOptions),

    /// Memorial days (3rd, every 7th until the 49th, 100th) and anniversaries
    #[clap(name = "memorial")]
    Memorial(memorial::MemorialOptions),

    /// Shift a date by days, months and years
    #[clap(name = "add")]
    Add(AddOptions),

    /// Calendar difference between two dates
    #[clap(name = "diff")]
    Diff(DiffOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct AddOptions {
    /// Start date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub years: i32,

    /// Month arithmetic clamps to the last day of shorter months
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub months: i32,

    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub days: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct DiffOptions {
    /// Earlier date (YYYY-MM-DD)
    #[arg(value_name = "START")]
    pub start: String,

    /// Later date (YYYY-MM-DD)
    #[arg(value_name = "END")]
    pub end: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Age(options) => age::run(options, global),
        Commands::Memorial(options) => memorial::run(options, global),
        Commands::Add(options) => run_add(options),
        Commands::Diff(options) => run_diff(options),
    }
}

/// Wrap a date error as invalid user input
pub fn invalid(error: DateError) -> color_eyre::eyre::Report {
    Error::InvalidInput(error.to_string()).into()
}

pub fn parse(value: &str) -> Result<NaiveDate> {
    parse_date(value).map_err(invalid)
}

/// `value` or the local calendar date
pub fn date_or_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(value) => parse(value),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn shift(date: NaiveDate, years: i32, months: i32, days: i64) -> Result<NaiveDate> {
    let shifted = add_years(date, years).map_err(invalid)?;
    let shifted = add_months(shifted, months).map_err(invalid)?;
    add_days(shifted, days).map_err(invalid)
}

fn run_add(options: AddOptions) -> Result<()> {
    let date = parse(&options.date)?;
    let result = shift(date, options.years, options.months, options.days)?;

    if options.json {
        return print_json(&serde_json::json!({
            "date": date,
            "result": result,
            "weekday": result.format("%A").to_string(),
            "days": days_between(date, result),
            "daysInMonth": days_in_month(result.year(), result.month()),
        }));
    }

    println!("{} ({})", result, result.format("%A"));
    Ok(())
}

fn run_diff(options: DiffOptions) -> Result<()> {
    let start = parse(&options.start)?;
    let end = parse(&options.end)?;
    let difference = date_difference(start, end).map_err(invalid)?;
    let days = days_between(start, end);

    if options.json {
        return print_json(&serde_json::json!({
            "years": difference.years,
            "months": difference.months,
            "days": difference.days,
            "totalDays": days,
        }));
    }

    println!(
        "{}y {}m {}d ({} days)",
        difference.years, difference.months, difference.days, days
    );
    Ok(())
}
