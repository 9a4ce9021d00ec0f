use crate::prelude::{println, *};
use colored::Colorize;
use quicktools_core::dates::calculate_age;

#[derive(Debug, clap::Args, Clone)]
pub struct AgeOptions {
    /// Date of birth (YYYY-MM-DD)
    #[arg(value_name = "BIRTH")]
    pub birth: String,

    /// Compute the age on this date instead of today
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: AgeOptions, _global: crate::Global) -> Result<()> {
    let birth = super::parse(&options.birth)?;
    let target = super::date_or_today(options.on.as_deref())?;

    log::debug!("age of {birth} on {target}");

    let age = calculate_age(birth, target).map_err(super::invalid)?;

    if options.json {
        return print_json(&age);
    }

    println!(
        "{}",
        f!("{} years, {} months, {} days", age.years, age.months, age.days)
            .bright_green()
            .bold()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["Total days", age.total_days]);
    table.add_row(prettytable::row!["Total weeks", age.total_weeks]);
    table.add_row(prettytable::row!["Total months", age.total_months]);
    table.add_row(prettytable::row!["Year age", age.year_age]);
    table.add_row(prettytable::row!["Counting age", age.counting_age]);
    table.add_row(prettytable::row![
        "Next birthday",
        f!("{} (in {} days)", age.next_birthday, age.days_until_next_birthday)
    ]);
    table.printstd();

    if age.is_birthday {
        println!("{}", "Happy birthday!".bright_yellow());
    }

    Ok(())
}
