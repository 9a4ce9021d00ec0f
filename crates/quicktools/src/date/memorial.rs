use crate::prelude::{println, *};
use colored::Colorize;
use quicktools_core::dates::{memorial_schedule, next_memorial, upcoming, DayCounting, MemorialDate};

#[derive(Debug, clap::Args, Clone)]
pub struct MemorialOptions {
    /// Date of death (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub death: String,

    /// Do not count the day of death as day 1
    #[arg(long)]
    pub exclusive: bool,

    /// Number of yearly anniversaries to include
    #[arg(long, default_value = "3")]
    pub anniversaries: u32,

    /// Only list dates on or after today
    #[arg(long)]
    pub upcoming: bool,

    /// Reference date for `--upcoming` and the day counts
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: MemorialOptions, _global: crate::Global) -> Result<()> {
    let death = super::parse(&options.death)?;
    let today = super::date_or_today(options.today.as_deref())?;
    let counting = if options.exclusive {
        DayCounting::Exclusive
    } else {
        DayCounting::Inclusive
    };

    let schedule: Vec<MemorialDate> = memorial_schedule(death, counting, options.anniversaries)
        .map_err(super::invalid)?
        .into_iter()
        .map(|entry| entry.with_reference(today))
        .collect();

    let next = next_memorial(&schedule, today).map(|entry| entry.kind);
    let entries: Vec<&MemorialDate> = if options.upcoming {
        upcoming(&schedule, today)
    } else {
        schedule.iter().collect()
    };

    if options.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("{}", "No upcoming memorial dates.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Memorial", "Date", "Weekday", "Days"]);
    for entry in entries {
        let days = entry
            .days_from_today
            .map(|days| days.to_string())
            .unwrap_or_default();
        let label = if Some(entry.kind) == next {
            f!("{} ←", entry.label)
        } else {
            entry.label.clone()
        };
        table.add_row(prettytable::row![label, entry.date, entry.weekday, days]);
    }
    table.printstd();

    Ok(())
}
