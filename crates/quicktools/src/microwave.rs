use crate::prelude::{println, *};
use colored::Colorize;
use quicktools_core::microwave::{
    convert_cook_time, cook_time_table, format_duration, parse_duration, CookTime, MicrowaveError,
};

#[derive(Debug, clap::Parser)]
#[command(name = "microwave")]
#[command(about = "Convert microwave cooking times between wattages")]
pub struct App {
    /// Cooking time on the package: 90, 1:30 or 1m30s
    #[arg(value_name = "TIME")]
    pub time: String,

    /// Wattage the time was written for
    #[arg(short, long, value_name = "WATTS")]
    pub from: u32,

    /// Wattage of your oven; omit it for a table of common wattages
    #[arg(short, long, value_name = "WATTS")]
    pub to: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn invalid(error: MicrowaveError) -> color_eyre::eyre::Report {
    Error::InvalidInput(error.to_string()).into()
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let seconds = parse_duration(&app.time).map_err(invalid)?;

    match app.to {
        Some(to) => {
            let converted = convert_cook_time(seconds, app.from, to).map_err(invalid)?;
            let cook_time = CookTime {
                watts: to,
                seconds: converted,
                formatted: format_duration(converted),
            };

            if app.json {
                print_json(&cook_time)?;
            } else {
                println!(
                    "{} at {}W = {} at {}W",
                    format_duration(seconds),
                    app.from,
                    cook_time.formatted.bright_green().bold(),
                    to
                );
            }
        }
        None => {
            let rows = cook_time_table(seconds, app.from).map_err(invalid)?;

            if app.json {
                print_json(&rows)?;
            } else {
                let mut table = new_table();
                table.add_row(prettytable::row!["Watts", "Time"]);
                for row in &rows {
                    table.add_row(prettytable::row![f!("{}W", row.watts), row.formatted]);
                }
                table.printstd();
            }
        }
    }

    Ok(())
}
