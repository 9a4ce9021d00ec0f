mod base;
mod case;
mod width;

use crate::prelude::{println, *};
use quicktools_core::text::text_stats;

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Text case, full/half width, number bases and statistics")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert text between camelCase, snake_case, kebab-case and friends
    #[clap(name = "case")]
    Case(case::CaseOptions),

    /// Convert between half-width and full-width characters
    #[clap(name = "width")]
    Width(width::WidthOptions),

    /// Convert integers between binary, octal, decimal and hexadecimal
    #[clap(name = "base")]
    Base(base::BaseOptions),

    /// Count characters, words, lines and bytes
    #[clap(name = "stats")]
    Stats(StatsOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct StatsOptions {
    /// Text to measure, `-` reads stdin
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Case(options) => case::run(options, global),
        Commands::Width(options) => width::run(options, global),
        Commands::Base(options) => base::run(options, global),
        Commands::Stats(options) => run_stats(options),
    }
}

fn run_stats(options: StatsOptions) -> Result<()> {
    let text = crate::input::read_text(&options.text)?;
    let stats = text_stats(&text);

    if options.json {
        return print_json(&stats);
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Characters", stats.characters]);
    table.add_row(prettytable::row!["Without spaces", stats.characters_no_spaces]);
    table.add_row(prettytable::row!["Words", stats.words]);
    table.add_row(prettytable::row!["Lines", stats.lines]);
    table.add_row(prettytable::row!["Bytes", stats.bytes]);
    table.printstd();

    Ok(())
}
