mod store;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use quicktools_core::favorites::Favorites;
use quicktools_core::tools::{catalog, ToolId};

pub use store::{default_store_path, FileStore};

#[derive(Debug, clap::Parser)]
#[command(name = "favorites")]
#[command(about = "Manage favorite tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List favorite tools in the order they were added
    #[clap(name = "list")]
    List(ListOptions),

    /// Mark a tool as favorite
    #[clap(name = "add")]
    Add(ToolArg),

    /// Unmark a favorite tool
    #[clap(name = "remove")]
    Remove(ToolArg),

    /// Add the tool if it is not a favorite, remove it otherwise
    #[clap(name = "toggle")]
    Toggle(ToolArg),

    /// Forget every favorite
    #[clap(name = "clear")]
    Clear,

    /// List every tool, favorites first
    #[clap(name = "tools")]
    Tools(ListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ToolArg {
    /// Tool id, e.g. `uuid-generator`
    #[arg(value_name = "TOOL")]
    pub tool: String,
}

fn open(global: &crate::Global) -> Result<Favorites<FileStore>> {
    let path = match &global.store {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };

    if global.verbose {
        eprintln!("Using store {}", path.display());
    }

    Ok(Favorites::new(FileStore::new(path)))
}

fn parse_tool(tool: &str) -> Result<ToolId> {
    tool.parse::<ToolId>()
        .map_err(|_| Error::UnknownTool(tool.to_string()).into())
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let mut favorites = open(&global)?;

    match app.command {
        Commands::List(options) => {
            let ids = favorites.list().map_err(Error::from)?;

            if options.json {
                return print_json(&ids);
            }

            if ids.is_empty() {
                println!("{}", "No favorite tools yet.".yellow());
                return Ok(());
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["Tool", "Name"]);
            for id in &ids {
                let name = id
                    .parse::<ToolId>()
                    .map(|tool| tool.info().name)
                    .unwrap_or("(no longer available)");
                table.add_row(prettytable::row![id, name]);
            }
            table.printstd();
        }
        Commands::Add(arg) => {
            let tool = parse_tool(&arg.tool)?;
            if favorites.add(tool.as_str()).map_err(Error::from)? {
                println!("{} added to favorites", tool.as_str().bright_green());
            } else {
                println!("{} is already a favorite", tool.as_str());
            }
        }
        Commands::Remove(arg) => {
            let tool = parse_tool(&arg.tool)?;
            if favorites.remove(tool.as_str()).map_err(Error::from)? {
                println!("{} removed from favorites", tool.as_str().bright_red());
            } else {
                println!("{} is not a favorite", tool.as_str());
            }
        }
        Commands::Toggle(arg) => {
            let tool = parse_tool(&arg.tool)?;
            if favorites.toggle(tool.as_str()).map_err(Error::from)? {
                println!("{} added to favorites", tool.as_str().bright_green());
            } else {
                println!("{} removed from favorites", tool.as_str().bright_red());
            }
        }
        Commands::Clear => {
            favorites.clear().map_err(Error::from)?;
            println!("Favorites cleared");
        }
        Commands::Tools(options) => {
            let ids = favorites.list().map_err(Error::from)?;
            let mut tools = catalog();
            tools.sort_by_key(|tool| !ids.iter().any(|id| id == tool.id.as_str()));

            if options.json {
                return print_json(&tools);
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["", "Tool", "Name", "Category"]);
            for tool in &tools {
                let star = if ids.iter().any(|id| id == tool.id.as_str()) {
                    "★"
                } else {
                    ""
                };
                table.add_row(prettytable::row![star, tool.id, tool.name, tool.category]);
            }
            table.printstd();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_rejects_unknown_ids() {
        assert_eq!(parse_tool("qr-generator").unwrap(), ToolId::QrGenerator);

        let err = parse_tool("teleporter").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownTool(_))
        ));
    }
}
