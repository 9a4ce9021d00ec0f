use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod codec;
mod convert;
mod date;
mod error;
mod favorites;
mod input;
mod microwave;
mod net;
mod prelude;
mod serve;
mod text;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Everyday converters, calculators and encoders"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "QUICKTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Key-value store file used for favorites
    #[clap(long, env = "QUICKTOOLS_STORE", global = true)]
    store: Option<PathBuf>,

    /// Timeout for outbound HTTP requests, in seconds
    #[clap(long, env = "QUICKTOOLS_TIMEOUT", global = true, default_value = "10")]
    timeout: u64,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert area, pressure, speed and memory size units
    Convert(crate::convert::App),

    /// Text case, full/half width, number bases and statistics
    Text(crate::text::App),

    /// Age, memorial dates and calendar arithmetic
    Date(crate::date::App),

    /// Convert microwave cooking times between wattages
    Microwave(crate::microwave::App),

    /// Base64, hashes, UUIDs, QR codes, JSON and YAML
    Codec(crate::codec::App),

    /// Manage favorite tools
    Favorites(crate::favorites::App),

    /// HTTP header inspection and public IP lookup
    Net(crate::net::App),

    /// Serve the HTTP API
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Date(sub_app) => crate::date::run(sub_app, app.global),
        SubCommands::Microwave(sub_app) => crate::microwave::run(sub_app, app.global),
        SubCommands::Codec(sub_app) => crate::codec::run(sub_app, app.global),
        SubCommands::Favorites(sub_app) => crate::favorites::run(sub_app, app.global),
        SubCommands::Net(sub_app) => crate::net::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
