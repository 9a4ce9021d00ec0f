pub mod headers;
pub mod ip;

use crate::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(name = "net")]
#[command(about = "HTTP header inspection and public IP lookup")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the response headers of one or more URLs
    #[clap(name = "headers")]
    Headers(headers::HeadersOptions),

    /// Show this machine's public IP address
    #[clap(name = "ip")]
    Ip(ip::IpOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Headers(options) => headers::run(options, global).await,
        Commands::Ip(options) => ip::run(options, global).await,
    }
}
