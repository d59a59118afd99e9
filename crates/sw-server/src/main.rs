//! Command-line frontend for the Spielwiese GraphQL server.

mod commands;

use std::net::IpAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sw",
    about = "Spielwiese: a GraphQL demo API of dice, quotes, and messages",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "SW_PORT", default_value_t = 4000)]
        port: u16,

        /// RNG seed for reproducible dice rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the GraphQL schema as SDL
    Schema,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, seed } => commands::serve::run(host, port, seed).await,
        Commands::Schema => commands::schema::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
