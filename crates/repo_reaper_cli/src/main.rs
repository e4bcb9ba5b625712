use std::io;
use std::io::Write;

use clap::{Parser, Subcommand};

mod commands;
mod config;

mod errors;
use errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::auth_cmd::AuthCommands;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// RepoReaper CLI: Bulk-delete your own GitHub repositories
#[derive(Parser)]
#[command(name = "repo-reaper")]
#[command(about = "Bulk-delete your own GitHub repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Auth(AuthCommands),

    /// List the authenticated user's repositories
    List,

    /// Select and delete repositories after a typed confirmation
    Purge,

    /// Show the CLI version
    Version,
}

fn ask_user_for_value(request: &str) -> Result<String, Error> {
    print!("{}", request);

    io::stdout().flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut temp = String::new();
    io::stdin().read_line(&mut temp).map_err(Error::ReadInput)?;
    Ok(temp.trim().to_string())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("REPO_REAPER_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Auth(cmd) => {
            if let Err(e) = crate::commands::auth_cmd::execute(cmd).await {
                error!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::List => {
            if let Err(e) = crate::commands::list_cmd::execute(&ask_user_for_value).await {
                error!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Purge => {
            if let Err(e) = crate::commands::purge_cmd::execute(&ask_user_for_value).await {
                error!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("repo-reaper {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
