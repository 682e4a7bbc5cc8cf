use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail};

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod telemetry;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::state::platform::paths;
use crate::state::{App, AppConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// tokenbridge - bridge tokens between EVM chains from the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read the configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the in-memory sandbox wallet, chains and bridge
    #[arg(long)]
    sandbox: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version
    Version,
    /// Print the configured chains
    Chains,
    /// Write the default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Logging is best effort; the UI still works without a log file.
    match paths::log_file() {
        Ok(log_path) => {
            if let Err(e) = telemetry::init(&log_path) {
                eprintln!("warning: logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Version) => {
            println!("tokenbridge {VERSION}");
            return Ok(());
        }
        Some(Commands::Chains) => {
            print_chains(&config);
            return Ok(());
        }
        Some(Commands::InitConfig) => {
            let path = match cli.config {
                Some(path) => path,
                None => AppConfig::config_path()?,
            };
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            AppConfig::default().save(&path)?;
            println!("wrote {}", path.display());
            return Ok(());
        }
        None => {}
    }

    let mut app = App::new(config, cli.sandbox)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;

    tracing::info!("tokenbridge exited");
    result
}

fn print_chains(config: &AppConfig) {
    println!("{:<12} {:<14} {:>10}  RPC", "KEY", "NAME", "CHAIN ID");
    for chain in &config.chains {
        println!(
            "{:<12} {:<14} {:>10}  {}",
            chain.key, chain.name, chain.chain_id.0, chain.rpc_url
        );
    }
}
