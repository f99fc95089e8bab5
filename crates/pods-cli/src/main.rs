//! pods CLI
//!
//! Loads the process configuration and reports what it resolved.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use pods_core::Config;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    // Command-line flags win over the settings file.
    if cli.verbose {
        config.set_verbose(true);
    }
    if cli.silent {
        config.set_silent(true);
    }

    logging::init(config.verbose())?;

    match cli.command {
        Some(Commands::Config { json }) => commands::run_config(&mut config, json),
        Some(Commands::Paths) => commands::run_paths(&mut config),
        Some(Commands::Lockfile) => commands::run_lockfile(&mut config),
        None => {
            println!("{} configuration inspector", "pods".green().bold());
            println!();
            println!("Run {} for available commands.", "pods --help".cyan());
            Ok(())
        }
    }
}
