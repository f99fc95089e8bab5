//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Inspect the configuration the pods tool resolves for this directory
#[derive(Parser, Debug)]
#[command(name = "pods")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all informational output (overrides --verbose)
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show effective flags and resolved paths
    Config {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the project paths: installation root, manifest, lockfile, sandbox
    Paths,

    /// List the pods pinned by the lockfile
    Lockfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pods", "config", "--json", "--silent"]).unwrap();

        assert!(cli.silent);
        assert!(!cli.verbose);
        assert_eq!(cli.command, Some(Commands::Config { json: true }));
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::try_parse_from(["pods", "-v"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.command, None);
    }
}
