//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with saved game results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overriding config and environment
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Do not write finished games to the database
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play with line-based prompts
    Play,

    /// Play in the full-screen terminal UI
    Tui,

    /// Show finished games, most recent first
    History {
        /// Maximum number of games to show
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_flags() {
        let cli = Cli::parse_from(["noughts", "--db-path", "x.db", "history", "-l", "5", "--json"]);
        assert_eq!(cli.db_path, Some(PathBuf::from("x.db")));
        match cli.command {
            Command::History { limit, json } => {
                assert_eq!(limit, 5);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["noughts", "play", "--no-persist"]);
        assert!(cli.no_persist);
        assert!(matches!(cli.command, Command::Play));
    }
}
