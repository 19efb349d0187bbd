//! Noughts - command-line entry point
//!
//! Two-player tic-tac-toe with a line-based and a full-screen front end.

#![warn(missing_docs)]

use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{
    AppConfig, GameRepository, MemorySink, PromptSession, RecordSink, run_tui, write_history,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(db_path) = &cli.db_path {
        config = config.with_database_path(db_path);
    }
    if cli.no_persist {
        config = config.with_persist(false);
    }

    match cli.command {
        Command::Play => {
            init_stderr_logging(&config);
            run_prompt(&config)
        }
        Command::Tui => {
            init_file_logging(&config)?;
            run_tui(open_sink(&config)?)
        }
        Command::History { limit, json } => {
            init_stderr_logging(&config);
            write_history(&config, limit, json, &mut io::stdout().lock())
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to stderr, leaving stdout to the game.
fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Logs to a file so the terminal UI owns the screen.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_path())
        .with_context(|| format!("cannot create log file {}", config.log_path().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Database when persisting, in-memory records otherwise.
#[instrument(skip(config), fields(persist = config.persist()))]
fn open_sink(config: &AppConfig) -> Result<Box<dyn RecordSink>> {
    if config.persist() {
        Ok(Box::new(GameRepository::open(config.database_path())?))
    } else {
        info!("Persistence disabled, keeping games in memory");
        Ok(Box::new(MemorySink::new()))
    }
}

/// Runs the line-based front end on stdin/stdout.
fn run_prompt(config: &AppConfig) -> Result<()> {
    let mut sink = open_sink(config)?;
    let output = Rc::new(RefCell::new(io::stdout()));
    let mut session = PromptSession::new(io::stdin().lock(), output, sink.as_mut());
    session.run()
}
