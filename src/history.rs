//! `history` command output.

use std::io::Write;

use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::db::GameRepository;

/// Writes up to `limit` stored games to `out`, most recent first, as text
/// lines or one JSON object per line.
///
/// With persistence switched off the database is left untouched.
#[instrument(skip(config, out), fields(db = %config.database_path().display()))]
pub fn write_history(
    config: &AppConfig,
    limit: i64,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !config.persist() {
        warn!("History requested with persistence disabled");
        writeln!(out, "Persistence is disabled; no history to show")?;
        return Ok(());
    }

    let repo = GameRepository::open(config.database_path())?;
    let games = repo.list_games(limit)?;
    info!(count = games.len(), "Showing history");

    if games.is_empty() && !json {
        writeln!(out, "No games recorded in {}", repo.path())?;
        return Ok(());
    }
    for game in &games {
        if json {
            writeln!(out, "{}", serde_json::to_string(game)?)?;
        } else {
            writeln!(out, "{game}")?;
        }
    }
    Ok(())
}
