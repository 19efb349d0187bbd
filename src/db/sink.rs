//! Destination for finished-game records.

use chrono::NaiveDateTime;
use noughts_core::{GameSummary, Player};
use tracing::{info, instrument};

use crate::db::{DbError, GameRepository, NewGameRecord};

/// Somewhere finished games are written to.
///
/// Front ends call this once per finished game; the engine never does.
pub trait RecordSink {
    /// Stores one finished game.
    fn record_game(
        &mut self,
        player1: &Player,
        player2: &Player,
        result: &str,
        timestamp: NaiveDateTime,
    ) -> Result<(), DbError>;

    /// Up to `limit` stored games as display lines, most recent first.
    fn recent_games(&self, limit: usize) -> Result<Vec<String>, DbError>;
}

fn new_record(
    player1: &Player,
    player2: &Player,
    result: &str,
    timestamp: NaiveDateTime,
) -> NewGameRecord {
    NewGameRecord::new(
        player1.name().clone(),
        player1.symbol().to_string(),
        player2.name().clone(),
        player2.symbol().to_string(),
        result.to_string(),
        timestamp,
    )
}

impl RecordSink for GameRepository {
    fn record_game(
        &mut self,
        player1: &Player,
        player2: &Player,
        result: &str,
        timestamp: NaiveDateTime,
    ) -> Result<(), DbError> {
        self.insert_record(&new_record(player1, player2, result, timestamp))?;
        Ok(())
    }

    fn recent_games(&self, limit: usize) -> Result<Vec<String>, DbError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(self
            .list_games(limit)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}

/// Keeps records in memory. Used when persistence is switched off.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<NewGameRecord>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, oldest first.
    pub fn records(&self) -> &[NewGameRecord] {
        &self.records
    }
}

impl RecordSink for MemorySink {
    fn record_game(
        &mut self,
        player1: &Player,
        player2: &Player,
        result: &str,
        timestamp: NaiveDateTime,
    ) -> Result<(), DbError> {
        self.records.push(new_record(player1, player2, result, timestamp));
        Ok(())
    }

    fn recent_games(&self, limit: usize) -> Result<Vec<String>, DbError> {
        Ok(self
            .records
            .iter()
            .rev()
            .take(limit)
            .map(ToString::to_string)
            .collect())
    }
}

/// Hands a finished game to `sink`, stamped with `timestamp`.
///
/// # Errors
///
/// Propagates the sink's [`DbError`].
#[instrument(skip(sink, summary), fields(result = %summary.outcome.result_text()))]
pub fn record_summary(
    sink: &mut dyn RecordSink,
    summary: &GameSummary,
    timestamp: NaiveDateTime,
) -> Result<(), DbError> {
    let result = summary.outcome.result_text();
    sink.record_game(
        summary.players.first(),
        summary.players.second(),
        &result,
        timestamp,
    )?;
    info!(moves = summary.moves, "Finished game handed to record sink");
    Ok(())
}
