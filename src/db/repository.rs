//! Database repository for finished games.

use std::path::Path;

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, DbErrorKind, GameRecord, NewGameRecord, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite-backed store of game records.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Opens (creating if needed) the database at `db_path` and brings its
    /// schema up to date.
    ///
    /// Every operation opens its own connection, so `":memory:"` would lose
    /// data between calls and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is unusable, the database cannot be
    /// opened or a migration fails.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref().display()))]
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = db_path.as_ref();
        let db_path = path
            .to_str()
            .filter(|p| !p.trim().is_empty() && *p != ":memory:")
            .ok_or_else(|| {
                DbError::new(
                    DbErrorKind::Path,
                    format!("unusable database path '{}'", path.display()),
                )
            })?
            .to_string();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbError::new(
                    DbErrorKind::Path,
                    format!("cannot create '{}': {}", parent.display(), e),
                )
            })?;
        }

        let repo = Self { db_path };
        let mut conn = repo.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(DbErrorKind::Migration, e.to_string()))?;
        info!(path = %repo.db_path, migrations = applied.len(), "Game database ready");
        Ok(repo)
    }

    /// Path of the database file.
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            DbError::new(
                DbErrorKind::Connection,
                format!("failed to connect to '{}': {}", self.db_path, e),
            )
        })
    }

    /// Stores a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, record), fields(result = %record.result()))]
    pub fn insert_record(&self, record: &NewGameRecord) -> Result<GameRecord, DbError> {
        debug!("Recording game result");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::games::table)
            .values(record)
            .returning(GameRecord::as_returning())
            .get_result(&mut conn)?;

        info!(record_id = stored.id(), result = %stored.result(), "Game result recorded");
        Ok(stored)
    }

    /// Most recent games first, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_games(&self, limit: i64) -> Result<Vec<GameRecord>, DbError> {
        let mut conn = self.connection()?;

        let games = schema::games::table
            .order((schema::games::played_at.desc(), schema::games::id.desc()))
            .limit(limit)
            .select(GameRecord::as_select())
            .load(&mut conn)?;

        debug!(count = games.len(), "Games loaded");
        Ok(games)
    }

    /// Number of stored games.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn count_games(&self) -> Result<i64, DbError> {
        let mut conn = self.connection()?;
        let count = schema::games::table.count().get_result(&mut conn)?;
        Ok(count)
    }
}
