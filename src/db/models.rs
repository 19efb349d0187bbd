//! Database models for finished games.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::Serialize;

use crate::db::schema;

/// A stored game result.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters, Serialize)]
#[diesel(table_name = schema::games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GameRecord {
    id: i32,
    player1_name: String,
    player1_symbol: String,
    player2_name: String,
    player2_symbol: String,
    result: String,
    played_at: NaiveDateTime,
}

/// One history line: date, both players and the result.
macro_rules! impl_record_display {
    ($record:ty) => {
        impl std::fmt::Display for $record {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}  {} ({}) vs {} ({})  {}",
                    self.played_at.format("%Y-%m-%d %H:%M"),
                    self.player1_name,
                    self.player1_symbol,
                    self.player2_name,
                    self.player2_symbol,
                    self.result
                )
            }
        }
    };
}

impl_record_display!(GameRecord);
impl_record_display!(NewGameRecord);

/// Insertable game result.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRecord {
    player1_name: String,
    player1_symbol: String,
    player2_name: String,
    player2_symbol: String,
    result: String,
    played_at: NaiveDateTime,
}
