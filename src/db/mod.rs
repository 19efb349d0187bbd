//! Persistence adapter: records of finished games in SQLite.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod sink;

pub use error::{DbError, DbErrorKind};
pub use models::{GameRecord, NewGameRecord};
pub use repository::GameRepository;
pub use sink::{MemorySink, RecordSink, record_summary};
