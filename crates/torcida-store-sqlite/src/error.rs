//! Error type for `torcida-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] torcida_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Attempted to mark attendance for a fixture the store has never seen.
  #[error("fixture not found: {0}")]
  FixtureNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
