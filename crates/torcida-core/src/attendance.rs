//! Attendance marks — the user's record of having watched a fixture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mark asserting the user attended a fixture in person.
/// At most one mark exists per fixture id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
  pub fixture_id:  i64,
  /// When the mark was created; set by the store.
  pub attended_at: DateTime<Utc>,
  /// Optional free-text note about the experience.
  pub notes:       Option<String>,
}

/// Result of [`crate::store::FixtureStore::mark_attended`].
///
/// A duplicate mark is an expected outcome, not an error, so it is modelled
/// as a variant rather than surfaced as a constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkOutcome {
  /// A new mark was created.
  Created(Attendance),
  /// The fixture already carried a mark; nothing was written.
  AlreadyMarked,
}

impl MarkOutcome {
  pub fn is_created(&self) -> bool {
    matches!(self, Self::Created(_))
  }
}
