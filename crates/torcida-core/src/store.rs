//! The `FixtureStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `torcida-store-sqlite`).
//! The sync orchestrator and the CLI depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  attendance::{Attendance, MarkOutcome},
  fixture::{Fixture, MatchStatus},
  stats::Stats,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`FixtureStore::query_fixtures`]. Filters compose
/// conjunctively; a `None`/`false` field places no restriction.
#[derive(Debug, Clone, Default)]
pub struct FixtureQuery {
  /// Restrict to fixtures where this team played home or away.
  pub team_id:       Option<i64>,
  /// Restrict to one canonical status.
  pub status:        Option<MatchStatus>,
  /// Restrict to fixtures carrying an attendance mark.
  pub attended_only: bool,
  /// Cap the number of rows returned, applied after ordering.
  pub limit:         Option<usize>,
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// A stored fixture row joined with its attendance mark, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureView {
  pub fixture:    Fixture,
  /// When the row was first inserted; preserved across upserts.
  pub created_at: DateTime<Utc>,
  /// Refreshed on every upsert.
  pub updated_at: DateTime<Utc>,
  pub attendance: Option<Attendance>,
}

impl FixtureView {
  pub fn is_attended(&self) -> bool {
    self.attendance.is_some()
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over durable fixture and attendance storage.
///
/// The store exclusively owns all persisted state; other components only
/// read and write through these operations and never cache fixture or
/// attendance state independently.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait FixtureStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert or overwrite a fixture keyed by `fixture_id`.
  ///
  /// An existing row has every field replaced — scores and status included —
  /// with `updated_at` refreshed and `created_at` preserved. The write is
  /// atomic: a partial field update is never observable.
  fn upsert_fixture(
    &self,
    fixture: Fixture,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Create an attendance mark for a fixture.
  ///
  /// Returns [`MarkOutcome::AlreadyMarked`] when the fixture already carries
  /// a mark (at most one exists per fixture id). Marking a fixture the store
  /// has never seen is an error.
  fn mark_attended(
    &self,
    fixture_id: i64,
    notes: Option<String>,
  ) -> impl Future<Output = Result<MarkOutcome, Self::Error>> + Send + '_;

  /// Delete the attendance mark for a fixture, if present.
  /// Returns whether a mark was actually removed.
  fn unmark_attended(
    &self,
    fixture_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Fixtures matching `query`, each joined with its attendance mark,
  /// ordered by kickoff descending.
  fn query_fixtures<'a>(
    &'a self,
    query: &'a FixtureQuery,
  ) -> impl Future<Output = Result<Vec<FixtureView>, Self::Error>> + Send + 'a;

  /// Aggregate attendance statistics, optionally scoped to one team.
  fn statistics(
    &self,
    team_id: Option<i64>,
  ) -> impl Future<Output = Result<Stats, Self::Error>> + Send + '_;
}
