//! The sync orchestrator — reconciling remote fixture records into the
//! local store.

use thiserror::Error;

use crate::{
  competition::CompetitionCatalog,
  normalize::normalize,
  source::FixtureSource,
  store::FixtureStore,
};

// ─── Report ──────────────────────────────────────────────────────────────────

/// Counts reported by a successful sync.
///
/// Every fetched record is upserted, so `reconciled` equals `fetched` on
/// success; the two are reported separately because the contract treats them
/// as distinct observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
  pub fetched:    usize,
  pub reconciled: usize,
}

// ─── Error ───────────────────────────────────────────────────────────────────

/// Failure of one sync attempt.
///
/// Store failures name the fixture that could not be persisted; records
/// upserted before the failure stay persisted.
#[derive(Debug, Error)]
pub enum SyncError<S, F>
where
  S: std::error::Error + 'static,
  F: std::error::Error + 'static,
{
  #[error("unknown competition: {0:?}")]
  UnknownCompetition(String),

  #[error("fetching fixtures: {0}")]
  Source(#[source] F),

  #[error("storing fixture {fixture_id}: {source}")]
  Store { fixture_id: i64, source: S },
}

// ─── Syncer ──────────────────────────────────────────────────────────────────

/// Reconciles remote fixtures into a [`FixtureStore`].
///
/// Holds an injected, read-only competition catalog; the orchestrator never
/// consults global state.
pub struct Syncer<S, F> {
  store:        S,
  source:       F,
  competitions: CompetitionCatalog,
}

impl<S, F> Syncer<S, F>
where
  S: FixtureStore,
  F: FixtureSource,
{
  pub fn new(store: S, source: F, competitions: CompetitionCatalog) -> Self {
    Self { store, source, competitions }
  }

  pub fn competitions(&self) -> &CompetitionCatalog {
    &self.competitions
  }

  /// Fetch all fixtures for `(team, competition, season)` and upsert each
  /// into the store.
  ///
  /// Every upsert counts as reconciled, whether it inserted a fresh row or
  /// overwrote an existing one. An unknown competition key fails before any
  /// fetch. A store failure aborts the loop; upserts already performed are
  /// not rolled back.
  pub async fn sync_team_fixtures(
    &self,
    team_id: i64,
    competition_key: &str,
    season: i32,
  ) -> Result<SyncReport, SyncError<S::Error, F::Error>> {
    let competition = self
      .competitions
      .get(competition_key)
      .ok_or_else(|| SyncError::UnknownCompetition(competition_key.to_owned()))?;

    let records = self
      .source
      .team_fixtures(team_id, competition.id, season)
      .await
      .map_err(SyncError::Source)?;

    let fetched = records.len();
    let mut reconciled = 0;

    for raw in &records {
      let fixture = normalize(raw);
      let fixture_id = fixture.fixture_id;
      self
        .store
        .upsert_fixture(fixture)
        .await
        .map_err(|source| SyncError::Store { fixture_id, source })?;
      reconciled += 1;
    }

    Ok(SyncReport { fetched, reconciled })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;
  use crate::{
    attendance::MarkOutcome,
    competition::Competition,
    fixture::Fixture,
    raw::RawFixtureRecord,
    source::TeamCandidate,
    stats::Stats,
    store::{FixtureQuery, FixtureView},
  };

  #[derive(Debug, thiserror::Error)]
  #[error("{0}")]
  struct FakeError(&'static str);

  /// Store fake that records upserts and optionally fails on one fixture id.
  #[derive(Default)]
  struct FakeStore {
    upserts: Mutex<Vec<Fixture>>,
    fail_on: Option<i64>,
  }

  impl FixtureStore for FakeStore {
    type Error = FakeError;

    async fn upsert_fixture(&self, fixture: Fixture) -> Result<(), FakeError> {
      if self.fail_on == Some(fixture.fixture_id) {
        return Err(FakeError("write failed"));
      }
      self.upserts.lock().unwrap().push(fixture);
      Ok(())
    }

    async fn mark_attended(
      &self,
      _fixture_id: i64,
      _notes: Option<String>,
    ) -> Result<MarkOutcome, FakeError> {
      Ok(MarkOutcome::AlreadyMarked)
    }

    async fn unmark_attended(&self, _fixture_id: i64) -> Result<bool, FakeError> {
      Ok(false)
    }

    async fn query_fixtures(
      &self,
      _query: &FixtureQuery,
    ) -> Result<Vec<FixtureView>, FakeError> {
      Ok(Vec::new())
    }

    async fn statistics(&self, _team_id: Option<i64>) -> Result<Stats, FakeError> {
      Ok(Stats { total_attended: 0, record: None, stadiums: Vec::new() })
    }
  }

  /// Source fake returning canned records or an error, counting fetches.
  struct FakeSource {
    records: Result<Vec<RawFixtureRecord>, &'static str>,
    fetches: Mutex<u32>,
  }

  impl FakeSource {
    fn with(records: Result<Vec<RawFixtureRecord>, &'static str>) -> Self {
      Self { records, fetches: Mutex::new(0) }
    }
  }

  impl FixtureSource for FakeSource {
    type Error = FakeError;

    async fn search_teams(
      &self,
      _name: &str,
      _country: &str,
    ) -> Result<Vec<TeamCandidate>, FakeError> {
      Ok(Vec::new())
    }

    async fn team_fixtures(
      &self,
      _team_id: i64,
      _league_id: i64,
      _season: i32,
    ) -> Result<Vec<RawFixtureRecord>, FakeError> {
      *self.fetches.lock().unwrap() += 1;
      self.records.clone().map_err(FakeError)
    }

    async fn fixture_details(
      &self,
      _fixture_id: i64,
    ) -> Result<Option<RawFixtureRecord>, FakeError> {
      Ok(None)
    }
  }

  fn catalog() -> CompetitionCatalog {
    CompetitionCatalog::from_entries([(
      "test_league".to_owned(),
      Competition { id: 99, name: "Test League".to_owned() },
    )])
  }

  fn record(id: i64) -> RawFixtureRecord {
    let mut raw = RawFixtureRecord::default();
    raw.fixture.id = Some(id);
    raw.fixture.date = Some("2024-05-01T20:00:00Z".to_owned());
    raw.fixture.status.short = Some("NS".to_owned());
    raw
  }

  #[tokio::test]
  async fn sync_upserts_every_fetched_record() {
    let source = FakeSource::with(Ok(vec![record(1), record(2), record(3)]));
    let syncer = Syncer::new(FakeStore::default(), source, catalog());

    let report =
      syncer.sync_team_fixtures(10, "test_league", 2024).await.unwrap();

    assert_eq!(report, SyncReport { fetched: 3, reconciled: 3 });
    assert_eq!(syncer.store.upserts.lock().unwrap().len(), 3);
  }

  #[tokio::test]
  async fn unknown_competition_fetches_nothing_and_writes_nothing() {
    let source = FakeSource::with(Ok(vec![record(1)]));
    let syncer = Syncer::new(FakeStore::default(), source, catalog());

    let err = syncer
      .sync_team_fixtures(10, "premier_league", 2024)
      .await
      .unwrap_err();

    assert!(
      matches!(err, SyncError::UnknownCompetition(ref key) if key == "premier_league")
    );
    assert_eq!(*syncer.source.fetches.lock().unwrap(), 0);
    assert!(syncer.store.upserts.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn source_failure_surfaces_and_writes_nothing() {
    let source = FakeSource::with(Err("network down"));
    let syncer = Syncer::new(FakeStore::default(), source, catalog());

    let err =
      syncer.sync_team_fixtures(10, "test_league", 2024).await.unwrap_err();

    assert!(matches!(err, SyncError::Source(_)));
    assert!(syncer.store.upserts.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn store_failure_keeps_earlier_upserts() {
    let store = FakeStore { upserts: Mutex::new(Vec::new()), fail_on: Some(2) };
    let source = FakeSource::with(Ok(vec![record(1), record(2), record(3)]));
    let syncer = Syncer::new(store, source, catalog());

    let err =
      syncer.sync_team_fixtures(10, "test_league", 2024).await.unwrap_err();

    assert!(matches!(err, SyncError::Store { fixture_id: 2, .. }));

    // Partial progress stays persisted.
    let upserts = syncer.store.upserts.lock().unwrap();
    assert_eq!(upserts.len(), 1);
    assert_eq!(upserts[0].fixture_id, 1);
  }

  #[tokio::test]
  async fn empty_response_reports_zero() {
    let source = FakeSource::with(Ok(Vec::new()));
    let syncer = Syncer::new(FakeStore::default(), source, catalog());

    let report =
      syncer.sync_team_fixtures(10, "test_league", 2024).await.unwrap();

    assert_eq!(report, SyncReport { fetched: 0, reconciled: 0 });
  }
}
