//! [`SqliteStore`] — the SQLite implementation of [`FixtureStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use torcida_core::{
  attendance::{Attendance, MarkOutcome},
  fixture::Fixture,
  stats::{StadiumVisits, Stats, TeamRecord},
  store::{FixtureQuery, FixtureStore, FixtureView},
};

use crate::{
  encode::{RawFixtureRow, encode_dt, encode_status},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fixture store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation runs inside one `call` scope on the shared connection, so the
/// handle is acquired and released around each logical unit of work, on
/// success and on failure alike.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Outcome of the transactional attendance probe, before domain mapping.
enum MarkProbe {
  Created,
  AlreadyMarked,
  NoFixture,
}

// ─── FixtureStore impl ───────────────────────────────────────────────────────

impl FixtureStore for SqliteStore {
  type Error = Error;

  async fn upsert_fixture(&self, fixture: Fixture) -> Result<()> {
    let now_str    = encode_dt(Utc::now());
    let date_str   = encode_dt(fixture.kickoff);
    let status_str = encode_status(fixture.status).to_owned();

    self
      .conn
      .call(move |conn| {
        // Single statement, so the overwrite is atomic; `created_at` is only
        // written by the insert arm and survives every later upsert.
        conn.execute(
          "INSERT INTO fixtures (
             fixture_id, date, timestamp, venue, venue_city,
             status, status_long, league_id, season, round,
             home_team_id, home_team_name, away_team_id, away_team_name,
             home_goals, away_goals, halftime_home, halftime_away,
             fulltime_home, fulltime_away, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                     ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?21)
           ON CONFLICT(fixture_id) DO UPDATE SET
             date           = excluded.date,
             timestamp      = excluded.timestamp,
             venue          = excluded.venue,
             venue_city     = excluded.venue_city,
             status         = excluded.status,
             status_long    = excluded.status_long,
             league_id      = excluded.league_id,
             season         = excluded.season,
             round          = excluded.round,
             home_team_id   = excluded.home_team_id,
             home_team_name = excluded.home_team_name,
             away_team_id   = excluded.away_team_id,
             away_team_name = excluded.away_team_name,
             home_goals     = excluded.home_goals,
             away_goals     = excluded.away_goals,
             halftime_home  = excluded.halftime_home,
             halftime_away  = excluded.halftime_away,
             fulltime_home  = excluded.fulltime_home,
             fulltime_away  = excluded.fulltime_away,
             updated_at     = excluded.updated_at",
          rusqlite::params![
            fixture.fixture_id,
            date_str,
            fixture.timestamp,
            fixture.venue,
            fixture.venue_city,
            status_str,
            fixture.status_long,
            fixture.league_id,
            fixture.season,
            fixture.round,
            fixture.home_team_id,
            fixture.home_team_name,
            fixture.away_team_id,
            fixture.away_team_name,
            fixture.home_goals,
            fixture.away_goals,
            fixture.halftime_home,
            fixture.halftime_away,
            fixture.fulltime_home,
            fixture.fulltime_away,
            now_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn mark_attended(
    &self,
    fixture_id: i64,
    notes: Option<String>,
  ) -> Result<MarkOutcome> {
    let attended_at = Utc::now();
    let at_str      = encode_dt(attended_at);
    let notes_param = notes.clone();

    let probe = self
      .conn
      .call(move |conn| {
        // Probe and insert under one transaction so the at-most-one-mark
        // invariant holds without catching the engine's constraint error.
        let tx = conn.transaction()?;

        let fixture_exists: bool = tx
          .query_row(
            "SELECT 1 FROM fixtures WHERE fixture_id = ?1",
            rusqlite::params![fixture_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !fixture_exists {
          return Ok(MarkProbe::NoFixture);
        }

        let already_marked: bool = tx
          .query_row(
            "SELECT 1 FROM attended_matches WHERE fixture_id = ?1",
            rusqlite::params![fixture_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if already_marked {
          return Ok(MarkProbe::AlreadyMarked);
        }

        tx.execute(
          "INSERT INTO attended_matches (fixture_id, attended_date, notes)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![fixture_id, at_str, notes_param],
        )?;
        tx.commit()?;
        Ok(MarkProbe::Created)
      })
      .await?;

    match probe {
      MarkProbe::NoFixture => Err(Error::FixtureNotFound(fixture_id)),
      MarkProbe::AlreadyMarked => Ok(MarkOutcome::AlreadyMarked),
      MarkProbe::Created => {
        Ok(MarkOutcome::Created(Attendance { fixture_id, attended_at, notes }))
      }
    }
  }

  async fn unmark_attended(&self, fixture_id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        let count = conn.execute(
          "DELETE FROM attended_matches WHERE fixture_id = ?1",
          rusqlite::params![fixture_id],
        )?;
        Ok(count > 0)
      })
      .await?;
    Ok(removed)
  }

  async fn query_fixtures(&self, query: &FixtureQuery) -> Result<Vec<FixtureView>> {
    let team_id       = query.team_id;
    let status_str    = query.status.map(encode_status).map(str::to_owned);
    let attended_only = query.attended_only;
    let limit         = query.limit;

    let raws: Vec<RawFixtureRow> = self
      .conn
      .call(move |conn| {
        // Filters compose conjunctively onto the base join.
        let mut sql = String::from(
          "SELECT
             f.fixture_id, f.date, f.timestamp, f.venue, f.venue_city,
             f.status, f.status_long, f.league_id, f.season, f.round,
             f.home_team_id, f.home_team_name, f.away_team_id, f.away_team_name,
             f.home_goals, f.away_goals, f.halftime_home, f.halftime_away,
             f.fulltime_home, f.fulltime_away, f.created_at, f.updated_at,
             am.attended_date, am.notes
           FROM fixtures f
           LEFT JOIN attended_matches am ON am.fixture_id = f.fixture_id
           WHERE 1=1",
        );
        let mut params: Vec<rusqlite::types::Value> = Vec::new();

        if let Some(team) = team_id {
          sql.push_str(" AND (f.home_team_id = ? OR f.away_team_id = ?)");
          params.push(team.into());
          params.push(team.into());
        }
        if let Some(status) = status_str {
          sql.push_str(" AND f.status = ?");
          params.push(status.into());
        }
        if attended_only {
          sql.push_str(" AND am.fixture_id IS NOT NULL");
        }

        sql.push_str(" ORDER BY f.date DESC");

        if let Some(limit) = limit {
          sql.push_str(" LIMIT ?");
          params.push((limit as i64).into());
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            Ok(RawFixtureRow {
              fixture_id:     row.get(0)?,
              date:           row.get(1)?,
              timestamp:      row.get(2)?,
              venue:          row.get(3)?,
              venue_city:     row.get(4)?,
              status:         row.get(5)?,
              status_long:    row.get(6)?,
              league_id:      row.get(7)?,
              season:         row.get(8)?,
              round:          row.get(9)?,
              home_team_id:   row.get(10)?,
              home_team_name: row.get(11)?,
              away_team_id:   row.get(12)?,
              away_team_name: row.get(13)?,
              home_goals:     row.get(14)?,
              away_goals:     row.get(15)?,
              halftime_home:  row.get(16)?,
              halftime_away:  row.get(17)?,
              fulltime_home:  row.get(18)?,
              fulltime_away:  row.get(19)?,
              created_at:     row.get(20)?,
              updated_at:     row.get(21)?,
              attended_date:  row.get(22)?,
              notes:          row.get(23)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFixtureRow::into_view).collect()
  }

  async fn statistics(&self, team_id: Option<i64>) -> Result<Stats> {
    let stats = self
      .conn
      .call(move |conn| {
        let total: i64 = match team_id {
          Some(team) => conn.query_row(
            "SELECT COUNT(*)
             FROM attended_matches am
             JOIN fixtures f ON f.fixture_id = am.fixture_id
             WHERE f.home_team_id = ?1 OR f.away_team_id = ?1",
            rusqlite::params![team],
            |row| row.get(0),
          )?,
          None => {
            conn.query_row("SELECT COUNT(*) FROM attended_matches", [], |row| {
              row.get(0)
            })?
          }
        };

        // Win/draw/loss is only defined for a specific team, and only over
        // its attended, finished fixtures.
        let record = match team_id {
          Some(team) => {
            let record = conn.query_row(
              "SELECT
                 COALESCE(SUM(CASE
                   WHEN (f.home_team_id = ?1 AND f.home_goals > f.away_goals)
                     OR (f.away_team_id = ?1 AND f.away_goals > f.home_goals)
                   THEN 1 ELSE 0 END), 0),
                 COALESCE(SUM(CASE
                   WHEN f.home_goals = f.away_goals
                   THEN 1 ELSE 0 END), 0),
                 COALESCE(SUM(CASE
                   WHEN (f.home_team_id = ?1 AND f.home_goals < f.away_goals)
                     OR (f.away_team_id = ?1 AND f.away_goals < f.home_goals)
                   THEN 1 ELSE 0 END), 0)
               FROM attended_matches am
               JOIN fixtures f ON f.fixture_id = am.fixture_id
               WHERE (f.home_team_id = ?1 OR f.away_team_id = ?1)
                 AND f.status = 'finished'",
              rusqlite::params![team],
              |row| {
                Ok(TeamRecord {
                  wins:   row.get(0)?,
                  draws:  row.get(1)?,
                  losses: row.get(2)?,
                })
              },
            )?;
            Some(record)
          }
          None => None,
        };

        let mut stadium_sql = String::from(
          "SELECT f.venue, f.venue_city, COUNT(*) AS visits
           FROM attended_matches am
           JOIN fixtures f ON f.fixture_id = am.fixture_id",
        );
        let mut params: Vec<rusqlite::types::Value> = Vec::new();
        if let Some(team) = team_id {
          stadium_sql.push_str(" WHERE f.home_team_id = ? OR f.away_team_id = ?");
          params.push(team.into());
          params.push(team.into());
        }
        stadium_sql.push_str(" GROUP BY f.venue, f.venue_city ORDER BY visits DESC");

        let mut stmt = conn.prepare(&stadium_sql)?;
        let stadiums = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            Ok(StadiumVisits {
              venue:  row.get(0)?,
              city:   row.get(1)?,
              visits: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Stats { total_attended: total, record, stadiums })
      })
      .await?;
    Ok(stats)
  }
}
