//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings (UTC, so lexicographic
//! order equals chronological order); the match status is stored as its
//! canonical string.

use chrono::{DateTime, Utc};
use torcida_core::{
  attendance::Attendance,
  fixture::{Fixture, MatchStatus},
  store::FixtureView,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── MatchStatus ─────────────────────────────────────────────────────────────

pub fn encode_status(status: MatchStatus) -> &'static str {
  status.as_str()
}

pub fn decode_status(s: &str) -> Result<MatchStatus> {
  Ok(s.parse::<MatchStatus>()?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read from a `fixtures` row left-joined with
/// `attended_matches`.
pub struct RawFixtureRow {
  pub fixture_id:     i64,
  pub date:           String,
  pub timestamp:      Option<i64>,
  pub venue:          String,
  pub venue_city:     String,
  pub status:         String,
  pub status_long:    String,
  pub league_id:      Option<i64>,
  pub season:         Option<i32>,
  pub round:          String,
  pub home_team_id:   Option<i64>,
  pub home_team_name: String,
  pub away_team_id:   Option<i64>,
  pub away_team_name: String,
  pub home_goals:     Option<i32>,
  pub away_goals:     Option<i32>,
  pub halftime_home:  Option<i32>,
  pub halftime_away:  Option<i32>,
  pub fulltime_home:  Option<i32>,
  pub fulltime_away:  Option<i32>,
  pub created_at:     String,
  pub updated_at:     String,
  // attended_matches join
  pub attended_date:  Option<String>,
  pub notes:          Option<String>,
}

impl RawFixtureRow {
  pub fn into_view(self) -> Result<FixtureView> {
    let attendance = self
      .attended_date
      .as_deref()
      .map(decode_dt)
      .transpose()?
      .map(|attended_at| Attendance {
        fixture_id:  self.fixture_id,
        attended_at,
        notes:       self.notes.clone(),
      });

    let created_at = decode_dt(&self.created_at)?;
    let updated_at = decode_dt(&self.updated_at)?;

    let fixture = Fixture {
      fixture_id:     self.fixture_id,
      kickoff:        decode_dt(&self.date)?,
      timestamp:      self.timestamp,
      venue:          self.venue,
      venue_city:     self.venue_city,
      status:         decode_status(&self.status)?,
      status_long:    self.status_long,
      league_id:      self.league_id,
      season:         self.season,
      round:          self.round,
      home_team_id:   self.home_team_id,
      home_team_name: self.home_team_name,
      away_team_id:   self.away_team_id,
      away_team_name: self.away_team_name,
      home_goals:     self.home_goals,
      away_goals:     self.away_goals,
      halftime_home:  self.halftime_home,
      halftime_away:  self.halftime_away,
      fulltime_home:  self.fulltime_home,
      fulltime_away:  self.fulltime_away,
    };

    Ok(FixtureView { fixture, created_at, updated_at, attendance })
  }
}
