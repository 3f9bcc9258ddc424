//! Fixture — the canonical match record tracked by the store.
//!
//! A fixture is identified solely by the provider-assigned integer id and is
//! always upserted whole: every sync overwrites all fields of the stored row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Canonical match status, derived from the provider's short status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
  Scheduled,
  InProgress,
  Finished,
  Postponed,
}

impl MatchStatus {
  /// Map the provider's short status code onto the canonical status.
  /// Unrecognised codes (cancellations, abandonments, …) count as postponed.
  pub fn from_short_code(code: &str) -> Self {
    match code {
      "FT" | "AET" | "PEN" => Self::Finished,
      "1H" | "2H" | "HT" | "ET" | "P" | "LIVE" => Self::InProgress,
      "TBD" | "NS" => Self::Scheduled,
      _ => Self::Postponed,
    }
  }

  /// The string stored in the `status` column and accepted on the CLI.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Scheduled => "scheduled",
      Self::InProgress => "in_progress",
      Self::Finished => "finished",
      Self::Postponed => "postponed",
    }
  }
}

impl std::fmt::Display for MatchStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for MatchStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "scheduled" => Ok(Self::Scheduled),
      "in_progress" => Ok(Self::InProgress),
      "finished" => Ok(Self::Finished),
      "postponed" => Ok(Self::Postponed),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Fixture ─────────────────────────────────────────────────────────────────

/// The canonical fixture shape produced by the normalizer and persisted by
/// the store. Goal fields are `None` until the relevant period has been
/// played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
  pub fixture_id:     i64,
  /// Kickoff instant in UTC.
  pub kickoff:        DateTime<Utc>,
  /// The provider's Unix timestamp for the kickoff, when present.
  pub timestamp:      Option<i64>,
  pub venue:          String,
  pub venue_city:     String,
  pub status:         MatchStatus,
  /// The provider's long-form status text, e.g. "Match Finished".
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
}

impl Fixture {
  /// Kickoff formatted for display as `DD/MM/YYYY HH:MM`.
  /// Derived from [`Fixture::kickoff`]; never stored.
  pub fn kickoff_display(&self) -> String {
    self.kickoff.format("%d/%m/%Y %H:%M").to_string()
  }
}
