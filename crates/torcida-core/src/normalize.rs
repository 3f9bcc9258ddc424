//! Converting raw provider records into the canonical [`Fixture`] shape.
//!
//! `normalize` is pure and total: absent fields fall back to defaults and a
//! malformed kickoff date falls back to the Unix epoch, so a record that
//! deserialised from the provider can never fail to normalize.

use chrono::{DateTime, Utc};

use crate::{
  fixture::{Fixture, MatchStatus},
  raw::RawFixtureRecord,
};

/// Normalize one raw provider record into a [`Fixture`].
pub fn normalize(raw: &RawFixtureRecord) -> Fixture {
  let kickoff = raw
    .fixture
    .date
    .as_deref()
    .and_then(parse_kickoff)
    .unwrap_or(DateTime::UNIX_EPOCH);

  let status =
    MatchStatus::from_short_code(raw.fixture.status.short.as_deref().unwrap_or(""));

  Fixture {
    fixture_id:     raw.fixture.id.unwrap_or_default(),
    kickoff,
    timestamp:      raw.fixture.timestamp,
    venue:          or_na(raw.fixture.venue.name.as_deref()),
    venue_city:     or_na(raw.fixture.venue.city.as_deref()),
    status,
    status_long:    raw.fixture.status.long.clone().unwrap_or_default(),
    league_id:      raw.league.id,
    season:         raw.league.season,
    round:          raw.league.round.clone().unwrap_or_default(),
    home_team_id:   raw.teams.home.id,
    home_team_name: raw.teams.home.name.clone().unwrap_or_default(),
    away_team_id:   raw.teams.away.id,
    away_team_name: raw.teams.away.name.clone().unwrap_or_default(),
    home_goals:     raw.goals.home,
    away_goals:     raw.goals.away,
    halftime_home:  raw.score.halftime.home,
    halftime_away:  raw.score.halftime.away,
    fulltime_home:  raw.score.fulltime.home,
    fulltime_away:  raw.score.fulltime.away,
  }
}

/// Parse the provider's ISO-8601 kickoff string, `Z` marker included.
fn parse_kickoff(s: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .ok()
    .map(|dt| dt.with_timezone(&Utc))
}

fn or_na(value: Option<&str>) -> String {
  match value {
    Some(v) => v.to_owned(),
    None => "N/A".to_owned(),
  }
}
