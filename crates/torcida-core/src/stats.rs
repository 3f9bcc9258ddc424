//! Attendance statistics — aggregations over attended fixtures.

use serde::{Deserialize, Serialize};

/// Win/draw/loss record of one team over its attended, finished fixtures.
/// Each such fixture contributes to exactly one of the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
  pub wins:   i64,
  pub draws:  i64,
  pub losses: i64,
}

impl TeamRecord {
  pub fn played(&self) -> i64 {
    self.wins + self.draws + self.losses
  }

  /// Share of wins over played matches, as a percentage.
  /// `None` when no attended finished fixture exists.
  pub fn win_rate(&self) -> Option<f64> {
    let played = self.played();
    (played > 0).then(|| self.wins as f64 * 100.0 / played as f64)
  }
}

/// Visit count for one stadium; attended fixtures grouped by `(venue, city)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumVisits {
  pub venue:  String,
  pub city:   String,
  pub visits: i64,
}

/// Aggregated attendance statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
  /// All attendance marks, restricted to one team's fixtures when the
  /// statistics were computed for a specific team.
  pub total_attended: i64,
  /// Present only when computed for a specific team; callers must check for
  /// presence rather than read zeroes.
  pub record:         Option<TeamRecord>,
  /// Sorted by visit count, descending. Tie order is unspecified.
  pub stadiums:       Vec<StadiumVisits>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn win_rate_over_played_matches() {
    let record = TeamRecord { wins: 3, draws: 1, losses: 1 };
    assert_eq!(record.played(), 5);
    assert_eq!(record.win_rate(), Some(60.0));
  }

  #[test]
  fn win_rate_is_none_with_no_matches() {
    let record = TeamRecord { wins: 0, draws: 0, losses: 0 };
    assert_eq!(record.win_rate(), None);
  }
}
