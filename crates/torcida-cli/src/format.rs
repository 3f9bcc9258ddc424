//! Console formatting for fixtures and statistics.

use torcida_core::{
  fixture::MatchStatus,
  source::TeamCandidate,
  stats::Stats,
  store::FixtureView,
};

/// One fixture summary line, e.g.
/// `✓ [1180422] Flamengo 2 x 1 Bahia | Maracanã | 14/04/2024 21:00 | finished`.
pub fn fixture_line(view: &FixtureView) -> String {
  let fixture = &view.fixture;

  let score = match fixture.status {
    MatchStatus::Finished => format!(
      "{} x {}",
      display_goals(fixture.home_goals),
      display_goals(fixture.away_goals)
    ),
    MatchStatus::InProgress => format!(
      "{} x {} (live)",
      fixture.home_goals.unwrap_or(0),
      fixture.away_goals.unwrap_or(0)
    ),
    _ => "vs".to_owned(),
  };

  let attended_mark = if view.is_attended() { "✓ " } else { "" };

  format!(
    "{attended_mark}[{}] {} {score} {} | {} | {} | {}",
    fixture.fixture_id,
    fixture.home_team_name,
    fixture.away_team_name,
    fixture.venue,
    fixture.kickoff_display(),
    fixture.status,
  )
}

fn display_goals(goals: Option<i32>) -> String {
  match goals {
    Some(n) => n.to_string(),
    None => "-".to_owned(),
  }
}

/// Print a titled fixture listing.
pub fn print_fixtures(views: &[FixtureView], title: &str) {
  println!("{}", "=".repeat(80));
  println!("{title} ({} fixtures)", views.len());
  println!("{}", "=".repeat(80));

  if views.is_empty() {
    println!("No fixtures found");
    return;
  }

  for view in views {
    println!("{}", fixture_line(view));
  }
}

/// Print the attendance statistics block.
pub fn print_stats(stats: &Stats) {
  println!("{}", "=".repeat(80));
  println!("Attendance statistics");
  println!("{}", "=".repeat(80));
  println!("Matches attended: {}", stats.total_attended);

  if let Some(record) = &stats.record {
    println!();
    println!("Wins:   {}", record.wins);
    println!("Draws:  {}", record.draws);
    println!("Losses: {}", record.losses);
    if let Some(rate) = record.win_rate() {
      println!("Win rate: {rate:.1}%");
    }
  }

  if !stats.stadiums.is_empty() {
    println!();
    println!("Stadiums visited ({}):", stats.stadiums.len());
    for stadium in &stats.stadiums {
      let city = if stadium.city.is_empty() {
        String::new()
      } else {
        format!(" - {}", stadium.city)
      };
      println!("  • {}{}: {} visit(s)", stadium.venue, city, stadium.visits);
    }
  }
}

/// Print team-search candidates.
pub fn print_candidates(query: &str, candidates: &[TeamCandidate]) {
  if candidates.is_empty() {
    println!("No team found matching {query:?}");
    return;
  }

  println!("{} team(s) found:", candidates.len());
  for candidate in candidates {
    let country = candidate.country.as_deref().unwrap_or("N/A");
    println!(
      "  {} - {} (team id {})",
      candidate.name, country, candidate.team_id
    );
  }
}
