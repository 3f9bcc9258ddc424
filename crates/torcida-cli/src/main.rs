//! `torcida` — track football fixtures you have attended.
//!
//! # Usage
//!
//! ```
//! torcida search-team Flamengo
//! torcida sync --team-id 127 --competition brasileirao_a --season 2024
//! torcida list --team-id 127 --status finished
//! torcida attend 1180422 --notes "north stand"
//! torcida stats --team-id 127
//! ```
//!
//! The API key is read from `--api-key`, the `API_FOOTBALL_KEY` environment
//! variable, or a `.env` file in the working directory.

mod format;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use torcida_apifootball::{ApiConfig, ApiFootballClient, DEFAULT_BASE_URL};
use torcida_core::{
  attendance::MarkOutcome,
  competition::CompetitionCatalog,
  fixture::MatchStatus,
  source::FixtureSource,
  store::{FixtureQuery, FixtureStore},
  sync::Syncer,
};
use torcida_store_sqlite::SqliteStore;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "torcida", about = "Track football fixtures you have attended")]
struct Cli {
  /// Path to the SQLite database file.
  #[arg(long, env = "TORCIDA_DB", default_value = "football_matches.db")]
  db: PathBuf,

  /// API-Football key; only `search-team` and `sync` need it.
  #[arg(long, env = "API_FOOTBALL_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Base URL of the API-Football service.
  #[arg(long, env = "API_FOOTBALL_URL", default_value = DEFAULT_BASE_URL)]
  api_url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Search the remote provider for a team by name.
  SearchTeam {
    name: String,

    #[arg(long, default_value = "Brazil")]
    country: String,
  },

  /// Fetch a team's fixtures for one competition and season and reconcile
  /// them into the local database.
  Sync {
    #[arg(long)]
    team_id: i64,

    /// Competition key; see `torcida competitions`.
    #[arg(long, default_value = "brasileirao_a")]
    competition: String,

    #[arg(long, default_value_t = 2024)]
    season: i32,
  },

  /// List fixtures from the local database.
  List {
    #[arg(long)]
    team_id: Option<i64>,

    /// One of: scheduled, in_progress, finished, postponed.
    #[arg(long)]
    status: Option<MatchStatus>,

    /// Only fixtures marked as attended.
    #[arg(long)]
    attended: bool,

    #[arg(long)]
    limit: Option<usize>,
  },

  /// Mark a fixture as attended.
  Attend {
    fixture_id: i64,

    /// Free-text note about the experience.
    #[arg(long)]
    notes: Option<String>,
  },

  /// Remove an attendance mark.
  Unattend { fixture_id: i64 },

  /// Show attendance statistics.
  Stats {
    #[arg(long)]
    team_id: Option<i64>,
  },

  /// List the supported competitions.
  Competitions,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // `.env` is optional; absence is not an error.
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let Cli { db, api_key, api_url, command } = Cli::parse();

  let store = SqliteStore::open(&db)
    .await
    .with_context(|| format!("failed to open database at {}", db.display()))?;

  match command {
    Command::SearchTeam { name, country } => {
      let client = remote_client(api_key.as_deref(), &api_url)?;
      let candidates = client
        .search_teams(&name, &country)
        .await
        .context("team search failed")?;
      format::print_candidates(&name, &candidates);
    }

    Command::Sync { team_id, competition, season } => {
      let client = remote_client(api_key.as_deref(), &api_url)?;
      let catalog = CompetitionCatalog::default();

      if let Some(comp) = catalog.get(&competition) {
        println!("Fetching {} {} fixtures for team {team_id}...", comp.name, season);
      }

      let syncer = Syncer::new(store, client, catalog);
      let report = syncer
        .sync_team_fixtures(team_id, &competition, season)
        .await
        .context("sync failed")?;

      println!(
        "Synchronised {} of {} fetched fixtures",
        report.reconciled, report.fetched
      );
    }

    Command::List { team_id, status, attended, limit } => {
      let query = FixtureQuery { team_id, status, attended_only: attended, limit };
      let views = store.query_fixtures(&query).await.context("query failed")?;

      let title = if attended { "Attended fixtures" } else { "Fixtures" };
      format::print_fixtures(&views, title);
    }

    Command::Attend { fixture_id, notes } => {
      let outcome = store
        .mark_attended(fixture_id, notes)
        .await
        .context("could not mark attendance")?;
      match outcome {
        MarkOutcome::Created(_) => {
          println!("Fixture {fixture_id} marked as attended");
        }
        MarkOutcome::AlreadyMarked => {
          println!("Fixture {fixture_id} was already marked as attended");
        }
      }
    }

    Command::Unattend { fixture_id } => {
      let removed = store
        .unmark_attended(fixture_id)
        .await
        .context("could not remove attendance mark")?;
      if removed {
        println!("Attendance mark for fixture {fixture_id} removed");
      } else {
        println!("Fixture {fixture_id} was not marked as attended");
      }
    }

    Command::Stats { team_id } => {
      let stats = store
        .statistics(team_id)
        .await
        .context("could not compute statistics")?;
      format::print_stats(&stats);
    }

    Command::Competitions => {
      for (key, comp) in CompetitionCatalog::default().iter() {
        println!("{key:<16} {} (league {})", comp.name, comp.id);
      }
    }
  }

  Ok(())
}

/// Build the remote client, demanding an API key only when a remote
/// subcommand actually runs.
fn remote_client(api_key: Option<&str>, api_url: &str) -> Result<ApiFootballClient> {
  let api_key = api_key
    .context("API_FOOTBALL_KEY is not set; pass --api-key or add it to .env")?;

  tracing::debug!(api_url, "building remote client");
  ApiFootballClient::new(ApiConfig {
    base_url: api_url.to_owned(),
    api_key:  api_key.to_owned(),
  })
  .context("failed to build API client")
}
