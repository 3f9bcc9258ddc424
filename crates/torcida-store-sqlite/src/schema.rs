//! SQL schema for the torcida SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Reserved for future normalization: nothing writes these two tables yet;
-- team and league data currently travels embedded in fixture rows.
CREATE TABLE IF NOT EXISTS teams (
    team_id    INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    country    TEXT,
    founded    INTEGER,
    logo_url   TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS leagues (
    league_id  INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    country    TEXT,
    season     INTEGER,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- One row per provider fixture id. Rows are overwritten in place on re-sync,
-- never duplicated and never deleted by normal operation.
CREATE TABLE IF NOT EXISTS fixtures (
    fixture_id     INTEGER PRIMARY KEY,
    date           TEXT NOT NULL,        -- kickoff, RFC 3339 UTC
    timestamp      INTEGER,              -- provider's Unix kickoff timestamp
    venue          TEXT NOT NULL,
    venue_city     TEXT NOT NULL,
    status         TEXT NOT NULL,        -- canonical status string
    status_long    TEXT NOT NULL DEFAULT '',
    -- league/team ids stay plain columns (not foreign keys) while the
    -- teams and leagues tables have no write path.
    league_id      INTEGER,
    season         INTEGER,
    round          TEXT NOT NULL DEFAULT '',
    home_team_id   INTEGER,
    home_team_name TEXT NOT NULL,
    away_team_id   INTEGER,
    away_team_name TEXT NOT NULL,
    home_goals     INTEGER,
    away_goals     INTEGER,
    halftime_home  INTEGER,
    halftime_away  INTEGER,
    fulltime_home  INTEGER,
    fulltime_away  INTEGER,
    created_at     TEXT NOT NULL,        -- set on first insert, then preserved
    updated_at     TEXT NOT NULL         -- refreshed on every upsert
);

-- At most one attendance mark per fixture.
CREATE TABLE IF NOT EXISTS attended_matches (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    fixture_id    INTEGER NOT NULL UNIQUE REFERENCES fixtures(fixture_id),
    attended_date TEXT NOT NULL,
    notes         TEXT
);

CREATE INDEX IF NOT EXISTS fixtures_date_idx   ON fixtures(date);
CREATE INDEX IF NOT EXISTS fixtures_teams_idx  ON fixtures(home_team_id, away_team_id);
CREATE INDEX IF NOT EXISTS fixtures_status_idx ON fixtures(status);

PRAGMA user_version = 1;
";
