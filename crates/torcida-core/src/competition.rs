//! The fixed table of competitions the sync orchestrator can resolve.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A competition as known to the remote provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
  /// The provider's league id.
  pub id:   i64,
  pub name: String,
}

/// Read-only mapping of short competition keys to provider competitions.
///
/// Injected into [`crate::sync::Syncer`] rather than consulted as a global,
/// so tests can substitute their own table. Not extensible at runtime.
#[derive(Debug, Clone)]
pub struct CompetitionCatalog {
  entries: BTreeMap<String, Competition>,
}

impl CompetitionCatalog {
  /// Build a catalog from explicit entries.
  pub fn from_entries<I>(entries: I) -> Self
  where
    I: IntoIterator<Item = (String, Competition)>,
  {
    Self { entries: entries.into_iter().collect() }
  }

  /// Resolve a short key, e.g. `brasileirao_a`.
  pub fn get(&self, key: &str) -> Option<&Competition> {
    self.entries.get(key)
  }

  /// All entries, in stable key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Competition)> {
    self.entries.iter().map(|(key, comp)| (key.as_str(), comp))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for CompetitionCatalog {
  /// The five competitions the tracker ships with.
  fn default() -> Self {
    let entry = |key: &str, id: i64, name: &str| {
      (key.to_owned(), Competition { id, name: name.to_owned() })
    };
    Self::from_entries([
      entry("brasileirao_a", 71, "Brasileirão Série A"),
      entry("brasileirao_b", 72, "Brasileirão Série B"),
      entry("copa_do_brasil", 73, "Copa do Brasil"),
      entry("libertadores", 13, "Copa Libertadores"),
      entry("sul_americana", 11, "Copa Sul-Americana"),
    ])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_catalog_has_five_entries() {
    let catalog = CompetitionCatalog::default();
    assert_eq!(catalog.len(), 5);
  }

  #[test]
  fn resolves_known_keys() {
    let catalog = CompetitionCatalog::default();
    assert_eq!(catalog.get("brasileirao_a").map(|c| c.id), Some(71));
    assert_eq!(catalog.get("libertadores").map(|c| c.id), Some(13));
  }

  #[test]
  fn unknown_key_is_none() {
    assert!(CompetitionCatalog::default().get("premier_league").is_none());
  }
}
