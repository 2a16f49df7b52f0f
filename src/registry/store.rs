//! In-memory record store
//!
//! The single source of truth for accepted records. Writers are mutually
//! exclusive with each other and with readers; readers run concurrently and
//! always observe a consistent snapshot.

use std::sync::RwLock;

use super::matcher::Matcher;
use super::model::App;

/// Concurrent, append-only collection of validated app records.
///
/// The store grows monotonically for the life of the process; there is no
/// update, delete, or compaction.
#[derive(Debug, Default)]
pub struct Store {
    // Entries are immutable once inserted.
    apps: RwLock<Vec<App>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// The caller must have validated `app` already; the store performs no
    /// validation of its own. The lock is held only for the append, so the
    /// hold time is O(1).
    pub fn insert(&self, app: App) {
        let mut apps = self.apps.write().unwrap_or_else(|e| e.into_inner());
        apps.push(app);
    }

    /// Scan every record in insertion order and return owned copies of
    /// those the matcher accepts.
    ///
    /// The read lock is held for the whole scan, so the result reflects one
    /// consistent snapshot: no half-appended record, no record twice.
    /// Returns an empty vec when nothing matches.
    pub fn search(&self, matcher: &Matcher) -> Vec<App> {
        let apps = self.apps.read().unwrap_or_else(|e| e.into_inner());
        apps.iter()
            .filter(|app| matcher.matches(app))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Maintainer;

    fn valid_app(title: &str, version: &str, description: &str) -> App {
        App {
            title: title.to_string(),
            version: version.to_string(),
            description: description.to_string(),
            maintainers: vec![Maintainer {
                name: "name".to_string(),
                email: "name@example.com".to_string(),
            }],
            company: "company".to_string(),
            website: "http://example.com".to_string(),
            source: "https://git.example.com/repo".to_string(),
            license: "license".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_insertion_order() {
        let store = Store::new();
        store.insert(valid_app("foo", "0.0.1", "foo v0.0.1"));
        store.insert(valid_app("bar", "1.2.3", "bar v1.2.3"));
        store.insert(valid_app("baz", "2.0.0", "baz v2.0.0"));

        let results = store.search(&Matcher::any());
        let titles: Vec<_> = results.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_exact_title_returns_all_matching_in_order() {
        let store = Store::new();
        store.insert(valid_app("foo", "0.0.1", ""));
        store.insert(valid_app("bar", "0.0.1", "first bar"));
        store.insert(valid_app("bar", "0.0.2", "second bar"));
        store.insert(valid_app("baz", "0.0.1", ""));

        let results = store.search(&Matcher::exact_title("bar"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].description, "first bar");
        assert_eq!(results[1].description, "second bar");
    }

    #[test]
    fn test_conjunction_returns_intersection() {
        let store = Store::new();
        store.insert(valid_app("foo", "0.0.1", ""));
        store.insert(valid_app("foo", "0.0.2", ""));
        store.insert(valid_app("bar", "0.0.1", ""));

        let matcher = Matcher::exact_title("foo").and(Matcher::exact_version("0.0.1"));
        let results = store.search(&matcher);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "foo");
        assert_eq!(results[0].version, "0.0.1");
    }

    #[test]
    fn test_no_match_returns_empty_vec() {
        let store = Store::new();
        store.insert(valid_app("foo", "0.0.1", ""));

        let results = store.search(&Matcher::exact_title("never-inserted"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = Store::new();
        assert!(store.search(&Matcher::any()).is_empty());
    }

    #[test]
    fn test_results_are_independent_copies() {
        let store = Store::new();
        store.insert(valid_app("foo", "0.0.1", "original"));

        let mut results = store.search(&Matcher::any());
        results[0].description = "mutated".to_string();
        results[0].maintainers.clear();

        let fresh = store.search(&Matcher::any());
        assert_eq!(fresh[0].description, "original");
        assert_eq!(fresh[0].maintainers.len(), 1);
    }
}
