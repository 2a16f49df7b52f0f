//! Store Concurrency Invariant Tests
//!
//! Tests for the store's single-writer/multiple-reader discipline:
//! - Concurrent inserts are never lost, duplicated, or torn
//! - Readers always observe a consistent snapshot in insertion order
//! - Readers run while a writer is active without blocking forever

use std::sync::Arc;
use std::thread;

use appmeta::registry::{App, Maintainer, Matcher, Store};

// =============================================================================
// Test Utilities
// =============================================================================

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

// =============================================================================
// Concurrent Writes
// =============================================================================

/// N concurrent inserts followed by a MatchAny search must return all N
/// records with no duplicates and no missing entries.
#[test]
fn test_concurrent_inserts_all_visible() {
    const WRITERS: usize = 8;
    const PER_WRITER: usize = 50;

    let store = Arc::new(Store::new());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    store.insert(valid_app(
                        &format!("app-{}-{}", w, i),
                        "1.0.0",
                        "inserted concurrently",
                    ));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let results = store.search(&Matcher::any());
    assert_eq!(results.len(), WRITERS * PER_WRITER);

    let mut titles: Vec<_> = results.iter().map(|a| a.title.clone()).collect();
    titles.sort();
    titles.dedup();
    assert_eq!(
        titles.len(),
        WRITERS * PER_WRITER,
        "every insert visible exactly once"
    );
}

/// Inserts from a single writer are observed in that writer's order.
#[test]
fn test_single_writer_order_preserved() {
    let store = Store::new();
    for i in 0..100 {
        store.insert(valid_app(&format!("app-{}", i), "1.0.0", ""));
    }

    let results = store.search(&Matcher::any());
    for (i, app) in results.iter().enumerate() {
        assert_eq!(app.title, format!("app-{}", i));
    }
}

// =============================================================================
// Concurrent Reads During Writes
// =============================================================================

/// Searches running concurrently with a writer must each see a consistent
/// snapshot: a stable prefix of the insertion sequence, never a torn append.
#[test]
fn test_readers_see_consistent_snapshots() {
    const SEED: usize = 100;
    const EXTRA: usize = 100;
    const READERS: usize = 4;

    let store = Arc::new(Store::new());
    for i in 0..SEED {
        store.insert(valid_app(&format!("app-{}", i), "1.0.0", "seed"));
    }

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in SEED..SEED + EXTRA {
                store.insert(valid_app(&format!("app-{}", i), "1.0.0", "live"));
            }
        })
    };

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..20 {
                    let results = store.search(&Matcher::any());
                    assert!(results.len() >= SEED);
                    assert!(results.len() <= SEED + EXTRA);
                    // Whatever length was observed, it must be the ordered
                    // prefix of the insertion sequence.
                    for (i, app) in results.iter().enumerate() {
                        assert_eq!(app.title, format!("app-{}", i));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.search(&Matcher::any()).len(), SEED + EXTRA);
}

/// Filtered searches under concurrency return only matching records.
#[test]
fn test_concurrent_filtered_search() {
    let store = Arc::new(Store::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..50 {
                store.insert(valid_app("target", &format!("0.0.{}", i), ""));
                store.insert(valid_app("other", "1.0.0", ""));
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..20 {
                for app in store.search(&Matcher::exact_title("target")) {
                    assert_eq!(app.title, "target");
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(store.search(&Matcher::exact_title("target")).len(), 50);
}
