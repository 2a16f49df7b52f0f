//! Search matchers
//!
//! A [`Matcher`] is a pure predicate over [`App`] records. Matchers compose
//! with [`Matcher::and`], so new filter criteria extend the search surface
//! without touching the store.

use super::model::App;

/// Decides whether an app record belongs in a search result.
///
/// Matchers are side-effect free and safe to evaluate concurrently from
/// multiple readers.
pub struct Matcher(Box<dyn Fn(&App) -> bool + Send + Sync>);

impl Matcher {
    fn from_fn(f: impl Fn(&App) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Matches every record.
    pub fn any() -> Self {
        Self::from_fn(|_| true)
    }

    /// True only when both `self` and `next` accept the record.
    /// Short-circuits on the left operand.
    pub fn and(self, next: Matcher) -> Self {
        Self::from_fn(move |app| (self.0)(app) && (next.0)(app))
    }

    /// Case-sensitive exact match on the title field.
    pub fn exact_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self::from_fn(move |app| app.title == title)
    }

    /// Case-sensitive exact match on the version field.
    pub fn exact_version(version: impl Into<String>) -> Self {
        let version = version.into();
        Self::from_fn(move |app| app.version == version)
    }

    /// Case-sensitive substring match on the description field.
    pub fn description_contains(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self::from_fn(move |app| app.description.contains(&needle))
    }

    /// Apply the predicate to a record.
    pub fn matches(&self, app: &App) -> bool {
        (self.0)(app)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::any()
    }
}
