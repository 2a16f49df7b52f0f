//! Application metadata records
//!
//! The `App` and `Maintainer` value entities, plus the ordered per-field
//! validation each runs against a shared error sink.

use serde::{Deserialize, Serialize};

use super::validation::{validate_email, validate_non_empty, validate_url, ValidationErrors};

/// Metadata about an application.
///
/// Treated as immutable once accepted into the store. All fields default to
/// empty so a sparse wire payload decodes into a candidate record and every
/// missing field is reported by validation, not by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub title: String,
    pub version: String,
    pub maintainers: Vec<Maintainer>,
    pub company: String,
    pub website: String,
    pub source: String,
    pub license: String,
    pub description: String,
}

impl App {
    /// Run every field check in declaration order, appending failures to
    /// `errs`.
    ///
    /// Never mutates the record and never stops at the first failure;
    /// calling it twice yields the same error set both times.
    pub fn validate(&self, errs: &mut ValidationErrors) {
        validate_non_empty(errs, "app.title", &self.title);
        validate_non_empty(errs, "app.version", &self.version);
        validate_non_empty(errs, "app.company", &self.company);
        validate_url(errs, "app.website", &self.website);
        validate_url(errs, "app.source", &self.source);
        validate_non_empty(errs, "app.license", &self.license);
        validate_non_empty(errs, "app.description", &self.description);
        self.validate_maintainers(errs);
    }

    fn validate_maintainers(&self, errs: &mut ValidationErrors) {
        if self.maintainers.is_empty() {
            errs.append("app.maintainers", "At least one maintainer must be specified");
        }

        for maintainer in &self.maintainers {
            maintainer.validate(errs);
        }
    }
}

/// Metadata about an application maintainer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

impl Maintainer {
    /// Check the maintainer's fields, appending failures to `errs`.
    pub fn validate(&self, errs: &mut ValidationErrors) {
        validate_non_empty(errs, "maintainer.name", &self.name);
        validate_email(errs, "maintainer.email", &self.email);
    }
}
