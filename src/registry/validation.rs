//! Field-level validation
//!
//! Checks never halt on first failure. Each check independently appends its
//! own entry to a shared [`ValidationErrors`] sink, so a single request
//! surfaces every problem at once.

use std::fmt;

use email_address::EmailAddress;
use url::Url;

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Path of the offending field (e.g. `app.title`, `maintainer.email`)
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An ordered set of validation failures.
///
/// Entries appear in the order the checks ran. A non-empty set signals
/// overall validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field.
    pub fn append(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// True when no check has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the failures in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    /// Renders one `field: message` entry per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.0 {
            writeln!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check that a required string field is non-empty.
pub fn validate_non_empty(errs: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errs.append(field, "Missing required field");
    }
}

/// Check that a string parses as a URL.
///
/// Parsing is deliberately permissive: relative references and many
/// malformed strings still pass. Only structurally unparseable input (a bad
/// port, a malformed IPv6 literal) is rejected.
pub fn validate_url(errs: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errs.append(field, "URL cannot be empty");
        return;
    }

    if !parses_as_url(value) {
        errs.append(field, "Invalid URL");
    }
}

fn parses_as_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(_) => true,
        // Relative references are legal here; resolve them against a
        // placeholder base the way a browser would.
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://registry.invalid")
            .and_then(|base| base.join(value))
            .is_ok(),
        Err(_) => false,
    }
}

/// Check that a string parses as a single RFC 5322 mailbox.
pub fn validate_email(errs: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errs.append(field, "Email address cannot be empty");
        return;
    }

    if !EmailAddress::is_valid(value) {
        errs.append(field, "Invalid email address");
    }
}
