//! Application metadata registry
//!
//! The core of the service: record model, accumulating field validation,
//! predicate-based matching, and the concurrent in-memory store.
//!
//! # Data Flow
//!
//! A decoded candidate record is validated against a shared error sink; a
//! clean record is inserted into the [`Store`]. Queries build a [`Matcher`]
//! from filter criteria and ask the store to scan and return every record
//! the matcher accepts, in insertion order.
//!
//! # Invariants Enforced
//!
//! - Every record in the store has passed full validation
//! - Records are immutable after insertion (no update or delete)
//! - Readers never observe a torn or partial append

mod matcher;
mod model;
mod store;
mod validation;

pub use matcher::Matcher;
pub use model::{App, Maintainer};
pub use store::Store;
pub use validation::{
    validate_email, validate_non_empty, validate_url, FieldError, ValidationErrors,
};
