//! appmeta - an in-memory application metadata registry
//!
//! Clients POST application metadata records, which are validated field by
//! field before being accepted, and GET filtered subsets back out.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod registry;
