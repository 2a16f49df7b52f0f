//! # HTTP Server Module
//!
//! Transport layer for the metadata registry.
//!
//! # Endpoints
//!
//! - `POST /apps` - Validate and store an application metadata record
//! - `GET /apps` - Search stored records by field-based filters
//! - `GET /health` - Health check

pub mod app_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
