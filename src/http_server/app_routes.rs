//! App Metadata Routes
//!
//! Endpoints for submitting and searching application metadata records.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::observability::Logger;
use crate::registry::{App, Matcher, Store, ValidationErrors};

use super::errors::{ApiError, ApiResult};

// ==================
// Request/Response Types
// ==================

/// Query parameters recognized by `GET /apps`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Exact title match
    pub title: Option<String>,

    /// Exact version match
    pub version: Option<String>,

    /// Substring match on the description
    #[serde(rename = "descriptionContains")]
    pub description_contains: Option<String>,
}

impl SearchParams {
    /// Conjoin one matcher per present, non-empty criterion.
    /// Absent criteria impose no constraint.
    pub fn to_matcher(&self) -> Matcher {
        let mut matcher = Matcher::any();

        if let Some(title) = non_empty(&self.title) {
            matcher = matcher.and(Matcher::exact_title(title));
        }

        if let Some(version) = non_empty(&self.version) {
            matcher = matcher.and(Matcher::exact_version(version));
        }

        if let Some(needle) = non_empty(&self.description_contains) {
            matcher = matcher.and(Matcher::description_contains(needle));
        }

        // Extends naturally to other fields, case-insensitive variants, or
        // semver ranges: add a criterion here and a constructor on Matcher.
        matcher
    }
}

fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Acknowledgement returned by a successful insert
#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub status: String,
}

// ==================
// Routes
// ==================

/// Create the /apps routes
pub fn app_routes(store: Arc<Store>) -> Router {
    Router::new()
        .route("/apps", get(search_apps).post(create_app))
        .with_state(store)
}

/// `POST /apps`: validate a candidate record and insert it
async fn create_app(
    State(store): State<Arc<Store>>,
    body: Result<Json<App>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let Json(app) = body.map_err(|_| ApiError::InvalidBody)?;

    let mut errs = ValidationErrors::new();
    app.validate(&mut errs);
    if !errs.is_empty() {
        Logger::warn(
            "app_rejected",
            &[("errors", &errs.len().to_string()), ("title", &app.title)],
        );
        return Err(ApiError::Validation(errs));
    }

    Logger::info(
        "app_inserted",
        &[("title", &app.title), ("version", &app.version)],
    );
    store.insert(app);

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            status: "created".to_string(),
        }),
    ))
}

/// `GET /apps`: return every record matching the query criteria
async fn search_apps(
    State(store): State<Arc<Store>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<App>> {
    let results = store.search(&params.to_matcher());
    Logger::info("apps_searched", &[("matches", &results.len().to_string())]);
    Json(results)
}
