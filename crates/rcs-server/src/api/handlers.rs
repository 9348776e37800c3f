//! Content API route handlers
//!
//! Every handler except [`api_spec`] takes the [`Authenticated`] guard.

use std::convert::Infallible;
use std::sync::Arc;

use rcs_application::{StatusFilter, filter_status_map};
use rocket::fs::NamedFile;
use rocket::http::ContentType;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use rocket::serde::json::Json;
use rocket::{State, get};
use serde_json::Value;
use tracing::{error, info};

use super::auth::Authenticated;
use super::metrics::prometheus_handle;
use super::responses::{ApiError, ok_response, ok_response_with};
use super::state::ContentState;
use crate::constants::{GROUPS_KEY, INFO_KEY, RULES_KEY};

/// Status filter taken from the raw query string
///
/// Query keys are matched by presence, so `?internal` and `?internal=0`
/// both select internal rules.
#[derive(Debug, Clone, Default)]
pub struct StatusQuery(pub StatusFilter);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for StatusQuery {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let filter = request
            .uri()
            .query()
            .map(|query| StatusFilter::from_pairs(query.segments()))
            .unwrap_or_default();
        Outcome::Success(StatusQuery(filter))
    }
}

/// `GET /`
#[get("/")]
pub fn main_endpoint(_auth: Authenticated) -> Json<Value> {
    ok_response()
}

/// `GET /groups`
#[get("/groups")]
pub fn list_groups(
    _auth: Authenticated,
    state: &State<Arc<ContentState>>,
) -> Result<Json<Value>, ApiError> {
    ok_response_with(GROUPS_KEY, &state.groups())
}

/// `GET /content`: the rule content directory as MessagePack
#[get("/content")]
pub fn get_content<'r>(
    _auth: Authenticated,
    state: &'r State<Arc<ContentState>>,
) -> Result<(ContentType, &'r [u8]), ApiError> {
    let encoded = state.inner().encoded_content()?;
    Ok((ContentType::Binary, encoded))
}

/// `GET /status`, optionally filtered by `internal`, `external` and `rule=NAME`
#[get("/status")]
pub fn get_status(
    _auth: Authenticated,
    query: StatusQuery,
    state: &State<Arc<ContentState>>,
) -> Result<Json<Value>, ApiError> {
    let filtered = filter_status_map(state.status(), &query.0);
    info!(
        all = state.status().len(),
        filtered = filtered.len(),
        "Rule content states filtering results"
    );
    ok_response_with(RULES_KEY, &filtered)
}

/// `GET /info`: build information
#[get("/info")]
pub fn get_info(
    _auth: Authenticated,
    state: &State<Arc<ContentState>>,
) -> Result<Json<Value>, ApiError> {
    ok_response_with(INFO_KEY, state.info())
}

/// `GET /metrics`: Prometheus text exposition
#[get("/metrics")]
pub fn get_metrics(_auth: Authenticated) -> (ContentType, String) {
    (ContentType::Plain, prometheus_handle().render())
}

/// `GET /<file>`: the OpenAPI document, served without authentication
///
/// Only the file name of `server.api_spec_file` is served; anything else is
/// a 404.
#[get("/<file>", rank = 10)]
pub async fn api_spec(file: &str, state: &State<Arc<ContentState>>) -> Result<NamedFile, ApiError> {
    if state.api_spec_name() != Some(file) {
        return Err(ApiError::not_found("Not found"));
    }

    let spec_path = state.api_spec_file();
    NamedFile::open(spec_path).await.map_err(|e| {
        error!(path = %spec_path.display(), error = %e, "Cannot serve API specification");
        ApiError::internal(format!("Cannot read API specification: {e}"))
    })
}
