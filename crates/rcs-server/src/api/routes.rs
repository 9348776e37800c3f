//! Rocket assembly of the content API

use std::sync::Arc;

use rcs_infrastructure::config::AppConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, catch, catchers, options, routes};
use serde_json::Value;

use super::auth::{AuthConfig, AuthFailure};
use super::handlers::{
    api_spec, get_content, get_info, get_metrics, get_status, list_groups, main_endpoint,
};
use super::metrics::ApiMetrics;
use super::responses::status_body;
use super::state::ContentState;

/// Build the content API for `state` as configured by `config`
///
/// Routes are mounted under the normalized `server.api_prefix`. The result
/// is not launched, so tests can drive it with a local client.
pub fn content_rocket(state: Arc<ContentState>, config: &AppConfig) -> Rocket<Build> {
    let prefix = config.server.normalized_api_prefix();

    let mut rocket = rocket::build()
        .manage(state)
        .manage(AuthConfig::new(config.server.auth))
        .attach(ApiMetrics::new(&config.metrics))
        .mount(
            prefix.as_str(),
            routes![
                main_endpoint,
                list_groups,
                get_content,
                get_status,
                get_info,
                get_metrics,
                api_spec
            ],
        )
        .register(
            "/",
            catchers![unauthorized, forbidden, not_found, default_catcher],
        );

    if config.server.enable_cors {
        rocket = rocket.attach(Cors).mount(prefix.as_str(), routes![preflight]);
    }

    rocket
}

/// CORS headers on every response
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Preflight requests, answered with headers only
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}

fn auth_failure(request: &Request<'_>, fallback: &str) -> String {
    request
        .local_cache(AuthFailure::default)
        .0
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> Json<Value> {
    status_body(auth_failure(request, "Unauthorized"))
}

#[catch(403)]
fn forbidden(request: &Request<'_>) -> Json<Value> {
    status_body(auth_failure(request, "Forbidden"))
}

#[catch(404)]
fn not_found(_request: &Request<'_>) -> Json<Value> {
    status_body("Not found")
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<Value>) {
    (status, status_body(status.reason_lossy()))
}
