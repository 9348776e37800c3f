//! HTTP API of the rules content service
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | [`handlers::main_endpoint`] |
//! | `GET /groups` | [`handlers::list_groups`] |
//! | `GET /content` | [`handlers::get_content`] |
//! | `GET /status` | [`handlers::get_status`] |
//! | `GET /info` | [`handlers::get_info`] |
//! | `GET /metrics` | [`handlers::get_metrics`] |
//! | `GET /<api spec file>` | [`handlers::api_spec`] |
//!
//! All routes live under the configured API prefix.

pub mod auth;
pub mod handlers;
pub mod metrics;
pub mod responses;
pub mod routes;
pub mod state;

pub use auth::{AuthConfig, AuthError, Authenticated, Identity, decode_identity};
pub use metrics::{ApiMetrics, prometheus_handle};
pub use responses::ApiError;
pub use routes::content_rocket;
pub use state::ContentState;
