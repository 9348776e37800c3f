//! Identity-header authentication
//!
//! When `server.auth` is enabled every route except the OpenAPI document
//! requires an `x-rh-identity` header holding base64 encoded JSON:
//!
//! ```text
//! {"identity": {"account_number": "6212377", "org_id": "1", "internal": {"org_id": "1"}}}
//! ```
//!
//! Numbers are accepted wherever a string is expected. An identity needs an
//! account number or an organization id (top-level or under `internal`).
//!
//! | Failure | Status |
//! |---------|--------|
//! | header missing | 401 |
//! | not base64, not JSON, no identity | 403 |

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::constants::IDENTITY_HEADER;

/// Authentication settings kept in Rocket managed state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Whether the identity header is required
    pub enabled: bool,
}

impl AuthConfig {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Authentication failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Missing auth token")]
    MissingIdentity,

    #[error("Malformed authentication token: {0}")]
    InvalidToken(String),

    #[error("Identity carries neither an account number nor an organization id")]
    EmptyIdentity,
}

impl AuthError {
    /// HTTP status the failure maps to
    pub fn status(&self) -> Status {
        match self {
            Self::MissingIdentity => Status::Unauthorized,
            Self::InvalidToken(_) | Self::EmptyIdentity => Status::Forbidden,
        }
    }
}

/// Message of the last authentication failure, read by the 401/403 catchers
#[derive(Debug, Clone, Default)]
pub(crate) struct AuthFailure(pub Option<String>);

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Internal {
    #[serde(default, deserialize_with = "string_or_number")]
    org_id: String,
}

/// Caller identity decoded from the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub account_number: String,
    pub org_id: String,
}

#[derive(Debug, Deserialize)]
struct RawIdentity {
    #[serde(default, deserialize_with = "string_or_number")]
    account_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    org_id: String,
    #[serde(default)]
    internal: Option<Internal>,
}

#[derive(Debug, Deserialize)]
struct Token {
    identity: RawIdentity,
}

/// Decode the value of the identity header
pub fn decode_identity(header: &str) -> Result<Identity, AuthError> {
    let bytes = STANDARD
        .decode(header.trim())
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    let token: Token =
        serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    let raw = token.identity;
    let org_id = if raw.org_id.is_empty() {
        raw.internal.map(|internal| internal.org_id).unwrap_or_default()
    } else {
        raw.org_id
    };

    if raw.account_number.is_empty() && org_id.is_empty() {
        return Err(AuthError::EmptyIdentity);
    }

    Ok(Identity {
        account_number: raw.account_number,
        org_id,
    })
}

/// Request guard for the protected content routes
///
/// Succeeds with `None` when authentication is disabled.
#[derive(Debug)]
pub struct Authenticated(pub Option<Identity>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let enabled = request
            .rocket()
            .state::<AuthConfig>()
            .is_some_and(|config| config.enabled);
        if !enabled {
            return Outcome::Success(Authenticated(None));
        }

        let result = request
            .headers()
            .get_one(IDENTITY_HEADER)
            .ok_or(AuthError::MissingIdentity)
            .and_then(decode_identity);

        match result {
            Ok(identity) => Outcome::Success(Authenticated(Some(identity))),
            Err(err) => {
                warn!(uri = %request.uri(), error = %err, "Request rejected");
                request.local_cache(|| AuthFailure(Some(err.to_string())));
                Outcome::Error((err.status(), err))
            }
        }
    }
}
