//! Server configuration types

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AUTH_TYPE_XRH, DEFAULT_API_PREFIX, DEFAULT_API_SPEC_FILE, DEFAULT_SERVER_ADDRESS,
};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, `host:port` or `:port`
    pub address: String,

    /// Prefix of every API route
    pub api_prefix: String,

    /// OpenAPI document, served under the prefix by its file name
    pub api_spec_file: PathBuf,

    /// Require an identity header on every route except the OpenAPI document
    pub auth: bool,

    /// Identity scheme; only `xrh` is supported
    pub auth_type: String,

    /// Answer CORS preflight requests and add CORS headers
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            api_spec_file: PathBuf::from(DEFAULT_API_SPEC_FILE),
            auth: false,
            auth_type: AUTH_TYPE_XRH.to_string(),
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    /// Resolve [`Self::address`] to the first matching socket address
    ///
    /// Host names are resolved; a bare `:port` listens on all interfaces.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        let address = match self.address.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => self.address.clone(),
        };
        address.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("'{}' resolves to no address", self.address),
            )
        })
    }

    /// Route prefix with a leading slash and without a trailing one
    ///
    /// An empty or `/` prefix mounts routes at the root.
    pub fn normalized_api_prefix(&self) -> String {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}")
        }
    }

    /// File name under which the OpenAPI document is served
    pub fn api_spec_file_name(&self) -> Option<String> {
        self.api_spec_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}
