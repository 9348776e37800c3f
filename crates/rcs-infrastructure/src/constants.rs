//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Content layout constants are defined in `rcs_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

/// Environment variable prefix for configuration (`RCS__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "RCS";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Suffix appended to the prefix to name the configuration file variable
/// (`RCS_CONFIG_FILE`)
pub const CONFIG_FILE_ENV_SUFFIX: &str = "_CONFIG_FILE";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default listen address
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Default prefix of every API route
pub const DEFAULT_API_PREFIX: &str = "/api/v1/";

/// Default OpenAPI document served next to the API
pub const DEFAULT_API_SPEC_FILE: &str = "openapi.json";

/// The only supported authentication scheme
pub const AUTH_TYPE_XRH: &str = "xrh";

// ============================================================================
// CONTENT CONSTANTS
// ============================================================================

/// Default root of the rule content tree
pub const DEFAULT_CONTENT_PATH: &str = "/rules-content";

/// Default group catalog file
pub const DEFAULT_GROUPS_CONFIG_PATH: &str = "groups_config.yaml";

// ============================================================================
// METRICS CONSTANTS
// ============================================================================

/// Default Prometheus namespace
pub const DEFAULT_METRICS_NAMESPACE: &str = "content_service";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RCS_LOG";

/// File stem of rolled log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "rcs";

/// Placeholder printed instead of secrets
pub const MASKED_SECRET: &str = "********";
