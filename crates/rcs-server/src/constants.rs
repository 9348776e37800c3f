//! Server-specific constants

// ============================================================================
// EXIT STATUS CODES
// ============================================================================

/// Command finished successfully
pub const EXIT_STATUS_OK: u8 = 0;

/// Server could not be initialized or started (includes group loading)
pub const EXIT_STATUS_SERVER_ERROR: u8 = 1;

/// Rule content could not be read
pub const EXIT_STATUS_READ_CONTENT_ERROR: u8 = 2;

/// Any other failure, e.g. configuration or output encoding
pub const EXIT_STATUS_OTHER: u8 = 3;

// ============================================================================
// HTTP API CONSTANTS
// ============================================================================

/// Header carrying the base64 encoded identity document
pub const IDENTITY_HEADER: &str = "x-rh-identity";

/// Status value of successful responses
pub const STATUS_OK: &str = "ok";

/// Response key of the group list
pub const GROUPS_KEY: &str = "groups";

/// Response key of the rule status map
pub const RULES_KEY: &str = "rules";

/// Response key of the build information
pub const INFO_KEY: &str = "info";

// ============================================================================
// METRIC NAMES (prefixed with the configured namespace)
// ============================================================================

/// Counter of requests per endpoint
pub const METRIC_API_REQUESTS: &str = "api_endpoints_requests";

/// Histogram of response times per endpoint, in seconds
pub const METRIC_API_RESPONSE_TIME: &str = "api_endpoints_response_time";

/// Counter of responses per status code
pub const METRIC_API_STATUS_CODES: &str = "api_endpoints_status_codes";

/// Endpoint label of requests that matched no route
pub const UNMATCHED_ENDPOINT: &str = "unmatched";
