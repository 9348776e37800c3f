//! Domain layer constants
//!
//! Fixed, case-sensitive names of the rule content layout:
//!
//! ```text
//! <content-root>/config.yaml
//! <content-root>/{external,internal}/**/plugin.yaml
//! <rule-dir>/{generic,summary,reason,resolution,more_info}.md
//! <rule-dir>/<error-key>/{generic,summary,reason,resolution,more_info}.md
//! <rule-dir>/<error-key>/metadata.yaml
//! ```

// ============================================================================
// CONTENT FILE NAMES
// ============================================================================

/// Global configuration at the content root
pub const GLOBAL_CONFIG_YAML: &str = "config.yaml";

/// Plugin descriptor; its presence marks a rule directory
pub const PLUGIN_YAML: &str = "plugin.yaml";

/// Error key metadata descriptor
pub const METADATA_YAML: &str = "metadata.yaml";

/// Short description of the recommendation
pub const GENERIC_MARKDOWN: &str = "generic.md";

/// Longer description of the recommendation
pub const SUMMARY_MARKDOWN: &str = "summary.md";

/// Why the recommendation was triggered
pub const REASON_MARKDOWN: &str = "reason.md";

/// Steps that resolve the issue
pub const RESOLUTION_MARKDOWN: &str = "resolution.md";

/// Additional reading
pub const MORE_INFO_MARKDOWN: &str = "more_info.md";

/// Files that may appear on either the rule or the error key level
pub const SHARED_CONTENT_FILES: [&str; 5] = [
    GENERIC_MARKDOWN,
    REASON_MARKDOWN,
    SUMMARY_MARKDOWN,
    RESOLUTION_MARKDOWN,
    MORE_INFO_MARKDOWN,
];

/// Files every error key must end up with after rule-level fallback
pub const MANDATORY_RULE_WIDE_CONTENT_FILES: [&str; 2] = [GENERIC_MARKDOWN, REASON_MARKDOWN];

// ============================================================================
// RULE CATEGORIES
// ============================================================================

/// Directory (and status tag) of externally visible rules
pub const EXTERNAL_RULES_GROUP: &str = "external";

/// Directory (and status tag) of internal rules
pub const INTERNAL_RULES_GROUP: &str = "internal";

// ============================================================================
// CONTENT VALUES
// ============================================================================

/// Separator used when `condition` is given as a list
pub const CONDITION_LIST_SEPARATOR: &str = "; ";

/// Numeric code for impact or resolution-risk labels missing from the dictionary
pub const UNKNOWN_LABEL_CODE: i32 = 0;
