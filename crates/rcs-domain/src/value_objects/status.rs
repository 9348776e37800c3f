//! Rule parsing status
//!
//! One [`RuleContentStatus`] is recorded per rule directory encountered during
//! a parse, independently of whether its content was accepted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{EXTERNAL_RULES_GROUP, INTERNAL_RULES_GROUP};

/// Status of every rule directory, keyed by directory name
pub type RuleContentStatusMap = BTreeMap<String, RuleContentStatus>;

/// Category a rule was found under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Rules under `<root>/external`
    External,
    /// Rules under `<root>/internal`
    Internal,
}

impl RuleType {
    /// Both categories in parse order
    pub const ALL: [RuleType; 2] = [RuleType::External, RuleType::Internal];

    /// Directory name and wire representation of the category
    pub fn as_str(self) -> &'static str {
        match self {
            Self::External => EXTERNAL_RULES_GROUP,
            Self::Internal => INTERNAL_RULES_GROUP,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of parsing one rule directory
///
/// `loaded` is true exactly when `error` is empty. Values are built by the
/// constructors or by deserialization, which rejects a disagreeing pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatusFields")]
pub struct RuleContentStatus {
    #[serde(rename = "type")]
    rule_type: RuleType,
    loaded: bool,
    #[serde(rename = "parsing_error")]
    error: String,
}

/// Wire shape of [`RuleContentStatus`] before the invariant is checked
#[derive(Deserialize)]
struct StatusFields {
    #[serde(rename = "type")]
    rule_type: RuleType,
    loaded: bool,
    #[serde(rename = "parsing_error", default)]
    error: String,
}

impl TryFrom<StatusFields> for RuleContentStatus {
    type Error = String;

    fn try_from(fields: StatusFields) -> Result<Self, Self::Error> {
        match (fields.loaded, fields.error.is_empty()) {
            (true, true) => Ok(Self::loaded(fields.rule_type)),
            (false, false) => Ok(Self::failed(fields.rule_type, fields.error)),
            (true, false) => Err(format!(
                "loaded rule carries a parsing error: {}",
                fields.error
            )),
            (false, true) => Err("rule not loaded but parsing error is empty".to_string()),
        }
    }
}

impl RuleContentStatus {
    /// A rule whose content was accepted
    pub fn loaded(rule_type: RuleType) -> Self {
        Self {
            rule_type,
            loaded: true,
            error: String::new(),
        }
    }

    /// A rule rejected with `error`
    ///
    /// An empty message is replaced so that the invariant holds.
    pub fn failed(rule_type: RuleType, error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.is_empty() {
            error = "unknown parsing error".to_string();
        }
        Self {
            rule_type,
            loaded: false,
            error,
        }
    }

    /// Category the rule was found under
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Whether the content was accepted
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Parsing error, empty for loaded rules
    pub fn error(&self) -> &str {
        &self.error
    }
}
