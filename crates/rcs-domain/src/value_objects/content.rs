//! Rule content value objects
//!
//! Mirrors the on-disk layout: a [`RuleContentDirectory`] holds the global
//! [`GlobalRuleConfig`] and one [`RuleContent`] per rule directory, each of
//! which holds one [`RuleErrorKeyContent`] per error-key subdirectory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dictionaries applicable to all rule content, read from `config.yaml`
///
/// Translates the textual impact and resolution-risk labels used in error
/// key metadata into numeric codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRuleConfig {
    /// Impact label to severity
    #[serde(default)]
    pub impact: BTreeMap<String, i32>,

    /// Resolution-risk label to numeric risk
    #[serde(default)]
    pub resolution_risk: BTreeMap<String, i32>,
}

impl GlobalRuleConfig {
    /// Numeric impact for `label`, if known
    pub fn impact_code(&self, label: &str) -> Option<i32> {
        self.impact.get(label).copied()
    }

    /// Numeric resolution risk for `label`, if known
    pub fn resolution_risk_code(&self, label: &str) -> Option<i32> {
        self.resolution_risk.get(label).copied()
    }
}

/// Contents of `plugin.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePluginInfo {
    /// Human readable rule name
    #[serde(default)]
    pub name: String,

    /// Knowledge base node identifier
    #[serde(default)]
    pub node_id: String,

    /// Product the rule applies to
    #[serde(default)]
    pub product_code: String,

    /// Module implementing the rule
    #[serde(default)]
    pub python_module: String,
}

/// Impact label together with its resolved code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    /// Label as written in `metadata.yaml`
    pub name: String,

    /// Code from [`GlobalRuleConfig::impact`], 0 when the label is unknown
    pub impact: i32,
}

/// Normalised contents of an error key's `metadata.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorKeyMetadata {
    /// Triggering condition; list forms are already joined with `"; "`
    pub condition: String,
    pub description: String,
    pub impact: Impact,
    pub likelihood: i32,
    pub publish_date: String,
    /// Code from [`GlobalRuleConfig::resolution_risk`]
    pub resolution_risk: i32,
    pub status: String,
    pub tags: Vec<String>,
}

/// Content of a single error key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleErrorKeyContent {
    pub generic: String,
    pub summary: String,
    pub reason: String,
    /// Whether the error key carries its own `reason.md`
    pub has_reason: bool,
    pub resolution: String,
    pub more_info: String,
    pub metadata: ErrorKeyMetadata,
}

/// All content of one rule
///
/// Rule-level text fields double as defaults for error keys that do not
/// provide the same file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContent {
    pub generic: String,
    pub summary: String,
    pub reason: String,
    /// Whether the rule directory carries its own `reason.md`
    pub has_reason: bool,
    pub resolution: String,
    pub more_info: String,
    pub plugin: RulePluginInfo,
    pub error_keys: BTreeMap<String, RuleErrorKeyContent>,
}

/// Snapshot of every successfully parsed rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContentDirectory {
    pub config: GlobalRuleConfig,
    pub rules: BTreeMap<String, RuleContent>,
}

impl RuleContentDirectory {
    /// Empty directory using `config`
    pub fn new(config: GlobalRuleConfig) -> Self {
        Self {
            config,
            rules: BTreeMap::new(),
        }
    }
}
