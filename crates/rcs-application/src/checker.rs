//! Content lint
//!
//! Finds problems that do not prevent content from loading but that content
//! authors should fix: duplicated group names and tags, empty attributes and
//! files, and error-key tags that no group defines.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rcs_domain::constants::{
    GENERIC_MARKDOWN, MORE_INFO_MARKDOWN, REASON_MARKDOWN, RESOLUTION_MARKDOWN, SUMMARY_MARKDOWN,
};
use rcs_domain::{RuleContentDirectory, RuleErrorKeyContent};
use tracing::{error, warn};

use crate::groups::GroupCatalog;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One problem found by the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFinding {
    pub severity: Severity,
    /// What the finding is about, e.g. `rule 'x'` or `error key 'x|Y'`
    pub subject: String,
    pub message: String,
}

impl CheckFinding {
    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Emit the finding through `tracing` at its severity
    pub fn log(&self) {
        match self.severity {
            Severity::Warning => warn!(subject = %self.subject, "{}", self.message),
            Severity::Error => error!(subject = %self.subject, "{}", self.message),
        }
    }
}

impl fmt::Display for CheckFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.subject, self.message)
    }
}

/// Report duplicate group names and tags defined by more than one group
pub fn check_groups(groups: &GroupCatalog) -> Vec<CheckFinding> {
    let mut findings = Vec::new();
    let mut group_names: BTreeMap<&str, &str> = BTreeMap::new();
    let mut tag_owners: BTreeMap<&str, &str> = BTreeMap::new();

    for (key, group) in groups {
        if let Some(first_key) = group_names.get(group.name.as_str()) {
            findings.push(CheckFinding::warning(
                format!("group '{key}'"),
                format!(
                    "multiple groups with the name '{}' (first with key '{first_key}')",
                    group.name
                ),
            ));
        } else {
            group_names.insert(&group.name, key);
        }

        for tag in &group.tags {
            if let Some(first_group) = tag_owners.get(tag.as_str()) {
                findings.push(CheckFinding::warning(
                    format!("group '{}'", group.name),
                    format!("tag '{tag}' is already defined in group '{first_group}'"),
                ));
            } else {
                tag_owners.insert(tag, &group.name);
            }
        }
    }

    findings
}

fn check_not_empty(findings: &mut Vec<CheckFinding>, subject: &str, what: String, value: &str) {
    if value.trim().is_empty() {
        findings.push(CheckFinding::warning(subject, format!("{what} is empty")));
    }
}

/// Lint every loaded rule against the group catalog
pub fn check_content(groups: &GroupCatalog, directory: &RuleContentDirectory) -> Vec<CheckFinding> {
    let known_tags: BTreeSet<&str> = groups
        .values()
        .flat_map(|group| group.tags.iter().map(String::as_str))
        .collect();
    let mut findings = Vec::new();

    for (rule_name, rule) in &directory.rules {
        let subject = format!("rule '{rule_name}'");
        let plugin = &rule.plugin;
        for (attribute, value) in [
            ("name", &plugin.name),
            ("node_id", &plugin.node_id),
            ("product_code", &plugin.product_code),
            ("python_module", &plugin.python_module),
        ] {
            check_not_empty(&mut findings, &subject, format!("attribute '{attribute}'"), value);
        }
        for (file, value) in [
            (MORE_INFO_MARKDOWN, &rule.more_info),
            (REASON_MARKDOWN, &rule.reason),
            (RESOLUTION_MARKDOWN, &rule.resolution),
            (SUMMARY_MARKDOWN, &rule.summary),
        ] {
            check_not_empty(&mut findings, &subject, format!("content file '{file}'"), value);
        }

        if rule.error_keys.is_empty() {
            findings.push(CheckFinding::warning(&subject, "rule contains no error key"));
        }

        for (key_name, key) in &rule.error_keys {
            let subject = format!("error key '{rule_name}|{key_name}'");
            check_error_key(&mut findings, &subject, key, &known_tags);
        }
    }

    findings
}

fn check_error_key(
    findings: &mut Vec<CheckFinding>,
    subject: &str,
    key: &RuleErrorKeyContent,
    known_tags: &BTreeSet<&str>,
) {
    check_not_empty(findings, subject, format!("content file '{GENERIC_MARKDOWN}'"), &key.generic);

    let metadata = &key.metadata;
    for (attribute, value) in [
        ("condition", &metadata.condition),
        ("description", &metadata.description),
        ("impact", &metadata.impact.name),
        ("publish_date", &metadata.publish_date),
        ("status", &metadata.status),
    ] {
        check_not_empty(findings, subject, format!("attribute '{attribute}'"), value);
    }

    let mut seen = BTreeSet::new();
    for tag in &metadata.tags {
        if !seen.insert(tag.as_str()) {
            findings.push(CheckFinding::error(subject, format!("duplicate tag '{tag}'")));
            continue;
        }
        if !known_tags.contains(tag.as_str()) {
            findings.push(CheckFinding::error(
                subject,
                format!("invalid tag '{tag}' is not defined by any group"),
            ));
        }
    }
}
