//! Parsing of a single rule directory and its error keys

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rcs_domain::constants::{
    GENERIC_MARKDOWN, MANDATORY_RULE_WIDE_CONTENT_FILES, METADATA_YAML, MORE_INFO_MARKDOWN,
    PLUGIN_YAML, REASON_MARKDOWN, RESOLUTION_MARKDOWN, SHARED_CONTENT_FILES, SUMMARY_MARKDOWN,
};
use rcs_domain::{Error, GlobalRuleConfig, Result, RuleContent, RuleErrorKeyContent, RulePluginInfo};
use tracing::{debug, error, warn};

use super::files::ContentFiles;
use super::metadata::{parse_error_key_metadata, parse_yaml};

/// Text fields shared between rules and error keys
struct SharedText {
    generic: String,
    summary: String,
    reason: String,
    has_reason: bool,
    resolution: String,
    more_info: String,
}

impl SharedText {
    fn from_files(files: &ContentFiles) -> Self {
        let reason = files.text(REASON_MARKDOWN);
        Self {
            generic: files.text(GENERIC_MARKDOWN),
            summary: files.text(SUMMARY_MARKDOWN),
            has_reason: !reason.is_empty(),
            reason,
            resolution: files.text(RESOLUTION_MARKDOWN),
            more_info: files.text(MORE_INFO_MARKDOWN),
        }
    }
}

fn fill_if_empty(target: &mut String, fallback: &str) {
    if target.is_empty() && !fallback.is_empty() {
        target.push_str(fallback);
    }
}

/// Copy rule-level text into error keys that lack their own
fn inherit_shared_text(rule: &SharedText, key: &mut RuleErrorKeyContent) {
    fill_if_empty(&mut key.generic, &rule.generic);
    fill_if_empty(&mut key.summary, &rule.summary);
    fill_if_empty(&mut key.reason, &rule.reason);
    fill_if_empty(&mut key.resolution, &rule.resolution);
    fill_if_empty(&mut key.more_info, &rule.more_info);
}

/// Names of the mandatory fields an error key still lacks
fn missing_mandatory_fields(key: &RuleErrorKeyContent) -> Vec<&'static str> {
    MANDATORY_RULE_WIDE_CONTENT_FILES
        .into_iter()
        .filter(|&file| match file {
            GENERIC_MARKDOWN => key.generic.is_empty(),
            REASON_MARKDOWN => key.reason.is_empty(),
            _ => false,
        })
        .collect()
}

/// Parse one error key directory
pub(crate) fn parse_error_key(dir: &Path, config: &GlobalRuleConfig) -> Result<RuleErrorKeyContent> {
    let mut names = SHARED_CONTENT_FILES.to_vec();
    names.push(METADATA_YAML);
    let files = ContentFiles::read(dir, &names);

    let metadata_text = files
        .get(METADATA_YAML)
        .ok_or_else(|| Error::missing_mandatory_file(METADATA_YAML))?;
    let metadata = parse_error_key_metadata(metadata_text, config)?;

    let text = SharedText::from_files(&files);
    Ok(RuleErrorKeyContent {
        generic: text.generic,
        summary: text.summary,
        reason: text.reason,
        has_reason: text.has_reason,
        resolution: text.resolution,
        more_info: text.more_info,
        metadata,
    })
}

/// Parse every immediate subdirectory of `rule_dir` as an error key
///
/// Symbolic links are not followed. The first failing error key rejects the
/// whole rule.
fn parse_error_keys(
    rule_dir: &Path,
    config: &GlobalRuleConfig,
) -> Result<BTreeMap<String, RuleErrorKeyContent>> {
    let entries = fs::read_dir(rule_dir).map_err(|e| Error::file(rule_dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::file(rule_dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::file(entry.path(), e))?;
        if file_type.is_dir() {
            dirs.push(entry);
        }
    }
    dirs.sort_by_key(|entry| entry.file_name());

    let mut error_keys = BTreeMap::new();
    for entry in dirs {
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!(error_key = %name, "Parsing error key");
        let content = parse_error_key(&entry.path(), config).inspect_err(|e| {
            error!(error_key = %name, error = %e, "Error key cannot be parsed");
        })?;
        error_keys.insert(name, content);
    }
    Ok(error_keys)
}

/// Parse a rule directory: rule-level files, error keys, inheritance and
/// validation of mandatory text
pub(crate) fn parse_rule_dir(rule_dir: &Path, config: &GlobalRuleConfig) -> Result<RuleContent> {
    let mut names = SHARED_CONTENT_FILES.to_vec();
    names.push(PLUGIN_YAML);
    let files = ContentFiles::read(rule_dir, &names);

    let plugin_text = files
        .get(PLUGIN_YAML)
        .ok_or_else(|| Error::missing_mandatory_file(PLUGIN_YAML))?;
    let plugin: RulePluginInfo = parse_yaml(plugin_text, PLUGIN_YAML)?;

    let text = SharedText::from_files(&files);
    let mut error_keys = parse_error_keys(rule_dir, config)?;

    for key in error_keys.values_mut() {
        inherit_shared_text(&text, key);
    }

    let incomplete: Vec<String> = error_keys
        .iter()
        .filter_map(|(name, key)| {
            let missing = missing_mandatory_fields(key);
            (!missing.is_empty()).then(|| format!("{name} ({})", missing.join(", ")))
        })
        .collect();
    if !incomplete.is_empty() {
        return Err(Error::invalid_content(format!(
            "some of the error keys are missing mandatory attributes: {}",
            incomplete.join(", ")
        )));
    }

    if error_keys.is_empty() {
        warn!(rule = %rule_dir.display(), "Rule has no error keys");
    }

    Ok(RuleContent {
        generic: text.generic,
        summary: text.summary,
        reason: text.reason,
        has_reason: text.has_reason,
        resolution: text.resolution,
        more_info: text.more_info,
        plugin,
        error_keys,
    })
}
