//! Rule content parser
//!
//! Loads a content tree of the form
//!
//! ```text
//! <root>/config.yaml
//! <root>/external/**/<rule>/plugin.yaml
//! <root>/internal/**/<rule>/plugin.yaml
//! <rule>/<error_key>/metadata.yaml
//! ```
//!
//! A directory directly containing a regular `plugin.yaml` file is a rule
//! directory; the walk does not descend below it. Every rule found produces exactly one status
//! entry, so failures never disappear silently.

mod files;
mod metadata;
mod rule;

use std::fs;
use std::io;
use std::path::Path;

use rcs_domain::constants::{GLOBAL_CONFIG_YAML, PLUGIN_YAML};
use rcs_domain::{
    Error, GlobalRuleConfig, Result, RuleContentDirectory, RuleContentStatus,
    RuleContentStatusMap, RuleType,
};
use tracing::{debug, error, info};
use walkdir::WalkDir;

pub use metadata::{Condition, parse_error_key_metadata};

/// Result of a successful content load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    /// Every rule that parsed cleanly
    pub directory: RuleContentDirectory,
    /// One entry per rule directory found, loaded or not
    pub status: RuleContentStatusMap,
}

impl ParsedContent {
    /// Number of rules that failed to load
    pub fn failed_count(&self) -> usize {
        self.status.values().filter(|s| !s.is_loaded()).count()
    }
}

/// Read `config.yaml` at the root of the content tree
pub fn parse_global_config(path: &Path) -> Result<GlobalRuleConfig> {
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    metadata::parse_yaml(&text, GLOBAL_CONFIG_YAML)
}

/// Load the whole content tree rooted at `root`
///
/// # Errors
///
/// Fails only when the global config cannot be read or parsed, or when a
/// category directory (`external`, `internal`) is missing or cannot be
/// walked. Problems with individual rules are reported through
/// [`ParsedContent::status`] instead.
pub fn parse_rule_content_dir(root: &Path) -> Result<ParsedContent> {
    info!(path = %root.display(), "Loading rule content");

    let config = parse_global_config(&root.join(GLOBAL_CONFIG_YAML))?;
    let mut parsed = ParsedContent {
        directory: RuleContentDirectory::new(config),
        status: RuleContentStatusMap::new(),
    };

    for rule_type in RuleType::ALL {
        let category = root.join(rule_type.as_str());
        let invalid = parse_rules_in_category(&category, rule_type, &mut parsed)?;

        if !invalid.is_empty() {
            error!(
                rule_type = %rule_type,
                count = invalid.len(),
                "The following rules contain invalid content"
            );
            for message in &invalid {
                error!(rule_type = %rule_type, "{message}");
            }
        }
    }

    info!(
        rules = parsed.directory.rules.len(),
        statuses = parsed.status.len(),
        failed = parsed.failed_count(),
        "Rule content loaded"
    );
    Ok(parsed)
}

/// A directory is a rule directory when its `plugin.yaml` resolves to a
/// regular file
fn is_rule_dir(dir: &Path) -> bool {
    fs::metadata(dir.join(PLUGIN_YAML)).is_ok_and(|meta| meta.is_file())
}

fn ensure_directory(path: &Path) -> Result<()> {
    let meta = fs::metadata(path).map_err(|e| Error::file(path, e))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(Error::file(
            path,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ))
    }
}

fn walk_error(category: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map_or_else(|| category.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    Error::file(path, source)
}

fn record_status(
    status: &mut RuleContentStatusMap,
    name: &str,
    entry: RuleContentStatus,
) {
    if let Some(previous) = status.get(name) {
        error!(
            rule = %name,
            previous_type = %previous.rule_type(),
            rule_type = %entry.rule_type(),
            "Duplicate rule name found"
        );
    }
    status.insert(name.to_owned(), entry);
}

/// Walk one category directory, parse every rule in it and return the
/// descriptions of the rules that failed
fn parse_rules_in_category(
    category: &Path,
    rule_type: RuleType,
    parsed: &mut ParsedContent,
) -> Result<Vec<String>> {
    ensure_directory(category)?;
    debug!(category = %category.display(), rule_type = %rule_type, "Scanning rule category");

    let mut invalid = Vec::new();
    let mut walker = WalkDir::new(category)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| walk_error(category, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        if !is_rule_dir(dir) {
            continue;
        }
        walker.skip_current_dir();

        let name = entry.file_name().to_string_lossy().into_owned();
        info!(directory = %dir.display(), "{PLUGIN_YAML} found");

        match rule::parse_rule_dir(dir, &parsed.directory.config) {
            Ok(content) => {
                parsed.directory.rules.insert(name.clone(), content);
                record_status(&mut parsed.status, &name, RuleContentStatus::loaded(rule_type));
            }
            Err(e) => {
                error!(directory = %dir.display(), error = %e, "Error trying to parse rule");
                invalid.push(format!("Directory: {}, Error: {e}", dir.display()));
                record_status(
                    &mut parsed.status,
                    &name,
                    RuleContentStatus::failed(rule_type, e.to_string()),
                );
            }
        }
    }

    Ok(invalid)
}
