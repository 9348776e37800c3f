//! Group catalog loading

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rcs_domain::{Error, Group, Result};
use tracing::info;

/// Groups keyed by the mapping key used in the source file
pub type GroupCatalog = BTreeMap<String, Group>;

/// Load the group catalog from the YAML file at `path`
///
/// The document is a mapping from arbitrary keys to groups. An empty
/// document is an empty catalog. Duplicate names or tags are accepted here;
/// [`crate::check_groups`] reports them.
///
/// # Errors
///
/// [`Error::File`] when the file cannot be read, [`Error::Parse`] when it is
/// not a valid group mapping.
pub fn load_groups(path: &Path) -> Result<GroupCatalog> {
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let catalog = parse_groups(&text)?;
    info!(path = %path.display(), groups = catalog.len(), "Group configuration loaded");
    Ok(catalog)
}

/// Parse group catalog YAML
pub fn parse_groups(text: &str) -> Result<GroupCatalog> {
    if text.trim().is_empty() {
        return Ok(GroupCatalog::new());
    }
    serde_yaml::from_str(text)
        .map_err(|e| Error::parse_with_source(format!("cannot parse group configuration: {e}"), e))
}

/// Groups in catalog key order, as served by `/groups`
pub fn group_list(catalog: &GroupCatalog) -> Vec<Group> {
    catalog.values().cloned().collect()
}
