//! Shared, read-only server state

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rcs_application::{GroupCatalog, ParsedContent, group_list};
use rcs_domain::{Group, Result, RuleContentDirectory, RuleContentStatusMap};
use rcs_infrastructure::config::ServerConfig;
use rcs_infrastructure::error_ext::ErrorContext;
use tracing::debug;

use crate::build_info::BuildInfo;

/// Snapshot served by the content API
///
/// Built once at startup and never mutated afterwards. The encoded content
/// blob is computed on first use; concurrent first requests may both encode,
/// and the first stored value is kept.
#[derive(Debug)]
pub struct ContentState {
    groups: Vec<Group>,
    directory: RuleContentDirectory,
    status: RuleContentStatusMap,
    info: BTreeMap<String, String>,
    api_spec_file: PathBuf,
    api_spec_name: Option<String>,
    encoded_content: OnceLock<Vec<u8>>,
}

impl ContentState {
    /// Build the state from loaded groups and content
    pub fn new(
        groups: &GroupCatalog,
        content: ParsedContent,
        build_info: &BuildInfo,
        server: &ServerConfig,
    ) -> Self {
        Self {
            groups: group_list(groups),
            directory: content.directory,
            status: content.status,
            info: build_info.to_map(),
            api_spec_file: server.api_spec_file.clone(),
            api_spec_name: server.api_spec_file_name(),
            encoded_content: OnceLock::new(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn directory(&self) -> &RuleContentDirectory {
        &self.directory
    }

    pub fn status(&self) -> &RuleContentStatusMap {
        &self.status
    }

    pub fn info(&self) -> &BTreeMap<String, String> {
        &self.info
    }

    pub fn api_spec_file(&self) -> &Path {
        &self.api_spec_file
    }

    /// Name the OpenAPI document is served under, if the path has one
    pub fn api_spec_name(&self) -> Option<&str> {
        self.api_spec_name.as_deref()
    }

    /// The whole content directory encoded as MessagePack (named fields)
    pub fn encoded_content(&self) -> Result<&[u8]> {
        if let Some(encoded) = self.encoded_content.get() {
            return Ok(encoded);
        }

        let encoded = rmp_serde::to_vec_named(&self.directory)
            .serialization_context("Cannot encode rules static content")?;
        debug!(bytes = encoded.len(), "Rules static content encoded");
        Ok(self.encoded_content.get_or_init(|| encoded))
    }
}
