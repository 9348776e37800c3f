//! Content and group catalog locations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTENT_PATH, DEFAULT_GROUPS_CONFIG_PATH};

/// Rule content configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Root of the content tree (the directory holding `config.yaml`)
    pub path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONTENT_PATH),
        }
    }
}

/// Group catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// YAML file with the group definitions
    pub config_path: PathBuf,
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_GROUPS_CONFIG_PATH),
        }
    }
}
