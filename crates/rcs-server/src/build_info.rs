//! Build information
//!
//! Version comes from the package manifest. Time, branch and commit are
//! taken from `RCS_BUILD_TIME`, `RCS_BUILD_BRANCH` and `RCS_BUILD_COMMIT`
//! at compile time when the build sets them.

use std::collections::BTreeMap;

/// Value reported for build facts the build did not provide
pub const NOT_SET: &str = "*not set*";

/// Facts about the running binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub time: String,
    pub branch: String,
    pub commit: String,
}

impl BuildInfo {
    /// Information baked into this binary
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            time: option_env!("RCS_BUILD_TIME").unwrap_or(NOT_SET).to_string(),
            branch: option_env!("RCS_BUILD_BRANCH").unwrap_or(NOT_SET).to_string(),
            commit: option_env!("RCS_BUILD_COMMIT").unwrap_or(NOT_SET).to_string(),
        }
    }

    /// Map served by `/info`
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("BuildVersion".to_string(), self.version.clone()),
            ("BuildTime".to_string(), self.time.clone()),
            ("BuildBranch".to_string(), self.branch.clone()),
            ("BuildCommit".to_string(), self.commit.clone()),
        ])
    }

    /// `(label, value)` pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Version:", self.version.as_str()),
            ("Build time:", self.time.as_str()),
            ("Branch:", self.branch.as_str()),
            ("Commit:", self.commit.as_str()),
        ]
    }
}
