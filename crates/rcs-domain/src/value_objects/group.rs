//! Rule groups
//!
//! A group is a tag-based bucket used by UIs to categorise rules. Groups are
//! defined in a single YAML mapping keyed by an arbitrary group key.

use serde::{Deserialize, Serialize};

/// A named set of tags
///
/// # Example
///
/// ```
/// use rcs_domain::Group;
///
/// let group = Group::new("Security", "Security related rules", ["security", "cve"]);
///
/// assert!(group.has_tag("cve"));
/// assert!(!group.has_tag("performance"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name, expected (not enforced) to be unique across groups
    #[serde(default)]
    pub name: String,

    /// Human readable description
    #[serde(default)]
    pub description: String,

    /// Tags selecting the rules of this group
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Group {
    /// Create a new group
    pub fn new<I, T>(name: impl Into<String>, description: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the group carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
