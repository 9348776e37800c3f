//! Value objects
//!
//! Immutable data built once by the content parser and served for the
//! lifetime of the process.

pub mod content;
pub mod group;
pub mod status;

pub use content::{
    ErrorKeyMetadata, GlobalRuleConfig, Impact, RuleContent, RuleContentDirectory,
    RuleErrorKeyContent, RulePluginInfo,
};
pub use group::Group;
pub use status::{RuleContentStatus, RuleContentStatusMap, RuleType};
