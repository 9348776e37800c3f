//! # Rules Content Service Domain
//!
//! Core types shared by every layer of the rules content service:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | Groups, rule content, error-key metadata, parsing status |
//! | [`error`] | The service-wide [`Error`] taxonomy and [`Result`] alias |
//! | [`constants`] | Fixed file and category names of the content layout |
//!
//! The domain crate performs no I/O. Parsing lives in `rcs-application`,
//! configuration and logging in `rcs-infrastructure`.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    ErrorKeyMetadata, GlobalRuleConfig, Group, Impact, RuleContent, RuleContentDirectory,
    RuleContentStatus, RuleContentStatusMap, RuleErrorKeyContent, RulePluginInfo, RuleType,
};
