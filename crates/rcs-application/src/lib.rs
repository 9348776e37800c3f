//! Application Layer - Rules Content Service
//!
//! Turns the on-disk rule content and group definitions into the domain
//! snapshot served over HTTP.
//!
//! ## Use Cases
//!
//! | Module | Operation |
//! |--------|-----------|
//! | [`content`] | [`parse_rule_content_dir`]: walk the content tree, build the directory and status map |
//! | [`groups`] | [`load_groups`]: read the group catalog |
//! | [`status_filter`] | [`filter_status_map`]: select status entries by category or name |
//! | [`checker`] | [`check_groups`] / [`check_content`]: non-fatal content lint |
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `rcs-domain`: For domain entities and the error taxonomy
//! - Pure Rust libraries for YAML parsing, directory walking and logging

pub mod checker;
pub mod content;
pub mod groups;
pub mod status_filter;

pub use checker::{CheckFinding, Severity, check_content, check_groups};
pub use content::{Condition, ParsedContent, parse_global_config, parse_rule_content_dir};
pub use groups::{GroupCatalog, group_list, load_groups, parse_groups};
pub use status_filter::{StatusFilter, filter_status_map};
