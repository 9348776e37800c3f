//! Selection of rule status entries
//!
//! Filters are additive: an entry is kept when it matches *any* active
//! filter. With no active filter every entry is kept.

use rcs_domain::{RuleContentStatusMap, RuleType};

/// Query parameter selecting internal rules (presence only)
pub const INTERNAL_PARAM: &str = "internal";
/// Query parameter selecting external rules (presence only)
pub const EXTERNAL_PARAM: &str = "external";
/// Repeatable query parameter selecting rules by name
pub const RULE_PARAM: &str = "rule";

/// Active status filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    /// Keep every internal rule
    pub internal: bool,
    /// Keep every external rule
    pub external: bool,
    /// Keep the rules with these names
    pub rules: Vec<String>,
}

impl StatusFilter {
    /// Build a filter from decoded query pairs
    ///
    /// `internal` and `external` are switched on by presence, whatever their
    /// value. Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key {
                INTERNAL_PARAM => filter.internal = true,
                EXTERNAL_PARAM => filter.external = true,
                RULE_PARAM => filter.rules.push(value.to_owned()),
                _ => {}
            }
        }
        filter
    }

    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        !self.internal && !self.external && self.rules.is_empty()
    }

    fn selects_type(&self, rule_type: RuleType) -> bool {
        match rule_type {
            RuleType::Internal => self.internal,
            RuleType::External => self.external,
        }
    }
}

/// Apply `filter` to `status`
pub fn filter_status_map(status: &RuleContentStatusMap, filter: &StatusFilter) -> RuleContentStatusMap {
    if filter.is_empty() {
        return status.clone();
    }

    status
        .iter()
        .filter(|(name, entry)| {
            filter.selects_type(entry.rule_type()) || filter.rules.iter().any(|r| r == *name)
        })
        .map(|(name, entry)| (name.clone(), entry.clone()))
        .collect()
}
