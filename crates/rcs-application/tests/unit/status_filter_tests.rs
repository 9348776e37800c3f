//! Tests for status map filtering

use rcs_application::{StatusFilter, filter_status_map};
use rcs_domain::{RuleContentStatus, RuleContentStatusMap, RuleType};

fn status_map() -> RuleContentStatusMap {
    RuleContentStatusMap::from([
        ("rule1".to_string(), RuleContentStatus::loaded(RuleType::External)),
        ("rule2".to_string(), RuleContentStatus::loaded(RuleType::Internal)),
        (
            "rule3".to_string(),
            RuleContentStatus::failed(RuleType::External, "broken"),
        ),
        ("rule4".to_string(), RuleContentStatus::loaded(RuleType::Internal)),
    ])
}

fn names(map: &RuleContentStatusMap) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[test]
fn test_no_filter_returns_everything() {
    let map = status_map();

    let filtered = filter_status_map(&map, &StatusFilter::default());

    assert_eq!(filtered, map);
}

#[test]
fn test_internal_filter_selects_internal_rules() {
    let filter = StatusFilter::from_pairs([("internal", "")]);

    let filtered = filter_status_map(&status_map(), &filter);

    assert_eq!(names(&filtered), vec!["rule2", "rule4"]);
    assert!(
        filtered
            .values()
            .all(|s| s.rule_type() == RuleType::Internal)
    );
}

#[test]
fn test_presence_not_value_enables_category() {
    let filter = StatusFilter::from_pairs([("external", "false")]);

    assert!(filter.external);
    assert_eq!(
        names(&filter_status_map(&status_map(), &filter)),
        vec!["rule1", "rule3"]
    );
}

#[test]
fn test_repeated_rule_filter_selects_named_rules() {
    let filter = StatusFilter::from_pairs([("rule", "rule1"), ("rule", "rule3"), ("rule", "nope")]);

    let filtered = filter_status_map(&status_map(), &filter);

    assert_eq!(names(&filtered), vec!["rule1", "rule3"]);
}

#[test]
fn test_filters_combine_as_union() {
    let filter = StatusFilter::from_pairs([("internal", ""), ("rule", "rule1")]);

    let filtered = filter_status_map(&status_map(), &filter);

    assert_eq!(names(&filtered), vec!["rule1", "rule2", "rule4"]);
}

#[test]
fn test_both_categories_select_everything() {
    let filter = StatusFilter::from_pairs([("internal", ""), ("external", "")]);

    assert_eq!(filter_status_map(&status_map(), &filter).len(), 4);
}

#[test]
fn test_unknown_parameters_are_ignored() {
    let filter = StatusFilter::from_pairs([("verbose", "1")]);

    assert!(filter.is_empty());
    assert_eq!(filter_status_map(&status_map(), &filter).len(), 4);
}

#[test]
fn test_unmatched_rule_filter_returns_nothing() {
    let filter = StatusFilter::from_pairs([("rule", "absent")]);

    assert!(filter_status_map(&status_map(), &filter).is_empty());
}
