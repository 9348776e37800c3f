//! Tests for error key metadata resolution

use rcs_application::Condition;
use rcs_application::content::parse_error_key_metadata;
use rcs_domain::{Error, GlobalRuleConfig};

fn config() -> GlobalRuleConfig {
    serde_yaml::from_str("impact:\n  Data Loss: 4\nresolution_risk:\n  Upgrade: 3\n").unwrap()
}

#[test]
fn test_condition_list_is_joined() {
    let value = serde_yaml::from_str("[a, b]").unwrap();
    let condition = Condition::from_yaml(Some(value)).unwrap().unwrap();

    assert_eq!(
        condition,
        Condition::List(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(condition.into_string(), "a; b");
}

#[test]
fn test_condition_string_passes_through() {
    let value = serde_yaml::from_str("'x; y'").unwrap();
    let condition = Condition::from_yaml(Some(value)).unwrap().unwrap();

    assert_eq!(condition.into_string(), "x; y");
}

#[test]
fn test_absent_condition_is_empty() {
    assert_eq!(Condition::from_yaml(None).unwrap(), None);
    assert_eq!(
        Condition::from_yaml(Some(serde_yaml::Value::Null)).unwrap(),
        None
    );

    let metadata = parse_error_key_metadata("description: d\n", &config()).unwrap();
    assert_eq!(metadata.condition, "");
}

#[test]
fn test_condition_of_other_shape_is_invalid_item() {
    for text in ["42", "true", "{a: b}", "[a, 1]", "[[a]]"] {
        let value = serde_yaml::from_str(text).unwrap();
        let err = Condition::from_yaml(Some(value)).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidItem { item, .. } if item == "condition"),
            "{text}: {err}"
        );
    }
}

#[test]
fn test_labels_resolve_through_global_config() {
    let metadata = parse_error_key_metadata(
        "impact: Data Loss\nresolution_risk: Upgrade\nlikelihood: 3\nstatus: active\n",
        &config(),
    )
    .unwrap();

    assert_eq!(metadata.impact.name, "Data Loss");
    assert_eq!(metadata.impact.impact, 4);
    assert_eq!(metadata.resolution_risk, 3);
    assert_eq!(metadata.likelihood, 3);
    assert_eq!(metadata.status, "active");
}

#[test]
fn test_unknown_labels_resolve_to_zero() {
    let metadata =
        parse_error_key_metadata("impact: Unheard Of\nresolution_risk: Nope\n", &config())
            .unwrap();

    assert_eq!(metadata.impact.name, "Unheard Of");
    assert_eq!(metadata.impact.impact, 0);
    assert_eq!(metadata.resolution_risk, 0);
}

#[test]
fn test_empty_metadata_document_is_default() {
    let metadata = parse_error_key_metadata("   \n", &config()).unwrap();

    assert_eq!(metadata.description, "");
    assert!(metadata.tags.is_empty());
}

#[test]
fn test_malformed_metadata_is_parse_error() {
    let err = parse_error_key_metadata("tags: [a, b\n", &config()).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("metadata.yaml"));
}

#[test]
fn test_empty_scalar_fields_take_zero_values() {
    let metadata = parse_error_key_metadata(
        "description:\nimpact:\nlikelihood:\npublish_date:\nresolution_risk:\nstatus:\ntags:\n",
        &config(),
    )
    .unwrap();

    assert_eq!(metadata.likelihood, 0);
    assert_eq!(metadata.impact.impact, 0);
    assert_eq!(metadata.resolution_risk, 0);
    assert_eq!(metadata.description, "");
    assert!(metadata.tags.is_empty());
}
