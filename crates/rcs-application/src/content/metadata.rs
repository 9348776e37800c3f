//! Error key metadata
//!
//! `metadata.yaml` is received with textual impact and resolution-risk labels
//! and a `condition` that may be either a string or a list of strings. This
//! module resolves both into the normalised [`ErrorKeyMetadata`].

use rcs_domain::constants::{CONDITION_LIST_SEPARATOR, METADATA_YAML, UNKNOWN_LABEL_CODE};
use rcs_domain::{Error, ErrorKeyMetadata, GlobalRuleConfig, Impact, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use tracing::warn;

/// Deserialize `text` as YAML, treating an empty document as `T::default()`
pub(crate) fn parse_yaml<T>(text: &str, file_name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(text)
        .map_err(|e| Error::parse_with_source(format!("cannot parse {file_name}: {e}"), e))
}

/// Deserialize a field, reading an explicit YAML `null` as the default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `metadata.yaml` as written by content authors
///
/// Absent and empty (`key:`) fields both take their zero value.
#[derive(Debug, Default, Deserialize)]
struct ReceivedErrorKeyMetadata {
    #[serde(default)]
    condition: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    impact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    likelihood: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    publish_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    resolution_risk: String,
    #[serde(default, deserialize_with = "null_as_default")]
    status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
}

/// The two accepted shapes of `condition`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `condition: "a"`
    Text(String),
    /// `condition: ["a", "b"]`
    List(Vec<String>),
}

impl Condition {
    /// Classify a raw YAML value
    ///
    /// `None` and `null` mean the field is absent. Any shape other than a
    /// string or a sequence of strings is an [`Error::InvalidItem`].
    pub fn from_yaml(value: Option<Value>) -> Result<Option<Self>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(Self::Text(text))),
            Some(Value::Sequence(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    other => Err(Error::invalid_item(
                        "condition",
                        format!(
                            "list items must be strings, found {}",
                            describe_value(&other)
                        ),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(|items| Some(Self::List(items))),
            Some(other) => Err(Error::invalid_item(
                "condition",
                format!(
                    "expected a string or a list of strings, found {}",
                    describe_value(&other)
                ),
            )),
        }
    }

    /// Single-string form; lists are joined with `"; "`
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items.join(CONDITION_LIST_SEPARATOR),
        }
    }
}

fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Parse the text of `metadata.yaml` and resolve it against `config`
pub fn parse_error_key_metadata(text: &str, config: &GlobalRuleConfig) -> Result<ErrorKeyMetadata> {
    let received: ReceivedErrorKeyMetadata = parse_yaml(text, METADATA_YAML)?;

    let condition = Condition::from_yaml(received.condition)?
        .map(Condition::into_string)
        .unwrap_or_default();

    let impact = config.impact_code(&received.impact).unwrap_or_else(|| {
        warn!(impact = %received.impact, "impact doesn't have integer representation");
        UNKNOWN_LABEL_CODE
    });

    let resolution_risk = config
        .resolution_risk_code(&received.resolution_risk)
        .unwrap_or_else(|| {
            warn!(
                resolution_risk = %received.resolution_risk,
                "resolution_risk doesn't have integer representation"
            );
            UNKNOWN_LABEL_CODE
        });

    Ok(ErrorKeyMetadata {
        condition,
        description: received.description,
        impact: Impact {
            name: received.impact,
            impact,
        },
        likelihood: received.likelihood,
        publish_date: received.publish_date,
        resolution_risk,
        status: received.status,
        tags: received.tags,
    })
}
