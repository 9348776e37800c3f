//! Metrics configuration types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_METRICS_NAMESPACE;

/// Metrics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prefix of every metric name; empty means no prefix
    pub namespace: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_METRICS_NAMESPACE.to_string(),
        }
    }
}

impl MetricsConfig {
    /// Full metric name for `name` in this namespace
    pub fn metric_name(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}_{name}", self.namespace)
        }
    }
}
