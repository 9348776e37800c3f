//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{
    CloudWatchConfig, ContentConfig, GroupsConfig, LoggingConfig, MetricsConfig, ServerConfig,
};

/// Complete service configuration
///
/// Every section has defaults, so an empty file or no file at all yields a
/// usable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Group catalog location
    pub groups: GroupsConfig,
    /// Rule content location
    pub content: ContentConfig,
    /// Prometheus settings
    pub metrics: MetricsConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// CloudWatch credentials and target
    pub cloudwatch: CloudWatchConfig,
}

impl AppConfig {
    /// Copy safe to print: secrets replaced with a placeholder
    pub fn masked(&self) -> Self {
        Self {
            cloudwatch: self.cloudwatch.masked(),
            ..self.clone()
        }
    }
}
