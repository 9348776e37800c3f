//! Configuration types module

pub mod app;
pub mod cloudwatch;
pub mod content;
pub mod logging;
pub mod metrics;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use cloudwatch::CloudWatchConfig;
pub use content::{ContentConfig, GroupsConfig};
pub use logging::LoggingConfig;
pub use metrics::MetricsConfig;
pub use server::ServerConfig;
