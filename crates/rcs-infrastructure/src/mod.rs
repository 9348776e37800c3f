//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the rules content service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML/YAML file, `RCS__` environment |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extensions mapping foreign errors into domain errors |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::{ErrorContext, IoContext};
