//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML or YAML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::{ErrorContext, IoContext};
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use rcs_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. Configuration file, TOML or YAML by extension (see [`Self::resolve_config_path`])
    /// 3. Environment variables with prefix (e.g., `RCS__SERVER__ADDRESS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolve_config_path()? {
            figment = if is_yaml(&config_path) {
                figment.merge(Yaml::file(&config_path))
            } else {
                figment.merge(Toml::file(&config_path))
            };
            info!(path = %config_path.display(), "Configuration loaded");
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Name of the environment variable that may point at a config file
    pub fn config_file_env(&self) -> String {
        format!("{}{CONFIG_FILE_ENV_SUFFIX}", self.env_prefix)
    }

    /// Configuration file to merge, if any
    ///
    /// The explicit path wins, then the file named by
    /// [`Self::config_file_env`]; both must exist. Otherwise
    /// `config.toml` in the working directory is used when present.
    pub fn resolve_config_path(&self) -> Result<Option<PathBuf>> {
        let requested = self.config_path.clone().or_else(|| {
            env::var_os(self.config_file_env())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });

        if let Some(path) = requested {
            if !path.is_file() {
                warn!(path = %path.display(), "Configuration file not found");
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        Ok(Self::find_default_config_path())
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.is_file().then_some(candidate)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    config
        .server
        .socket_addr()
        .config_context(format!("Invalid server address '{}'", config.server.address))?;

    if config.server.auth_type != AUTH_TYPE_XRH {
        return Err(Error::configuration(format!(
            "Unsupported auth type '{}', only '{AUTH_TYPE_XRH}' is supported",
            config.server.auth_type
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

/// Check that the OpenAPI document exists and is a regular file
///
/// Only needed when the server is started, so it is not part of
/// [`validate_app_config`].
pub fn validate_api_spec_file(config: &AppConfig) -> Result<()> {
    let path = &config.server.api_spec_file;
    let metadata = std::fs::metadata(path).io_context(path)?;
    if !metadata.is_file() {
        return Err(Error::configuration(format!(
            "OpenAPI specification file path '{}' is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
