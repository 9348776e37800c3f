//! Process-wide tracing subscriber
//!
//! Events go to stdout as text or JSON and are mirrored into a daily rolled
//! file when `file_output` is set. `RCS_LOG` replaces the configured level
//! with a full `EnvFilter` directive.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use rcs_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`
///
/// Fails when the level is unknown or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut outputs = vec![output_layer(config.json_format, io::stdout, true)];
    if let Some(path) = &config.file_output {
        outputs.push(output_layer(config.json_format, daily_file(path), false));
    }

    Registry::default()
        .with(outputs)
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration(format!("Logging is already initialized: {e}")))?;

    info!(%level, json = config.json_format, "Logging initialized");
    if config.logging_to_cloud_watch_enabled {
        warn!("CloudWatch shipping is not built in, logs stay on stdout for the platform collector");
    }
    Ok(())
}

fn output_layer<W>(json: bool, writer: W, ansi: bool) -> OutputLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    if json {
        layer.json().with_file(true).with_line_number(true).boxed()
    } else {
        layer.boxed()
    }
}

/// Appender rolling `path` daily; a bare file name lands in the working directory
fn daily_file(path: &Path) -> RollingFileAppender {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let stem = path
        .file_name()
        .unwrap_or(OsStr::new(DEFAULT_LOG_FILE_STEM));
    rolling::daily(dir, stem)
}

/// Parse a configured level name, case-insensitively; `warning` means `warn`
pub fn parse_log_level(level: &str) -> Result<Level> {
    let name = if level.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        level
    };
    name.parse().map_err(|_| {
        Error::configuration(format!(
            "Invalid log level '{level}', expected trace, debug, info, warn or error"
        ))
    })
}
