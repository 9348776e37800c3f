//! Command execution
//!
//! Every command returns `Ok(())` or a [`CommandError`] carrying the process
//! exit status:
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 0 | success |
//! | 1 | server error, including a group catalog that cannot be loaded |
//! | 2 | rule content cannot be read |
//! | 3 | anything else: configuration, output encoding, failed checks |

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::CommandFactory;
use rcs_application::{
    GroupCatalog, ParsedContent, Severity, check_content, check_groups, group_list, load_groups,
    parse_rule_content_dir,
};
use rcs_infrastructure::config::AppConfig;
use rcs_infrastructure::config::loader::validate_api_spec_file;
use rcs_infrastructure::logging::init_logging;
use rcs_infrastructure::ConfigLoader;
use tracing::{error, info};

use crate::api::{ContentState, content_rocket};
use crate::build_info::BuildInfo;
use crate::cli::{Cli, Command};
use crate::constants::{
    EXIT_STATUS_OK, EXIT_STATUS_OTHER, EXIT_STATUS_READ_CONTENT_ERROR, EXIT_STATUS_SERVER_ERROR,
};

/// A failed command and the exit status it maps to
#[derive(Debug)]
pub struct CommandError {
    status: u8,
    error: anyhow::Error,
}

impl CommandError {
    pub fn new(status: u8, error: impl Into<anyhow::Error>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    /// Process exit status for this failure
    pub fn exit_status(&self) -> u8 {
        self.status
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

/// Result of a command
pub type CommandResult = Result<(), CommandError>;

/// Attach an exit status to a failure
pub trait ExitStatusExt<T> {
    fn exit_with(self, status: u8) -> Result<T, CommandError>;
}

impl<T, E> ExitStatusExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn exit_with(self, status: u8) -> Result<T, CommandError> {
        self.map_err(|e| CommandError::new(status, e))
    }
}

/// Exit status of a command result
pub fn exit_status(result: &CommandResult) -> u8 {
    result
        .as_ref()
        .map_or_else(CommandError::exit_status, |_| EXIT_STATUS_OK)
}

/// Load configuration, set up logging and run the requested command
pub async fn run(cli: Cli) -> CommandResult {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader
        .load()
        .context("Cannot load configuration")
        .exit_with(EXIT_STATUS_OTHER)?;
    init_logging(&config.logging)
        .context("Cannot initialize logging")
        .exit_with(EXIT_STATUS_OTHER)?;

    let mut stdout = io::stdout();
    let result = match cli.selected_command() {
        Command::StartService => start_service(&config).await,
        Command::PrintHelp => print_help(&mut stdout),
        Command::PrintConfig => print_config(&config, &mut stdout),
        Command::PrintGroups => print_groups(&config, &mut stdout),
        Command::PrintRules => print_rules(&config, &mut stdout),
        Command::PrintVersionInfo => print_version_info(&BuildInfo::current(), &mut stdout),
        Command::Check { groups, content } => check(
            groups.as_deref().unwrap_or(&config.groups.config_path),
            content.as_deref().unwrap_or(&config.content.path),
            &mut stdout,
        ),
    };

    if let Err(e) = &result {
        error!(exit_status = e.exit_status(), "{e}");
    }
    result
}

fn log_version_info(info: &BuildInfo) {
    for (label, value) in info.entries() {
        info!(phase = "init", "{label} {value}");
    }
}

fn load_group_catalog(path: &Path) -> Result<GroupCatalog, CommandError> {
    load_groups(path)
        .context("Groups init error")
        .exit_with(EXIT_STATUS_SERVER_ERROR)
}

fn load_content(path: &Path) -> Result<ParsedContent, CommandError> {
    parse_rule_content_dir(path)
        .context("Error parsing the content")
        .exit_with(EXIT_STATUS_READ_CONTENT_ERROR)
}

/// Load everything and serve the content API until shutdown
pub async fn start_service(config: &AppConfig) -> CommandResult {
    let build_info = BuildInfo::current();
    log_version_info(&build_info);

    let groups = load_group_catalog(&config.groups.config_path)?;
    let content = load_content(&config.content.path)?;
    validate_api_spec_file(config)
        .context("Invalid API specification file")
        .exit_with(EXIT_STATUS_OTHER)?;

    let address = config
        .server
        .socket_addr()
        .context("Invalid server address")
        .exit_with(EXIT_STATUS_SERVER_ERROR)?;

    let state = Arc::new(ContentState::new(
        &groups,
        content,
        &build_info,
        &config.server,
    ));

    info!(
        address = %address,
        api_prefix = %config.server.normalized_api_prefix(),
        "Starting HTTP server"
    );

    let figment = rocket::Config::figment()
        .merge(("address", address.ip()))
        .merge(("port", address.port()));

    content_rocket(state, config)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Unable to start HTTP server: {e}"))
        .exit_with(EXIT_STATUS_SERVER_ERROR)?;

    Ok(())
}

fn write_output(out: &mut impl Write, text: &str) -> CommandResult {
    writeln!(out, "{text}")
        .context("Cannot write output")
        .exit_with(EXIT_STATUS_OTHER)
}

/// `print-help`
pub fn print_help(out: &mut impl Write) -> CommandResult {
    let help = Cli::command().render_long_help().to_string();
    write_output(out, &help)
}

/// `print-config`: configuration as indented JSON, secrets masked
pub fn print_config(config: &AppConfig, out: &mut impl Write) -> CommandResult {
    let text = serde_json::to_string_pretty(&config.masked())
        .context("Cannot encode configuration")
        .exit_with(EXIT_STATUS_OTHER)?;
    write_output(out, &text)
}

/// `print-version-info`: one `label<TAB>value` line per build fact
pub fn print_version_info(info: &BuildInfo, out: &mut impl Write) -> CommandResult {
    for (label, value) in info.entries() {
        write_output(out, &format!("{label}\t{value}"))?;
    }
    Ok(())
}

/// `print-groups`: the group list as indented JSON
pub fn print_groups(config: &AppConfig, out: &mut impl Write) -> CommandResult {
    let groups = load_group_catalog(&config.groups.config_path)?;
    let text = serde_json::to_string_pretty(&group_list(&groups))
        .context("Cannot encode groups")
        .exit_with(EXIT_STATUS_OTHER)?;
    write_output(out, &text)
}

/// `print-rules`: the parsed rule content directory as JSON
pub fn print_rules(config: &AppConfig, out: &mut impl Write) -> CommandResult {
    info!("Printing rules");
    let content = load_content(&config.content.path)?;
    let text = serde_json::to_string(&content.directory)
        .context("Cannot encode rules")
        .exit_with(EXIT_STATUS_OTHER)?;
    write_output(out, &text)
}

/// `check`: lint groups and content, one line per finding
///
/// Fails with status 3 when any finding is an error; warnings alone pass.
pub fn check(groups_path: &Path, content_path: &Path, out: &mut impl Write) -> CommandResult {
    let groups = load_group_catalog(groups_path)?;
    let content = load_content(content_path)?;

    let mut findings = check_groups(&groups);
    findings.extend(check_content(&groups, &content.directory));

    for finding in &findings {
        finding.log();
        write_output(out, &finding.to_string())?;
    }

    let errors = findings
        .iter()
        .filter(|finding| finding.severity == Severity::Error)
        .count();
    info!(findings = findings.len(), errors, "Content check finished");

    if errors > 0 {
        return Err(CommandError::new(
            EXIT_STATUS_OTHER,
            anyhow::anyhow!("{errors} content errors found"),
        ));
    }
    Ok(())
}
