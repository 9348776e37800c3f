//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface of the rules content service
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "rcs")]
#[command(about = "Service to provide content for OCP rules")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, or YAML by extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run; starts the service when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command, `start-service` when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::StartService)
    }
}

/// Commands understood by the binary
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the content service
    StartService,

    /// Print this help
    PrintHelp,

    /// Print the current configuration set by files and environment variables
    PrintConfig,

    /// Print the current group configuration
    PrintGroups,

    /// Print the parsed rule content as JSON
    PrintRules,

    /// Print version information
    PrintVersionInfo,

    /// Check groups and rule content for problems that do not prevent loading
    Check {
        /// Group configuration to check; defaults to `groups.config_path`
        #[arg(long)]
        groups: Option<PathBuf>,

        /// Content tree to check; defaults to `content.path`
        #[arg(long)]
        content: Option<PathBuf>,
    },
}
