//! # Rules Content Service Server
//!
//! HTTP API and command line entry point of the rules content service.
//!
//! At startup the group catalog and the rule content tree are loaded once;
//! the resulting snapshot is served read-only through Rocket.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Routes, authentication guard, metrics fairing, response envelopes |
//! | [`cli`] | Command line definition |
//! | [`init`] | Command execution and exit statuses |
//! | [`build_info`] | Version and build facts |
//! | [`constants`] | Exit statuses, response keys, metric names |

pub mod api;
pub mod build_info;
pub mod cli;
pub mod constants;
pub mod init;

pub use cli::{Cli, Command};
pub use init::{CommandError, CommandResult, exit_status, run};
