//! Rules content service binary

use std::process::ExitCode;

use clap::Parser;
use rcs_server::{Cli, exit_status, run};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(cli).await;
    if let Err(e) = &result {
        eprintln!("rcs: {e}");
    }
    ExitCode::from(exit_status(&result))
}
