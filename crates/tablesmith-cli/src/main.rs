//! Tablesmith CLI application
//!
//! Runs Tablesmith tools from the command line. Without a database
//! connection, statements are written to stdout as a `GO`-separated script
//! that can be reviewed or piped into `sqlcmd`. The status line and the
//! result JSON go to stderr.
//!
//! ```bash
//! tablesmith tools
//! tablesmith schema create_table
//! tablesmith create-table --table app.users --column "id:INT PRIMARY KEY"
//! tablesmith create-table --request request.json
//! ```

mod args;
mod commands;
mod logging;
mod router;
mod script_session;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use args::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = tablesmith_core::config::load_from_file(Path::new(&cli.config_file))
        .with_context(|| format!("Failed to load configuration from '{}'", cli.config_file))?;
    cli.apply_overrides(&mut config.logging);

    // RUST_LOG takes precedence over the configured level
    logging::init(&config.logging)?;

    router::route(cli, config).await
}
