//! Command routing logic for CLI

use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use tablesmith_core::Config;
use tablesmith_core::tools::ToolExecutor;
use tablesmith_tools::DatabaseSession;
use tracing::{debug, info};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::script_session::ScriptSession;

/// Build the executor with the tools the configuration enables
pub(crate) fn build_executor(config: &Config, session: Arc<dyn DatabaseSession>) -> ToolExecutor {
    let mut executor = ToolExecutor::new();

    for tool in tablesmith_tools::get_default_tools(session) {
        if config.tools.is_enabled(tool.name()) {
            executor.register_tool(tool);
        } else {
            debug!(tool = tool.name(), "Tool disabled by configuration");
        }
    }

    debug!(tools = ?executor.tool_names(), "Executor ready");
    executor
}

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: Config) -> Result<ExitCode> {
    // Script goes to stdout; status and result JSON go to stderr
    let executor = build_executor(&config, Arc::new(ScriptSession::stdout()));

    match cli.command {
        Commands::Tools => commands::tools::list_tools(&executor),
        Commands::Schema { tool } => commands::schema::print_schema(&executor, &tool),
        Commands::CreateTable {
            table,
            columns,
            request,
        } => {
            info!(request = ?request, "Running create-table");
            let mut report = std::io::stderr();
            commands::create_table::run(
                &executor,
                table,
                columns,
                request.as_deref(),
                &mut report,
            )
            .await
        }
    }
}
