//! Schema command implementation

use anyhow::{Context, Result, bail};
use std::process::ExitCode;
use tablesmith_core::tools::ToolExecutor;

/// Print the input schema of one tool as pretty JSON
pub fn print_schema(executor: &ToolExecutor, tool_name: &str) -> Result<ExitCode> {
    let Some(tool) = executor.get_tool(tool_name) else {
        bail!(
            "Unknown tool '{}'. Available: {}",
            tool_name,
            executor.tool_names().join(", ")
        );
    };

    let schema = serde_json::to_string_pretty(&tool.schema()).context("Failed to render schema")?;
    println!("{}", schema);
    Ok(ExitCode::SUCCESS)
}
