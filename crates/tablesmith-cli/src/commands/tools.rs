//! Tools command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tablesmith_core::tools::ToolExecutor;

/// Show enabled tools and their descriptions
pub fn list_tools(executor: &ToolExecutor) -> Result<ExitCode> {
    for name in executor.tool_names() {
        if let Some(tool) = executor.get_tool(&name) {
            println!("{}\n  {}", name.bold(), tool.description());
        }
    }
    Ok(ExitCode::SUCCESS)
}
