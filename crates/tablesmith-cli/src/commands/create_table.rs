//! create-table command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tablesmith_core::tools::{ToolCall, ToolExecutor};
use tablesmith_tools::tools::database::create_table::{ColumnSpec, TableCreationRequest};

/// Assemble the call arguments from flags or a request file
fn build_arguments(
    table: Option<String>,
    columns: Vec<ColumnSpec>,
    request: Option<&Path>,
) -> Result<serde_json::Value> {
    if let Some(path) = request {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file '{}'", path.display()))?;
        return serde_json::from_str(&content)
            .with_context(|| format!("Request file '{}' is not valid JSON", path.display()));
    }

    let request = TableCreationRequest::new(table.unwrap_or_default(), columns);
    serde_json::to_value(&request).context("Failed to encode request")
}

/// Run one create_table call
///
/// The session owns the script output. The status line and the result JSON
/// go to `report` so the script stays clean for piping.
pub async fn run(
    executor: &ToolExecutor,
    table: Option<String>,
    columns: Vec<ColumnSpec>,
    request: Option<&Path>,
    report: &mut dyn Write,
) -> Result<ExitCode> {
    let arguments = build_arguments(table, columns, request)?;
    let call = ToolCall::from_json(
        uuid::Uuid::new_v4().to_string(),
        "create_table".to_string(),
        arguments,
    );

    let result = executor.execute_tool(&call).await;

    let marker = if result.success {
        "✓".green()
    } else {
        "✗".red()
    };
    writeln!(report, "{} {}", marker, result.message())?;
    writeln!(
        report,
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to render result")?
    )?;

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
