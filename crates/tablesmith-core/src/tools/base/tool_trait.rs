//! Core Tool trait definition

use super::error::ToolError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;

/// Base trait for all tools
///
/// Tools are capabilities an agent invokes through a declarative interface.
/// Each tool publishes a schema, may pre-validate a call, and executes it.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "create_table")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid or execution fails.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()`. Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        false
    }

    /// Render the tool call for display to the user
    fn render_call(&self, call: &ToolCall) -> String {
        format!(
            "{}({})",
            self.name(),
            serde_json::to_string(&call.arguments).unwrap_or_default()
        )
    }

    /// Render the tool result for display to the user
    fn render_result(&self, result: &ToolResult) -> String {
        if result.success {
            result.output.clone().unwrap_or_default()
        } else {
            format!("Error: {}", result.error.clone().unwrap_or_default())
        }
    }

    /// Execute the tool with timing and error handling
    ///
    /// Validates, executes, and measures the call. Any `ToolError` becomes a
    /// failed `ToolResult`, so this always returns a result.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_metadata("errorCode", err.error_code())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(result) => result.with_execution_time(start_time.elapsed().as_millis() as u64),
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_metadata("errorCode", err.error_code())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
