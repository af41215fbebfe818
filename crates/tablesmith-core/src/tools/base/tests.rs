//! Tests for tool base functionality

use super::error::ToolError;
use super::tool_trait::Tool;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::collections::HashMap;

/// Succeeds, fails, or rejects depending on its mode
struct StubTool {
    mode: &'static str,
}

#[async_trait]
impl Tool for StubTool {
    fn name(&self) -> &str {
        "stub_tool"
    }

    fn description(&self) -> &str {
        "A stub tool for testing"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), vec![])
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        match self.mode {
            "fail" => Err(ToolError::ExecutionFailed("engine offline".to_string())),
            _ => Ok(ToolResult::success(&call.id, self.name(), "done")),
        }
    }

    fn validate(&self, _call: &ToolCall) -> Result<(), ToolError> {
        match self.mode {
            "reject" => Err(ToolError::InvalidArguments("missing required argument".to_string())),
            _ => Ok(()),
        }
    }
}

fn call(id: &str) -> ToolCall {
    ToolCall::new(id, "stub_tool", HashMap::new())
}

#[tokio::test]
async fn test_execute_with_timing_success() {
    let tool = StubTool { mode: "ok" };
    let result = tool.execute_with_timing(&call("t-1")).await;

    assert!(result.success);
    assert_eq!(result.call_id, "t-1");
    assert!(result.execution_time_ms.is_some());
}

#[tokio::test]
async fn test_execute_with_timing_validation_error() {
    let tool = StubTool { mode: "reject" };
    let result = tool.execute_with_timing(&call("t-2")).await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Invalid arguments: missing required argument")
    );
    assert_eq!(result.metadata["errorCode"], "TOOL_INVALID_ARGS");
}

#[tokio::test]
async fn test_execute_with_timing_execution_error() {
    let tool = StubTool { mode: "fail" };
    let result = tool.execute_with_timing(&call("t-3")).await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Execution failed: engine offline")
    );
    assert!(result.execution_time_ms.is_some());
}

#[test]
fn test_render_result() {
    let tool = StubTool { mode: "ok" };
    let ok = ToolResult::success("t-4", "stub_tool", "created");
    let failed = ToolResult::error("t-4", "stub_tool", "nope");

    assert_eq!(tool.render_result(&ok), "created");
    assert_eq!(tool.render_result(&failed), "Error: nope");
    assert_eq!(tool.render_call(&call("t-4")), "stub_tool({})");
}

#[test]
fn test_error_codes() {
    assert_eq!(
        ToolError::NotFound("x".to_string()).error_code(),
        "TOOL_NOT_FOUND"
    );
    assert_eq!(
        ToolError::ValidationFailed("x".to_string()).error_code(),
        "TOOL_VALIDATION_FAILED"
    );
}
