//! Error types for tool operations

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl ToolError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
            ToolError::ValidationFailed(_) => "TOOL_VALIDATION_FAILED",
            ToolError::Json(_) => "TOOL_JSON_ERROR",
            ToolError::Other(_) => "TOOL_OTHER",
        }
    }
}
