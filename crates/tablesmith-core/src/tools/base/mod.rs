//! Base trait and types for tools
//!
//! - [`Tool`] - The trait every tool implements
//! - [`ToolError`] - Error types for tool operations
//!
//! # Examples
//!
//! ```no_run
//! use tablesmith_core::tools::{Tool, ToolSchema};
//! use tablesmith_core::tools::base::ToolError;
//! use tablesmith_core::tools::types::{ToolCall, ToolResult};
//! use async_trait::async_trait;
//!
//! struct EchoTool;
//!
//! #[async_trait]
//! impl Tool for EchoTool {
//!     fn name(&self) -> &str { "echo" }
//!     fn description(&self) -> &str { "Echoes its input" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::success(&call.id, self.name(), "done"))
//!     }
//! }
//! ```

pub mod error;
pub mod tool_trait;

#[cfg(test)]
mod tests;

pub use error::ToolError;
pub use tool_trait::Tool;
