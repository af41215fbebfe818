//! Tool system for Tablesmith

pub mod base;
pub mod executor;
pub mod types;

pub use base::{Tool, ToolError};
pub use executor::ToolExecutor;
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
