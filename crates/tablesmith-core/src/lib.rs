//! Tablesmith Core Library
//!
//! This crate provides the tool framework shared by every Tablesmith tool:
//! the [`Tool`] trait, call and result types, the sequential [`ToolExecutor`],
//! and configuration loading.

pub mod config;
pub mod error;
pub mod tools;

pub use config::{Config, LoggingConfig, ToolConfig};
pub use error::{TablesmithError, TablesmithResult};
pub use tools::{Tool, ToolCall, ToolError, ToolExecutor, ToolResult, ToolSchema};
