//! Tool configuration

use serde::{Deserialize, Serialize};

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Names of the tools to expose; empty exposes every tool
    pub enabled_tools: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            enabled_tools: vec!["create_table".to_string()],
        }
    }
}

impl ToolConfig {
    /// Whether the named tool should be exposed
    pub fn is_enabled(&self, tool_name: &str) -> bool {
        self.enabled_tools.is_empty() || self.enabled_tools.iter().any(|t| t == tool_name)
    }
}
