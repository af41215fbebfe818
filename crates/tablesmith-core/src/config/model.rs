//! Top-level configuration model

use super::logging_config::LoggingConfig;
use super::tool_config::ToolConfig;
use serde::{Deserialize, Serialize};

/// Tablesmith configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Tool settings
    pub tools: ToolConfig,
}
