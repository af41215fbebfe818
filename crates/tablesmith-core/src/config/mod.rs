//! Configuration management for Tablesmith

mod file_loader;
mod logging_config;
mod model;
mod tool_config;

pub use file_loader::load_from_file;
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::Config;
pub use tool_config::ToolConfig;
