//! Tool implementations for Tablesmith

pub mod tools;

pub use tools::database::{CreateTableTool, DatabaseSession, SessionError};

use std::sync::Arc;
use tablesmith_core::tools::Tool;

/// Get all default tools, bound to the given database session
pub fn get_default_tools(session: Arc<dyn DatabaseSession>) -> Vec<Arc<dyn Tool>> {
    tools::database::get_database_tools(session)
}
