//! Database Tools
//!
//! Tools that issue DDL through a [`DatabaseSession`] supplied by the host.
//! Connection management, pooling, and timeouts belong to the session.

pub mod create_table;
pub mod session;

pub use create_table::CreateTableTool;
pub use session::{DatabaseSession, SessionError};

use std::sync::Arc;
use tablesmith_core::tools::Tool;

/// Get all database tools
pub fn get_database_tools(session: Arc<dyn DatabaseSession>) -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(CreateTableTool::new(session))]
}
