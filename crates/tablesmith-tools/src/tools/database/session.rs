//! Database session collaborator
//!
//! The host owns the connection. Tools only borrow an already-open,
//! already-authenticated session and issue statements through it.

use async_trait::async_trait;
use thiserror::Error;

/// Error surfaced by the database while running a statement
///
/// `Display` is the raw engine text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The connection dropped or could not be used
    #[error("{0}")]
    Connection(String),

    /// The login lacks rights for the statement
    #[error("{0}")]
    Permission(String),

    /// Anything else the engine rejected (duplicate object, syntax, ...)
    #[error("{0}")]
    Database(String),
}

/// An open database session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseSession: Send + Sync {
    /// Run a statement that returns no rows
    async fn execute_batch(&self, sql: &str) -> Result<(), SessionError>;

    /// Run a statement that may return rows
    async fn execute_query(&self, sql: &str) -> Result<(), SessionError>;
}
