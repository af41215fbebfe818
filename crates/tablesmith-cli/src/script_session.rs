//! Database session that writes statements out as a T-SQL script

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write;
use tablesmith_tools::{DatabaseSession, SessionError};

/// Writes each statement followed by a `GO` separator instead of running it
pub struct ScriptSession {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ScriptSession {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Script to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    fn emit(&self, sql: &str) -> Result<(), SessionError> {
        let mut out = self.out.lock();
        writeln!(out, "{}\nGO", sql)
            .and_then(|_| out.flush())
            .map_err(|e| SessionError::Connection(format!("Failed to write script: {}", e)))
    }
}

#[async_trait]
impl DatabaseSession for ScriptSession {
    async fn execute_batch(&self, sql: &str) -> Result<(), SessionError> {
        self.emit(sql)
    }

    async fn execute_query(&self, sql: &str) -> Result<(), SessionError> {
        self.emit(sql)
    }
}

/// In-memory writer whose contents stay readable after a clone is handed off
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_statements_are_go_separated() {
        let buf = SharedBuf::default();
        let session = ScriptSession::new(buf.clone());

        session.execute_batch("CREATE SCHEMA [app]").await.unwrap();
        session
            .execute_query("CREATE TABLE [app].[t] ([id] INT)")
            .await
            .unwrap();

        assert_eq!(
            buf.contents(),
            "CREATE SCHEMA [app]\nGO\nCREATE TABLE [app].[t] ([id] INT)\nGO\n"
        );
    }
}
