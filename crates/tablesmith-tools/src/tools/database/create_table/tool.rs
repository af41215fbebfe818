//! CreateTable tool implementation

use async_trait::async_trait;
use std::sync::Arc;
use tablesmith_core::tools::base::{Tool, ToolError};
use tablesmith_core::tools::types::{ToolCall, ToolResult, ToolSchema};

use super::pipeline::create_table;
use super::schema::create_schema;
use super::types::{CreateTableError, CreateTableOutcome, TableCreationRequest};
use crate::tools::database::session::DatabaseSession;

/// Tool that creates one table, and its schema when qualified
///
/// The session is injected by the host and shared across calls; the tool
/// holds no other state.
pub struct CreateTableTool {
    session: Arc<dyn DatabaseSession>,
}

impl CreateTableTool {
    pub fn new(session: Arc<dyn DatabaseSession>) -> Self {
        Self { session }
    }

    fn to_tool_result(&self, call: &ToolCall, outcome: CreateTableOutcome) -> ToolResult {
        let mut result = if outcome.success {
            ToolResult::success(&call.id, self.name(), outcome.message)
        } else {
            ToolResult::error(&call.id, self.name(), outcome.message)
        };

        result = result.with_metadata("schemaCreated", outcome.schema_created);
        if let Some(qualified_name) = outcome.qualified_name {
            result = result.with_metadata("qualifiedName", qualified_name);
        }
        if let Some(err) = outcome.error {
            result = result
                .with_metadata("errorKind", err.kind.to_string())
                .with_metadata("errorDetail", err.detail);
        }
        result
    }
}

#[async_trait]
impl Tool for CreateTableTool {
    fn name(&self) -> &str {
        "create_table"
    }

    fn description(&self) -> &str {
        "Create a SQL Server table. Accepts a table name, optionally schema-qualified as \
        'schema.table' (the schema is created if missing), and a non-empty list of columns, \
        each with a name and a SQL type such as 'INT PRIMARY KEY'. Names must start with a \
        letter or underscore and contain only letters, digits, or underscores."
    }

    fn schema(&self) -> ToolSchema {
        create_schema(self.name(), self.description())
    }

    /// Rejections are reported as failed results, never as `ToolError`.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let outcome = match serde_json::from_value::<TableCreationRequest>(call.arguments_value())
        {
            Ok(request) => create_table(self.session.as_ref(), &request).await,
            Err(e) => CreateTableOutcome::failed(
                CreateTableError::invalid_argument(format!("Invalid request format: {}", e)),
                None,
                false,
            ),
        };

        Ok(self.to_tool_result(call, outcome))
    }
}
