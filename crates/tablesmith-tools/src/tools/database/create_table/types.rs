//! Data structures for the create_table tool

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::tools::database::session::SessionError;

/// One column of the requested table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, validated as an identifier
    #[serde(default)]
    pub name: String,
    /// SQL type fragment, passed through verbatim (e.g. "INT PRIMARY KEY")
    #[serde(rename = "type", default)]
    pub column_type: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// Arguments of a create_table call
///
/// Missing fields decode as empty so the validator can name what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreationRequest {
    /// Table name, optionally `schema.table` and optionally bracketed
    #[serde(default)]
    pub table_name: String,
    /// Column definitions in table order
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl TableCreationRequest {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }
}

/// Broad class of a create_table failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected locally, before any database call
    InvalidArgument,
    /// Surfaced by the database session
    ExecutionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::ExecutionFailure => "execution_failure",
        })
    }
}

/// A create_table failure: its kind plus human-readable detail
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{detail}")]
pub struct CreateTableError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl CreateTableError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            detail: detail.into(),
        }
    }

    pub fn execution_failure(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ExecutionFailure,
            detail: detail.into(),
        }
    }
}

impl From<SessionError> for CreateTableError {
    fn from(err: SessionError) -> Self {
        Self::execution_failure(err.to_string())
    }
}

/// What a create_table invocation reports back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableOutcome {
    pub success: bool,
    pub message: String,
    /// True only once the schema statement has completed. A schema batch
    /// that fails leaves this false, and so does an unqualified table name.
    pub schema_created: bool,
    /// Bracket-quoted target, once the name has been validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CreateTableError>,
}

impl CreateTableOutcome {
    pub(crate) fn created(qualified_name: String, schema_created: bool) -> Self {
        Self {
            success: true,
            message: format!("Table '{}' created successfully.", qualified_name),
            schema_created,
            qualified_name: Some(qualified_name),
            error: None,
        }
    }

    pub(crate) fn failed(
        error: CreateTableError,
        qualified_name: Option<String>,
        schema_created: bool,
    ) -> Self {
        Self {
            success: false,
            message: format!("Failed to create table: {}", error),
            schema_created,
            qualified_name,
            error: Some(error),
        }
    }

    /// Kind of the failure, if this outcome is one
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_decodes_wire_names() {
        let request: TableCreationRequest = serde_json::from_value(json!({
            "tableName": "app.users",
            "columns": [{"name": "id", "type": "INT"}]
        }))
        .unwrap();

        assert_eq!(request.table_name, "app.users");
        assert_eq!(request.columns, vec![ColumnSpec::new("id", "INT")]);
    }

    #[test]
    fn test_request_missing_fields_decode_empty() {
        let request: TableCreationRequest =
            serde_json::from_value(json!({"columns": [{"name": "id"}]})).unwrap();

        assert!(request.table_name.is_empty());
        assert!(request.columns[0].column_type.is_empty());
    }

    #[test]
    fn test_outcome_wire_shape() {
        let ok = CreateTableOutcome::created("[app].[users]".to_string(), true);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({
                "success": true,
                "message": "Table '[app].[users]' created successfully.",
                "schemaCreated": true,
                "qualifiedName": "[app].[users]"
            })
        );

        let failed = CreateTableOutcome::failed(
            CreateTableError::execution_failure("There is already an object named 'users'"),
            Some("[users]".to_string()),
            false,
        );
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(
            value["message"],
            "Failed to create table: There is already an object named 'users'"
        );
        assert_eq!(value["error"]["kind"], "execution_failure");
        assert_eq!(failed.error_kind(), Some(ErrorKind::ExecutionFailure));
    }

    #[test]
    fn test_session_error_keeps_engine_text() {
        let err: CreateTableError = SessionError::Permission("CREATE TABLE permission denied".into()).into();
        assert_eq!(err.kind, ErrorKind::ExecutionFailure);
        assert_eq!(err.detail, "CREATE TABLE permission denied");
    }
}
