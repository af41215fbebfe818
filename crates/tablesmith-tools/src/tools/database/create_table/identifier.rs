//! Table name parsing and identifier validation

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::types::CreateTableError;

/// Identifier grammar for schema, table, and column names
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Which part of the request an identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Schema,
    Table,
    Column,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdentifierKind::Schema => "schema",
            IdentifierKind::Table => "table",
            IdentifierKind::Column => "column",
        })
    }
}

/// A table name with its optional schema, unquoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub table: String,
}

impl QualifiedName {
    /// `[schema].[table]`, or `[table]` without a schema
    ///
    /// Only meaningful once both parts passed [`validate_identifier`].
    pub fn quoted(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", quote(schema), quote(&self.table)),
            None => quote(&self.table),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.quoted())
    }
}

/// Bracket-quote a validated identifier
pub(crate) fn quote(identifier: &str) -> String {
    format!("[{}]", identifier)
}

/// Split a raw table name into schema and table parts
///
/// Brackets are stripped and each dot-separated part is trimmed; empty parts
/// are dropped. One part is a bare table, two are `schema.table`. Anything
/// longer (server- or database-qualified names) is rejected.
pub fn parse_table_name(raw: &str) -> Result<QualifiedName, CreateTableError> {
    if raw.trim().is_empty() {
        return Err(CreateTableError::invalid_argument("Table name is required"));
    }

    let without_closing = raw.replace(']', "");
    let parts: Vec<String> = without_closing
        .split('.')
        .map(|part| part.replace('[', "").trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [table] => Ok(QualifiedName {
            schema: None,
            table: table.clone(),
        }),
        [schema, table] => Ok(QualifiedName {
            schema: Some(schema.clone()),
            table: table.clone(),
        }),
        [] => Err(CreateTableError::invalid_argument(format!(
            "Table name '{}' does not contain an identifier",
            raw
        ))),
        _ => Err(CreateTableError::invalid_argument(format!(
            "Table name '{}' has too many parts: expected 'table' or 'schema.table'",
            raw
        ))),
    }
}

/// Check one identifier against the grammar
pub fn validate_identifier(kind: IdentifierKind, name: &str) -> Result<(), CreateTableError> {
    if IDENTIFIER_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(CreateTableError::invalid_argument(format!(
            "Invalid {} name '{}': identifiers must start with a letter or underscore \
             and contain only letters, digits, or underscores",
            kind, name
        )))
    }
}
