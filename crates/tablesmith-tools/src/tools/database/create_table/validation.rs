//! Request-level validation

use tracing::warn;

use super::identifier::{IdentifierKind, QualifiedName, parse_table_name, validate_identifier};
use super::types::{ColumnSpec, CreateTableError, TableCreationRequest};

/// A request that passed every local check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTable<'a> {
    pub name: QualifiedName,
    pub columns: &'a [ColumnSpec],
}

/// Validate a request, stopping at the first problem
///
/// Order: table name present, columns present, name parses, schema, table,
/// then each column's name and type in request order.
pub fn validate_request(
    request: &TableCreationRequest,
) -> Result<ValidatedTable<'_>, CreateTableError> {
    check(request).inspect_err(|err| {
        warn!(table = %request.table_name, reason = %err, "rejected create_table request");
    })
}

fn check(request: &TableCreationRequest) -> Result<ValidatedTable<'_>, CreateTableError> {
    if request.table_name.trim().is_empty() {
        return Err(CreateTableError::invalid_argument("Table name is required"));
    }

    if request.columns.is_empty() {
        return Err(CreateTableError::invalid_argument(
            "At least one column is required",
        ));
    }

    let name = parse_table_name(&request.table_name)?;

    if let Some(schema) = &name.schema {
        validate_identifier(IdentifierKind::Schema, schema)?;
    }
    validate_identifier(IdentifierKind::Table, &name.table)?;

    for column in &request.columns {
        validate_identifier(IdentifierKind::Column, &column.name)?;

        if column.column_type.trim().is_empty() {
            return Err(CreateTableError::invalid_argument(format!(
                "Column '{}' is missing a type",
                column.name
            )));
        }
    }

    Ok(ValidatedTable {
        name,
        columns: &request.columns,
    })
}
