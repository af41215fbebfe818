//! `create_table` tool
//!
//! Turns `{ tableName, columns }` into a `CREATE TABLE` statement, creating the
//! schema first when the name is schema-qualified.
//!
//! # Trust boundary
//!
//! DDL identifiers cannot be bind parameters, so schema, table, and column
//! names are checked against `^[A-Za-z_][A-Za-z0-9_]*$` and bracket-quoted
//! before they are interpolated. Column *type* strings (`NVARCHAR(255) NOT NULL`)
//! are NOT checked beyond being non-empty: they are spliced into the statement
//! verbatim, and the engine is the judge of whether they are valid. Callers
//! that accept types from untrusted input must vet them upstream.

mod identifier;
mod pipeline;
mod schema;
mod statement;
mod tool;
mod types;
mod validation;


pub use identifier::{IdentifierKind, QualifiedName, parse_table_name, validate_identifier};
pub use pipeline::create_table;
pub use statement::{
    DdlPlan, column_definitions, create_table_statement, plan, schema_creation_statement,
};
pub use tool::CreateTableTool;
pub use types::{ColumnSpec, CreateTableError, CreateTableOutcome, ErrorKind, TableCreationRequest};
pub use validation::{ValidatedTable, validate_request};
