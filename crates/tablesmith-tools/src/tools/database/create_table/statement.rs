//! DDL statement synthesis
//!
//! Every identifier reaching this module has passed the identifier grammar,
//! so it cannot contain `]` or `'` and is safe inside brackets or N'...'.

use super::identifier::{QualifiedName, quote};
use super::types::ColumnSpec;
use super::validation::ValidatedTable;

/// The statements needed for one table, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlPlan {
    /// Idempotent schema creation, run as its own batch first
    pub schema_statement: Option<String>,
    /// The `CREATE TABLE` statement
    pub table_statement: String,
}

impl DdlPlan {
    /// Statements in the order they must run
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.schema_statement
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.table_statement.as_str()))
    }
}

/// Plan the statements for a validated table
pub fn plan(table: &ValidatedTable<'_>) -> DdlPlan {
    DdlPlan {
        schema_statement: table.name.schema.as_deref().map(schema_creation_statement),
        table_statement: create_table_statement(&table.name, table.columns),
    }
}

/// Create `schema` unless `sys.schemas` already lists it
///
/// `CREATE SCHEMA` must be alone in its batch, hence the dynamic `EXEC`.
pub fn schema_creation_statement(schema: &str) -> String {
    format!(
        "IF NOT EXISTS (SELECT * FROM sys.schemas WHERE name = N'{}') EXEC('CREATE SCHEMA {}')",
        schema,
        quote(schema)
    )
}

/// `[a] T1, [b] T2`, in input order
pub fn column_definitions(columns: &[ColumnSpec]) -> String {
    columns
        .iter()
        .map(|column| format!("{} {}", quote(&column.name), column.column_type))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn create_table_statement(name: &QualifiedName, columns: &[ColumnSpec]) -> String {
    format!(
        "CREATE TABLE {} ({})",
        name.quoted(),
        column_definitions(columns)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(schema: Option<&str>, table: &str) -> QualifiedName {
        QualifiedName {
            schema: schema.map(str::to_string),
            table: table.to_string(),
        }
    }

    #[test]
    fn test_single_column_table() {
        let sql = create_table_statement(
            &name(None, "users"),
            &[ColumnSpec::new("id", "INT PRIMARY KEY")],
        );
        assert_eq!(sql, "CREATE TABLE [users] ([id] INT PRIMARY KEY)");
    }

    #[test]
    fn test_columns_keep_order_and_types_verbatim() {
        let cols = [
            ColumnSpec::new("id", "INT IDENTITY(1,1) PRIMARY KEY"),
            ColumnSpec::new("email", "NVARCHAR(255) NOT NULL"),
            ColumnSpec::new("created_at", "DATETIME2 DEFAULT SYSUTCDATETIME()"),
        ];
        assert_eq!(
            column_definitions(&cols),
            "[id] INT IDENTITY(1,1) PRIMARY KEY, [email] NVARCHAR(255) NOT NULL, \
             [created_at] DATETIME2 DEFAULT SYSUTCDATETIME()"
        );
    }

    #[test]
    fn test_schema_qualified_table() {
        let sql = create_table_statement(&name(Some("app"), "users"), &[ColumnSpec::new("id", "INT")]);
        assert_eq!(sql, "CREATE TABLE [app].[users] ([id] INT)");
    }

    #[test]
    fn test_schema_statement_is_conditional() {
        assert_eq!(
            schema_creation_statement("app"),
            "IF NOT EXISTS (SELECT * FROM sys.schemas WHERE name = N'app') \
             EXEC('CREATE SCHEMA [app]')"
        );
    }

    #[test]
    fn test_plan_orders_schema_first() {
        let columns = [ColumnSpec::new("id", "INT")];
        let qualified = ValidatedTable {
            name: name(Some("app"), "users"),
            columns: &columns,
        };
        let plan_with_schema = plan(&qualified);
        let statements: Vec<&str> = plan_with_schema.statements().collect();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("CREATE SCHEMA [app]"));
        assert_eq!(statements[1], "CREATE TABLE [app].[users] ([id] INT)");

        let bare = ValidatedTable {
            name: name(None, "users"),
            columns: &columns,
        };
        let bare_plan = plan(&bare);
        assert!(bare_plan.schema_statement.is_none());
        assert_eq!(bare_plan.statements().count(), 1);
    }
}
