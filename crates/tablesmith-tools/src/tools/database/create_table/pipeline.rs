//! Validate, plan, and execute a table creation

use tracing::{debug, error, info};

use super::statement::plan;
use super::types::{CreateTableError, CreateTableOutcome, TableCreationRequest};
use super::validation::validate_request;
use crate::tools::database::session::DatabaseSession;

/// Create the requested table through `session`
///
/// Never fails: every problem is folded into the returned outcome. Nothing
/// reaches the session unless the whole request validates. The schema batch,
/// when needed, completes before the table statement is sent. A failure
/// stops the pipeline. The call is not retried, and a schema that was already
/// created stays in place.
pub async fn create_table(
    session: &dyn DatabaseSession,
    request: &TableCreationRequest,
) -> CreateTableOutcome {
    info!(
        table = %request.table_name,
        columns = request.columns.len(),
        "creating table"
    );

    let validated = match validate_request(request) {
        Ok(validated) => validated,
        Err(err) => return CreateTableOutcome::failed(err, None, false),
    };

    let qualified_name = validated.name.quoted();
    let ddl = plan(&validated);
    let mut schema_created = false;

    if let Some(sql) = &ddl.schema_statement {
        debug!(%sql, "ensuring schema exists");
        if let Err(err) = session.execute_batch(sql).await {
            return execution_failed(err.into(), qualified_name, schema_created);
        }
        schema_created = true;
    }

    debug!(sql = %ddl.table_statement, "creating table");
    if let Err(err) = session.execute_query(&ddl.table_statement).await {
        return execution_failed(err.into(), qualified_name, schema_created);
    }

    info!(table = %qualified_name, schema_created, "table created");
    CreateTableOutcome::created(qualified_name, schema_created)
}

fn execution_failed(
    err: CreateTableError,
    qualified_name: String,
    schema_created: bool,
) -> CreateTableOutcome {
    error!(table = %qualified_name, schema_created, error = %err, "failed to create table");
    CreateTableOutcome::failed(err, Some(qualified_name), schema_created)
}
