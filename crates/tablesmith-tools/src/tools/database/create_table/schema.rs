//! Schema definition for the create_table tool

use serde_json::json;
use tablesmith_core::tools::types::{ToolParameter, ToolSchema};

/// Creates the JSON schema for the create_table tool
pub fn create_schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema::new(
        name,
        description,
        vec![
            ToolParameter::string(
                "tableName",
                "Table to create, either 'table' or 'schema.table'. Square brackets are accepted and ignored.",
            ),
            ToolParameter::array(
                "columns",
                "Column definitions, in table order",
                json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Column name: a letter or underscore, then letters, digits, or underscores"
                        },
                        "type": {
                            "type": "string",
                            "description": "SQL type and constraints, e.g. 'NVARCHAR(255) NOT NULL'"
                        }
                    },
                    "required": ["name", "type"]
                }),
            )
            .with_property("minItems", 1),
        ],
    )
}
