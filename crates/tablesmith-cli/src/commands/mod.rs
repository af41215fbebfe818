//! CLI command implementations

pub mod create_table;
pub mod schema;
pub mod tools;
