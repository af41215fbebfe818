//! Tablesmith Tools
//!
//! - `database`: DDL tools that run against an injected database session

pub mod database;
