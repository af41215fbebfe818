//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablesmith_core::config::{LogFormat, LoggingConfig};
use tablesmith_tools::tools::database::create_table::ColumnSpec;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "tablesmith.toml";

#[derive(Parser, Debug)]
#[command(name = "tablesmith")]
#[command(about = "Tablesmith - validated SQL Server DDL tools for agents")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML, or JSON)
    #[arg(long = "config", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config_file: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Let command-line flags win over the configuration file
    pub fn apply_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            logging.format = format;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tools
    Tools,

    /// Print a tool's JSON input schema
    Schema {
        /// Tool name
        tool: String,
    },

    /// Create a table, printing the statements as a script
    CreateTable {
        /// Table name: 'table' or 'schema.table'
        #[arg(long, required_unless_present = "request", conflicts_with = "request")]
        table: Option<String>,

        /// Column as NAME:TYPE, e.g. "email:NVARCHAR(255) NOT NULL" (repeatable)
        #[arg(long = "column", value_parser = parse_column, conflicts_with = "request")]
        columns: Vec<ColumnSpec>,

        /// JSON file holding the full request ({ tableName, columns })
        #[arg(long)]
        request: Option<PathBuf>,
    },
}

/// Parse `NAME:TYPE`; the type may itself contain colons
fn parse_column(value: &str) -> Result<ColumnSpec, String> {
    let (name, column_type) = value
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:TYPE, got '{}'", value))?;
    Ok(ColumnSpec::new(name.trim(), column_type.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column() {
        assert_eq!(
            parse_column("email:NVARCHAR(255) NOT NULL").unwrap(),
            ColumnSpec::new("email", "NVARCHAR(255) NOT NULL")
        );
        assert_eq!(
            parse_column("at: TIME DEFAULT '12:00'").unwrap(),
            ColumnSpec::new("at", "TIME DEFAULT '12:00'")
        );
        assert!(parse_column("id INT").is_err());
    }

    #[test]
    fn test_create_table_args() {
        let cli = Cli::try_parse_from([
            "tablesmith",
            "create-table",
            "--table",
            "app.users",
            "--column",
            "id:INT",
            "--column",
            "name:NVARCHAR(50)",
        ])
        .unwrap();

        match cli.command {
            Commands::CreateTable { table, columns, request } => {
                assert_eq!(table.as_deref(), Some("app.users"));
                assert_eq!(columns.len(), 2);
                assert!(request.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config_file, DEFAULT_CONFIG_FILE);
    }

    #[test]
    fn test_request_conflicts_with_table() {
        let result = Cli::try_parse_from([
            "tablesmith",
            "create-table",
            "--table",
            "users",
            "--request",
            "req.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_logging_overrides() {
        let cli = Cli::try_parse_from([
            "tablesmith",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "tools",
        ])
        .unwrap();

        let mut logging = LoggingConfig::default();
        cli.apply_overrides(&mut logging);
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
    }
}
