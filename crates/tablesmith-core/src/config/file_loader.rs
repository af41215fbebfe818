//! File-based configuration loading

use super::model::Config;
use crate::error::{TablesmithError, TablesmithResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> TablesmithResult<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TablesmithError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            TablesmithError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            TablesmithError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            TablesmithError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tablesmith.toml");
        fs::write(
            &config_path,
            r#"
[logging]
level = "debug"
format = "json"

[tools]
enabled_tools = ["create_table"]
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.tools.is_enabled("create_table"));
    }

    #[test]
    fn test_load_from_yaml_file_with_partial_sections() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tablesmith.yaml");
        fs::write(&config_path, "logging:\n  format: compact\n").unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.tools, Default::default());
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tablesmith.json");
        fs::write(&config_path, r#"{"tools": {"enabled_tools": []}}"#).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert!(config.tools.enabled_tools.is_empty());
    }

    #[test]
    fn test_unreadable_path_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("dir.toml");
        fs::create_dir(&config_path).unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, TablesmithError::Config { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
        assert!(err.context().unwrap().contains("dir.toml"));
    }

    #[test]
    fn test_invalid_toml_reports_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[logging\nlevel = ").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse TOML config"));
        assert!(err.context().unwrap().contains("broken.toml"));
    }
}
