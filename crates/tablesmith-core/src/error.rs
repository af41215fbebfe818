//! Error types for Tablesmith

use thiserror::Error;

/// Result type alias for Tablesmith operations
pub type TablesmithResult<T> = Result<T, TablesmithError>;

/// Main error type for Tablesmith
#[derive(Error, Debug, Clone)]
pub enum TablesmithError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },
}

impl TablesmithError {
    /// Create a configuration error that records what was being attempted
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_keeps_context() {
        let err = TablesmithError::config_with_context("bad value", "Reading 'a.toml'");
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert_eq!(err.context(), Some("Reading 'a.toml'"));
    }
}
