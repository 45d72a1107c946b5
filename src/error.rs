use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum ShepherdError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Build of module '{module}' failed: {reason}")]
    BuildFailed { module: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShepherdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("localRepository.path must be set".into());
        assert!(err.to_string().contains("localRepository.path"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let shepherd_err: ShepherdError = config_err.into();
        assert!(matches!(shepherd_err, ShepherdError::Config(_)));
    }

    #[test]
    fn build_failed_names_module() {
        let err = ShepherdError::BuildFailed {
            module: "core".into(),
            reason: "exit code 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("core"));
        assert!(msg.contains("exit code 1"));
    }
}
