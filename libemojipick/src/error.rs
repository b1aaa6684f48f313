//! Error types for emojipick
//!
//! The selection engine itself is total: `Picker::handle` never fails.
//! These errors cover the collaborators around it (configuration loading
//! and recents persistence) and the argument validation done by the tools.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickError>;

#[derive(Error, Debug)]
pub enum PickError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PickError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PickError::InvalidInput(_) => 3,
            PickError::Config(_) => 1,
            PickError::Storage(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported recents file version {0}")]
    UnsupportedVersion(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = PickError::InvalidInput("limit must be positive".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = PickError::Config(ConfigError::MissingField("config directory".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_storage_error() {
        let error = PickError::Storage(StorageError::UnsupportedVersion(7));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_value() {
        let error = PickError::Config(ConfigError::InvalidValue {
            field: "grid.cols".to_string(),
            reason: "must be at least 1".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid value for grid.cols: must be at least 1"
        );
    }

    #[test]
    fn test_error_message_formatting_storage() {
        let error = PickError::Storage(StorageError::UnsupportedVersion(2));
        assert_eq!(
            error.to_string(),
            "Storage error: Unsupported recents file version 2"
        );
    }

    #[test]
    fn test_error_conversion_from_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: PickError = StorageError::Io(io).into();

        match error {
            PickError::Storage(StorageError::Io(_)) => {}
            _ => panic!("Expected PickError::Storage"),
        }
    }
}
