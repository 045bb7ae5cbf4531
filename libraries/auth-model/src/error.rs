/// Core error types for the auth model
use thiserror::Error;

/// Result type alias using `ModelError`
pub type Result<T> = std::result::Result<T, ModelError>;

/// Core error type for the auth model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<config::ConfigError> for ModelError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = ModelError::invalid_input("unknown field: nickname");
        assert_eq!(err.to_string(), "Invalid input: unknown field: nickname");
    }

    #[test]
    fn serde_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ModelError = parse.into();
        assert!(matches!(err, ModelError::Serialization(_)));
    }
}
