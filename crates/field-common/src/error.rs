//! Error types for precipitation field rendering.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for layer and rendering operations.
#[derive(Debug, Error)]
pub enum FieldError {
    // === Configuration Errors ===
    #[error("Too many sample points: {count} exceeds the maximum of {max}")]
    TooManyPoints { count: usize, max: usize },

    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Invalid gradient: {0}")]
    InvalidGradient(String),

    #[error("Invalid sample point at index {index}: {message}")]
    InvalidPoint { index: usize, message: String },

    // === Initialization Errors ===
    #[error("Layer initialization failed: {0}")]
    Initialization(String),

    // === Rendering Errors ===
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Encoding failed: {0}")]
    Encode(String),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FieldError {
    /// Shorthand for an `InvalidConfig` error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error rejects a caller update (the previous state stays active).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FieldError::TooManyPoints { .. }
                | FieldError::InvalidConfig { .. }
                | FieldError::InvalidGradient(_)
                | FieldError::InvalidPoint { .. }
        )
    }

    /// Whether this error means the layer never became renderable.
    pub fn is_initialization_error(&self) -> bool {
        matches!(self, FieldError::Initialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = FieldError::TooManyPoints { count: 251, max: 250 };
        assert!(err.is_configuration_error());
        assert!(!err.is_initialization_error());

        let err = FieldError::InvalidPoint {
            index: 3,
            message: "longitude is not finite".to_string(),
        };
        assert!(err.is_configuration_error());

        let err = FieldError::Initialization("thread pool".to_string());
        assert!(err.is_initialization_error());
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_error_messages() {
        let err = FieldError::TooManyPoints { count: 300, max: 250 };
        assert_eq!(
            err.to_string(),
            "Too many sample points: 300 exceeds the maximum of 250"
        );

        let err = FieldError::invalid_config("influenceRadius", "must be > 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'influenceRadius': must be > 0"
        );
    }
}
