use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, LensError>;

/// The Error type for loading, configuring and exporting the paper catalog.
///
/// Scoring and filtering never produce one of these: missing values are
/// substituted and empty selections are returned as empty collections.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration validation error: {0}")]
    ConfigValidationError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV reading error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("Required column '{column}' not found in dataset '{path}'")]
    MissingColumn { column: String, path: String },

    #[error("Quality threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(i64),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Serialization/Deserialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("No paper titled '{title}' in category '{category}'")]
    NotFound { category: String, title: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
