//! Error types for the generator.
//!
//! Uses the dual-error pattern: context-carrying variants for the two
//! input failure modes, plus `#[from]` conversions for plain IO errors
//! raised while writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the generator library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Wrap width outside the supported range.
    #[error("Invalid wrap width: {0}. Expected a value between 20 and 500")]
    InvalidWrapWidth(usize),

    /// Failed to read the master document.
    #[error("Failed to read master document {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the master document as YAML.
    #[error("Failed to parse master document {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
