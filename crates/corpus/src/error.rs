use std::path::PathBuf;

use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while loading or navigating the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Requested book/chapter has no words in the corpus
    #[error("Not found: {0}")]
    NotFound(String),

    /// Words or verses from different locations were grouped together
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller passed an identifier of unsupported shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Embedded JSON marker is absent from the lexicon file
    #[error("Missing marker in lexicon source: {marker:?}")]
    MissingMarker { marker: String },

    /// A row does not have the structure the corpus guarantees
    #[error("Malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Lexicon JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on a data file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CorpusError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a missing-marker error
    pub fn missing_marker(marker: impl Into<String>) -> Self {
        Self::MissingMarker {
            marker: marker.into(),
        }
    }

    /// Create a malformed-row error
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Create an IO error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Attach a 1-based row number to a row error
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedRow { reason, .. } => Self::MalformedRow { line, reason },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_their_variants() {
        assert_eq!(
            CorpusError::not_found("chapter 9").to_string(),
            "Not found: chapter 9"
        );
        assert!(matches!(
            CorpusError::missing_marker("var x = "),
            CorpusError::MissingMarker { ref marker } if marker == "var x = "
        ));
        let err = CorpusError::malformed_row(0, "too few columns").at_line(7);
        assert_eq!(err.to_string(), "Malformed row 7: too few columns");
        assert!(matches!(
            CorpusError::config("empty").at_line(3),
            CorpusError::Config(_)
        ));
    }
}
