//! Error types for the cube-sorter library

use thiserror::Error;

/// Result type alias for cube-sorter operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error types for model construction and classification
///
/// Two kinds cover the whole crate: `Data` for unusable training sample
/// sources, and `InvalidInput` for malformed or degenerate measurement
/// batches and unrecognized color names. Neither is recoverable by retry,
/// and classification never falls back to a default color or angle.
#[derive(Error, Debug)]
pub enum SortError {
    /// Training sample source missing, unreadable, or without valid samples
    #[error("sample data error: {message}")]
    Data {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed or fully-degenerate measurement input, or an unknown color name
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl SortError {
    /// Create a data error without an underlying cause
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data error wrapping an underlying cause
    pub fn data_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Data {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Check whether this error originated in training data handling
    pub fn is_data(&self) -> bool {
        matches!(self, SortError::Data { .. })
    }

    /// Check whether this error originated in measurement input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SortError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let data = SortError::data("missing source");
        assert!(data.is_data());
        assert!(!data.is_invalid_input());

        let input = SortError::invalid_input("empty batch");
        assert!(input.is_invalid_input());
        assert!(!input.is_data());
    }

    #[test]
    fn test_data_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SortError::data_with("cannot read data/red_data.csv", io);

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("red_data.csv"));
    }
}
