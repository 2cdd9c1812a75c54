//! Crate-level error type
//!
//! Each module owns a focused error enum; [`YangPathError`] folds them into a
//! single type for callers that mix path and value operations.

use thiserror::Error;

use crate::convert::ConversionError;
use crate::path::PathError;
use crate::schema::SchemaError;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, YangPathError>;

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YangPathError {
    /// Path parsing or path algebra error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Schema descriptor error
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Typed value conversion error
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl YangPathError {
    /// Check if the error was raised while parsing a path
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Path(PathError::MalformedPath { .. } | PathError::MalformedPathKey { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_module_errors() {
        let err: YangPathError = PathError::malformed_key("a[b").into();
        assert!(err.is_parse_error());

        let err: YangPathError = ConversionError::invalid_boolean("maybe").into();
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), ConversionError::invalid_boolean("maybe").to_string());
    }
}
