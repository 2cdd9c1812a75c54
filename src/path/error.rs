//! Path error types

use thiserror::Error;

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

/// Errors raised while parsing paths or combining them
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Unbalanced or nested key brackets in the path text
    #[error("malformed xpath {path:?} at position {position}")]
    MalformedPath {
        /// The offending path text
        path: String,
        /// Byte offset of the offending character
        position: usize,
    },

    /// A key clause that is unterminated, lacks `=`, or has an empty key or value
    #[error("malformed xpath key in element {element:?}")]
    MalformedPathKey {
        /// The path element text holding the bad key clause
        element: String,
    },

    /// An operand of a relative-path computation is not anchored at the root
    #[error("{operation}: both paths need to be absolute paths")]
    NotRootBased {
        /// Name of the operation that required absolute operands
        operation: &'static str,
    },
}

impl PathError {
    /// Create a malformed path error
    pub fn malformed_path(path: impl Into<String>, position: usize) -> Self {
        Self::MalformedPath {
            path: path.into(),
            position,
        }
    }

    /// Create a malformed key error
    pub fn malformed_key(element: impl Into<String>) -> Self {
        Self::MalformedPathKey {
            element: element.into(),
        }
    }
}
