//! Schema descriptor error types

use thiserror::Error;

/// Result type for schema descriptor operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while interpreting schema descriptors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A range boundary does not fit the target integer type
    #[error("error converting {value} to {target}: overflow")]
    NumberOverflow {
        /// The boundary as written
        value: String,
        /// Name of the target integer type
        target: &'static str,
    },

    /// A negative boundary was used for an unsigned type
    #[error("negative number {value} to uint conversion")]
    NegativeUnsigned {
        /// The boundary as written
        value: String,
    },
}
