//! Conversion error types

use thiserror::Error;

use crate::schema::SchemaError;
use crate::value::DecimalParseError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while converting raw text or wire values to typed YANG values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The declared leaf type is not a known YANG built-in
    #[error("unsupported type {type_name:?}")]
    UnsupportedType {
        /// Declared type name
        type_name: String,
    },

    /// Text that does not parse as an integer
    #[error("invalid {type_name} value {value:?}: {reason}")]
    InvalidNumber {
        /// Raw input
        value: String,
        /// Target YANG type
        type_name: &'static str,
        /// Parser message
        reason: String,
    },

    /// An integer outside every allowed interval
    #[error("value {value} not within ranges {ranges} of {type_name}")]
    OutOfRange {
        /// The parsed value
        value: String,
        /// Allowed intervals in YANG range syntax
        ranges: String,
        /// Target YANG type
        type_name: &'static str,
    },

    /// A string whose length lies outside every declared interval
    #[error("length {length} of {value:?} not within {ranges}")]
    LengthOutOfRange {
        /// Raw input
        value: String,
        /// Length in characters
        length: u64,
        /// Allowed lengths in YANG range syntax
        ranges: String,
    },

    /// A schema pattern that does not compile
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Pattern as declared
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// A value rejected by one of its patterns
    #[error("{value:?} rejected by pattern {pattern:?} (inverted: {inverted})")]
    PatternMismatch {
        /// Raw input
        value: String,
        /// Pattern as declared
        pattern: String,
        /// Whether the pattern carries `invert-match`
        inverted: bool,
    },

    /// Anything but `true` or `false`
    #[error("invalid boolean {value:?}")]
    InvalidBoolean {
        /// Raw input
        value: String,
    },

    /// A name that is not one of the enumeration values
    #[error("{value:?} does not match any of the enum values [{}]", .valid.join(", "))]
    EnumMismatch {
        /// Raw input
        value: String,
        /// Valid enumeration names
        valid: Vec<String>,
    },

    /// A `bits` type without declared bits
    #[error("no bits declared for value {value:?}")]
    MissingBits {
        /// Raw input
        value: String,
    },

    /// Unknown or out-of-order bit names
    #[error("{value:?} does not follow the bits [{}]", .valid.join(" "))]
    BitsMismatch {
        /// Raw input
        value: String,
        /// Declared bit names in schema order
        valid: Vec<String>,
    },

    /// An identity missing from the prefix or module map
    #[error("identity {value:?} not found, known identities [{}]", .known.join(", "))]
    IdentityNotFound {
        /// Raw input
        value: String,
        /// Known identity names, sorted
        known: Vec<String>,
    },

    /// Malformed decimal64 text
    #[error("invalid decimal64 value {value:?}: {reason}")]
    InvalidDecimal {
        /// Raw input
        value: String,
        /// What is wrong with it
        reason: DecimalParseError,
    },

    /// Decimal64 digits that do not fit a signed 64-bit integer
    #[error("decimal64 value {value:?} overflows int64")]
    DecimalOverflow {
        /// Raw input
        value: String,
    },

    /// No union member accepted the value
    #[error("{value:?} not accepted by any union member [{}]", .members.join(", "))]
    UnionExhausted {
        /// Raw input
        value: String,
        /// Member type names in declaration order
        members: Vec<String>,
    },

    /// A `leafref` whose target type is unresolved
    #[error("leafref {leafref:?} has no resolved target type")]
    MissingLeafrefTarget {
        /// Leafref target path
        leafref: String,
    },

    /// A value update addressed to a container without `presence`
    #[error("non-presence container {name:?} update")]
    NonPresenceContainer {
        /// Container name
        name: String,
    },

    /// A schema descriptor that cannot be interpreted
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ConversionError {
    /// Create an unsupported type error
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(
        value: impl ToString,
        ranges: impl ToString,
        type_name: &'static str,
    ) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            ranges: ranges.to_string(),
            type_name,
        }
    }

    /// Create an invalid boolean error
    pub fn invalid_boolean(value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            value: value.into(),
        }
    }

    /// Map a decimal parse failure onto the matching conversion error
    pub fn decimal(value: impl Into<String>, reason: DecimalParseError) -> Self {
        match reason {
            DecimalParseError::Overflow => Self::DecimalOverflow {
                value: value.into(),
            },
            reason => Self::InvalidDecimal {
                value: value.into(),
                reason,
            },
        }
    }
}
