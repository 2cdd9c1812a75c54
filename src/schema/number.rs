//! Sign/magnitude numbers for range boundaries

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{SchemaError, SchemaResult};

/// A range boundary spanning both the full `i64` and `u64` domains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Number {
    /// Magnitude
    pub value: u64,
    /// Sign; `-0` is treated as zero
    #[serde(default)]
    pub negative: bool,
}

impl Number {
    /// Create a non-negative number
    pub fn positive(value: u64) -> Self {
        Self {
            value,
            negative: false,
        }
    }

    /// Create a number from a magnitude and a sign
    pub fn new(value: u64, negative: bool) -> Self {
        Self { value, negative }
    }

    /// Convert to `u64`; negative numbers are rejected (`-0` included)
    pub fn to_u64(self) -> SchemaResult<u64> {
        if self.negative {
            return Err(SchemaError::NegativeUnsigned {
                value: self.to_string(),
            });
        }
        Ok(self.value)
    }

    /// Convert to `i64`, failing when the magnitude does not fit
    pub fn to_i64(self) -> SchemaResult<i64> {
        let overflow = || SchemaError::NumberOverflow {
            value: self.to_string(),
            target: "int64",
        };
        if self.negative {
            if self.value > i64::MIN.unsigned_abs() {
                return Err(overflow());
            }
            // -(2^63) is the only magnitude that does not fit a positive i64
            Ok(0i64.wrapping_sub_unsigned(self.value))
        } else {
            i64::try_from(self.value).map_err(|_| overflow())
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::new(v.unsigned_abs(), v < 0)
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Self::positive(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_i64_bounds() {
        assert_eq!(Number::from(i64::MIN).to_i64().unwrap(), i64::MIN);
        assert_eq!(Number::from(i64::MAX).to_i64().unwrap(), i64::MAX);
        assert_eq!(Number::new(5, true).to_i64().unwrap(), -5);

        let too_small = Number::new(i64::MIN.unsigned_abs() + 1, true);
        assert!(matches!(
            too_small.to_i64(),
            Err(SchemaError::NumberOverflow { .. })
        ));
        let too_big = Number::positive(i64::MAX as u64 + 1);
        assert!(too_big.to_i64().is_err());
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(Number::positive(u64::MAX).to_u64().unwrap(), u64::MAX);
        assert!(matches!(
            Number::new(1, true).to_u64(),
            Err(SchemaError::NegativeUnsigned { .. })
        ));
    }
}
