//! Fixed-point decimal values

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A YANG `decimal64` value: `digits × 10^-precision`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal64 {
    /// Unscaled digits, sign included
    pub digits: i64,
    /// Number of fractional digits
    pub precision: u32,
}

/// Why a decimal text could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalParseError {
    /// Nothing but whitespace
    Empty,
    /// A sign with no digits after it
    SignOnly,
    /// Neither integer nor fractional digits
    NoDigits,
    /// A character that is not a decimal digit
    InvalidDigit,
    /// The combined digits do not fit `i64`
    Overflow,
}

impl fmt::Display for DecimalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty decimal64 string",
            Self::SignOnly => "no digits after sign",
            Self::NoDigits => "no digits in decimal64 value",
            Self::InvalidDigit => "invalid digit in decimal64 value",
            Self::Overflow => "decimal64 digits overflow int64",
        })
    }
}

impl std::error::Error for DecimalParseError {}

impl Decimal64 {
    /// Create a decimal from digits and precision
    pub fn new(digits: i64, precision: u32) -> Self {
        Self { digits, precision }
    }

    /// Compare numerically, independent of the declared precisions.
    ///
    /// Both operands are rescaled to the larger precision. When rescaling
    /// overflows even `i128`, the rescaled operand's magnitude exceeds any
    /// `i64`, so its sign decides.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let max = self.precision.max(other.precision);
        match (self.rescaled(max), other.rescaled(max)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => self.digits.signum().cmp(&0),
            (Some(_), None) => 0.cmp(&other.digits.signum()),
            // only one side can be rescaled upwards
            (None, None) => Ordering::Equal,
        }
    }

    fn rescaled(&self, precision: u32) -> Option<i128> {
        if self.digits == 0 {
            return Some(0);
        }
        let scale = 10i128.checked_pow(precision - self.precision)?;
        i128::from(self.digits).checked_mul(scale)
    }
}

impl PartialOrd for Decimal64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric order; ties between equal quantities at different precisions are
/// broken by precision so the order stays consistent with `Eq`
impl Ord for Decimal64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
            .then_with(|| self.precision.cmp(&other.precision))
    }
}

/// Canonical text: the decimal point sits `precision` digits from the right,
/// with at least one integer digit (`5` at precision 3 is `0.005`)
impl fmt::Display for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits.unsigned_abs().to_string();
        let precision = self.precision as usize;
        if self.digits < 0 {
            f.write_str("-")?;
        }
        if precision == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > precision {
            let (int, frac) = digits.split_at(digits.len() - precision);
            return write!(f, "{int}.{frac}");
        }
        f.write_str("0.")?;
        for _ in digits.len()..precision {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    }
}

/// Parse `[sign]digits[.digits]`; precision is the number of fractional
/// digits written
impl FromStr for Decimal64 {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim();
        if v.is_empty() {
            return Err(DecimalParseError::Empty);
        }
        let (negative, v) = match v.as_bytes()[0] {
            b'-' => (true, &v[1..]),
            b'+' => (false, &v[1..]),
            _ => (false, v),
        };
        if v.is_empty() {
            return Err(DecimalParseError::SignOnly);
        }

        let (int, frac) = v.split_once('.').unwrap_or((v, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(DecimalParseError::NoDigits);
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(DecimalParseError::InvalidDigit);
        }

        let mut magnitude: u64 = 0;
        for b in int.bytes().chain(frac.bytes()) {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(b - b'0')))
                .ok_or(DecimalParseError::Overflow)?;
        }
        let digits = if negative {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(DecimalParseError::Overflow);
            }
            0i64.wrapping_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).map_err(|_| DecimalParseError::Overflow)?
        };
        let precision = u32::try_from(frac.len()).map_err(|_| DecimalParseError::Overflow)?;

        Ok(Self { digits, precision })
    }
}
