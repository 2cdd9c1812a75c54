//! Total order over typed values
//!
//! Values of different kinds order by a fixed kind rank. Values of the same
//! kind order by their payload. Timestamps never take part in comparison.

use super::{TypedValue, Value};
use std::cmp::Ordering;

impl Value {
    /// Position of the value kind in the cross-kind order
    pub fn kind_rank(&self) -> u8 {
        match self {
            Self::String(_) => 2,
            Self::Int(_) => 3,
            Self::Uint(_) => 4,
            Self::Bool(_) => 5,
            Self::Bytes(_) => 6,
            Self::Float(_) => 7,
            Self::Decimal(_) => 8,
            Self::LeafList(_) => 9,
            Self::Any(_) => 10,
            Self::Json(_) => 11,
            Self::JsonIetf(_) => 12,
            Self::Ascii(_) => 13,
            Self::ProtoBytes(_) => 14,
            Self::Empty => 15,
            Self::Double(_) => 16,
            Self::IdentityRef(_) => 17,
        }
    }
}

/// Compare two optional values; an absent value sorts before any present one
pub fn compare_values(a: Option<&TypedValue>, b: Option<&TypedValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.value.cmp(&b.value),
    }
}

/// NaN sorts below every number and equal to itself
fn cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn sorted_strings(elems: &[TypedValue]) -> Vec<String> {
    let mut strings: Vec<String> = elems.iter().map(ToString::to_string).collect();
    strings.sort();
    strings
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;

        match (self, other) {
            (String(a), String(b)) | (Ascii(a), Ascii(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Uint(a), Uint(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Bytes(a), Bytes(b))
            | (Json(a), Json(b))
            | (JsonIetf(a), JsonIetf(b))
            | (ProtoBytes(a), ProtoBytes(b)) => a.cmp(b),
            (Float(a), Float(b)) => cmp_float(f64::from(*a), f64::from(*b)),
            (Double(a), Double(b)) => cmp_float(*a, *b),
            (Decimal(a), Decimal(b)) => a.cmp_value(b),
            (LeafList(a), LeafList(b)) => sorted_strings(a).cmp(&sorted_strings(b)),
            // the type URL does not take part
            (Any(a), Any(b)) => a.value.cmp(&b.value),
            (Empty, Empty) => Ordering::Equal,
            (IdentityRef(a), IdentityRef(b)) => a.sort_key().cmp(&b.sort_key()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the order, so `5.0` equals `5.00` and NaN equals NaN
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Ord for TypedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for TypedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TypedValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TypedValue {}
