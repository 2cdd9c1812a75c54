//! Typed YANG leaf values
//!
//! [`TypedValue`] pairs a [`Value`], a closed sum type over every kind of
//! leaf value, with an optional timestamp. Values render to their canonical
//! text through `Display` and are totally ordered (see [`compare`]).

pub mod compare;
pub mod decimal;
pub mod identity;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use compare::compare_values;
pub use decimal::{Decimal64, DecimalParseError};
pub use identity::IdentityRef;

/// Opaque payload tagged with a type URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnyValue {
    /// Type URL describing the payload
    pub type_url: String,
    /// Encoded payload
    pub value: Vec<u8>,
}

/// The active variant of a [`TypedValue`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// UTF-8 string
    String(String),
    /// Signed integer of any width
    Int(i64),
    /// Unsigned integer of any width
    Uint(u64),
    /// Boolean
    Bool(bool),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Single precision float
    Float(f32),
    /// Fixed-point decimal
    Decimal(Decimal64),
    /// Leaf-list elements in wire order
    LeafList(Vec<TypedValue>),
    /// Opaque typed payload
    Any(AnyValue),
    /// JSON document
    Json(Vec<u8>),
    /// RFC 7951 JSON document
    JsonIetf(Vec<u8>),
    /// ASCII string
    Ascii(String),
    /// Encoded protobuf message
    ProtoBytes(Vec<u8>),
    /// The YANG `empty` type
    Empty,
    /// Double precision float
    Double(f64),
    /// Identity reference
    IdentityRef(IdentityRef),
}

impl Value {
    /// Name of the active variant
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::LeafList(_) => "leaflist",
            Self::Any(_) => "any",
            Self::Json(_) => "json",
            Self::JsonIetf(_) => "json_ietf",
            Self::Ascii(_) => "ascii",
            Self::ProtoBytes(_) => "proto_bytes",
            Self::Empty => "empty",
            Self::Double(_) => "double",
            Self::IdentityRef(_) => "identityref",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Ascii(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Bytes(b) | Self::Json(b) | Self::JsonIetf(b) | Self::ProtoBytes(b) => {
                f.write_str(&String::from_utf8_lossy(b))
            }
            Self::Any(any) => f.write_str(&String::from_utf8_lossy(&any.value)),
            Self::Float(v) => f.write_str(&exponent_form(format!("{v:e}"))),
            Self::Double(v) => f.write_str(&exponent_form(format!("{v:e}"))),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::LeafList(elems) => {
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{elem}")?;
                }
                Ok(())
            }
            Self::Empty => f.write_str("{}"),
            Self::IdentityRef(id) => write!(f, "{id}"),
        }
    }
}

/// Rewrite Rust's shortest `{:e}` output (`1.5e0`, `1e-7`) into the signed,
/// two-digit exponent form (`1.5e+00`, `1e-07`)
fn exponent_form(repr: String) -> String {
    match repr.as_str() {
        "inf" => return "+Inf".to_string(),
        "-inf" => return "-Inf".to_string(),
        _ => {}
    }
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// A leaf value with the time it was observed or set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedValue {
    /// Epoch-like timestamp; zero means unset
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timestamp: u64,
    /// The value itself
    pub value: Value,
}

fn is_zero(ts: &u64) -> bool {
    *ts == 0
}

impl TypedValue {
    /// Wrap a value without timestamp
    pub fn new(value: Value) -> Self {
        Self {
            timestamp: 0,
            value,
        }
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// String value
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Value::String(s.into()))
    }

    /// ASCII string value
    pub fn ascii(s: impl Into<String>) -> Self {
        Self::new(Value::Ascii(s.into()))
    }

    /// Boolean value
    pub fn bool(b: bool) -> Self {
        Self::new(Value::Bool(b))
    }

    /// Signed integer value
    pub fn int(i: i64) -> Self {
        Self::new(Value::Int(i))
    }

    /// Unsigned integer value
    pub fn uint(u: u64) -> Self {
        Self::new(Value::Uint(u))
    }

    /// Fixed-point decimal value
    pub fn decimal(digits: i64, precision: u32) -> Self {
        Self::new(Value::Decimal(Decimal64::new(digits, precision)))
    }

    /// Single precision float value
    pub fn float(v: f32) -> Self {
        Self::new(Value::Float(v))
    }

    /// Double precision float value
    pub fn double(v: f64) -> Self {
        Self::new(Value::Double(v))
    }

    /// The `empty` value
    pub fn empty() -> Self {
        Self::new(Value::Empty)
    }

    /// Identity reference value
    pub fn identity_ref(id: IdentityRef) -> Self {
        Self::new(Value::IdentityRef(id))
    }

    /// Leaf-list value
    pub fn leaf_list(elems: Vec<TypedValue>) -> Self {
        Self::new(Value::LeafList(elems))
    }

    /// Raw bytes value
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::Bytes(b.into()))
    }

    /// Opaque typed payload
    pub fn any(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::Any(AnyValue {
            type_url: type_url.into(),
            value: value.into(),
        }))
    }

    /// JSON document value
    pub fn json(b: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::Json(b.into()))
    }

    /// RFC 7951 JSON document value
    pub fn json_ietf(b: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::JsonIetf(b.into()))
    }

    /// Encoded protobuf value
    pub fn proto_bytes(b: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::ProtoBytes(b.into()))
    }

    /// The string payload of a string or ascii value
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) | Value::Ascii(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical text of the value; the timestamp is not rendered
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
