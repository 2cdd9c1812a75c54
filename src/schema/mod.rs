//! Schema descriptors consumed by the conversion engine
//!
//! These mirror the leaf-type information a YANG schema server hands out. The
//! conversion engine only reads them; loading and storing schemas happens
//! elsewhere.

pub mod error;
pub mod number;
pub mod range;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use error::{SchemaError, SchemaResult};
pub use number::Number;
pub use range::{Interval, Ranges};

/// An inclusive `min..max` restriction as declared in the schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMinMaxType {
    /// Lower bound
    pub min: Number,
    /// Upper bound
    pub max: Number,
}

impl SchemaMinMaxType {
    /// Create a restriction from two boundaries
    pub fn new(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// A `pattern` statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaPattern {
    /// XML Schema regular expression
    pub pattern: String,
    /// `modifier invert-match`
    #[serde(default)]
    pub inverted: bool,
}

/// A named bit of a `bits` type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bit {
    /// Bit name
    pub name: String,
    /// Bit position
    #[serde(default)]
    pub value: u32,
}

/// Declared type of a YANG leaf with the restrictions relevant to conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaLeafType {
    /// YANG built-in type name, e.g. `uint8` or `identityref`
    #[serde(rename = "type")]
    pub type_name: String,
    /// Name of the derived typedef, informational only
    pub type_name_derived: String,
    /// `range` restrictions of integer types
    pub range: Vec<SchemaMinMaxType>,
    /// `length` restrictions of string and binary types
    pub length: Vec<SchemaMinMaxType>,
    /// `pattern` restrictions, all of which must hold
    pub patterns: Vec<SchemaPattern>,
    /// Valid enumeration names
    pub enum_names: Vec<String>,
    /// Declared bits in schema order
    pub bits: Vec<Bit>,
    /// Identity name to schema prefix
    pub identity_prefixes_map: BTreeMap<String, String>,
    /// Identity name to defining module
    pub module_prefix_map: BTreeMap<String, String>,
    /// Member types of a union, in declaration order
    pub union_types: Vec<SchemaLeafType>,
    /// Resolved type of the leaf a `leafref` points at
    pub leafref_target_type: Option<Box<SchemaLeafType>>,
    /// Target path of a `leafref`
    pub leafref: String,
}

impl SchemaLeafType {
    /// Create a descriptor for a built-in type without restrictions
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Resolve the declared type name
    pub fn yang_type(&self) -> Result<YangType, UnknownYangType> {
        self.type_name.parse()
    }

    /// Add a `range` restriction
    pub fn with_range(mut self, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        self.range.push(SchemaMinMaxType::new(min, max));
        self
    }

    /// Add a `length` restriction
    pub fn with_length(mut self, min: u64, max: u64) -> Self {
        self.length.push(SchemaMinMaxType::new(min, max));
        self
    }

    /// Add a `pattern` restriction
    pub fn with_pattern(mut self, pattern: impl Into<String>, inverted: bool) -> Self {
        self.patterns.push(SchemaPattern {
            pattern: pattern.into(),
            inverted,
        });
        self
    }

    /// Set the enumeration names
    pub fn with_enum_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the bits, numbering them in the given order
    pub fn with_bits<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bits = names
            .into_iter()
            .zip(0u32..)
            .map(|(name, value)| Bit {
                name: name.into(),
                value,
            })
            .collect();
        self
    }

    /// Register an identity with its prefix and defining module
    pub fn with_identity(
        mut self,
        name: impl Into<String>,
        prefix: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.identity_prefixes_map.insert(name.clone(), prefix.into());
        self.module_prefix_map.insert(name, module.into());
        self
    }

    /// Add a union member type
    pub fn with_union_type(mut self, member: SchemaLeafType) -> Self {
        self.union_types.push(member);
        self
    }

    /// Set the leafref target type
    pub fn with_leafref_target(mut self, target: SchemaLeafType) -> Self {
        self.leafref_target_type = Some(Box::new(target));
        self
    }
}

/// Error for a type name outside the YANG built-in set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownYangType(pub String);

impl fmt::Display for UnknownYangType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown yang type '{}'", self.0)
    }
}

impl std::error::Error for UnknownYangType {}

/// YANG built-in types understood by the conversion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YangType {
    /// `string`
    String,
    /// `binary`, base64 text
    Binary,
    /// `instance-identifier`
    InstanceIdentifier,
    /// `boolean`
    Boolean,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `enumeration`
    Enumeration,
    /// `bits`
    Bits,
    /// `identityref`
    IdentityRef,
    /// `leafref`
    LeafRef,
    /// `decimal64`
    Decimal64,
    /// `union`
    Union,
    /// `empty`
    Empty,
}

impl YangType {
    /// The YANG keyword of this type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Binary => "binary",
            Self::InstanceIdentifier => "instance-identifier",
            Self::Boolean => "boolean",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Enumeration => "enumeration",
            Self::Bits => "bits",
            Self::IdentityRef => "identityref",
            Self::LeafRef => "leafref",
            Self::Decimal64 => "decimal64",
            Self::Union => "union",
            Self::Empty => "empty",
        }
    }
}

impl FromStr for YangType {
    type Err = UnknownYangType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "string" => Self::String,
            "binary" => Self::Binary,
            "instance-identifier" => Self::InstanceIdentifier,
            "boolean" => Self::Boolean,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint8" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "enumeration" => Self::Enumeration,
            "bits" => Self::Bits,
            "identityref" => Self::IdentityRef,
            "leafref" => Self::LeafRef,
            "decimal64" => Self::Decimal64,
            "union" => Self::Union,
            "empty" => Self::Empty,
            other => return Err(UnknownYangType(other.to_string())),
        })
    }
}

impl fmt::Display for YangType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `leaf` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafSchema {
    /// Node name
    pub name: String,
    /// Resolved leaf type
    #[serde(rename = "type")]
    pub leaf_type: SchemaLeafType,
}

/// A `container` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSchema {
    /// Node name
    pub name: String,
    /// Whether the container carries a `presence` statement
    #[serde(default)]
    pub is_presence: bool,
}

/// The schema node owning a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaElem {
    /// A container
    Container(ContainerSchema),
    /// A leaf
    Field(LeafSchema),
    /// A leaf-list; the leaf type describes each element
    Leaflist(LeafSchema),
}

impl SchemaElem {
    /// Name of the schema node
    pub fn name(&self) -> &str {
        match self {
            Self::Container(c) => &c.name,
            Self::Field(l) | Self::Leaflist(l) => &l.name,
        }
    }

    /// Leaf type of a leaf or leaf-list node
    pub fn leaf_type(&self) -> Option<&SchemaLeafType> {
        match self {
            Self::Container(_) => None,
            Self::Field(l) | Self::Leaflist(l) => Some(&l.leaf_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yang_type_round_trip() {
        for name in ["int8", "uint64", "instance-identifier", "identityref", "empty"] {
            let ty: YangType = name.parse().unwrap();
            assert_eq!(ty.as_str(), name);
        }
        assert_eq!(
            "float".parse::<YangType>(),
            Err(UnknownYangType("float".to_string()))
        );
    }

    #[test]
    fn test_leaf_type_from_partial_json() {
        let json = r#"{"type":"uint8","range":[{"min":{"value":1},"max":{"value":10}}]}"#;
        let lt: SchemaLeafType = serde_json::from_str(json).unwrap();
        assert_eq!(lt.yang_type(), Ok(YangType::Uint8));
        assert_eq!(lt.range, vec![SchemaMinMaxType::new(1u64, 10u64)]);
        assert!(lt.patterns.is_empty());
    }

    #[test]
    fn test_schema_elem_accessors() {
        let leaf = SchemaElem::Leaflist(LeafSchema {
            name: "vlans".to_string(),
            leaf_type: SchemaLeafType::new("uint16"),
        });
        assert_eq!(leaf.name(), "vlans");
        assert_eq!(leaf.leaf_type().map(|lt| lt.type_name.as_str()), Some("uint16"));

        let container = SchemaElem::Container(ContainerSchema {
            name: "system".to_string(),
            is_presence: false,
        });
        assert_eq!(container.name(), "system");
        assert!(container.leaf_type().is_none());
    }

    #[test]
    fn test_with_bits_numbers_in_order() {
        let lt = SchemaLeafType::new("bits").with_bits(["a", "b"]);
        assert_eq!(lt.bits[1].name, "b");
        assert_eq!(lt.bits[1].value, 1);
    }
}
