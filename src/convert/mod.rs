//! Type-directed conversion of raw text and wire values to typed YANG values
//!
//! [`from_string`] validates a raw string against a [`SchemaLeafType`] and
//! produces the matching [`TypedValue`] variant. [`to_yang_type`] promotes a
//! value received in its wire encoding to the type declared by the owning
//! schema node.

pub mod error;
pub mod named;
pub mod numeric;
pub mod string;

use crate::schema::{SchemaElem, SchemaLeafType, YangType};
use crate::value::{TypedValue, Value};

pub use error::{ConversionError, ConversionResult};
pub use named::{convert_bits, convert_enumeration, convert_identity_ref};
pub use numeric::{
    convert_boolean, convert_decimal64, convert_int8, convert_int16, convert_int32,
    convert_int64, convert_uint8, convert_uint16, convert_uint32, convert_uint64,
};
pub use string::{
    check_pattern, convert_binary, convert_instance_identifier, convert_string,
    xml_regex_convert,
};

/// Convert `value` according to `lt` and stamp the result with `timestamp`
pub fn from_string(
    lt: &SchemaLeafType,
    value: &str,
    timestamp: u64,
) -> ConversionResult<TypedValue> {
    Ok(convert(lt, value)?.with_timestamp(timestamp))
}

fn convert(lt: &SchemaLeafType, value: &str) -> ConversionResult<TypedValue> {
    let ty = lt
        .yang_type()
        .map_err(|unknown| ConversionError::unsupported_type(unknown.0))?;

    match ty {
        YangType::String => convert_string(value, lt),
        YangType::Binary => convert_binary(value, lt),
        YangType::InstanceIdentifier => convert_instance_identifier(value, lt),
        YangType::Boolean => convert_boolean(value),
        YangType::Int8 => convert_int8(value, lt),
        YangType::Int16 => convert_int16(value, lt),
        YangType::Int32 => convert_int32(value, lt),
        YangType::Int64 => convert_int64(value, lt),
        YangType::Uint8 => convert_uint8(value, lt),
        YangType::Uint16 => convert_uint16(value, lt),
        YangType::Uint32 => convert_uint32(value, lt),
        YangType::Uint64 => convert_uint64(value, lt),
        YangType::Enumeration => convert_enumeration(value, lt),
        YangType::Bits => convert_bits(value, lt),
        YangType::IdentityRef => convert_identity_ref(value, lt),
        YangType::LeafRef => convert_leafref(value, lt),
        YangType::Decimal64 => convert_decimal64(value),
        YangType::Union => convert_union(value, lt),
        YangType::Empty => Ok(TypedValue::empty()),
    }
}

/// Convert against the resolved type of the referenced leaf
pub fn convert_leafref(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    let target = lt.leafref_target_type.as_deref().ok_or_else(|| {
        ConversionError::MissingLeafrefTarget {
            leafref: lt.leafref.clone(),
        }
    })?;
    log::debug!(
        "leafref {:?} resolved to {}",
        lt.leafref,
        target.type_name
    );
    convert(target, value)
}

/// First union member, in declaration order, that accepts the value
pub fn convert_union(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    for member in &lt.union_types {
        match convert(member, value) {
            Ok(tv) => return Ok(tv),
            Err(e) => log::debug!("union member {} rejected {value:?}: {e}", member.type_name),
        }
    }
    Err(ConversionError::UnionExhausted {
        value: value.to_string(),
        members: lt
            .union_types
            .iter()
            .map(|member| member.type_name.clone())
            .collect(),
    })
}

/// Promote a wire value to the type declared by `elem`.
///
/// String and identity reference payloads are re-converted through
/// [`from_string`]; already typed scalars pass through unchanged. Updates
/// to a container are only valid for presence containers and yield the
/// empty value.
pub fn to_yang_type(tv: &TypedValue, elem: &SchemaElem) -> ConversionResult<TypedValue> {
    let Some(lt) = elem.leaf_type() else {
        return match elem {
            SchemaElem::Container(container) if container.is_presence => {
                Ok(TypedValue::empty().with_timestamp(tv.timestamp))
            }
            _ => Err(ConversionError::NonPresenceContainer {
                name: elem.name().to_string(),
            }),
        };
    };

    match (&tv.value, elem) {
        (Value::LeafList(elems), SchemaElem::Leaflist(_)) => {
            let converted = elems
                .iter()
                .map(|elem| leaf_to_yang_type(elem, lt))
                .collect::<ConversionResult<Vec<_>>>()?;
            Ok(TypedValue::leaf_list(converted).with_timestamp(tv.timestamp))
        }
        _ => leaf_to_yang_type(tv, lt),
    }
}

fn leaf_to_yang_type(tv: &TypedValue, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    match &tv.value {
        Value::String(s) | Value::Ascii(s) => from_string(lt, s, tv.timestamp),
        Value::IdentityRef(id) => from_string(lt, &id.yang_string(), tv.timestamp),
        other => {
            log::trace!("{} value kept as {}", other.kind_name(), lt.type_name);
            Ok(tv.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ContainerSchema, LeafSchema};
    use crate::value::IdentityRef;
    use pretty_assertions::assert_eq;

    fn field(lt: SchemaLeafType) -> SchemaElem {
        SchemaElem::Field(LeafSchema {
            name: "leaf".to_string(),
            leaf_type: lt,
        })
    }

    #[test]
    fn test_timestamp_is_stamped() {
        let tv = from_string(&SchemaLeafType::new("uint8"), "200", 42).unwrap();
        assert_eq!(tv.timestamp, 42);
        assert_eq!(tv.to_string(), "200");
    }

    #[test]
    fn test_unsupported_type() {
        assert_eq!(
            from_string(&SchemaLeafType::new("float"), "1", 0),
            Err(ConversionError::unsupported_type("float"))
        );
    }

    #[test]
    fn test_empty_ignores_input() {
        let tv = from_string(&SchemaLeafType::new("empty"), "whatever", 0).unwrap();
        assert_eq!(tv, TypedValue::empty());
    }

    #[test]
    fn test_union_first_match_wins() {
        let lt = SchemaLeafType::new("union")
            .with_union_type(SchemaLeafType::new("uint8"))
            .with_union_type(SchemaLeafType::new("string"));
        assert_eq!(from_string(&lt, "7", 0), Ok(TypedValue::uint(7)));
        assert_eq!(from_string(&lt, "700", 0), Ok(TypedValue::string("700")));
    }

    #[test]
    fn test_union_exhausted() {
        let lt = SchemaLeafType::new("union")
            .with_union_type(SchemaLeafType::new("uint8"))
            .with_union_type(SchemaLeafType::new("boolean"));
        assert_eq!(
            from_string(&lt, "x", 0),
            Err(ConversionError::UnionExhausted {
                value: "x".to_string(),
                members: vec!["uint8".to_string(), "boolean".to_string()],
            })
        );
    }

    #[test]
    fn test_leafref_delegates() {
        let mut lt = SchemaLeafType::new("leafref")
            .with_leafref_target(SchemaLeafType::new("int16").with_range(0i64, 10i64));
        lt.leafref = "/interface/index".to_string();
        assert_eq!(from_string(&lt, "3", 0), Ok(TypedValue::int(3)));
        assert!(from_string(&lt, "11", 0).is_err());

        lt.leafref_target_type = None;
        assert_eq!(
            from_string(&lt, "3", 0),
            Err(ConversionError::MissingLeafrefTarget {
                leafref: "/interface/index".to_string()
            })
        );
    }

    #[test]
    fn test_to_yang_type_reconverts_strings() {
        let elem = field(SchemaLeafType::new("uint16"));
        let tv = to_yang_type(&TypedValue::ascii("1000").with_timestamp(9), &elem).unwrap();
        assert_eq!(tv, TypedValue::uint(1000));
        assert_eq!(tv.timestamp, 9);

        let passthrough = TypedValue::int(-1);
        assert_eq!(to_yang_type(&passthrough, &elem), Ok(passthrough));
    }

    #[test]
    fn test_to_yang_type_identity_ref() {
        let elem = field(SchemaLeafType::new("identityref").with_identity("eth", "if", "iface-mod"));
        let wire = TypedValue::identity_ref(IdentityRef::new("eth", "if", ""));
        assert_eq!(
            to_yang_type(&wire, &elem),
            Ok(TypedValue::identity_ref(IdentityRef::new(
                "eth",
                "if",
                "iface-mod"
            )))
        );
    }

    #[test]
    fn test_to_yang_type_leaf_list() {
        let elem = SchemaElem::Leaflist(LeafSchema {
            name: "vlans".to_string(),
            leaf_type: SchemaLeafType::new("uint16"),
        });
        let wire = TypedValue::leaf_list(vec![TypedValue::string("10"), TypedValue::string("20")]);
        assert_eq!(
            to_yang_type(&wire, &elem),
            Ok(TypedValue::leaf_list(vec![
                TypedValue::uint(10),
                TypedValue::uint(20)
            ]))
        );

        let bad = TypedValue::leaf_list(vec![TypedValue::string("x")]);
        assert!(to_yang_type(&bad, &elem).is_err());
    }

    #[test]
    fn test_to_yang_type_containers() {
        let presence = SchemaElem::Container(ContainerSchema {
            name: "enabled".to_string(),
            is_presence: true,
        });
        assert_eq!(
            to_yang_type(&TypedValue::string(""), &presence),
            Ok(TypedValue::empty())
        );

        let plain = SchemaElem::Container(ContainerSchema {
            name: "system".to_string(),
            is_presence: false,
        });
        assert_eq!(
            to_yang_type(&TypedValue::string(""), &plain),
            Err(ConversionError::NonPresenceContainer {
                name: "system".to_string()
            })
        );
    }
}
