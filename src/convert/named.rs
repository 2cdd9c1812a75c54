//! Name-based types: `enumeration`, `bits`, `identityref`

use super::error::{ConversionError, ConversionResult};
use crate::schema::SchemaLeafType;
use crate::value::{IdentityRef, TypedValue};

/// The value must be one of the declared enumeration names
pub fn convert_enumeration(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    if lt.enum_names.iter().any(|name| name == value) {
        return Ok(TypedValue::string(value));
    }
    Err(ConversionError::EnumMismatch {
        value: value.to_string(),
        valid: lt.enum_names.clone(),
    })
}

/// Whitespace separated bit names, each declared and in declaration order.
/// Skipping bits is allowed; the text is kept verbatim.
pub fn convert_bits(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    if lt.bits.is_empty() {
        return Err(ConversionError::MissingBits {
            value: value.to_string(),
        });
    }

    let mut pos = 0;
    for name in value.split_whitespace() {
        match lt.bits[pos..].iter().position(|bit| bit.name == name) {
            Some(offset) => pos += offset + 1,
            None => {
                return Err(ConversionError::BitsMismatch {
                    value: value.to_string(),
                    valid: lt.bits.iter().map(|bit| bit.name.clone()).collect(),
                });
            }
        }
    }
    Ok(TypedValue::string(value))
}

/// Resolve `[prefix:]name` against the identity maps of the leaf type; the
/// name is the part after the last colon
pub fn convert_identity_ref(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    let name = value.rsplit_once(':').map_or(value, |(_, name)| name);

    match (
        lt.identity_prefixes_map.get(name),
        lt.module_prefix_map.get(name),
    ) {
        (Some(prefix), Some(module)) => Ok(TypedValue::identity_ref(IdentityRef::new(
            name, prefix, module,
        ))),
        _ => Err(ConversionError::IdentityNotFound {
            value: value.to_string(),
            // BTreeMap keys come out sorted
            known: lt.identity_prefixes_map.keys().cloned().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enumeration() {
        let lt = SchemaLeafType::new("enumeration").with_enum_names(["up", "down"]);
        assert_eq!(convert_enumeration("up", &lt), Ok(TypedValue::string("up")));
        assert_eq!(
            convert_enumeration("Up", &lt),
            Err(ConversionError::EnumMismatch {
                value: "Up".to_string(),
                valid: vec!["up".to_string(), "down".to_string()],
            })
        );
    }

    #[test]
    fn test_bits_order() {
        let lt = SchemaLeafType::new("bits").with_bits(["a", "b", "c"]);
        assert_eq!(convert_bits("a c", &lt), Ok(TypedValue::string("a c")));
        assert!(convert_bits("a  b\tc", &lt).is_ok());
        assert!(convert_bits("", &lt).is_ok());
        assert!(matches!(
            convert_bits("c a", &lt),
            Err(ConversionError::BitsMismatch { .. })
        ));
        assert!(convert_bits("a a", &lt).is_err());
        assert!(convert_bits("d", &lt).is_err());
    }

    #[test]
    fn test_bits_without_declaration() {
        let lt = SchemaLeafType::new("bits");
        assert!(matches!(
            convert_bits("a", &lt),
            Err(ConversionError::MissingBits { .. })
        ));
    }

    #[test]
    fn test_identity_ref() {
        let lt = SchemaLeafType::new("identityref").with_identity("eth", "if", "iface-mod");
        let expected = TypedValue::identity_ref(IdentityRef::new("eth", "if", "iface-mod"));
        assert_eq!(convert_identity_ref("if:eth", &lt), Ok(expected.clone()));
        assert_eq!(convert_identity_ref("eth", &lt), Ok(expected.clone()));
        assert_eq!(convert_identity_ref("x:y:eth", &lt), Ok(expected));
    }

    #[test]
    fn test_identity_not_found_lists_known() {
        let lt = SchemaLeafType::new("identityref")
            .with_identity("wifi", "if", "iface-mod")
            .with_identity("eth", "if", "iface-mod");
        assert_eq!(
            convert_identity_ref("if:lte", &lt),
            Err(ConversionError::IdentityNotFound {
                value: "if:lte".to_string(),
                known: vec!["eth".to_string(), "wifi".to_string()],
            })
        );
    }
}
