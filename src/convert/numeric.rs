//! Numeric and boolean types

use super::error::{ConversionError, ConversionResult};
use crate::schema::{Ranges, SchemaLeafType};
use crate::value::{Decimal64, TypedValue, Value};

/// Interval set of a signed type: the natural bounds of the type, if it has
/// any, united with every declared range. A 64-bit type without declared
/// ranges accepts its whole domain.
fn signed_ranges(
    lt: &SchemaLeafType,
    natural: Option<(i64, i64)>,
) -> ConversionResult<Ranges<i64>> {
    let mut ranges = Ranges::new();
    if let Some((min, max)) = natural {
        ranges.add_range(min, max);
    }
    for mm in &lt.range {
        ranges.add_range(mm.min.to_i64()?, mm.max.to_i64()?);
    }
    if ranges.is_empty() {
        ranges.add_range(i64::MIN, i64::MAX);
    }
    Ok(ranges)
}

fn unsigned_ranges(
    lt: &SchemaLeafType,
    natural_max: Option<u64>,
) -> ConversionResult<Ranges<u64>> {
    let mut ranges = Ranges::new();
    if let Some(max) = natural_max {
        ranges.add_range(0, max);
    }
    for mm in &lt.range {
        ranges.add_range(mm.min.to_u64()?, mm.max.to_u64()?);
    }
    if ranges.is_empty() {
        ranges.add_range(0, u64::MAX);
    }
    Ok(ranges)
}

fn convert_signed(
    value: &str,
    lt: &SchemaLeafType,
    type_name: &'static str,
    natural: Option<(i64, i64)>,
) -> ConversionResult<TypedValue> {
    let parsed: i64 = value.parse().map_err(|e: std::num::ParseIntError| {
        ConversionError::InvalidNumber {
            value: value.to_string(),
            type_name,
            reason: e.to_string(),
        }
    })?;
    let ranges = signed_ranges(lt, natural)?;
    if !ranges.is_within_any_range(parsed) {
        return Err(ConversionError::out_of_range(parsed, ranges, type_name));
    }
    Ok(TypedValue::int(parsed))
}

fn convert_unsigned(
    value: &str,
    lt: &SchemaLeafType,
    type_name: &'static str,
    natural_max: Option<u64>,
) -> ConversionResult<TypedValue> {
    let parsed: u64 = value.parse().map_err(|e: std::num::ParseIntError| {
        ConversionError::InvalidNumber {
            value: value.to_string(),
            type_name,
            reason: e.to_string(),
        }
    })?;
    let ranges = unsigned_ranges(lt, natural_max)?;
    if !ranges.is_within_any_range(parsed) {
        return Err(ConversionError::out_of_range(parsed, ranges, type_name));
    }
    Ok(TypedValue::uint(parsed))
}

/// Convert an `int8`
pub fn convert_int8(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_signed(value, lt, "int8", Some((i8::MIN.into(), i8::MAX.into())))
}

/// Convert an `int16`
pub fn convert_int16(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_signed(value, lt, "int16", Some((i16::MIN.into(), i16::MAX.into())))
}

/// Convert an `int32`
pub fn convert_int32(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_signed(value, lt, "int32", Some((i32::MIN.into(), i32::MAX.into())))
}

/// Convert an `int64`
pub fn convert_int64(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_signed(value, lt, "int64", None)
}

/// Convert a `uint8`
pub fn convert_uint8(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_unsigned(value, lt, "uint8", Some(u8::MAX.into()))
}

/// Convert a `uint16`
pub fn convert_uint16(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_unsigned(value, lt, "uint16", Some(u16::MAX.into()))
}

/// Convert a `uint32`
pub fn convert_uint32(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_unsigned(value, lt, "uint32", Some(u32::MAX.into()))
}

/// Convert a `uint64`
pub fn convert_uint64(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_unsigned(value, lt, "uint64", None)
}

/// Strict boolean: exactly `true` or `false`
pub fn convert_boolean(value: &str) -> ConversionResult<TypedValue> {
    match value {
        "true" => Ok(TypedValue::bool(true)),
        "false" => Ok(TypedValue::bool(false)),
        _ => Err(ConversionError::invalid_boolean(value)),
    }
}

/// Parse `[sign]digits[.digits]`; the precision is the number of fractional
/// digits in the input
pub fn convert_decimal64(value: &str) -> ConversionResult<TypedValue> {
    let d: Decimal64 = value
        .parse()
        .map_err(|e| ConversionError::decimal(value, e))?;
    Ok(TypedValue::new(Value::Decimal(d)))
}
