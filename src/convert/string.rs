//! String-like types: `string`, `binary`, `instance-identifier`
//!
//! Length restrictions count characters. Pattern restrictions are XML Schema
//! regular expressions; they are translated to the `regex` dialect, compiled
//! once and cached for the lifetime of the process.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ConversionError, ConversionResult};
use crate::schema::{Ranges, SchemaLeafType, SchemaPattern};
use crate::value::TypedValue;

/// Compiled patterns keyed by their translated source
static PATTERN_CACHE: Lazy<DashMap<String, Regex>> = Lazy::new(DashMap::new);

/// Translate an XML Schema pattern to the `regex` dialect.
///
/// XML Schema has no anchors, so an unescaped `$` is always a literal and an
/// unescaped `^` is a literal unless it negates a character class (`[^`).
pub fn xml_regex_convert(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut backslashes = 0usize;
    let mut prev = None;

    for c in pattern.chars() {
        let unescaped = backslashes % 2 == 0;
        match c {
            '$' if unescaped => out.push_str("\\$"),
            '^' if unescaped && prev != Some('[') => out.push_str("\\^"),
            _ => out.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        prev = Some(c);
    }
    out
}

/// Fetch the compiled form of a schema pattern, compiling it on first use
fn compiled(pattern: &str) -> ConversionResult<Regex> {
    let translated = xml_regex_convert(pattern);
    if let Some(re) = PATTERN_CACHE.get(&translated) {
        return Ok(re.clone());
    }

    let re = Regex::new(&translated).map_err(|e| {
        log::error!("pattern {pattern:?} failed to compile: {e}");
        ConversionError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })?;
    PATTERN_CACHE.insert(translated, re.clone());
    Ok(re)
}

/// Check `value` against a single pattern, honouring `invert-match`
pub fn check_pattern(value: &str, pattern: &SchemaPattern) -> ConversionResult<()> {
    let re = compiled(&pattern.pattern)?;
    if re.is_match(value) == pattern.inverted {
        return Err(ConversionError::PatternMismatch {
            value: value.to_string(),
            pattern: pattern.pattern.clone(),
            inverted: pattern.inverted,
        });
    }
    Ok(())
}

fn check_length(value: &str, lt: &SchemaLeafType) -> ConversionResult<()> {
    if lt.length.is_empty() {
        return Ok(());
    }

    let mut ranges = Ranges::new();
    for mm in &lt.length {
        ranges.add_range(mm.min.to_u64()?, mm.max.to_u64()?);
    }
    let length = value.chars().count() as u64;
    if !ranges.is_within_any_range(length) {
        return Err(ConversionError::LengthOutOfRange {
            value: value.to_string(),
            length,
            ranges: ranges.to_string(),
        });
    }
    Ok(())
}

/// Validate length and every pattern, yielding a string value
pub fn convert_string(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    check_length(value, lt)?;
    for pattern in &lt.patterns {
        check_pattern(value, pattern)?;
    }
    Ok(TypedValue::string(value))
}

/// Base64 text is kept verbatim; restrictions apply as for strings
pub fn convert_binary(value: &str, lt: &SchemaLeafType) -> ConversionResult<TypedValue> {
    convert_string(value, lt)
}

/// Instance identifiers are kept as their path text
pub fn convert_instance_identifier(
    value: &str,
    lt: &SchemaLeafType,
) -> ConversionResult<TypedValue> {
    convert_string(value, lt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_xml_regex_convert() {
        assert_eq!(xml_regex_convert("[a-z]+"), "[a-z]+");
        assert_eq!(xml_regex_convert("a^b"), "a\\^b");
        assert_eq!(xml_regex_convert("[^0-9]"), "[^0-9]");
        assert_eq!(xml_regex_convert("x$"), "x\\$");
        assert_eq!(xml_regex_convert("\\$"), "\\$");
        assert_eq!(xml_regex_convert("\\\\$"), "\\\\\\$");
        assert_eq!(xml_regex_convert("\\^"), "\\^");
    }

    #[test]
    fn test_patterns_are_literal_anchors() {
        let lt = SchemaLeafType::new("string").with_pattern("a$b", false);
        assert!(convert_string("xa$by", &lt).is_ok());
        assert!(convert_string("ab", &lt).is_err());
    }

    #[test]
    fn test_patterns_are_anded() {
        let lt = SchemaLeafType::new("string")
            .with_pattern("[a-z]+", false)
            .with_pattern("[0-9]", true);
        assert_eq!(convert_string("abc", &lt), Ok(TypedValue::string("abc")));
        assert!(matches!(
            convert_string("abc1", &lt),
            Err(ConversionError::PatternMismatch { inverted: true, .. })
        ));
        assert!(matches!(
            convert_string("123", &lt),
            Err(ConversionError::PatternMismatch { inverted: false, .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let lt = SchemaLeafType::new("string").with_pattern("(", false);
        assert!(matches!(
            convert_string("x", &lt),
            Err(ConversionError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_length_counts_chars() {
        let lt = SchemaLeafType::new("string").with_length(1, 3);
        assert!(convert_string("äöü", &lt).is_ok());
        assert!(matches!(
            convert_string("", &lt),
            Err(ConversionError::LengthOutOfRange { length: 0, .. })
        ));
        assert!(convert_string("abcd", &lt).is_err());
    }
}
