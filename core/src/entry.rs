//! Validated entry values.
//!
//! An [`EntryData`] only exists for a raw string that satisfied its
//! definition's declared type. Typed extraction that disagrees with the
//! declared type is a programmer error and reported as
//! [`TypeMismatchError`].

use serde::{Serialize, Serializer};

use crate::error::{InputError, TypeMismatchError};
use crate::{EntryDefinition, ValueType};

/// A converted value, one variant per [`ValueType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryValue {
    /// Value of an [`ValueType::Int`] entry.
    Int(i32),
    /// Value of a [`ValueType::String`] entry.
    String(String),
}

impl EntryValue {
    /// Returns the type this value belongs to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::String(_) => ValueType::String,
        }
    }
}

/// A single validated argument or option value.
///
/// # Examples
///
/// ```
/// use command_input_core::{EntryData, EntryDefinition, ValueType};
///
/// let definition = EntryDefinition::new("count", ValueType::Int);
/// let entry = EntryData::parse(&definition, "-42").unwrap();
/// assert_eq!(entry.as_int().unwrap(), -42);
/// assert!(entry.as_str().is_err());
///
/// let err = EntryData::parse(&definition, "forty-two").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Entry 'count' with value 'forty-two' does not match expected type 'Int'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryData<'d> {
    definition: &'d EntryDefinition,
    value: EntryValue,
}

impl<'d> EntryData<'d> {
    /// Validates `raw` against `definition` and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TypeMismatch`] when `raw` does not satisfy the
    /// declared type. String entries accept any input unchanged.
    pub fn parse(definition: &'d EntryDefinition, raw: &str) -> Result<Self, InputError> {
        let value = match definition.value_type {
            ValueType::Int => EntryValue::Int(parse_int(raw).ok_or_else(|| {
                InputError::TypeMismatch {
                    name: definition.name.clone(),
                    value: raw.to_string(),
                    expected: ValueType::Int,
                }
            })?),
            ValueType::String => EntryValue::String(raw.to_string()),
        };

        Ok(Self { definition, value })
    }

    /// Returns the entry name.
    pub fn name(&self) -> &'d str {
        &self.definition.name
    }

    /// Returns the definition this value was validated against.
    pub fn definition(&self) -> &'d EntryDefinition {
        self.definition
    }

    /// Returns the converted value.
    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    /// Returns the value of an `Int` entry.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the entry is not declared as `Int`.
    pub fn as_int(&self) -> Result<i32, TypeMismatchError> {
        match &self.value {
            EntryValue::Int(value) => Ok(*value),
            EntryValue::String(_) => Err(self.mismatch(ValueType::Int)),
        }
    }

    /// Returns the value of a `String` entry.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the entry is not declared as `String`.
    pub fn as_str(&self) -> Result<&str, TypeMismatchError> {
        match &self.value {
            EntryValue::String(value) => Ok(value),
            EntryValue::Int(_) => Err(self.mismatch(ValueType::String)),
        }
    }

    fn mismatch(&self, requested: ValueType) -> TypeMismatchError {
        TypeMismatchError {
            name: self.definition.name.clone(),
            declared: self.definition.value_type,
            requested,
        }
    }
}

impl Serialize for EntryData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Parses a base-10 `i32`: optional sign, then one or more ASCII digits.
///
/// Accumulates toward the sign so `i32::MIN` is representable without a
/// wider intermediate.
fn parse_int(raw: &str) -> Option<i32> {
    let bytes = raw.as_bytes();
    let (negative, digits) = match *bytes.first()? {
        b'-' => (true, &bytes[1..]),
        b'+' => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i32 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = i32::from(byte - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_accepts_signed_decimals() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-0"), Some(0));
        assert_eq!(parse_int("+17"), Some(17));
        assert_eq!(parse_int("-1000"), Some(-1000));
        assert_eq!(parse_int("007"), Some(7));
    }

    #[test]
    fn test_parse_int_boundaries() {
        assert_eq!(parse_int("2147483647"), Some(i32::MAX));
        assert_eq!(parse_int("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_int("2147483648"), None);
        assert_eq!(parse_int("-2147483649"), None);
    }

    #[test]
    fn test_parse_int_rejects_malformed() {
        for raw in ["", "-", "+", "1.5", " 1", "1 ", "1_000", "0x10", "--1", "abc"] {
            assert_eq!(parse_int(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_string_entry_keeps_value_unchanged() {
        let definition = EntryDefinition::new("text", ValueType::String);
        for raw in ["", "  padded  ", "a=b=c", "-1"] {
            let entry = EntryData::parse(&definition, raw).unwrap();
            assert_eq!(entry.as_str().unwrap(), raw);
        }
    }

    #[test]
    fn test_wrong_type_extraction() {
        let definition = EntryDefinition::new("label", ValueType::String);
        let entry = EntryData::parse(&definition, "12").unwrap();
        assert_eq!(
            entry.as_int(),
            Err(TypeMismatchError {
                name: "label".to_string(),
                declared: ValueType::String,
                requested: ValueType::Int,
            })
        );
    }

    #[test]
    fn test_entry_serializes_as_bare_value() {
        let int_def = EntryDefinition::new("n", ValueType::Int);
        let str_def = EntryDefinition::new("s", ValueType::String);
        let n = EntryData::parse(&int_def, "5").unwrap();
        let s = EntryData::parse(&str_def, "five").unwrap();

        assert_eq!(serde_json::to_string(&n).unwrap(), "5");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"five\"");
        assert_eq!(n.value().value_type(), ValueType::Int);
    }
}
