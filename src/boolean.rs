//! String to bool parsing for configuration values and environment variables.

// std imports
use std::fmt;

// third-party imports
use serde::{Deserializer, de};
use thiserror::Error;

// ---

const TRUE: &[&str] = &["true", "yes", "on", "1", "y", "t"];
const FALSE: &[&str] = &["false", "no", "off", "0", "n", "f"];

/// ParseBoolError is an error which may occur when parsing a bool value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid boolean value {value:?}, use any of {valid:?}", valid = valid_values())]
pub struct ParseBoolError {
    pub value: String,
}

/// Parses a bool value.
///
/// Surrounding whitespace is ignored and comparison is ASCII case-insensitive.
pub fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    let v = s.trim();
    if TRUE.iter().any(|x| x.eq_ignore_ascii_case(v)) {
        Ok(true)
    } else if FALSE.iter().any(|x| x.eq_ignore_ascii_case(v)) {
        Ok(false)
    } else {
        Err(ParseBoolError { value: s.into() })
    }
}

/// Deserializes a bool from a native bool, a `0` or `1` number or any string accepted by [`parse_bool`].
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(BoolVisitor)
}

struct BoolVisitor;

impl<'de> de::Visitor<'de> for BoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        parse_bool(value).map_err(E::custom)
    }
}

fn valid_values() -> Vec<&'static str> {
    TRUE.iter().chain(FALSE).copied().collect()
}

#[cfg(test)]
mod tests;
