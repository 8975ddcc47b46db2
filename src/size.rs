//! Parsing of human readable sizes like `64 KiB`.

// std imports
use std::{fmt, num::NonZeroUsize};

// third-party imports
use serde::{Deserialize, Deserializer, de};

// local imports
use crate::error::{NonZeroSizeParseError, SizeParseError};

// ---

/// Parses a size, where a bare unit letter like `64K` means an IEC unit.
pub fn parse_size(s: &str) -> Result<usize, SizeParseError> {
    match bytefmt::parse(s) {
        Ok(value) => Ok(usize::try_from(value)?),
        Err(_) => {
            if let Ok(value) = bytefmt::parse(s.to_owned() + "ib") {
                return Ok(usize::try_from(value)?);
            }
            Err(SizeParseError::InvalidSize(s.into()))
        }
    }
}

/// Parses a size that must not be zero.
pub fn parse_non_zero_size(s: &str) -> Result<NonZeroUsize, NonZeroSizeParseError> {
    NonZeroUsize::new(parse_size(s)?).ok_or(NonZeroSizeParseError::ZeroSize)
}

// ---

/// A non-zero size that can be deserialized from a number of bytes or a human readable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size(pub NonZeroUsize);

impl From<Size> for NonZeroUsize {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SizeVisitor)
    }
}

struct SizeVisitor;

impl<'de> de::Visitor<'de> for SizeVisitor {
    type Value = Size;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-zero size like 65536 or \"64 KiB\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Size, E> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Size)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Size, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Size, E> {
        parse_non_zero_size(value).map(Size).map_err(E::custom)
    }
}
