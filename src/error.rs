// std imports
use std::io;
use std::num::TryFromIntError;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// local imports
use crate::boolean::ParseBoolError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidBool(#[from] ParseBoolError),
    #[error(transparent)]
    SizeParseError(#[from] SizeParseError),
    #[error(transparent)]
    NonZeroSizeParseError(#[from] NonZeroSizeParseError),
    #[error("{input}: line {line} exceeds maximum line size of {limit} bytes")]
    LineTooLong { input: String, line: u64, limit: usize },
    #[error("{input}: line {line} is not valid utf-8, use --lossy to replace invalid sequences")]
    InvalidUtf8 { input: String, line: u64 },
    #[error("no patterns specified")]
    NoPatterns,
}

/// SizeParseError is an error which may occur when parsing size.
#[derive(Error, Debug)]
pub enum SizeParseError {
    #[error(transparent)]
    TryFromIntError(#[from] TryFromIntError),
    #[error(
        "invalid size {0:?}, use {iec:?} or {iec_long:?} format for IEC units or {si:?} format for SI units",
        iec = "64K",
        iec_long = "64KiB",
        si = "64KB"
    )]
    InvalidSize(String),
}

/// NonZeroSizeParseError is an error which may occur when parsing non-zero size.
#[derive(Error, Debug)]
pub enum NonZeroSizeParseError {
    #[error(transparent)]
    SizeParseError(#[from] SizeParseError),
    #[error("zero size")]
    ZeroSize,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
