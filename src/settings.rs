// std imports
use std::include_str;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{boolean, size::Size};

// ---

pub(crate) static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub mode: Mode,
    #[serde(deserialize_with = "boolean::deserialize")]
    pub ignore_case: bool,
    #[serde(deserialize_with = "boolean::deserialize")]
    pub line_number: bool,
    #[serde(deserialize_with = "boolean::deserialize")]
    pub lossy: bool,
    pub buffer_size: Size,
    pub max_line_size: Size,
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

// ---

/// Character domain used for matching.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Bytes, `?` matches one byte and `#` matches ASCII digits.
    Narrow,
    /// Characters, `?` matches one character and `#` matches any Unicode numeric character.
    Wide,
}

#[cfg(test)]
mod tests;
