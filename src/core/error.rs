//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseNumberError;

/// Precise configuration faults: a name that resolves to nothing.
#[derive(Debug)]
pub enum ConfigError {
    UnknownStyle(String),
    UnknownScheme(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownStyle(s) => write!(f, "unknown tick style `{s}`"),
            ConfigError::UnknownScheme(s) => write!(f, "unknown color scheme `{s}`"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SparkError {
    Io(io::Error),
    Parse(ParseNumberError),
    Config(ConfigError),
    EmptyData,
}

impl fmt::Display for SparkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparkError::Io(e) => write!(f, "{e}"),
            SparkError::Parse(e) => write!(f, "{e}"),
            SparkError::Config(e) => write!(f, "{e}"),
            SparkError::EmptyData => write!(f, "sample sequence is empty"),
        }
    }
}
impl Error for SparkError {}

// automatic conversions
impl From<io::Error> for SparkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseNumberError> for SparkError {
    fn from(e: ParseNumberError) -> Self {
        Self::Parse(e)
    }
}
impl From<ConfigError> for SparkError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
