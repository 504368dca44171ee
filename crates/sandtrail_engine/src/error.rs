//! # Engine Error Types
//!
//! The only fallible operation in the engine is configuration loading.
//! Geometry and timing are pure arithmetic and cannot fail; a missing
//! drawing surface degrades to an inert engine instead of erroring.

use thiserror::Error;

/// Errors that can occur while loading an engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML.
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot operate with.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
