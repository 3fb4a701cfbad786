//! Error types for colormath
//!
//! Color operations return the narrow [`ColorError`]. The setup surface
//! ([`crate::config::Config::load_from`], [`crate::logging::init_logging`])
//! returns [`Result`], whose [`Error`] also absorbs a `ColorError` so callers
//! mixing setup and color work can use one `?` chain.

use std::fmt;
use thiserror::Error;

/// Result of the config and logging entry points
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for colormath
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid color input
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Logging initialization errors
    #[error("Logging error: {0}")]
    Log(#[from] crate::logging::LogError),
}

/// A single channel of an RGBA or HSLA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    /// RGBA channels in validation order
    pub const RGBA: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// HSLA channels in validation order
    pub const HSLA: [Self; 4] = [Self::Hue, Self::Saturation, Self::Lightness, Self::Alpha];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The invalid-color outcome of a color constructor.
///
/// A single bad channel invalidates the whole color; the first failing
/// channel (in r, g, b, a or h, s, l, a order) is the one reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Channel value is NaN or infinite
    #[error("{channel} channel is not a finite number: {value}")]
    NonFinite { channel: Channel, value: f64 },

    /// Untyped channel value is not a number at all
    #[error("{channel} channel is not numeric (found {found})")]
    NotNumeric {
        channel: Channel,
        found: &'static str,
    },

    /// Untyped sequence has the wrong number of channels
    #[error("expected {expected} channels, found {found}")]
    Arity { expected: &'static str, found: usize },
}

impl ColorError {
    /// The channel that failed validation, if the failure is channel-specific
    #[must_use]
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::NonFinite { channel, .. } | Self::NotNumeric { channel, .. } => Some(*channel),
            Self::Arity { .. } => None,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
