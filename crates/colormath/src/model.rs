//! Color value types.
//!
//! [`Rgba`] is the long-lived representation handed to and from callers:
//! red, green and blue on 0-255 (fractions allowed), alpha on 0-1. It can
//! only be built through a validating constructor, so every `Rgba` holds
//! four finite numbers. Range is *not* enforced; `[300.0, 0.0, 0.0, 1.0]` is
//! a valid value and the conversions treat it arithmetically.
//!
//! [`Hsla`] is the intermediate used by conversions and adjustments. Its
//! fields are public and unvalidated; turning it back into a color goes
//! through [`crate::convert::hsla`], which validates.
//!
//! # Untyped input
//!
//! Colors that arrive from outside as loosely typed arrays (JSON, scripting
//! bridges) enter through [`Rgba::from_values`] / [`Hsla::from_values`].
//! Each entry is checked in channel order and the first non-number is
//! reported.

use crate::error::{Channel, ColorError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated RGBA color.
///
/// Serializes as the array `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    /// Build a color, rejecting any channel that is NaN or infinite.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ColorError> {
        let [r, g, b, a] = validate(Channel::RGBA, [r, g, b, a])?;
        Ok(Self { r, g, b, a })
    }

    /// Build a color from untyped values: `[r, g, b]` or `[r, g, b, a]`.
    ///
    /// Three values imply an alpha of `1.0`.
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let [r, g, b, a] = coerce_all(Channel::RGBA, values)?;
        Self::new(r, g, b, a)
    }

    /// Red, nominally 0-255
    #[must_use]
    pub fn r(self) -> f64 {
        self.r
    }

    /// Green, nominally 0-255
    #[must_use]
    pub fn g(self) -> f64 {
        self.g
    }

    /// Blue, nominally 0-255
    #[must_use]
    pub fn b(self) -> f64 {
        self.b
    }

    /// Alpha, nominally 0-1
    #[must_use]
    pub fn a(self) -> f64 {
        self.a
    }

    /// The external `[r, g, b, a]` representation.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to the HSLA intermediate.
    #[must_use]
    pub fn to_hsla(self) -> Hsla {
        crate::convert::to_hsl(self)
    }
}

impl TryFrom<[f64; 4]> for Rgba {
    type Error = ColorError;

    fn try_from([r, g, b, a]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

impl TryFrom<&Value> for Rgba {
    type Error = ColorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Self::from_values(values),
            other => Err(ColorError::NotNumeric {
                channel: Channel::Red,
                found: kind_of(other),
            }),
        }
    }
}

/// Hue in degrees, saturation, lightness and alpha as fractions.
///
/// Produced by [`crate::convert::to_hsl`] without clamping or wrapping, so
/// fields may fall outside their nominal ranges for out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Read untyped `[h, s, l]` or `[h, s, l, a]` values.
    ///
    /// Only the numeric check happens here; finiteness and the actual
    /// conversion are handled by [`Hsla::to_rgba`].
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let [h, s, l, a] = coerce_all(Channel::HSLA, values)?;
        Ok(Self { h, s, l, a })
    }

    /// Convert back to a validated RGBA color.
    pub fn to_rgba(self) -> Result<Rgba, ColorError> {
        crate::convert::hsla(self.h, self.s, self.l, self.a)
    }
}

pub(crate) fn validate(channels: [Channel; 4], values: [f64; 4]) -> Result<[f64; 4], ColorError> {
    for (channel, value) in channels.into_iter().zip(values) {
        if !value.is_finite() {
            tracing::debug!(%channel, value, "rejecting non-finite color channel");
            return Err(ColorError::NonFinite { channel, value });
        }
    }
    Ok(values)
}

fn coerce_all(channels: [Channel; 4], values: &[Value]) -> Result<[f64; 4], ColorError> {
    if !matches!(values.len(), 3 | 4) {
        return Err(ColorError::Arity {
            expected: "3 or 4",
            found: values.len(),
        });
    }

    let mut out = [1.0; 4];
    for ((slot, channel), value) in out.iter_mut().zip(channels).zip(values) {
        *slot = coerce(channel, value)?;
    }
    Ok(out)
}

fn coerce(channel: Channel, value: &Value) -> Result<f64, ColorError> {
    match value.as_f64() {
        Some(n) => Ok(n),
        None => {
            let found = kind_of(value);
            tracing::debug!(%channel, found, "rejecting non-numeric color channel");
            Err(ColorError::NotNumeric { channel, found })
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
