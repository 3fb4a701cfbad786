//! Scalar channel extractors.

use crate::convert::to_hsl;
use crate::model::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer percentage, e.g. the saturation of a color.
///
/// Serializes as the bare integer; `Display` appends `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(i64);

impl Percent {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<Percent> for i64 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Hue in whole degrees, rounded half up.
///
/// Achromatic colors report `0`.
#[must_use]
pub fn hue(color: Rgba) -> i64 {
    round_half_up(to_hsl(color).h) as i64
}

/// Saturation as a whole percentage.
#[must_use]
pub fn saturation(color: Rgba) -> Percent {
    Percent(round_half_up(to_hsl(color).s * 100.0) as i64)
}

/// Lightness as a whole percentage.
#[must_use]
pub fn lightness(color: Rgba) -> Percent {
    Percent(round_half_up(to_hsl(color).l * 100.0) as i64)
}

/// Alpha, passed through from the input.
#[must_use]
pub fn alpha(color: Rgba) -> f64 {
    to_hsl(color).a
}

/// Round to the nearest integer, halves towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 { r + 1.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba::new(r, g, b, a).unwrap()
    }

    #[test]
    fn alpha_passthrough() {
        assert_eq!(alpha(color(0.0, 0.0, 0.0, 0.0)), 0.0);
        assert_eq!(alpha(color(0.0, 0.0, 0.0, 1.0)), 1.0);
    }

    #[test]
    fn hue_of_primaries() {
        assert_eq!(hue(color(0.0, 0.0, 0.0, 0.0)), 0);
        assert_eq!(hue(color(0.0, 0.0, 255.0, 1.0)), 240);
        assert_eq!(hue(color(255.0, 128.0, 0.0, 1.0)), 30);
    }

    #[test]
    fn saturation_and_lightness_percent() {
        let red = color(255.0, 0.0, 0.0, 1.0);
        assert_eq!(saturation(red), Percent::new(100));
        assert_eq!(lightness(red), Percent::new(50));

        let grey = color(51.0, 51.0, 51.0, 1.0);
        assert_eq!(saturation(grey).value(), 0);
        assert_eq!(lightness(grey).value(), 20);
    }

    #[test]
    fn percent_display_and_serde() {
        let p = Percent::new(42);
        assert_eq!(p.to_string(), "42%");
        assert_eq!(serde_json::to_string(&p).unwrap(), "42");
        assert_eq!(i64::from(p), 42);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
