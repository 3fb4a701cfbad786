//! RGB <-> HSL conversion.
//!
//! # Formulas
//!
//! RGB to HSL normalizes the channels to 0-1 and takes
//!
//! > l = (max + min) / 2
//! > s = d / (2 - max - min)  if l > 0.5, else d / (max + min)
//!
//! with `d = max - min`. Hue comes from whichever channel holds the maximum
//! (tested in r, g, b order), in sextant units, then scaled to degrees.
//! Achromatic input (`max == min`) has hue and saturation 0.
//!
//! HSL to RGB samples a piecewise-linear ramp between `m1` and `m2` at three
//! phases one third of a turn apart.
//!
//! Neither direction rounds or clamps: fractional channels survive so that
//! chains of adjustments do not lose precision at every step.

use crate::error::{Channel, ColorError};
use crate::model::{Hsla, Rgba, validate};

/// Convert a color to hue (degrees), saturation, lightness and alpha.
///
/// # Arguments
///
/// * `color` - any validated color; channels outside 0-255 are accepted
///
/// # Returns
///
/// The HSLA intermediate. Hue is not wrapped into `[0, 360)` and nothing is
/// clamped, so out-of-range input can produce out-of-range fields. Alpha is
/// copied through unchanged.
///
/// # Example
///
/// ```
/// let hsl = colormath::to_hsl(colormath::rgb(0.0, 255.0, 255.0)?);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (180.0, 1.0, 0.5));
/// # Ok::<(), colormath::ColorError>(())
/// ```
#[must_use]
pub fn to_hsl(color: Rgba) -> Hsla {
    // Normalize to 0-1
    let r = color.r() / 255.0;
    let g = color.g() / 255.0;
    let b = color.b() / 255.0;
    let a = color.a();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if max == min {
        return Hsla::new(0.0, 0.0, l, a);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // First match wins: r == g == max resolves through red.
    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsla::new(sextant / 6.0 * 360.0, s, l, a)
}

/// Opaque color from red, green and blue.
pub fn rgb(r: f64, g: f64, b: f64) -> Result<Rgba, ColorError> {
    rgba(r, g, b, 1.0)
}

/// Color from red, green, blue and alpha.
///
/// No clamping is applied. Fails with [`ColorError::NonFinite`] naming the
/// first channel that is NaN or infinite.
pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Rgba, ColorError> {
    Rgba::new(r, g, b, a)
}

/// Opaque color from hue, saturation and lightness.
pub fn hsl(h: f64, s: f64, l: f64) -> Result<Rgba, ColorError> {
    hsla(h, s, l, 1.0)
}

/// Color from hue (degrees, any real), saturation, lightness and alpha.
///
/// # Arguments
///
/// * `h` - hue in degrees, reduced modulo 360 with a non-negative result
/// * `s`, `l` - saturation and lightness as fractions, nominally 0-1
/// * `a` - alpha, passed through
///
/// # Returns
///
/// The RGBA color, or [`ColorError::NonFinite`] when any argument is NaN or
/// infinite (an infinite hue reduces to NaN and is reported as the hue).
///
/// # Example
///
/// ```
/// let red = colormath::hsla(-360.0, 1.0, 0.5, 0.5)?;
/// assert_eq!(red.to_array(), [255.0, 0.0, 0.0, 0.5]);
/// # Ok::<(), colormath::ColorError>(())
/// ```
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Result<Rgba, ColorError> {
    let turn = h.rem_euclid(360.0) / 360.0;
    if !turn.is_finite() {
        tracing::debug!(value = h, "rejecting non-finite hue");
        return Err(ColorError::NonFinite {
            channel: Channel::Hue,
            value: h,
        });
    }
    let [_, s, l, a] = validate(Channel::HSLA, [turn, s, l, a])?;

    // Ramp bounds: m2 is the peak, m1 the floor
    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    rgba(
        ramp(m1, m2, turn + 1.0 / 3.0) * 255.0,
        ramp(m1, m2, turn) * 255.0,
        ramp(m1, m2, turn - 1.0 / 3.0) * 255.0,
        a,
    )
}

/// Sample the HSL ramp at phase `t` (a fraction of a turn).
fn ramp(m1: f64, m2: f64, t: f64) -> f64 {
    // One wrap is enough: callers pass t within one turn of [0, 1]
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t * 6.0 < 1.0 {
        m1 + (m2 - m1) * t * 6.0
    } else if t * 2.0 < 1.0 {
        m2
    } else if t * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - t) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba::new(r, g, b, a).unwrap()
    }

    fn assert_close(actual: [f64; 4], expected: [f64; 4]) {
        for (x, y) in actual.iter().zip(expected) {
            assert!((x - y).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(to_hsl(color(255.0, 0.0, 0.0, 1.0)), Hsla::new(0.0, 1.0, 0.5, 1.0));

        let green = to_hsl(color(0.0, 255.0, 0.0, 1.0));
        assert!((green.h - 120.0).abs() < 1e-9);

        let blue = to_hsl(color(0.0, 0.0, 255.0, 0.3));
        assert!((blue.h - 240.0).abs() < 1e-9);
        assert_eq!(blue.s, 1.0);
        assert_eq!(blue.l, 0.5);
        assert_eq!(blue.a, 0.3);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let grey = to_hsl(color(51.0, 51.0, 51.0, 0.7));
        assert_eq!(grey, Hsla::new(0.0, 0.0, 51.0 / 255.0, 0.7));
    }

    #[test]
    fn tie_break_prefers_red_then_green() {
        // Yellow: r == g == max resolves through the red branch.
        let yellow = to_hsl(color(255.0, 255.0, 0.0, 1.0));
        assert!((yellow.h - 60.0).abs() < 1e-9, "h={}", yellow.h);

        // Cyan: g == b == max resolves through the green branch.
        let cyan = to_hsl(color(0.0, 255.0, 255.0, 1.0));
        assert!((cyan.h - 180.0).abs() < 1e-9, "h={}", cyan.h);

        // Magenta: r == b == max resolves through red with the +6 wrap.
        let magenta = to_hsl(color(255.0, 0.0, 255.0, 1.0));
        assert!((magenta.h - 300.0).abs() < 1e-9, "h={}", magenta.h);
    }

    #[test]
    fn light_colors_use_upper_saturation_formula() {
        let pink = to_hsl(color(255.0, 204.0, 204.0, 1.0));
        assert!(pink.l > 0.5);
        assert!((pink.s - 1.0).abs() < 1e-9, "s={}", pink.s);
    }

    #[test]
    fn out_of_range_input_is_not_rejected() {
        let hot = to_hsl(color(300.0, 0.0, 0.0, 1.0));
        assert!(hot.l > 0.5);
        assert!(hot.s.is_finite());
    }

    #[test]
    fn hsla_primaries() {
        assert_eq!(hsla(0.0, 1.0, 0.5, 1.0).unwrap().to_array(), [255.0, 0.0, 0.0, 1.0]);
        assert_close(hsla(120.0, 1.0, 0.5, 1.0).unwrap().to_array(), [0.0, 255.0, 0.0, 1.0]);
        assert_close(hsla(240.0, 1.0, 0.5, 0.5).unwrap().to_array(), [0.0, 0.0, 255.0, 0.5]);
    }

    #[test]
    fn hsla_keeps_fractional_channels() {
        assert_eq!(hsla(0.0, 0.0, 0.1, 0.0).unwrap().to_array(), [25.5, 25.5, 25.5, 0.0]);
    }

    #[test]
    fn negative_and_large_hue_wrap() {
        let a = hsla(-120.0, 1.0, 0.5, 1.0).unwrap().to_array();
        let b = hsla(240.0, 1.0, 0.5, 1.0).unwrap().to_array();
        let c = hsla(600.0, 1.0, 0.5, 1.0).unwrap().to_array();
        assert_close(a, b);
        assert_close(c, b);
    }

    #[test]
    fn hsla_rejects_non_finite() {
        let err = hsla(f64::NAN, 0.5, 0.5, 1.0).unwrap_err();
        assert_eq!(err.channel(), Some(Channel::Hue));

        let err = hsla(f64::INFINITY, 0.5, 0.5, 1.0).unwrap_err();
        assert_eq!(err.channel(), Some(Channel::Hue));

        let err = hsla(10.0, 0.5, f64::NAN, 1.0).unwrap_err();
        assert_eq!(err.channel(), Some(Channel::Lightness));

        let err = hsl(10.0, f64::INFINITY, 0.5).unwrap_err();
        assert_eq!(err.channel(), Some(Channel::Saturation));
    }

    #[test]
    fn rgb_defaults_alpha() {
        assert_eq!(rgb(1.0, 2.0, 3.0).unwrap().to_array(), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(hsl(0.0, 0.0, 1.0).unwrap().to_array(), [255.0, 255.0, 255.0, 1.0]);
    }

    #[test]
    fn rgba_rejects_nan() {
        let err = rgba(f64::NAN, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.channel(), Some(Channel::Red));
    }

    #[test]
    fn round_trip_chromatic() {
        let c = color(12.0, 200.0, 99.5, 0.8);
        let back = to_hsl(c).to_rgba().unwrap();
        assert_close(back.to_array(), c.to_array());
    }

    #[test]
    fn ramp_sextants() {
        assert_eq!(ramp(0.0, 1.0, 0.0), 0.0);
        assert_eq!(ramp(0.0, 1.0, 0.25), 1.0);
        assert_eq!(ramp(0.0, 1.0, 0.9), 0.0);
        assert_eq!(ramp(0.0, 1.0, -0.75), 1.0);
        assert_eq!(ramp(0.0, 1.0, 1.25), 1.0);
    }
}
