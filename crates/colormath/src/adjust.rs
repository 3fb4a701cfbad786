//! Adjustment operations built on the HSL round trip.
//!
//! Each operation converts to HSL, shifts one channel, keeps it in range and
//! converts back. Amounts are percentages: `lighten(c, 10.0)` adds `0.1` to
//! lightness. Saturation, lightness and alpha saturate at `[0, 1]`; hue wraps.
//!
//! The `darken`/`desaturate`/`fadeout` family is the positive operation with
//! a negated amount, so `darken(c, x) == lighten(c, -x)` holds exactly.

use crate::convert::to_hsl;
use crate::error::ColorError;
use crate::model::Rgba;

/// Restrict `v` to `[0, 1]`. NaN stays NaN and is rejected downstream.
#[must_use]
pub fn clamp(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Increase saturation by `amount` percent.
///
/// # Arguments
///
/// * `color` - color to adjust
/// * `amount` - percentage points added to saturation; may be negative
///
/// # Returns
///
/// The adjusted color with saturation clamped to `[0, 1]`. Hue, lightness
/// and alpha are carried through the HSL round trip. Fails only when
/// `amount` is NaN, reported as the saturation channel.
///
/// # Example
///
/// ```
/// let c = colormath::rgb(100.0, 10.0, 10.0)?;
/// let out = colormath::saturate(c, 10.0)?;
/// assert!(out.r() > c.r() && out.g() < c.g());
/// # Ok::<(), colormath::ColorError>(())
/// ```
pub fn saturate(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    let mut hsl = to_hsl(color);
    hsl.s = clamp(hsl.s + amount / 100.0);
    hsl.to_rgba()
}

/// Decrease saturation by `amount` percent.
pub fn desaturate(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    saturate(color, -amount)
}

/// Increase lightness by `amount` percent.
///
/// # Arguments
///
/// * `color` - color to adjust
/// * `amount` - percentage points added to lightness; may be negative
///
/// # Returns
///
/// The adjusted color with lightness clamped to `[0, 1]`, so any amount of
/// 100 or more yields white. Fails only when `amount` is NaN.
pub fn lighten(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    let mut hsl = to_hsl(color);
    hsl.l = clamp(hsl.l + amount / 100.0);
    hsl.to_rgba()
}

/// Decrease lightness by `amount` percent.
pub fn darken(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    lighten(color, -amount)
}

/// Increase alpha by `amount` percent.
///
/// # Arguments
///
/// * `color` - color to adjust
/// * `amount` - percentage points added to alpha; may be negative
///
/// # Returns
///
/// The color with alpha clamped to `[0, 1]`. Red, green and blue come back
/// through the HSL round trip and match the input up to rounding error.
pub fn fade(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    let mut hsl = to_hsl(color);
    hsl.a = clamp(hsl.a + amount / 100.0);
    hsl.to_rgba()
}

/// Alias of [`fade`].
pub fn fadein(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    fade(color, amount)
}

/// Decrease alpha by `amount` percent.
pub fn fadeout(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    fade(color, -amount)
}

/// Remove `amount` percent of saturation; `100` yields a pure grey.
pub fn greyscale(color: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    desaturate(color, amount)
}

/// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
///
/// # Arguments
///
/// * `color` - color to rotate
/// * `degrees` - rotation, positive or negative, any magnitude
///
/// # Returns
///
/// The rotated color. Achromatic colors keep their grey level. Fails when
/// `degrees` is not finite.
///
/// # Example
///
/// ```
/// let red = colormath::rgba(255.0, 0.0, 0.0, 0.0)?;
/// assert_eq!(colormath::spin(red, 10.0)?.to_array(), [255.0, 42.5, 0.0, 0.0]);
/// # Ok::<(), colormath::ColorError>(())
/// ```
pub fn spin(color: Rgba, degrees: f64) -> Result<Rgba, ColorError> {
    let mut hsl = to_hsl(color);
    // Truncating remainder, then lift negatives into range
    let hue = (hsl.h + degrees) % 360.0;
    hsl.h = if hue < 0.0 { 360.0 + hue } else { hue };
    hsl.to_rgba()
}
