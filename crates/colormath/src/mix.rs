//! Alpha-aware weighted mixing of two colors.
//!
//! # Formula
//!
//! > p = amount / 100, w = 2p - 1, da = a1 - a2
//! > w1 = ((w * da == -1 ? w : (w + da) / (1 + w * da)) + 1) / 2
//! > w2 = 1 - w1
//!
//! Red, green and blue are `c1 * w1 + c2 * w2`. Alpha is weighted by `p`,
//! not `w1`, so a more opaque color pulls the RGB channels harder than it
//! pulls alpha.

use crate::convert::rgba;
use crate::error::ColorError;
use crate::model::Rgba;

/// Mix `color1` and `color2`, `amount` percent towards `color1`.
///
/// # Arguments
///
/// * `color1`, `color2` - colors to blend
/// * `amount` - weight of `color1` in percent; `50` is an even mix
///
/// # Returns
///
/// The blended color. No clamping is applied, so amounts outside 0-100
/// extrapolate past either input. Fails when `amount` is NaN or the
/// extrapolation overflows.
///
/// # Example
///
/// ```
/// let red = colormath::rgb(255.0, 0.0, 0.0)?;
/// let blue = colormath::rgb(0.0, 0.0, 255.0)?;
/// let purple = colormath::mix(red, blue, 50.0)?;
/// assert_eq!(purple.to_array(), [127.5, 0.0, 127.5, 1.0]);
/// # Ok::<(), colormath::ColorError>(())
/// ```
pub fn mix(color1: Rgba, color2: Rgba, amount: f64) -> Result<Rgba, ColorError> {
    let p = amount / 100.0;
    let w = p * 2.0 - 1.0;
    let delta_alpha = color1.a() - color2.a();

    // Exact comparison: this guard must not absorb nearby values.
    let weight = if w * delta_alpha == -1.0 {
        w
    } else {
        (w + delta_alpha) / (1.0 + w * delta_alpha)
    };
    let w1 = (weight + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    rgba(
        color1.r() * w1 + color2.r() * w2,
        color1.g() * w1 + color2.g() * w2,
        color1.b() * w1 + color2.b() * w2,
        color1.a() * p + color2.a() * (1.0 - p),
    )
}
