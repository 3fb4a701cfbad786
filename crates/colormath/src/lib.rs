//! colormath: deterministic RGBA/HSLA color math
//!
//! Converts between RGBA (red, green, blue on 0-255, alpha on 0-1) and HSLA
//! (hue in degrees, saturation, lightness and alpha as fractions), and
//! provides adjustment operations layered on that conversion.
//!
//! ```text
//! untyped values ──► Rgba (validated) ──► to_hsl ──► Hsla
//!                          ▲                          │ shift + clamp/wrap
//!                          └──────── hsla ◄───────────┘
//! ```
//!
//! Every function is pure: no shared state and no I/O, so everything here is
//! safe to call from any number of threads.
//!
//! # Modules
//!
//! - `model`: `Rgba` and `Hsla` value types, untyped input boundary
//! - `convert`: `to_hsl`, `rgb`, `rgba`, `hsl`, `hsla`
//! - `adjust`: saturate, lighten, fade, spin and their inverses
//! - `mix`: alpha-aware weighted mix of two colors
//! - `extract`: hue, saturation, lightness, alpha
//! - `config`: TOML configuration
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use colormath::{lighten, rgba, spin};
//!
//! let black = rgba(0.0, 0.0, 0.0, 0.0)?;
//! assert_eq!(lighten(black, 10.0)?.to_array(), [25.5, 25.5, 25.5, 0.0]);
//!
//! let red = rgba(255.0, 0.0, 0.0, 0.0)?;
//! assert_eq!(spin(red, 10.0)?.to_array(), [255.0, 42.5, 0.0, 0.0]);
//! # Ok::<(), colormath::ColorError>(())
//! ```

#![forbid(unsafe_code)]

pub mod adjust;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod logging;
pub mod mix;
pub mod model;

pub use adjust::{
    clamp, darken, desaturate, fade, fadein, fadeout, greyscale, lighten, saturate, spin,
};
pub use convert::{hsl, hsla, rgb, rgba, to_hsl};
pub use error::{Channel, ColorError, Error, Result};
pub use extract::{Percent, alpha, hue, lightness, saturation};
pub use mix::mix;
pub use model::{Hsla, Rgba};
