#![deny(unsafe_code)]
//! Exact conversions between RGB and the cylindrical HSL and HSV color models.
//!
//! Provides the color types (`Rgb`, `Hsl`, `Hsv`), the four conversion
//! functions between them, `ColorError` for the validated constructors, and
//! helpers for reading colors out of JSON configuration.
//!
//! The conversions are pure and infallible. Converting any RGB color to HSL
//! or HSV and back reproduces it to within one step per channel.

pub mod color;
pub mod error;
pub mod hsl;
pub mod hsv;
mod hue;
pub mod params;

pub use color::{Hsl, Hsv, Rgb};
pub use error::ColorError;
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
