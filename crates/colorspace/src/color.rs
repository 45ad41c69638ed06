//! Color value types: `Rgb`, `Hsl` and `Hsv`.
//!
//! `Rgb` holds 8-bit integer channels, so the [0, 255] domain is enforced by
//! the type. `Hsl` and `Hsv` hold `f64` components: hue in degrees in
//! [0, 360), the other two in [0, 1]. The float types have public fields and
//! can be built directly for the unchecked path; `Hsl::new` and `Hsv::new`
//! validate their inputs instead.

use crate::error::ColorError;
use crate::hue::wrap_hue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color with integer channels in [0, 255].
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees, saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// HSV color: hue in degrees, saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Promotes an integer channel to the unit interval.
pub(crate) fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Scales a unit-interval value to a channel, rounding half away from zero.
///
/// The float-to-int cast saturates, so out-of-domain input clamps to
/// [0, 255] and NaN maps to 0.
pub(crate) fn to_channel(x: f64) -> u8 {
    round_channel(x * 255.0)
}

/// Rounds an already-scaled [0, 255] value to a channel, saturating.
pub(crate) fn round_channel(x: f64) -> u8 {
    x.round() as u8
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub(crate) fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidHex` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            tracing::debug!(input = hex, "rejected hex color");
            return Err(ColorError::InvalidHex(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            let pair = &digits[range];
            // from_str_radix alone would also accept a leading '+'
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                tracing::debug!(input = hex, channel = name, "rejected hex color");
                return Err(ColorError::InvalidHex(format!(
                    "invalid {name} component: {pair:?}"
                )));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|e| ColorError::InvalidHex(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<(i32, i32, i32)> for Rgb {
    type Error = ColorError;

    /// Narrows wider integer channels, rejecting anything outside [0, 255].
    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Self::Error> {
        let narrow = |value: i32, component: &'static str| {
            u8::try_from(value).map_err(|_| {
                tracing::debug!(component, value, "rejected rgb channel");
                ColorError::OutOfRange {
                    component,
                    value: f64::from(value),
                }
            })
        };
        Ok(Rgb {
            r: narrow(r, "red")?,
            g: narrow(g, "green")?,
            b: narrow(b, "blue")?,
        })
    }
}

/// Checks that `value` is finite and, for non-hue components, inside [0, 1].
fn check_unit(value: f64, component: &'static str) -> Result<f64, ColorError> {
    if !value.is_finite() {
        tracing::debug!(component, value, "rejected non-finite component");
        return Err(ColorError::NonFinite { component });
    }
    if !(0.0..=1.0).contains(&value) {
        tracing::debug!(component, value, "rejected out-of-range component");
        return Err(ColorError::OutOfRange { component, value });
    }
    Ok(value)
}

fn check_hue(h: f64) -> Result<f64, ColorError> {
    if !h.is_finite() {
        tracing::debug!(component = "hue", value = h, "rejected non-finite component");
        return Err(ColorError::NonFinite { component: "hue" });
    }
    Ok(wrap_hue(h))
}

impl Hsl {
    /// Creates a validated HSL color.
    ///
    /// Any finite hue is accepted and wrapped into [0, 360). Saturation and
    /// lightness must lie in [0, 1]; NaN or infinite components are rejected.
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check_hue(h)?,
            s: check_unit(s, "saturation")?,
            l: check_unit(l, "lightness")?,
        })
    }
}

impl Hsv {
    /// Creates a validated HSV color.
    ///
    /// Same rules as [`Hsl::new`], with value in place of lightness.
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check_hue(h)?,
            s: check_unit(s, "saturation")?,
            v: check_unit(v, "value")?,
        })
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        crate::hsl::rgb_to_hsl(c)
    }
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        crate::hsl::hsl_to_rgb(c)
    }
}

impl From<Rgb> for Hsv {
    fn from(c: Rgb) -> Self {
        crate::hsv::rgb_to_hsv(c)
    }
}

impl From<Hsv> for Rgb {
    fn from(c: Hsv) -> Self {
        crate::hsv::hsv_to_rgb(c)
    }
}
