//! Helpers for extracting colors from a `serde_json::Value` configuration object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing, the value has the wrong shape, or it fails validation, the
//! default is returned. These never fail.

use crate::color::{Hsl, Hsv, Rgb};
use serde_json::Value;

/// Extracts an [`Rgb`] from `params[name]`, returning `default` if missing or invalid.
///
/// Accepts a hex string (`"#rrggbb"` or `"rrggbb"`) or an array of three
/// integers in [0, 255].
pub fn param_rgb(params: &Value, name: &str, default: Rgb) -> Rgb {
    params
        .get(name)
        .and_then(rgb_from_value)
        .unwrap_or(default)
}

/// Extracts an [`Hsl`] from an object `{"h", "s", "l"}` at `params[name]`.
///
/// Components are validated with [`Hsl::new`], so the hue is wrapped and an
/// out-of-range saturation or lightness falls back to `default`.
pub fn param_hsl(params: &Value, name: &str, default: Hsl) -> Hsl {
    params
        .get(name)
        .and_then(|v| triple(v, ["h", "s", "l"]))
        .and_then(|[h, s, l]| Hsl::new(h, s, l).ok())
        .unwrap_or(default)
}

/// Extracts an [`Hsv`] from an object `{"h", "s", "v"}` at `params[name]`.
///
/// Same rules as [`param_hsl`].
pub fn param_hsv(params: &Value, name: &str, default: Hsv) -> Hsv {
    params
        .get(name)
        .and_then(|v| triple(v, ["h", "s", "v"]))
        .and_then(|[h, s, v]| Hsv::new(h, s, v).ok())
        .unwrap_or(default)
}

fn rgb_from_value(value: &Value) -> Option<Rgb> {
    match value {
        Value::String(hex) => Rgb::from_hex(hex).ok(),
        Value::Array(items) if items.len() == 3 => {
            let channel = |i: usize| items[i].as_u64().and_then(|c| u8::try_from(c).ok());
            Some(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Reads three numeric fields from a JSON object, all or nothing.
fn triple(value: &Value, keys: [&str; 3]) -> Option<[f64; 3]> {
    let field = |key: &str| value.get(key).and_then(Value::as_f64);
    Some([field(keys[0])?, field(keys[1])?, field(keys[2])?])
}
