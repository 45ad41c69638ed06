//! RGB <-> HSV conversion.

use crate::color::{round_channel, unit, Hsv, Rgb};
use crate::hue::{hue_of, wrap_hue};

/// Converts an RGB color to HSV.
///
/// Value is the largest channel. Black gets saturation 0 rather than
/// dividing by zero.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let imax = c.max_channel();
    let (fmax, fmin) = (unit(imax), unit(c.min_channel()));

    let s = if imax == 0 { 0.0 } else { 1.0 - fmin / fmax };
    Hsv {
        h: hue_of(c),
        s,
        v: fmax,
    }
}

/// Converts an HSV color to RGB.
///
/// The hue is wrapped into [0, 360) first, so 360 selects the same sector
/// as 0 and negative hues count backwards from 360. Saturation and value are
/// not checked; out-of-domain values produce channels clamped to [0, 255].
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let Hsv { h, s, v } = c;
    let h = wrap_hue(h) / 60.0;
    // NaN casts to sector 0; the min covers floating-point slop at the top.
    let sector = (h.floor() as u8).min(5);
    let f = h - f64::from(sector);

    let scale = 255.0 * v;
    let p = round_channel(scale * (1.0 - s));
    let q = round_channel(scale * (1.0 - f * s));
    let t = round_channel(scale * (1.0 - (1.0 - f) * s));
    let iv = round_channel(scale);

    let (r, g, b) = match sector {
        0 => (iv, t, p),
        1 => (q, iv, p),
        2 => (p, iv, t),
        3 => (p, q, iv),
        4 => (t, p, iv),
        _ => (iv, p, q),
    };
    Rgb { r, g, b }
}
