//! Hue arithmetic shared by the HSL and HSV conversions.

use crate::color::{unit, Rgb};

/// Computes the hue in degrees of an RGB color, in [0, 360).
///
/// The dominant channel is picked by sequential comparison against the
/// maximum: red first, then green, then blue. When channels tie for the
/// maximum the earlier one wins, so `(255, 255, 0)` goes through the red
/// branch. Achromatic colors (all channels equal) get hue 0.
pub(crate) fn hue_of(c: Rgb) -> f64 {
    let imax = c.max_channel();
    let imin = c.min_channel();
    let (fr, fg, fb) = (unit(c.r), unit(c.g), unit(c.b));
    let (fmax, fmin) = (unit(imax), unit(imin));

    let multiplier = if imax == imin {
        0.0
    } else {
        60.0 / (fmax - fmin)
    };

    if c.r == imax {
        let h = multiplier * (fg - fb) + 360.0;
        if h >= 360.0 {
            h - 360.0
        } else {
            h
        }
    } else if c.g == imax {
        multiplier * (fb - fr) + 120.0
    } else {
        multiplier * (fr - fg) + 240.0
    }
}

/// Wraps a hue in degrees into [0, 360).
///
/// In-range hues are returned unchanged. NaN stays NaN.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if (0.0..360.0).contains(&h) {
        return h;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    let wrapped = if wrapped >= 360.0 { 0.0 } else { wrapped };
    tracing::trace!(hue = h, wrapped, "wrapped out-of-range hue");
    wrapped
}
