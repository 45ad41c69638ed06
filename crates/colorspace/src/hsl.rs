//! RGB <-> HSL conversion.

use crate::color::{to_channel, unit, Hsl, Rgb};
use crate::hue::{hue_of, wrap_hue};

/// Converts an RGB color to HSL.
///
/// Lightness is the midpoint of the largest and smallest channel.
/// Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let imax = c.max_channel();
    let imin = c.min_channel();
    let (fmax, fmin) = (unit(imax), unit(imin));

    let h = hue_of(c);
    let l = 0.5 * (fmax + fmin);
    let s = if imax == imin {
        0.0
    } else if l <= 0.5 {
        (fmax - fmin) / (2.0 * l)
    } else {
        (fmax - fmin) / (2.0 - 2.0 * l)
    };

    // Rounding can push fully saturated colors a few ulps past 1.
    Hsl { h, s: s.min(1.0), l }
}

/// Converts an HSL color to RGB.
///
/// Hues outside [0, 360) are wrapped. Saturation and lightness are not
/// checked; out-of-domain values produce channels clamped to [0, 255].
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let Hsl { h, s, l } = c;
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = wrap_hue(h) / 360.0;

    let channel = |t: f64| to_channel(hue_to_unit(p, q, t));
    Rgb {
        r: channel(h + 1.0 / 3.0),
        g: channel(h),
        b: channel(h - 1.0 / 3.0),
    }
}

/// Evaluates one channel of the HSL piecewise ramp at hue offset `t`.
///
/// `t` is folded back into [0, 1] once before evaluation.
fn hue_to_unit(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_hsl(actual: Hsl, h: f64, s: f64, l: f64) {
        assert!(approx_eq(actual.h, h), "h: {} vs {h}", actual.h);
        assert!(approx_eq(actual.s, s), "s: {} vs {s}", actual.s);
        assert!(approx_eq(actual.l, l), "l: {} vs {l}", actual.l);
    }

    fn channel_diff(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    // -- RGB -> HSL --

    #[test]
    fn pure_red() {
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 0)), 0.0, 1.0, 0.5);
    }

    #[test]
    fn pure_green() {
        assert_hsl(rgb_to_hsl(Rgb::new(0, 255, 0)), 120.0, 1.0, 0.5);
    }

    #[test]
    fn pure_blue() {
        assert_hsl(rgb_to_hsl(Rgb::new(0, 0, 255)), 240.0, 1.0, 0.5);
    }

    #[test]
    fn white_is_achromatic_with_full_lightness() {
        assert_hsl(rgb_to_hsl(Rgb::new(255, 255, 255)), 0.0, 0.0, 1.0);
    }

    #[test]
    fn black_is_achromatic_with_zero_lightness() {
        assert_hsl(rgb_to_hsl(Rgb::new(0, 0, 0)), 0.0, 0.0, 0.0);
    }

    #[test]
    fn yellow_takes_the_red_branch() {
        assert_hsl(rgb_to_hsl(Rgb::new(255, 255, 0)), 60.0, 1.0, 0.5);
    }

    #[test]
    fn dark_color_uses_lower_saturation_formula() {
        // l = (128 + 0) / 510 < 0.5, s = fmax / (2l) = 1
        let hsl = rgb_to_hsl(Rgb::new(0, 0, 128));
        assert_hsl(hsl, 240.0, 1.0, 128.0 / 510.0);
    }

    #[test]
    fn light_color_uses_upper_saturation_formula() {
        // fmax = 1, fmin = 0.6, l = 0.8, s = 0.4 / 0.4 = 1
        let hsl = rgb_to_hsl(Rgb::new(255, 153, 153));
        assert_hsl(hsl, 0.0, 1.0, 0.8);

        // fmax = 0.8, fmin = 0.6, l = 0.7, s = 0.2 / 0.6
        let hsl = rgb_to_hsl(Rgb::new(204, 153, 153));
        assert_hsl(hsl, 0.0, 0.2 / 0.6, 0.7);
    }

    #[test]
    fn every_gray_is_achromatic() {
        for k in 0..=255u8 {
            let hsl = rgb_to_hsl(Rgb::new(k, k, k));
            assert_eq!(hsl.s, 0.0, "gray {k}: s = {}", hsl.s);
            assert_eq!(hsl.h, 0.0, "gray {k}: h = {}", hsl.h);
            assert!(
                approx_eq(hsl.l, f64::from(k) / 255.0),
                "gray {k}: l = {}",
                hsl.l
            );
        }
    }

    // -- HSL -> RGB --

    #[test]
    fn primaries_from_hsl() {
        let cases = [
            (0.0, Rgb::new(255, 0, 0)),
            (60.0, Rgb::new(255, 255, 0)),
            (120.0, Rgb::new(0, 255, 0)),
            (180.0, Rgb::new(0, 255, 255)),
            (240.0, Rgb::new(0, 0, 255)),
            (300.0, Rgb::new(255, 0, 255)),
        ];
        for (h, expected) in cases {
            let rgb = hsl_to_rgb(Hsl { h, s: 1.0, l: 0.5 });
            assert_eq!(rgb, expected, "hue {h}");
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        let rgb = hsl_to_rgb(Hsl {
            h: 200.0,
            s: 0.0,
            l: 0.5,
        });
        assert_eq!(rgb, Rgb::new(128, 128, 128));
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        let black = hsl_to_rgb(Hsl {
            h: 90.0,
            s: 1.0,
            l: 0.0,
        });
        let white = hsl_to_rgb(Hsl {
            h: 90.0,
            s: 1.0,
            l: 1.0,
        });
        assert_eq!(black, Rgb::new(0, 0, 0));
        assert_eq!(white, Rgb::new(255, 255, 255));
    }

    #[test]
    fn hue_360_matches_hue_0() {
        let at_zero = hsl_to_rgb(Hsl {
            h: 0.0,
            s: 0.7,
            l: 0.4,
        });
        let at_360 = hsl_to_rgb(Hsl {
            h: 360.0,
            s: 0.7,
            l: 0.4,
        });
        assert_eq!(at_zero, at_360);
    }

    #[test]
    fn negative_hue_wraps() {
        let wrapped = hsl_to_rgb(Hsl {
            h: -60.0,
            s: 1.0,
            l: 0.5,
        });
        assert_eq!(wrapped, Rgb::new(255, 0, 255));
    }

    #[test]
    fn out_of_domain_lightness_saturates_channels() {
        let rgb = hsl_to_rgb(Hsl {
            h: 0.0,
            s: 0.0,
            l: 1.5,
        });
        assert_eq!(rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn hue_to_unit_regions() {
        let (p, q) = (0.2, 0.8);
        assert!(approx_eq(hue_to_unit(p, q, 0.0), p));
        assert!(approx_eq(hue_to_unit(p, q, 1.0 / 12.0), 0.5));
        assert!(approx_eq(hue_to_unit(p, q, 0.25), q));
        assert!(approx_eq(hue_to_unit(p, q, 7.0 / 12.0), 0.5));
        assert!(approx_eq(hue_to_unit(p, q, 0.9), p));
        // Folded once from outside [0, 1].
        assert!(approx_eq(hue_to_unit(p, q, -0.75), q));
        assert!(approx_eq(hue_to_unit(p, q, 1.25), q));
    }

    // -- Round trip --

    #[test]
    fn round_trip_every_rgb_color() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let original = Rgb::new(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl(original));
                    assert!(
                        channel_diff(original, back) <= 1,
                        "{original:?} -> {back:?}"
                    );
                }
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_to_hsl_stays_in_domain(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let hsl = rgb_to_hsl(Rgb::new(r, g, b));
                prop_assert!((0.0..360.0).contains(&hsl.h), "h {} for ({r}, {g}, {b})", hsl.h);
                prop_assert!((0.0..=1.0).contains(&hsl.s), "s {} for ({r}, {g}, {b})", hsl.s);
                prop_assert!((0.0..=1.0).contains(&hsl.l), "l {} for ({r}, {g}, {b})", hsl.l);
            }

            #[test]
            fn converted_hsl_passes_validation(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let hsl = rgb_to_hsl(Rgb::new(r, g, b));
                prop_assert_eq!(Hsl::new(hsl.h, hsl.s, hsl.l), Ok(hsl));
            }

            #[test]
            fn hsl_to_rgb_handles_any_in_domain_input(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                // Re-converting the result must land within a channel step.
                let rgb = hsl_to_rgb(Hsl { h, s, l });
                let again = hsl_to_rgb(rgb_to_hsl(rgb));
                prop_assert!(channel_diff(rgb, again) <= 1, "{rgb:?} vs {again:?}");
            }
        }
    }
}
