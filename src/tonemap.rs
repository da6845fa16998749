//! The tone mapper (component F): log-density gamma correction and an
//! HSL-space luminance boost, applied to the splatted image on demand.
//!
//! Grounded in `fractals.cpp::correction`/`brighten`. Deliberately
//! drops the original's `if (Lum == 1) break;` inside the brightening
//! loop — that early-exit silently skips the remaining pixels in a
//! row once one fully-lit pixel is hit, which reads as an accidental
//! defect rather than an intended contrast rule, and nothing in this
//! spec calls for it.

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use crate::surface::Surface;

const GAMMA: f64 = 2.2;

/// Log-density gamma correction (§4.F): `normal = log10(counter)` for
/// every hit pixel, normalised by the maximum, then each colour
/// channel is scaled by `normal^(1/gamma)`.
///
/// Resolves open question #2: if no pixel has ever been hit the image
/// is left untouched rather than dividing by a zero max.
pub fn correct(surface: &mut Surface) {
    let mut max = 0.0f64;
    {
        let counter = surface.counter().to_vec();
        let normal = surface.normal_mut();
        for (n, &c) in normal.iter_mut().zip(counter.iter()) {
            if c > 0 {
                *n = (c as f64).log10();
                if *n > max {
                    max = *n;
                }
            }
        }
    }

    if max <= 0.0 {
        return;
    }

    let counter = surface.counter().to_vec();
    let normal = surface.normal().to_vec();
    let w = surface.width();
    let h = surface.height();
    for row in 0..h {
        for col in 0..w {
            let i = (row as usize) * (w as usize) + (col as usize);
            if counter[i] == 0 {
                continue;
            }
            let coef = (normal[i] / max).powf(1.0 / GAMMA);
            let p = surface.get(col, row);
            surface.set(
                col,
                row,
                Rgb::new(
                    (p.r as f64 * coef) as u8,
                    (p.g as f64 * coef) as u8,
                    (p.b as f64 * coef) as u8,
                ),
            );
        }
    }
}

/// HSL-space luminance boost (§4.F): lightness below 0.9 is scaled up
/// by 1.1, lightness at or above 0.9 is clamped to full.
pub fn brighten(surface: &mut Surface) {
    let w = surface.width();
    let h = surface.height();
    for row in 0..h {
        for col in 0..w {
            let p = surface.get(col, row);
            let mut hsl = rgb_to_hsl(p);
            if hsl.l < 0.9 {
                hsl.l *= 1.1;
            } else {
                hsl.l = 1.0;
            }
            surface.set(col, row, hsl_to_rgb(hsl));
        }
    }
}
