//! The variation library (component C): 22 pure 2D->2D post-transforms
//! plus a "random" convex blend of two of them.
//!
//! All angle-dependent variations use `atan2` directly instead of the
//! sign-branching the original source used (design note: "replace
//! every `if x != 0 atan(y/x); else branch on sign(y)` with a single
//! two-argument arctangent"). A few variations are singular at the
//! origin or on degenerate affines; each guards its own denominator
//! with a small epsilon rather than propagating NaN (§4.C, §7).

use crate::affine::Affine;
use crate::rng::PrngHandle;
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

#[inline]
fn guarded(v: f64) -> f64 {
    if v.abs() < EPS {
        EPS
    } else {
        v
    }
}

/// The 22 named variations of §4.C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariationKind {
    Linear,
    Sinusoidal,
    Spherical,
    Swirl,
    Horseshoe,
    Polar,
    Handkerchief,
    Heart,
    Disc,
    Spiral,
    Hyperbolic,
    Diamond,
    Ex,
    Julia,
    Waves,
    Popcorn,
    Exponential,
    Power,
    Rings,
    Fan,
    Fisheye,
    Bubble,
}

impl VariationKind {
    pub const ALL: [VariationKind; 22] = [
        VariationKind::Linear,
        VariationKind::Sinusoidal,
        VariationKind::Spherical,
        VariationKind::Swirl,
        VariationKind::Horseshoe,
        VariationKind::Polar,
        VariationKind::Handkerchief,
        VariationKind::Heart,
        VariationKind::Disc,
        VariationKind::Spiral,
        VariationKind::Hyperbolic,
        VariationKind::Diamond,
        VariationKind::Ex,
        VariationKind::Julia,
        VariationKind::Waves,
        VariationKind::Popcorn,
        VariationKind::Exponential,
        VariationKind::Power,
        VariationKind::Rings,
        VariationKind::Fan,
        VariationKind::Fisheye,
        VariationKind::Bubble,
    ];

    /// Applies this variation to a point already transformed by
    /// `affine` (`waves`/`popcorn`/`rings`/`fan` read the *current*
    /// affine's translation/linear coefficients; `julia` needs `rng`
    /// for its τ ∈ {0, π} coin flip).
    pub fn apply(self, x: f64, y: f64, affine: &Affine, rng: &mut PrngHandle) -> (f64, f64) {
        use VariationKind::*;
        match self {
            Linear => (x, y),
            Sinusoidal => (x.sin(), y.sin()),
            Spherical => {
                let r2 = guarded(x * x + y * y);
                (x / r2, y / r2)
            }
            Swirl => {
                let r2 = x * x + y * y;
                (
                    x * r2.sin() - y * r2.cos(),
                    x * r2.cos() + y * r2.sin(),
                )
            }
            Horseshoe => {
                let r = guarded((x * x + y * y).sqrt());
                ((x - y) * (x + y) / r, 2.0 * x * y / r)
            }
            Polar => {
                let alfa = y.atan2(x);
                let r = (x * x + y * y).sqrt();
                (2.0 * alfa / PI, r - 1.0)
            }
            Handkerchief => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                (r * (2.0 * alfa + r).sin(), r * (2.0 * alfa - r).cos())
            }
            Heart => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                (r * (2.0 * r * alfa).sin(), -r * (2.0 * r * alfa).cos())
            }
            Disc => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                let k = 2.0 * alfa / PI;
                (k * (r * PI).sin(), k * (r * PI).cos())
            }
            Spiral => {
                let r = guarded((x * x + y * y).sqrt());
                let alfa = y.atan2(x);
                (
                    ((2.0 * alfa).cos() + r.sin()) / r,
                    ((2.0 * alfa).sin() - r.cos()) / r,
                )
            }
            Hyperbolic => {
                let r = guarded((x * x + y * y).sqrt());
                let alfa = y.atan2(x);
                ((2.0 * alfa).sin() / r, (2.0 * alfa).cos() * r)
            }
            Diamond => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                ((2.0 * alfa).sin() * r.cos(), (2.0 * alfa).cos() * r.sin())
            }
            Ex => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                (
                    r * (2.0 * alfa + r).sin().powi(3),
                    r * (2.0 * alfa - r).cos().powi(3),
                )
            }
            Julia => {
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                let tau = if rng.bool() { PI } else { 0.0 };
                (r.sqrt() * (alfa + tau).cos(), r.sqrt() * (alfa + tau).sin())
            }
            Waves => {
                let c2 = guarded(affine.c * affine.c);
                let f2 = guarded(affine.f * affine.f);
                (x + affine.b * (y / c2).sin(), y + affine.e * (x / f2).sin())
            }
            Popcorn => (
                x + affine.c * (3.0 * y).tan().sin(),
                y + affine.f * (3.0 * x).tan().sin(),
            ),
            Exponential => {
                let k = (x - 1.0).exp();
                (k * (PI * y).cos(), k * (PI * y).sin())
            }
            Power => {
                let r = (x * x + y * y).sqrt();
                if r < EPS {
                    return (0.0, 0.0);
                }
                let alfa = y.atan2(x);
                let k = r.powf(alfa.sin());
                (k * alfa.cos(), k * alfa.sin())
            }
            Rings => {
                let dx = guarded(affine.c * affine.c);
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                let wrapped = (r + dx).rem_euclid(2.0 * dx) - dx + r * (1.0 - dx);
                (wrapped * alfa.cos(), wrapped * alfa.sin())
            }
            Fan => {
                let dx = guarded(PI * affine.c * affine.c);
                let dy = affine.f;
                let r = (x * x + y * y).sqrt();
                let alfa = y.atan2(x);
                let ang = if (alfa + dy).rem_euclid(dx) > dx / 2.0 {
                    alfa - dx / 2.0
                } else {
                    alfa + dx / 2.0
                };
                (r * ang.cos(), r * ang.sin())
            }
            Fisheye => {
                let r = (x * x + y * y).sqrt();
                (2.0 * x / (1.0 + r), 2.0 * y / (1.0 + r))
            }
            Bubble => {
                let r2 = x * x + y * y;
                (4.0 * x / (4.0 + r2), 4.0 * y / (4.0 + r2))
            }
        }
    }
}

/// The flame's active variation selector: either one fixed kind or a
/// random convex blend of two, `p*v1(x,y) + (1-p)*v2(x,y)`.
#[derive(Clone, Copy, Debug)]
pub enum Variation {
    Single(VariationKind),
    Random(VariationKind, VariationKind, f64),
}

impl Variation {
    pub fn apply(self, x: f64, y: f64, affine: &Affine, rng: &mut PrngHandle) -> (f64, f64) {
        match self {
            Variation::Single(k) => k.apply(x, y, affine, rng),
            Variation::Random(k1, k2, p) => {
                let (x1, y1) = k1.apply(x, y, affine, rng);
                let (x2, y2) = k2.apply(x, y, affine, rng);
                (p * x1 + (1.0 - p) * x2, p * y1 + (1.0 - p) * y2)
            }
        }
    }
}
