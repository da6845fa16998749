//! The chaos-game pool (component E): the flame path's fixed-size
//! array of 2-D sample points, their deterministic seeding, and the
//! one-step-per-frame advance that splats them into the image.
//!
//! Grounded in `fractals.cpp::fill_pool` (seeding/warm-up) and the
//! splat loop inside `main()`'s flame branch, generalised to an
//! explicit struct instead of free functions over global arrays —
//! the same generalisation `Kwarrtz-flame`'s `core::Flame` makes over
//! a C-style chaos-game loop.

use crate::affine::Ifs;
use crate::rng::PrngHandle;
use crate::surface::Surface;
use crate::variation::Variation;

const WARMUP_STEPS: u32 = 40;

/// One chaos-game sample point, in IFS world space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A `w`x`h` array of sample points (one per pool slot, row-major,
/// `row*w + col`), reused across every reducer transition.
pub struct Pool {
    w: u32,
    h: u32,
    points: Vec<Point>,
}

impl Pool {
    pub fn new(w: u32, h: u32) -> Self {
        let n = (w as usize) * (h as usize);
        Pool { w, h, points: vec![Point::default(); n] }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Seeds the deterministic lattice of §3 and burns in
    /// [`WARMUP_STEPS`] affine-only iterations (variation is not
    /// applied during warm-up, matching the source's warm-up loop).
    ///
    /// Axis convention (open question #3, resolved): the outer index
    /// `row` pairs with the height-scaled term, the inner index `col`
    /// pairs with the width-scaled term, flat index `row*w + col`.
    pub fn seed(&mut self, ifs: &Ifs, rng: &mut PrngHandle) {
        let w = self.w as f64;
        let h = self.h as f64;
        for row in 0..self.h {
            for col in 0..self.w {
                let idx = (row as usize) * (self.w as usize) + (col as usize);
                self.points[idx] = Point {
                    x: (row as f64 - h / 2.0) / (h / 4.0),
                    y: (col as f64 - w / 2.0) / (w / 4.0),
                };
            }
        }

        for _ in 0..WARMUP_STEPS {
            for p in self.points.iter_mut() {
                let (_, affine) = ifs.pick(rng);
                let (x, y) = affine.apply(p.x, p.y);
                p.x = x;
                p.y = y;
            }
        }
    }
}

/// One step of the chaos game for every pool point (§4.E): pick a
/// random map, apply it and the active variation, project world space
/// into the image, splat the affine's colour if in bounds.
///
/// `scale` is the flame view's zoom factor (1 at reset, doubling on
/// zoom-out, halving on zoom-in); `(dx, dy)` are the real pan offsets
/// in world units. `190` from the source is derived here as
/// `image_w / 4`, per the design note that both flame world-to-pixel
/// mappings should share one scale constant.
pub fn advance_flame(
    surface: &mut Surface,
    pool: &mut Pool,
    ifs: &Ifs,
    variation: Variation,
    scale: f64,
    dx: f64,
    dy: f64,
    rng: &mut PrngHandle,
) {
    let k = (surface.width() as f64 / 4.0) / scale;
    for p in pool.points.iter_mut() {
        let (i, affine) = ifs.pick(rng);
        let (ax, ay) = affine.apply(p.x, p.y);
        let (vx, vy) = variation.apply(ax, ay, ifs.get(i), rng);
        p.x = vx;
        p.y = vy;

        let u = ((vx + (2.0 + dx) * scale) * k).floor() as i64;
        let v = ((vy + (2.0 + dy) * scale) * k).floor() as i64;
        surface.splat(u, v, affine.colour);
    }
}
