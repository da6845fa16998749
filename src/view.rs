//! Coordinate/view model (component H): shared pan/zoom/reset
//! semantics, per family, plus the Julia constant preset cursor.
//!
//! Grounded in `fractals.cpp`'s `main()` switch over shift/zoom
//! `InputType` tags (§4.H) and `mandelbrot.cpp`'s constant-change
//! escape-radius recompute.

use crate::julia::{escape_radius, CONSTANT_PRESETS};

const JULIA_PAN_STEP: i64 = 190;
const FLAME_PAN_STEP: f64 = 0.5;

/// Julia's pan/zoom/constant state (§4.H).
#[derive(Clone, Copy, Debug)]
pub struct JuliaView {
    pub scale: f64,
    pub shift_x: i64,
    pub shift_y: i64,
    pub constant_index: usize,
    pub radius: f64,
}

impl JuliaView {
    pub fn new(w: u32, h: u32) -> Self {
        let constant_index = 0;
        let (cx, cy) = CONSTANT_PRESETS[constant_index];
        JuliaView {
            scale: 0.25,
            shift_x: (w / 2) as i64,
            shift_y: (h / 2) as i64,
            constant_index,
            radius: escape_radius(cx, cy),
        }
    }

    pub fn constant(&self) -> (f64, f64) {
        CONSTANT_PRESETS[self.constant_index]
    }

    pub fn shift_up(&mut self) {
        self.shift_y -= JULIA_PAN_STEP;
    }
    pub fn shift_down(&mut self) {
        self.shift_y += JULIA_PAN_STEP;
    }
    pub fn shift_left(&mut self) {
        self.shift_x -= JULIA_PAN_STEP;
    }
    pub fn shift_right(&mut self) {
        self.shift_x += JULIA_PAN_STEP;
    }

    pub fn zoom_in(&mut self) {
        self.scale *= 2.0;
    }
    pub fn zoom_out(&mut self) {
        self.scale /= 2.0;
    }

    pub fn reset_scale(&mut self, w: u32, h: u32) {
        self.scale = 0.25;
        self.shift_x = (w / 2) as i64;
        self.shift_y = (h / 2) as i64;
    }

    /// Advances to the next preset in the 14-entry cycle and
    /// recomputes the escape radius for the new constant.
    pub fn advance_constant(&mut self) {
        self.constant_index = (self.constant_index + 1) % CONSTANT_PRESETS.len();
        let (cx, cy) = self.constant();
        self.radius = escape_radius(cx, cy);
    }

    pub fn total_reset(&mut self, w: u32, h: u32) {
        self.reset_scale(w, h);
        self.constant_index = 0;
        let (cx, cy) = self.constant();
        self.radius = escape_radius(cx, cy);
    }
}

/// Flame's pan/zoom state (§4.H). Reset also re-seeds the pool, which
/// is the reducer's job, not this struct's.
#[derive(Clone, Copy, Debug)]
pub struct FlameView {
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl FlameView {
    pub fn new() -> Self {
        FlameView { scale: 1.0, dx: 0.0, dy: 0.0 }
    }

    pub fn shift_up(&mut self) {
        self.dy -= FLAME_PAN_STEP;
    }
    pub fn shift_down(&mut self) {
        self.dy += FLAME_PAN_STEP;
    }
    pub fn shift_left(&mut self) {
        self.dx -= FLAME_PAN_STEP;
    }
    pub fn shift_right(&mut self) {
        self.dx += FLAME_PAN_STEP;
    }

    pub fn zoom_in(&mut self) {
        self.scale /= 2.0;
    }
    pub fn zoom_out(&mut self) {
        self.scale *= 2.0;
    }

    pub fn reset_scale(&mut self) {
        self.scale = 1.0;
        self.dx = 0.0;
        self.dy = 0.0;
    }
}

impl Default for FlameView {
    fn default() -> Self {
        Self::new()
    }
}
