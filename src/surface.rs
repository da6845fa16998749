//! The image surface (component B): a pixel grid plus, for the flame
//! path, a hit-counter and a normalised-density scratch field.

use crate::color::Rgb;
use crate::error::CoreError;

/// A `w`x`h` pixel grid. `counter`/`normal` are only meaningful along
/// the flame path; the Julia path leaves them at zero throughout.
pub struct Surface {
    w: u32,
    h: u32,
    pixels: Vec<Rgb>,
    counter: Vec<u32>,
    normal: Vec<f64>,
}

impl Surface {
    pub fn new(w: u32, h: u32) -> Result<Self, CoreError> {
        if w == 0 || h == 0 {
            return Err(CoreError::Allocation {
                what: "surface",
                width: w,
                height: h,
            });
        }
        let n = (w as usize) * (h as usize);
        Ok(Surface {
            w,
            h,
            pixels: vec![Rgb::default(); n],
            counter: vec![0; n],
            normal: vec![0.0; n],
        })
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn counter(&self) -> &[u32] {
        &self.counter
    }

    pub fn normal(&self) -> &[f64] {
        &self.normal
    }

    pub fn normal_mut(&mut self) -> &mut [f64] {
        &mut self.normal
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    #[inline]
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.w && (y as u32) < self.h
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, c: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = c;
    }

    /// Writes one colour to every pixel.
    pub fn uniform_fill(&mut self, hex: u32) {
        let c = Rgb::from_hex(hex);
        self.pixels.fill(c);
    }

    /// Zeroes both the hit-counter and normal buffers (flame reset).
    pub fn reset_counters(&mut self) {
        self.counter.fill(0);
        self.normal.fill(0.0);
    }

    /// Fills the clipped axis-aligned rectangle centred at `(cx, cy)`.
    /// Half-odd extent rounds outward, matching the original's
    /// `w/2 + w%2` / `h/2 + h%2` span.
    pub fn draw_rectangle(&mut self, cx: i64, cy: i64, w: u32, h: u32, hex: u32) {
        let colour = Rgb::from_hex(hex);

        let mut x0 = cx - (w / 2) as i64;
        let mut x1 = cx + (w / 2) as i64 + (w % 2) as i64;
        if x0 < 0 {
            x0 = 0;
        }
        if x0 > self.w as i64 || x1 < 0 {
            return;
        }
        if x1 > self.w as i64 {
            x1 = self.w as i64;
        }

        let mut y0 = cy - (h / 2) as i64;
        let mut y1 = cy + (h / 2) as i64 + (h % 2) as i64;
        if y0 < 0 {
            y0 = 0;
        }
        if y0 > self.h as i64 || y1 < 0 {
            return;
        }
        if y1 > self.h as i64 {
            y1 = self.h as i64;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x as u32, y as u32, colour);
            }
        }
    }

    pub fn draw_square(&mut self, cx: i64, cy: i64, side: u32, hex: u32) {
        self.draw_rectangle(cx, cy, side, side, hex);
    }

    /// Splats `map_rgb` at `(x, y)`: the first hit writes the colour
    /// verbatim, every subsequent hit is an exponential moving average
    /// (alpha = 1/2) against the pixel already there — this is *not*
    /// an unbiased running average (open question #1; retained as
    /// spec'd).
    pub fn splat(&mut self, x: i64, y: i64, map_rgb: Rgb) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x as u32, y as u32);
        if self.counter[i] == 0 {
            self.pixels[i] = map_rgb;
        } else {
            let cur = self.pixels[i];
            self.pixels[i] = Rgb::new(
                ((map_rgb.r as u16 + cur.r as u16) / 2) as u8,
                ((map_rgb.g as u16 + cur.g as u16) / 2) as u8,
                ((map_rgb.b as u16 + cur.b as u16) / 2) as u8,
            );
        }
        self.counter[i] += 1;
    }

    /// Clipped single-pixel write blended against the existing pixel by
    /// `coverage` in [0, 1]. This is the primitive the (out-of-scope)
    /// antialiased line family — Bezier subdivision, angled lines — is
    /// specified against; the core never calls it itself.
    pub fn draw_pixel(&mut self, x: i64, y: i64, colour: Rgb, coverage: f64) {
        if !self.in_bounds(x, y) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let i = self.index(x as u32, y as u32);
        let cur = self.pixels[i];
        self.pixels[i] = Rgb::new(
            ((1.0 - coverage) * cur.r as f64 + coverage * colour.r as f64) as u8,
            ((1.0 - coverage) * cur.g as f64 + coverage * colour.g as f64) as u8,
            ((1.0 - coverage) * cur.b as f64 + coverage * colour.b as f64) as u8,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fill_covers_every_pixel() {
        let mut s = Surface::new(4, 4).unwrap();
        s.uniform_fill(0xff0000);
        for p in s.pixels() {
            assert_eq!(*p, Rgb::new(255, 0, 0));
        }
    }

    #[test]
    fn draw_rectangle_clips_out_of_range() {
        let mut s = Surface::new(8, 8).unwrap();
        s.draw_rectangle(100, 100, 4, 4, 0xffffff);
        for p in s.pixels() {
            assert_eq!(*p, Rgb::default());
        }
    }

    #[test]
    fn splat_first_hit_is_verbatim_then_averages() {
        let mut s = Surface::new(4, 4).unwrap();
        s.splat(1, 1, Rgb::new(200, 0, 0));
        assert_eq!(s.get(1, 1), Rgb::new(200, 0, 0));
        assert_eq!(s.counter()[1 * 4 + 1], 1);
        s.splat(1, 1, Rgb::new(0, 200, 0));
        assert_eq!(s.get(1, 1), Rgb::new(100, 100, 0));
        assert_eq!(s.counter()[1 * 4 + 1], 2);
    }

    #[test]
    fn splat_out_of_bounds_is_silently_dropped() {
        let mut s = Surface::new(4, 4).unwrap();
        s.splat(-1, 2, Rgb::new(9, 9, 9));
        s.splat(100, 2, Rgb::new(9, 9, 9));
        assert!(s.counter().iter().all(|&c| c == 0));
    }

    #[test]
    fn histogram_conservation_over_n_splats() {
        let mut s = Surface::new(4, 4).unwrap();
        let mut in_bounds_hits = 0u32;
        for i in 0..100i64 {
            let x = (i % 6) - 1; // some fall outside [0,4)
            s.splat(x, 2, Rgb::new(1, 1, 1));
            if (0..4).contains(&x) {
                in_bounds_hits += 1;
            }
        }
        let total: u32 = s.counter().iter().sum();
        assert_eq!(total, in_bounds_hits);
    }
}
