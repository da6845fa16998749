//! Colour utilities (component A): packed-hex <-> RGB, the 60-slot
//! cyclic palette, and the HSL round-trip the brightening pass needs.

/// An 8-bit-per-channel colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Extracts octets MSB-first from a 24-bit packed colour.
    pub fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        // Channelwise linear interpolation, truncated toward zero to u8
        // exactly like the original's implicit double->uint8 cast.
        Rgb {
            r: ((1.0 - t) * a.r as f64 + t * b.r as f64) as u8,
            g: ((1.0 - t) * a.g as f64 + t * b.g as f64) as u8,
            b: ((1.0 - t) * a.b as f64 + t * b.b as f64) as u8,
        }
    }
}

/// Hue/Saturation/Lightness, `h` in degrees [0, 360), `s`/`l` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Converts an RGB triple (channels already normalised to [0, 1]) to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l < 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    let mut h = if max == r {
        (g - b) / (max - min)
    } else if max == g {
        2.0 + (b - r) / (max - min)
    } else {
        4.0 + (r - g) / (max - min)
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl { h, s, l }
}

/// Converts HSL back to an RGB triple, inverse of [`rgb_to_hsl`].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let t1 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let t2 = 2.0 * l - t1;
    let hue = h / 360.0;

    let mut tr = hue + 1.0 / 3.0;
    if tr > 1.0 {
        tr -= 1.0;
    }
    let tg = hue;
    let mut tb = hue - 1.0 / 3.0;
    if tb < 0.0 {
        tb += 1.0;
    }

    let channel = |t: f64| -> u8 {
        let v = if 6.0 * t < 1.0 {
            t2 + (t1 - t2) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            t1
        } else if 3.0 * t < 2.0 {
            t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
        } else {
            t2
        };
        (v * 255.0) as u8
    };

    Rgb {
        r: channel(tr),
        g: channel(tg),
        b: channel(tb),
    }
}

/// A closed 60-entry cyclic palette through three anchors
/// `c1 -> c2 -> c3 -> c1`, 20 steps per leg.
#[derive(Clone, Debug)]
pub struct Palette {
    anchors: [Rgb; 3],
    colours: [Rgb; 60],
}

impl Palette {
    pub fn build(c1: Rgb, c2: Rgb, c3: Rgb) -> Self {
        let mut colours = [Rgb::default(); 60];
        for (i, slot) in colours.iter_mut().enumerate() {
            *slot = match i {
                0..=19 => Rgb::lerp(c1, c2, i as f64 / 20.0),
                20..=39 => Rgb::lerp(c2, c3, (i - 20) as f64 / 20.0),
                _ => Rgb::lerp(c3, c1, (i - 40) as f64 / 20.0),
            };
        }
        Palette {
            anchors: [c1, c2, c3],
            colours,
        }
    }

    pub fn colours(&self) -> &[Rgb; 60] {
        &self.colours
    }

    pub fn get(&self, index: usize) -> Rgb {
        self.colours[index % 60]
    }

    pub fn anchor(&self, which: usize) -> Rgb {
        self.anchors[which]
    }

    /// Nudges anchor `which` (0, 1 or 2) with [`nudge`] and rebuilds the
    /// 60-entry cycle.
    pub fn nudge_anchor(&mut self, which: usize) {
        let anchors = &mut self.anchors;
        anchors[which] = nudge(anchors[which]);
        *self = Palette::build(anchors[0], anchors[1], anchors[2]);
    }
}

/// Walks a colour one step around the hexagonal RGB hue ring. Pure
/// primaries advance monotonically around the ring; anything else
/// drifts toward white by `+17` per channel until it reaches a ring
/// vertex (open question #5: the increment is 5, the "otherwise"
/// fallback is 17 — the variant present in the original source).
pub fn nudge(c: Rgb) -> Rgb {
    let Rgb { r, g, b } = c;
    if r == 255 && g == 0 && b < 255 {
        Rgb::new(r, g, b + 5)
    } else if r > 0 && g == 0 && b == 255 {
        Rgb::new(r - 5, g, b)
    } else if r == 0 && g < 255 && b == 255 {
        Rgb::new(r, g + 5, b)
    } else if r == 0 && g == 255 && b > 0 {
        Rgb::new(r, g, b - 5)
    } else if r < 255 && g == 255 && b == 0 {
        Rgb::new(r + 5, g, b)
    } else if r == 255 && g > 0 && b == 0 {
        Rgb::new(r, g - 5, b)
    } else {
        Rgb::new(
            r.saturating_add(17),
            g.saturating_add(17),
            b.saturating_add(17),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_closure_exact() {
        let c1 = Rgb::from_hex(0x0000ff);
        let c2 = Rgb::from_hex(0xffffff);
        let c3 = Rgb::from_hex(0xffa000);
        let p = Palette::build(c1, c2, c3);
        assert_eq!(p.get(0), c1);
        assert_eq!(p.get(20), c2);
        assert_eq!(p.get(40), c3);
    }

    #[test]
    fn palette_constant_anchor_is_uniform() {
        let c = Rgb::from_hex(0x123456);
        let p = Palette::build(c, c, c);
        for i in 0..60 {
            assert_eq!(p.get(i), c);
        }
    }

    #[test]
    fn palette_monotonic_channels_per_segment() {
        let c1 = Rgb::new(0, 0, 0);
        let c2 = Rgb::new(255, 100, 50);
        let c3 = Rgb::new(10, 200, 250);
        let p = Palette::build(c1, c2, c3);

        // Each segment's direction per channel is fixed by its two
        // endpoints; every step within the segment must move that
        // channel the same way (or not at all), never reverse.
        for (seg, (start, end)) in
            [(0..20usize, (c1, c2)), (20..40, (c2, c3)), (40..60, (c3, c1))]
        {
            let channel_dir = |s: u8, e: u8| (e as i32 - s as i32).signum();
            let dirs = (
                channel_dir(start.r, end.r),
                channel_dir(start.g, end.g),
                channel_dir(start.b, end.b),
            );

            let mut prev = p.get(seg.start);
            for i in seg.clone().skip(1) {
                let cur = p.get(i);
                let steps = (
                    (cur.r as i32 - prev.r as i32).signum(),
                    (cur.g as i32 - prev.g as i32).signum(),
                    (cur.b as i32 - prev.b as i32).signum(),
                );
                assert!(steps.0 == 0 || steps.0 == dirs.0, "r reversed in segment {seg:?} at {i}");
                assert!(steps.1 == 0 || steps.1 == dirs.1, "g reversed in segment {seg:?} at {i}");
                assert!(steps.2 == 0 || steps.2 == dirs.2, "b reversed in segment {seg:?} at {i}");
                prev = cur;
            }
        }
    }

    #[test]
    fn nudge_from_blue_walks_toward_cyan() {
        // At the exact Blue vertex the "r>0,g=0,b=255" rule doesn't match
        // (r=0), so the ring walk continues into the Blue->Cyan leg.
        let c = Rgb::from_hex(0x0000ff);
        let n1 = nudge(c);
        assert_eq!(n1.to_hex(), 0x0005ff);
        let n2 = nudge(n1);
        assert_eq!(n2.to_hex(), 0x000aff);
    }

    #[test]
    fn nudge_cycles_back_to_a_primary() {
        let mut c = Rgb::from_hex(0x0000ff);
        for _ in 0..51 {
            c = nudge(c);
        }
        let is_primary = (c.r == 0 || c.r == 255)
            && (c.g == 0 || c.g == 255)
            && (c.b == 0 || c.b == 255)
            && c != Rgb::new(0, 0, 0)
            && c != Rgb::new(255, 255, 255);
        assert!(is_primary, "expected a pure hue after 51 nudges, got {c:?}");
    }

    #[test]
    fn hsl_round_trip_is_stable_on_grey() {
        let grey = Rgb::new(128, 128, 128);
        let hsl = rgb_to_hsl(grey);
        assert_eq!(hsl.s, 0.0);
        let back = hsl_to_rgb(hsl);
        // grey has no hue; round trip must preserve lightness exactly.
        assert_eq!(back.r, back.g);
        assert_eq!(back.g, back.b);
    }
}
