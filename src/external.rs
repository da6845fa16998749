//! Out-of-scope collaborators (§1, §6, §9): the windowing/input event
//! source, GPU texture upload, bitmap text, the help-image loader and
//! the BMP file loader are not implemented here. This module only
//! documents the contracts the core assumes of them, grounded in
//! `original_source/load_image.cpp`/`text.cpp`/`lines.cpp`.

use crate::color::Rgb;
use crate::error::CoreError;

/// The core's only dependency on asset storage: a primitive that
/// returns `w*h` greyscale bytes expanded to RGB triples (§6). Used by
/// text/help glyphs only; the core's own state never round-trips
/// through this trait.
pub trait AssetLoader {
    fn load_raw(&self, path: &str, w: u32, h: u32) -> Result<Vec<Rgb>, CoreError>;
}

/// The antialiased-line family (Bezier subdivision, angled lines,
/// pixel-blend plots) belongs to the external drawing-utilities
/// collaborator, not the core (§9). It is specified only by the
/// clipped, coverage-blended primitive the core itself exposes:
/// [`crate::surface::Surface::draw_pixel`]. A conforming drawing
/// utility composes arbitrarily many calls to that primitive; the
/// core neither calls it nor depends on anything beyond its signature.
pub trait LineDrawer {
    fn draw_line(&self, surface: &mut crate::surface::Surface, from: (f64, f64), to: (f64, f64), colour: Rgb);
}

/// The bitmap-text/help-image overlay (`text.cpp`'s glyph blitting)
/// draws a fixed 3x5 pixel font and a pre-rendered help image onto the
/// instruction panel (§6: a 320x760 buffer distinct from the main
/// view). The core never writes to that buffer.
pub trait TextOverlay {
    fn draw_glyph(&self, surface: &mut crate::surface::Surface, x: u32, y: u32, ch: char, colour: Rgb);
}
