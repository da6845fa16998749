//! The input reducer's vocabulary (component I): the abstract event
//! tags of §6 and the routing table of §4.I/§7 that decides which
//! family an event targets.
//!
//! The concrete key bindings are explicitly out of scope (§1, §6) —
//! `src/bin/workbench.rs` owns the mapping from `minifb` keys to
//! these tags. `app.rs` owns the actual reducer (`apply_input`),
//! since applying an event requires mutable access to both engines.

use crate::variation::VariationKind;

/// One tagged input event, one per keypress (§6), plus the two system
/// events `Quit`/`Resize`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Redraw,
    IncreaseSpeed,
    DecreaseSpeed,
    ResetSpeed,
    ShiftUp,
    ShiftDown,
    ShiftLeft,
    ShiftRight,
    FreezeUnfreeze,
    ZoomIn,
    ZoomOut,
    ResetScale,
    Constant,
    Colour1,
    Colour2,
    Colour3,
    ResetColours,
    TotalReset,
    Correct,
    Brighten,
    IncAffine,
    DecAffine,
    GenAffine,
    Variation(VariationKind),
    Random,
    Quit,
    Resize(u32, u32),
}

/// Which family an event's effect belongs to, per §4.I's table. Events
/// with no listed flame effect are `Family::Julia`-only, and vice
/// versa; pan/zoom/reset/freeze/redraw are `Shared` — they apply to
/// whichever family is presently active (§7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routing {
    Shared,
    JuliaOnly,
    FlameOnly,
    System,
}

/// Looks up the routing for an event, per §4.I's effect table.
pub fn routing(event: &InputEvent) -> Routing {
    use InputEvent::*;
    match event {
        Redraw
        | ShiftUp
        | ShiftDown
        | ShiftLeft
        | ShiftRight
        | ZoomIn
        | ZoomOut
        | ResetScale
        | FreezeUnfreeze => Routing::Shared,

        Constant | Colour1 | Colour2 | Colour3 | ResetColours | TotalReset => Routing::JuliaOnly,

        Correct | Brighten | IncAffine | DecAffine | GenAffine | Variation(_) | Random => {
            Routing::FlameOnly
        }

        IncreaseSpeed | DecreaseSpeed | ResetSpeed | Quit | Resize(_, _) => Routing::System,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_zoom_are_shared() {
        assert_eq!(routing(&InputEvent::ShiftUp), Routing::Shared);
        assert_eq!(routing(&InputEvent::ZoomIn), Routing::Shared);
        assert_eq!(routing(&InputEvent::ResetScale), Routing::Shared);
    }

    #[test]
    fn colour_and_constant_are_julia_only() {
        assert_eq!(routing(&InputEvent::Constant), Routing::JuliaOnly);
        assert_eq!(routing(&InputEvent::Colour1), Routing::JuliaOnly);
        assert_eq!(routing(&InputEvent::TotalReset), Routing::JuliaOnly);
    }

    #[test]
    fn affine_and_variation_events_are_flame_only() {
        assert_eq!(routing(&InputEvent::IncAffine), Routing::FlameOnly);
        assert_eq!(
            routing(&InputEvent::Variation(VariationKind::Swirl)),
            Routing::FlameOnly
        );
        assert_eq!(routing(&InputEvent::Random), Routing::FlameOnly);
    }

    #[test]
    fn speed_and_quit_are_system_events() {
        assert_eq!(routing(&InputEvent::IncreaseSpeed), Routing::System);
        assert_eq!(routing(&InputEvent::Quit), Routing::System);
        assert_eq!(routing(&InputEvent::Resize(800, 600)), Routing::System);
    }
}
