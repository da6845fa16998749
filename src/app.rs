//! The frame loop and reducer (components I/J): `App` owns both
//! engines, applies input events per the §4.I/§7 routing table, and
//! advances exactly one iterate per tick.
//!
//! Grounded in `iingles-learning-fractal/src/visualizer.rs`'s
//! `spawn_visualizer` frame loop (open window, per-frame compute,
//! upload), generalised from a single Julia renderer into the
//! two-family engine this spec calls for.

use crate::affine::Ifs;
use crate::color::{Palette, Rgb};
use crate::config::AppConfig;
use crate::error::CoreError;
use crate::input::{routing, InputEvent, Routing};
use crate::julia::{init_julia, step_julia, OrbitField};
use crate::pool::{advance_flame, Pool};
use crate::rng::PrngHandle;
use crate::surface::Surface;
use crate::tonemap::{brighten, correct};
use crate::variation::{Variation, VariationKind};
use log::info;

/// Which of the two fractal families is currently presented. Family
/// selection is not part of the core's documented `InputEvent`
/// taxonomy (§7) — the reference binary toggles this directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Julia,
    Flame,
}

const SPEED_STEP_UNITS: u32 = 1;
const MIN_AFFINE_COUNT: usize = 2;
const MAX_AFFINE_COUNT: usize = 11;

pub struct App {
    w: u32,
    h: u32,
    active: Family,
    rng: PrngHandle,

    palette: Palette,
    default_anchors: [Rgb; 3],

    julia_view: crate::view::JuliaView,
    julia_surface: Surface,
    julia_field: OrbitField,
    julia_frame: u64,
    frozen: bool,

    flame_view: crate::view::FlameView,
    flame_surface: Surface,
    pool: Pool,
    ifs: Ifs,
    variation: Variation,
    corrected: bool,

    sleep_units: u32,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let w = config.width;
        let h = config.height;
        let mut rng = PrngHandle::from_entropy();

        let default_anchors = [
            Rgb::from_hex(config.palette_anchors[0]),
            Rgb::from_hex(config.palette_anchors[1]),
            Rgb::from_hex(config.palette_anchors[2]),
        ];
        let palette = Palette::build(default_anchors[0], default_anchors[1], default_anchors[2]);

        let mut julia_view = crate::view::JuliaView::new(w, h);
        julia_view.constant_index = config.initial_constant_index % 14;
        let (cx, cy) = julia_view.constant();
        julia_view.radius = crate::julia::escape_radius(cx, cy);

        let mut julia_surface = Surface::new(w, h)?;
        let mut julia_field = OrbitField::new(w, h);
        init_julia(
            &mut julia_surface,
            &mut julia_field,
            julia_view.shift_x,
            julia_view.shift_y,
            julia_view.scale,
            julia_view.radius,
            &palette,
        );

        let ifs = Ifs::generate(config.initial_affine_count.clamp(1, 30), &mut rng);
        let flame_surface = Surface::new(w, h)?;
        let mut pool = Pool::new(w, h);
        pool.seed(&ifs, &mut rng);

        info!("workbench initialised at {w}x{h}, {} affines", ifs.count());

        Ok(App {
            w,
            h,
            active: Family::Julia,
            rng,
            palette,
            default_anchors,
            julia_view,
            julia_surface,
            julia_field,
            julia_frame: 0,
            frozen: false,
            flame_view: crate::view::FlameView::new(),
            flame_surface,
            pool,
            ifs,
            variation: Variation::Single(VariationKind::Linear),
            corrected: false,
            sleep_units: config.frame_sleep_units,
        })
    }

    pub fn active(&self) -> Family {
        self.active
    }

    /// Toggles which family is presented. Outside the documented
    /// `InputEvent` taxonomy (§7) — called directly by the reference
    /// binary, not through `apply_input`.
    pub fn set_active(&mut self, family: Family) {
        self.active = family;
    }

    pub fn active_surface(&self) -> &Surface {
        match self.active {
            Family::Julia => &self.julia_surface,
            Family::Flame => &self.flame_surface,
        }
    }

    pub fn sleep_millis(&self) -> u64 {
        self.sleep_units as u64 * 10
    }

    /// Applies one input event per §4.I's routing table (§7: shared
    /// events follow the active family, family-specific events always
    /// target their documented family regardless of what's active).
    pub fn apply_input(&mut self, event: InputEvent) {
        match routing(&event) {
            Routing::Shared => self.apply_shared(event),
            Routing::JuliaOnly => self.apply_julia_only(event),
            Routing::FlameOnly => self.apply_flame_only(event),
            Routing::System => self.apply_system(event),
        }
    }

    fn reinit_julia(&mut self) {
        init_julia(
            &mut self.julia_surface,
            &mut self.julia_field,
            self.julia_view.shift_x,
            self.julia_view.shift_y,
            self.julia_view.scale,
            self.julia_view.radius,
            &self.palette,
        );
        self.julia_frame = 0;
    }

    fn reseed_flame(&mut self) {
        self.flame_surface.reset_counters();
        self.pool.seed(&self.ifs, &mut self.rng);
        self.corrected = false;
    }

    fn apply_shared(&mut self, event: InputEvent) {
        match self.active {
            Family::Julia => match event {
                InputEvent::Redraw => {
                    self.reinit_julia();
                    self.frozen = false;
                }
                InputEvent::ShiftUp => {
                    self.julia_view.shift_up();
                    self.reinit_julia();
                    self.frozen = false;
                }
                InputEvent::ShiftDown => {
                    self.julia_view.shift_down();
                    self.reinit_julia();
                    self.frozen = false;
                }
                InputEvent::ShiftLeft => {
                    self.julia_view.shift_left();
                    self.reinit_julia();
                    self.frozen = false;
                }
                InputEvent::ShiftRight => {
                    self.julia_view.shift_right();
                    self.reinit_julia();
                    self.frozen = false;
                }
                InputEvent::ZoomIn => {
                    self.julia_view.zoom_in();
                    self.reinit_julia();
                }
                InputEvent::ZoomOut => {
                    self.julia_view.zoom_out();
                    self.reinit_julia();
                }
                InputEvent::ResetScale => {
                    self.julia_view.reset_scale(self.w, self.h);
                    self.reinit_julia();
                }
                InputEvent::FreezeUnfreeze => {
                    self.frozen = !self.frozen;
                }
                _ => unreachable!("non-shared event routed as shared"),
            },
            Family::Flame => match event {
                InputEvent::Redraw => {}
                InputEvent::ShiftUp => {
                    self.flame_view.shift_up();
                    self.reseed_flame();
                }
                InputEvent::ShiftDown => {
                    self.flame_view.shift_down();
                    self.reseed_flame();
                }
                InputEvent::ShiftLeft => {
                    self.flame_view.shift_left();
                    self.reseed_flame();
                }
                InputEvent::ShiftRight => {
                    self.flame_view.shift_right();
                    self.reseed_flame();
                }
                InputEvent::ZoomIn => {
                    self.flame_view.zoom_in();
                    self.reseed_flame();
                }
                InputEvent::ZoomOut => {
                    self.flame_view.zoom_out();
                    self.reseed_flame();
                }
                InputEvent::ResetScale => {
                    self.flame_view.reset_scale();
                    self.reseed_flame();
                }
                // Open question #4: the flame binding of FREEZE is left
                // undefined by this spec; it is not wired to `corrected`.
                InputEvent::FreezeUnfreeze => {}
                _ => unreachable!("non-shared event routed as shared"),
            },
        }
    }

    fn apply_julia_only(&mut self, event: InputEvent) {
        match event {
            InputEvent::Constant => {
                self.julia_view.advance_constant();
                self.reinit_julia();
            }
            InputEvent::Colour1 => {
                self.palette.nudge_anchor(0);
                self.reinit_julia();
            }
            InputEvent::Colour2 => {
                self.palette.nudge_anchor(1);
                self.reinit_julia();
            }
            InputEvent::Colour3 => {
                self.palette.nudge_anchor(2);
                self.reinit_julia();
            }
            InputEvent::ResetColours => {
                self.palette = Palette::build(
                    self.default_anchors[0],
                    self.default_anchors[1],
                    self.default_anchors[2],
                );
                self.reinit_julia();
            }
            InputEvent::TotalReset => {
                self.julia_view.total_reset(self.w, self.h);
                self.palette = Palette::build(
                    self.default_anchors[0],
                    self.default_anchors[1],
                    self.default_anchors[2],
                );
                self.frozen = false;
                self.reinit_julia();
            }
            _ => unreachable!("non-Julia event routed as Julia-only"),
        }
    }

    fn apply_flame_only(&mut self, event: InputEvent) {
        match event {
            InputEvent::Correct => {
                correct(&mut self.flame_surface);
                self.corrected = true;
            }
            InputEvent::Brighten => {
                if self.corrected {
                    brighten(&mut self.flame_surface);
                }
            }
            InputEvent::IncAffine => {
                if self.ifs.grow_by_one(&mut self.rng) {
                    self.reseed_flame();
                }
            }
            InputEvent::DecAffine => {
                if self.ifs.shrink_by_one() {
                    self.reseed_flame();
                }
            }
            InputEvent::GenAffine => {
                let count = MIN_AFFINE_COUNT + self.rng.index(MAX_AFFINE_COUNT - MIN_AFFINE_COUNT + 1);
                self.ifs.regenerate(count, &mut self.rng);
                self.reseed_flame();
            }
            InputEvent::Variation(kind) => {
                self.variation = Variation::Single(kind);
                self.reseed_flame();
            }
            InputEvent::Random => {
                let i1 = self.rng.index(VariationKind::ALL.len());
                let i2 = self.rng.index(VariationKind::ALL.len());
                let p = self.rng.uniform(0.0, 1.0);
                self.variation =
                    Variation::Random(VariationKind::ALL[i1], VariationKind::ALL[i2], p);
                self.reseed_flame();
            }
            _ => unreachable!("non-flame event routed as flame-only"),
        }
    }

    fn apply_system(&mut self, event: InputEvent) {
        match event {
            InputEvent::IncreaseSpeed => {
                self.sleep_units = self.sleep_units.saturating_add(SPEED_STEP_UNITS);
            }
            InputEvent::DecreaseSpeed => {
                self.sleep_units = self.sleep_units.saturating_sub(SPEED_STEP_UNITS);
            }
            InputEvent::ResetSpeed => {
                self.sleep_units = AppConfig::default().frame_sleep_units;
            }
            InputEvent::Resize(_, _) | InputEvent::Quit => {
                // Handled by the presentation layer; the core keeps no
                // window handle to resize or process to quit.
            }
            _ => unreachable!("non-system event routed as system"),
        }
    }

    /// Advances one iterate of whichever family is active, per §4.J's
    /// "if not frozen and not corrected-mode" gate.
    pub fn tick(&mut self) {
        match self.active {
            Family::Julia => {
                if !self.frozen {
                    let (cx, cy) = self.julia_view.constant();
                    step_julia(
                        &mut self.julia_surface,
                        &mut self.julia_field,
                        cx,
                        cy,
                        self.julia_view.radius,
                        &self.palette,
                        self.julia_frame,
                    );
                    self.julia_frame += 1;
                }
            }
            Family::Flame => {
                if !self.corrected {
                    advance_flame(
                        &mut self.flame_surface,
                        &mut self.pool,
                        &self.ifs,
                        self.variation,
                        self.flame_view.scale,
                        self.flame_view.dx,
                        self.flame_view.dy,
                        &mut self.rng,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_julia_with_a_black_center_frame() {
        let cfg = AppConfig { width: 64, height: 64, ..AppConfig::default() };
        let app = App::new(&cfg).unwrap();
        assert_eq!(app.active(), Family::Julia);
    }

    #[test]
    fn tick_advances_the_julia_frame_counter() {
        let cfg = AppConfig { width: 32, height: 32, ..AppConfig::default() };
        let mut app = App::new(&cfg).unwrap();
        let before = app.julia_frame;
        app.tick();
        assert_eq!(app.julia_frame, before + 1);
    }

    #[test]
    fn freeze_stops_julia_ticks() {
        let cfg = AppConfig { width: 32, height: 32, ..AppConfig::default() };
        let mut app = App::new(&cfg).unwrap();
        app.apply_input(InputEvent::FreezeUnfreeze);
        let before = app.julia_frame;
        app.tick();
        assert_eq!(app.julia_frame, before);
    }

    #[test]
    fn inc_affine_routes_regardless_of_active_family() {
        let cfg = AppConfig { width: 32, height: 32, initial_affine_count: 3, ..AppConfig::default() };
        let mut app = App::new(&cfg).unwrap();
        assert_eq!(app.active(), Family::Julia);
        app.apply_input(InputEvent::IncAffine);
        assert_eq!(app.ifs.count(), 4);
    }

    #[test]
    fn correct_then_tick_skips_the_chaos_game_step() {
        let cfg = AppConfig { width: 16, height: 16, ..AppConfig::default() };
        let mut app = App::new(&cfg).unwrap();
        app.set_active(Family::Flame);
        app.apply_input(InputEvent::Correct);
        assert!(app.corrected);
    }
}
