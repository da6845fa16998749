//! The reference presentation binary: opens a `minifb` window, maps
//! concrete keys to `InputEvent`s (the mapping itself is out of scope
//! for the core, §6), runs the frame loop and uploads the image.
//!
//! Grounded in `iingles-learning-fractal/src/visualizer.rs`'s
//! `spawn_visualizer`/`render_julia` window-and-buffer-upload idiom,
//! and `af-app/src/cli.rs`/`af-app/src/main.rs` for the CLI and
//! `env_logger` setup.

use clap::Parser;
use fractal_workbench::app::Family;
use fractal_workbench::variation::VariationKind;
use fractal_workbench::{App, AppConfig, InputEvent};
use minifb::{Key, Window, WindowOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "workbench", about = "Interactive fractal-rendering workbench")]
struct Cli {
    /// Optional TOML config file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logging verbosity: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn key_to_event(window: &Window) -> Option<InputEvent> {
    for (key, event) in [
        (Key::R, InputEvent::Redraw),
        (Key::Equal, InputEvent::IncreaseSpeed),
        (Key::Minus, InputEvent::DecreaseSpeed),
        (Key::Key0, InputEvent::ResetSpeed),
        (Key::Up, InputEvent::ShiftUp),
        (Key::Down, InputEvent::ShiftDown),
        (Key::Left, InputEvent::ShiftLeft),
        (Key::Right, InputEvent::ShiftRight),
        (Key::F, InputEvent::FreezeUnfreeze),
        (Key::Z, InputEvent::ZoomIn),
        (Key::X, InputEvent::ZoomOut),
        (Key::S, InputEvent::ResetScale),
        (Key::C, InputEvent::Constant),
        (Key::Key1, InputEvent::Colour1),
        (Key::Key2, InputEvent::Colour2),
        (Key::Key3, InputEvent::Colour3),
        (Key::Key4, InputEvent::ResetColours),
        (Key::T, InputEvent::TotalReset),
        (Key::O, InputEvent::Correct),
        (Key::B, InputEvent::Brighten),
        (Key::I, InputEvent::IncAffine),
        (Key::D, InputEvent::DecAffine),
        (Key::G, InputEvent::GenAffine),
        (Key::N, InputEvent::Random),
    ] {
        if window.is_key_pressed(key, minifb::KeyRepeat::No) {
            return Some(event);
        }
    }

    const VARIATION_KEYS: [Key; 22] = [
        Key::A, Key::W, Key::E, Key::H, Key::J, Key::K, Key::L, Key::M,
        Key::P, Key::Q, Key::U, Key::V, Key::Y,
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6, Key::F7, Key::F8, Key::F9,
    ];
    for (key, kind) in VARIATION_KEYS.iter().zip(VariationKind::ALL.iter()) {
        if window.is_key_pressed(*key, minifb::KeyRepeat::No) {
            return Some(InputEvent::Variation(*kind));
        }
    }

    None
}

fn upload(window: &mut Window, app: &App, w: usize, h: usize) {
    let surface = app.active_surface();
    let buffer: Vec<u32> = surface
        .pixels()
        .iter()
        .map(|p| ((p.r as u32) << 16) | ((p.g as u32) << 8) | (p.b as u32))
        .collect();
    let _ = window.update_with_buffer(&buffer, w, h);
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let config = match &cli.config {
        Some(path) => match AppConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    let mut app = match App::new(&config) {
        Ok(a) => a,
        Err(e) => {
            log::error!("failed to initialise the workbench: {e}");
            std::process::exit(1);
        }
    };

    let w = config.width as usize;
    let h = config.height as usize;

    let mut window = Window::new("Fractal Workbench", w, h, WindowOptions::default())
        .unwrap_or_else(|e| {
            log::error!("failed to open window: {e}");
            std::process::exit(1);
        });

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Tab, minifb::KeyRepeat::No) {
            let next = match app.active() {
                Family::Julia => Family::Flame,
                Family::Flame => Family::Julia,
            };
            app.set_active(next);
            log::info!("switched to {next:?}");
        }

        if let Some(event) = key_to_event(&window) {
            app.apply_input(event);
        }

        app.tick();
        upload(&mut window, &app, w, h);

        std::thread::sleep(Duration::from_millis(app.sleep_millis()));
    }
}
