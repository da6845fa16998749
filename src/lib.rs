pub mod affine;
pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod external;
pub mod input;
pub mod julia;
pub mod pool;
pub mod rng;
pub mod surface;
pub mod tonemap;
pub mod variation;
pub mod view;

pub use app::{App, Family};
pub use color::{hsl_to_rgb, rgb_to_hsl, nudge, Hsl, Palette, Rgb};
pub use config::AppConfig;
pub use error::CoreError;
pub use input::InputEvent;
