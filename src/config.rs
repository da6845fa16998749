//! Ambient configuration (§3.3): the handful of values the original
//! program hard-coded as macros/literals, made loadable from an
//! optional TOML file, mirroring `af-app/src/cli.rs`'s `--config` /
//! `RenderConfig::default()` pattern.
//!
//! This configures *startup* only — §6 says persisted state is none,
//! and `AppConfig` is never written back out, so it doesn't reintroduce
//! the persistence the spec excludes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;

/// Startup configuration for the workbench.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Main view width/height (§3: both default to 760).
    pub width: u32,
    pub height: u32,
    /// Inter-frame sleep floor in 10ms units before any speed-control
    /// adjustment (§4.I/§4.J).
    pub frame_sleep_units: u32,
    /// Starting affine count, drawn once at process start the same
    /// way `GEN_AFFINE` draws it later (§4.I: `U[2,11]`).
    pub initial_affine_count: usize,
    /// The three starting palette anchors, packed hex.
    pub palette_anchors: [u32; 3],
    /// Index into the 14-entry Julia constant preset pool to start on.
    pub initial_constant_index: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            width: 760,
            height: 760,
            frame_sleep_units: 3,
            initial_affine_count: 6,
            palette_anchors: [0x0000ff, 0xffffff, 0xffa000],
            initial_constant_index: 0,
        }
    }
}

impl AppConfig {
    /// Loads a config from a TOML file, falling back to
    /// [`AppConfig::default`] for any field the file omits.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|source| CoreError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_original_main_view_size() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.width, 760);
        assert_eq!(cfg.height, 760);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = std::env::temp_dir().join("fractal_workbench_test_config_bad.toml");
        std::fs::write(&dir, "width = [[[").unwrap();
        let err = AppConfig::load(&dir).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn load_fills_in_omitted_fields_from_defaults() {
        let dir = std::env::temp_dir().join("fractal_workbench_test_config_partial.toml");
        std::fs::write(&dir, "width = 400\nheight = 400\n").unwrap();
        let cfg = AppConfig::load(&dir).unwrap();
        assert_eq!(cfg.width, 400);
        assert_eq!(cfg.initial_affine_count, AppConfig::default().initial_affine_count);
        let _ = std::fs::remove_file(&dir);
    }
}
