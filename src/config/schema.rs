use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vinyl/config.toml` or `~/.config/vinyl/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VINYL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub visualizer: VisualizerSettings,
    pub landing: LandingSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Period of the simulated progress clock (milliseconds).
    pub tick_ms: u64,
    /// Progress units (percent) added on every tick.
    pub tick_step: f64,
    /// Volume the player starts with, `0..=100`. Zero starts muted.
    pub initial_volume: u8,
    /// Amount `+` / `-` change the volume by.
    pub volume_step: u8,
    /// Percent `H` / `L` move the progress by.
    pub seek_step: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            tick_step: 0.5,
            initial_volume: 80,
            volume_step: 5,
            seek_step: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Period of the redraw loop while playing (milliseconds).
    pub frame_ms: u64,
    /// Number of radial segments around the disc.
    pub bar_count: usize,
    /// Shortest outward segment length (canvas units).
    pub bar_min: f64,
    /// Upper bound (exclusive) of the outward segment length.
    pub bar_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Gap between the canvas edge and the ring.
    pub radius_inset: f64,
    /// Side of the square canvas the ring is laid out on.
    pub canvas_size: f64,
    /// Seconds per full disc revolution while playing.
    pub revolution_secs: f64,
    /// Seconds per glow pulse while playing.
    pub pulse_secs: f64,
    /// Fixed RNG seed for reproducible bar patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            bar_count: 180,
            bar_min: 5.0,
            bar_max: 35.0,
            opacity_min: 0.5,
            opacity_max: 1.0,
            radius_inset: 10.0,
            canvas_size: 300.0,
            revolution_secs: 20.0,
            pulse_secs: 2.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LandingSettings {
    /// Period of the landing animation loop (milliseconds).
    pub frame_ms: u64,
    /// Rows scrolled per `j` / `k`.
    pub scroll_step: u16,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    /// Fraction of a section that has to be visible before it reveals.
    pub reveal_amount: f64,
    /// Pixels represented by one terminal row when converting offsets.
    pub pixels_per_row: f64,
    /// Below this width the navigation collapses into a menu.
    pub compact_width: u16,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            scroll_step: 3,
            spring_stiffness: 100.0,
            spring_damping: 30.0,
            reveal_amount: 0.2,
            pixels_per_row: 16.0,
            compact_width: 80,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which view is shown on startup.
    pub start_view: StartView,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartView {
    #[default]
    #[serde(alias = "home", alias = "page")]
    Landing,
    #[serde(alias = "music", alias = "now-playing")]
    Player,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    pub enabled: bool,
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Log file; defaults to `$XDG_STATE_HOME/vinyl/vinyl.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            filter: "info".to_string(),
            file: None,
        }
    }
}
