use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{VinylError, VinylResult};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `VINYL__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> VinylResult<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("VINYL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the timers, visualizer or landing math cannot work with.
    pub fn validate(&self) -> VinylResult<()> {
        let p = &self.player;
        let v = &self.visualizer;
        let l = &self.landing;
        for (key, value) in [
            ("player.tick_step", p.tick_step),
            ("player.seek_step", p.seek_step),
            ("visualizer.bar_min", v.bar_min),
            ("visualizer.bar_max", v.bar_max),
            ("visualizer.radius_inset", v.radius_inset),
            ("visualizer.canvas_size", v.canvas_size),
            ("visualizer.revolution_secs", v.revolution_secs),
            ("visualizer.pulse_secs", v.pulse_secs),
            ("landing.spring_stiffness", l.spring_stiffness),
            ("landing.spring_damping", l.spring_damping),
            ("landing.pixels_per_row", l.pixels_per_row),
        ] {
            if !value.is_finite() {
                return Err(VinylError::validation(format!("{key} must be finite")));
            }
        }

        if p.tick_ms == 0 {
            return Err(VinylError::validation("player.tick_ms must be >= 1"));
        }
        if !(p.tick_step > 0.0) {
            return Err(VinylError::validation("player.tick_step must be > 0"));
        }
        if p.initial_volume > 100 {
            return Err(VinylError::validation(
                "player.initial_volume must be within 0..=100",
            ));
        }
        if !(p.seek_step >= 0.0) {
            return Err(VinylError::validation("player.seek_step must be >= 0"));
        }

        if v.frame_ms == 0 {
            return Err(VinylError::validation("visualizer.frame_ms must be >= 1"));
        }
        if v.bar_count == 0 {
            return Err(VinylError::validation("visualizer.bar_count must be >= 1"));
        }
        if !(v.bar_min >= 0.0 && v.bar_min <= v.bar_max) {
            return Err(VinylError::validation(
                "visualizer.bar_min must be >= 0 and <= visualizer.bar_max",
            ));
        }
        if !(0.0..=1.0).contains(&v.opacity_min)
            || !(0.0..=1.0).contains(&v.opacity_max)
            || v.opacity_min > v.opacity_max
        {
            return Err(VinylError::validation(
                "visualizer opacity range must be an ordered range within 0..=1",
            ));
        }
        if !(v.canvas_size > 0.0) || !(v.revolution_secs > 0.0) || !(v.pulse_secs > 0.0) {
            return Err(VinylError::validation(
                "visualizer.canvas_size, revolution_secs and pulse_secs must be > 0",
            ));
        }

        if l.frame_ms == 0 {
            return Err(VinylError::validation("landing.frame_ms must be >= 1"));
        }
        if !(l.spring_stiffness > 0.0) || !(l.spring_damping > 0.0) {
            return Err(VinylError::validation(
                "landing spring stiffness and damping must be > 0",
            ));
        }
        if !(l.reveal_amount > 0.0 && l.reveal_amount <= 1.0) {
            return Err(VinylError::validation(
                "landing.reveal_amount must be within (0, 1]",
            ));
        }
        if !(l.pixels_per_row > 0.0) {
            return Err(VinylError::validation("landing.pixels_per_row must be > 0"));
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> VinylResult<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Resolve the config path from `VINYL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VINYL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/vinyl/config.toml`
/// or `~/.config/vinyl/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("vinyl").join("config.toml"))
}
