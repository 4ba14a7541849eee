use tracing::info;

use crate::config;

/// Load settings, falling back to defaults when the file or environment is
/// unusable. Runs before logging is set up, so problems go to stderr.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("vinyl: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("vinyl: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Record where settings came from once the log is available.
pub fn log_source() {
    match config::resolve_config_path() {
        Some(path) if path.exists() => info!(path = %path.display(), "settings loaded"),
        Some(path) => info!(path = %path.display(), "no config file, using defaults"),
        None => info!("no config path, using defaults"),
    }
}
