use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_vinyl_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", "/tmp/vinyl-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/vinyl-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("vinyl")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("vinyl")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_widget_constants() {
    let s = Settings::default();
    assert_eq!(s.player.tick_ms, 500);
    assert_eq!(s.player.tick_step, 0.5);
    assert_eq!(s.player.initial_volume, 80);
    assert_eq!(s.visualizer.bar_count, 180);
    assert_eq!(s.visualizer.bar_min, 5.0);
    assert_eq!(s.visualizer.bar_max, 35.0);
    assert_eq!(s.landing.spring_stiffness, 100.0);
    assert_eq!(s.landing.spring_damping, 30.0);
    assert_eq!(s.ui.start_view, StartView::Landing);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_view_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
tick_ms = 250
tick_step = 1.0
initial_volume = 40

[visualizer]
bar_count = 90
bar_min = 2.0
bar_max = 12.0

[landing]
scroll_step = 5
compact_width = 100

[ui]
start_view = "now-playing"

[log]
enabled = false
filter = "vinyl=trace"
file = "/tmp/vinyl.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("VINYL__PLAYER__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 250);
    assert_eq!(s.player.tick_step, 1.0);
    assert_eq!(s.player.initial_volume, 40);
    assert_eq!(s.player.volume_step, 5);
    assert_eq!(s.visualizer.bar_count, 90);
    assert_eq!(s.visualizer.bar_min, 2.0);
    assert_eq!(s.visualizer.bar_max, 12.0);
    assert_eq!(s.visualizer.frame_ms, 16);
    assert_eq!(s.landing.scroll_step, 5);
    assert_eq!(s.landing.compact_width, 100);
    assert_eq!(s.ui.start_view, StartView::Player);
    assert!(!s.log.enabled);
    assert_eq!(s.log.filter, "vinyl=trace");
    assert_eq!(s.log.file, Some(std::path::PathBuf::from("/tmp/vinyl.log")));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
tick_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("VINYL__PLAYER__TICK_MS", "100");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 100);
}

#[test]
fn validate_rejects_unusable_values() {
    let mut s = Settings::default();
    s.player.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.initial_volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.visualizer.bar_min = 40.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.visualizer.opacity_max = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.landing.reveal_amount = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.visualizer.bar_max = f64::INFINITY;
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("visualizer.bar_max must be finite"));

    let mut s = Settings::default();
    s.landing.spring_stiffness = f64::INFINITY;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.tick_step = f64::NAN;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.landing.spring_damping = -1.0;
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn default_settings_render_as_loadable_toml() {
    let text = Settings::default().to_toml().unwrap();
    assert!(text.contains("[player]"));
    assert!(text.contains("tick_ms = 500"));
    assert!(!text.contains("file ="));

    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.visualizer.bar_count, 180);
    assert_eq!(parsed.ui.start_view, StartView::Landing);
}
