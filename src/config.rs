use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub logging: LoggingConfig,
    pub keybinds: KeybindsConfig,
}

/// The sampling interval and history depth are fixed and intentionally
/// absent here.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub default_tab: String,
    pub disk_path: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            default_tab: "cpu".to_string(),
            disk_path: PathBuf::from(default_disk_path()),
        }
    }
}

fn default_disk_path() -> &'static str {
    if cfg!(windows) { "C:\\" } else { "/" }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
    pub color_support: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
            color_support: "auto".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub next_tab: String,
    pub prev_tab: String,
    pub cycle_theme: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            next_tab: "Tab".to_string(),
            prev_tab: "BackTab".to_string(),
            cycle_theme: "t".to_string(),
            help: "?".to_string(),
        }
    }
}

/// Parses a keybind name from the config file. Single characters map to
/// themselves; a handful of named keys are recognised case-insensitively.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" | "shift+tab" => Some(KeyCode::BackTab),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("perftrack").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.default_tab, "cpu");
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.colors.color_support, "auto");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert_eq!(config.keybinds.quit, "q");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
default_tab = "processes"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_tab, "processes");
        // Other fields should be defaults
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.keybinds.next_tab, "Tab");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
default_tab = "system"
disk_path = "/home"

[colors]
theme = "light"
color_support = "256"

[logging]
level = "debug"
format = "json"
file = "/tmp/perftrack.log"

[keybinds]
quit = "x"
help = "h"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.disk_path, PathBuf::from("/home"));
        assert_eq!(config.colors.theme, "light");
        assert_eq!(config.colors.color_support, "256");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/perftrack.log"))
        );
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.help, "h");
    }

    #[test]
    fn unknown_interval_keys_are_ignored() {
        let toml_str = r#"
[general]
refresh_rate_ms = 250
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_tab, "cpu");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.colors.theme, "dark");
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("perftrack_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.default_tab, "cpu");
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn parse_key_names() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Tab"), Some(KeyCode::Tab));
        assert_eq!(parse_key("BackTab"), Some(KeyCode::BackTab));
        assert_eq!(parse_key("Escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key("nonsense"), None);
    }
}
