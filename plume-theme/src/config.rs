//! # Style Configuration
//!
//! Selects the theme and the style-wide defaults from a TOML file and
//! environment variables.
//!
//! ## Environment Variables
//!
//! - `PLUME_STYLE_CONFIG`: path of a TOML configuration file, read first
//! - `PLUME_THEME`: theme source, overriding the file (`light`, `dark`, or `file:<path>`)
//! - `PLUME_ANIMATIONS`: `0`, `false` or `off` disables animations
//! - `PLUME_AUTO_ICON_COLOR`: `none`, `foreground_color` or `text_color`
//!
//! ## Configuration File Format
//!
//! ```toml
//! theme = "file:./themes/ocean.json"
//! animations = true
//! auto_icon_color = "foreground_color"
//! hot_reload = false
//! ```
//!
//! Every field is optional and keeps its default when absent.

use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "PLUME_STYLE_CONFIG";
/// Environment variable selecting the theme source.
pub const THEME_ENV: &str = "PLUME_THEME";
/// Environment variable toggling animations.
pub const ANIMATIONS_ENV: &str = "PLUME_ANIMATIONS";
/// Environment variable selecting the default icon tinting policy.
pub const AUTO_ICON_COLOR_ENV: &str = "PLUME_AUTO_ICON_COLOR";

/// Whether monochrome icons are tinted to match the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoIconColor {
    /// Icons are drawn with their own colors.
    #[default]
    None,
    /// Icons are tinted with the control's foreground color.
    ForegroundColor,
    /// Icons are tinted with the control's text color.
    TextColor,
}

impl AutoIconColor {
    /// Parse the configuration spelling, case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "foreground_color" | "foreground" => Some(Self::ForegroundColor),
            "text_color" | "text" => Some(Self::TextColor),
            _ => None,
        }
    }
}

/// Where the active theme comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeSource {
    /// A bundled theme, by name.
    Builtin(String),
    /// A theme document on disk.
    File(PathBuf),
}

impl ThemeSource {
    /// Parse a theme source: `file:<path>`, a path ending in `.json`, or a bundled theme name.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(path) = text.strip_prefix("file:") {
            ThemeSource::File(PathBuf::from(path))
        } else if text.to_lowercase().ends_with(".json") {
            ThemeSource::File(PathBuf::from(text))
        } else {
            ThemeSource::Builtin(text.to_lowercase())
        }
    }

    /// Produce the theme this source points at.
    pub fn load(&self) -> ThemeResult<Theme> {
        match self {
            ThemeSource::Builtin(name) => Theme::builtin(name),
            ThemeSource::File(path) => Theme::from_file(path),
        }
    }
}

impl Default for ThemeSource {
    fn default() -> Self {
        ThemeSource::Builtin("light".to_string())
    }
}

impl From<String> for ThemeSource {
    fn from(value: String) -> Self {
        ThemeSource::parse(&value)
    }
}

impl From<ThemeSource> for String {
    fn from(value: ThemeSource) -> Self {
        value.to_string()
    }
}

impl Display for ThemeSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeSource::Builtin(name) => write!(f, "{}", name),
            ThemeSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Style-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Source of the active theme.
    pub theme: ThemeSource,
    /// Whether state changes animate. When `false` every transition is instant.
    pub animations: bool,
    /// Icon tinting for widgets that do not choose their own.
    pub auto_icon_color: AutoIconColor,
    /// Reload the theme document when it changes on disk.
    pub hot_reload: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSource::default(),
            animations: true,
            auto_icon_color: AutoIconColor::None,
            hot_reload: false,
        }
    }
}

impl StyleConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration file and environment overrides from the process environment.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [StyleConfig::from_env_or_default], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring style configuration {}: {}", path, err);
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(theme) = lookup(THEME_ENV) {
            config.theme = ThemeSource::parse(&theme);
        }

        if let Some(animations) = lookup(ANIMATIONS_ENV) {
            config.animations = !matches!(
                animations.trim().to_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        if let Some(policy) = lookup(AUTO_ICON_COLOR_ENV) {
            match AutoIconColor::parse(&policy) {
                Some(policy) => config.auto_icon_color = policy,
                None => log::warn!("Unknown {} value '{}'", AUTO_ICON_COLOR_ENV, policy),
            }
        }

        config
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ThemeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the theme source.
    pub fn with_theme(mut self, theme: ThemeSource) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable animations.
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    /// Set the default icon tinting policy.
    pub fn with_auto_icon_color(mut self, policy: AutoIconColor) -> Self {
        self.auto_icon_color = policy;
        self
    }

    /// Load the configured theme.
    pub fn resolve_theme(&self) -> ThemeResult<Theme> {
        self.theme.load()
    }

    /// Load the configured theme, falling back to the light theme on failure.
    pub fn resolve_theme_or_default(&self) -> Theme {
        self.resolve_theme().unwrap_or_else(|err| {
            log::warn!("Cannot load theme '{}', using light: {}", self.theme, err);
            Theme::light()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn parse_theme_sources() {
        assert_eq!(ThemeSource::parse("Dark"), ThemeSource::Builtin("dark".into()));
        assert_eq!(
            ThemeSource::parse("file:/tmp/a.json"),
            ThemeSource::File(PathBuf::from("/tmp/a.json"))
        );
        assert_eq!(
            ThemeSource::parse("themes/ocean.JSON"),
            ThemeSource::File(PathBuf::from("themes/ocean.JSON"))
        );
    }

    #[test]
    fn environment_overrides() {
        let config = StyleConfig::from_lookup(lookup(&[
            (THEME_ENV, "dark"),
            (ANIMATIONS_ENV, "off"),
            (AUTO_ICON_COLOR_ENV, "text_color"),
        ]));
        assert_eq!(config.theme, ThemeSource::Builtin("dark".into()));
        assert!(!config.animations);
        assert_eq!(config.auto_icon_color, AutoIconColor::TextColor);
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(StyleConfig::from_lookup(lookup(&[])), StyleConfig::default());
    }

    #[test]
    fn unknown_builtin_falls_back_to_light() {
        let config = StyleConfig::new().with_theme(ThemeSource::parse("nonexistent"));
        assert!(config.resolve_theme().is_err());
        assert_eq!(config.resolve_theme_or_default(), Theme::light());
    }

    #[test]
    fn toml_round_trip() {
        let config = StyleConfig::new()
            .with_theme(ThemeSource::parse("file:ocean.json"))
            .with_animations(false)
            .with_auto_icon_color(AutoIconColor::ForegroundColor);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("auto_icon_color = \"foreground_color\""));
        let parsed: StyleConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let parsed: StyleConfig = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(parsed.theme, ThemeSource::Builtin("dark".into()));
        assert!(parsed.animations);
        assert!(!parsed.hot_reload);
    }
}
