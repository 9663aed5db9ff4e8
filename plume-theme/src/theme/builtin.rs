use super::Theme;
use crate::error::{ThemeError, ThemeResult};

const DARK_DOCUMENT: &str = include_str!("../../themes/dark.json");

/// Names accepted by [Theme::builtin].
pub const BUILTIN_THEMES: &[&str] = &["light", "dark"];

impl Theme {
    /// The bundled dark theme.
    ///
    /// It is stored as a theme document overriding the light defaults, the same
    /// way a user theme would.
    pub fn dark() -> Self {
        match Self::from_json(DARK_DOCUMENT) {
            Ok(theme) => theme,
            Err(err) => {
                log::error!("Bundled dark theme is invalid, using light: {}", err);
                Self::light()
            },
        }
    }

    /// Look up a bundled theme by name, case-insensitively.
    pub fn builtin(name: &str) -> ThemeResult<Self> {
        match name.to_lowercase().as_str() {
            "light" => Ok(Self::light()),
            "dark" => Ok(Self::dark()),
            _ => Err(ThemeError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_differs_from_light() {
        let dark = Theme::dark();
        assert_eq!(dark.meta().name, "Dark");
        assert_ne!(dark, Theme::light());
        assert_ne!(dark.colors().background_main1, Theme::light().colors().background_main1);
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(Theme::builtin("LIGHT").unwrap(), Theme::light());
        assert_eq!(Theme::builtin("dark").unwrap(), Theme::dark());
        assert!(matches!(
            Theme::builtin("solarized"),
            Err(ThemeError::ThemeNotFound { .. })
        ));
    }

    #[test]
    fn every_builtin_name_resolves() {
        for name in BUILTIN_THEMES {
            assert!(Theme::builtin(name).is_ok(), "{name} should resolve");
        }
    }
}
