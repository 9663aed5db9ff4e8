//! # Theme
//!
//! The [Theme] is a plain value holding everything the style needs to paint:
//! authored colors ([ThemeColors]), authored metrics ([ThemeMetrics]) and
//! identification metadata ([ThemeMeta]). Fonts ([ThemeFonts]) and the native
//! palette ([Palette]) are derived from those once, on construction.
//!
//! Themes are never mutated in place. The `with_*` methods consume a theme and
//! return a new one with the derived data rebuilt, so a theme shared by many
//! widgets can be swapped out as a whole but never seen half-updated.
//!
//! ## Usage
//!
//! ```rust
//! use plume_theme::theme::Theme;
//! use vello::peniko::Color;
//!
//! let theme = Theme::light().with_colors(|colors| {
//!     colors.primary = Color::from_rgb8(255, 0, 0);
//! });
//!
//! // Transparent variants always follow their base color.
//! assert_eq!(theme.colors().primary_transparent().components[3], 0.0);
//! ```

mod builtin;
mod colors;
mod fonts;
mod metrics;
mod palette;

pub use builtin::BUILTIN_THEMES;
pub use colors::ThemeColors;
pub use fonts::{FontSpec, FontWeight, TextRole, ThemeFonts};
pub use metrics::{AnimationKind, ControlSize, ThemeMetrics};
pub use palette::{ColorGroup, Palette, PaletteRole};

/// Identification of a theme when several are loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeMeta {
    /// Display name.
    pub name: String,
    /// Version string, free form.
    pub version: String,
    /// Author, free form.
    pub author: String,
}

impl ThemeMeta {
    /// Create metadata from its three fields.
    pub fn new(name: impl Into<String>, version: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
        }
    }
}

/// A complete visual skin.
///
/// Two themes are equal when their metadata, colors and metrics are equal.
/// Fonts and palette are derived from those and are left out of the comparison.
#[derive(Debug, Clone)]
pub struct Theme {
    meta: ThemeMeta,
    colors: ThemeColors,
    metrics: ThemeMetrics,
    fonts: ThemeFonts,
    palette: Palette,
}

impl Theme {
    /// Build a theme from its authored parts.
    pub fn new(meta: ThemeMeta, colors: ThemeColors, metrics: ThemeMetrics) -> Self {
        let fonts = ThemeFonts::derive(&metrics);
        let palette = Palette::derive(&colors);
        Self {
            meta,
            colors,
            metrics,
            fonts,
            palette,
        }
    }

    /// The compiled-in light theme. Every document key missing from a loaded
    /// theme falls back to this theme's value.
    pub fn light() -> Self {
        Self::new(
            ThemeMeta::new("Light", "1.0.0", ""),
            ThemeColors::default(),
            ThemeMetrics::default(),
        )
    }

    /// Identification metadata.
    pub fn meta(&self) -> &ThemeMeta {
        &self.meta
    }

    /// Authored colors.
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Authored metrics.
    pub fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    /// Fonts derived from the metrics.
    pub fn fonts(&self) -> &ThemeFonts {
        &self.fonts
    }

    /// Font for a text role.
    pub fn font(&self, role: TextRole) -> &FontSpec {
        self.fonts.get(role)
    }

    /// Native palette derived from the colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns a copy of this theme with edited colors.
    pub fn with_colors(self, edit: impl FnOnce(&mut ThemeColors)) -> Self {
        let mut colors = self.colors;
        edit(&mut colors);
        Self::new(self.meta, colors, self.metrics)
    }

    /// Returns a copy of this theme with edited metrics.
    pub fn with_metrics(self, edit: impl FnOnce(&mut ThemeMetrics)) -> Self {
        let mut metrics = self.metrics;
        edit(&mut metrics);
        Self::new(self.meta, self.colors, metrics)
    }

    /// Returns a copy of this theme with different metadata.
    pub fn with_meta(self, meta: ThemeMeta) -> Self {
        Self { meta, ..self }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.colors == other.colors && self.metrics == other.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::peniko::Color;

    #[test]
    fn transparent_variants_follow_base() {
        let theme = Theme::light().with_colors(|colors| {
            colors.primary = Color::from_rgba8(12, 34, 56, 200);
        });

        for (base, clear) in theme.colors().transparent_pairs() {
            assert_eq!(clear.components[..3], base.components[..3]);
            assert_eq!(clear.components[3], 0.0);
        }
        assert_eq!(
            crate::color::rgba8(theme.colors().primary_transparent()),
            [12, 34, 56, 0]
        );
    }

    #[test]
    fn equality_ignores_derived_data() {
        let a = Theme::light();
        let b = Theme::light();
        assert_eq!(a, b);

        let c = Theme::light().with_colors(|colors| colors.focus = Color::BLACK);
        assert_ne!(a, c);
    }

    #[test]
    fn with_metrics_rebuilds_fonts() {
        let theme = Theme::light().with_metrics(|metrics| metrics.font_size = 20.0);
        assert_eq!(theme.font(TextRole::Default).point_size, 20.0);
        assert_eq!(theme.font(TextRole::Bold).weight, FontWeight::BOLD);
    }

    #[test]
    fn with_colors_rebuilds_palette() {
        let red = Color::from_rgb8(255, 0, 0);
        let theme = Theme::light().with_colors(|colors| colors.primary = red);
        assert_eq!(
            theme.palette().color(ColorGroup::Active, PaletteRole::Highlight),
            red
        );
        assert_eq!(
            theme.palette().color(ColorGroup::Inactive, PaletteRole::Highlight),
            theme.colors().neutral
        );
    }

    #[test]
    fn copies_are_independent() {
        let original = Theme::light();
        let edited = original
            .clone()
            .with_colors(|colors| colors.primary = Color::BLACK);
        assert_ne!(original.colors().primary, edited.colors().primary);
        assert_eq!(original, Theme::light());
    }
}
