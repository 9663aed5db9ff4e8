use super::metrics::ThemeMetrics;

/// Family used for text when system fonts are not requested.
pub const DEFAULT_FAMILY: &str = "Inter";
/// Family used for monospace text when system fonts are not requested.
pub const DEFAULT_MONOSPACE_FAMILY: &str = "Roboto Mono";
/// Generic family names handed to the font loader when system fonts are requested.
pub const SYSTEM_FAMILY: &str = "system-ui";
/// Generic monospace family used with system fonts.
pub const SYSTEM_MONOSPACE_FAMILY: &str = "monospace";

/// Weight of a font, on the usual 100..900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular text.
    pub const NORMAL: FontWeight = FontWeight(400);
    /// Slightly emphasized text.
    pub const MEDIUM: FontWeight = FontWeight(500);
    /// Emphasized text.
    pub const BOLD: FontWeight = FontWeight(700);
}

/// A font request. Loading the font is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name.
    pub family: String,
    /// Size in points.
    pub point_size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    fn new(family: &str, point_size: f64, weight: FontWeight) -> Self {
        Self {
            family: family.to_string(),
            point_size,
            weight,
        }
    }
}

/// Semantic text roles a theme provides fonts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// First level heading.
    H1,
    /// Second level heading.
    H2,
    /// Third level heading.
    H3,
    /// Fourth level heading.
    H4,
    /// Fifth level heading.
    H5,
    /// Small text below controls.
    Caption,
    /// Regular text.
    Default,
    /// Code and numbers.
    Monospace,
    /// Emphasized regular text.
    Bold,
}

/// Fonts derived from a theme's metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeFonts {
    h1: FontSpec,
    h2: FontSpec,
    h3: FontSpec,
    h4: FontSpec,
    h5: FontSpec,
    caption: FontSpec,
    default: FontSpec,
    monospace: FontSpec,
    bold: FontSpec,
}

impl ThemeFonts {
    pub(crate) fn derive(metrics: &ThemeMetrics) -> Self {
        let (family, monospace_family) = if metrics.use_system_fonts {
            (SYSTEM_FAMILY, SYSTEM_MONOSPACE_FAMILY)
        } else {
            (DEFAULT_FAMILY, DEFAULT_MONOSPACE_FAMILY)
        };

        Self {
            h1: FontSpec::new(family, metrics.font_size_h1, FontWeight::BOLD),
            h2: FontSpec::new(family, metrics.font_size_h2, FontWeight::BOLD),
            h3: FontSpec::new(family, metrics.font_size_h3, FontWeight::BOLD),
            h4: FontSpec::new(family, metrics.font_size_h4, FontWeight::BOLD),
            h5: FontSpec::new(family, metrics.font_size_h5, FontWeight::MEDIUM),
            caption: FontSpec::new(family, metrics.font_size_s1, FontWeight::NORMAL),
            default: FontSpec::new(family, metrics.font_size, FontWeight::NORMAL),
            monospace: FontSpec::new(
                monospace_family,
                metrics.font_size_monospace,
                FontWeight::NORMAL,
            ),
            bold: FontSpec::new(family, metrics.font_size, FontWeight::BOLD),
        }
    }

    /// Font for a text role.
    pub fn get(&self, role: TextRole) -> &FontSpec {
        match role {
            TextRole::H1 => &self.h1,
            TextRole::H2 => &self.h2,
            TextRole::H3 => &self.h3,
            TextRole::H4 => &self.h4,
            TextRole::H5 => &self.h5,
            TextRole::Caption => &self.caption,
            TextRole::Default => &self.default,
            TextRole::Monospace => &self.monospace,
            TextRole::Bold => &self.bold,
        }
    }
}
