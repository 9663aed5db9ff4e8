use std::collections::HashMap;
use vello::peniko::Color;

use super::colors::ThemeColors;

/// Color groups of the host toolkit's native palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    /// Widgets in the focused window.
    Active,
    /// Widgets in unfocused windows.
    Inactive,
    /// Disabled widgets.
    Disabled,
}

/// Color roles of the host toolkit's native palette.
///
/// Widgets the style does not paint itself (custom widgets, rich text) still
/// pick their colors from these roles.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    PlaceholderText,
    Text,
    Button,
    ButtonText,
    BrightText,
    Light,
    Midlight,
    Mid,
    Dark,
    Shadow,
    Highlight,
    HighlightedText,
    Link,
    LinkVisited,
}

impl PaletteRole {
    /// Every role, in declaration order.
    pub const ALL: [PaletteRole; 20] = [
        PaletteRole::Window,
        PaletteRole::WindowText,
        PaletteRole::Base,
        PaletteRole::AlternateBase,
        PaletteRole::ToolTipBase,
        PaletteRole::ToolTipText,
        PaletteRole::PlaceholderText,
        PaletteRole::Text,
        PaletteRole::Button,
        PaletteRole::ButtonText,
        PaletteRole::BrightText,
        PaletteRole::Light,
        PaletteRole::Midlight,
        PaletteRole::Mid,
        PaletteRole::Dark,
        PaletteRole::Shadow,
        PaletteRole::Highlight,
        PaletteRole::HighlightedText,
        PaletteRole::Link,
        PaletteRole::LinkVisited,
    ];
}

/// Native palette derived from a theme's colors.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<(ColorGroup, PaletteRole), Color>,
}

impl Palette {
    pub(crate) fn derive(colors: &ThemeColors) -> Self {
        let mut palette = Self {
            colors: HashMap::new(),
        };

        for group in [ColorGroup::Active, ColorGroup::Inactive, ColorGroup::Disabled] {
            for role in PaletteRole::ALL {
                palette
                    .colors
                    .insert((group, role), Self::derive_color(colors, group, role));
            }
        }

        palette
    }

    fn derive_color(colors: &ThemeColors, group: ColorGroup, role: PaletteRole) -> Color {
        let disabled = group == ColorGroup::Disabled;
        let text = if disabled {
            colors.secondary_disabled
        } else {
            colors.secondary
        };

        match role {
            PaletteRole::Window => colors.background_main2,
            PaletteRole::WindowText | PaletteRole::Text | PaletteRole::ButtonText => text,
            PaletteRole::Base => colors.background_main1,
            PaletteRole::AlternateBase => colors.background_main2,
            PaletteRole::ToolTipBase => colors.tooltip_background,
            PaletteRole::ToolTipText => colors.tooltip_foreground,
            PaletteRole::PlaceholderText => {
                if disabled {
                    colors.secondary_alternative_disabled
                } else {
                    colors.secondary_alternative
                }
            },
            PaletteRole::Button => {
                if disabled {
                    colors.neutral_disabled
                } else {
                    colors.neutral
                }
            },
            PaletteRole::BrightText => colors.primary_foreground,
            PaletteRole::Light => colors.background_main1,
            PaletteRole::Midlight => colors.background_main3,
            PaletteRole::Mid => colors.background_main4,
            PaletteRole::Dark => colors.border,
            PaletteRole::Shadow => colors.shadow1,
            // Unfocused windows highlight their selection with the neutral color.
            PaletteRole::Highlight => match group {
                ColorGroup::Active => colors.primary,
                ColorGroup::Inactive => colors.neutral,
                ColorGroup::Disabled => colors.primary_disabled,
            },
            PaletteRole::HighlightedText => match group {
                ColorGroup::Active => colors.primary_foreground,
                ColorGroup::Inactive => colors.secondary,
                ColorGroup::Disabled => colors.primary_foreground_disabled,
            },
            PaletteRole::Link => {
                if disabled {
                    colors.primary_disabled
                } else {
                    colors.primary
                }
            },
            PaletteRole::LinkVisited => {
                if disabled {
                    colors.primary_alternative_disabled
                } else {
                    colors.primary_alternative
                }
            },
        }
    }

    /// Color of `role` in `group`.
    pub fn color(&self, group: ColorGroup, role: PaletteRole) -> Color {
        self.colors
            .get(&(group, role))
            .copied()
            .unwrap_or(Color::BLACK)
    }
}
