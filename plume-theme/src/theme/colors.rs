use vello::peniko::Color;

use crate::color::transparent;
use crate::fields::theme_fields;

/// Opaque color from a `0xRRGGBB` literal.
pub(crate) fn rgb(value: u32) -> Color {
    Color::from_rgba8((value >> 16) as u8, (value >> 8) as u8, value as u8, 255)
}

/// Color from a `0xRRGGBBAA` literal.
pub(crate) fn rgba(value: u32) -> Color {
    Color::from_rgba8(
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    )
}

theme_fields! {
    /// The authored colors of a theme.
    ///
    /// Only base variants are stored. Every "transparent" variant is derived on
    /// access from its base color with alpha forced to zero (see the
    /// `*_transparent` methods), so it can never disagree with its base.
    ///
    /// The defaults form the built-in light theme.
    pub struct ThemeColors {
        /// Main background, used by windows and text fields.
        background_main1: Color => "backgroundColorMain1" = rgb(0xffffff),
        /// Second background layer, used by raised surfaces.
        background_main2: Color => "backgroundColorMain2" = rgb(0xf3f3f3),
        /// Third background layer.
        background_main3: Color => "backgroundColorMain3" = rgb(0xe3e3e3),
        /// Fourth background layer.
        background_main4: Color => "backgroundColorMain4" = rgb(0xdcdcdc),
        /// Background behind documents and workspaces.
        background_workspace: Color => "backgroundColorWorkspace" = rgb(0xb7b7b7),
        /// Background of tab bars.
        background_tab_bar: Color => "backgroundColorTabBar" = rgb(0xdbdbdb),

        /// Neutral color, used by secondary buttons.
        neutral: Color => "neutralColor" = rgb(0xe1e1e1),
        /// Neutral color when hovered.
        neutral_hovered: Color => "neutralColorHovered" = rgb(0xdadada),
        /// Neutral color when pressed.
        neutral_pressed: Color => "neutralColorPressed" = rgb(0xd2d2d2),
        /// Neutral color when disabled.
        neutral_disabled: Color => "neutralColorDisabled" = rgb(0xeeeeee),

        /// Focus ring color.
        focus: Color => "focusColor" = rgba(0x40a9ff66),

        /// Accent color.
        primary: Color => "primaryColor" = rgb(0x1890ff),
        /// Accent color when hovered.
        primary_hovered: Color => "primaryColorHovered" = rgb(0x40a9ff),
        /// Accent color when pressed.
        primary_pressed: Color => "primaryColorPressed" = rgb(0x096dd9),
        /// Accent color when disabled.
        primary_disabled: Color => "primaryColorDisabled" = rgb(0xd1e9ff),

        /// Foreground drawn over the accent color.
        primary_foreground: Color => "primaryColorForeground" = rgb(0xffffff),
        /// Foreground over the accent color when hovered.
        primary_foreground_hovered: Color => "primaryColorForegroundHovered" = rgb(0xffffff),
        /// Foreground over the accent color when pressed.
        primary_foreground_pressed: Color => "primaryColorForegroundPressed" = rgb(0xdcf4ff),
        /// Foreground over the accent color when disabled.
        primary_foreground_disabled: Color => "primaryColorForegroundDisabled" = rgb(0xecf6ff),

        /// Alternative accent, used for secondary text over the accent color.
        primary_alternative: Color => "primaryAlternativeColor" = rgb(0x106ddd),
        /// Alternative accent when hovered.
        primary_alternative_hovered: Color => "primaryAlternativeColorHovered" = rgb(0x1c7ae6),
        /// Alternative accent when pressed.
        primary_alternative_pressed: Color => "primaryAlternativeColorPressed" = rgb(0x0f5fc2),
        /// Alternative accent when disabled.
        primary_alternative_disabled: Color => "primaryAlternativeColorDisabled" = rgb(0xa9d6ff),

        /// Main text color.
        secondary: Color => "secondaryColor" = rgb(0x202020),
        /// Main text color when hovered.
        secondary_hovered: Color => "secondaryColorHovered" = rgb(0x202020),
        /// Main text color when pressed.
        secondary_pressed: Color => "secondaryColorPressed" = rgb(0x000000),
        /// Main text color when disabled.
        secondary_disabled: Color => "secondaryColorDisabled" = rgb(0xd4d4d4),

        /// Foreground drawn over the secondary color.
        secondary_foreground: Color => "secondaryColorForeground" = rgb(0xffffff),
        /// Foreground over the secondary color when hovered.
        secondary_foreground_hovered: Color => "secondaryColorForegroundHovered" = rgb(0xffffff),
        /// Foreground over the secondary color when pressed.
        secondary_foreground_pressed: Color => "secondaryColorForegroundPressed" = rgb(0xffffff),
        /// Foreground over the secondary color when disabled.
        secondary_foreground_disabled: Color => "secondaryColorForegroundDisabled" = rgb(0xededed),

        /// Muted text color, used for captions and shortcuts.
        secondary_alternative: Color => "secondaryAlternativeColor" = rgb(0x909090),
        /// Muted text color when hovered.
        secondary_alternative_hovered: Color => "secondaryAlternativeColorHovered" = rgb(0x747474),
        /// Muted text color when pressed.
        secondary_alternative_pressed: Color => "secondaryAlternativeColorPressed" = rgb(0x616161),
        /// Muted text color when disabled.
        secondary_alternative_disabled: Color => "secondaryAlternativeColorDisabled" = rgb(0xc3c3c3),

        /// Success status.
        status_success: Color => "statusColorSuccess" = rgb(0x2bb5a0),
        /// Success status when hovered.
        status_success_hovered: Color => "statusColorSuccessHovered" = rgb(0x3cbfab),
        /// Success status when pressed.
        status_success_pressed: Color => "statusColorSuccessPressed" = rgb(0x239c8a),
        /// Success status when disabled.
        status_success_disabled: Color => "statusColorSuccessDisabled" = rgb(0xd5f0ec),

        /// Info status.
        status_info: Color => "statusColorInfo" = rgb(0x1ba8d5),
        /// Info status when hovered.
        status_info_hovered: Color => "statusColorInfoHovered" = rgb(0x1eb5e5),
        /// Info status when pressed.
        status_info_pressed: Color => "statusColorInfoPressed" = rgb(0x1b9ac2),
        /// Info status when disabled.
        status_info_disabled: Color => "statusColorInfoDisabled" = rgb(0xc1e7f4),

        /// Warning status.
        status_warning: Color => "statusColorWarning" = rgb(0xfbc064),
        /// Warning status when hovered.
        status_warning_hovered: Color => "statusColorWarningHovered" = rgb(0xffcf6c),
        /// Warning status when pressed.
        status_warning_pressed: Color => "statusColorWarningPressed" = rgb(0xe9b05a),
        /// Warning status when disabled.
        status_warning_disabled: Color => "statusColorWarningDisabled" = rgb(0xfeefd8),

        /// Error status.
        status_error: Color => "statusColorError" = rgb(0xe96b72),
        /// Error status when hovered.
        status_error_hovered: Color => "statusColorErrorHovered" = rgb(0xf47c83),
        /// Error status when pressed.
        status_error_pressed: Color => "statusColorErrorPressed" = rgb(0xda5f66),
        /// Error status when disabled.
        status_error_disabled: Color => "statusColorErrorDisabled" = rgb(0xf9dadc),

        /// Foreground drawn over status colors.
        status_foreground: Color => "statusColorForeground" = rgb(0xffffff),
        /// Foreground over status colors when hovered.
        status_foreground_hovered: Color => "statusColorForegroundHovered" = rgb(0xffffff),
        /// Foreground over status colors when pressed.
        status_foreground_pressed: Color => "statusColorForegroundPressed" = rgb(0xe5e5e5),
        /// Foreground over status colors when disabled.
        status_foreground_disabled: Color => "statusColorForegroundDisabled" = rgba(0xffffff99),

        /// Soft shadow.
        shadow1: Color => "shadowColor1" = rgba(0x00000020),
        /// Medium shadow.
        shadow2: Color => "shadowColor2" = rgba(0x00000040),
        /// Hard shadow.
        shadow3: Color => "shadowColor3" = rgba(0x00000060),

        /// Control border.
        border: Color => "borderColor" = rgb(0xd3d3d3),
        /// Control border when hovered.
        border_hovered: Color => "borderColorHovered" = rgb(0xb3b3b3),
        /// Control border when pressed.
        border_pressed: Color => "borderColorPressed" = rgb(0xa3a3a3),
        /// Control border when disabled.
        border_disabled: Color => "borderColorDisabled" = rgb(0xe9e9e9),

        /// Border of frames and separators.
        frame_border: Color => "frameBorderColor" = rgb(0xdfdfdf),

        /// Lightest overlay.
        semi_transparent1: Color => "semiTransparentColor1" = rgba(0x0000000a),
        /// Light overlay.
        semi_transparent2: Color => "semiTransparentColor2" = rgba(0x00000019),
        /// Medium overlay.
        semi_transparent3: Color => "semiTransparentColor3" = rgba(0x00000021),
        /// Strong overlay.
        semi_transparent4: Color => "semiTransparentColor4" = rgba(0x00000028),

        /// Tooltip background.
        tooltip_background: Color => "toolTipBackgroundColor" = rgb(0x202020),
        /// Tooltip border.
        tooltip_border: Color => "toolTipBorderColor" = rgb(0x202020),
        /// Tooltip text.
        tooltip_foreground: Color => "toolTipForegroundColor" = rgb(0xffffff),
    }
}

impl ThemeColors {
    /// Transparent variant of the main background.
    pub fn background_main_transparent(&self) -> Color {
        transparent(self.background_main1)
    }

    /// Transparent variant of the neutral color.
    pub fn neutral_transparent(&self) -> Color {
        transparent(self.neutral)
    }

    /// Transparent variant of the accent color.
    pub fn primary_transparent(&self) -> Color {
        transparent(self.primary)
    }

    /// Transparent variant of the accent foreground.
    pub fn primary_foreground_transparent(&self) -> Color {
        transparent(self.primary_foreground)
    }

    /// Transparent variant of the alternative accent.
    pub fn primary_alternative_transparent(&self) -> Color {
        transparent(self.primary_alternative)
    }

    /// Transparent variant of the main text color.
    pub fn secondary_transparent(&self) -> Color {
        transparent(self.secondary)
    }

    /// Transparent variant of the secondary foreground.
    pub fn secondary_foreground_transparent(&self) -> Color {
        transparent(self.secondary_foreground)
    }

    /// Transparent variant of the muted text color.
    pub fn secondary_alternative_transparent(&self) -> Color {
        transparent(self.secondary_alternative)
    }

    /// Transparent variant of the success status.
    pub fn status_success_transparent(&self) -> Color {
        transparent(self.status_success)
    }

    /// Transparent variant of the info status.
    pub fn status_info_transparent(&self) -> Color {
        transparent(self.status_info)
    }

    /// Transparent variant of the warning status.
    pub fn status_warning_transparent(&self) -> Color {
        transparent(self.status_warning)
    }

    /// Transparent variant of the error status.
    pub fn status_error_transparent(&self) -> Color {
        transparent(self.status_error)
    }

    /// Transparent variant of the shadow colors.
    pub fn shadow_transparent(&self) -> Color {
        transparent(self.shadow1)
    }

    /// Transparent variant of the border color.
    pub fn border_transparent(&self) -> Color {
        transparent(self.border)
    }

    /// Transparent variant of the overlay colors.
    pub fn semi_transparent_transparent(&self) -> Color {
        transparent(self.semi_transparent1)
    }

    /// Every `(base, transparent)` pair, for checking the alpha invariant.
    pub fn transparent_pairs(&self) -> [(Color, Color); 15] {
        [
            (self.background_main1, self.background_main_transparent()),
            (self.neutral, self.neutral_transparent()),
            (self.primary, self.primary_transparent()),
            (self.primary_foreground, self.primary_foreground_transparent()),
            (self.primary_alternative, self.primary_alternative_transparent()),
            (self.secondary, self.secondary_transparent()),
            (self.secondary_foreground, self.secondary_foreground_transparent()),
            (self.secondary_alternative, self.secondary_alternative_transparent()),
            (self.status_success, self.status_success_transparent()),
            (self.status_info, self.status_info_transparent()),
            (self.status_warning, self.status_warning_transparent()),
            (self.status_error, self.status_error_transparent()),
            (self.shadow1, self.shadow_transparent()),
            (self.border, self.border_transparent()),
            (self.semi_transparent1, self.semi_transparent_transparent()),
        ]
    }
}
