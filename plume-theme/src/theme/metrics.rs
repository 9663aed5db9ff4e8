use std::time::Duration;

use crate::fields::theme_fields;

theme_fields! {
    /// The authored numeric metrics of a theme.
    ///
    /// Lengths are in logical pixels, font sizes in points and durations in
    /// milliseconds.
    pub struct ThemeMetrics {
        /// Body text size.
        font_size: f64 => "fontSize" = 12.0,
        /// Monospace text size.
        font_size_monospace: f64 => "fontSizeMonospace" = 13.0,
        /// First level heading size.
        font_size_h1: f64 => "fontSizeH1" = 34.0,
        /// Second level heading size.
        font_size_h2: f64 => "fontSizeH2" = 26.0,
        /// Third level heading size.
        font_size_h3: f64 => "fontSizeH3" = 22.0,
        /// Fourth level heading size.
        font_size_h4: f64 => "fontSizeH4" = 18.0,
        /// Fifth level heading size.
        font_size_h5: f64 => "fontSizeH5" = 14.0,
        /// Caption size.
        font_size_s1: f64 => "fontSizeS1" = 10.0,
        /// Prefer the platform fonts over the bundled families.
        use_system_fonts: bool => "useSystemFonts" = false,

        /// Base animation duration.
        animation_duration: u64 => "animationDuration" = 192,
        /// Focus ring animation duration.
        focus_animation_duration: u64 => "focusAnimationDuration" = 384,
        /// Slider handle animation duration.
        slider_animation_duration: u64 => "sliderAnimationDuration" = 96,

        /// Corner radius of most controls.
        border_radius: f64 => "borderRadius" = 6.0,
        /// Corner radius of check boxes.
        check_box_border_radius: f64 => "checkBoxBorderRadius" = 4.0,
        /// Corner radius of menu items.
        menu_item_border_radius: f64 => "menuItemBorderRadius" = 4.0,
        /// Corner radius of menu bar items.
        menu_bar_item_border_radius: f64 => "menuBarItemBorderRadius" = 2.0,
        /// Border stroke width.
        border_width: f64 => "borderWidth" = 1.0,
        /// Focus ring stroke width.
        focus_border_width: f64 => "focusBorderWidth" = 2.0,

        /// Height of large controls.
        control_height_large: f64 => "controlHeightLarge" = 28.0,
        /// Height of medium controls.
        control_height_medium: f64 => "controlHeightMedium" = 24.0,
        /// Height of small controls.
        control_height_small: f64 => "controlHeightSmall" = 16.0,
        /// Default width of buttons and fields.
        control_default_width: f64 => "controlDefaultWidth" = 96.0,

        /// Length of dial value marks.
        dial_mark_length: f64 => "dialMarkLength" = 8.0,
        /// Thickness of dial value marks.
        dial_mark_thickness: f64 => "dialMarkThickness" = 2.0,
        /// Length of dial ticks.
        dial_tick_length: f64 => "dialTickLength" = 4.0,
        /// Spacing between dial ticks.
        dial_tick_spacing: f64 => "dialTickSpacing" = 4.0,
        /// Thickness of the dial groove.
        dial_groove_thickness: f64 => "dialGrooveThickness" = 4.0,

        /// Size of small icons.
        icon_extent: f64 => "iconExtent" = 16.0,

        /// Length of slider ticks.
        slider_tick_size: f64 => "sliderTickSize" = 3.0,
        /// Spacing between slider ticks and groove.
        slider_tick_spacing: f64 => "sliderTickSpacing" = 2.0,
        /// Thickness of slider ticks.
        slider_tick_thickness: f64 => "sliderTickThickness" = 1.0,
        /// Thickness of the slider groove.
        slider_groove_height: f64 => "sliderGrooveHeight" = 4.0,
        /// Thickness of the progress bar groove.
        progress_bar_groove_height: f64 => "progressBarGrooveHeight" = 6.0,

        /// Base spacing unit.
        spacing: f64 => "spacing" = 8.0,

        /// Scroll bar thickness when hovered.
        scroll_bar_thickness_full: f64 => "scrollBarThicknessFull" = 12.0,
        /// Scroll bar thickness at rest.
        scroll_bar_thickness_small: f64 => "scrollBarThicknessSmall" = 6.0,
        /// Margin around the scroll bar handle.
        scroll_bar_margin: f64 => "scrollBarMargin" = 0.0,

        /// Padding above tabs.
        tab_bar_padding_top: f64 => "tabBarPaddingTop" = 4.0,
        /// Maximum tab width, 0 for unbounded.
        tab_bar_tab_max_width: f64 => "tabBarTabMaxWidth" = 0.0,
        /// Minimum tab width, 0 for unbounded.
        tab_bar_tab_min_width: f64 => "tabBarTabMinWidth" = 0.0,
    }
}

/// The animated transitions a theme provides durations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Color changes on hover, press and check.
    Base,
    /// Focus ring appearance.
    Focus,
    /// Slider handle movement.
    Slider,
}

/// Size classes for control heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlSize {
    /// Compact controls.
    Small,
    /// Regular controls.
    #[default]
    Medium,
    /// Prominent controls.
    Large,
}

impl ThemeMetrics {
    /// Duration of an animation kind.
    pub fn duration(&self, kind: AnimationKind) -> Duration {
        let millis = match kind {
            AnimationKind::Base => self.animation_duration,
            AnimationKind::Focus => self.focus_animation_duration,
            AnimationKind::Slider => self.slider_animation_duration,
        };
        Duration::from_millis(millis)
    }

    /// Height of a control of the given size class.
    pub fn control_height(&self, size: ControlSize) -> f64 {
        match size {
            ControlSize::Small => self.control_height_small,
            ControlSize::Medium => self.control_height_medium,
            ControlSize::Large => self.control_height_large,
        }
    }
}
