//! # Color and Metric Resolution
//!
//! [ThemeQueries] maps a visual role and the classified widget state to a
//! color or metric of the current [Theme]. Every method is a provided method
//! over [ThemeQueries::theme], so anything holding a theme gets the whole
//! query surface: the [Theme] itself, the [Style](crate::style::Style) facade,
//! or a test double.
//!
//! Roles that must look alike are defined by delegation rather than by
//! copying tables. Radio buttons ask check buttons, checked check buttons ask
//! primary buttons, combo boxes ask secondary buttons, spin boxes ask text
//! fields, dials ask sliders. Delegation only ever points to a more basic
//! role, so the graph has no cycles.
//!
//! ```rust
//! use plume_style::resolver::ThemeQueries;
//! use plume_style::state::{CheckState, ColorRole, MouseState};
//! use plume_theme::theme::Theme;
//!
//! let theme = Theme::light();
//! assert_eq!(
//!     theme.radio_button_background_color(MouseState::Normal, CheckState::Checked),
//!     theme.button_background_color(MouseState::Normal, ColorRole::Primary),
//! );
//! ```

use std::time::Duration;

use plume_theme::color::{lighter, rgb_with_alpha_of};
use plume_theme::theme::{AnimationKind, ControlSize, FontSpec, TextRole, Theme, ThemeColors};
use vello::kurbo::Size;
use vello::peniko::Color;

use crate::state::{
    ActiveState, AlternateState, CheckState, ColorRole, FocusState, MouseState, SelectionState,
    Status,
};

/// Lightening applied to the blended status focus ring, in percent.
const STATUS_FOCUS_LIGHTNESS: u32 = 110;

/// One color per mouse state.
struct Variants {
    normal: Color,
    hovered: Color,
    pressed: Color,
    disabled: Color,
    transparent: Color,
}

impl Variants {
    fn pick(&self, mouse: MouseState) -> Color {
        match mouse {
            MouseState::Normal => self.normal,
            MouseState::Hovered => self.hovered,
            MouseState::Pressed => self.pressed,
            MouseState::Disabled => self.disabled,
            MouseState::Transparent => self.transparent,
        }
    }
}

fn primary(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.primary,
        hovered: c.primary_hovered,
        pressed: c.primary_pressed,
        disabled: c.primary_disabled,
        transparent: c.primary_transparent(),
    }
}

fn primary_foreground(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.primary_foreground,
        hovered: c.primary_foreground_hovered,
        pressed: c.primary_foreground_pressed,
        disabled: c.primary_foreground_disabled,
        transparent: c.primary_foreground,
    }
}

fn primary_alternative(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.primary_alternative,
        hovered: c.primary_alternative_hovered,
        pressed: c.primary_alternative_pressed,
        disabled: c.primary_alternative_disabled,
        transparent: c.primary_alternative_transparent(),
    }
}

fn neutral(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.neutral,
        hovered: c.neutral_hovered,
        pressed: c.neutral_pressed,
        disabled: c.neutral_disabled,
        transparent: c.neutral_transparent(),
    }
}

fn secondary(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.secondary,
        hovered: c.secondary_hovered,
        pressed: c.secondary_pressed,
        disabled: c.secondary_disabled,
        transparent: c.secondary,
    }
}

fn secondary_alternative(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.secondary_alternative,
        hovered: c.secondary_alternative_hovered,
        pressed: c.secondary_alternative_pressed,
        disabled: c.secondary_alternative_disabled,
        transparent: c.secondary_alternative,
    }
}

fn border(c: &ThemeColors) -> Variants {
    Variants {
        normal: c.border,
        hovered: c.border_hovered,
        pressed: c.border_pressed,
        disabled: c.border_disabled,
        transparent: c.border_transparent(),
    }
}

fn status_family(c: &ThemeColors, status: Status) -> Variants {
    match status {
        Status::Default => primary(c),
        Status::Info => Variants {
            normal: c.status_info,
            hovered: c.status_info_hovered,
            pressed: c.status_info_pressed,
            disabled: c.status_info_disabled,
            transparent: c.status_info_transparent(),
        },
        Status::Success => Variants {
            normal: c.status_success,
            hovered: c.status_success_hovered,
            pressed: c.status_success_pressed,
            disabled: c.status_success_disabled,
            transparent: c.status_success_transparent(),
        },
        Status::Warning => Variants {
            normal: c.status_warning,
            hovered: c.status_warning_hovered,
            pressed: c.status_warning_pressed,
            disabled: c.status_warning_disabled,
            transparent: c.status_warning_transparent(),
        },
        Status::Error => Variants {
            normal: c.status_error,
            hovered: c.status_error_hovered,
            pressed: c.status_error_pressed,
            disabled: c.status_error_disabled,
            transparent: c.status_error_transparent(),
        },
    }
}

/// Theme lookups for every visual role.
pub trait ThemeQueries {
    /// The theme queries are answered from.
    fn theme(&self) -> &Theme;

    // Frames and plain text.

    /// Background of plain frames and windows.
    fn frame_background_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.background_main2,
            _ => c.background_main1,
        }
    }

    /// Outline of plain frames.
    fn frame_border_color(&self) -> Color {
        self.theme().colors().frame_border
    }

    /// Text of labels and other passive text.
    fn label_foreground_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.secondary_disabled,
            _ => c.secondary,
        }
    }

    /// Secondary, de-emphasized text.
    fn label_caption_foreground_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.secondary_alternative_disabled,
            _ => c.secondary_alternative,
        }
    }

    /// Drop shadow for an elevation level, from 1 (subtle) to 3 (strong).
    fn shadow_color(&self, elevation: u8) -> Color {
        let c = self.theme().colors();
        match elevation {
            0 | 1 => c.shadow1,
            2 => c.shadow2,
            _ => c.shadow3,
        }
    }

    // Buttons.

    /// Button fill.
    fn button_background_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        let c = self.theme().colors();
        match role {
            ColorRole::Primary => primary(c).pick(mouse),
            ColorRole::Secondary => neutral(c).pick(mouse),
        }
    }

    /// Button label and icon.
    fn button_foreground_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        let c = self.theme().colors();
        match role {
            ColorRole::Primary => primary_foreground(c).pick(mouse),
            ColorRole::Secondary => secondary(c).pick(mouse),
        }
    }

    /// Button outline. Primary buttons are outlined in their own fill.
    fn button_border_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.button_background_color(mouse, role),
            ColorRole::Secondary => border(self.theme().colors()).pick(mouse),
        }
    }

    /// Tool button fill. Idle tool buttons have no visible background.
    fn tool_button_background_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        match mouse {
            MouseState::Normal | MouseState::Transparent => {
                self.button_background_color(MouseState::Transparent, role)
            },
            _ => self.button_background_color(mouse, role),
        }
    }

    /// Tool button label and icon.
    fn tool_button_foreground_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        self.button_foreground_color(mouse, role)
    }

    /// Separator between a tool button and its menu arrow.
    fn tool_button_separator_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.border_disabled,
            MouseState::Normal | MouseState::Transparent => c.border_transparent(),
            MouseState::Hovered | MouseState::Pressed => c.border,
        }
    }

    /// Command link fill.
    fn command_link_background_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        self.tool_button_background_color(mouse, role)
    }

    /// Command link title.
    fn command_link_foreground_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        self.button_foreground_color(mouse, role)
    }

    /// Command link description line.
    fn command_link_description_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        let c = self.theme().colors();
        match role {
            ColorRole::Primary => primary_alternative(c).pick(mouse),
            ColorRole::Secondary => secondary_alternative(c).pick(mouse),
        }
    }

    // Check buttons, radio buttons, switches.

    /// Check box fill. Checked boxes look like primary buttons.
    fn check_button_background_color(&self, mouse: MouseState, check: CheckState) -> Color {
        let c = self.theme().colors();
        match check {
            CheckState::Checked | CheckState::Indeterminate => {
                self.button_background_color(mouse, ColorRole::Primary)
            },
            CheckState::NotChecked => match mouse {
                MouseState::Normal => c.background_main1,
                MouseState::Hovered => c.background_main2,
                MouseState::Pressed => c.background_main3,
                MouseState::Disabled => c.background_main2,
                MouseState::Transparent => c.background_main_transparent(),
            },
        }
    }

    /// Check mark. Unchecked boxes draw an invisible mark so it can fade in.
    fn check_button_foreground_color(&self, mouse: MouseState, check: CheckState) -> Color {
        match check {
            CheckState::Checked | CheckState::Indeterminate => {
                self.button_foreground_color(mouse, ColorRole::Primary)
            },
            CheckState::NotChecked => self.theme().colors().primary_foreground_transparent(),
        }
    }

    /// Check box outline.
    fn check_button_border_color(&self, mouse: MouseState, focus: FocusState, check: CheckState) -> Color {
        let c = self.theme().colors();
        match check {
            CheckState::Checked | CheckState::Indeterminate => {
                self.check_button_background_color(mouse, check)
            },
            CheckState::NotChecked => match (mouse, focus) {
                (MouseState::Disabled, _) => c.border_disabled,
                (MouseState::Pressed, _) => c.border_pressed,
                (_, FocusState::Focused) => c.primary,
                (MouseState::Hovered, FocusState::NotFocused) => c.border_hovered,
                (MouseState::Normal, FocusState::NotFocused) => c.border,
                (MouseState::Transparent, FocusState::NotFocused) => c.border_transparent(),
            },
        }
    }

    /// Radio button fill.
    fn radio_button_background_color(&self, mouse: MouseState, check: CheckState) -> Color {
        self.check_button_background_color(mouse, check)
    }

    /// Radio button dot.
    fn radio_button_foreground_color(&self, mouse: MouseState, check: CheckState) -> Color {
        self.check_button_foreground_color(mouse, check)
    }

    /// Radio button outline.
    fn radio_button_border_color(&self, mouse: MouseState, focus: FocusState, check: CheckState) -> Color {
        self.check_button_border_color(mouse, focus, check)
    }

    /// Switch track.
    fn switch_groove_color(&self, mouse: MouseState, check: CheckState) -> Color {
        match check {
            CheckState::Checked => self.button_background_color(mouse, ColorRole::Primary),
            CheckState::NotChecked | CheckState::Indeterminate => {
                self.button_background_color(mouse, ColorRole::Secondary)
            },
        }
    }

    /// Switch track outline.
    fn switch_groove_border_color(&self, mouse: MouseState, focus: FocusState, check: CheckState) -> Color {
        self.check_button_border_color(mouse, focus, check)
    }

    /// Switch knob.
    fn switch_handle_color(&self, mouse: MouseState, check: CheckState) -> Color {
        let c = self.theme().colors();
        match check {
            CheckState::Checked => primary_foreground(c).pick(mouse),
            CheckState::NotChecked | CheckState::Indeterminate => {
                secondary_alternative(c).pick(mouse)
            },
        }
    }

    // Combo boxes and spin boxes.

    /// Combo box fill.
    fn combo_box_background_color(&self, mouse: MouseState) -> Color {
        self.button_background_color(mouse, ColorRole::Secondary)
    }

    /// Combo box text and arrow.
    fn combo_box_foreground_color(&self, mouse: MouseState) -> Color {
        self.button_foreground_color(mouse, ColorRole::Secondary)
    }

    /// Combo box outline.
    fn combo_box_border_color(&self, mouse: MouseState) -> Color {
        self.button_border_color(mouse, ColorRole::Secondary)
    }

    /// Spin box editor fill.
    fn spin_box_background_color(&self, mouse: MouseState) -> Color {
        self.text_field_background_color(mouse)
    }

    /// Spin box editor outline.
    fn spin_box_border_color(&self, mouse: MouseState, focus: FocusState) -> Color {
        self.text_field_border_color(mouse, focus, Status::Default)
    }

    /// Spin box up/down button fill.
    fn spin_box_button_background_color(&self, mouse: MouseState) -> Color {
        self.button_background_color(mouse, ColorRole::Secondary)
    }

    /// Spin box up/down arrow.
    fn spin_box_button_foreground_color(&self, mouse: MouseState) -> Color {
        self.button_foreground_color(mouse, ColorRole::Secondary)
    }

    // Item views.

    /// Row fill in item views.
    ///
    /// A selected row is drawn in the accent color only while its view has
    /// focus in the active window. Otherwise the selection falls back to the
    /// neutral highlight.
    fn list_item_background_color(
        &self,
        mouse: MouseState,
        selection: SelectionState,
        focus: FocusState,
        active: ActiveState,
        alternate: AlternateState,
    ) -> Color {
        let c = self.theme().colors();
        match selection {
            SelectionState::Selected => {
                if active == ActiveState::Active && focus == FocusState::Focused {
                    match mouse {
                        MouseState::Transparent => c.primary,
                        _ => primary(c).pick(mouse),
                    }
                } else {
                    match mouse {
                        MouseState::Transparent => c.neutral,
                        _ => neutral(c).pick(mouse),
                    }
                }
            },
            SelectionState::NotSelected => match mouse {
                MouseState::Hovered => c.semi_transparent1,
                MouseState::Pressed => c.semi_transparent2,
                MouseState::Normal | MouseState::Disabled | MouseState::Transparent => match alternate {
                    AlternateState::Alternate => c.background_main2,
                    AlternateState::NotAlternate => c.background_main_transparent(),
                },
            },
        }
    }

    /// Row text in item views.
    fn list_item_foreground_color(
        &self,
        mouse: MouseState,
        selection: SelectionState,
        focus: FocusState,
        active: ActiveState,
    ) -> Color {
        let highlighted = selection == SelectionState::Selected
            && focus == FocusState::Focused
            && active == ActiveState::Active;
        if highlighted {
            self.button_foreground_color(mouse, ColorRole::Primary)
        } else {
            self.label_foreground_color(mouse)
        }
    }

    /// Secondary row text in item views.
    fn list_item_caption_foreground_color(
        &self,
        mouse: MouseState,
        selection: SelectionState,
        focus: FocusState,
        active: ActiveState,
    ) -> Color {
        let c = self.theme().colors();
        let highlighted = selection == SelectionState::Selected
            && focus == FocusState::Focused
            && active == ActiveState::Active;
        if highlighted {
            primary_alternative(c).pick(mouse)
        } else {
            self.label_caption_foreground_color(mouse)
        }
    }

    // Menus and menu bars.

    /// Popup menu fill.
    fn menu_background_color(&self) -> Color {
        self.theme().colors().background_main1
    }

    /// Popup menu outline.
    fn menu_border_color(&self) -> Color {
        self.theme().colors().border
    }

    /// Popup menu separator line.
    fn menu_separator_color(&self) -> Color {
        self.theme().colors().border_disabled
    }

    /// Menu item fill. Only the highlighted item is filled.
    fn menu_item_background_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Hovered | MouseState::Pressed => primary(c).pick(mouse),
            MouseState::Normal | MouseState::Disabled | MouseState::Transparent => {
                c.primary_transparent()
            },
        }
    }

    /// Menu item label and icon.
    fn menu_item_foreground_color(&self, mouse: MouseState) -> Color {
        match mouse {
            MouseState::Hovered | MouseState::Pressed => {
                self.button_foreground_color(mouse, ColorRole::Primary)
            },
            _ => self.label_foreground_color(mouse),
        }
    }

    /// Menu item shortcut and sub-menu arrow.
    fn menu_item_secondary_foreground_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Hovered | MouseState::Pressed => primary_alternative(c).pick(mouse),
            _ => self.label_caption_foreground_color(mouse),
        }
    }

    /// Menu bar fill.
    fn menu_bar_background_color(&self) -> Color {
        self.theme().colors().background_main1
    }

    /// Line under the menu bar.
    fn menu_bar_border_color(&self) -> Color {
        self.theme().colors().border
    }

    /// Menu bar entry fill. The entry whose menu is open stays pressed.
    fn menu_bar_item_background_color(&self, mouse: MouseState, selection: SelectionState) -> Color {
        let c = self.theme().colors();
        match (selection, mouse) {
            (_, MouseState::Disabled) => c.neutral_transparent(),
            (SelectionState::Selected, _) | (_, MouseState::Pressed) => c.neutral_pressed,
            (SelectionState::NotSelected, MouseState::Hovered) => c.neutral_hovered,
            (SelectionState::NotSelected, MouseState::Normal | MouseState::Transparent) => {
                c.neutral_transparent()
            },
        }
    }

    /// Menu bar entry label.
    fn menu_bar_item_foreground_color(&self, mouse: MouseState) -> Color {
        self.label_foreground_color(mouse)
    }

    // Tabs.

    /// Tab bar fill.
    fn tab_bar_background_color(&self) -> Color {
        self.theme().colors().background_tab_bar
    }

    /// Shadow cast by the selected tab.
    fn tab_bar_shadow_color(&self) -> Color {
        self.shadow_color(1)
    }

    /// Line between the tab bar and its content.
    fn tab_bar_bottom_shadow_color(&self) -> Color {
        self.shadow_color(2)
    }

    /// Tab fill. The selected tab joins the page below it.
    fn tab_background_color(&self, mouse: MouseState, selection: SelectionState) -> Color {
        let c = self.theme().colors();
        match selection {
            SelectionState::Selected => c.background_main1,
            SelectionState::NotSelected => match mouse {
                MouseState::Hovered => c.semi_transparent3,
                MouseState::Pressed => c.semi_transparent4,
                MouseState::Normal | MouseState::Disabled | MouseState::Transparent => {
                    c.background_main_transparent()
                },
            },
        }
    }

    /// Tab label.
    fn tab_foreground_color(&self, mouse: MouseState, selection: SelectionState) -> Color {
        match (selection, mouse) {
            (_, MouseState::Disabled) => self.label_foreground_color(mouse),
            (SelectionState::Selected, _) | (_, MouseState::Hovered | MouseState::Pressed) => {
                self.label_foreground_color(MouseState::Normal)
            },
            (SelectionState::NotSelected, MouseState::Normal | MouseState::Transparent) => {
                self.label_caption_foreground_color(MouseState::Normal)
            },
        }
    }

    /// Tab close button fill.
    fn tab_close_button_background_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Hovered => c.semi_transparent3,
            MouseState::Pressed => c.semi_transparent4,
            MouseState::Normal | MouseState::Disabled | MouseState::Transparent => {
                c.semi_transparent_transparent()
            },
        }
    }

    /// Tab close button cross.
    fn tab_close_button_foreground_color(&self, mouse: MouseState, selection: SelectionState) -> Color {
        self.tab_foreground_color(mouse, selection)
    }

    /// Tab bar scroll arrow fill.
    fn tab_bar_scroll_button_background_color(&self, mouse: MouseState) -> Color {
        self.tool_button_background_color(mouse, ColorRole::Secondary)
    }

    // Progress bars, sliders, dials.

    /// Progress bar track.
    fn progress_bar_groove_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.neutral_disabled,
            _ => c.neutral,
        }
    }

    /// Progress bar filled part.
    fn progress_bar_value_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.primary_disabled,
            _ => c.primary,
        }
    }

    /// Progress bar percentage text.
    fn progress_bar_text_color(&self, mouse: MouseState) -> Color {
        self.label_foreground_color(mouse)
    }

    /// Slider track.
    fn slider_groove_color(&self, mouse: MouseState) -> Color {
        neutral(self.theme().colors()).pick(mouse)
    }

    /// Slider track up to the handle.
    fn slider_value_color(&self, mouse: MouseState) -> Color {
        primary(self.theme().colors()).pick(mouse)
    }

    /// Slider handle.
    fn slider_handle_color(&self, mouse: MouseState) -> Color {
        self.button_foreground_color(mouse, ColorRole::Primary)
    }

    /// Slider tick marks.
    fn slider_tick_color(&self, mouse: MouseState) -> Color {
        self.label_caption_foreground_color(mouse)
    }

    /// Dial track.
    fn dial_groove_color(&self, mouse: MouseState) -> Color {
        self.slider_groove_color(mouse)
    }

    /// Dial arc up to the value.
    fn dial_value_color(&self, mouse: MouseState) -> Color {
        self.slider_value_color(mouse)
    }

    /// Dial knob.
    fn dial_handle_color(&self, mouse: MouseState) -> Color {
        self.slider_handle_color(mouse)
    }

    /// Dial tick marks.
    fn dial_tick_color(&self, mouse: MouseState) -> Color {
        self.slider_tick_color(mouse)
    }

    /// Dial value mark on the knob.
    fn dial_mark_color(&self, mouse: MouseState) -> Color {
        self.button_background_color(mouse, ColorRole::Primary)
    }

    // Scroll bars.

    /// Scroll bar track. Only visible while hovered or dragged.
    fn scroll_bar_groove_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Hovered => c.semi_transparent1,
            MouseState::Pressed => c.semi_transparent2,
            MouseState::Normal | MouseState::Disabled | MouseState::Transparent => {
                c.semi_transparent_transparent()
            },
        }
    }

    /// Scroll bar handle.
    fn scroll_bar_handle_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Normal | MouseState::Transparent => c.semi_transparent2,
            MouseState::Hovered => c.semi_transparent3,
            MouseState::Pressed => c.semi_transparent4,
            MouseState::Disabled => c.semi_transparent1,
        }
    }

    /// Scroll bar width. The bar widens while hovered or dragged.
    fn scroll_bar_thickness(&self, mouse: MouseState) -> f64 {
        let m = self.theme().metrics();
        match mouse {
            MouseState::Hovered | MouseState::Pressed => m.scroll_bar_thickness_full,
            MouseState::Normal | MouseState::Disabled | MouseState::Transparent => {
                m.scroll_bar_thickness_small
            },
        }
    }

    /// Gap between the scroll bar and the viewport edge.
    fn scroll_bar_margin(&self) -> f64 {
        self.theme().metrics().scroll_bar_margin
    }

    // Text fields.

    /// Text field fill.
    fn text_field_background_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.background_main2,
            _ => c.background_main1,
        }
    }

    /// Text field outline.
    ///
    /// With a status set, the outline takes the status color, switching to the
    /// status "hovered" variant while the field is focused, hovered or pressed.
    fn text_field_border_color(&self, mouse: MouseState, focus: FocusState, status: Status) -> Color {
        let c = self.theme().colors();
        match status {
            Status::Default => match (mouse, focus) {
                (MouseState::Disabled, _) => c.border_disabled,
                (_, FocusState::Focused) => c.primary,
                (MouseState::Pressed, FocusState::NotFocused) => c.border_pressed,
                (MouseState::Hovered, FocusState::NotFocused) => c.border_hovered,
                (MouseState::Normal | MouseState::Transparent, FocusState::NotFocused) => c.border,
            },
            Status::Info | Status::Success | Status::Warning | Status::Error => {
                let family = status_family(c, status);
                let hot = focus == FocusState::Focused
                    || mouse == MouseState::Hovered
                    || mouse == MouseState::Pressed;
                if hot {
                    family.hovered
                } else {
                    family.normal
                }
            },
        }
    }

    /// Text field content.
    fn text_field_foreground_color(&self, mouse: MouseState) -> Color {
        self.label_foreground_color(mouse)
    }

    /// Text field placeholder.
    fn text_field_placeholder_color(&self, mouse: MouseState) -> Color {
        self.label_caption_foreground_color(mouse)
    }

    // Group boxes, status bars, splitters, tooltips.

    /// Group box title.
    fn group_box_title_color(&self, mouse: MouseState) -> Color {
        self.label_foreground_color(mouse)
    }

    /// Group box fill.
    fn group_box_background_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.background_main3,
            _ => c.background_main2,
        }
    }

    /// Group box outline.
    fn group_box_border_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Disabled => c.border_disabled,
            _ => c.border,
        }
    }

    /// Status bar fill.
    fn status_bar_background_color(&self) -> Color {
        self.theme().colors().background_main3
    }

    /// Line above the status bar.
    fn status_bar_border_color(&self) -> Color {
        self.theme().colors().border
    }

    /// Separators between status bar sections.
    fn status_bar_separator_color(&self) -> Color {
        self.status_bar_border_color()
    }

    /// Splitter handle.
    fn splitter_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Transparent => c.border_transparent(),
            _ => border(c).pick(mouse),
        }
    }

    #[allow(missing_docs)]
    fn tooltip_background_color(&self) -> Color {
        self.theme().colors().tooltip_background
    }

    #[allow(missing_docs)]
    fn tooltip_border_color(&self) -> Color {
        self.theme().colors().tooltip_border
    }

    #[allow(missing_docs)]
    fn tooltip_foreground_color(&self) -> Color {
        self.theme().colors().tooltip_foreground
    }

    // Focus and status.

    /// Focus ring.
    ///
    /// A widget with a status gets a ring in the status color, with the focus
    /// color's alpha, lightened to 110%.
    fn focus_border_color(&self, status: Status) -> Color {
        let c = self.theme().colors();
        match status {
            Status::Default => c.focus,
            Status::Info | Status::Success | Status::Warning | Status::Error => {
                let base = status_family(c, status).normal;
                lighter(rgb_with_alpha_of(base, c.focus), STATUS_FOCUS_LIGHTNESS)
            },
        }
    }

    /// Status badge or banner fill. [Status::Default] uses the accent color.
    fn status_color(&self, status: Status, mouse: MouseState) -> Color {
        status_family(self.theme().colors(), status).pick(mouse)
    }

    /// Text drawn on a status fill.
    fn status_foreground_color(&self, mouse: MouseState) -> Color {
        let c = self.theme().colors();
        match mouse {
            MouseState::Normal | MouseState::Transparent => c.status_foreground,
            MouseState::Hovered => c.status_foreground_hovered,
            MouseState::Pressed => c.status_foreground_pressed,
            MouseState::Disabled => c.status_foreground_disabled,
        }
    }

    /// Tint for monochrome icons drawn on a button of this role.
    fn icon_foreground_color(&self, mouse: MouseState, role: ColorRole) -> Color {
        self.button_foreground_color(mouse, role)
    }

    // Metrics.

    #[allow(missing_docs)]
    fn control_height(&self, size: ControlSize) -> f64 {
        self.theme().metrics().control_height(size)
    }

    #[allow(missing_docs)]
    fn control_default_width(&self) -> f64 {
        self.theme().metrics().control_default_width
    }

    /// Base spacing unit.
    fn spacing(&self) -> f64 {
        self.theme().metrics().spacing
    }

    #[allow(missing_docs)]
    fn border_radius(&self) -> f64 {
        self.theme().metrics().border_radius
    }

    #[allow(missing_docs)]
    fn check_box_border_radius(&self) -> f64 {
        self.theme().metrics().check_box_border_radius
    }

    #[allow(missing_docs)]
    fn menu_item_border_radius(&self) -> f64 {
        self.theme().metrics().menu_item_border_radius
    }

    #[allow(missing_docs)]
    fn menu_bar_item_border_radius(&self) -> f64 {
        self.theme().metrics().menu_bar_item_border_radius
    }

    #[allow(missing_docs)]
    fn border_width(&self) -> f64 {
        self.theme().metrics().border_width
    }

    #[allow(missing_docs)]
    fn focus_border_width(&self) -> f64 {
        self.theme().metrics().focus_border_width
    }

    /// Square icon size.
    fn icon_size(&self) -> Size {
        let extent = self.theme().metrics().icon_extent;
        Size::new(extent, extent)
    }

    #[allow(missing_docs)]
    fn slider_groove_height(&self) -> f64 {
        self.theme().metrics().slider_groove_height
    }

    #[allow(missing_docs)]
    fn progress_bar_groove_height(&self) -> f64 {
        self.theme().metrics().progress_bar_groove_height
    }

    /// Duration of an animated transition.
    fn animation_duration(&self, kind: AnimationKind) -> Duration {
        self.theme().metrics().duration(kind)
    }

    /// Font for a text role.
    fn font(&self, role: TextRole) -> &FontSpec {
        self.theme().font(role)
    }
}

impl ThemeQueries for Theme {
    fn theme(&self) -> &Theme {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_theme::color::rgba8;

    const MICE: [MouseState; 5] = [
        MouseState::Normal,
        MouseState::Hovered,
        MouseState::Pressed,
        MouseState::Disabled,
        MouseState::Transparent,
    ];

    #[test]
    fn partial_document_end_to_end() {
        let theme = Theme::from_json(r##"{"primaryColor": "#FF0000"}"##).unwrap();
        assert_eq!(
            rgba8(theme.button_background_color(MouseState::Normal, ColorRole::Primary)),
            [255, 0, 0, 255]
        );
        assert_eq!(
            theme.button_background_color(MouseState::Disabled, ColorRole::Primary),
            Theme::light().colors().primary_disabled
        );
    }

    #[test]
    fn check_and_radio_stay_in_sync() {
        let green = Color::from_rgb8(0, 200, 0);
        let theme = Theme::light().with_colors(|c| c.primary = green);
        let check = theme.check_button_background_color(MouseState::Normal, CheckState::Checked);
        let radio = theme.radio_button_background_color(MouseState::Normal, CheckState::Checked);
        assert_eq!(check, green);
        assert_eq!(radio, check);

        for mouse in MICE {
            for focus in [FocusState::NotFocused, FocusState::Focused] {
                for check in [CheckState::NotChecked, CheckState::Checked, CheckState::Indeterminate] {
                    assert_eq!(
                        theme.radio_button_border_color(mouse, focus, check),
                        theme.check_button_border_color(mouse, focus, check)
                    );
                    assert_eq!(
                        theme.radio_button_foreground_color(mouse, check),
                        theme.check_button_foreground_color(mouse, check)
                    );
                }
            }
        }
    }

    #[test]
    fn delegated_roles_follow_their_base() {
        let theme = Theme::dark();
        for mouse in MICE {
            assert_eq!(
                theme.combo_box_background_color(mouse),
                theme.button_background_color(mouse, ColorRole::Secondary)
            );
            assert_eq!(theme.dial_groove_color(mouse), theme.slider_groove_color(mouse));
            assert_eq!(theme.dial_handle_color(mouse), theme.slider_handle_color(mouse));
            assert_eq!(
                theme.spin_box_border_color(mouse, FocusState::Focused),
                theme.text_field_border_color(mouse, FocusState::Focused, Status::Default)
            );
        }
    }

    #[test]
    fn idle_tool_buttons_are_transparent() {
        let theme = Theme::light();
        let idle = theme.tool_button_background_color(MouseState::Normal, ColorRole::Secondary);
        assert_eq!(idle.components[3], 0.0);
        assert_eq!(
            theme.tool_button_background_color(MouseState::Hovered, ColorRole::Secondary),
            theme.colors().neutral_hovered
        );
    }

    #[test]
    fn inactive_selection_is_neutral() {
        let theme = Theme::light();
        let c = theme.colors();
        let row = |focus: FocusState, active: ActiveState| {
            theme.list_item_background_color(
                MouseState::Normal,
                SelectionState::Selected,
                focus,
                active,
                AlternateState::NotAlternate,
            )
        };

        assert_eq!(row(FocusState::Focused, ActiveState::Active), c.primary);
        assert_eq!(row(FocusState::NotFocused, ActiveState::Active), c.neutral);
        assert_eq!(row(FocusState::Focused, ActiveState::NotActive), c.neutral);
        assert_eq!(row(FocusState::NotFocused, ActiveState::NotActive), c.neutral);
    }

    #[test]
    fn unselected_rows() {
        let theme = Theme::light();
        let c = theme.colors();
        let row = |mouse: MouseState, alternate: AlternateState| {
            theme.list_item_background_color(
                mouse,
                SelectionState::NotSelected,
                FocusState::Focused,
                ActiveState::Active,
                alternate,
            )
        };
        assert_eq!(row(MouseState::Hovered, AlternateState::NotAlternate), c.semi_transparent1);
        assert_eq!(row(MouseState::Pressed, AlternateState::Alternate), c.semi_transparent2);
        assert_eq!(row(MouseState::Normal, AlternateState::Alternate), c.background_main2);
        assert_eq!(
            row(MouseState::Normal, AlternateState::NotAlternate),
            c.background_main_transparent()
        );
    }

    #[test]
    fn status_focus_ring_is_blended_and_lightened() {
        let theme = Theme::light();
        let c = theme.colors();
        assert_eq!(theme.focus_border_color(Status::Default), c.focus);

        let ring = theme.focus_border_color(Status::Error);
        assert_eq!(ring, lighter(rgb_with_alpha_of(c.status_error, c.focus), 110));
        assert_eq!(rgba8(ring)[3], rgba8(c.focus)[3]);
        assert_ne!(ring, rgb_with_alpha_of(c.status_error, c.focus));
    }

    #[test]
    fn status_border_brightens_on_any_interaction() {
        let theme = Theme::light();
        let c = theme.colors();

        let calm = theme.text_field_border_color(MouseState::Normal, FocusState::NotFocused, Status::Warning);
        assert_eq!(calm, c.status_warning);

        for (mouse, focus) in [
            (MouseState::Normal, FocusState::Focused),
            (MouseState::Hovered, FocusState::NotFocused),
            (MouseState::Pressed, FocusState::NotFocused),
            (MouseState::Hovered, FocusState::Focused),
        ] {
            assert_eq!(
                theme.text_field_border_color(mouse, focus, Status::Warning),
                c.status_warning_hovered
            );
        }

        assert_eq!(
            theme.text_field_border_color(MouseState::Disabled, FocusState::NotFocused, Status::Error),
            c.status_error
        );
    }

    #[test]
    fn default_text_field_border_uses_accent_when_focused() {
        let theme = Theme::light();
        assert_eq!(
            theme.text_field_border_color(MouseState::Normal, FocusState::Focused, Status::Default),
            theme.colors().primary
        );
        assert_eq!(
            theme.text_field_border_color(MouseState::Disabled, FocusState::Focused, Status::Default),
            theme.colors().border_disabled
        );
    }

    #[test]
    fn scroll_bar_widens_on_hover() {
        let theme = Theme::light();
        let m = theme.metrics();
        assert_eq!(theme.scroll_bar_thickness(MouseState::Normal), m.scroll_bar_thickness_small);
        assert_eq!(theme.scroll_bar_thickness(MouseState::Pressed), m.scroll_bar_thickness_full);
    }

    #[test]
    fn metrics_follow_theme() {
        let theme = Theme::light().with_metrics(|m| {
            m.icon_extent = 20.0;
            m.animation_duration = 0;
        });
        assert_eq!(theme.icon_size(), Size::new(20.0, 20.0));
        assert_eq!(theme.animation_duration(AnimationKind::Base), Duration::ZERO);
    }
}
