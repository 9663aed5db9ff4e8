#![allow(missing_docs)]
//! Interaction state of a widget.
//!
//! The host toolkit reports a raw [StateFlags] set for every paint. The
//! classifiers here turn it into the small closed enums the resolver works
//! with. They are pure: no theme, no globals, same flags in, same state out.

use bitflags::bitflags;

bitflags! {
    /// Raw widget flags as reported by the host toolkit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u32 {
        /// The widget accepts input.
        const ENABLED = 1 << 0;
        /// The mouse cursor is over the widget.
        const MOUSE_OVER = 1 << 1;
        /// The widget is pressed down.
        const SUNKEN = 1 << 2;
        /// The widget has keyboard focus.
        const HAS_FOCUS = 1 << 3;
        /// The item is selected, or the menu item is highlighted.
        const SELECTED = 1 << 4;
        /// The widget is checked.
        const ON = 1 << 5;
        /// The widget is partially checked.
        const NO_CHANGE = 1 << 6;
        /// The owning window is the active window.
        const ACTIVE_WINDOW = 1 << 7;
        /// The item is on an alternate row.
        const ALTERNATE = 1 << 8;
        /// The button only draws a background when interacted with.
        const AUTO_RAISE = 1 << 9;
        /// The widget is laid out horizontally.
        const HORIZONTAL = 1 << 10;
        /// The widget is read-only.
        const READ_ONLY = 1 << 11;
        /// The widget reports an informational status.
        const STATUS_INFO = 1 << 12;
        /// The widget reports a success status.
        const STATUS_SUCCESS = 1 << 13;
        /// The widget reports a warning status.
        const STATUS_WARNING = 1 << 14;
        /// The widget reports an error status.
        const STATUS_ERROR = 1 << 15;
    }
}

/// Pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseState {
    /// Idle.
    #[default]
    Normal,
    /// Under the cursor.
    Hovered,
    /// Pressed down.
    Pressed,
    /// Not accepting input.
    Disabled,
    /// Idle and drawn without background (flat buttons).
    Transparent,
}

/// Keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusState {
    #[default]
    NotFocused,
    Focused,
}

/// Item selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    NotSelected,
    Selected,
}

/// Tri-state check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    NotChecked,
    Checked,
    /// Partially checked.
    Indeterminate,
}

/// Whether the owning window is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveState {
    #[default]
    NotActive,
    Active,
}

/// Alternating row coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlternateState {
    #[default]
    NotAlternate,
    Alternate,
}

/// Validation status a widget reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No particular status.
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Error,
}

/// Color family a button is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorRole {
    /// Accent family, for default and checked buttons.
    Primary,
    /// Neutral family, for ordinary buttons.
    #[default]
    Secondary,
}

/// Every classification of one flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidgetStates {
    pub mouse: MouseState,
    pub focus: FocusState,
    pub selection: SelectionState,
    pub check: CheckState,
    pub active: ActiveState,
    pub alternate: AlternateState,
    pub status: Status,
}

impl WidgetStates {
    /// Classify a flag set on every axis.
    pub fn classify(flags: StateFlags) -> Self {
        Self {
            mouse: mouse_state(flags),
            focus: focus_state(flags),
            selection: selection_state(flags),
            check: check_state(flags),
            active: active_state(flags),
            alternate: alternate_state(flags),
            status: status(flags),
        }
    }
}

impl From<StateFlags> for WidgetStates {
    fn from(flags: StateFlags) -> Self {
        Self::classify(flags)
    }
}

/// Disabled, then pressed, then hovered, then normal.
pub fn mouse_state(flags: StateFlags) -> MouseState {
    if !flags.contains(StateFlags::ENABLED) {
        MouseState::Disabled
    } else if flags.contains(StateFlags::SUNKEN) {
        MouseState::Pressed
    } else if flags.contains(StateFlags::MOUSE_OVER) {
        MouseState::Hovered
    } else {
        MouseState::Normal
    }
}

/// Like [mouse_state], but an idle auto-raise button is [MouseState::Transparent].
pub fn tool_button_mouse_state(flags: StateFlags) -> MouseState {
    match mouse_state(flags) {
        MouseState::Normal if flags.contains(StateFlags::AUTO_RAISE) => MouseState::Transparent,
        state => state,
    }
}

/// A highlighted menu item reports [MouseState::Hovered] even without the cursor.
pub fn menu_item_mouse_state(flags: StateFlags) -> MouseState {
    if !flags.contains(StateFlags::ENABLED) {
        MouseState::Disabled
    } else if flags.contains(StateFlags::SUNKEN) {
        MouseState::Pressed
    } else if flags.intersects(StateFlags::SELECTED | StateFlags::MOUSE_OVER) {
        MouseState::Hovered
    } else {
        MouseState::Normal
    }
}

/// The selected tab does not react to hover or press.
pub fn tab_mouse_state(flags: StateFlags) -> MouseState {
    if flags.contains(StateFlags::SELECTED) && flags.contains(StateFlags::ENABLED) {
        MouseState::Normal
    } else {
        mouse_state(flags)
    }
}

/// Item views only press an item while the cursor stays over it.
pub fn list_item_mouse_state(flags: StateFlags) -> MouseState {
    if !flags.contains(StateFlags::ENABLED) {
        MouseState::Disabled
    } else if flags.contains(StateFlags::MOUSE_OVER | StateFlags::SUNKEN) {
        MouseState::Pressed
    } else if flags.contains(StateFlags::MOUSE_OVER) {
        MouseState::Hovered
    } else {
        MouseState::Normal
    }
}

/// Slider handles track the handle sub-control rather than the whole widget.
pub fn slider_handle_mouse_state(flags: StateFlags, handle_hovered: bool, handle_pressed: bool) -> MouseState {
    if !flags.contains(StateFlags::ENABLED) {
        MouseState::Disabled
    } else if handle_pressed {
        MouseState::Pressed
    } else if handle_hovered {
        MouseState::Hovered
    } else {
        MouseState::Normal
    }
}

pub fn focus_state(flags: StateFlags) -> FocusState {
    if flags.contains(StateFlags::HAS_FOCUS) {
        FocusState::Focused
    } else {
        FocusState::NotFocused
    }
}

pub fn selection_state(flags: StateFlags) -> SelectionState {
    if flags.contains(StateFlags::SELECTED) {
        SelectionState::Selected
    } else {
        SelectionState::NotSelected
    }
}

/// Partial check wins over check.
pub fn check_state(flags: StateFlags) -> CheckState {
    if flags.contains(StateFlags::NO_CHANGE) {
        CheckState::Indeterminate
    } else if flags.contains(StateFlags::ON) {
        CheckState::Checked
    } else {
        CheckState::NotChecked
    }
}

pub fn active_state(flags: StateFlags) -> ActiveState {
    if flags.contains(StateFlags::ACTIVE_WINDOW) {
        ActiveState::Active
    } else {
        ActiveState::NotActive
    }
}

pub fn alternate_state(flags: StateFlags) -> AlternateState {
    if flags.contains(StateFlags::ALTERNATE) {
        AlternateState::Alternate
    } else {
        AlternateState::NotAlternate
    }
}

/// Error, then warning, then success, then info.
pub fn status(flags: StateFlags) -> Status {
    if flags.contains(StateFlags::STATUS_ERROR) {
        Status::Error
    } else if flags.contains(StateFlags::STATUS_WARNING) {
        Status::Warning
    } else if flags.contains(StateFlags::STATUS_SUCCESS) {
        Status::Success
    } else if flags.contains(StateFlags::STATUS_INFO) {
        Status::Info
    } else {
        Status::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_flag_set() -> impl Iterator<Item = StateFlags> {
        (0..(1u32 << 16)).map(StateFlags::from_bits_truncate)
    }

    #[test]
    fn disabled_wins_everywhere() {
        for flags in every_flag_set().filter(|f| !f.contains(StateFlags::ENABLED)) {
            assert_eq!(mouse_state(flags), MouseState::Disabled);
            assert_eq!(tool_button_mouse_state(flags), MouseState::Disabled);
            assert_eq!(menu_item_mouse_state(flags), MouseState::Disabled);
            assert_eq!(tab_mouse_state(flags), MouseState::Disabled);
            assert_eq!(list_item_mouse_state(flags), MouseState::Disabled);
            assert_eq!(slider_handle_mouse_state(flags, true, true), MouseState::Disabled);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for flags in every_flag_set() {
            assert_eq!(WidgetStates::classify(flags), WidgetStates::classify(flags));
        }
    }

    #[test]
    fn mouse_precedence() {
        let enabled = StateFlags::ENABLED;
        assert_eq!(mouse_state(enabled), MouseState::Normal);
        assert_eq!(mouse_state(enabled | StateFlags::MOUSE_OVER), MouseState::Hovered);
        assert_eq!(
            mouse_state(enabled | StateFlags::MOUSE_OVER | StateFlags::SUNKEN),
            MouseState::Pressed
        );
        assert_eq!(
            mouse_state(StateFlags::MOUSE_OVER | StateFlags::SUNKEN),
            MouseState::Disabled
        );
    }

    #[test]
    fn check_states() {
        assert_eq!(check_state(StateFlags::empty()), CheckState::NotChecked);
        assert_eq!(check_state(StateFlags::ON), CheckState::Checked);
        assert_eq!(check_state(StateFlags::NO_CHANGE), CheckState::Indeterminate);
        assert_eq!(check_state(StateFlags::ON | StateFlags::NO_CHANGE), CheckState::Indeterminate);
    }

    #[test]
    fn status_precedence() {
        let all = StateFlags::STATUS_INFO
            | StateFlags::STATUS_SUCCESS
            | StateFlags::STATUS_WARNING
            | StateFlags::STATUS_ERROR;
        assert_eq!(status(all), Status::Error);
        assert_eq!(status(all - StateFlags::STATUS_ERROR), Status::Warning);
        assert_eq!(status(StateFlags::STATUS_INFO | StateFlags::STATUS_SUCCESS), Status::Success);
        assert_eq!(status(StateFlags::STATUS_INFO), Status::Info);
        assert_eq!(status(StateFlags::ENABLED), Status::Default);
    }

    #[test]
    fn auto_raise_is_transparent_when_idle() {
        let flat = StateFlags::ENABLED | StateFlags::AUTO_RAISE;
        assert_eq!(tool_button_mouse_state(flat), MouseState::Transparent);
        assert_eq!(tool_button_mouse_state(flat | StateFlags::MOUSE_OVER), MouseState::Hovered);
        assert_eq!(tool_button_mouse_state(StateFlags::ENABLED), MouseState::Normal);
    }

    #[test]
    fn highlighted_menu_item_is_hovered() {
        let flags = StateFlags::ENABLED | StateFlags::SELECTED;
        assert_eq!(menu_item_mouse_state(flags), MouseState::Hovered);
        assert_eq!(mouse_state(flags), MouseState::Normal);
    }

    #[test]
    fn selected_tab_ignores_hover() {
        let flags = StateFlags::ENABLED | StateFlags::SELECTED | StateFlags::MOUSE_OVER;
        assert_eq!(tab_mouse_state(flags), MouseState::Normal);
        assert_eq!(
            tab_mouse_state(flags - StateFlags::SELECTED),
            MouseState::Hovered
        );
    }

    #[test]
    fn list_item_press_needs_hover() {
        let flags = StateFlags::ENABLED | StateFlags::SUNKEN;
        assert_eq!(list_item_mouse_state(flags), MouseState::Normal);
        assert_eq!(
            list_item_mouse_state(flags | StateFlags::MOUSE_OVER),
            MouseState::Pressed
        );
    }
}
