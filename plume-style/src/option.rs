//! # Style Options
//!
//! A [StyleOption] is the snapshot the host passes with every style request:
//! geometry, raw state flags, text, icon, the originating widget, plus
//! control-specific details. The closed element enums name everything the
//! style can be asked to draw, measure or report.

use vello::kurbo::Rect;

use crate::icon_cache::IconId;
use crate::state::{ColorRole, StateFlags, WidgetStates};
use crate::widget::WidgetKey;

/// Declare a closed enum together with the list of its variants.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }
    };
}

closed_enum! {
    /// Elementary shapes: frames, panels and indicators.
    #[allow(missing_docs)]
    pub enum PrimitiveElement {
        Frame,
        FrameFocusRect,
        FrameGroupBox,
        FrameLineEdit,
        FrameMenu,
        FrameStatusBarItem,
        FrameTabWidget,
        FrameButtonBevel,
        PanelButtonCommand,
        PanelButtonTool,
        PanelLineEdit,
        PanelMenu,
        PanelMenuBar,
        PanelTipLabel,
        PanelItemViewItem,
        PanelItemViewRow,
        PanelScrollAreaCorner,
        IndicatorCheckBox,
        IndicatorRadioButton,
        IndicatorSwitch,
        IndicatorArrowUp,
        IndicatorArrowDown,
        IndicatorArrowLeft,
        IndicatorArrowRight,
        IndicatorSpinUp,
        IndicatorSpinDown,
        IndicatorTabClose,
        IndicatorBranch,
        IndicatorMenuCheckMark,
        IndicatorButtonDropDown,
        IndicatorToolBarSeparator,
        IndicatorToolBarHandle,
        IndicatorDockWidgetResizeHandle,
        Widget,
    }
}

closed_enum! {
    /// Whole controls or their labelled parts.
    #[allow(missing_docs)]
    pub enum ControlElement {
        PushButton,
        PushButtonBevel,
        PushButtonLabel,
        CheckBox,
        CheckBoxLabel,
        RadioButton,
        RadioButtonLabel,
        Switch,
        TabBarTab,
        TabBarTabShape,
        TabBarTabLabel,
        ProgressBar,
        ProgressBarGroove,
        ProgressBarContents,
        ProgressBarLabel,
        MenuItem,
        MenuBarItem,
        MenuBarEmptyArea,
        ToolButtonLabel,
        ItemViewItem,
        Splitter,
        ScrollBarSlider,
        ScrollBarAddLine,
        ScrollBarSubLine,
        ComboBoxLabel,
        ToolBar,
        HeaderSection,
        HeaderLabel,
        ShapedFrame,
        SizeGrip,
        RubberBand,
        DockWidgetTitle,
    }
}

closed_enum! {
    /// Sub-rectangles of simple controls.
    #[allow(missing_docs)]
    pub enum SubElement {
        PushButtonContents,
        PushButtonFocusRect,
        CheckBoxIndicator,
        CheckBoxContents,
        CheckBoxFocusRect,
        RadioButtonIndicator,
        RadioButtonContents,
        RadioButtonFocusRect,
        SwitchIndicator,
        ProgressBarGroove,
        ProgressBarContents,
        ProgressBarLabel,
        LineEditContents,
        TabBarTabText,
        TabBarTabLeftButton,
        TabBarTabRightButton,
        ItemViewItemCheckIndicator,
        ItemViewItemDecoration,
        ItemViewItemText,
        ItemViewItemFocusRect,
        ComboBoxFocusRect,
        SliderFocusRect,
        FrameContents,
    }
}

closed_enum! {
    /// Controls made of several interactive parts.
    #[allow(missing_docs)]
    pub enum ComplexControl {
        SpinBox,
        ComboBox,
        ScrollBar,
        Slider,
        ToolButton,
        TitleBar,
        Dial,
        GroupBox,
    }
}

closed_enum! {
    /// Interactive parts of complex controls.
    #[allow(missing_docs)]
    pub enum SubControl {
        SpinBoxUp,
        SpinBoxDown,
        SpinBoxFrame,
        SpinBoxEditField,
        ComboBoxFrame,
        ComboBoxEditField,
        ComboBoxArrow,
        ScrollBarAddLine,
        ScrollBarSubLine,
        ScrollBarAddPage,
        ScrollBarSubPage,
        ScrollBarSlider,
        ScrollBarGroove,
        SliderGroove,
        SliderHandle,
        SliderTickmarks,
        ToolButton,
        ToolButtonMenu,
        TitleBarLabel,
        TitleBarCloseButton,
        DialGroove,
        DialHandle,
        GroupBoxLabel,
        GroupBoxCheckBox,
        GroupBoxFrame,
        GroupBoxContents,
    }
}

closed_enum! {
    /// Sizes the style reports in logical pixels.
    #[allow(missing_docs)]
    pub enum PixelMetric {
        ButtonMargin,
        ButtonIconSize,
        ButtonDefaultIndicator,
        DefaultFrameWidth,
        FocusFrameWidth,
        IndicatorWidth,
        IndicatorHeight,
        ExclusiveIndicatorWidth,
        ExclusiveIndicatorHeight,
        CheckBoxLabelSpacing,
        RadioButtonLabelSpacing,
        ScrollBarExtent,
        ScrollBarSliderMin,
        SliderThickness,
        SliderLength,
        SliderControlThickness,
        SliderTickmarkOffset,
        DialTickLength,
        MenuHMargin,
        MenuVMargin,
        MenuPanelWidth,
        MenuBarItemSpacing,
        MenuBarPanelWidth,
        TabBarTabHSpace,
        TabBarTabVSpace,
        ToolBarIconSize,
        ToolBarItemSpacing,
        SmallIconSize,
        LargeIconSize,
        ListViewIconSize,
        LayoutHorizontalSpacing,
        LayoutVerticalSpacing,
        LayoutMargin,
        ToolTipLabelFrameWidth,
        SplitterWidth,
        SpinBoxFrameWidth,
        ComboBoxFrameWidth,
        TextCursorWidth,
        HeaderMargin,
        DockWidgetTitleMargin,
        ProgressBarChunkWidth,
    }
}

closed_enum! {
    /// Behavioural hints the style reports.
    #[allow(missing_docs)]
    pub enum StyleHint {
        ComboBoxPopup,
        MenuSubMenuDelay,
        ItemViewActivateItemOnSingleClick,
        ToolTipWakeUpDelay,
        ScrollBarTransient,
        DialogButtonsHaveIcons,
        UnderlineShortcut,
        FocusFrameAboveWidget,
        SliderAbsoluteSetButtons,
        TabBarElideMode,
        WidgetAnimationDuration,
        RubberBandTranslucent,
    }
}

closed_enum! {
    /// Controls whose size the style computes from their contents.
    #[allow(missing_docs)]
    pub enum ContentsType {
        PushButton,
        CheckBox,
        RadioButton,
        Switch,
        ToolButton,
        ComboBox,
        SpinBox,
        LineEdit,
        MenuItem,
        MenuBarItem,
        TabBarTab,
        ProgressBar,
        Slider,
        ItemViewItem,
        GroupBox,
        HeaderSection,
        ScrollBar,
    }
}

/// Every kind of request the facade dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    #[allow(missing_docs)]
    Primitive(PrimitiveElement),
    #[allow(missing_docs)]
    Control(ControlElement),
    #[allow(missing_docs)]
    SubElement(SubElement),
    #[allow(missing_docs)]
    Complex(ComplexControl),
    #[allow(missing_docs)]
    SubControl(ComplexControl, SubControl),
    #[allow(missing_docs)]
    Metric(PixelMetric),
    #[allow(missing_docs)]
    Hint(StyleHint),
    #[allow(missing_docs)]
    Contents(ContentsType),
}

/// Kind of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItemKind {
    /// A regular action.
    #[default]
    Normal,
    /// A separator line.
    Separator,
    /// An entry opening a sub-menu.
    SubMenu,
}

/// Control-specific option data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionDetail {
    /// No extra data.
    #[default]
    None,
    /// Push, tool and command-link buttons.
    Button {
        /// The dialog's default button.
        default: bool,
        /// Drawn without a bevel until hovered.
        flat: bool,
        /// Opens a menu.
        has_menu: bool,
    },
    /// Sliders and dials.
    Slider {
        #[allow(missing_docs)]
        minimum: f64,
        #[allow(missing_docs)]
        maximum: f64,
        #[allow(missing_docs)]
        value: f64,
        /// Spacing between tick marks in value units. Zero draws none.
        tick_interval: f64,
    },
    /// Progress bars.
    Progress {
        #[allow(missing_docs)]
        minimum: f64,
        #[allow(missing_docs)]
        maximum: f64,
        #[allow(missing_docs)]
        value: f64,
        /// Draw the percentage text.
        text_visible: bool,
    },
    /// Scroll bars.
    ScrollBar {
        #[allow(missing_docs)]
        minimum: f64,
        #[allow(missing_docs)]
        maximum: f64,
        #[allow(missing_docs)]
        value: f64,
        /// Visible portion, in value units.
        page_step: f64,
    },
    /// Tabs.
    Tab {
        /// Shows a close button.
        closable: bool,
        /// Index in the tab bar.
        index: usize,
        /// Number of tabs in the bar.
        count: usize,
    },
    /// Menu and menu bar entries.
    MenuItem {
        #[allow(missing_docs)]
        kind: MenuItemKind,
        /// Keyboard shortcut text.
        shortcut: String,
        /// Has a check mark slot.
        checkable: bool,
    },
    /// Item view rows.
    ItemView {
        /// Secondary text under the main text.
        caption: Option<String>,
        /// Has a check box.
        checkable: bool,
    },
    /// Combo boxes.
    ComboBox {
        /// Has an editable text field.
        editable: bool,
    },
    /// Spin boxes.
    SpinBox {
        /// The value can still increase.
        up_enabled: bool,
        /// The value can still decrease.
        down_enabled: bool,
    },
    /// Group boxes.
    GroupBox {
        /// Title has a check box.
        checkable: bool,
    },
    /// Frames.
    Frame {
        /// Outline width.
        line_width: f64,
    },
}

/// Snapshot of a widget for one style request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleOption {
    /// Area to paint or measure in.
    pub rect: Rect,
    /// Raw state flags.
    pub flags: StateFlags,
    /// Label text.
    pub text: String,
    /// Icon, if the widget shows one.
    pub icon: Option<IconId>,
    /// Originating widget. [None] disables animation and overrides.
    pub widget: Option<WidgetKey>,
    /// Color family for buttons.
    pub role: ColorRole,
    /// Sub-control currently pressed.
    pub active_sub_control: Option<SubControl>,
    /// Sub-control under the cursor.
    pub hovered_sub_control: Option<SubControl>,
    /// Control-specific data.
    pub detail: OptionDetail,
}

impl StyleOption {
    /// Create an option for `rect` with the given flags.
    pub fn new(rect: Rect, flags: StateFlags) -> Self {
        Self {
            rect,
            flags,
            ..Default::default()
        }
    }

    #[allow(missing_docs)]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[allow(missing_docs)]
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    #[allow(missing_docs)]
    pub fn with_widget(mut self, widget: WidgetKey) -> Self {
        self.widget = Some(widget);
        self
    }

    #[allow(missing_docs)]
    pub fn with_role(mut self, role: ColorRole) -> Self {
        self.role = role;
        self
    }

    #[allow(missing_docs)]
    pub fn with_detail(mut self, detail: OptionDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Mark sub-controls as pressed and hovered.
    pub fn with_sub_controls(mut self, active: Option<SubControl>, hovered: Option<SubControl>) -> Self {
        self.active_sub_control = active;
        self.hovered_sub_control = hovered;
        self
    }

    /// Classified state of the flags.
    pub fn states(&self) -> WidgetStates {
        WidgetStates::classify(self.flags)
    }

    /// Whether a sub-control is under the cursor.
    pub fn is_hovered(&self, sub_control: SubControl) -> bool {
        self.hovered_sub_control == Some(sub_control)
    }

    /// Whether a sub-control is pressed.
    pub fn is_pressed(&self, sub_control: SubControl) -> bool {
        self.active_sub_control == Some(sub_control)
    }

    /// Position of a ranged value in `[0, 1]`, or [None] without range data.
    pub fn value_fraction(&self) -> Option<f64> {
        let (minimum, maximum, value) = match &self.detail {
            OptionDetail::Slider { minimum, maximum, value, .. }
            | OptionDetail::Progress { minimum, maximum, value, .. }
            | OptionDetail::ScrollBar { minimum, maximum, value, .. } => (*minimum, *maximum, *value),
            _ => return None,
        };
        if maximum <= minimum {
            return Some(0.0);
        }
        Some(((value - minimum) / (maximum - minimum)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_lists_are_complete() {
        assert_eq!(ComplexControl::ALL.len(), 8);
        assert_eq!(PrimitiveElement::ALL.first(), Some(&PrimitiveElement::Frame));
        assert_eq!(ContentsType::ALL.last(), Some(&ContentsType::ScrollBar));
    }

    #[test]
    fn value_fraction() {
        let option = StyleOption::default().with_detail(OptionDetail::Slider {
            minimum: 10.0,
            maximum: 20.0,
            value: 15.0,
            tick_interval: 0.0,
        });
        assert_eq!(option.value_fraction(), Some(0.5));

        let empty = StyleOption::default().with_detail(OptionDetail::Progress {
            minimum: 0.0,
            maximum: 0.0,
            value: 3.0,
            text_visible: true,
        });
        assert_eq!(empty.value_fraction(), Some(0.0));
        assert_eq!(StyleOption::default().value_fraction(), None);
    }

    #[test]
    fn sub_control_state() {
        let option = StyleOption::default()
            .with_sub_controls(Some(SubControl::SliderHandle), Some(SubControl::SliderGroove));
        assert!(option.is_pressed(SubControl::SliderHandle));
        assert!(option.is_hovered(SubControl::SliderGroove));
        assert!(!option.is_hovered(SubControl::SliderHandle));
    }
}
