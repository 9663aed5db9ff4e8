//! The dispatch tables of the facade.
//!
//! Each `*_handler` function is an exhaustive `match` over one closed enum,
//! so adding a variant fails to compile until it is either given a handler or
//! explicitly left to the base style with [None].

use indexmap::IndexMap;
use vello::kurbo::{Rect, Size};

use super::{layout, paint, Style};
use crate::option::{
    ComplexControl, ContentsType, ControlElement, ControlKind, PixelMetric, PrimitiveElement, StyleHint,
    StyleOption, SubControl, SubElement,
};
use crate::render::Painter;

type DrawHandler = fn(&Style, &StyleOption, &mut dyn Painter);
type RectHandler = fn(&Style, &StyleOption) -> Rect;
type SubControlHandler = fn(&Style, SubControl, &StyleOption) -> Option<Rect>;
type SizeHandler = fn(&Style, &StyleOption, Size) -> Size;
type MetricHandler = fn(&Style, Option<&StyleOption>) -> f64;
type HintHandler = fn(&Style, Option<&StyleOption>) -> i32;

/// One handler per themed request kind.
pub struct HandlerTable {
    primitives: IndexMap<PrimitiveElement, DrawHandler>,
    controls: IndexMap<ControlElement, DrawHandler>,
    complex: IndexMap<ComplexControl, DrawHandler>,
    sub_elements: IndexMap<SubElement, RectHandler>,
    sub_controls: IndexMap<ComplexControl, SubControlHandler>,
    contents: IndexMap<ContentsType, SizeHandler>,
    metrics: IndexMap<PixelMetric, MetricHandler>,
    hints: IndexMap<StyleHint, HintHandler>,
}

fn collect<K, H>(all: &[K], handler: fn(K) -> Option<H>) -> IndexMap<K, H>
where
    K: Copy + Eq + std::hash::Hash,
{
    all.iter()
        .filter_map(|kind| handler(*kind).map(|handler| (*kind, handler)))
        .collect()
}

impl HandlerTable {
    /// Build the tables for every themed kind.
    pub fn build() -> Self {
        let table = Self {
            primitives: collect(PrimitiveElement::ALL, primitive_handler),
            controls: collect(ControlElement::ALL, control_handler),
            complex: collect(ComplexControl::ALL, complex_handler),
            sub_elements: collect(SubElement::ALL, sub_element_handler),
            sub_controls: collect(ComplexControl::ALL, sub_control_handler),
            contents: collect(ContentsType::ALL, contents_handler),
            metrics: collect(PixelMetric::ALL, metric_handler),
            hints: collect(StyleHint::ALL, hint_handler),
        };
        log::debug!("Style handles {} request kinds itself", table.len());
        table
    }

    /// Number of themed kinds.
    pub fn len(&self) -> usize {
        self.primitives.len()
            + self.controls.len()
            + self.complex.len()
            + self.sub_elements.len()
            + self.sub_controls.len()
            + self.contents.len()
            + self.metrics.len()
            + self.hints.len()
    }

    /// Whether no kind is themed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether requests of `kind` have a handler.
    pub fn handles(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::Primitive(element) => self.primitives.contains_key(&element),
            ControlKind::Control(element) => self.controls.contains_key(&element),
            ControlKind::SubElement(element) => self.sub_elements.contains_key(&element),
            ControlKind::Complex(control) => self.complex.contains_key(&control),
            ControlKind::SubControl(control, _) => self.sub_controls.contains_key(&control),
            ControlKind::Metric(metric) => self.metrics.contains_key(&metric),
            ControlKind::Hint(hint) => self.hints.contains_key(&hint),
            ControlKind::Contents(contents) => self.contents.contains_key(&contents),
        }
    }

    /// Every themed kind, in declaration order.
    pub fn themed_kinds(&self) -> impl Iterator<Item = ControlKind> + '_ {
        self.primitives
            .keys()
            .map(|k| ControlKind::Primitive(*k))
            .chain(self.controls.keys().map(|k| ControlKind::Control(*k)))
            .chain(self.sub_elements.keys().map(|k| ControlKind::SubElement(*k)))
            .chain(self.complex.keys().map(|k| ControlKind::Complex(*k)))
            .chain(self.metrics.keys().map(|k| ControlKind::Metric(*k)))
            .chain(self.hints.keys().map(|k| ControlKind::Hint(*k)))
            .chain(self.contents.keys().map(|k| ControlKind::Contents(*k)))
    }

    pub(super) fn primitive(&self, element: PrimitiveElement) -> Option<DrawHandler> {
        self.primitives.get(&element).copied()
    }

    pub(super) fn control(&self, element: ControlElement) -> Option<DrawHandler> {
        self.controls.get(&element).copied()
    }

    pub(super) fn complex(&self, control: ComplexControl) -> Option<DrawHandler> {
        self.complex.get(&control).copied()
    }

    pub(super) fn sub_element(&self, element: SubElement) -> Option<RectHandler> {
        self.sub_elements.get(&element).copied()
    }

    pub(super) fn sub_control(&self, control: ComplexControl) -> Option<SubControlHandler> {
        self.sub_controls.get(&control).copied()
    }

    pub(super) fn contents(&self, contents: ContentsType) -> Option<SizeHandler> {
        self.contents.get(&contents).copied()
    }

    pub(super) fn metric(&self, metric: PixelMetric) -> Option<MetricHandler> {
        self.metrics.get(&metric).copied()
    }

    pub(super) fn hint(&self, hint: StyleHint) -> Option<HintHandler> {
        self.hints.get(&hint).copied()
    }
}

fn primitive_handler(element: PrimitiveElement) -> Option<DrawHandler> {
    let handler: DrawHandler = match element {
        PrimitiveElement::Frame => paint::frame,
        PrimitiveElement::FrameFocusRect => paint::focus_frame,
        PrimitiveElement::FrameGroupBox => paint::group_box_frame,
        PrimitiveElement::FrameLineEdit | PrimitiveElement::PanelLineEdit => paint::line_edit_frame,
        PrimitiveElement::FrameMenu | PrimitiveElement::PanelMenu => paint::menu_panel,
        PrimitiveElement::FrameStatusBarItem => paint::status_bar_item,
        PrimitiveElement::FrameTabWidget => paint::tab_widget_frame,
        PrimitiveElement::FrameButtonBevel | PrimitiveElement::PanelButtonCommand => paint::button_bevel,
        PrimitiveElement::PanelButtonTool => paint::tool_button_panel,
        PrimitiveElement::PanelMenuBar => paint::menu_bar_panel,
        PrimitiveElement::PanelTipLabel => paint::tooltip_panel,
        PrimitiveElement::PanelItemViewItem | PrimitiveElement::PanelItemViewRow => paint::item_view_panel,
        PrimitiveElement::IndicatorCheckBox => paint::check_box_indicator,
        PrimitiveElement::IndicatorRadioButton => paint::radio_button_indicator,
        PrimitiveElement::IndicatorSwitch => paint::switch_indicator,
        PrimitiveElement::IndicatorArrowUp => paint::arrow_up,
        PrimitiveElement::IndicatorArrowDown | PrimitiveElement::IndicatorButtonDropDown => paint::arrow_down,
        PrimitiveElement::IndicatorArrowLeft => paint::arrow_left,
        PrimitiveElement::IndicatorArrowRight => paint::arrow_right,
        PrimitiveElement::IndicatorSpinUp => paint::spin_up,
        PrimitiveElement::IndicatorSpinDown => paint::spin_down,
        PrimitiveElement::IndicatorTabClose => paint::tab_close,
        PrimitiveElement::IndicatorMenuCheckMark => paint::menu_check_mark,
        PrimitiveElement::IndicatorToolBarSeparator => paint::tool_bar_separator,
        PrimitiveElement::PanelScrollAreaCorner
        | PrimitiveElement::IndicatorBranch
        | PrimitiveElement::IndicatorToolBarHandle
        | PrimitiveElement::IndicatorDockWidgetResizeHandle
        | PrimitiveElement::Widget => return None,
    };
    Some(handler)
}

fn control_handler(element: ControlElement) -> Option<DrawHandler> {
    let handler: DrawHandler = match element {
        ControlElement::PushButton => paint::push_button,
        ControlElement::PushButtonBevel => paint::button_bevel,
        ControlElement::PushButtonLabel => paint::push_button_label,
        ControlElement::CheckBox => paint::check_box,
        ControlElement::RadioButton => paint::radio_button,
        ControlElement::CheckBoxLabel | ControlElement::RadioButtonLabel => paint::check_label,
        ControlElement::Switch => paint::switch,
        ControlElement::TabBarTab => paint::tab,
        ControlElement::TabBarTabShape => paint::tab_shape,
        ControlElement::TabBarTabLabel => paint::tab_label,
        ControlElement::ProgressBar => paint::progress_bar,
        ControlElement::ProgressBarGroove => paint::progress_bar_groove,
        ControlElement::ProgressBarContents => paint::progress_bar_contents,
        ControlElement::ProgressBarLabel => paint::progress_bar_label,
        ControlElement::MenuItem => paint::menu_item,
        ControlElement::MenuBarItem => paint::menu_bar_item,
        ControlElement::MenuBarEmptyArea => paint::menu_bar_panel,
        ControlElement::ToolButtonLabel => paint::tool_button_label,
        ControlElement::ItemViewItem => paint::item_view_item,
        ControlElement::Splitter => paint::splitter,
        ControlElement::ScrollBarSlider => paint::scroll_bar_slider,
        ControlElement::ComboBoxLabel => paint::combo_box_label,
        ControlElement::ScrollBarAddLine
        | ControlElement::ScrollBarSubLine
        | ControlElement::ToolBar
        | ControlElement::HeaderSection
        | ControlElement::HeaderLabel
        | ControlElement::ShapedFrame
        | ControlElement::SizeGrip
        | ControlElement::RubberBand
        | ControlElement::DockWidgetTitle => return None,
    };
    Some(handler)
}

fn complex_handler(control: ComplexControl) -> Option<DrawHandler> {
    let handler: DrawHandler = match control {
        ComplexControl::SpinBox => paint::spin_box,
        ComplexControl::ComboBox => paint::combo_box,
        ComplexControl::ScrollBar => paint::scroll_bar,
        ComplexControl::Slider => paint::slider,
        ComplexControl::ToolButton => paint::tool_button,
        ComplexControl::Dial => paint::dial,
        ComplexControl::GroupBox => paint::group_box,
        ComplexControl::TitleBar => return None,
    };
    Some(handler)
}

fn sub_element_handler(element: SubElement) -> Option<RectHandler> {
    let handler: RectHandler = match element {
        SubElement::PushButtonContents => layout::push_button_contents,
        SubElement::PushButtonFocusRect => layout::whole_rect,
        SubElement::CheckBoxIndicator
        | SubElement::CheckBoxFocusRect
        | SubElement::RadioButtonIndicator
        | SubElement::RadioButtonFocusRect => layout::check_indicator,
        SubElement::CheckBoxContents | SubElement::RadioButtonContents => layout::check_contents,
        SubElement::SwitchIndicator => layout::switch_indicator,
        SubElement::ProgressBarGroove | SubElement::ProgressBarContents => layout::progress_groove,
        SubElement::ProgressBarLabel => layout::progress_label,
        SubElement::LineEditContents => layout::line_edit_contents,
        SubElement::FrameContents => layout::frame_contents,
        SubElement::TabBarTabText
        | SubElement::TabBarTabLeftButton
        | SubElement::TabBarTabRightButton
        | SubElement::ItemViewItemCheckIndicator
        | SubElement::ItemViewItemDecoration
        | SubElement::ItemViewItemText
        | SubElement::ItemViewItemFocusRect
        | SubElement::ComboBoxFocusRect
        | SubElement::SliderFocusRect => return None,
    };
    Some(handler)
}

fn sub_control_handler(control: ComplexControl) -> Option<SubControlHandler> {
    let handler: SubControlHandler = match control {
        ComplexControl::SpinBox => layout::spin_box_sub_control,
        ComplexControl::ComboBox => layout::combo_box_sub_control,
        ComplexControl::ScrollBar => layout::scroll_bar_sub_control,
        ComplexControl::Slider => layout::slider_sub_control,
        ComplexControl::ToolButton => layout::tool_button_sub_control,
        ComplexControl::Dial => layout::dial_sub_control,
        ComplexControl::GroupBox => layout::group_box_sub_control,
        ComplexControl::TitleBar => return None,
    };
    Some(handler)
}

fn contents_handler(contents: ContentsType) -> Option<SizeHandler> {
    let handler: SizeHandler = match contents {
        ContentsType::PushButton => layout::push_button_size,
        ContentsType::CheckBox | ContentsType::RadioButton => layout::check_box_size,
        ContentsType::Switch => layout::switch_size,
        ContentsType::ToolButton => layout::tool_button_size,
        ContentsType::ComboBox => layout::combo_box_size,
        ContentsType::SpinBox => layout::spin_box_size,
        ContentsType::LineEdit => layout::line_edit_size,
        ContentsType::MenuItem => layout::menu_item_size,
        ContentsType::MenuBarItem => layout::menu_bar_item_size,
        ContentsType::TabBarTab => layout::tab_size,
        ContentsType::ProgressBar => layout::progress_bar_size,
        ContentsType::Slider => layout::slider_size,
        ContentsType::ItemViewItem => layout::item_view_item_size,
        ContentsType::GroupBox | ContentsType::HeaderSection | ContentsType::ScrollBar => return None,
    };
    Some(handler)
}

fn metric_handler(metric: PixelMetric) -> Option<MetricHandler> {
    let handler: MetricHandler = match metric {
        PixelMetric::ButtonMargin
        | PixelMetric::CheckBoxLabelSpacing
        | PixelMetric::RadioButtonLabelSpacing
        | PixelMetric::LayoutHorizontalSpacing
        | PixelMetric::LayoutVerticalSpacing
        | PixelMetric::LayoutMargin
        | PixelMetric::TabBarTabHSpace => layout::metric_spacing,
        PixelMetric::MenuHMargin
        | PixelMetric::MenuVMargin
        | PixelMetric::MenuBarItemSpacing
        | PixelMetric::ToolBarItemSpacing
        | PixelMetric::TabBarTabVSpace
        | PixelMetric::SplitterWidth => layout::metric_half_spacing,
        PixelMetric::ButtonIconSize
        | PixelMetric::SmallIconSize
        | PixelMetric::ToolBarIconSize
        | PixelMetric::ListViewIconSize
        | PixelMetric::IndicatorWidth
        | PixelMetric::IndicatorHeight
        | PixelMetric::ExclusiveIndicatorWidth
        | PixelMetric::ExclusiveIndicatorHeight => layout::metric_icon,
        PixelMetric::LargeIconSize => layout::metric_large_icon,
        PixelMetric::ButtonDefaultIndicator => layout::metric_none,
        PixelMetric::DefaultFrameWidth
        | PixelMetric::SpinBoxFrameWidth
        | PixelMetric::ComboBoxFrameWidth
        | PixelMetric::MenuPanelWidth
        | PixelMetric::MenuBarPanelWidth
        | PixelMetric::ToolTipLabelFrameWidth => layout::metric_border,
        PixelMetric::FocusFrameWidth => layout::metric_focus_border,
        PixelMetric::ScrollBarExtent => layout::metric_scroll_bar_extent,
        PixelMetric::ScrollBarSliderMin | PixelMetric::SliderThickness => layout::metric_medium_control,
        PixelMetric::SliderLength | PixelMetric::SliderControlThickness => layout::metric_small_control,
        PixelMetric::SliderTickmarkOffset => layout::metric_slider_tick_offset,
        PixelMetric::DialTickLength => layout::metric_dial_tick_length,
        PixelMetric::TextCursorWidth
        | PixelMetric::HeaderMargin
        | PixelMetric::DockWidgetTitleMargin
        | PixelMetric::ProgressBarChunkWidth => return None,
    };
    Some(handler)
}

fn hint_handler(hint: StyleHint) -> Option<HintHandler> {
    let handler: HintHandler = match hint {
        StyleHint::ComboBoxPopup
        | StyleHint::ScrollBarTransient
        | StyleHint::UnderlineShortcut
        | StyleHint::FocusFrameAboveWidget => layout::hint_enabled,
        StyleHint::ItemViewActivateItemOnSingleClick | StyleHint::DialogButtonsHaveIcons => layout::hint_disabled,
        StyleHint::MenuSubMenuDelay => layout::hint_sub_menu_delay,
        StyleHint::SliderAbsoluteSetButtons => layout::hint_left_button,
        StyleHint::WidgetAnimationDuration => layout::hint_animation_duration,
        StyleHint::ToolTipWakeUpDelay | StyleHint::TabBarElideMode | StyleHint::RubberBandTranslucent => {
            return None
        },
    };
    Some(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_kinds_are_left_to_the_base_style() {
        let table = HandlerTable::build();
        assert!(table.handles(ControlKind::Primitive(PrimitiveElement::FrameFocusRect)));
        assert!(!table.handles(ControlKind::Primitive(PrimitiveElement::IndicatorBranch)));
        assert!(!table.handles(ControlKind::Complex(ComplexControl::TitleBar)));
        assert!(table.handles(ControlKind::SubControl(ComplexControl::Slider, SubControl::SliderHandle)));
        assert!(!table.handles(ControlKind::Metric(PixelMetric::TextCursorWidth)));
        assert!(table.handles(ControlKind::Hint(StyleHint::WidgetAnimationDuration)));
    }

    #[test]
    fn themed_kinds_follow_declaration_order() {
        let table = HandlerTable::build();
        let kinds: Vec<_> = table.themed_kinds().collect();
        assert_eq!(kinds.first(), Some(&ControlKind::Primitive(PrimitiveElement::Frame)));
        assert!(!table.is_empty());
        assert_eq!(kinds.len(), table.len() - table.sub_controls.len());
    }
}
