//! Geometry handlers: sub-rectangles, content sizes, hit testing, metrics and hints.

use plume_theme::theme::{AnimationKind, ControlSize};
use vello::kurbo::{Point, Rect, Size};

use super::Style;
use crate::option::{ComplexControl, MenuItemKind, OptionDetail, StyleOption, SubControl};
use crate::render::{centered_square, shrink};
use crate::resolver::ThemeQueries;
use crate::state::{MouseState, StateFlags};

/// Order in which sub-controls are tried, innermost first.
pub(super) fn hit_test_order(control: ComplexControl) -> &'static [SubControl] {
    match control {
        ComplexControl::SpinBox => &[
            SubControl::SpinBoxUp,
            SubControl::SpinBoxDown,
            SubControl::SpinBoxEditField,
            SubControl::SpinBoxFrame,
        ],
        ComplexControl::ComboBox => &[
            SubControl::ComboBoxArrow,
            SubControl::ComboBoxEditField,
            SubControl::ComboBoxFrame,
        ],
        ComplexControl::ScrollBar => &[
            SubControl::ScrollBarSlider,
            SubControl::ScrollBarSubLine,
            SubControl::ScrollBarAddLine,
            SubControl::ScrollBarSubPage,
            SubControl::ScrollBarAddPage,
            SubControl::ScrollBarGroove,
        ],
        ComplexControl::Slider => &[SubControl::SliderHandle, SubControl::SliderGroove],
        ComplexControl::ToolButton => &[SubControl::ToolButtonMenu, SubControl::ToolButton],
        ComplexControl::TitleBar => &[SubControl::TitleBarCloseButton, SubControl::TitleBarLabel],
        ComplexControl::Dial => &[SubControl::DialHandle, SubControl::DialGroove],
        ComplexControl::GroupBox => &[
            SubControl::GroupBoxCheckBox,
            SubControl::GroupBoxLabel,
            SubControl::GroupBoxContents,
            SubControl::GroupBoxFrame,
        ],
    }
}

fn is_horizontal(option: &StyleOption) -> bool {
    option.flags.contains(StateFlags::HORIZONTAL)
}

fn button_has_menu(option: &StyleOption) -> bool {
    matches!(option.detail, OptionDetail::Button { has_menu: true, .. })
}

fn group_box_checkable(option: &StyleOption) -> bool {
    matches!(option.detail, OptionDetail::GroupBox { checkable: true })
}

/// Width of a switch indicator for a given icon extent.
pub(super) fn switch_width(extent: f64) -> f64 {
    extent * 2.0
}

/// Square of `side` at the leading edge of `rect`, vertically centered.
fn leading_square(rect: Rect, side: f64) -> Rect {
    let y0 = rect.center().y - side / 2.0;
    Rect::new(rect.x0, y0, rect.x0 + side, y0 + side)
}

fn square_at(center: Point, side: f64) -> Rect {
    Rect::from_center_size(center, Size::new(side, side))
}

fn after(rect: Rect, leading: Rect, gap: f64) -> Rect {
    Rect::new((leading.x1 + gap).min(rect.x1), rect.y0, rect.x1, rect.y1)
}

// Sub-elements.

pub(super) fn push_button_contents(style: &Style, option: &StyleOption) -> Rect {
    let r = option.rect;
    let (dx, dy) = (style.spacing().min(r.width() / 2.0), style.border_width().min(r.height() / 2.0));
    Rect::new(r.x0 + dx, r.y0 + dy, r.x1 - dx, r.y1 - dy)
}

pub(super) fn whole_rect(_style: &Style, option: &StyleOption) -> Rect {
    option.rect
}

pub(super) fn check_indicator(style: &Style, option: &StyleOption) -> Rect {
    leading_square(option.rect, style.icon_size().width)
}

pub(super) fn check_contents(style: &Style, option: &StyleOption) -> Rect {
    after(option.rect, check_indicator(style, option), style.spacing())
}

pub(super) fn switch_indicator(style: &Style, option: &StyleOption) -> Rect {
    let extent = style.icon_size().width;
    let y0 = option.rect.center().y - extent / 2.0;
    Rect::new(option.rect.x0, y0, option.rect.x0 + switch_width(extent), y0 + extent)
}

fn progress_label_width(style: &Style, option: &StyleOption) -> f64 {
    match option.detail {
        OptionDetail::Progress { text_visible: true, .. } => {
            (style.control_default_width() / 2.0).min(option.rect.width())
        },
        _ => 0.0,
    }
}

pub(super) fn progress_groove(style: &Style, option: &StyleOption) -> Rect {
    let label = progress_label_width(style, option);
    let r = option.rect;
    let gap = if label > 0.0 { style.spacing() } else { 0.0 };
    Rect::new(r.x0, r.y0, (r.x1 - label - gap).max(r.x0), r.y1)
}

pub(super) fn progress_label(style: &Style, option: &StyleOption) -> Rect {
    let label = progress_label_width(style, option);
    let r = option.rect;
    Rect::new(r.x1 - label, r.y0, r.x1, r.y1)
}

pub(super) fn line_edit_contents(style: &Style, option: &StyleOption) -> Rect {
    push_button_contents(style, option)
}

pub(super) fn frame_contents(style: &Style, option: &StyleOption) -> Rect {
    let width = match option.detail {
        OptionDetail::Frame { line_width } => line_width,
        _ => style.border_width(),
    };
    shrink(option.rect, width)
}

// Sub-controls.

pub(super) fn spin_box_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let border = style.border_width();
    let button_width = style.control_height(ControlSize::Small).min(r.width());
    let buttons = Rect::new(r.x1 - border - button_width, r.y0 + border, r.x1 - border, r.y1 - border);
    let middle = buttons.center().y;

    match sub_control {
        SubControl::SpinBoxFrame => Some(r),
        SubControl::SpinBoxUp => Some(Rect::new(buttons.x0, buttons.y0, buttons.x1, middle)),
        SubControl::SpinBoxDown => Some(Rect::new(buttons.x0, middle, buttons.x1, buttons.y1)),
        SubControl::SpinBoxEditField => Some(Rect::new(
            (r.x0 + style.spacing()).min(buttons.x0),
            r.y0 + border,
            buttons.x0,
            r.y1 - border,
        )),
        _ => None,
    }
}

pub(super) fn combo_box_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let border = style.border_width();
    let arrow_width = (style.icon_size().width + style.spacing()).min(r.width());
    let arrow = Rect::new(r.x1 - arrow_width, r.y0, r.x1, r.y1);

    match sub_control {
        SubControl::ComboBoxFrame => Some(r),
        SubControl::ComboBoxArrow => Some(arrow),
        SubControl::ComboBoxEditField => Some(Rect::new(
            (r.x0 + style.spacing()).min(arrow.x0),
            r.y0 + border,
            arrow.x0,
            r.y1 - border,
        )),
        _ => None,
    }
}

/// Geometry of a scroll bar along its main axis.
struct ScrollBarGeometry {
    groove: Rect,
    handle: Rect,
    horizontal: bool,
}

fn scroll_bar_geometry(style: &Style, option: &StyleOption) -> ScrollBarGeometry {
    let horizontal = is_horizontal(option);
    let groove = shrink(option.rect, style.scroll_bar_margin());
    let length = if horizontal { groove.width() } else { groove.height() };

    let (minimum, maximum, page_step) = match option.detail {
        OptionDetail::ScrollBar {
            minimum,
            maximum,
            page_step,
            ..
        } => (minimum, maximum, page_step),
        _ => (0.0, 0.0, 0.0),
    };
    let range = maximum - minimum;
    let min_length = style.control_height(ControlSize::Medium).min(length);
    let handle_length = if range <= 0.0 {
        length
    } else {
        (length * page_step / (range + page_step)).clamp(min_length, length)
    };
    let offset = (length - handle_length) * option.value_fraction().unwrap_or(0.0);

    let handle = if horizontal {
        Rect::new(groove.x0 + offset, groove.y0, groove.x0 + offset + handle_length, groove.y1)
    } else {
        Rect::new(groove.x0, groove.y0 + offset, groove.x1, groove.y0 + offset + handle_length)
    };

    ScrollBarGeometry {
        groove,
        handle,
        horizontal,
    }
}

pub(super) fn scroll_bar_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let ScrollBarGeometry {
        groove,
        handle,
        horizontal,
    } = scroll_bar_geometry(style, option);

    // There are no arrow buttons: the line steps are empty rectangles at both ends.
    let rect = match (sub_control, horizontal) {
        (SubControl::ScrollBarGroove, _) => groove,
        (SubControl::ScrollBarSlider, _) => handle,
        (SubControl::ScrollBarSubPage, true) => Rect::new(groove.x0, groove.y0, handle.x0, groove.y1),
        (SubControl::ScrollBarSubPage, false) => Rect::new(groove.x0, groove.y0, groove.x1, handle.y0),
        (SubControl::ScrollBarAddPage, true) => Rect::new(handle.x1, groove.y0, groove.x1, groove.y1),
        (SubControl::ScrollBarAddPage, false) => Rect::new(groove.x0, handle.y1, groove.x1, groove.y1),
        (SubControl::ScrollBarSubLine, true) => Rect::new(groove.x0, groove.y0, groove.x0, groove.y1),
        (SubControl::ScrollBarSubLine, false) => Rect::new(groove.x0, groove.y0, groove.x1, groove.y0),
        (SubControl::ScrollBarAddLine, true) => Rect::new(groove.x1, groove.y0, groove.x1, groove.y1),
        (SubControl::ScrollBarAddLine, false) => Rect::new(groove.x0, groove.y1, groove.x1, groove.y1),
        _ => return None,
    };
    Some(rect)
}

pub(super) fn slider_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let metrics = style.theme().metrics();
    let side = style.control_height(ControlSize::Small);
    let half = side / 2.0;
    let thickness = style.slider_groove_height();
    let fraction = option.value_fraction().unwrap_or(0.0);
    let center = r.center();
    let tick_start = half + metrics.slider_tick_spacing;
    let tick_end = tick_start + metrics.slider_tick_size;

    let rect = if is_horizontal(option) {
        let groove = Rect::new(r.x0 + half, center.y - thickness / 2.0, r.x1 - half, center.y + thickness / 2.0);
        match sub_control {
            SubControl::SliderGroove => groove,
            SubControl::SliderHandle => {
                square_at(Point::new(groove.x0 + groove.width() * fraction, center.y), side)
            },
            SubControl::SliderTickmarks => Rect::new(groove.x0, center.y + tick_start, groove.x1, center.y + tick_end),
            _ => return None,
        }
    } else {
        let groove = Rect::new(center.x - thickness / 2.0, r.y0 + half, center.x + thickness / 2.0, r.y1 - half);
        match sub_control {
            SubControl::SliderGroove => groove,
            SubControl::SliderHandle => {
                square_at(Point::new(center.x, groove.y1 - groove.height() * fraction), side)
            },
            SubControl::SliderTickmarks => Rect::new(center.x + tick_start, groove.y0, center.x + tick_end, groove.y1),
            _ => return None,
        }
    };
    Some(rect)
}

/// Angle of a dial value in radians: 240 degrees at the minimum, -60 at the maximum.
pub(super) fn dial_angle(fraction: f64) -> f64 {
    (240.0 - 300.0 * fraction.clamp(0.0, 1.0)).to_radians()
}

pub(super) fn dial_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let groove = centered_square(r, r.width().min(r.height()));
    let thickness = style.theme().metrics().dial_groove_thickness;

    match sub_control {
        SubControl::DialGroove => Some(groove),
        SubControl::DialHandle => {
            let knob = thickness * 2.0;
            let radius = (groove.width() / 2.0 - thickness - knob / 2.0).max(0.0);
            let angle = dial_angle(option.value_fraction().unwrap_or(0.0));
            let center = groove.center();
            let knob_center = Point::new(center.x + radius * angle.cos(), center.y - radius * angle.sin());
            Some(square_at(knob_center, knob))
        },
        _ => None,
    }
}

pub(super) fn tool_button_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let menu_width = if button_has_menu(option) {
        style.icon_size().width.min(r.width())
    } else {
        0.0
    };
    let split = r.x1 - menu_width;

    match sub_control {
        SubControl::ToolButton => Some(Rect::new(r.x0, r.y0, split, r.y1)),
        SubControl::ToolButtonMenu => Some(Rect::new(split, r.y0, r.x1, r.y1)),
        _ => None,
    }
}

pub(super) fn group_box_sub_control(style: &Style, sub_control: SubControl, option: &StyleOption) -> Option<Rect> {
    let r = option.rect;
    let title_height = style.control_height(ControlSize::Small).min(r.height());
    let title = Rect::new(r.x0, r.y0, r.x1, r.y0 + title_height);
    let check = if group_box_checkable(option) {
        leading_square(title, style.icon_size().width.min(title_height))
    } else {
        Rect::new(r.x0, r.y0, r.x0, r.y0 + title_height)
    };
    let frame = Rect::new(r.x0, (title.y1 + style.spacing() / 2.0).min(r.y1), r.x1, r.y1);

    match sub_control {
        SubControl::GroupBoxCheckBox => Some(check),
        SubControl::GroupBoxLabel => {
            let gap = if check.width() > 0.0 { style.spacing() / 2.0 } else { 0.0 };
            Some(after(title, check, gap))
        },
        SubControl::GroupBoxFrame => Some(frame),
        SubControl::GroupBoxContents => Some(shrink(frame, style.spacing())),
        _ => None,
    }
}

// Sizes from contents.

pub(super) fn push_button_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let mut width = contents.width + style.spacing() * 2.0;
    if option.icon.is_some() && !option.text.is_empty() {
        width += style.icon_size().width + style.spacing() / 2.0;
    }
    let height = (contents.height + style.border_width() * 2.0).max(style.control_height(ControlSize::Medium));
    Size::new(width.max(style.control_default_width()), height)
}

pub(super) fn check_box_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    let extent = style.icon_size().width;
    Size::new(extent + style.spacing() + contents.width, contents.height.max(extent))
}

pub(super) fn switch_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    let extent = style.icon_size().width;
    Size::new(switch_width(extent) + style.spacing() + contents.width, contents.height.max(extent))
}

pub(super) fn tool_button_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let height = (contents.height + style.spacing() / 2.0).max(style.control_height(ControlSize::Medium));
    let mut width = contents.width + style.spacing();
    if button_has_menu(option) {
        width += style.icon_size().width;
    }
    Size::new(width.max(height), height)
}

pub(super) fn combo_box_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    let width = contents.width + style.spacing() * 2.0 + style.icon_size().width;
    Size::new(
        width.max(style.control_default_width()),
        contents.height.max(style.control_height(ControlSize::Medium)),
    )
}

pub(super) fn spin_box_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    let width = contents.width + style.spacing() + style.control_height(ControlSize::Small) + style.border_width() * 2.0;
    Size::new(width, contents.height.max(style.control_height(ControlSize::Medium)))
}

pub(super) fn line_edit_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    Size::new(
        contents.width + style.spacing() * 2.0,
        (contents.height + style.border_width() * 2.0).max(style.control_height(ControlSize::Medium)),
    )
}

pub(super) fn menu_item_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    if let OptionDetail::MenuItem {
        kind: MenuItemKind::Separator,
        ..
    } = option.detail
    {
        return Size::new(contents.width, style.spacing() + style.border_width());
    }
    let slots = (style.icon_size().width + style.spacing()) * 2.0;
    Size::new(
        contents.width + style.spacing() * 2.0 + slots,
        contents.height.max(style.control_height(ControlSize::Medium)),
    )
}

pub(super) fn menu_bar_item_size(style: &Style, _option: &StyleOption, contents: Size) -> Size {
    Size::new(
        contents.width + style.spacing() * 2.0,
        contents.height.max(style.control_height(ControlSize::Medium)),
    )
}

pub(super) fn tab_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let metrics = style.theme().metrics();
    let mut width = contents.width + style.spacing() * 2.0;
    if matches!(option.detail, OptionDetail::Tab { closable: true, .. }) {
        width += style.icon_size().width + style.spacing() / 2.0;
    }
    if metrics.tab_bar_tab_min_width > 0.0 {
        width = width.max(metrics.tab_bar_tab_min_width);
    }
    if metrics.tab_bar_tab_max_width > 0.0 {
        width = width.min(metrics.tab_bar_tab_max_width);
    }
    Size::new(width, contents.height.max(style.control_height(ControlSize::Large)))
}

pub(super) fn progress_bar_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let mut width = contents.width;
    if matches!(option.detail, OptionDetail::Progress { text_visible: true, .. }) {
        width += style.control_default_width() / 2.0 + style.spacing();
    }
    Size::new(width, contents.height.max(style.progress_bar_groove_height()))
}

pub(super) fn slider_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let thickness = style.control_height(ControlSize::Medium);
    if is_horizontal(option) {
        Size::new(contents.width, contents.height.max(thickness))
    } else {
        Size::new(contents.width.max(thickness), contents.height)
    }
}

pub(super) fn item_view_item_size(style: &Style, option: &StyleOption, contents: Size) -> Size {
    let mut height = style.control_height(ControlSize::Medium);
    if matches!(option.detail, OptionDetail::ItemView { caption: Some(_), .. }) {
        height += style.control_height(ControlSize::Small);
    }
    Size::new(contents.width + style.spacing() * 2.0, contents.height.max(height))
}

// Pixel metrics.

pub(super) fn metric_spacing(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.spacing()
}

pub(super) fn metric_half_spacing(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.spacing() / 2.0
}

pub(super) fn metric_icon(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.icon_size().width
}

pub(super) fn metric_large_icon(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.icon_size().width * 2.0
}

pub(super) fn metric_none(_style: &Style, _option: Option<&StyleOption>) -> f64 {
    0.0
}

pub(super) fn metric_border(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.border_width()
}

pub(super) fn metric_focus_border(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.focus_border_width()
}

pub(super) fn metric_scroll_bar_extent(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.scroll_bar_thickness(MouseState::Hovered) + style.scroll_bar_margin() * 2.0
}

pub(super) fn metric_medium_control(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.control_height(ControlSize::Medium)
}

pub(super) fn metric_small_control(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.control_height(ControlSize::Small)
}

pub(super) fn metric_slider_tick_offset(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.theme().metrics().slider_tick_spacing
}

pub(super) fn metric_dial_tick_length(style: &Style, _option: Option<&StyleOption>) -> f64 {
    style.theme().metrics().dial_tick_length
}

// Style hints.

const SUB_MENU_DELAY_MS: i32 = 300;

pub(super) fn hint_enabled(_style: &Style, _option: Option<&StyleOption>) -> i32 {
    1
}

pub(super) fn hint_disabled(_style: &Style, _option: Option<&StyleOption>) -> i32 {
    0
}

pub(super) fn hint_sub_menu_delay(_style: &Style, _option: Option<&StyleOption>) -> i32 {
    SUB_MENU_DELAY_MS
}

pub(super) fn hint_left_button(_style: &Style, _option: Option<&StyleOption>) -> i32 {
    1
}

pub(super) fn hint_animation_duration(style: &Style, _option: Option<&StyleOption>) -> i32 {
    if style.animations_enabled() {
        style.animation_duration(AnimationKind::Base).as_millis() as i32
    } else {
        0
    }
}
