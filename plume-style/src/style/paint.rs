//! Drawing handlers.
//!
//! Every handler classifies the option, resolves and animates its colors,
//! then calls a routine from [render](crate::render) with the results.

use plume_theme::color::transparent;
use plume_theme::theme::{AnimationKind, TextRole};
use vello::kurbo::{Point, Rect};
use vello::peniko::Color;

use super::Style;
use crate::animation::AnimationSlot;
use crate::option::{ComplexControl, MenuItemKind, OptionDetail, StyleOption, SubControl, SubElement};
use crate::render::{
    self, centered_square, shrink, Alignment, ArrowDirection, ButtonVisual, CheckVisual, Painter, ProgressVisual,
    ScrollBarVisual, SliderVisual, SwitchVisual, TextFieldVisual,
};
use crate::resolver::ThemeQueries;
use crate::state::{
    list_item_mouse_state, menu_item_mouse_state, slider_handle_mouse_state, tab_mouse_state,
    tool_button_mouse_state, CheckState, ColorRole, MouseState, SelectionState, StateFlags,
};

fn color(style: &Style, option: &StyleOption, slot: AnimationSlot, target: Color) -> Color {
    style.animated(option, slot, target, AnimationKind::Base)
}

/// Mouse state of one sub-control of a complex control.
fn sub_control_mouse(option: &StyleOption, sub_control: SubControl, enabled: bool) -> MouseState {
    if !enabled || !option.flags.contains(StateFlags::ENABLED) {
        MouseState::Disabled
    } else if option.is_pressed(sub_control) {
        MouseState::Pressed
    } else if option.is_hovered(sub_control) {
        MouseState::Hovered
    } else {
        MouseState::Normal
    }
}

fn button_flags(option: &StyleOption) -> (bool, bool, bool) {
    match option.detail {
        OptionDetail::Button {
            default,
            flat,
            has_menu,
        } => (default, flat, has_menu),
        _ => (false, false, false),
    }
}

fn button_role(option: &StyleOption) -> ColorRole {
    let (default, _, _) = button_flags(option);
    if default {
        ColorRole::Primary
    } else {
        option.role
    }
}

/// Icon then text, both in `foreground`. The icon alone is centered.
fn icon_and_text(
    style: &Style,
    option: &StyleOption,
    painter: &mut dyn Painter,
    rect: Rect,
    foreground: Color,
    alignment: Alignment,
) {
    let extent = style.icon_size().width;
    let mut text_rect = rect;
    let text_color = style.label_foreground_color(option.states().mouse);

    if let Some(icon) = style.icon(option, foreground, text_color) {
        if option.text.is_empty() {
            painter.draw_icon(centered_square(rect, extent), &icon);
            return;
        }
        let y0 = rect.center().y - extent / 2.0;
        let icon_rect = Rect::new(rect.x0, y0, rect.x0 + extent, y0 + extent);
        painter.draw_icon(icon_rect, &icon);
        text_rect.x0 = (icon_rect.x1 + style.spacing() / 2.0).min(rect.x1);
    }

    render::paint_label(
        painter,
        text_rect,
        &option.text,
        style.font(TextRole::Default),
        foreground,
        alignment,
    );
}

// Primitives.

pub(super) fn frame(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let width = match option.detail {
        OptionDetail::Frame { line_width } => line_width,
        _ => style.border_width(),
    };
    render::paint_panel(
        painter,
        option.rect,
        0.0,
        Color::TRANSPARENT,
        Some((style.frame_border_color(), width)),
        None,
    );
}

pub(super) fn tab_widget_frame(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    render::paint_panel(
        painter,
        option.rect,
        style.border_radius(),
        style.frame_background_color(mouse),
        Some((style.frame_border_color(), style.border_width())),
        None,
    );
}

pub(super) fn focus_frame(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    if let Some(ring) = style.focus_ring(option) {
        render::paint_focus_ring(
            painter,
            option.rect,
            style.border_radius(),
            style.focus_border_width(),
            ring,
        );
    }
}

pub(super) fn group_box_frame(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_group_box_frame(style, option, option.rect, painter);
}

fn paint_group_box_frame(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    render::paint_panel(
        painter,
        rect,
        style.border_radius(),
        style.group_box_background_color(mouse),
        Some((style.group_box_border_color(mouse), style.border_width())),
        None,
    );
}

pub(super) fn line_edit_frame(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_line_edit(style, option, option.rect, painter);
}

fn paint_line_edit(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let states = option.states();
    let visual = TextFieldVisual {
        background: color(
            style,
            option,
            AnimationSlot::Background,
            style.text_field_background_color(states.mouse),
        ),
        border: color(
            style,
            option,
            AnimationSlot::Border,
            style.text_field_border_color(states.mouse, states.focus, states.status),
        ),
        focus_ring: style.focus_ring(option),
        radius: style.border_radius(),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    };
    render::paint_text_field(painter, rect, &visual);
}

pub(super) fn menu_panel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    render::paint_panel(
        painter,
        option.rect,
        style.border_radius(),
        style.menu_background_color(),
        Some((style.menu_border_color(), style.border_width())),
        Some(style.shadow_color(2)),
    );
}

pub(super) fn status_bar_item(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let r = option.rect;
    let inset = style.spacing() / 2.0;
    painter.draw_line(
        Point::new(r.x1, r.y0 + inset),
        Point::new(r.x1, r.y1 - inset),
        style.border_width(),
        style.status_bar_separator_color(),
    );
}

pub(super) fn button_bevel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_button_bevel(style, option, option.rect, painter);
}

fn paint_button_bevel(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let (_, flat, _) = button_flags(option);
    let role = button_role(option);

    let (background, border) = if flat {
        let mouse = tool_button_mouse_state(option.flags | StateFlags::AUTO_RAISE);
        (
            style.tool_button_background_color(mouse, role),
            transparent(style.button_border_color(mouse, role)),
        )
    } else {
        let mouse = option.states().mouse;
        (
            style.button_background_color(mouse, role),
            style.button_border_color(mouse, role),
        )
    };

    let visual = ButtonVisual {
        background: color(style, option, AnimationSlot::Background, background),
        border: color(style, option, AnimationSlot::Border, border),
        focus_ring: style.focus_ring(option),
        radius: style.border_radius(),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    };
    render::paint_button(painter, rect, &visual);
}

pub(super) fn tool_button_panel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_tool_button_panel(style, option, option.rect, false, painter);
}

fn paint_tool_button_panel(
    style: &Style,
    option: &StyleOption,
    rect: Rect,
    in_tab_bar: bool,
    painter: &mut dyn Painter,
) {
    let mouse = tool_button_mouse_state(option.flags);
    let background = if in_tab_bar {
        style.tab_bar_scroll_button_background_color(mouse)
    } else {
        style.tool_button_background_color(mouse, option.role)
    };
    let visual = ButtonVisual {
        background: color(style, option, AnimationSlot::Background, background),
        border: Color::TRANSPARENT,
        focus_ring: style.focus_ring(option),
        radius: style.border_radius(),
        border_width: 0.0,
        focus_width: style.focus_border_width(),
    };
    render::paint_button(painter, rect, &visual);
}

pub(super) fn menu_bar_panel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let r = option.rect;
    render::paint_panel(painter, r, 0.0, style.menu_bar_background_color(), None, None);
    let y = r.y1 - style.border_width() / 2.0;
    painter.draw_line(
        Point::new(r.x0, y),
        Point::new(r.x1, y),
        style.border_width(),
        style.menu_bar_border_color(),
    );
}

pub(super) fn tooltip_panel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    render::paint_panel(
        painter,
        option.rect,
        style.border_radius(),
        style.tooltip_background_color(),
        Some((style.tooltip_border_color(), style.border_width())),
        Some(style.shadow_color(1)),
    );
}

pub(super) fn item_view_panel(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let states = option.states();
    let background = style.list_item_background_color(
        list_item_mouse_state(option.flags),
        states.selection,
        states.focus,
        states.active,
        states.alternate,
    );
    let background = color(style, option, AnimationSlot::Background, background);
    render::paint_panel(painter, option.rect, 0.0, background, None, None);
}

fn check_visual(style: &Style, option: &StyleOption) -> CheckVisual {
    let states = option.states();
    let progress_target = match states.check {
        CheckState::NotChecked => 0.0,
        CheckState::Checked | CheckState::Indeterminate => 1.0,
    };
    CheckVisual {
        background: color(
            style,
            option,
            AnimationSlot::Indicator,
            style.check_button_background_color(states.mouse, states.check),
        ),
        foreground: color(
            style,
            option,
            AnimationSlot::Mark,
            style.check_button_foreground_color(states.mouse, states.check),
        ),
        border: color(
            style,
            option,
            AnimationSlot::IndicatorBorder,
            style.check_button_border_color(states.mouse, states.focus, states.check),
        ),
        focus_ring: style.focus_ring(option),
        check: states.check,
        mark_progress: style.animated(option, AnimationSlot::Progress, progress_target, AnimationKind::Base),
        radius: style.check_box_border_radius(),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    }
}

pub(super) fn check_box_indicator(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    render::paint_check_box(painter, option.rect, &check_visual(style, option));
}

pub(super) fn radio_button_indicator(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    render::paint_radio_button(painter, option.rect, &check_visual(style, option));
}

pub(super) fn switch_indicator(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_switch(style, option, option.rect, painter);
}

fn paint_switch(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let states = option.states();
    let on = match states.check {
        CheckState::NotChecked => 0.0,
        CheckState::Checked | CheckState::Indeterminate => 1.0,
    };
    let visual = SwitchVisual {
        groove: color(
            style,
            option,
            AnimationSlot::Indicator,
            style.switch_groove_color(states.mouse, states.check),
        ),
        groove_border: color(
            style,
            option,
            AnimationSlot::IndicatorBorder,
            style.switch_groove_border_color(states.mouse, states.focus, states.check),
        ),
        handle: color(
            style,
            option,
            AnimationSlot::Mark,
            style.switch_handle_color(states.mouse, states.check),
        ),
        focus_ring: style.focus_ring(option),
        position: style.animated(option, AnimationSlot::Progress, on, AnimationKind::Base),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    };
    render::paint_switch(painter, rect, &visual);
}

fn arrow(style: &Style, option: &StyleOption, painter: &mut dyn Painter, direction: ArrowDirection) {
    let foreground = style.label_foreground_color(option.states().mouse);
    painter.draw_arrow(option.rect, direction, style.border_width() * 1.5, foreground);
}

pub(super) fn arrow_up(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    arrow(style, option, painter, ArrowDirection::Up);
}

pub(super) fn arrow_down(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    arrow(style, option, painter, ArrowDirection::Down);
}

pub(super) fn arrow_left(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    arrow(style, option, painter, ArrowDirection::Left);
}

pub(super) fn arrow_right(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    arrow(style, option, painter, ArrowDirection::Right);
}

fn spin_arrow(style: &Style, option: &StyleOption, painter: &mut dyn Painter, direction: ArrowDirection) {
    let foreground = style.spin_box_button_foreground_color(option.states().mouse);
    painter.draw_arrow(option.rect, direction, style.border_width() * 1.5, foreground);
}

pub(super) fn spin_up(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    spin_arrow(style, option, painter, ArrowDirection::Up);
}

pub(super) fn spin_down(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    spin_arrow(style, option, painter, ArrowDirection::Down);
}

pub(super) fn tab_close(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let states = option.states();
    let background = color(
        style,
        option,
        AnimationSlot::Background,
        style.tab_close_button_background_color(states.mouse),
    );
    let foreground = style.tab_close_button_foreground_color(states.mouse, states.selection);

    let circle = centered_square(option.rect, option.rect.width().min(option.rect.height()));
    if background.components[3] > 0.0 {
        painter.fill_ellipse(circle, background);
    }
    let cross = centered_square(circle, circle.width() * 0.4);
    let width = style.border_width() * 1.5;
    painter.draw_line(Point::new(cross.x0, cross.y0), Point::new(cross.x1, cross.y1), width, foreground);
    painter.draw_line(Point::new(cross.x0, cross.y1), Point::new(cross.x1, cross.y0), width, foreground);
}

pub(super) fn menu_check_mark(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    if option.flags.contains(StateFlags::ON) {
        let foreground = style.menu_item_foreground_color(menu_item_mouse_state(option.flags));
        painter.draw_check_mark(option.rect, style.border_width() * 1.5, foreground, 1.0);
    }
}

pub(super) fn tool_bar_separator(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let r = option.rect;
    let separator = style.tool_button_separator_color(option.states().mouse);
    let inset = style.spacing() / 2.0;
    if option.flags.contains(StateFlags::HORIZONTAL) {
        let x = r.center().x;
        painter.draw_line(Point::new(x, r.y0 + inset), Point::new(x, r.y1 - inset), style.border_width(), separator);
    } else {
        let y = r.center().y;
        painter.draw_line(Point::new(r.x0 + inset, y), Point::new(r.x1 - inset, y), style.border_width(), separator);
    }
}

// Controls.

pub(super) fn push_button(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_button_bevel(style, option, option.rect, painter);
    let contents = style.sub_element_rect(SubElement::PushButtonContents, option);
    paint_push_button_label(style, option, contents, painter);
}

pub(super) fn push_button_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_push_button_label(style, option, option.rect, painter);
}

fn paint_push_button_label(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let (_, flat, has_menu) = button_flags(option);
    let role = button_role(option);
    let foreground = if flat {
        style.tool_button_foreground_color(tool_button_mouse_state(option.flags | StateFlags::AUTO_RAISE), role)
    } else {
        style.button_foreground_color(option.states().mouse, role)
    };
    let foreground = color(style, option, AnimationSlot::Foreground, foreground);

    let mut label_rect = rect;
    if has_menu {
        let extent = style.icon_size().width.min(rect.width());
        let arrow_rect = Rect::new(rect.x1 - extent, rect.y0, rect.x1, rect.y1);
        painter.draw_arrow(arrow_rect, ArrowDirection::Down, style.border_width() * 1.5, foreground);
        label_rect.x1 = arrow_rect.x0;
    }
    icon_and_text(style, option, painter, label_rect, foreground, Alignment::Center);
}

fn paint_check_label(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let foreground = color(
        style,
        option,
        AnimationSlot::Label,
        style.label_foreground_color(option.states().mouse),
    );
    icon_and_text(style, option, painter, rect, foreground, Alignment::Leading);
}

pub(super) fn check_box(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let indicator = style.sub_element_rect(SubElement::CheckBoxIndicator, option);
    render::paint_check_box(painter, indicator, &check_visual(style, option));
    let contents = style.sub_element_rect(SubElement::CheckBoxContents, option);
    paint_check_label(style, option, contents, painter);
}

pub(super) fn radio_button(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let indicator = style.sub_element_rect(SubElement::RadioButtonIndicator, option);
    render::paint_radio_button(painter, indicator, &check_visual(style, option));
    let contents = style.sub_element_rect(SubElement::RadioButtonContents, option);
    paint_check_label(style, option, contents, painter);
}

pub(super) fn check_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_check_label(style, option, option.rect, painter);
}

pub(super) fn switch(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let indicator = style.sub_element_rect(SubElement::SwitchIndicator, option);
    paint_switch(style, option, indicator, painter);
    let contents = Rect::new(
        (indicator.x1 + style.spacing()).min(option.rect.x1),
        option.rect.y0,
        option.rect.x1,
        option.rect.y1,
    );
    paint_check_label(style, option, contents, painter);
}

pub(super) fn tab(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    tab_shape(style, option, painter);
    tab_label(style, option, painter);
}

pub(super) fn tab_shape(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let selection = option.states().selection;
    let background = color(
        style,
        option,
        AnimationSlot::Background,
        style.tab_background_color(tab_mouse_state(option.flags), selection),
    );
    let shadow = match selection {
        SelectionState::Selected => Some(style.tab_bar_shadow_color()),
        SelectionState::NotSelected => None,
    };
    render::paint_panel(painter, option.rect, style.border_radius(), background, None, shadow);
}

pub(super) fn tab_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let selection = option.states().selection;
    let foreground = color(
        style,
        option,
        AnimationSlot::Foreground,
        style.tab_foreground_color(tab_mouse_state(option.flags), selection),
    );
    let mut rect = shrink(option.rect, style.spacing());
    rect.y0 = option.rect.y0;
    rect.y1 = option.rect.y1;
    if matches!(option.detail, OptionDetail::Tab { closable: true, .. }) {
        rect.x1 = (rect.x1 - style.icon_size().width - style.spacing() / 2.0).max(rect.x0);
    }
    icon_and_text(style, option, painter, rect, foreground, Alignment::Leading);
}

fn progress_visual(style: &Style, option: &StyleOption) -> ProgressVisual {
    let mouse = option.states().mouse;
    let fraction = option.value_fraction().unwrap_or(0.0);
    ProgressVisual {
        groove: style.progress_bar_groove_color(mouse),
        value: style.progress_bar_value_color(mouse),
        fraction: style.animated(option, AnimationSlot::Progress, fraction, AnimationKind::Base),
        groove_height: style.progress_bar_groove_height(),
    }
}

pub(super) fn progress_bar(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let groove = style.sub_element_rect(SubElement::ProgressBarGroove, option);
    render::paint_progress_bar(painter, groove, &progress_visual(style, option));
    if matches!(option.detail, OptionDetail::Progress { text_visible: true, .. }) {
        let label = style.sub_element_rect(SubElement::ProgressBarLabel, option);
        paint_progress_label(style, option, label, painter);
    }
}

pub(super) fn progress_bar_groove(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let visual = ProgressVisual {
        fraction: 0.0,
        ..progress_visual(style, option)
    };
    render::paint_progress_bar(painter, option.rect, &visual);
}

pub(super) fn progress_bar_contents(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let visual = ProgressVisual {
        groove: Color::TRANSPARENT,
        ..progress_visual(style, option)
    };
    render::paint_progress_bar(painter, option.rect, &visual);
}

pub(super) fn progress_bar_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_progress_label(style, option, option.rect, painter);
}

fn paint_progress_label(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let text = if option.text.is_empty() {
        format!("{}%", (option.value_fraction().unwrap_or(0.0) * 100.0).round())
    } else {
        option.text.clone()
    };
    render::paint_label(
        painter,
        rect,
        &text,
        style.font(TextRole::Default),
        style.progress_bar_text_color(option.states().mouse),
        Alignment::Trailing,
    );
}

pub(super) fn menu_item(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let (kind, shortcut, checkable) = match &option.detail {
        OptionDetail::MenuItem {
            kind,
            shortcut,
            checkable,
        } => (*kind, shortcut.as_str(), *checkable),
        _ => (MenuItemKind::Normal, "", false),
    };
    let r = option.rect;
    let spacing = style.spacing();

    if kind == MenuItemKind::Separator {
        let y = r.center().y;
        painter.draw_line(
            Point::new(r.x0 + spacing, y),
            Point::new(r.x1 - spacing, y),
            style.border_width(),
            style.menu_separator_color(),
        );
        return;
    }

    let mouse = menu_item_mouse_state(option.flags);
    let background = color(style, option, AnimationSlot::Background, style.menu_item_background_color(mouse));
    let foreground = style.menu_item_foreground_color(mouse);
    let secondary = style.menu_item_secondary_foreground_color(mouse);
    let item = Rect::new(r.x0 + spacing / 2.0, r.y0, r.x1 - spacing / 2.0, r.y1);
    render::paint_panel(painter, item, style.menu_item_border_radius(), background, None, None);

    let extent = style.icon_size().width;
    let slot_y = r.center().y - extent / 2.0;
    let leading = Rect::new(item.x0 + spacing / 2.0, slot_y, item.x0 + spacing / 2.0 + extent, slot_y + extent);
    let trailing = Rect::new(item.x1 - spacing / 2.0 - extent, slot_y, item.x1 - spacing / 2.0, slot_y + extent);

    if checkable {
        if option.flags.contains(StateFlags::ON) {
            painter.draw_check_mark(leading, style.border_width() * 1.5, foreground, 1.0);
        }
    } else if let Some(icon) = style.icon(option, foreground, foreground) {
        painter.draw_icon(leading, &icon);
    }

    let text_rect = Rect::new(leading.x1 + spacing, r.y0, trailing.x0 - spacing / 2.0, r.y1);
    let font = style.font(TextRole::Default);
    render::paint_label(painter, text_rect, &option.text, font, foreground, Alignment::Leading);
    render::paint_label(painter, text_rect, shortcut, font, secondary, Alignment::Trailing);

    if kind == MenuItemKind::SubMenu {
        painter.draw_arrow(trailing, ArrowDirection::Right, style.border_width() * 1.5, foreground);
    }
}

pub(super) fn menu_bar_item(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = menu_item_mouse_state(option.flags);
    let selection = option.states().selection;
    let background = color(
        style,
        option,
        AnimationSlot::Background,
        style.menu_bar_item_background_color(mouse, selection),
    );
    let rect = shrink(option.rect, style.border_width());
    render::paint_panel(painter, rect, style.menu_bar_item_border_radius(), background, None, None);
    render::paint_label(
        painter,
        rect,
        &option.text,
        style.font(TextRole::Default),
        style.menu_bar_item_foreground_color(mouse),
        Alignment::Center,
    );
}

pub(super) fn tool_button_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    paint_tool_button_label(style, option, option.rect, painter);
}

fn paint_tool_button_label(style: &Style, option: &StyleOption, rect: Rect, painter: &mut dyn Painter) {
    let foreground = style.tool_button_foreground_color(tool_button_mouse_state(option.flags), option.role);
    let foreground = color(style, option, AnimationSlot::Foreground, foreground);
    icon_and_text(style, option, painter, rect, foreground, Alignment::Center);
}

pub(super) fn item_view_item(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    item_view_panel(style, option, painter);

    let states = option.states();
    let mouse = list_item_mouse_state(option.flags);
    let foreground = style.list_item_foreground_color(mouse, states.selection, states.focus, states.active);
    let (caption, checkable) = match &option.detail {
        OptionDetail::ItemView { caption, checkable } => (caption.as_deref(), *checkable),
        _ => (None, false),
    };

    let spacing = style.spacing();
    let mut rect = Rect::new(option.rect.x0 + spacing, option.rect.y0, option.rect.x1 - spacing, option.rect.y1);

    if checkable {
        let extent = style.icon_size().width;
        let y0 = rect.center().y - extent / 2.0;
        let indicator = Rect::new(rect.x0, y0, rect.x0 + extent, y0 + extent);
        render::paint_check_box(painter, indicator, &check_visual(style, option));
        rect.x0 = (indicator.x1 + spacing / 2.0).min(rect.x1);
    }

    match caption {
        Some(caption) => {
            let middle = rect.center().y;
            let top = Rect::new(rect.x0, rect.y0, rect.x1, middle);
            let bottom = Rect::new(rect.x0, middle, rect.x1, rect.y1);
            icon_and_text(style, option, painter, top, foreground, Alignment::Leading);
            let caption_color =
                style.list_item_caption_foreground_color(mouse, states.selection, states.focus, states.active);
            render::paint_label(
                painter,
                bottom,
                caption,
                style.font(TextRole::Caption),
                caption_color,
                Alignment::Leading,
            );
        },
        None => icon_and_text(style, option, painter, rect, foreground, Alignment::Leading),
    }
}

pub(super) fn splitter(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let r = option.rect;
    let line = color(
        style,
        option,
        AnimationSlot::Background,
        style.splitter_color(option.states().mouse),
    );
    if option.flags.contains(StateFlags::HORIZONTAL) {
        let x = r.center().x;
        painter.draw_line(Point::new(x, r.y0), Point::new(x, r.y1), style.border_width(), line);
    } else {
        let y = r.center().y;
        painter.draw_line(Point::new(r.x0, y), Point::new(r.x1, y), style.border_width(), line);
    }
}

pub(super) fn scroll_bar_slider(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    let visual = ScrollBarVisual {
        groove: Color::TRANSPARENT,
        handle: color(style, option, AnimationSlot::Foreground, style.scroll_bar_handle_color(mouse)),
        thickness: style.animated(
            option,
            AnimationSlot::Progress,
            style.scroll_bar_thickness(mouse),
            AnimationKind::Base,
        ),
        horizontal: option.flags.contains(StateFlags::HORIZONTAL),
    };
    render::paint_scroll_bar(painter, option.rect, option.rect, &visual);
}

pub(super) fn combo_box_label(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let rect = style.sub_control_rect(ComplexControl::ComboBox, SubControl::ComboBoxEditField, option);
    let foreground = style.combo_box_foreground_color(option.states().mouse);
    icon_and_text(style, option, painter, rect, foreground, Alignment::Leading);
}

// Complex controls.

pub(super) fn spin_box(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let states = option.states();
    let frame = style.sub_control_rect(ComplexControl::SpinBox, SubControl::SpinBoxFrame, option);
    let visual = TextFieldVisual {
        background: color(
            style,
            option,
            AnimationSlot::Background,
            style.spin_box_background_color(states.mouse),
        ),
        border: color(
            style,
            option,
            AnimationSlot::Border,
            style.spin_box_border_color(states.mouse, states.focus),
        ),
        focus_ring: style.focus_ring(option),
        radius: style.border_radius(),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    };
    render::paint_text_field(painter, frame, &visual);

    let (up_enabled, down_enabled) = match option.detail {
        OptionDetail::SpinBox {
            up_enabled,
            down_enabled,
        } => (up_enabled, down_enabled),
        _ => (true, true),
    };

    for (sub_control, enabled, direction) in [
        (SubControl::SpinBoxUp, up_enabled, ArrowDirection::Up),
        (SubControl::SpinBoxDown, down_enabled, ArrowDirection::Down),
    ] {
        let rect = style.sub_control_rect(ComplexControl::SpinBox, sub_control, option);
        let mouse = sub_control_mouse(option, sub_control, enabled);
        let background = style.spin_box_button_background_color(mouse);
        if background.components[3] > 0.0 {
            painter.fill_rounded_rect(rect, style.border_radius() / 2.0, background);
        }
        painter.draw_arrow(
            rect,
            direction,
            style.border_width() * 1.5,
            style.spin_box_button_foreground_color(mouse),
        );
    }
}

pub(super) fn combo_box(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let states = option.states();
    let frame = style.sub_control_rect(ComplexControl::ComboBox, SubControl::ComboBoxFrame, option);
    let editable = matches!(option.detail, OptionDetail::ComboBox { editable: true });

    if editable {
        paint_line_edit(style, option, frame, painter);
    } else {
        let visual = ButtonVisual {
            background: color(
                style,
                option,
                AnimationSlot::Background,
                style.combo_box_background_color(states.mouse),
            ),
            border: color(
                style,
                option,
                AnimationSlot::Border,
                style.combo_box_border_color(states.mouse),
            ),
            focus_ring: style.focus_ring(option),
            radius: style.border_radius(),
            border_width: style.border_width(),
            focus_width: style.focus_border_width(),
        };
        render::paint_button(painter, frame, &visual);
    }

    let arrow_rect = style.sub_control_rect(ComplexControl::ComboBox, SubControl::ComboBoxArrow, option);
    painter.draw_arrow(
        arrow_rect,
        ArrowDirection::Down,
        style.border_width() * 1.5,
        style.combo_box_foreground_color(states.mouse),
    );
}

pub(super) fn scroll_bar(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    let handle_mouse = match mouse {
        MouseState::Disabled => MouseState::Disabled,
        _ if option.is_pressed(SubControl::ScrollBarSlider) => MouseState::Pressed,
        _ => mouse,
    };
    let groove = style.sub_control_rect(ComplexControl::ScrollBar, SubControl::ScrollBarGroove, option);
    let handle = style.sub_control_rect(ComplexControl::ScrollBar, SubControl::ScrollBarSlider, option);

    let visual = ScrollBarVisual {
        groove: color(style, option, AnimationSlot::Background, style.scroll_bar_groove_color(mouse)),
        handle: color(
            style,
            option,
            AnimationSlot::Foreground,
            style.scroll_bar_handle_color(handle_mouse),
        ),
        thickness: style.animated(
            option,
            AnimationSlot::Progress,
            style.scroll_bar_thickness(mouse),
            AnimationKind::Base,
        ),
        horizontal: option.flags.contains(StateFlags::HORIZONTAL),
    };
    render::paint_scroll_bar(painter, groove, handle, &visual);
}

fn tick_positions(option: &StyleOption, tickmarks: Rect) -> Vec<Point> {
    let OptionDetail::Slider {
        minimum,
        maximum,
        tick_interval,
        ..
    } = option.detail
    else {
        return Vec::new();
    };
    if tick_interval <= 0.0 || maximum <= minimum || !option.flags.contains(StateFlags::HORIZONTAL) {
        return Vec::new();
    }

    // At most one tick per pixel of groove.
    let count = ((maximum - minimum) / tick_interval).floor();
    if !count.is_finite() || count > tickmarks.width() {
        return Vec::new();
    }
    (0..=count as usize)
        .map(|index| {
            let fraction = (index as f64 * tick_interval) / (maximum - minimum);
            Point::new(tickmarks.x0 + tickmarks.width() * fraction, tickmarks.y0)
        })
        .collect()
}

pub(super) fn slider(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    let handle_mouse = slider_handle_mouse_state(
        option.flags,
        option.is_hovered(SubControl::SliderHandle),
        option.is_pressed(SubControl::SliderHandle),
    );
    let groove = style.sub_control_rect(ComplexControl::Slider, SubControl::SliderGroove, option);
    let handle = style.sub_control_rect(ComplexControl::Slider, SubControl::SliderHandle, option);
    let handle = style.animated(option, AnimationSlot::Geometry, handle, AnimationKind::Slider);
    let tickmarks = style.sub_control_rect(ComplexControl::Slider, SubControl::SliderTickmarks, option);

    let value_rect = if option.flags.contains(StateFlags::HORIZONTAL) {
        Rect::new(groove.x0, groove.y0, handle.center().x.clamp(groove.x0, groove.x1), groove.y1)
    } else {
        Rect::new(groove.x0, handle.center().y.clamp(groove.y0, groove.y1), groove.x1, groove.y1)
    };

    let ticks = tick_positions(option, tickmarks);
    let visual = SliderVisual {
        groove: color(style, option, AnimationSlot::Background, style.slider_groove_color(mouse)),
        value: color(style, option, AnimationSlot::Foreground, style.slider_value_color(mouse)),
        handle: style.slider_handle_color(handle_mouse),
        handle_border: style.frame_border_color(),
        ticks: (!ticks.is_empty()).then(|| style.slider_tick_color(mouse)),
        focus_ring: style.focus_ring(option),
        border_width: style.border_width(),
        focus_width: style.focus_border_width(),
    };
    render::paint_slider(
        painter,
        groove,
        value_rect,
        handle,
        &ticks,
        style.theme().metrics().slider_tick_size,
        &visual,
    );
}

pub(super) fn dial(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    let handle_mouse = slider_handle_mouse_state(
        option.flags,
        option.is_hovered(SubControl::DialHandle),
        option.is_pressed(SubControl::DialHandle),
    );
    let metrics = style.theme().metrics();
    let groove = style.sub_control_rect(ComplexControl::Dial, SubControl::DialGroove, option);
    let handle = style.sub_control_rect(ComplexControl::Dial, SubControl::DialHandle, option);
    let thickness = metrics.dial_groove_thickness;

    if let Some(ring) = style.focus_ring(option) {
        painter.stroke_ellipse(groove, style.focus_border_width(), ring);
    }
    painter.stroke_ellipse(
        shrink(groove, thickness / 2.0),
        thickness,
        color(style, option, AnimationSlot::Background, style.dial_groove_color(mouse)),
    );
    painter.draw_line(
        groove.center(),
        handle.center(),
        metrics.dial_mark_thickness,
        style.dial_mark_color(mouse),
    );
    painter.fill_ellipse(handle, style.dial_handle_color(handle_mouse));
}

pub(super) fn tool_button(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let widget = style.widget_context(option);
    let quirks = style.quirks();

    if widget.is_some_and(|widget| quirks.is_line_edit_icon_button(widget)) {
        let foreground = style.text_field_foreground_color(option.states().mouse);
        if let Some(icon) = style.icon(option, foreground, foreground) {
            let extent = style.icon_size().width;
            painter.draw_icon(centered_square(option.rect, extent), &icon);
        }
        return;
    }

    let in_tab_bar = widget.is_some_and(|widget| quirks.is_tab_bar_button(widget));
    let button = style.sub_control_rect(ComplexControl::ToolButton, SubControl::ToolButton, option);
    paint_tool_button_panel(style, option, button, in_tab_bar, painter);
    paint_tool_button_label(style, option, button, painter);

    let (_, _, has_menu) = button_flags(option);
    if has_menu {
        let mouse = tool_button_mouse_state(option.flags);
        let menu = style.sub_control_rect(ComplexControl::ToolButton, SubControl::ToolButtonMenu, option);
        let inset = style.spacing() / 2.0;
        painter.draw_line(
            Point::new(menu.x0, menu.y0 + inset),
            Point::new(menu.x0, menu.y1 - inset),
            style.border_width(),
            style.tool_button_separator_color(mouse),
        );
        painter.draw_arrow(
            menu,
            ArrowDirection::Down,
            style.border_width() * 1.5,
            style.tool_button_foreground_color(mouse, option.role),
        );
    }
}

pub(super) fn group_box(style: &Style, option: &StyleOption, painter: &mut dyn Painter) {
    let mouse = option.states().mouse;
    let frame = style.sub_control_rect(ComplexControl::GroupBox, SubControl::GroupBoxFrame, option);
    paint_group_box_frame(style, option, frame, painter);

    if matches!(option.detail, OptionDetail::GroupBox { checkable: true }) {
        let check = style.sub_control_rect(ComplexControl::GroupBox, SubControl::GroupBoxCheckBox, option);
        render::paint_check_box(painter, check, &check_visual(style, option));
    }

    let label = style.sub_control_rect(ComplexControl::GroupBox, SubControl::GroupBoxLabel, option);
    render::paint_label(
        painter,
        label,
        &option.text,
        style.font(TextRole::Bold),
        style.group_box_title_color(mouse),
        Alignment::Leading,
    );
}
