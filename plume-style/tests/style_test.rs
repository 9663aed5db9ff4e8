//! Tests for the style facade as a host toolkit drives it

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use plume_style::icon_cache::IconId;
use plume_style::option::{
    ComplexControl, ContentsType, ControlElement, ControlKind, OptionDetail, PixelMetric, PrimitiveElement, StyleHint,
    StyleOption, SubControl, SubElement,
};
use plume_style::quirks::ClassNameQuirks;
use plume_style::render::{PaintCommand, Painter, RecordingPainter};
use plume_style::resolver::ThemeQueries;
use plume_style::state::{CheckState, ColorRole, MouseState, StateFlags};
use plume_style::style::{BaseStyle, NullHost, Style, StyleHost};
use plume_style::widget::{WidgetContext, WidgetInfo, WidgetKey};
use plume_style::AutoIconColor;
use plume_theme::config::{StyleConfig, ThemeSource};
use plume_theme::theme::Theme;
use vello::kurbo::{Point, Rect, Size};
use vello::peniko::Color;

#[derive(Debug, Clone, PartialEq)]
enum HostEvent {
    ThemeChanged(String),
    IconCacheCleared,
    Repaint,
}

#[derive(Default)]
struct SpyHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
    widgets: HashMap<WidgetKey, WidgetInfo>,
}

impl SpyHost {
    fn with_widget(mut self, widget: WidgetInfo) -> Self {
        self.widgets.insert(widget.key, widget);
        self
    }
}

impl StyleHost for SpyHost {
    fn on_theme_changed(&mut self, theme: &Theme) {
        self.events.borrow_mut().push(HostEvent::ThemeChanged(theme.meta().name.clone()));
    }

    fn on_icon_cache_cleared(&mut self) {
        self.events.borrow_mut().push(HostEvent::IconCacheCleared);
    }

    fn repaint_top_level_widgets(&mut self) {
        self.events.borrow_mut().push(HostEvent::Repaint);
    }

    fn widget(&self, key: WidgetKey) -> Option<&dyn WidgetContext> {
        self.widgets.get(&key).map(|widget| widget as &dyn WidgetContext)
    }
}

struct SpyBase {
    calls: Rc<RefCell<Vec<String>>>,
}

impl SpyBase {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl BaseStyle for SpyBase {
    fn draw_primitive(&self, element: PrimitiveElement, _option: &StyleOption, _painter: &mut dyn Painter) {
        self.record(format!("primitive {:?}", element));
    }

    fn draw_control(&self, element: ControlElement, _option: &StyleOption, _painter: &mut dyn Painter) {
        self.record(format!("control {:?}", element));
    }

    fn draw_complex_control(&self, control: ComplexControl, _option: &StyleOption, _painter: &mut dyn Painter) {
        self.record(format!("complex {:?}", control));
    }

    fn sub_element_rect(&self, element: SubElement, _option: &StyleOption) -> Rect {
        self.record(format!("sub-element {:?}", element));
        Rect::ZERO
    }

    fn sub_control_rect(&self, control: ComplexControl, sub_control: SubControl, _option: &StyleOption) -> Rect {
        self.record(format!("sub-control {:?} {:?}", control, sub_control));
        Rect::new(1.0, 2.0, 3.0, 4.0)
    }

    fn size_from_contents(&self, contents: ContentsType, _option: &StyleOption, contents_size: Size) -> Size {
        self.record(format!("size {:?}", contents));
        contents_size
    }

    fn hit_test_complex_control(
        &self,
        control: ComplexControl,
        _option: &StyleOption,
        _point: Point,
    ) -> Option<SubControl> {
        self.record(format!("hit {:?}", control));
        Some(SubControl::TitleBarLabel)
    }

    fn pixel_metric(&self, metric: PixelMetric, _option: Option<&StyleOption>) -> f64 {
        self.record(format!("metric {:?}", metric));
        3.0
    }

    fn style_hint(&self, hint: StyleHint, _option: Option<&StyleOption>) -> i32 {
        self.record(format!("hint {:?}", hint));
        -1
    }
}

fn button_rect() -> Rect {
    Rect::new(0.0, 0.0, 96.0, 24.0)
}

fn first_fill(style: &Style, element: ControlElement, option: &StyleOption) -> Color {
    let mut painter = RecordingPainter::new();
    style.draw_control(element, option, &mut painter);
    painter.fills()[0]
}

#[test]
fn test_equal_theme_is_a_no_op() {
    let host = SpyHost::default();
    let events = host.events.clone();
    let mut style = Style::new(Theme::light(), Box::new(host));

    assert!(!style.set_theme(Theme::light()));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_theme_swap_order() {
    let host = SpyHost::default();
    let events = host.events.clone();
    let mut style =
        Style::new(Theme::light(), Box::new(host)).with_auto_icon_color(AutoIconColor::ForegroundColor);

    let option = StyleOption::new(button_rect(), StateFlags::ENABLED).with_icon(IconId::new("document-save"));
    let mut painter = RecordingPainter::new();
    style.draw_control(ControlElement::PushButtonLabel, &option, &mut painter);
    assert_eq!(style.icon_cache().len(), 1);

    assert!(style.set_theme(Theme::dark()));
    assert_eq!(
        *events.borrow(),
        vec![
            HostEvent::ThemeChanged(Theme::dark().meta().name.clone()),
            HostEvent::IconCacheCleared,
            HostEvent::Repaint,
        ]
    );
    assert!(style.icon_cache().is_empty());
    assert_eq!(*style.theme(), Theme::dark());
}

#[test]
fn test_partial_theme_through_the_facade() {
    let theme = Theme::from_json(r##"{ "primaryColor": "#FF0000" }"##).unwrap();
    let style = Style::new(theme, Box::new(NullHost));

    let normal = StyleOption::new(button_rect(), StateFlags::ENABLED).with_role(ColorRole::Primary);
    assert_eq!(
        first_fill(&style, ControlElement::PushButtonBevel, &normal),
        Color::from_rgb8(0xff, 0, 0)
    );

    let disabled = StyleOption::new(button_rect(), StateFlags::empty()).with_role(ColorRole::Primary);
    assert_eq!(
        first_fill(&style, ControlElement::PushButtonBevel, &disabled),
        Theme::light().colors().primary_disabled
    );
}

#[test]
fn test_default_button_uses_the_accent() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let option = StyleOption::new(button_rect(), StateFlags::ENABLED).with_detail(OptionDetail::Button {
        default: true,
        flat: false,
        has_menu: false,
    });
    assert_eq!(
        first_fill(&style, ControlElement::PushButton, &option),
        style.button_background_color(MouseState::Normal, ColorRole::Primary)
    );
}

#[test]
fn test_unthemed_requests_reach_the_base_style() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let style = Style::new(Theme::light(), Box::new(NullHost)).with_base_style(Box::new(SpyBase {
        calls: calls.clone(),
    }));
    let option = StyleOption::new(Rect::new(0.0, 0.0, 50.0, 20.0), StateFlags::ENABLED);
    let mut painter = RecordingPainter::new();

    style.draw_primitive(PrimitiveElement::IndicatorBranch, &option, &mut painter);
    style.draw_primitive(PrimitiveElement::Frame, &option, &mut painter);
    style.draw_control(ControlElement::RubberBand, &option, &mut painter);
    style.draw_complex_control(ComplexControl::TitleBar, &option, &mut painter);
    assert_eq!(
        style.sub_control_rect(ComplexControl::TitleBar, SubControl::TitleBarLabel, &option),
        Rect::new(1.0, 2.0, 3.0, 4.0)
    );
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::TitleBar, &option, Point::new(5.0, 5.0)),
        Some(SubControl::TitleBarLabel)
    );
    assert_eq!(style.pixel_metric(PixelMetric::TextCursorWidth, None), 3.0);
    assert_eq!(style.style_hint(StyleHint::RubberBandTranslucent, None), -1);
    assert_eq!(style.sub_element_rect(SubElement::ItemViewItemText, &option), Rect::ZERO);
    assert_eq!(
        style.size_from_contents(ContentsType::HeaderSection, &option, Size::new(5.0, 6.0)),
        Size::new(5.0, 6.0)
    );

    assert_eq!(
        *calls.borrow(),
        vec![
            "primitive IndicatorBranch",
            "control RubberBand",
            "complex TitleBar",
            "sub-control TitleBar TitleBarLabel",
            "hit TitleBar",
            "metric TextCursorWidth",
            "hint RubberBandTranslucent",
            "sub-element ItemViewItemText",
            "size HeaderSection",
        ]
    );
    assert!(!style.is_themed(ControlKind::Primitive(PrimitiveElement::IndicatorBranch)));
    assert!(style.is_themed(ControlKind::Primitive(PrimitiveElement::Frame)));
}

#[test]
fn test_foreign_sub_control_is_forwarded() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let style = Style::new(Theme::light(), Box::new(NullHost)).with_base_style(Box::new(SpyBase {
        calls: calls.clone(),
    }));
    let option = StyleOption::new(Rect::new(0.0, 0.0, 50.0, 20.0), StateFlags::ENABLED);

    style.sub_control_rect(ComplexControl::Slider, SubControl::SpinBoxUp, &option);
    assert_eq!(*calls.borrow(), vec!["sub-control Slider SpinBoxUp"]);
}

#[test]
fn test_hover_transition() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let key = WidgetKey::new(11);
    let start = Instant::now();
    let duration = Duration::from_millis(Theme::light().metrics().animation_duration);

    let normal = style.button_background_color(MouseState::Normal, ColorRole::Secondary);
    let hovered = style.button_background_color(MouseState::Hovered, ColorRole::Secondary);
    let idle = StyleOption::new(button_rect(), StateFlags::ENABLED).with_widget(key);
    let hover = StyleOption::new(button_rect(), StateFlags::ENABLED | StateFlags::MOUSE_OVER).with_widget(key);

    style.set_frame_time(Some(start));
    assert_eq!(first_fill(&style, ControlElement::PushButtonBevel, &idle), normal);
    assert_eq!(first_fill(&style, ControlElement::PushButtonBevel, &hover), normal);

    style.set_frame_time(Some(start + duration / 2));
    assert!(style.is_animating(key));
    let midway = first_fill(&style, ControlElement::PushButtonBevel, &hover);
    assert_ne!(midway, normal);
    assert_ne!(midway, hovered);

    style.set_frame_time(Some(start + duration));
    assert_eq!(first_fill(&style, ControlElement::PushButtonBevel, &hover), hovered);
    assert!(!style.is_animating(key));

    style.forget_widget(key);
    style.set_frame_time(Some(start + duration * 2));
    assert_eq!(first_fill(&style, ControlElement::PushButtonBevel, &idle), normal);
}

#[test]
fn test_disabled_animations_snap() {
    let config = StyleConfig::new().with_animations(false);
    let style = Style::from_config(&config, Box::new(NullHost));
    let key = WidgetKey::new(12);
    let hovered = style.button_background_color(MouseState::Hovered, ColorRole::Secondary);

    let idle = StyleOption::new(button_rect(), StateFlags::ENABLED).with_widget(key);
    let hover = StyleOption::new(button_rect(), StateFlags::ENABLED | StateFlags::MOUSE_OVER).with_widget(key);
    first_fill(&style, ControlElement::PushButtonBevel, &idle);
    assert_eq!(first_fill(&style, ControlElement::PushButtonBevel, &hover), hovered);
    assert_eq!(style.style_hint(StyleHint::WidgetAnimationDuration, None), 0);
}

#[test]
fn test_config_selects_theme() {
    let config = StyleConfig::new().with_theme(ThemeSource::Builtin("dark".to_string()));
    let style = Style::from_config(&config, Box::new(NullHost));
    assert_eq!(*style.theme(), Theme::dark());
    assert!(style.animations_enabled());
    assert_eq!(style.style_hint(StyleHint::WidgetAnimationDuration, None), 192);
    assert!(!style.is_watching_theme_file());
}

#[test]
fn test_hot_reload_watches_theme_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("live.json");
    Theme::dark().save(&path).unwrap();

    let mut config = StyleConfig::new().with_theme(ThemeSource::File(path));
    config.hot_reload = true;
    let mut style = Style::from_config(&config, Box::new(NullHost));

    assert!(style.is_watching_theme_file());
    assert_eq!(style.theme().meta().name, Theme::dark().meta().name);
    assert!(!style.poll_theme_file());
}

#[test]
fn test_scroll_bar_hit_testing() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let at = |value: f64| {
        StyleOption::new(Rect::new(0.0, 0.0, 12.0, 200.0), StateFlags::ENABLED).with_detail(OptionDetail::ScrollBar {
            minimum: 0.0,
            maximum: 100.0,
            value,
            page_step: 20.0,
        })
    };

    let top = at(0.0);
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::ScrollBar, &top, Point::new(6.0, 10.0)),
        Some(SubControl::ScrollBarSlider)
    );
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::ScrollBar, &top, Point::new(6.0, 150.0)),
        Some(SubControl::ScrollBarAddPage)
    );

    let bottom = at(100.0);
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::ScrollBar, &bottom, Point::new(6.0, 10.0)),
        Some(SubControl::ScrollBarSubPage)
    );
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::ScrollBar, &bottom, Point::new(40.0, 10.0)),
        None
    );
}

#[test]
fn test_slider_geometry() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let option = StyleOption::new(Rect::new(0.0, 0.0, 100.0, 24.0), StateFlags::ENABLED | StateFlags::HORIZONTAL)
        .with_detail(OptionDetail::Slider {
            minimum: 0.0,
            maximum: 100.0,
            value: 50.0,
            tick_interval: 25.0,
        });

    let handle = style.sub_control_rect(ComplexControl::Slider, SubControl::SliderHandle, &option);
    assert_eq!(handle.center(), Point::new(50.0, 12.0));
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::Slider, &option, Point::new(50.0, 12.0)),
        Some(SubControl::SliderHandle)
    );
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::Slider, &option, Point::new(80.0, 12.0)),
        Some(SubControl::SliderGroove)
    );
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::Slider, &option, Point::new(80.0, 2.0)),
        None
    );

    let mut painter = RecordingPainter::new();
    style.draw_complex_control(ComplexControl::Slider, &option, &mut painter);
    let ticks = painter
        .commands
        .iter()
        .filter(|command| matches!(command, PaintCommand::Line { .. }))
        .count();
    assert_eq!(ticks, 5);
}

#[test]
fn test_sizes_respect_theme_minimums() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let option = StyleOption::new(Rect::ZERO, StateFlags::ENABLED).with_text("OK");
    assert_eq!(
        style.size_from_contents(ContentsType::PushButton, &option, Size::new(10.0, 10.0)),
        Size::new(96.0, 24.0)
    );
    assert_eq!(style.pixel_metric(PixelMetric::IndicatorWidth, None), 16.0);
    assert_eq!(style.pixel_metric(PixelMetric::ScrollBarExtent, None), 12.0);
}

#[test]
fn test_line_edit_icon_button_draws_only_its_icon() {
    let key = WidgetKey::new(21);
    let host = SpyHost::default().with_widget(WidgetInfo::new(key, "LineEditIconButton"));
    let style =
        Style::new(Theme::light(), Box::new(host)).with_quirks(Box::new(ClassNameQuirks::default()));
    let option = StyleOption::new(Rect::new(0.0, 0.0, 20.0, 20.0), StateFlags::ENABLED | StateFlags::MOUSE_OVER)
        .with_widget(key)
        .with_icon(IconId::new("edit-clear"));

    let mut painter = RecordingPainter::new();
    style.draw_complex_control(ComplexControl::ToolButton, &option, &mut painter);
    assert_eq!(painter.commands.len(), 1);
    assert!(matches!(&painter.commands[0], PaintCommand::Icon { icon, .. } if icon.tint.is_none()));
}

#[test]
fn test_icon_tint_is_inherited() {
    let window = WidgetInfo::new(WidgetKey::new(30), "Window").with_auto_icon_color(AutoIconColor::TextColor);
    let key = WidgetKey::new(31);
    let host = SpyHost::default().with_widget(WidgetInfo::new(key, "ToolButton").with_parent(window));
    let style = Style::new(Theme::light(), Box::new(host));
    assert_eq!(style.auto_icon_color(Some(key)), AutoIconColor::TextColor);
    assert_eq!(style.auto_icon_color(None), AutoIconColor::None);

    let option = StyleOption::new(Rect::new(0.0, 0.0, 24.0, 24.0), StateFlags::ENABLED)
        .with_widget(key)
        .with_icon(IconId::new("go-home"));
    let mut painter = RecordingPainter::new();
    style.draw_control(ControlElement::ToolButtonLabel, &option, &mut painter);

    let expected = style.label_foreground_color(MouseState::Normal);
    assert!(matches!(&painter.commands[0], PaintCommand::Icon { icon, .. } if icon.tint == Some(expected)));
    assert_eq!(style.icon_cache().len(), 1);
}

#[test]
fn test_focus_ring_follows_focus() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let rect = Rect::new(0.0, 0.0, 96.0, 24.0);

    let mut painter = RecordingPainter::new();
    style.draw_primitive(
        PrimitiveElement::FrameFocusRect,
        &StyleOption::new(rect, StateFlags::ENABLED),
        &mut painter,
    );
    assert!(painter.commands.is_empty());

    style.draw_primitive(
        PrimitiveElement::FrameFocusRect,
        &StyleOption::new(rect, StateFlags::ENABLED | StateFlags::HAS_FOCUS),
        &mut painter,
    );
    assert_eq!(painter.strokes(), vec![style.theme().colors().focus]);
}

fn record(style: &Style, element: ControlElement, option: &StyleOption) -> Vec<PaintCommand> {
    let mut painter = RecordingPainter::new();
    style.draw_control(element, option, &mut painter);
    painter.commands
}

/// Paints `element` for a keyed widget across several frames and checks that
/// every frame matches an unanimated render, then switches to `changed` and
/// checks the settled result.
fn assert_parts_stay_apart(element: ControlElement, option: StyleOption, changed: StyleOption, key: WidgetKey) {
    let keyed = Style::new(Theme::light(), Box::new(NullHost));
    let plain = Style::new(Theme::light(), Box::new(NullHost));
    let start = Instant::now();
    let option = option.with_widget(key);
    let changed = changed.with_widget(key);
    let mut unkeyed = option.clone();
    unkeyed.widget = None;
    let mut unkeyed_changed = changed.clone();
    unkeyed_changed.widget = None;

    for frame in 0..4u32 {
        keyed.set_frame_time(Some(start + Duration::from_millis(100) * frame));
        assert_eq!(record(&keyed, element, &option), record(&plain, element, &unkeyed));
    }
    assert!(!keyed.is_animating(key));

    keyed.set_frame_time(Some(start + Duration::from_millis(400)));
    record(&keyed, element, &changed);
    keyed.set_frame_time(Some(start + Duration::from_millis(450)));
    assert!(keyed.is_animating(key));

    keyed.set_frame_time(Some(start + Duration::from_secs(2)));
    assert_eq!(record(&keyed, element, &changed), record(&plain, element, &unkeyed_changed));
    keyed.set_frame_time(Some(start + Duration::from_secs(3)));
    assert_eq!(record(&keyed, element, &changed), record(&plain, element, &unkeyed_changed));
    assert!(!keyed.is_animating(key));
}

#[test]
fn test_check_box_label_keeps_its_color() {
    let rect = Rect::new(0.0, 0.0, 160.0, 24.0);
    let option = StyleOption::new(rect, StateFlags::ENABLED).with_text("Remember me");
    let checked = StyleOption::new(rect, StateFlags::ENABLED | StateFlags::ON).with_text("Remember me");

    let style = Style::new(Theme::light(), Box::new(NullHost));
    style.set_frame_time(Some(Instant::now()));
    let mut painter = RecordingPainter::new();
    style.draw_control(ControlElement::CheckBox, &option.clone().with_widget(WidgetKey::new(40)), &mut painter);
    assert_eq!(painter.texts(), vec!["Remember me"]);

    assert_parts_stay_apart(ControlElement::CheckBox, option, checked, WidgetKey::new(41));
}

#[test]
fn test_switch_knob_keeps_its_color() {
    let rect = Rect::new(0.0, 0.0, 160.0, 24.0);
    let on = StyleOption::new(rect, StateFlags::ENABLED | StateFlags::ON).with_text("Wi-Fi");
    let off = StyleOption::new(rect, StateFlags::ENABLED).with_text("Wi-Fi");

    let style = Style::new(Theme::light(), Box::new(NullHost));
    style.set_frame_time(Some(Instant::now()));
    let mut painter = RecordingPainter::new();
    style.draw_control(ControlElement::Switch, &on.clone().with_widget(WidgetKey::new(42)), &mut painter);
    let knob = painter
        .commands
        .iter()
        .find_map(|command| match command {
            PaintCommand::FillEllipse { color, .. } => Some(*color),
            _ => None,
        })
        .unwrap();
    assert_eq!(knob, style.switch_handle_color(MouseState::Normal, CheckState::Checked));

    assert_parts_stay_apart(ControlElement::Switch, on, off, WidgetKey::new(43));
}

#[test]
fn test_checkable_row_keeps_its_background() {
    let rect = Rect::new(0.0, 0.0, 200.0, 24.0);
    let detail = OptionDetail::ItemView {
        caption: None,
        checkable: true,
    };
    let row = StyleOption::new(rect, StateFlags::ENABLED | StateFlags::ON)
        .with_text("Inbox")
        .with_detail(detail.clone());
    let selected = StyleOption::new(rect, StateFlags::ENABLED | StateFlags::ON | StateFlags::SELECTED)
        .with_text("Inbox")
        .with_detail(detail);

    assert_parts_stay_apart(ControlElement::ItemViewItem, row, selected, WidgetKey::new(44));
}

#[test]
fn test_dense_ticks_are_skipped() {
    let style = Style::new(Theme::light(), Box::new(NullHost));
    let option = StyleOption::new(Rect::new(0.0, 0.0, 200.0, 24.0), StateFlags::ENABLED | StateFlags::HORIZONTAL)
        .with_detail(OptionDetail::Slider {
            minimum: 0.0,
            maximum: 100.0,
            value: 50.0,
            tick_interval: 1e-6,
        });

    let mut painter = RecordingPainter::new();
    style.draw_complex_control(ComplexControl::Slider, &option, &mut painter);
    assert!(!painter
        .commands
        .iter()
        .any(|command| matches!(command, PaintCommand::Line { .. })));
    assert!(!painter.fills().is_empty());
}
