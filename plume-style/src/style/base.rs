use vello::kurbo::{Point, Rect, Size};
use vello::peniko::Color;

use crate::option::{
    ComplexControl, ContentsType, ControlElement, PixelMetric, PrimitiveElement, StyleHint, StyleOption,
    SubControl, SubElement,
};
use crate::render::Painter;

/// The host toolkit's own style, asked for everything [Style](super::Style)
/// does not theme.
pub trait BaseStyle {
    /// Draw a primitive element.
    fn draw_primitive(&self, element: PrimitiveElement, option: &StyleOption, painter: &mut dyn Painter);

    /// Draw a control element.
    fn draw_control(&self, element: ControlElement, option: &StyleOption, painter: &mut dyn Painter);

    /// Draw a complex control.
    fn draw_complex_control(&self, control: ComplexControl, option: &StyleOption, painter: &mut dyn Painter);

    /// Rectangle of a sub-element.
    fn sub_element_rect(&self, element: SubElement, option: &StyleOption) -> Rect;

    /// Rectangle of a complex control's sub-control.
    fn sub_control_rect(&self, control: ComplexControl, sub_control: SubControl, option: &StyleOption) -> Rect;

    /// Size of a control holding contents of `contents_size`.
    fn size_from_contents(&self, contents: ContentsType, option: &StyleOption, contents_size: Size) -> Size;

    /// Sub-control under `point`.
    fn hit_test_complex_control(
        &self,
        control: ComplexControl,
        option: &StyleOption,
        point: Point,
    ) -> Option<SubControl>;

    /// A size in logical pixels.
    fn pixel_metric(&self, metric: PixelMetric, option: Option<&StyleOption>) -> f64;

    /// A behavioural hint.
    fn style_hint(&self, hint: StyleHint, option: Option<&StyleOption>) -> i32;
}

/// A plain toolkit style: outlines, unpadded rectangles and fixed metrics.
#[derive(Debug, Clone, Copy)]
pub struct DefaultBaseStyle {
    /// Outline color of everything drawn.
    pub outline: Color,
}

impl Default for DefaultBaseStyle {
    fn default() -> Self {
        Self {
            outline: Color::from_rgb8(0x80, 0x80, 0x80),
        }
    }
}

impl DefaultBaseStyle {
    fn outline(&self, option: &StyleOption, painter: &mut dyn Painter) {
        if option.rect.area() > 0.0 {
            painter.stroke_rounded_rect(option.rect, 0.0, 1.0, self.outline);
        }
    }
}

impl BaseStyle for DefaultBaseStyle {
    fn draw_primitive(&self, element: PrimitiveElement, option: &StyleOption, painter: &mut dyn Painter) {
        log::trace!("Base style draws primitive {:?}", element);
        self.outline(option, painter);
    }

    fn draw_control(&self, element: ControlElement, option: &StyleOption, painter: &mut dyn Painter) {
        log::trace!("Base style draws control {:?}", element);
        self.outline(option, painter);
    }

    fn draw_complex_control(&self, control: ComplexControl, option: &StyleOption, painter: &mut dyn Painter) {
        log::trace!("Base style draws complex control {:?}", control);
        self.outline(option, painter);
    }

    fn sub_element_rect(&self, _element: SubElement, option: &StyleOption) -> Rect {
        option.rect
    }

    fn sub_control_rect(&self, _control: ComplexControl, _sub_control: SubControl, option: &StyleOption) -> Rect {
        option.rect
    }

    fn size_from_contents(&self, _contents: ContentsType, _option: &StyleOption, contents_size: Size) -> Size {
        contents_size
    }

    fn hit_test_complex_control(
        &self,
        _control: ComplexControl,
        _option: &StyleOption,
        _point: Point,
    ) -> Option<SubControl> {
        None
    }

    fn pixel_metric(&self, metric: PixelMetric, _option: Option<&StyleOption>) -> f64 {
        match metric {
            PixelMetric::TextCursorWidth => 1.0,
            PixelMetric::HeaderMargin | PixelMetric::DockWidgetTitleMargin => 4.0,
            PixelMetric::ProgressBarChunkWidth => 9.0,
            _ => 0.0,
        }
    }

    fn style_hint(&self, hint: StyleHint, _option: Option<&StyleOption>) -> i32 {
        match hint {
            StyleHint::ToolTipWakeUpDelay => 700,
            StyleHint::RubberBandTranslucent => 1,
            _ => 0,
        }
    }
}
