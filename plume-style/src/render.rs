//! # Paint Routines
//!
//! Pure drawing routines. Each takes a [Painter] and a visual description
//! whose colors and sizes have already been resolved and animated by the
//! [Style](crate::style::Style) facade. Nothing here reads the theme, the
//! resolver or the animation manager, so every routine can be exercised
//! with literal inputs and a [RecordingPainter].

use plume_theme::theme::FontSpec;
use vello::kurbo::{Affine, BezPath, Ellipse, Line, Point, Rect, RoundedRect, Stroke};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::icon_cache::TintedIcon;
use crate::state::CheckState;

/// Direction an arrow points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Horizontal text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// The vector primitives the style paints with.
pub trait Painter {
    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);
    /// Outline a rounded rectangle, centered on its edge.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color);
    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    /// Outline the ellipse inscribed in `rect`.
    fn stroke_ellipse(&mut self, rect: Rect, width: f64, color: Color);
    /// Draw a straight line.
    fn draw_line(&mut self, from: Point, to: Point, width: f64, color: Color);
    /// Draw a check mark inside `rect`, cut at `progress` (0 to 1) of its length.
    fn draw_check_mark(&mut self, rect: Rect, width: f64, color: Color, progress: f64);
    /// Draw a chevron inside `rect`.
    fn draw_arrow(&mut self, rect: Rect, direction: ArrowDirection, width: f64, color: Color);
    /// Draw a blurred shadow of a rounded rectangle.
    fn draw_shadow(&mut self, rect: Rect, radius: f64, blur: f64, color: Color);
    /// Draw a line of text.
    fn draw_text(&mut self, rect: Rect, text: &str, font: &FontSpec, color: Color, alignment: Alignment);
    /// Draw an icon.
    fn draw_icon(&mut self, rect: Rect, icon: &TintedIcon);
}

fn visible(color: Color) -> bool {
    color.components[3] > 0.0
}

/// Shrink `rect` by `amount` on every side, never past its center.
pub fn shrink(rect: Rect, amount: f64) -> Rect {
    let dx = amount.min(rect.width() / 2.0);
    let dy = amount.min(rect.height() / 2.0);
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}

/// Square of side `side` centered in `rect`.
pub fn centered_square(rect: Rect, side: f64) -> Rect {
    let center = rect.center();
    let half = side / 2.0;
    Rect::new(center.x - half, center.y - half, center.x + half, center.y + half)
}

/// The three points of a check mark drawn in `rect`.
pub fn check_mark_points(rect: Rect) -> [Point; 3] {
    let (w, h) = (rect.width(), rect.height());
    [
        Point::new(rect.x0 + w * 0.22, rect.y0 + h * 0.52),
        Point::new(rect.x0 + w * 0.42, rect.y0 + h * 0.72),
        Point::new(rect.x0 + w * 0.78, rect.y0 + h * 0.30),
    ]
}

/// The first `progress` (0 to 1) of a polyline, by length.
pub fn partial_polyline(points: &[Point], progress: f64) -> Vec<Point> {
    let progress = progress.clamp(0.0, 1.0);
    let total: f64 = points.windows(2).map(|pair| pair[0].distance(pair[1])).sum();
    let mut remaining = total * progress;
    let mut out = Vec::with_capacity(points.len());

    let Some(first) = points.first() else {
        return out;
    };
    out.push(*first);

    for pair in points.windows(2) {
        let length = pair[0].distance(pair[1]);
        if remaining >= length {
            out.push(pair[1]);
            remaining -= length;
        } else {
            if remaining > 0.0 && length > 0.0 {
                out.push(pair[0].lerp(pair[1], remaining / length));
            }
            break;
        }
    }
    out
}

fn arrow_points(rect: Rect, direction: ArrowDirection) -> [Point; 3] {
    let square = centered_square(rect, rect.width().min(rect.height()) * 0.5);
    let (x0, y0, x1, y1) = (square.x0, square.y0, square.x1, square.y1);
    let (cx, cy) = (square.center().x, square.center().y);
    let (qy0, qy1) = (y0 + square.height() * 0.25, y1 - square.height() * 0.25);
    let (qx0, qx1) = (x0 + square.width() * 0.25, x1 - square.width() * 0.25);
    match direction {
        ArrowDirection::Down => [Point::new(x0, qy0), Point::new(cx, qy1), Point::new(x1, qy0)],
        ArrowDirection::Up => [Point::new(x0, qy1), Point::new(cx, qy0), Point::new(x1, qy1)],
        ArrowDirection::Right => [Point::new(qx0, y0), Point::new(qx1, cy), Point::new(qx0, y1)],
        ArrowDirection::Left => [Point::new(qx1, y0), Point::new(qx0, cy), Point::new(qx1, y1)],
    }
}

fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            path.move_to(*point);
        } else {
            path.line_to(*point);
        }
    }
    path
}

/// A line of text waiting to be shaped by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Area the text is laid out in.
    pub rect: Rect,
    /// Text content.
    pub text: String,
    /// Font to shape with.
    pub font: FontSpec,
    /// Text color.
    pub color: Color,
    /// Horizontal placement.
    pub alignment: Alignment,
}

/// Paints shapes into a vello [Scene].
///
/// Text and icons are collected in [ScenePainter::text_runs] and
/// [ScenePainter::icons] for the host, which owns fonts and icon images.
pub struct ScenePainter<'a> {
    scene: &'a mut Scene,
    /// Text requested during painting, in paint order.
    pub text_runs: Vec<TextRun>,
    /// Icons requested during painting, in paint order.
    pub icons: Vec<(Rect, TintedIcon)>,
}

impl<'a> ScenePainter<'a> {
    /// Paint into `scene`.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            text_runs: Vec::new(),
            icons: Vec::new(),
        }
    }

    fn fill_shape(&mut self, shape: &impl vello::kurbo::Shape, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::default(), &Brush::Solid(color), None, shape);
    }

    fn stroke_shape(&mut self, shape: &impl vello::kurbo::Shape, width: f64, color: Color) {
        self.scene.stroke(
            &Stroke::new(width),
            Affine::default(),
            &Brush::Solid(color),
            None,
            shape,
        );
    }
}

impl Painter for ScenePainter<'_> {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.fill_shape(&RoundedRect::from_rect(rect, radius), color);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color) {
        self.stroke_shape(&RoundedRect::from_rect(rect, radius), width, color);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.fill_shape(&Ellipse::from_rect(rect), color);
    }

    fn stroke_ellipse(&mut self, rect: Rect, width: f64, color: Color) {
        self.stroke_shape(&Ellipse::from_rect(rect), width, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.stroke_shape(&Line::new(from, to), width, color);
    }

    fn draw_check_mark(&mut self, rect: Rect, width: f64, color: Color, progress: f64) {
        let points = partial_polyline(&check_mark_points(rect), progress);
        if points.len() >= 2 {
            self.stroke_shape(&polyline_path(&points), width, color);
        }
    }

    fn draw_arrow(&mut self, rect: Rect, direction: ArrowDirection, width: f64, color: Color) {
        let points = arrow_points(rect, direction);
        self.stroke_shape(&polyline_path(&points), width, color);
    }

    fn draw_shadow(&mut self, rect: Rect, radius: f64, blur: f64, color: Color) {
        self.scene
            .draw_blurred_rounded_rect(Affine::default(), rect, color, radius, blur);
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font: &FontSpec, color: Color, alignment: Alignment) {
        self.text_runs.push(TextRun {
            rect,
            text: text.to_string(),
            font: font.clone(),
            color,
            alignment,
        });
    }

    fn draw_icon(&mut self, rect: Rect, icon: &TintedIcon) {
        self.icons.push((rect, icon.clone()));
    }
}

/// One recorded [Painter] call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum PaintCommand {
    FillRoundedRect { rect: Rect, radius: f64, color: Color },
    StrokeRoundedRect { rect: Rect, radius: f64, width: f64, color: Color },
    FillEllipse { rect: Rect, color: Color },
    StrokeEllipse { rect: Rect, width: f64, color: Color },
    Line { from: Point, to: Point, width: f64, color: Color },
    CheckMark { rect: Rect, color: Color, progress: f64 },
    Arrow { rect: Rect, direction: ArrowDirection, color: Color },
    Shadow { rect: Rect, color: Color },
    Text { rect: Rect, text: String, color: Color },
    Icon { rect: Rect, icon: TintedIcon },
}

impl PaintCommand {
    /// The color the command paints with, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            PaintCommand::FillRoundedRect { color, .. }
            | PaintCommand::StrokeRoundedRect { color, .. }
            | PaintCommand::FillEllipse { color, .. }
            | PaintCommand::StrokeEllipse { color, .. }
            | PaintCommand::Line { color, .. }
            | PaintCommand::CheckMark { color, .. }
            | PaintCommand::Arrow { color, .. }
            | PaintCommand::Shadow { color, .. }
            | PaintCommand::Text { color, .. } => Some(*color),
            PaintCommand::Icon { icon, .. } => icon.tint,
        }
    }
}

/// Records painter calls instead of drawing. Useful to test hosts and styles.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    /// Calls in order.
    pub commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors of every rounded rectangle or ellipse fill, in order.
    pub fn fills(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::FillRoundedRect { color, .. } | PaintCommand::FillEllipse { color, .. } => {
                    Some(*color)
                },
                _ => None,
            })
            .collect()
    }

    /// Colors of every outline, in order.
    pub fn strokes(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::StrokeRoundedRect { color, .. }
                | PaintCommand::StrokeEllipse { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Every text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.commands.push(PaintCommand::FillRoundedRect { rect, radius, color });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color) {
        self.commands.push(PaintCommand::StrokeRoundedRect { rect, radius, width, color });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillEllipse { rect, color });
    }

    fn stroke_ellipse(&mut self, rect: Rect, width: f64, color: Color) {
        self.commands.push(PaintCommand::StrokeEllipse { rect, width, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.commands.push(PaintCommand::Line { from, to, width, color });
    }

    fn draw_check_mark(&mut self, rect: Rect, _width: f64, color: Color, progress: f64) {
        self.commands.push(PaintCommand::CheckMark { rect, color, progress });
    }

    fn draw_arrow(&mut self, rect: Rect, direction: ArrowDirection, _width: f64, color: Color) {
        self.commands.push(PaintCommand::Arrow { rect, direction, color });
    }

    fn draw_shadow(&mut self, rect: Rect, _radius: f64, _blur: f64, color: Color) {
        self.commands.push(PaintCommand::Shadow { rect, color });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, _font: &FontSpec, color: Color, _alignment: Alignment) {
        self.commands.push(PaintCommand::Text {
            rect,
            text: text.to_string(),
            color,
        });
    }

    fn draw_icon(&mut self, rect: Rect, icon: &TintedIcon) {
        self.commands.push(PaintCommand::Icon {
            rect,
            icon: icon.clone(),
        });
    }
}

/// Resolved appearance of a button-like surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisual {
    /// Fill color.
    pub background: Color,
    /// Outline color.
    pub border: Color,
    /// Focus ring color, when the button has focus.
    pub focus_ring: Option<Color>,
    /// Corner radius.
    pub radius: f64,
    /// Outline width.
    pub border_width: f64,
    /// Focus ring width.
    pub focus_width: f64,
}

/// Paint a button bevel.
pub fn paint_button(painter: &mut dyn Painter, rect: Rect, visual: &ButtonVisual) {
    if let Some(ring) = visual.focus_ring {
        paint_focus_ring(painter, rect, visual.radius, visual.focus_width, ring);
    }
    if visible(visual.background) {
        painter.fill_rounded_rect(rect, visual.radius, visual.background);
    }
    if visible(visual.border) && visual.border_width > 0.0 {
        let half = visual.border_width / 2.0;
        painter.stroke_rounded_rect(shrink(rect, half), visual.radius - half, visual.border_width, visual.border);
    }
}

/// Paint a focus ring just outside `rect`.
pub fn paint_focus_ring(painter: &mut dyn Painter, rect: Rect, radius: f64, width: f64, color: Color) {
    if !visible(color) || width <= 0.0 {
        return;
    }
    let half = width / 2.0;
    let ring = rect.inflate(half, half);
    painter.stroke_rounded_rect(ring, radius + half, width, color);
}

/// Resolved appearance of a check box or radio button indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckVisual {
    /// Fill color.
    pub background: Color,
    /// Mark color.
    pub foreground: Color,
    /// Outline color.
    pub border: Color,
    /// Focus ring color, when focused.
    pub focus_ring: Option<Color>,
    /// Check state being drawn.
    pub check: CheckState,
    /// How much of the mark is drawn, 0 to 1.
    pub mark_progress: f64,
    /// Corner radius (ignored by radio buttons).
    pub radius: f64,
    /// Outline width.
    pub border_width: f64,
    /// Focus ring width.
    pub focus_width: f64,
}

/// Paint a check box indicator.
pub fn paint_check_box(painter: &mut dyn Painter, rect: Rect, visual: &CheckVisual) {
    paint_button(
        painter,
        rect,
        &ButtonVisual {
            background: visual.background,
            border: visual.border,
            focus_ring: visual.focus_ring,
            radius: visual.radius,
            border_width: visual.border_width,
            focus_width: visual.focus_width,
        },
    );

    match visual.check {
        CheckState::Checked => {
            painter.draw_check_mark(rect, visual.border_width * 2.0, visual.foreground, visual.mark_progress);
        },
        CheckState::Indeterminate => {
            let bar_height = (rect.height() * 0.12).max(visual.border_width);
            let center = rect.center();
            let half_width = rect.width() * 0.28 * visual.mark_progress.clamp(0.0, 1.0);
            let bar = Rect::new(
                center.x - half_width,
                center.y - bar_height / 2.0,
                center.x + half_width,
                center.y + bar_height / 2.0,
            );
            painter.fill_rounded_rect(bar, bar_height / 2.0, visual.foreground);
        },
        CheckState::NotChecked => {},
    }
}

/// Paint a radio button indicator.
pub fn paint_radio_button(painter: &mut dyn Painter, rect: Rect, visual: &CheckVisual) {
    if let Some(ring) = visual.focus_ring {
        if visible(ring) {
            let half = visual.focus_width / 2.0;
            painter.stroke_ellipse(rect.inflate(half, half), visual.focus_width, ring);
        }
    }
    if visible(visual.background) {
        painter.fill_ellipse(rect, visual.background);
    }
    if visible(visual.border) {
        let half = visual.border_width / 2.0;
        painter.stroke_ellipse(shrink(rect, half), visual.border_width, visual.border);
    }
    if visual.check != CheckState::NotChecked && visual.mark_progress > 0.0 {
        let dot = centered_square(rect, rect.width() * 0.4 * visual.mark_progress.clamp(0.0, 1.0));
        painter.fill_ellipse(dot, visual.foreground);
    }
}

/// Resolved appearance of a switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchVisual {
    /// Track fill.
    pub groove: Color,
    /// Track outline.
    pub groove_border: Color,
    /// Knob fill.
    pub handle: Color,
    /// Focus ring color, when focused.
    pub focus_ring: Option<Color>,
    /// Knob position, 0 (off) to 1 (on).
    pub position: f64,
    /// Outline width.
    pub border_width: f64,
    /// Focus ring width.
    pub focus_width: f64,
}

/// Paint a switch.
pub fn paint_switch(painter: &mut dyn Painter, rect: Rect, visual: &SwitchVisual) {
    let radius = rect.height() / 2.0;
    paint_button(
        painter,
        rect,
        &ButtonVisual {
            background: visual.groove,
            border: visual.groove_border,
            focus_ring: visual.focus_ring,
            radius,
            border_width: visual.border_width,
            focus_width: visual.focus_width,
        },
    );

    let inset = visual.border_width * 2.0;
    let knob_side = rect.height() - inset * 2.0;
    let travel = rect.width() - inset * 2.0 - knob_side;
    let x = rect.x0 + inset + travel * visual.position.clamp(0.0, 1.0);
    let knob = Rect::new(x, rect.y0 + inset, x + knob_side, rect.y0 + inset + knob_side);
    painter.fill_ellipse(knob, visual.handle);
}

/// Resolved appearance of a slider or dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderVisual {
    /// Track color.
    pub groove: Color,
    /// Track color up to the value.
    pub value: Color,
    /// Handle color.
    pub handle: Color,
    /// Handle outline.
    pub handle_border: Color,
    /// Tick mark color, when ticks are drawn.
    pub ticks: Option<Color>,
    /// Focus ring color, when focused.
    pub focus_ring: Option<Color>,
    /// Outline width.
    pub border_width: f64,
    /// Focus ring width.
    pub focus_width: f64,
}

/// Paint a linear slider. `value_rect` is the part of the groove before the handle.
pub fn paint_slider(
    painter: &mut dyn Painter,
    groove: Rect,
    value_rect: Rect,
    handle: Rect,
    tick_positions: &[Point],
    tick_length: f64,
    visual: &SliderVisual,
) {
    let groove_radius = groove.height().min(groove.width()) / 2.0;
    painter.fill_rounded_rect(groove, groove_radius, visual.groove);
    if value_rect.area() > 0.0 {
        painter.fill_rounded_rect(value_rect, groove_radius, visual.value);
    }

    if let Some(tick_color) = visual.ticks {
        for point in tick_positions {
            let end = Point::new(point.x, point.y + tick_length);
            painter.draw_line(*point, end, visual.border_width, tick_color);
        }
    }

    if let Some(ring) = visual.focus_ring {
        if visible(ring) {
            let half = visual.focus_width / 2.0;
            painter.stroke_ellipse(handle.inflate(half, half), visual.focus_width, ring);
        }
    }
    painter.fill_ellipse(handle, visual.handle);
    if visible(visual.handle_border) {
        painter.stroke_ellipse(shrink(handle, visual.border_width / 2.0), visual.border_width, visual.handle_border);
    }
}

/// Resolved appearance of a progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressVisual {
    /// Track color.
    pub groove: Color,
    /// Filled part color.
    pub value: Color,
    /// Fraction filled, 0 to 1.
    pub fraction: f64,
    /// Track thickness.
    pub groove_height: f64,
}

/// Paint a progress bar groove and its filled part, vertically centered in `rect`.
pub fn paint_progress_bar(painter: &mut dyn Painter, rect: Rect, visual: &ProgressVisual) {
    let height = visual.groove_height.min(rect.height());
    let y0 = rect.center().y - height / 2.0;
    let groove = Rect::new(rect.x0, y0, rect.x1, y0 + height);
    let radius = height / 2.0;
    if visible(visual.groove) {
        painter.fill_rounded_rect(groove, radius, visual.groove);
    }

    let fraction = visual.fraction.clamp(0.0, 1.0);
    if fraction > 0.0 {
        let filled = Rect::new(groove.x0, groove.y0, groove.x0 + groove.width() * fraction, groove.y1);
        painter.fill_rounded_rect(filled, radius, visual.value);
    }
}

/// Resolved appearance of a text field frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFieldVisual {
    /// Fill color.
    pub background: Color,
    /// Outline color.
    pub border: Color,
    /// Focus ring color, when focused.
    pub focus_ring: Option<Color>,
    /// Corner radius.
    pub radius: f64,
    /// Outline width.
    pub border_width: f64,
    /// Focus ring width.
    pub focus_width: f64,
}

/// Paint a text field frame.
pub fn paint_text_field(painter: &mut dyn Painter, rect: Rect, visual: &TextFieldVisual) {
    paint_button(
        painter,
        rect,
        &ButtonVisual {
            background: visual.background,
            border: visual.border,
            focus_ring: visual.focus_ring,
            radius: visual.radius,
            border_width: visual.border_width,
            focus_width: visual.focus_width,
        },
    );
}

/// Resolved appearance of a scroll bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBarVisual {
    /// Track color.
    pub groove: Color,
    /// Handle color.
    pub handle: Color,
    /// Current thickness of the handle.
    pub thickness: f64,
    /// Lay out along the x axis.
    pub horizontal: bool,
}

/// Paint a scroll bar. The handle is drawn at `visual.thickness`, hugging the far edge.
pub fn paint_scroll_bar(painter: &mut dyn Painter, groove: Rect, handle: Rect, visual: &ScrollBarVisual) {
    if visible(visual.groove) {
        painter.fill_rounded_rect(groove, 0.0, visual.groove);
    }
    let slim = if visual.horizontal {
        Rect::new(handle.x0, handle.y1 - visual.thickness, handle.x1, handle.y1)
    } else {
        Rect::new(handle.x1 - visual.thickness, handle.y0, handle.x1, handle.y1)
    };
    painter.fill_rounded_rect(slim, visual.thickness / 2.0, visual.handle);
}

/// Paint a line of text.
pub fn paint_label(
    painter: &mut dyn Painter,
    rect: Rect,
    text: &str,
    font: &FontSpec,
    color: Color,
    alignment: Alignment,
) {
    if !text.is_empty() && visible(color) {
        painter.draw_text(rect, text, font, color, alignment);
    }
}

/// Paint a flat panel: optional shadow, fill, then outline.
pub fn paint_panel(
    painter: &mut dyn Painter,
    rect: Rect,
    radius: f64,
    background: Color,
    border: Option<(Color, f64)>,
    shadow: Option<Color>,
) {
    if let Some(shadow) = shadow {
        painter.draw_shadow(rect, radius, radius.max(4.0), shadow);
    }
    if visible(background) {
        painter.fill_rounded_rect(rect, radius, background);
    }
    if let Some((color, width)) = border {
        if visible(color) && width > 0.0 {
            let half = width / 2.0;
            painter.stroke_rounded_rect(shrink(rect, half), (radius - half).max(0.0), width, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_visual() -> ButtonVisual {
        ButtonVisual {
            background: Color::from_rgb8(10, 20, 30),
            border: Color::from_rgb8(40, 50, 60),
            focus_ring: None,
            radius: 4.0,
            border_width: 1.0,
            focus_width: 2.0,
        }
    }

    #[test]
    fn button_fills_then_strokes() {
        let mut painter = RecordingPainter::new();
        let rect = Rect::new(0.0, 0.0, 80.0, 24.0);
        paint_button(&mut painter, rect, &button_visual());

        assert_eq!(painter.fills(), vec![Color::from_rgb8(10, 20, 30)]);
        assert_eq!(painter.strokes(), vec![Color::from_rgb8(40, 50, 60)]);
    }

    #[test]
    fn transparent_parts_are_skipped() {
        let mut painter = RecordingPainter::new();
        let visual = ButtonVisual {
            background: Color::TRANSPARENT,
            border: Color::TRANSPARENT,
            ..button_visual()
        };
        paint_button(&mut painter, Rect::new(0.0, 0.0, 10.0, 10.0), &visual);
        assert!(painter.commands.is_empty());
    }

    #[test]
    fn focus_ring_is_drawn_first() {
        let mut painter = RecordingPainter::new();
        let ring = Color::from_rgba8(0, 0, 255, 100);
        let visual = ButtonVisual {
            focus_ring: Some(ring),
            ..button_visual()
        };
        paint_button(&mut painter, Rect::new(0.0, 0.0, 10.0, 10.0), &visual);
        assert_eq!(painter.commands[0].color(), Some(ring));
    }

    #[test]
    fn unchecked_box_has_no_mark() {
        let mut painter = RecordingPainter::new();
        let visual = CheckVisual {
            background: Color::WHITE,
            foreground: Color::BLACK,
            border: Color::BLACK,
            focus_ring: None,
            check: CheckState::NotChecked,
            mark_progress: 0.0,
            radius: 2.0,
            border_width: 1.0,
            focus_width: 2.0,
        };
        paint_check_box(&mut painter, Rect::new(0.0, 0.0, 16.0, 16.0), &visual);
        assert!(!painter
            .commands
            .iter()
            .any(|command| matches!(command, PaintCommand::CheckMark { .. })));

        let mut painter = RecordingPainter::new();
        paint_check_box(
            &mut painter,
            Rect::new(0.0, 0.0, 16.0, 16.0),
            &CheckVisual {
                check: CheckState::Checked,
                mark_progress: 1.0,
                ..visual
            },
        );
        assert!(painter
            .commands
            .iter()
            .any(|command| matches!(command, PaintCommand::CheckMark { progress, .. } if *progress == 1.0)));
    }

    #[test]
    fn partial_check_mark() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(partial_polyline(&points, 1.0), points.to_vec());
        assert_eq!(
            partial_polyline(&points, 0.25),
            vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]
        );
        assert_eq!(partial_polyline(&points, 0.0), vec![Point::new(0.0, 0.0)]);
        assert!(partial_polyline(&[], 0.5).is_empty());
    }

    #[test]
    fn progress_fill_follows_fraction() {
        let mut painter = RecordingPainter::new();
        let visual = ProgressVisual {
            groove: Color::WHITE,
            value: Color::BLACK,
            fraction: 0.5,
            groove_height: 4.0,
        };
        paint_progress_bar(&mut painter, Rect::new(0.0, 0.0, 100.0, 20.0), &visual);
        match &painter.commands[1] {
            PaintCommand::FillRoundedRect { rect, .. } => assert_eq!(rect.width(), 50.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn shrink_never_inverts() {
        let rect = shrink(Rect::new(0.0, 0.0, 4.0, 10.0), 3.0);
        assert_eq!(rect, Rect::new(2.0, 3.0, 2.0, 7.0));
    }
}
