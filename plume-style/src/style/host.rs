use plume_theme::theme::Theme;

use crate::widget::{WidgetContext, WidgetKey};

/// What the style needs from the application hosting it.
pub trait StyleHost {
    /// The active theme was replaced.
    fn on_theme_changed(&mut self, _theme: &Theme) {}

    /// Every cached tinted icon was dropped.
    fn on_icon_cache_cleared(&mut self) {}

    /// Repaint every top-level widget.
    fn repaint_top_level_widgets(&mut self);

    /// Look up a live widget by key. [None] when the widget is gone or unknown.
    fn widget(&self, _key: WidgetKey) -> Option<&dyn WidgetContext> {
        None
    }
}

/// A host that knows no widgets and ignores every request.
///
/// Useful for headless measuring and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl StyleHost for NullHost {
    fn repaint_top_level_widgets(&mut self) {}
}
