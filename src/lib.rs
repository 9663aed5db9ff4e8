#![warn(missing_docs)]

//! Style toolkit widgets from a theme, with smooth state transitions.

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use plume_style as style;
pub use plume_theme as theme;

/// A "prelude" for users of plume.
///
/// Importing this module brings into scope the most common types
/// needed to style and paint widgets.
///
/// ```rust
/// use plume::prelude::*;
///
/// let style = Style::from_config(&StyleConfig::new(), Box::new(NullHost));
/// assert_eq!(style.theme().meta().name, Theme::light().meta().name);
/// ```
pub mod prelude {
    // Theme
    pub use crate::theme::config::{AutoIconColor, StyleConfig, ThemeSource};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::theme::{ControlSize, TextRole, Theme, ThemeMeta};

    // Style
    pub use crate::style::option::{
        ComplexControl, ContentsType, ControlElement, OptionDetail, PixelMetric, PrimitiveElement, StyleHint,
        StyleOption, SubControl, SubElement,
    };
    pub use crate::style::registry::StyleRegistry;
    pub use crate::style::resolver::ThemeQueries;
    pub use crate::style::state::{ColorRole, MouseState, StateFlags, Status};
    pub use crate::style::style::{BaseStyle, NullHost, Style, StyleHost};
    pub use crate::style::widget::{WidgetContext, WidgetInfo, WidgetKey};

    // Painting
    pub use crate::style::render::{Painter, RecordingPainter, ScenePainter};
}
