//! # Style Registry
//!
//! Helpers that are not handed a [Style] find the active one through a
//! [StyleLocator]. The [StyleRegistry] only keeps a weak reference: when the
//! host drops or replaces its style, lookups return [None] and helpers fall
//! back to their defaults.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use plume_style::registry::{current_theme_focus_color, StyleRegistry};
//! use plume_style::style::{NullHost, Style};
//! use plume_theme::theme::Theme;
//!
//! let registry = StyleRegistry::new();
//! assert!(current_theme_focus_color(&registry).is_none());
//!
//! let style = Rc::new(RefCell::new(Style::new(Theme::light(), Box::new(NullHost))));
//! registry.install(&style);
//! assert!(current_theme_focus_color(&registry).is_some());
//!
//! drop(style);
//! assert!(current_theme_focus_color(&registry).is_none());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use plume_theme::config::AutoIconColor;
use vello::peniko::Color;

use crate::resolver::ThemeQueries;
use crate::state::Status;
use crate::style::Style;
use crate::widget::{resolve_auto_icon_color, WidgetContext};

/// Finds the style currently used by the application.
pub trait StyleLocator {
    /// The active style, if one is installed and still alive.
    fn current_style(&self) -> Option<Rc<RefCell<Style>>>;
}

/// Remembers the application style without owning it.
#[derive(Default)]
pub struct StyleRegistry {
    current: RefCell<Weak<RefCell<Style>>>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `style` the active style.
    pub fn install(&self, style: &Rc<RefCell<Style>>) {
        log::debug!("Installing application style");
        *self.current.borrow_mut() = Rc::downgrade(style);
    }

    /// Forget the active style.
    pub fn uninstall(&self) {
        *self.current.borrow_mut() = Weak::new();
    }

    /// The active style, if still alive.
    pub fn current(&self) -> Option<Rc<RefCell<Style>>> {
        self.current.borrow().upgrade()
    }
}

impl StyleLocator for StyleRegistry {
    fn current_style(&self) -> Option<Rc<RefCell<Style>>> {
        self.current()
    }
}

/// Focus ring color of the active theme, or [None] without an active style.
///
/// Also [None] while the style is mutably borrowed, such as during a theme swap.
pub fn current_theme_focus_color(locator: &dyn StyleLocator) -> Option<Color> {
    let style = locator.current_style()?;
    let style = style.try_borrow().ok()?;
    Some(style.focus_border_color(Status::Default))
}

/// Icon tinting for `widget`: the widget chain first, then the active
/// style's default, then [AutoIconColor::None].
pub fn auto_icon_color(locator: &dyn StyleLocator, widget: Option<&dyn WidgetContext>) -> AutoIconColor {
    let default = locator
        .current_style()
        .and_then(|style| style.try_borrow().ok().map(|style| style.default_auto_icon_color()))
        .unwrap_or_default();
    resolve_auto_icon_color(widget, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NullHost;
    use crate::widget::{WidgetInfo, WidgetKey};
    use plume_theme::theme::Theme;

    struct FakeLocator(Option<Rc<RefCell<Style>>>);

    impl StyleLocator for FakeLocator {
        fn current_style(&self) -> Option<Rc<RefCell<Style>>> {
            self.0.clone()
        }
    }

    fn shared(style: Style) -> Rc<RefCell<Style>> {
        Rc::new(RefCell::new(style))
    }

    #[test]
    fn registry_does_not_keep_the_style_alive() {
        let registry = StyleRegistry::new();
        let style = shared(Style::new(Theme::light(), Box::new(NullHost)));
        registry.install(&style);
        assert!(registry.current().is_some());

        drop(style);
        assert!(registry.current().is_none());
    }

    #[test]
    fn uninstall_clears() {
        let registry = StyleRegistry::new();
        let style = shared(Style::new(Theme::light(), Box::new(NullHost)));
        registry.install(&style);
        registry.uninstall();
        assert!(registry.current().is_none());
    }

    #[test]
    fn focus_color_follows_the_active_theme() {
        let theme = Theme::light().with_colors(|c| c.focus = Color::from_rgba8(1, 2, 3, 4));
        let locator = FakeLocator(Some(shared(Style::new(theme, Box::new(NullHost)))));
        assert_eq!(current_theme_focus_color(&locator), Some(Color::from_rgba8(1, 2, 3, 4)));
        assert_eq!(current_theme_focus_color(&FakeLocator(None)), None);
    }

    #[test]
    fn icon_color_defaults() {
        let style = Style::new(Theme::light(), Box::new(NullHost)).with_auto_icon_color(AutoIconColor::TextColor);
        let locator = FakeLocator(Some(shared(style)));
        let plain = WidgetInfo::new(WidgetKey::new(1), "ToolButton");
        let own = WidgetInfo::new(WidgetKey::new(2), "ToolButton").with_auto_icon_color(AutoIconColor::ForegroundColor);

        assert_eq!(auto_icon_color(&locator, Some(&plain)), AutoIconColor::TextColor);
        assert_eq!(auto_icon_color(&locator, Some(&own)), AutoIconColor::ForegroundColor);
        assert_eq!(auto_icon_color(&FakeLocator(None), None), AutoIconColor::None);
    }
}
