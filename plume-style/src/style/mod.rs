//! # Style Facade
//!
//! [Style] answers every request of the host toolkit's style contract: draw a
//! primitive, a control or a complex control, compute sub-rectangles and
//! sizes, hit-test sub-controls, report pixel metrics and style hints.
//!
//! Each request is looked up in a [HandlerTable] built once at construction.
//! A themed handler classifies the option's flags, resolves colors and
//! metrics through [ThemeQueries], smooths them with the
//! [AnimationManager], then hands literal values to the routines in
//! [render](crate::render). Kinds without a handler are forwarded to the
//! [BaseStyle], so every request gets an answer.
//!
//! ## Theme swaps
//!
//! [Style::set_theme] ignores a theme equal to the active one. Otherwise it
//! stores the theme, tells the host, clears the icon cache and only then asks
//! the host to repaint its top-level widgets, so no icon tinted with the old
//! colors is ever painted again.
//!
//! ```rust
//! use plume_style::style::{NullHost, Style};
//! use plume_theme::theme::Theme;
//!
//! let mut style = Style::new(Theme::light(), Box::new(NullHost));
//! assert!(!style.set_theme(Theme::light()));
//! assert!(style.set_theme(Theme::dark()));
//! ```

mod base;
mod handlers;
mod host;
mod layout;
mod paint;

use std::cell::{Cell, Ref, RefCell};
use std::time::Instant;

use plume_theme::color::transparent;
use plume_theme::config::{AutoIconColor, StyleConfig, ThemeSource};
use plume_theme::theme::{AnimationKind, Theme};
use plume_theme::watcher::ThemeWatcher;
use vello::kurbo::{Point, Rect, Size};
use vello::peniko::Color;

pub use base::{BaseStyle, DefaultBaseStyle};
pub use handlers::HandlerTable;
pub use host::{NullHost, StyleHost};

use crate::animation::{Animatable, AnimationManager, AnimationSlot};
use crate::icon_cache::{IconCache, TintedIcon};
use crate::option::{
    ComplexControl, ContentsType, ControlElement, ControlKind, PixelMetric, PrimitiveElement, StyleHint,
    StyleOption, SubControl, SubElement,
};
use crate::quirks::{NoQuirks, ToolkitQuirks};
use crate::render::Painter;
use crate::resolver::ThemeQueries;
use crate::state::FocusState;
use crate::widget::{resolve_auto_icon_color, WidgetContext, WidgetKey};

/// The style facade.
pub struct Style {
    theme: Theme,
    host: Box<dyn StyleHost>,
    base: Box<dyn BaseStyle>,
    quirks: Box<dyn ToolkitQuirks>,
    handlers: HandlerTable,
    animations: RefCell<AnimationManager>,
    icon_cache: RefCell<IconCache>,
    auto_icon_color: AutoIconColor,
    frame_time: Cell<Option<Instant>>,
    watcher: Option<ThemeWatcher>,
}

impl Style {
    /// Create a style showing `theme`, with the plain base style and no quirks.
    pub fn new(theme: Theme, host: Box<dyn StyleHost>) -> Self {
        Self {
            theme,
            host,
            base: Box::new(DefaultBaseStyle::default()),
            quirks: Box::new(NoQuirks),
            handlers: HandlerTable::build(),
            animations: RefCell::new(AnimationManager::new()),
            icon_cache: RefCell::new(IconCache::new()),
            auto_icon_color: AutoIconColor::default(),
            frame_time: Cell::new(None),
            watcher: None,
        }
    }

    /// Create a style from configuration.
    ///
    /// An unloadable theme falls back to the light theme. With hot reload on
    /// and a theme document as source, the document is watched; see
    /// [Style::poll_theme_file].
    pub fn from_config(config: &StyleConfig, host: Box<dyn StyleHost>) -> Self {
        let mut style = Self::new(config.resolve_theme_or_default(), host).with_auto_icon_color(config.auto_icon_color);
        style.set_animations_enabled(config.animations);

        if config.hot_reload {
            match &config.theme {
                ThemeSource::File(path) => match ThemeWatcher::new(path) {
                    Ok(watcher) => style.watcher = Some(watcher),
                    Err(err) => log::warn!("Theme hot reload disabled: {}", err),
                },
                ThemeSource::Builtin(name) => {
                    log::debug!("Theme hot reload ignored for built-in theme '{}'", name);
                },
            }
        }

        style
    }

    /// Replace the toolkit default style requests are forwarded to.
    pub fn with_base_style(mut self, base: Box<dyn BaseStyle>) -> Self {
        self.base = base;
        self
    }

    /// Replace the toolkit quirks adapter.
    pub fn with_quirks(mut self, quirks: Box<dyn ToolkitQuirks>) -> Self {
        self.quirks = quirks;
        self
    }

    /// Set the icon tinting used when no widget chooses its own.
    pub fn with_auto_icon_color(mut self, policy: AutoIconColor) -> Self {
        self.auto_icon_color = policy;
        self
    }

    /// Swap the active theme.
    ///
    /// Returns `false` and does nothing when `theme` equals the active theme.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            log::debug!("Theme '{}' is already active", theme.meta().name);
            return false;
        }

        log::debug!("Switching theme to '{}'", theme.meta().name);
        self.theme = theme;
        self.host.on_theme_changed(&self.theme);
        self.icon_cache.borrow_mut().clear();
        self.host.on_icon_cache_cleared();
        self.host.repaint_top_level_widgets();
        true
    }

    /// Apply the watched theme document if it changed since the last poll.
    ///
    /// Returns whether the theme was swapped. A document that fails to load
    /// leaves the active theme in place.
    pub fn poll_theme_file(&mut self) -> bool {
        let Some(theme) = self.watcher.as_ref().and_then(ThemeWatcher::poll) else {
            return false;
        };
        self.set_theme(theme)
    }

    /// Whether a theme document is watched for changes.
    pub fn is_watching_theme_file(&self) -> bool {
        self.watcher.is_some()
    }

    /// The icon tinting a widget resolves to: its own, an ancestor's, or the style default.
    pub fn auto_icon_color(&self, widget: Option<WidgetKey>) -> AutoIconColor {
        let context = widget.and_then(|key| self.host.widget(key));
        resolve_auto_icon_color(context, self.auto_icon_color)
    }

    /// The icon tinting used when no widget chooses its own.
    pub fn default_auto_icon_color(&self) -> AutoIconColor {
        self.auto_icon_color
    }

    /// Whether state changes animate.
    pub fn animations_enabled(&self) -> bool {
        self.animations.borrow().is_enabled()
    }

    /// Turn animations on or off. Off snaps every transition.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations.get_mut().set_enabled(enabled);
    }

    /// Paint as of `now` instead of the wall clock. [None] restores the wall clock.
    pub fn set_frame_time(&self, now: Option<Instant>) {
        self.frame_time.set(now);
    }

    /// Whether a widget is mid-transition. Hosts schedule another repaint while it is.
    pub fn is_animating(&self, widget: WidgetKey) -> bool {
        self.animations.borrow().is_animating_at(widget, self.now())
    }

    /// Drop the animation state of a destroyed widget.
    pub fn forget_widget(&self, widget: WidgetKey) {
        self.animations.borrow_mut().forget_widget(widget);
    }

    /// The cache of tinted icons.
    pub fn icon_cache(&self) -> Ref<'_, IconCache> {
        self.icon_cache.borrow()
    }

    /// Whether requests of `kind` are themed rather than forwarded to the base style.
    pub fn is_themed(&self, kind: ControlKind) -> bool {
        self.handlers.handles(kind)
    }

    /// Draw a primitive element.
    pub fn draw_primitive(&self, element: PrimitiveElement, option: &StyleOption, painter: &mut dyn Painter) {
        match self.handlers.primitive(element) {
            Some(handler) => handler(self, option, painter),
            None => {
                log::trace!("Forwarding primitive {:?} to the base style", element);
                self.base.draw_primitive(element, option, painter);
            },
        }
    }

    /// Draw a control element.
    pub fn draw_control(&self, element: ControlElement, option: &StyleOption, painter: &mut dyn Painter) {
        match self.handlers.control(element) {
            Some(handler) => handler(self, option, painter),
            None => {
                log::trace!("Forwarding control {:?} to the base style", element);
                self.base.draw_control(element, option, painter);
            },
        }
    }

    /// Draw a complex control.
    pub fn draw_complex_control(&self, control: ComplexControl, option: &StyleOption, painter: &mut dyn Painter) {
        match self.handlers.complex(control) {
            Some(handler) => handler(self, option, painter),
            None => {
                log::trace!("Forwarding complex control {:?} to the base style", control);
                self.base.draw_complex_control(control, option, painter);
            },
        }
    }

    /// Rectangle of a sub-element.
    pub fn sub_element_rect(&self, element: SubElement, option: &StyleOption) -> Rect {
        match self.handlers.sub_element(element) {
            Some(handler) => handler(self, option),
            None => {
                log::trace!("Forwarding sub-element {:?} to the base style", element);
                self.base.sub_element_rect(element, option)
            },
        }
    }

    /// Rectangle of a complex control's sub-control.
    pub fn sub_control_rect(&self, control: ComplexControl, sub_control: SubControl, option: &StyleOption) -> Rect {
        let themed = self
            .handlers
            .sub_control(control)
            .and_then(|handler| handler(self, sub_control, option));

        match themed {
            Some(rect) => rect,
            None => {
                log::trace!("Forwarding sub-control {:?} of {:?} to the base style", sub_control, control);
                self.base.sub_control_rect(control, sub_control, option)
            },
        }
    }

    /// Size of a control holding contents of `contents_size`.
    pub fn size_from_contents(&self, contents: ContentsType, option: &StyleOption, contents_size: Size) -> Size {
        match self.handlers.contents(contents) {
            Some(handler) => handler(self, option, contents_size),
            None => {
                log::trace!("Forwarding size of {:?} to the base style", contents);
                self.base.size_from_contents(contents, option, contents_size)
            },
        }
    }

    /// Sub-control of a complex control under `point`.
    pub fn hit_test_complex_control(
        &self,
        control: ComplexControl,
        option: &StyleOption,
        point: Point,
    ) -> Option<SubControl> {
        if self.handlers.sub_control(control).is_none() {
            log::trace!("Forwarding hit test of {:?} to the base style", control);
            return self.base.hit_test_complex_control(control, option, point);
        }

        layout::hit_test_order(control)
            .iter()
            .copied()
            .find(|sub_control| self.sub_control_rect(control, *sub_control, option).contains(point))
    }

    /// A size in logical pixels.
    pub fn pixel_metric(&self, metric: PixelMetric, option: Option<&StyleOption>) -> f64 {
        match self.handlers.metric(metric) {
            Some(handler) => handler(self, option),
            None => {
                log::trace!("Forwarding metric {:?} to the base style", metric);
                self.base.pixel_metric(metric, option)
            },
        }
    }

    /// A behavioural hint.
    pub fn style_hint(&self, hint: StyleHint, option: Option<&StyleOption>) -> i32 {
        match self.handlers.hint(hint) {
            Some(handler) => handler(self, option),
            None => {
                log::trace!("Forwarding hint {:?} to the base style", hint);
                self.base.style_hint(hint, option)
            },
        }
    }

    pub(crate) fn now(&self) -> Instant {
        self.frame_time.get().unwrap_or_else(Instant::now)
    }

    pub(crate) fn quirks(&self) -> &dyn ToolkitQuirks {
        self.quirks.as_ref()
    }

    pub(crate) fn widget_context(&self, option: &StyleOption) -> Option<&dyn WidgetContext> {
        option.widget.and_then(|key| self.host.widget(key))
    }

    /// The value to paint for `target`, smoothed per widget and slot.
    /// Options without a widget are never animated.
    pub(crate) fn animated<T: Animatable>(
        &self,
        option: &StyleOption,
        slot: AnimationSlot,
        target: T,
        kind: AnimationKind,
    ) -> T {
        let Some(key) = option.widget else {
            return target;
        };
        let duration = self.animation_duration(kind);
        self.animations
            .borrow_mut()
            .animate_at(key, slot, target, duration, self.now())
    }

    /// The focus ring to draw, fading in and out with focus.
    pub(crate) fn focus_ring(&self, option: &StyleOption) -> Option<Color> {
        if self
            .widget_context(option)
            .is_some_and(|widget| self.quirks.draws_own_focus(widget))
        {
            return None;
        }

        let states = option.states();
        let color = self.focus_border_color(states.status);
        let target = match states.focus {
            FocusState::Focused => color,
            FocusState::NotFocused => transparent(color),
        };
        let ring = self.animated(option, AnimationSlot::Focus, target, AnimationKind::Focus);
        (ring.components[3] > 0.0).then_some(ring)
    }

    /// The option's icon, tinted per the widget's icon tinting.
    pub(crate) fn icon(&self, option: &StyleOption, foreground: Color, text: Color) -> Option<TintedIcon> {
        let id = option.icon.as_ref()?;
        let tint = match resolve_auto_icon_color(self.widget_context(option), self.auto_icon_color) {
            AutoIconColor::None => {
                return Some(TintedIcon {
                    id: id.clone(),
                    tint: None,
                })
            },
            AutoIconColor::ForegroundColor => foreground,
            AutoIconColor::TextColor => text,
        };
        Some(self.icon_cache.borrow_mut().tinted(id, tint))
    }
}

impl ThemeQueries for Style {
    fn theme(&self) -> &Theme {
        &self.theme
    }
}
