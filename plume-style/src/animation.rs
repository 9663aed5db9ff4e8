//! # Animated State Transitions
//!
//! The [AnimationManager] smooths the values the resolver hands out. Each
//! widget has independent slots (background, foreground, border, ...), and
//! every query says "this slot should now be X". The first query for a slot
//! returns X immediately. Later queries with a new X start a transition from
//! whatever the slot currently shows, so interrupting a transition never makes
//! the value jump.
//!
//! The manager is purely reactive. It owns no timer: the host repaints while
//! [AnimationManager::is_animating] reports `true`, and each repaint asks for
//! the value as of now. Widgets are referenced only by [WidgetKey], so the
//! manager never keeps a widget alive; [AnimationManager::forget_widget]
//! drops the records of a destroyed widget.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use plume_style::animation::{AnimationManager, AnimationSlot};
//! use plume_style::widget::WidgetKey;
//!
//! let mut animations = AnimationManager::new();
//! let key = WidgetKey::new(1);
//! let start = Instant::now();
//! let duration = Duration::from_millis(100);
//!
//! assert_eq!(animations.animate_at(key, AnimationSlot::Progress, 0.0, duration, start), 0.0);
//! assert_eq!(animations.animate_at(key, AnimationSlot::Progress, 1.0, duration, start), 0.0);
//! assert_eq!(
//!     animations.animate_at(key, AnimationSlot::Progress, 1.0, duration, start + duration),
//!     1.0
//! );
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use plume_theme::color::lerp_color;
use vello::kurbo::Rect;
use vello::peniko::Color;

use crate::widget::WidgetKey;

/// A property of a widget that animates independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationSlot {
    /// Fill color.
    Background,
    /// Text and icon color.
    Foreground,
    /// Outline color.
    Border,
    /// Focus ring color.
    Focus,
    /// Fill of an indicator drawn beside a label, such as a check box or switch groove.
    Indicator,
    /// Outline of such an indicator.
    IndicatorBorder,
    /// Check mark or switch knob color.
    Mark,
    /// Label color of a control that also paints an indicator.
    Label,
    /// Scalar progress, such as a switch knob position or scroll bar width.
    Progress,
    /// Geometry, such as a slider handle or the selected tab indicator.
    Geometry,
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            },
        }
    }
}

/// A value held by an animation slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedValue {
    #[allow(missing_docs)]
    Color(Color),
    #[allow(missing_docs)]
    Number(f64),
    #[allow(missing_docs)]
    Rect(Rect),
}

impl AnimatedValue {
    /// Interpolate towards `end`. Values of different kinds snap to `end`.
    pub fn interpolate(self, end: AnimatedValue, t: f64) -> AnimatedValue {
        match (self, end) {
            (AnimatedValue::Color(a), AnimatedValue::Color(b)) => {
                AnimatedValue::Color(lerp_color(a, b, t as f32))
            },
            (AnimatedValue::Number(a), AnimatedValue::Number(b)) => {
                AnimatedValue::Number(a + (b - a) * t)
            },
            (AnimatedValue::Rect(a), AnimatedValue::Rect(b)) => AnimatedValue::Rect(Rect::new(
                a.x0 + (b.x0 - a.x0) * t,
                a.y0 + (b.y0 - a.y0) * t,
                a.x1 + (b.x1 - a.x1) * t,
                a.y1 + (b.y1 - a.y1) * t,
            )),
            _ => end,
        }
    }
}

/// A type that can be stored in an animation slot.
pub trait Animatable: Copy {
    /// Wrap the value.
    fn into_value(self) -> AnimatedValue;
    /// Unwrap the value, or [None] if it holds another kind.
    fn from_value(value: AnimatedValue) -> Option<Self>;
}

impl Animatable for Color {
    fn into_value(self) -> AnimatedValue {
        AnimatedValue::Color(self)
    }

    fn from_value(value: AnimatedValue) -> Option<Self> {
        match value {
            AnimatedValue::Color(color) => Some(color),
            _ => None,
        }
    }
}

impl Animatable for f64 {
    fn into_value(self) -> AnimatedValue {
        AnimatedValue::Number(self)
    }

    fn from_value(value: AnimatedValue) -> Option<Self> {
        match value {
            AnimatedValue::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl Animatable for Rect {
    fn into_value(self) -> AnimatedValue {
        AnimatedValue::Rect(self)
    }

    fn from_value(value: AnimatedValue) -> Option<Self> {
        match value {
            AnimatedValue::Rect(rect) => Some(rect),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct AnimationRecord {
    start: AnimatedValue,
    target: AnimatedValue,
    current: AnimatedValue,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl AnimationRecord {
    fn settled(value: AnimatedValue, now: Instant, easing: Easing) -> Self {
        Self {
            start: value,
            target: value,
            current: value,
            started: now,
            duration: Duration::ZERO,
            easing,
        }
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> AnimatedValue {
        let t = self.progress(now);
        if t >= 1.0 {
            self.target
        } else {
            self.start.interpolate(self.target, self.easing.apply(t))
        }
    }

    fn is_running(&self, now: Instant) -> bool {
        self.start != self.target && self.progress(now) < 1.0
    }
}

/// Per-widget, per-slot interpolation of resolved values.
#[derive(Debug)]
pub struct AnimationManager {
    records: HashMap<(WidgetKey, AnimationSlot), AnimationRecord>,
    easing: Easing,
    enabled: bool,
}

impl AnimationManager {
    /// Create an empty manager with animations enabled.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            easing: Easing::default(),
            enabled: true,
        }
    }

    /// Use a different curve for transitions started from now on.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Whether transitions are animated.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable animations. While disabled, every value is its target.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Ask for `target` in a slot, returning the value to paint now.
    pub fn animate<T: Animatable>(
        &mut self,
        key: WidgetKey,
        slot: AnimationSlot,
        target: T,
        duration: Duration,
    ) -> T {
        self.animate_at(key, slot, target, duration, Instant::now())
    }

    /// Same as [AnimationManager::animate] with an explicit clock.
    pub fn animate_at<T: Animatable>(
        &mut self,
        key: WidgetKey,
        slot: AnimationSlot,
        target: T,
        duration: Duration,
        now: Instant,
    ) -> T {
        let value = self.animate_value_at(key, slot, target.into_value(), duration, now);
        T::from_value(value).unwrap_or(target)
    }

    fn animate_value_at(
        &mut self,
        key: WidgetKey,
        slot: AnimationSlot,
        target: AnimatedValue,
        duration: Duration,
        now: Instant,
    ) -> AnimatedValue {
        let duration = if self.enabled { duration } else { Duration::ZERO };
        let easing = self.easing;

        let record = self
            .records
            .entry((key, slot))
            .or_insert_with(|| AnimationRecord::settled(target, now, easing));

        record.current = record.value_at(now);

        if record.target != target {
            log::trace!("Animating {:?} of {:?} over {:?}", slot, key, duration);
            record.start = record.current;
            record.target = target;
            record.started = now;
            record.duration = duration;
            record.easing = easing;
            record.current = record.value_at(now);
        }

        if duration.is_zero() {
            record.start = target;
            record.current = target;
        }

        record.current
    }

    /// The value a slot shows at `now`, if the slot exists.
    pub fn current_at<T: Animatable>(&self, key: WidgetKey, slot: AnimationSlot, now: Instant) -> Option<T> {
        self.records
            .get(&(key, slot))
            .and_then(|record| T::from_value(record.value_at(now)))
    }

    /// Whether any slot of a widget is mid-transition at `now`.
    pub fn is_animating_at(&self, key: WidgetKey, now: Instant) -> bool {
        self.records
            .iter()
            .any(|((record_key, _), record)| *record_key == key && record.is_running(now))
    }

    /// Whether any slot of a widget is mid-transition.
    pub fn is_animating(&self, key: WidgetKey) -> bool {
        self.is_animating_at(key, Instant::now())
    }

    /// Drop every record of a widget.
    pub fn forget_widget(&mut self, key: WidgetKey) {
        self.records.retain(|(record_key, _), _| *record_key != key);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no slot is tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: WidgetKey = WidgetKey::new(7);
    const D: Duration = Duration::from_millis(200);

    fn black() -> Color {
        Color::from_rgb8(0, 0, 0)
    }

    fn white() -> Color {
        Color::from_rgb8(255, 255, 255)
    }

    #[test]
    fn first_query_does_not_animate() {
        let mut manager = AnimationManager::new();
        let now = Instant::now();
        assert_eq!(manager.animate_at(KEY, AnimationSlot::Background, white(), D, now), white());
        assert!(!manager.is_animating_at(KEY, now));
    }

    #[test]
    fn converges_to_target() {
        let mut manager = AnimationManager::new();
        let t0 = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Background, black(), D, t0);

        let at_start = manager.animate_at(KEY, AnimationSlot::Background, white(), D, t0);
        assert_eq!(at_start, black());
        assert!(manager.is_animating_at(KEY, t0 + D / 4));

        let halfway = manager.animate_at(KEY, AnimationSlot::Background, white(), D, t0 + D / 2);
        assert!(halfway.components[0] > 0.0 && halfway.components[0] < 1.0);

        assert_eq!(manager.animate_at(KEY, AnimationSlot::Background, white(), D, t0 + D), white());
        assert_eq!(manager.animate_at(KEY, AnimationSlot::Background, white(), D, t0 + D * 2), white());
        assert!(!manager.is_animating_at(KEY, t0 + D * 2));
    }

    #[test]
    fn interruption_is_continuous() {
        let mut manager = AnimationManager::new();
        let t0 = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Progress, 0.0, D, t0);
        manager.animate_at(KEY, AnimationSlot::Progress, 1.0, D, t0);

        let mid = t0 + D / 2;
        let before = manager.animate_at(KEY, AnimationSlot::Progress, 1.0, D, mid);
        let after = manager.animate_at(KEY, AnimationSlot::Progress, -1.0, D, mid);
        assert_eq!(before, after);
        assert!(before > 0.0);

        let later = manager.animate_at(KEY, AnimationSlot::Progress, -1.0, D, mid + D / 4);
        assert!(later < before);
        assert_eq!(manager.animate_at(KEY, AnimationSlot::Progress, -1.0, D, mid + D), -1.0);
    }

    #[test]
    fn zero_duration_is_instant() {
        let mut manager = AnimationManager::new();
        let now = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Border, black(), Duration::ZERO, now);
        assert_eq!(
            manager.animate_at(KEY, AnimationSlot::Border, white(), Duration::ZERO, now),
            white()
        );
    }

    #[test]
    fn disabled_manager_is_instant() {
        let mut manager = AnimationManager::new();
        manager.set_enabled(false);
        let now = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Border, black(), D, now);
        assert_eq!(manager.animate_at(KEY, AnimationSlot::Border, white(), D, now), white());
        assert!(!manager.is_animating_at(KEY, now));
    }

    #[test]
    fn slots_are_independent() {
        let mut manager = AnimationManager::new();
        let t0 = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Background, black(), D, t0);
        manager.animate_at(KEY, AnimationSlot::Foreground, black(), D, t0);

        manager.animate_at(KEY, AnimationSlot::Background, white(), D, t0);
        let foreground = manager.animate_at(KEY, AnimationSlot::Foreground, black(), D, t0 + D / 2);
        assert_eq!(foreground, black());
        let other = WidgetKey::new(8);
        assert_eq!(manager.animate_at(other, AnimationSlot::Background, white(), D, t0), white());
    }

    #[test]
    fn rects_interpolate() {
        let mut manager = AnimationManager::new().with_easing(Easing::Linear);
        let t0 = Instant::now();
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let to = Rect::new(10.0, 0.0, 20.0, 10.0);
        manager.animate_at(KEY, AnimationSlot::Geometry, from, D, t0);
        manager.animate_at(KEY, AnimationSlot::Geometry, to, D, t0);
        let mid: Rect = manager.animate_at(KEY, AnimationSlot::Geometry, to, D, t0 + D / 2);
        assert!((mid.x0 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn forget_widget_drops_its_slots() {
        let mut manager = AnimationManager::new();
        let now = Instant::now();
        manager.animate_at(KEY, AnimationSlot::Background, black(), D, now);
        manager.animate_at(KEY, AnimationSlot::Progress, 0.5, D, now);
        manager.animate_at(WidgetKey::new(9), AnimationSlot::Progress, 0.5, D, now);
        assert_eq!(manager.len(), 3);

        manager.forget_widget(KEY);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.current_at::<f64>(KEY, AnimationSlot::Progress, now), None);
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOutCubic.apply(0.5), 0.5);
        assert!(Easing::EaseInOutCubic.apply(0.25) < 0.25);
    }
}
