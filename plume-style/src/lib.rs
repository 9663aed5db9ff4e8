#![warn(missing_docs)]

//! # Plume Style Engine
//!
//! A theme-driven widget style: it turns a widget's raw state flags into
//! colors, metrics and smoothly animated transitions, and paints controls
//! through an abstract [Painter](render::Painter).
//!
//! ## Overview
//!
//! - **[State classifiers](state)**: Raw flags to mouse, focus, selection, check and status states
//! - **[ThemeQueries](resolver::ThemeQueries)**: (role, state) to color or metric
//! - **[AnimationManager](animation::AnimationManager)**: Per-widget, per-slot transitions
//! - **[Style](style::Style)**: The facade answering every draw, measure and hit-test request
//! - **[StyleRegistry](registry::StyleRegistry)**: Weak access to the application style
//! - **[Render routines](render)**: Pure painting from already-resolved values
//!
//! ## Quick Start
//!
//! ```rust
//! use plume_style::option::{ControlElement, StyleOption};
//! use plume_style::render::RecordingPainter;
//! use plume_style::state::StateFlags;
//! use plume_style::style::{NullHost, Style};
//! use plume_theme::theme::Theme;
//! use vello::kurbo::Rect;
//!
//! let style = Style::new(Theme::light(), Box::new(NullHost));
//! let option = StyleOption::new(Rect::new(0.0, 0.0, 96.0, 24.0), StateFlags::ENABLED).with_text("OK");
//!
//! let mut painter = RecordingPainter::new();
//! style.draw_control(ControlElement::PushButton, &option, &mut painter);
//! assert_eq!(painter.texts(), vec!["OK"]);
//! ```

/// Contains the per-widget animation manager.
pub mod animation;

/// Contains the tinted icon cache.
pub mod icon_cache;

/// Contains style options and the closed request enums.
pub mod option;

/// Contains the toolkit quirks adapter.
pub mod quirks;

/// Contains the style registry.
pub mod registry;

/// Contains the paint routines and painters.
pub mod render;

/// Contains the color and metric resolver.
pub mod resolver;

/// Contains the widget state classifiers.
pub mod state;

/// Contains the style facade.
pub mod style;

/// Contains widget identity and context.
pub mod widget;

pub use plume_theme::config::AutoIconColor;
