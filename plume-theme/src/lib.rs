#![warn(missing_docs)]

//! # Plume Theme Data
//!
//! Theme values and their on-disk representation for the plume widget style.
//!
//! ## Overview
//!
//! - **[Theme](theme::Theme)**: An immutable bundle of colors, metrics, fonts and palette
//! - **[Theme documents](document)**: Flat JSON files overriding any subset of the defaults
//! - **[StyleConfig](config::StyleConfig)**: Theme selection from a TOML file and environment variables
//! - **[ThemeWatcher](watcher::ThemeWatcher)**: Hot reload of a theme document
//! - **[Color helpers](color)**: Hex parsing, alpha manipulation, blending and lightening
//!
//! ## Quick Start
//!
//! ```rust
//! use plume_theme::theme::Theme;
//!
//! let theme = Theme::from_json(r##"{ "primaryColor": "#ff0000" }"##).unwrap();
//!
//! // Keys the document leaves out keep their light theme value.
//! assert_eq!(theme.colors().neutral, Theme::light().colors().neutral);
//! ```
//!
//! ## Configuration
//!
//! ```bash
//! export PLUME_THEME=dark
//! export PLUME_THEME=file:~/.config/plume/ocean.json
//! export PLUME_ANIMATIONS=off
//! ```

/// Contains color parsing and color math.
pub mod color;

/// Contains the style configuration.
pub mod config;

/// Contains theme document loading and saving.
pub mod document;

/// Contains the error type.
pub mod error;

/// Contains the field tables of the authored theme values.
pub mod fields;

/// Contains the [Theme](theme::Theme) value and its parts.
pub mod theme;

/// Contains the theme document watcher.
pub mod watcher;
