//! # Theme Documents
//!
//! Themes are stored as a single flat JSON object. Every key names one authored
//! field; its value is either a literal (a `"#rrggbb"`/`"#rrggbbaa"` color, a
//! number or a boolean) or the name of another key whose value is used instead.
//!
//! ```json
//! {
//!   "meta": { "name": "Ocean", "version": "1.0", "author": "someone" },
//!   "primaryColor": "#1b6ac9",
//!   "primaryColorHovered": "primaryColor",
//!   "borderRadius": 4
//! }
//! ```
//!
//! Loading is permissive: unknown keys are ignored, and keys that are missing,
//! hold a value of the wrong type, or alias too deep keep the compiled-in
//! default. Only a document that is not a JSON object at all fails to load, in
//! which case no theme is produced and the caller keeps its current one.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ThemeError, ThemeResult};
use crate::fields::{DocumentValue, FieldTable};
use crate::theme::{Theme, ThemeColors, ThemeMeta, ThemeMetrics};

/// Key of the metadata block.
pub const META_KEY: &str = "meta";

/// How many aliases are followed before a value is considered absent.
///
/// A key may name one other key, whose value must then be a literal. Longer
/// chains, including cycles, resolve to the compiled-in default.
pub const MAX_ALIAS_HOPS: usize = 1;

/// Typed, alias-aware access to the keys of a theme document.
pub struct DocumentReader<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> DocumentReader<'a> {
    /// Wrap a parsed document object.
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self { object }
    }

    /// Resolve `key` to a literal of type `T`, following at most
    /// [MAX_ALIAS_HOPS] aliases.
    pub fn resolve<T: DocumentValue>(&self, key: &str) -> Option<T> {
        let mut value = self.object.get(key)?;
        let mut hops = 0;

        loop {
            if let Some(literal) = T::from_document(value) {
                return Some(literal);
            }

            let alias = match value.as_str() {
                Some(alias) => alias,
                None => {
                    log::warn!("Theme key '{}' has a value of the wrong type, ignoring", key);
                    return None;
                },
            };

            if hops >= MAX_ALIAS_HOPS {
                log::warn!(
                    "Theme key '{}' exceeds {} alias hop(s) at '{}', using default",
                    key,
                    MAX_ALIAS_HOPS,
                    alias
                );
                return None;
            }

            value = match self.object.get(alias) {
                Some(next) => next,
                None => {
                    log::warn!("Theme key '{}' aliases unknown key '{}'", key, alias);
                    return None;
                },
            };
            hops += 1;
        }
    }

    /// Read the metadata block. Missing or malformed metadata is empty.
    pub fn meta(&self) -> ThemeMeta {
        match self.object.get(META_KEY) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed theme metadata: {}", err);
                ThemeMeta::default()
            }),
            None => ThemeMeta::default(),
        }
    }
}

impl Theme {
    /// Parse a theme document.
    ///
    /// Fails only when the text is not JSON or not an object.
    pub fn from_json(text: &str) -> ThemeResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_document(&value)
    }

    /// Build a theme from an already parsed document.
    pub fn from_document(document: &Value) -> ThemeResult<Self> {
        let object = document
            .as_object()
            .ok_or_else(|| ThemeError::invalid_document("expected a JSON object at the top level"))?;
        let reader = DocumentReader::new(object);

        for key in object.keys() {
            let known = key == META_KEY
                || ThemeColors::KEYS.contains(&key.as_str())
                || ThemeMetrics::KEYS.contains(&key.as_str());
            if !known {
                log::debug!("Ignoring unknown theme key '{}'", key);
            }
        }

        let mut colors = ThemeColors::default();
        colors.read_fields(&reader);
        let mut metrics = ThemeMetrics::default();
        metrics.read_fields(&reader);

        Ok(Theme::new(reader.meta(), colors, metrics))
    }

    /// Load a theme document from a file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        let text = fs::read_to_string(path)?;
        let theme = Self::from_json(&text)?;
        log::debug!("Loaded theme '{}' from {:?}", theme.meta().name, path);
        Ok(theme)
    }

    /// Serialize every authored field as a theme document.
    ///
    /// Keys come out in a stable order: metadata, colors, then metrics.
    pub fn to_document(&self) -> IndexMap<String, Value> {
        let mut document = IndexMap::new();
        document.insert(
            META_KEY.to_string(),
            serde_json::to_value(self.meta()).unwrap_or(Value::Null),
        );
        self.colors().write_fields(&mut document);
        self.metrics().write_fields(&mut document);
        document
    }

    /// Serialize the theme as pretty-printed JSON.
    pub fn to_json_string(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Write the theme document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ThemeResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::peniko::Color;

    #[test]
    fn partial_document_keeps_defaults() {
        let theme = Theme::from_json(r##"{ "primaryColor": "#FF0000" }"##).unwrap();
        let defaults = Theme::light();

        assert_eq!(theme.colors().primary, Color::from_rgb8(255, 0, 0));
        assert_eq!(theme.colors().primary_disabled, defaults.colors().primary_disabled);
        assert_eq!(theme.metrics(), defaults.metrics());
        assert_eq!(theme.meta(), &ThemeMeta::default());
    }

    #[test]
    fn one_alias_hop_resolves() {
        let theme = Theme::from_json(
            r##"{ "primaryColor": "#00ff00", "primaryColorHovered": "primaryColor" }"##,
        )
        .unwrap();
        assert_eq!(theme.colors().primary_hovered, Color::from_rgb8(0, 255, 0));
    }

    #[test]
    fn two_alias_hops_fall_back_to_default() {
        let theme = Theme::from_json(
            r##"{
                "primaryColorPressed": "primaryColorHovered",
                "primaryColorHovered": "primaryColor",
                "primaryColor": "#00ff00"
            }"##,
        )
        .unwrap();
        assert_eq!(
            theme.colors().primary_pressed,
            Theme::light().colors().primary_pressed
        );
        assert_eq!(theme.colors().primary_hovered, Color::from_rgb8(0, 255, 0));
    }

    #[test]
    fn alias_cycle_terminates() {
        let theme = Theme::from_json(
            r##"{ "primaryColor": "primaryColorHovered", "primaryColorHovered": "primaryColor" }"##,
        )
        .unwrap();
        assert_eq!(theme.colors().primary, Theme::light().colors().primary);
    }

    #[test]
    fn wrong_types_are_ignored() {
        let theme = Theme::from_json(
            r##"{ "borderRadius": "#ffffff", "primaryColor": 12, "useSystemFonts": true }"##,
        )
        .unwrap();
        let defaults = Theme::light();
        assert_eq!(theme.metrics().border_radius, defaults.metrics().border_radius);
        assert_eq!(theme.colors().primary, defaults.colors().primary);
        assert!(theme.metrics().use_system_fonts);
    }

    #[test]
    fn metric_aliases_resolve() {
        let theme =
            Theme::from_json(r##"{ "spacing": 10, "borderRadius": "spacing" }"##).unwrap();
        assert_eq!(theme.metrics().border_radius, 10.0);
    }

    #[test]
    fn malformed_documents_fail() {
        assert!(matches!(Theme::from_json("{ nope"), Err(ThemeError::Json(_))));
        assert!(matches!(
            Theme::from_json("[1, 2, 3]"),
            Err(ThemeError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn metadata_is_read() {
        let theme = Theme::from_json(
            r##"{ "meta": { "name": "Ocean", "author": "someone" }, "unknownKey": 3 }"##,
        )
        .unwrap();
        assert_eq!(theme.meta().name, "Ocean");
        assert_eq!(theme.meta().author, "someone");
        assert_eq!(theme.meta().version, "");
    }

    #[test]
    fn serialized_document_reloads_equal() {
        let theme = Theme::dark();
        let text = theme.to_json_string().unwrap();
        assert_eq!(Theme::from_json(&text).unwrap(), theme);
    }

    #[test]
    fn document_key_order_is_stable() {
        let document = Theme::light().to_document();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys[0], META_KEY);
        assert_eq!(keys[1], ThemeColors::KEYS[0]);
        assert_eq!(keys.len(), 1 + ThemeColors::KEYS.len() + ThemeMetrics::KEYS.len());
    }
}
