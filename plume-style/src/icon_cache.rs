//! Cache of tinted icons.
//!
//! Tinting a monochrome icon is done once per icon and color. Entries depend
//! on theme colors, so the whole cache is dropped when the theme changes.

use std::collections::HashMap;

use plume_theme::color::rgba8;
use vello::peniko::Color;

/// Identity of an icon known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(String);

impl IconId {
    /// Name the icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The icon's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// An icon together with the tint to draw it in.
#[derive(Debug, Clone, PartialEq)]
pub struct TintedIcon {
    /// The source icon.
    pub id: IconId,
    /// Tint, or [None] to draw the icon in its own colors.
    pub tint: Option<Color>,
}

/// Tinted icons, keyed by icon and 8-bit tint.
#[derive(Debug, Default)]
pub struct IconCache {
    entries: HashMap<(IconId, [u8; 4]), TintedIcon>,
}

impl IconCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The icon tinted with `tint`, creating the entry on first use.
    pub fn tinted(&mut self, id: &IconId, tint: Color) -> TintedIcon {
        self.entries
            .entry((id.clone(), rgba8(tint)))
            .or_insert_with(|| {
                log::trace!("Tinting icon '{}'", id.name());
                TintedIcon {
                    id: id.clone(),
                    tint: Some(tint),
                }
            })
            .clone()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Clearing {} tinted icon(s)", self.entries.len());
        }
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_icon_and_color() {
        let mut cache = IconCache::new();
        let close = IconId::new("window-close");
        let red = Color::from_rgb8(255, 0, 0);

        let first = cache.tinted(&close, red);
        let second = cache.tinted(&close, red);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        cache.tinted(&close, Color::BLACK);
        cache.tinted(&IconId::new("go-next"), red);
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }
}
