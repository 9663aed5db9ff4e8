//! Reloads a theme document when it changes on disk.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::ThemeResult;
use crate::theme::Theme;

/// Watches a single theme document.
///
/// Changes are collected in the background and picked up by [ThemeWatcher::poll],
/// which never blocks. A document that fails to parse after a change yields
/// nothing, so the caller keeps the theme it already has.
pub struct ThemeWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
    event_rx: mpsc::Receiver<notify::Result<Event>>,
}

impl ThemeWatcher {
    /// Start watching the theme document at `path`.
    pub fn new(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        log::debug!("Watching theme document {:?}", path);

        Ok(Self {
            path,
            _watcher: watcher,
            event_rx: rx,
        })
    }

    /// The watched document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document changed since the last call. Drains pending events.
    pub fn has_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                Ok(event) => changed |= Self::is_content_change(&event.kind),
                Err(err) => log::warn!("Theme watcher error: {}", err),
            }
        }
        changed
    }

    /// Reload the document if it changed since the last call.
    ///
    /// Returns [None] when nothing changed or the new document is unusable.
    pub fn poll(&self) -> Option<Theme> {
        if !self.has_changed() {
            return None;
        }

        match Theme::from_file(&self.path) {
            Ok(theme) => {
                log::info!("Reloaded theme '{}' from {:?}", theme.meta().name, self.path);
                Some(theme)
            },
            Err(err) => {
                log::warn!("Keeping current theme, reload of {:?} failed: {}", self.path, err);
                None
            },
        }
    }

    fn is_content_change(kind: &EventKind) -> bool {
        matches!(kind, EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any)
    }
}
