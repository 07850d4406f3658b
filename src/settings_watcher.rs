//! File watcher for hot-reloading settings.
//!
//! The watcher is non-blocking: `notify` pushes events into a channel and
//! the UI drains it with `poll` on a timer.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

/// `<config_dir>/moodboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moodboard").join("settings.json"))
}

pub struct SettingsWatcher {
    path: PathBuf,
    // Dropping the watcher stops delivery
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
}

impl SettingsWatcher {
    /// Watch `path`. Its parent directory is created if needed so the file
    /// itself may appear later.
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, events) = channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;

        let dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)?;
        // The directory, not the file, so recreate-on-save editors still report
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching settings");

        Ok(Self {
            path,
            _watcher: watcher,
            events,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Drain pending events and return the most recent one for our file.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        while let Ok(result) = self.events.try_recv() {
            match result {
                Ok(event) => {
                    if !event.paths.iter().any(|p| p == &self.path || p.file_name() == self.path.file_name()) {
                        continue;
                    }
                    let mapped = match event.kind {
                        EventKind::Create(_) => Some(SettingsEvent::Created),
                        EventKind::Modify(_) => Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
                        _ => None,
                    };
                    if mapped.is_some() {
                        latest = mapped;
                    }
                }
                Err(err) => latest = Some(SettingsEvent::Error(err.to_string())),
            }
        }
        latest
    }
}
