//! Settings file watcher for hot-reload.
//!
//! Filesystem events arrive on the watcher's own thread; they are queued
//! behind a mutex and drained by polling from the UI loop, so the rest of
//! the application stays single-threaded.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

/// What happened to the watched settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

/// Watches the settings file and queues change events for polling.
pub struct SettingsWatcher {
    events: Arc<Mutex<VecDeque<SettingsEvent>>>,
    _watcher: RecommendedWatcher,
}

/// Default location of the settings file, under the user config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trackboard").join("settings.json"))
}

impl SettingsWatcher {
    /// Start watching the given settings file. The file must exist.
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let events: Arc<Mutex<VecDeque<SettingsEvent>>> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = events.clone();

        let mut watcher =
            notify::recommended_watcher(move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(event) => match event.kind {
                        EventKind::Modify(_) => Some(SettingsEvent::Modified),
                        EventKind::Create(_) => Some(SettingsEvent::Created),
                        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
                        _ => None,
                    },
                    Err(e) => Some(SettingsEvent::Error(e.to_string())),
                };
                if let Some(event) = event {
                    queue.lock().push_back(event);
                }
            })?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            events,
            _watcher: watcher,
        })
    }

    /// Drain the next queued event, if any. Called from the UI loop.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        self.events.lock().pop_front()
    }
}
