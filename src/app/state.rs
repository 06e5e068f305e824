//! Application state - the Trackboard struct definition and sub-structs.

use crate::input::InputState;
use crate::session::Session;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// Canvas interaction state - the image session and the active gesture.
pub struct CanvasState {
    /// Image session (only populated once an image has loaded)
    pub session: Option<Session>,
    /// Input state machine - one gesture at a time, structurally
    pub input_state: InputState,
    /// Pan-mode toggle: redirects pointer drags from points to the viewport
    pub pan_mode: bool,
    /// File drop receiver, fed by the embedding shell
    pub file_drop_rx: Option<Receiver<Vec<PathBuf>>>,
}

/// Settings state
pub struct SettingsState {
    /// Settings data
    pub data: Settings,
}

/// System state
pub struct SystemState {
    /// Settings file watcher for hot-reload
    pub settings_watcher: Option<SettingsWatcher>,
}

/// Main application state - composed of focused sub-structs
pub struct Trackboard {
    /// Canvas interaction state
    pub canvas: CanvasState,
    /// Settings state
    pub settings: SettingsState,
    /// System state
    pub system: SystemState,
}
