//! Application lifecycle - initialization and settings hot-reload.

use super::{CanvasState, SettingsState, SystemState, Trackboard};
use crate::input::InputState;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use gpui::Context;

impl Trackboard {
    pub fn new() -> Self {
        Self {
            canvas: CanvasState {
                session: None,
                input_state: InputState::default(),
                pan_mode: false,
                file_drop_rx: None,
            },
            settings: SettingsState {
                data: Settings::load(),
            },
            system: SystemState {
                settings_watcher: crate::settings_watcher::default_settings_path()
                    .and_then(|p| SettingsWatcher::new(p).ok()),
            },
        }
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        if let Some(ref mut watcher) = self.system.settings_watcher {
            if let Some(event) = watcher.poll() {
                match event {
                    SettingsEvent::Modified | SettingsEvent::Created => {
                        tracing::info!("Settings file changed, reloading...");
                        self.settings.data = Settings::load();
                        cx.notify();
                    }
                    SettingsEvent::Deleted => {
                        tracing::warn!("Settings file deleted");
                    }
                    SettingsEvent::Error(e) => {
                        tracing::error!("Settings watch error: {}", e);
                    }
                }
            }
        }
    }
}

impl Default for Trackboard {
    fn default() -> Self {
        Self::new()
    }
}
