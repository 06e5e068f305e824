//! Application module - the main Trackboard application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Trackboard struct definition and sub-structs
//! - `lifecycle` - Initialization and settings hot-reload
//! - `session_management` - Image intake, session replacement, view commands

mod lifecycle;
mod session_management;
mod state;

pub use state::{CanvasState, SettingsState, SystemState, Trackboard};
