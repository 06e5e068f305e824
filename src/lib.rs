//! Trackboard - an image tracking-point editor.
//!
//! Load an image, place and drag labeled reference points on it, and
//! navigate via zoom and pan. The core of the crate is the viewport
//! transform and pointer-mapping engine: a zoom/scroll facade with
//! center-anchored zoom ([`viewport`]), pure device/content coordinate
//! conversion ([`input::coords`]), and a single-gesture input state machine
//! ([`input`]) that arbitrates between panning the viewport and dragging a
//! point.

pub mod app;
pub mod constants;
pub mod input;
pub mod loader;
pub mod perf;
pub mod render;
pub mod session;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use app::Trackboard;

/// Initialize tracing with an env-filter (`RUST_LOG`), defaulting to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
