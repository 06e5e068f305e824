//! Mouse and scroll input handling for the image viewport.
//!
//! This module implements all pointer interaction logic: point dragging,
//! viewport panning, and modifier-gated wheel zoom.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Pan and point-drag share the pointer stream, and the
//! dispatch rule in `InputState::for_pointer_down` decides which one claims
//! it - never both.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and the pointer-down dispatch rule
//! - `coords` - Device/content coordinate conversion
//! - `mouse_down` - Pointer-down handling (gesture arbitration, hit testing)
//! - `mouse_up` - Pointer-up handling (gesture finalization)
//! - `drag` - Pointer-move handling (pan deltas, clamped point drags)
//! - `transform` - Wheel handling (precision zoom vs native scroll)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use state::InputState;
