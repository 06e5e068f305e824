//! Input state machine - unified state management for pointer gestures.
//!
//! This module keeps the current gesture in a single explicit state machine,
//! making impossible states unrepresentable: panning the viewport and
//! dragging a tracking point can never be active at the same time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning              (pointer down while pan mode is on)
//! Idle -> DraggingPoint        (pointer down on a point, pan mode off)
//!
//! Any -> Idle                  (pointer up, pointer leave, pan-mode toggle)
//! ```

use gpui::{Pixels, Point};

/// Unified input state for all pointer interactions.
///
/// Replaces the distributed per-point drag flags of the original design
/// with one centrally-owned tagged value.
#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    /// No active gesture
    Idle,

    /// Viewport panning (pan mode + primary button)
    Panning {
        /// Last pointer position for delta calculation
        last_pos: Point<Pixels>,
    },

    /// Dragging a tracking point
    DraggingPoint {
        /// The point claiming the pointer stream until pointer-up
        point_id: u64,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Dispatch rule for pointer-down, evaluated once per gesture.
    ///
    /// Pan mode wins outright: points are inert while it is on. Otherwise a
    /// hit point starts a drag, and a background press is a no-op.
    pub fn for_pointer_down(
        pan_mode: bool,
        hit_point: Option<u64>,
        pos: Point<Pixels>,
    ) -> Self {
        if pan_mode {
            Self::Panning { last_pos: pos }
        } else if let Some(point_id) = hit_point {
            Self::DraggingPoint { point_id }
        } else {
            Self::Idle
        }
    }

    /// Returns true if any gesture is active
    pub fn is_gesture_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the viewport
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently dragging a point
    pub fn is_dragging_point(&self) -> bool {
        matches!(self, Self::DraggingPoint { .. })
    }

    /// Get the point ID being dragged, if any
    pub fn dragging_point(&self) -> Option<u64> {
        match self {
            Self::DraggingPoint { point_id } => Some(*point_id),
            _ => None,
        }
    }

    /// Get last pointer position (for panning)
    pub fn last_mouse_pos(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    /// Update last pointer position (for panning)
    pub fn update_last_mouse_pos(&mut self, pos: Point<Pixels>) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }

    /// Start panning from the given pointer position
    pub fn start_panning(&mut self, pos: Point<Pixels>) {
        *self = Self::Panning { last_pos: pos };
    }

    /// Start dragging a point
    pub fn start_dragging(&mut self, point_id: u64) {
        *self = Self::DraggingPoint { point_id };
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
