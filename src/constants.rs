//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Multiplicative step per wheel tick in the zoom-in direction
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 1.1;

/// Multiplicative step per wheel tick in the zoom-out direction
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 0.9;

/// Multiplicative step for the discrete zoom buttons (in: x, out: 1/x)
pub const BUTTON_ZOOM_FACTOR: f32 = 1.1;

/// Pixels scrolled per wheel line for line-based scroll deltas
pub const SCROLL_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the toolbar above the viewport in pixels
pub const TOOLBAR_HEIGHT: f32 = 48.0;

/// Width of the point list sidebar in pixels
pub const SIDEBAR_WIDTH: f32 = 220.0;

// ============================================================================
// Tracking Points
// ============================================================================

/// Rendered diameter of a tracking dot at zoom 1.0, in device pixels
pub const DOT_SIZE: f32 = 32.0;

/// Hit-test radius around a dot center, in device pixels
pub const POINT_HIT_RADIUS: f32 = 16.0;

/// Default point layout seeded when an image session starts
pub const SEED_LAYOUT: [(f32, f32); 4] = [
    (50.0, 50.0),
    (150.0, 50.0),
    (50.0, 150.0),
    (150.0, 150.0),
];

/// Fallback content size when an image reports zero dimensions
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (800.0, 600.0);
