//! Core types for the tracking-point editor.
//!
//! This module defines the fundamental data structures used throughout the
//! application: the tracking points placed on an image, the loaded image
//! metadata, and the serializable session snapshot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_IMAGE_SIZE;

// ============================================================================
// Tracking Points
// ============================================================================

/// A labeled reference point on the image, in content-space pixel units.
///
/// Coordinates are always within `[0, content_width] x [0, content_height]`;
/// the session's commit path enforces this, the point itself is plain data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingPoint {
    /// Unique, stable identifier (also the rendered label)
    pub id: u64,
    /// Horizontal position in unscaled image pixels
    pub x: f32,
    /// Vertical position in unscaled image pixels
    pub y: f32,
}

impl TrackingPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// Position as a tuple, for callers that work in raw floats.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Copy of this point with coordinates clamped to the given content size.
    pub fn clamped_to(&self, content_size: (f32, f32)) -> Self {
        Self {
            id: self.id,
            x: self.x.clamp(0.0, content_size.0),
            y: self.y.clamp(0.0, content_size.1),
        }
    }
}

// ============================================================================
// Loaded Image
// ============================================================================

/// A decoded image ready for display: where it came from and how big the
/// unscaled content plane is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadedImage {
    /// Source path, if the image came from disk (None for in-memory intake)
    pub path: Option<PathBuf>,
    /// Content width in pixels
    pub width: u32,
    /// Content height in pixels
    pub height: u32,
}

impl LoadedImage {
    /// Content-space dimensions as floats, with a fallback for degenerate
    /// zero-sized images.
    pub fn content_size(&self) -> (f32, f32) {
        if self.width == 0 || self.height == 0 {
            DEFAULT_IMAGE_SIZE
        } else {
            (self.width as f32, self.height as f32)
        }
    }

    /// Display name for the toolbar: file name or a placeholder.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "untitled image".to_string())
    }
}

// ============================================================================
// Session Snapshot
// ============================================================================

/// Serializable snapshot of a session's viewport and point set.
///
/// The live `Session` carries a spatial index that is rebuilt on restore,
/// so the snapshot holds only the plain data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub image: LoadedImage,
    pub zoom: f32,
    pub scroll: (f32, f32),
    pub points: Vec<TrackingPoint>,
    pub next_point_id: u64,
}
