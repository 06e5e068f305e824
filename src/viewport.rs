//! Viewport state - zoom level and scroll offset for the scaled content plane.
//!
//! All scroll/zoom mutation funnels through this facade so that pan and zoom
//! never race on raw offsets. Zoom commits in two phases: the zoom level is
//! applied synchronously and the matching scroll offset is stored as a
//! pending write, committed at the start of the next render frame so it
//! sequences after the zoom-triggered re-layout.

use gpui::{Pixels, Point, Size, point, px};

use crate::constants::{
    BUTTON_ZOOM_FACTOR, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_IN_FACTOR,
    WHEEL_ZOOM_OUT_FACTOR,
};

/// Zoom and scroll state for the image viewport.
///
/// `zoom` stays within `[MIN_ZOOM, MAX_ZOOM]` and `scroll` stays
/// non-negative; both invariants are maintained by the mutation methods.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Current zoom level (1.0 = unscaled)
    pub zoom: f32,
    /// Scroll offset of the viewport into the scaled content plane
    pub scroll: Point<Pixels>,
    /// Scroll offset computed by a zoom change, awaiting the next frame
    pending_scroll: Option<Point<Pixels>>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            scroll: point(px(0.0), px(0.0)),
            pending_scroll: None,
        }
    }

    /// Reset to the image-load defaults: zoom 1, scroll origin.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.scroll = point(px(0.0), px(0.0));
        self.pending_scroll = None;
    }

    /// Apply one wheel tick of zoom, keeping the viewport's visual center
    /// anchored. A negative raw delta (wheel up) zooms in.
    ///
    /// Returns whether the zoom level changed; a no-op at the zoom bounds.
    pub fn apply_wheel_zoom(&mut self, raw_delta_y: f32, viewport_size: Size<Pixels>) -> bool {
        let factor = if raw_delta_y < 0.0 {
            WHEEL_ZOOM_IN_FACTOR
        } else {
            WHEEL_ZOOM_OUT_FACTOR
        };
        self.set_zoom_anchored(factor, viewport_size)
    }

    /// Discrete zoom-in step for the toolbar button.
    pub fn zoom_in_step(&mut self, viewport_size: Size<Pixels>) -> bool {
        self.set_zoom_anchored(BUTTON_ZOOM_FACTOR, viewport_size)
    }

    /// Discrete zoom-out step for the toolbar button.
    pub fn zoom_out_step(&mut self, viewport_size: Size<Pixels>) -> bool {
        self.set_zoom_anchored(1.0 / BUTTON_ZOOM_FACTOR, viewport_size)
    }

    /// Multiply the zoom by `factor` (clamped), anchoring the content point
    /// under the viewport's visual center.
    ///
    /// The new scroll offset is not written directly: it becomes the pending
    /// scroll, committed on the next frame via [`Viewport::commit_pending_scroll`].
    fn set_zoom_anchored(&mut self, factor: f32, viewport_size: Size<Pixels>) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f32::EPSILON {
            return false;
        }

        let half_width = f32::from(viewport_size.width) / 2.0;
        let half_height = f32::from(viewport_size.height) / 2.0;

        // Content-plane point currently under the viewport's visual center
        let zoom_point_x = f32::from(self.scroll.x) + half_width;
        let zoom_point_y = f32::from(self.scroll.y) + half_height;

        let scale_change = new_zoom / self.zoom;
        self.zoom = new_zoom;
        self.pending_scroll = Some(point(
            px(zoom_point_x * scale_change - half_width),
            px(zoom_point_y * scale_change - half_height),
        ));
        true
    }

    /// Shift the scroll offset opposite to a pointer delta ("grab and pull"
    /// panning). Never touches the zoom level.
    pub fn apply_pan(&mut self, delta: Point<Pixels>) {
        self.scroll = clamp_non_negative(point(
            self.scroll.x - delta.x,
            self.scroll.y - delta.y,
        ));
    }

    /// Native wheel scrolling of the viewport (no zoom modifier held).
    pub fn apply_wheel_scroll(&mut self, delta: Point<Pixels>) {
        self.scroll = clamp_non_negative(point(
            self.scroll.x - delta.x,
            self.scroll.y - delta.y,
        ));
    }

    /// Commit the scroll offset computed by the last zoom change.
    ///
    /// Called at the start of a render frame; returns whether an offset was
    /// applied.
    pub fn commit_pending_scroll(&mut self) -> bool {
        match self.pending_scroll.take() {
            Some(pending) => {
                self.scroll = clamp_non_negative(pending);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Zoom level as a whole percentage for the toolbar readout.
    pub fn zoom_percent(&self) -> i32 {
        (self.zoom * 100.0).round() as i32
    }
}

/// Scroll offsets are non-negative; the surface absorbs overshoot.
fn clamp_non_negative(p: Point<Pixels>) -> Point<Pixels> {
    point(
        px(f32::from(p.x).max(0.0)),
        px(f32::from(p.y).max(0.0)),
    )
}
