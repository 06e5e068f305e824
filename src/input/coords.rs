//! Coordinate conversion utilities for viewport interactions.
//!
//! This module provides centralized coordinate conversion functions to
//! eliminate duplicated formulas across input handling code. Device space is
//! the coordinate system of raw pointer events; content space is the
//! unscaled source image in pixels.

use gpui::{Pixels, Point, Size, point, px};

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    /// On-screen top-left of the scrollable viewport, in device coordinates
    pub origin: Point<Pixels>,
    /// Scroll offset of the viewport into the scaled content plane
    pub scroll: &'a Point<Pixels>,
    pub zoom: f32,
}

impl<'a> CoordinateContext<'a> {
    /// Create a new coordinate context
    #[inline]
    pub fn new(origin: Point<Pixels>, scroll: &'a Point<Pixels>, zoom: f32) -> Self {
        Self {
            origin,
            scroll,
            zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a device position to a content position
    #[inline]
    pub fn device_to_content(device_pos: Point<Pixels>, ctx: &CoordinateContext<'_>) -> Point<Pixels> {
        point(
            px((f32::from(device_pos.x) - f32::from(ctx.origin.x) + f32::from(ctx.scroll.x)) / ctx.zoom),
            px((f32::from(device_pos.y) - f32::from(ctx.origin.y) + f32::from(ctx.scroll.y)) / ctx.zoom),
        )
    }

    /// Convert a content position back to a device position
    #[inline]
    pub fn content_to_device(content_pos: Point<Pixels>, ctx: &CoordinateContext<'_>) -> Point<Pixels> {
        point(
            px(f32::from(content_pos.x) * ctx.zoom - f32::from(ctx.scroll.x) + f32::from(ctx.origin.x)),
            px(f32::from(content_pos.y) * ctx.zoom - f32::from(ctx.scroll.y) + f32::from(ctx.origin.y)),
        )
    }

    /// Convert a delta from device to content space (for drag operations)
    #[inline]
    pub fn delta_device_to_content(delta: Point<Pixels>, zoom: f32) -> Point<Pixels> {
        point(
            px(f32::from(delta.x) / zoom),
            px(f32::from(delta.y) / zoom),
        )
    }

    /// Convert a delta from content to device space
    #[inline]
    pub fn delta_content_to_device(delta: Point<Pixels>, zoom: f32) -> Point<Pixels> {
        point(
            px(f32::from(delta.x) * zoom),
            px(f32::from(delta.y) * zoom),
        )
    }

    /// Clamp a content position into `[0, bounds]` per axis.
    ///
    /// Idempotent: clamping an in-range position is a no-op.
    #[inline]
    pub fn clamp_to_content(content_pos: Point<Pixels>, bounds: Size<Pixels>) -> Point<Pixels> {
        point(
            px(f32::from(content_pos.x).clamp(0.0, f32::from(bounds.width))),
            px(f32::from(content_pos.y).clamp(0.0, f32::from(bounds.height))),
        )
    }
}
