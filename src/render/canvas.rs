//! Viewport canvas rendering - the scaled content plane and tracking dots.
//!
//! The image and its dots live on one absolutely-positioned plane sized
//! `content * zoom` and shifted by the negative scroll offset; re-rendering
//! after a zoom or pan moves everything together.

use crate::app::Trackboard;
use crate::constants::DOT_SIZE;
use crate::types::TrackingPoint;
use gpui::prelude::FluentBuilder;
use gpui::*;

/// Render the viewport area: the scaled image plane with its tracking dots,
/// or the drop-target placeholder when no image is loaded.
pub fn render_viewport_area(app: &Trackboard) -> Div {
    let settings = &app.settings.data;
    let canvas_bg = if settings.dark_canvas {
        hsla(0.0, 0.0, 0.13, 1.0)
    } else {
        hsla(0.0, 0.0, 0.95, 1.0)
    };

    let Some(ref session) = app.canvas.session else {
        return render_empty_state(canvas_bg);
    };

    let zoom = session.viewport.zoom;
    let scroll = session.viewport.scroll;
    let (content_width, content_height) = session.content_size();
    let pan_mode = app.canvas.pan_mode;

    let cursor = if pan_mode {
        if app.canvas.input_state.is_panning() {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::OpenHand
        }
    } else {
        CursorStyle::Arrow
    };

    div()
        .flex_1()
        .h_full()
        .relative()
        .overflow_hidden()
        .bg(canvas_bg)
        .cursor(cursor)
        .child(
            // The scaled content plane, shifted by the scroll offset
            div()
                .absolute()
                .left(px(-f32::from(scroll.x)))
                .top(px(-f32::from(scroll.y)))
                .w(px(content_width * zoom))
                .h(px(content_height * zoom))
                .when_some(session.image.path.clone(), |d, path| {
                    d.child(img(path).size_full().object_fit(ObjectFit::Contain))
                })
                .when(session.image.path.is_none(), |d| {
                    d.bg(hsla(0.0, 0.0, 0.3, 1.0))
                })
                .children(session.points.iter().map(|p| {
                    render_tracking_dot(
                        p,
                        zoom,
                        settings.show_point_labels,
                        settings.show_coordinates,
                        pan_mode,
                    )
                })),
        )
}

/// One tracking dot, centered on its content position. The dot keeps a
/// constant on-screen size; only its position scales with zoom.
fn render_tracking_dot(
    point_data: &TrackingPoint,
    zoom: f32,
    show_label: bool,
    show_coords: bool,
    pan_mode: bool,
) -> Div {
    let center_x = point_data.x * zoom;
    let center_y = point_data.y * zoom;

    div()
        .absolute()
        .left(px(center_x - DOT_SIZE / 2.0))
        .top(px(center_y - DOT_SIZE / 2.0))
        .w(px(DOT_SIZE))
        .h(px(DOT_SIZE))
        .rounded(px(DOT_SIZE / 2.0))
        .bg(hsla(243.0 / 360.0, 0.6, 0.55, 0.92))
        .border_2()
        .border_color(hsla(0.0, 0.0, 1.0, 0.9))
        .when(!pan_mode, |d| d.cursor(CursorStyle::PointingHand))
        .flex()
        .items_center()
        .justify_center()
        .when(show_label, |d| {
            d.child(
                div()
                    .text_size(px(12.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(hsla(0.0, 0.0, 1.0, 1.0))
                    .child(point_data.id.to_string()),
            )
        })
        .when(show_coords, |d| {
            d.child(
                div()
                    .absolute()
                    .top(px(DOT_SIZE + 4.0))
                    .left(px(-DOT_SIZE))
                    .w(px(DOT_SIZE * 3.0))
                    .py(px(2.0))
                    .rounded(px(4.0))
                    .bg(hsla(0.0, 0.0, 0.0, 0.7))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child(format!(
                                "x: {}, y: {}",
                                point_data.x.round() as i32,
                                point_data.y.round() as i32
                            )),
                    ),
            )
        })
}

/// Drop-target placeholder shown before any image has loaded.
fn render_empty_state(bg: Hsla) -> Div {
    div()
        .flex_1()
        .h_full()
        .bg(bg)
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(8.0))
        .child(
            div()
                .text_size(px(18.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(hsla(0.0, 0.0, 0.6, 1.0))
                .child("Drop an image here"),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(hsla(0.0, 0.0, 0.45, 1.0))
                .child("Supports: JPG, PNG, GIF, BMP, WebP"),
        )
}
