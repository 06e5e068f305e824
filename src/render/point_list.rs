//! Point list rendering - the read-only coordinate sidebar.
//!
//! Consumes the point collection for display only; edits always go through
//! the drag path.

use crate::app::Trackboard;
use crate::constants::SIDEBAR_WIDTH;
use gpui::*;

/// Render the point list sidebar
pub fn render_point_list(app: &Trackboard) -> Div {
    let mut list = div()
        .w(px(SIDEBAR_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .gap(px(4.0))
        .p(px(12.0))
        .bg(hsla(0.0, 0.0, 0.14, 1.0))
        .border_l_1()
        .border_color(hsla(0.0, 0.0, 1.0, 0.08))
        .child(
            div()
                .pb(px(6.0))
                .text_size(px(13.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(hsla(0.0, 0.0, 0.85, 1.0))
                .child("Tracking Points"),
        );

    let Some(ref session) = app.canvas.session else {
        return list.child(
            div()
                .text_size(px(12.0))
                .text_color(hsla(0.0, 0.0, 0.5, 1.0))
                .child("No image loaded"),
        );
    };

    for point_data in &session.points {
        list = list.child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(6.0))
                .py(px(3.0))
                .child(
                    div()
                        .w(px(18.0))
                        .h(px(18.0))
                        .rounded(px(9.0))
                        .bg(hsla(243.0 / 360.0, 0.6, 0.55, 1.0))
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(
                            div()
                                .text_size(px(10.0))
                                .font_weight(FontWeight::BOLD)
                                .text_color(hsla(0.0, 0.0, 1.0, 1.0))
                                .child(point_data.id.to_string()),
                        ),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(hsla(0.0, 0.0, 0.7, 1.0))
                        .child(format!(
                            "x: {}, y: {}",
                            point_data.x.round() as i32,
                            point_data.y.round() as i32
                        )),
                ),
        );
    }

    list
}
