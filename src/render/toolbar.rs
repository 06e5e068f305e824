//! Toolbar rendering - zoom controls, reset, and the pan-mode toggle.

use crate::app::Trackboard;
use crate::constants::TOOLBAR_HEIGHT;
use gpui::*;

/// Render a single toolbar button
fn render_toolbar_button(id: &'static str, label: &'static str, active: bool) -> Stateful<Div> {
    let bg = if active {
        hsla(243.0 / 360.0, 0.55, 0.55, 1.0)
    } else {
        hsla(0.0, 0.0, 1.0, 0.06)
    };
    let fg = if active {
        hsla(0.0, 0.0, 1.0, 1.0)
    } else {
        hsla(0.0, 0.0, 0.85, 1.0)
    };

    div()
        .id(id)
        .h(px(30.0))
        .px(px(10.0))
        .rounded(px(6.0))
        .bg(bg)
        .hover(move |s| {
            if active {
                s.bg(bg)
            } else {
                s.bg(hsla(0.0, 0.0, 1.0, 0.12))
            }
        })
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(13.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(fg)
                .child(label),
        )
}

/// Render the toolbar
pub fn render_toolbar(app: &Trackboard, cx: &Context<Trackboard>) -> Div {
    let mut bar = div()
        .w_full()
        .h(px(TOOLBAR_HEIGHT))
        .px(px(12.0))
        .flex()
        .flex_row()
        .items_center()
        .gap(px(8.0))
        .bg(hsla(0.0, 0.0, 0.16, 1.0))
        .border_b_1()
        .border_color(hsla(0.0, 0.0, 1.0, 0.08))
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(hsla(0.0, 0.0, 0.9, 1.0))
                .child("Trackboard"),
        );

    let Some(ref session) = app.canvas.session else {
        return bar;
    };

    bar = bar
        .child(
            render_toolbar_button("zoom-out", "−", false).on_click(cx.listener(
                |this, _, window, cx| {
                    this.zoom_out_clicked(window, cx);
                },
            )),
        )
        .child(
            div()
                .px(px(8.0))
                .py(px(3.0))
                .rounded(px(5.0))
                .bg(hsla(0.0, 0.0, 1.0, 0.06))
                .text_size(px(12.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(hsla(0.0, 0.0, 0.8, 1.0))
                .child(format!("{}%", session.viewport.zoom_percent())),
        )
        .child(
            render_toolbar_button("zoom-in", "+", false).on_click(cx.listener(
                |this, _, window, cx| {
                    this.zoom_in_clicked(window, cx);
                },
            )),
        )
        .child(
            render_toolbar_button("zoom-reset", "Reset", false).on_click(cx.listener(
                |this, _, _, cx| {
                    this.reset_view_clicked(cx);
                },
            )),
        )
        // Divider between view controls and mode controls
        .child(
            div()
                .w(px(1.0))
                .h(px(22.0))
                .mx(px(4.0))
                .bg(hsla(0.0, 0.0, 1.0, 0.12)),
        )
        .child(
            render_toolbar_button("pan-mode", "Pan", app.canvas.pan_mode).on_click(cx.listener(
                |this, _, _, cx| {
                    this.toggle_pan_mode(cx);
                },
            )),
        )
        .child(div().flex_1())
        .child(
            div()
                .text_size(px(12.0))
                .text_color(hsla(0.0, 0.0, 0.55, 1.0))
                .child(session.image.display_name()),
        );

    bar
}
