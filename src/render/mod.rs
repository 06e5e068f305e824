//! Rendering - root layout, viewport canvas, toolbar, and point list.
//!
//! Mouse and wheel listeners are attached to the root element, so gesture
//! handlers receive every pointer event for the lifetime of the window and
//! a pointer-up outside the originating element still terminates a gesture.

mod canvas;
mod point_list;
mod toolbar;

pub use canvas::render_viewport_area;
pub use point_list::render_point_list;
pub use toolbar::render_toolbar;

use crate::app::Trackboard;
use gpui::*;

impl Render for Trackboard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.check_settings_reload(cx);
        self.poll_file_drops(cx);

        // Phase 2 of a zoom commit: the scroll offset computed by the zoom
        // that scheduled this frame lands before layout
        if let Some(ref mut session) = self.canvas.session {
            session.viewport.commit_pending_scroll();
        }

        let dark = self.settings.data.dark_canvas;
        let bg = if dark {
            hsla(0.0, 0.0, 0.10, 1.0)
        } else {
            hsla(0.0, 0.0, 0.98, 1.0)
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(bg)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event, window, cx| {
                    this.handle_mouse_down(event, window, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, event, window, cx| {
                this.handle_mouse_move(event, window, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event, window, cx| {
                    this.handle_mouse_up(event, window, cx);
                }),
            )
            .on_scroll_wheel(cx.listener(|this, event, window, cx| {
                this.handle_scroll(event, window, cx);
            }))
            .child(render_toolbar(self, cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(render_viewport_area(self))
                    .child(render_point_list(self)),
            )
    }
}
