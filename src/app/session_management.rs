//! Session management - image intake, session replacement, view commands.

use super::Trackboard;
use crate::constants::{SIDEBAR_WIDTH, TOOLBAR_HEIGHT};
use crate::loader;
use crate::session::Session;
use crate::types::LoadedImage;
use gpui::{Context, Pixels, Point, Size, Window, point, px, size};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

impl Trackboard {
    pub fn has_session(&self) -> bool {
        self.canvas.session.is_some()
    }

    /// Image-ready callback: a decoded image replaces the current session.
    ///
    /// The old point set is discarded and the viewport resets to defaults,
    /// exactly as at first load.
    pub fn image_ready(&mut self, image: LoadedImage, cx: &mut Context<Self>) {
        self.canvas.session = Some(Session::new(image));
        self.canvas.input_state.reset();
        self.canvas.pan_mode = false;
        cx.notify();
    }

    /// Load an image file from disk and start a session for it.
    ///
    /// Non-image and undecodable files are rejected by the loader; the
    /// current session stays untouched in that case.
    pub fn load_image_from_path(&mut self, path: &Path, cx: &mut Context<Self>) -> bool {
        match loader::load_from_path(path) {
            Ok(image) => {
                self.image_ready(image, cx);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Image load failed");
                false
            }
        }
    }

    /// Drop intake: load the first dropped path that passes image
    /// validation. Returns whether a session was started.
    pub fn handle_dropped_files(&mut self, paths: &[PathBuf], cx: &mut Context<Self>) -> bool {
        for path in paths {
            if loader::accepts_path(path) {
                return self.load_image_from_path(path, cx);
            }
        }
        false
    }

    /// Hook up the shell's file-drop channel; drained each frame.
    pub fn attach_file_drop_channel(&mut self, rx: Receiver<Vec<PathBuf>>) {
        self.canvas.file_drop_rx = Some(rx);
    }

    pub(crate) fn poll_file_drops(&mut self, cx: &mut Context<Self>) {
        let Some(paths) = self
            .canvas
            .file_drop_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok())
        else {
            return;
        };
        self.handle_dropped_files(&paths, cx);
    }

    /// Discard the current session and return to the empty state.
    pub fn close_image(&mut self, cx: &mut Context<Self>) {
        self.canvas.session = None;
        self.canvas.input_state.reset();
        self.canvas.pan_mode = false;
        cx.notify();
    }

    /// Toggle pan mode. A mode change cancels any in-flight gesture, so a
    /// pan or drag can never survive the mode it started under.
    pub fn toggle_pan_mode(&mut self, cx: &mut Context<Self>) {
        self.canvas.pan_mode = !self.canvas.pan_mode;
        self.canvas.input_state.reset();
        cx.notify();
    }

    pub fn zoom_in_clicked(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let viewport_size = self.viewport_size(window);
        if let Some(ref mut session) = self.canvas.session {
            if session.viewport.zoom_in_step(viewport_size) {
                cx.notify();
            }
        }
    }

    pub fn zoom_out_clicked(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let viewport_size = self.viewport_size(window);
        if let Some(ref mut session) = self.canvas.session {
            if session.viewport.zoom_out_step(viewport_size) {
                cx.notify();
            }
        }
    }

    pub fn reset_view_clicked(&mut self, cx: &mut Context<Self>) {
        if let Some(ref mut session) = self.canvas.session {
            session.reset_view();
            cx.notify();
        }
    }

    /// On-screen top-left of the scrollable viewport, in device coordinates.
    pub(crate) fn viewport_origin(&self) -> Point<Pixels> {
        point(px(0.0), px(TOOLBAR_HEIGHT))
    }

    /// Device-space size of the viewport: the window minus toolbar and
    /// sidebar.
    pub(crate) fn viewport_size(&self, window: &Window) -> Size<Pixels> {
        let bounds = window.bounds();
        size(
            px((f32::from(bounds.size.width) - SIDEBAR_WIDTH).max(0.0)),
            px((f32::from(bounds.size.height) - TOOLBAR_HEIGHT).max(0.0)),
        )
    }
}
