//! Image session - one loaded image plus the tracking points placed on it.
//!
//! A session lives from one image load to the next: replacing the image
//! discards the session wholesale and a fresh one is seeded with the default
//! point layout. The transform engine never mutates points directly; every
//! coordinate change funnels through [`Session::commit_point_update`], which
//! enforces the content-bounds invariant and keeps the spatial index current.

use std::collections::HashSet;

use crate::constants::SEED_LAYOUT;
use crate::spatial_index::SpatialIndex;
use crate::types::{LoadedImage, SessionState, TrackingPoint};
use crate::viewport::Viewport;
use gpui::{point, px};

pub struct Session {
    pub image: LoadedImage,
    pub points: Vec<TrackingPoint>,
    pub next_point_id: u64,
    pub viewport: Viewport,
    spatial: SpatialIndex,
}

impl Session {
    /// Start a session for a freshly loaded image, seeding the default
    /// point layout (clamped into the image in case it is smaller than the
    /// layout).
    pub fn new(image: LoadedImage) -> Self {
        let content_size = image.content_size();
        let points: Vec<TrackingPoint> = SEED_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| TrackingPoint::new(i as u64 + 1, x, y).clamped_to(content_size))
            .collect();
        let next_point_id = points.len() as u64 + 1;
        let spatial = SpatialIndex::from_points(points.iter().map(|p| (p.id, p.x, p.y)));

        Self {
            image,
            points,
            next_point_id,
            viewport: Viewport::new(),
            spatial,
        }
    }

    /// Content-space dimensions of the loaded image.
    pub fn content_size(&self) -> (f32, f32) {
        self.image.content_size()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn get_point(&self, id: u64) -> Option<&TrackingPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Place a new point, clamped into the content bounds. Returns its id.
    pub fn add_point(&mut self, x: f32, y: f32) -> u64 {
        let id = self.next_point_id;
        self.next_point_id += 1;

        let placed = TrackingPoint::new(id, x, y).clamped_to(self.content_size());
        self.spatial.insert(placed.id, placed.x, placed.y);
        self.points.push(placed);
        tracing::debug!(point_id = id, x = placed.x, y = placed.y, "Point placed");
        id
    }

    pub fn remove_point(&mut self, id: u64) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        if self.points.len() != before {
            self.spatial.remove(id);
            true
        } else {
            false
        }
    }

    /// Commit a coordinate update for a point, clamping into the content
    /// bounds. Returns false (a no-op) if the id is unknown.
    pub fn commit_point_update(&mut self, id: u64, x: f32, y: f32) -> bool {
        let content_size = self.content_size();
        let Some(existing) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        let committed = TrackingPoint::new(id, x, y).clamped_to(content_size);
        existing.x = committed.x;
        existing.y = committed.y;
        self.spatial.update(id, committed.x, committed.y);
        true
    }

    /// Find the topmost point whose hit circle contains the given content
    /// position. Later-placed points render on top, so they win overlaps.
    pub fn hit_test(&self, content_x: f32, content_y: f32, radius: f32) -> Option<u64> {
        let candidates: HashSet<u64> = self
            .spatial
            .query_within(content_x, content_y, radius)
            .into_iter()
            .collect();

        self.points
            .iter()
            .rev()
            .find(|p| candidates.contains(&p.id))
            .map(|p| p.id)
    }

    /// Reset the viewport to the image-load defaults.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Plain-data snapshot of this session.
    pub fn state(&self) -> SessionState {
        SessionState {
            image: self.image.clone(),
            zoom: self.viewport.zoom,
            scroll: (
                f32::from(self.viewport.scroll.x),
                f32::from(self.viewport.scroll.y),
            ),
            points: self.points.clone(),
            next_point_id: self.next_point_id,
        }
    }

    /// Restore a session from a snapshot, rebuilding the spatial index.
    pub fn from_state(state: SessionState) -> Self {
        let mut viewport = Viewport::new();
        viewport.zoom = state.zoom;
        viewport.scroll = point(px(state.scroll.0), px(state.scroll.1));

        let spatial = SpatialIndex::from_points(state.points.iter().map(|p| (p.id, p.x, p.y)));

        Self {
            image: state.image,
            points: state.points,
            next_point_id: state.next_point_id,
            viewport,
            spatial,
        }
    }
}
