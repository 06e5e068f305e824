//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing of
//! tracking points. This reduces hit testing from O(n) to O(log n) for
//! point queries.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a tracking point's center.
///
/// The hit radius is supplied at query time because it scales with zoom
/// (a fixed device-pixel radius covers fewer content pixels when zoomed in).
#[derive(Debug, Clone, Copy)]
pub struct PointEntry {
    pub point_id: u64,
    pub x: f32,
    pub y: f32,
}

impl PointEntry {
    pub fn new(point_id: u64, x: f32, y: f32) -> Self {
        Self { point_id, x, y }
    }

    #[inline]
    fn within_radius(&self, x: f32, y: f32, radius: f32) -> bool {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy <= radius * radius
    }
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PartialEq for PointEntry {
    fn eq(&self, other: &Self) -> bool {
        self.point_id == other.point_id
    }
}

/// Spatial index for tracking points using an R-tree.
/// Provides O(log n) circular hit queries in content coordinates.
pub struct SpatialIndex {
    tree: RTree<PointEntry>,
    entries: HashMap<u64, PointEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of point centers.
    pub fn from_points<I>(points: I) -> Self
    where
        I: Iterator<Item = (u64, f32, f32)>,
    {
        let entries: Vec<PointEntry> = points
            .map(|(id, x, y)| PointEntry::new(id, x, y))
            .collect();

        let entries_map: HashMap<u64, PointEntry> =
            entries.iter().map(|e| (e.point_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, point_id: u64, x: f32, y: f32) {
        if let Some(old_entry) = self.entries.remove(&point_id) {
            self.tree.remove(&old_entry);
        }

        let entry = PointEntry::new(point_id, x, y);
        self.tree.insert(entry);
        self.entries.insert(point_id, entry);
    }

    pub fn remove(&mut self, point_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&point_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, point_id: u64, x: f32, y: f32) {
        self.insert(point_id, x, y);
    }

    /// Query all points whose hit circle of `radius` contains the given
    /// content position.
    pub fn query_within(&self, x: f32, y: f32, radius: f32) -> Vec<u64> {
        let envelope = AABB::from_corners([x - radius, y - radius], [x + radius, y + radius]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.within_radius(x, y, radius))
            .map(|entry| entry.point_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, points: I)
    where
        I: Iterator<Item = (u64, f32, f32)>,
    {
        let entries: Vec<PointEntry> = points
            .map(|(id, x, y)| PointEntry::new(id, x, y))
            .collect();

        self.entries = entries.iter().map(|e| (e.point_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
