//! Spatial Index Module
//!
//! R-tree of the rotated bounding boxes of placed images. Point queries return
//! candidates only; the board does the exact rotated test and z-order pick.

use crate::types::{ItemId, PlacedImage};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one placed image in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl SpatialEntry {
    pub fn for_item(item: &PlacedImage) -> Self {
        let (min_x, min_y, max_x, max_y) = item.bounding_box();
        Self {
            item_id: item.id,
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over the board's items.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn from_items<'a>(items: impl Iterator<Item = &'a PlacedImage>) -> Self {
        let mut index = Self::new();
        index.rebuild(items);
        index
    }

    /// Insert or refresh the entry for `item`.
    pub fn upsert(&mut self, item: &PlacedImage) {
        if let Some(old_entry) = self.entries.remove(&item.id) {
            self.tree.remove(&old_entry);
        }
        let entry = SpatialEntry::for_item(item);
        self.tree.insert(entry);
        self.entries.insert(item.id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        match self.entries.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Items whose bounding box contains the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ItemId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a>(&mut self, items: impl Iterator<Item = &'a PlacedImage>) {
        let entries: Vec<SpatialEntry> = items.map(SpatialEntry::for_item).collect();
        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
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
