//! The board controller: placed images, the selection and the z-order counter.
//!
//! Every mutation goes through here so the spatial index and the selection
//! invariants stay in step with the item list. The UI layer only reads the
//! resulting state and projects it onto the screen.

use crate::constants::{
    DEFAULT_ITEM_SIZE, HANDLE_HIT_TOLERANCE, HANDLE_SIZE, MAX_ITEM_SIZE, MIN_ITEM_SIZE,
    NO_SELECTION_LABEL, Z_ORDER_BASE,
};
use crate::spatial_index::SpatialIndex;
use crate::types::{Handle, ItemId, LoadedImage, PlacedImage, Rect, normalize_degrees};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

pub struct Board {
    /// Items in creation order; stacking comes from `z_index`
    items: Vec<PlacedImage>,
    selected: Option<ItemId>,
    z_counter: u64,
    next_item_id: ItemId,
    /// Visible canvas area in pixels, used for random placement and export
    canvas_size: (u32, u32),
    spatial: SpatialIndex,
    rng: StdRng,
}

impl Board {
    pub fn new(canvas_size: (u32, u32)) -> Self {
        Self::with_rng(canvas_size, StdRng::from_entropy())
    }

    /// Deterministic placement, for tests.
    pub fn with_seed(canvas_size: (u32, u32), seed: u64) -> Self {
        Self::with_rng(canvas_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(canvas_size: (u32, u32), rng: StdRng) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            z_counter: Z_ORDER_BASE,
            next_item_id: 0,
            canvas_size,
            spatial: SpatialIndex::new(),
            rng,
        }
    }

    // ==================== Read-outs ====================

    pub fn items(&self) -> &[PlacedImage] {
        &self.items
    }

    /// Items back to front.
    pub fn items_in_z_order(&self) -> Vec<&PlacedImage> {
        let mut items: Vec<&PlacedImage> = self.items.iter().collect();
        items.sort_by_key(|item| item.z_index);
        items
    }

    pub fn get_item(&self, id: ItemId) -> Option<&PlacedImage> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_item_mut(&mut self, id: ItemId) -> Option<&mut PlacedImage> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn image_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The "drop images here" placeholder is visible only on an empty board.
    pub fn shows_placeholder(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&PlacedImage> {
        self.selected.and_then(|id| self.get_item(id))
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Text for the info display: the selected item's name or `None`.
    pub fn selected_info(&self) -> &str {
        self.selected_item()
            .map(|item| item.name.as_str())
            .unwrap_or(NO_SELECTION_LABEL)
    }

    /// Highest z value handed out so far.
    pub fn top_z(&self) -> u64 {
        self.z_counter
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: (u32, u32)) {
        self.canvas_size = size;
    }

    // ==================== Hit testing ====================

    /// Topmost item under a canvas point.
    pub fn item_at(&self, x: f32, y: f32) -> Option<ItemId> {
        let candidates = self.spatial.query_point(x, y);
        candidates
            .into_iter()
            .filter_map(|id| self.get_item(id))
            .filter(|item| item.contains_point(x, y))
            .max_by_key(|item| item.z_index)
            .map(|item| item.id)
    }

    /// Corner handle of the selected item under a canvas point.
    ///
    /// Only the selected item shows handles, so only it can be resized. A
    /// handle covered by an item stacked above the selection does not count.
    pub fn handle_at(&self, x: f32, y: f32) -> Option<(ItemId, Handle)> {
        let item = self.selected_item()?;
        if self.item_at(x, y).is_some_and(|top| top != item.id) {
            return None;
        }
        let (lx, ly) = item.to_local(x, y);
        let rect = item.rect();
        let reach = HANDLE_SIZE / 2.0 + HANDLE_HIT_TOLERANCE;
        Handle::all()
            .iter()
            .find(|handle| {
                let (hx, hy) = handle.corner_of(&rect);
                (lx - hx).abs() <= reach && (ly - hy).abs() <= reach
            })
            .map(|handle| (item.id, *handle))
    }

    // ==================== Operations ====================

    fn next_z(&mut self) -> u64 {
        self.z_counter += 1;
        self.z_counter
    }

    fn random_position(&mut self) -> (u32, u32) {
        let max_x = self.canvas_size.0.saturating_sub(DEFAULT_ITEM_SIZE);
        let max_y = self.canvas_size.1.saturating_sub(DEFAULT_ITEM_SIZE);
        (self.rng.gen_range(0..=max_x), self.rng.gen_range(0..=max_y))
    }

    /// Place each decoded image at a random spot with the default size.
    ///
    /// Returns the new ids in input order; an empty input changes nothing.
    pub fn add_images(&mut self, images: Vec<LoadedImage>) -> Vec<ItemId> {
        if images.is_empty() {
            return Vec::new();
        }

        let mut ids = Vec::with_capacity(images.len());
        for image in images {
            let id = self.next_item_id;
            self.next_item_id += 1;
            let position = self.random_position();
            let item = PlacedImage {
                id,
                name: image.name,
                position,
                size: (DEFAULT_ITEM_SIZE, DEFAULT_ITEM_SIZE),
                rotation: 0.0,
                z_index: self.next_z(),
                pixels: image.pixels,
            };
            self.spatial.upsert(&item);
            self.items.push(item);
            ids.push(id);
        }

        info!(added = ids.len(), total = self.items.len(), "Added images");
        ids
    }

    /// Select `id` and bring it to the front.
    ///
    /// Returns false (and leaves the selection alone) for unknown ids.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.get_item(id).is_none() {
            return false;
        }
        let z = self.next_z();
        if let Some(item) = self.get_item_mut(id) {
            item.z_index = z;
        }
        self.selected = Some(id);
        debug!(item = id, z, "Selected item");
        true
    }

    pub fn deselect_all(&mut self) {
        if self.selected.take().is_some() {
            debug!("Cleared selection");
        }
    }

    /// Move the selected item by a pixel delta; false when nothing is selected.
    pub fn nudge_selected(&mut self, dx: i32, dy: i32) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Some(position) = self.get_item(id).map(|item| item.position) else {
            return false;
        };
        let target = (
            offset_clamped(position.0, dx as i64),
            offset_clamped(position.1, dy as i64),
        );
        self.move_item(id, target)
    }

    /// Delete the selected item and clear the selection.
    pub fn remove_selected(&mut self) -> Option<PlacedImage> {
        let id = self.selected.take()?;
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        self.spatial.remove(id);
        info!(item = id, name = %removed.name, remaining = self.items.len(), "Removed image");
        Some(removed)
    }

    /// Delete every item. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        self.spatial.clear();
        self.selected = None;
        if count > 0 {
            info!(removed = count, "Cleared board");
        }
        count
    }

    pub fn move_item(&mut self, id: ItemId, position: (u32, u32)) -> bool {
        let Some(item) = self.get_item_mut(id) else {
            return false;
        };
        item.position = position;
        let item = item.clone();
        self.spatial.upsert(&item);
        true
    }

    /// Set position and size directly from a reported rectangle.
    ///
    /// Width and height are kept within `MIN_ITEM_SIZE..=MAX_ITEM_SIZE`.
    pub fn set_item_rect(&mut self, id: ItemId, rect: Rect) -> bool {
        let Some(item) = self.get_item_mut(id) else {
            return false;
        };
        item.set_rect(Rect {
            width: rect.width.clamp(MIN_ITEM_SIZE, MAX_ITEM_SIZE),
            height: rect.height.clamp(MIN_ITEM_SIZE, MAX_ITEM_SIZE),
            ..rect
        });
        let item = item.clone();
        self.spatial.upsert(&item);
        true
    }

    /// Set an item's rotation, wrapped into `[0, 360)`.
    pub fn rotate_item(&mut self, id: ItemId, degrees: f32) -> bool {
        let Some(item) = self.get_item_mut(id) else {
            return false;
        };
        item.rotation = normalize_degrees(degrees);
        let rotation = item.rotation;
        let item = item.clone();
        self.spatial.upsert(&item);
        info!(item = id, rotation, "Rotated image");
        true
    }
}

/// Add a signed delta to an unsigned coordinate, stopping at zero.
pub fn offset_clamped(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).clamp(0, u32::MAX as i64) as u32
}
