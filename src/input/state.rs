//! Gesture state machine for pointer interaction on the canvas.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItem   (left press on an item body)
//! Idle -> ResizingItem   (left press on a corner handle of the selection)
//! Any  -> Idle           (left release, or the button is no longer held)
//! ```
//!
//! Positions are canvas coordinates. Every update is computed from the
//! gesture's start values and the total pointer delta, so rounding never
//! accumulates over a long drag.

use super::resize::{apply_drag, apply_handle};
use crate::constants::MIN_ITEM_SIZE;
use crate::types::{Handle, ItemId, Rect};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving an item with the pointer
    DraggingItem {
        item_id: ItemId,
        /// Pointer position at press
        start_pointer: (f32, f32),
        /// Item top-left at press
        start_position: (u32, u32),
    },

    /// Dragging one of the selected item's corner handles
    ResizingItem {
        item_id: ItemId,
        handle: Handle,
        start_pointer: (f32, f32),
        /// Item rectangle at press
        start_rect: Rect,
    },
}

/// What the board should apply for the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Move { item_id: ItemId, position: (u32, u32) },
    Resize { item_id: ItemId, rect: Rect },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_item(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    /// Item targeted by the active gesture.
    pub fn active_item(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { item_id, .. } | Self::ResizingItem { item_id, .. } => {
                Some(*item_id)
            }
        }
    }

    pub fn start_dragging(
        &mut self,
        item_id: ItemId,
        start_pointer: (f32, f32),
        start_position: (u32, u32),
    ) {
        *self = Self::DraggingItem {
            item_id,
            start_pointer,
            start_position,
        };
    }

    pub fn start_resizing(
        &mut self,
        item_id: ItemId,
        handle: Handle,
        start_pointer: (f32, f32),
        start_rect: Rect,
    ) {
        *self = Self::ResizingItem {
            item_id,
            handle,
            start_pointer,
            start_rect,
        };
    }

    /// Translate a pointer position into the item change it implies.
    pub fn update(&self, pointer: (f32, f32)) -> Option<GestureUpdate> {
        match *self {
            Self::Idle => None,
            Self::DraggingItem {
                item_id,
                start_pointer,
                start_position,
            } => {
                let (dx, dy) = pointer_delta(start_pointer, pointer);
                Some(GestureUpdate::Move {
                    item_id,
                    position: apply_drag(start_position, dx, dy),
                })
            }
            Self::ResizingItem {
                item_id,
                handle,
                start_pointer,
                start_rect,
            } => {
                let (dx, dy) = pointer_delta(start_pointer, pointer);
                Some(GestureUpdate::Resize {
                    item_id,
                    rect: apply_handle(start_rect, handle, dx, dy, MIN_ITEM_SIZE),
                })
            }
        }
    }

    /// End the gesture, returning the item it was acting on.
    pub fn finish(&mut self) -> Option<ItemId> {
        let item = self.active_item();
        *self = Self::Idle;
        item
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Whole-pixel delta between two pointer positions.
fn pointer_delta(start: (f32, f32), current: (f32, f32)) -> (i64, i64) {
    (
        (current.0 - start.0).round() as i64,
        (current.1 - start.1).round() as i64,
    )
}
