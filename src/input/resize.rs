//! Corner-handle geometry.
//!
//! Each handle moves the two edges that meet at its corner and leaves the
//! opposite corner where it was. Deltas are whole pixels measured from the
//! pointer position at the start of the gesture.

use crate::board::offset_clamped;
use crate::constants::MAX_ITEM_SIZE;
use crate::types::{Handle, Rect};

/// Rectangle produced by dragging `handle` of `start` by `(dx, dy)`.
///
/// Width and height stay within `min_size..=MAX_ITEM_SIZE`. When either
/// bound is hit the anchored edge stays put and the moving edge stops.
/// Edges cannot be pushed past the canvas origin.
pub fn apply_handle(start: Rect, handle: Handle, dx: i64, dy: i64, min_size: u32) -> Rect {
    let (x, width) = resize_axis(
        start.x,
        start.width,
        dx,
        handle.moves_left_edge(),
        min_size,
    );
    let (y, height) = resize_axis(
        start.y,
        start.height,
        dy,
        handle.moves_top_edge(),
        min_size,
    );
    Rect::new(x, y, width, height)
}

/// One axis of a corner drag: returns the new `(origin, length)`.
fn resize_axis(origin: u32, length: u32, delta: i64, moves_origin: bool, min: u32) -> (u32, u32) {
    let near = origin as i64;
    let far = near + length as i64;
    let min = min as i64;
    let max = (MAX_ITEM_SIZE as i64).max(min);

    if moves_origin {
        let new_near = (near + delta).min(far - min).max(far - max).max(0);
        (new_near as u32, (far - new_near) as u32)
    } else {
        let new_far = (far + delta).max(near + min).min(near + max);
        (origin, (new_far - near) as u32)
    }
}

/// Position of a dragged item given its start position and the pointer delta.
pub fn apply_drag(start: (u32, u32), dx: i64, dy: i64) -> (u32, u32) {
    (offset_clamped(start.0, dx), offset_clamped(start.1, dy))
}
