//! Window to canvas coordinate conversion.
//!
//! The canvas sits directly below the toolbar and spans the full window
//! width, so conversion is a vertical shift.

use crate::constants::HEADER_HEIGHT;
use gpui::{Pixels, Point, point, px};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Window position to canvas position
    #[inline]
    pub fn window_to_canvas(window_pos: Point<Pixels>) -> (f32, f32) {
        (
            f32::from(window_pos.x),
            f32::from(window_pos.y) - HEADER_HEIGHT,
        )
    }

    /// Canvas position to window position
    #[inline]
    pub fn canvas_to_window(x: f32, y: f32) -> Point<Pixels> {
        point(px(x), px(y + HEADER_HEIGHT))
    }
}
