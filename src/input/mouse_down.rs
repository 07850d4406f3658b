//! Left press on the canvas: select, then start a drag or a resize.
//!
//! Hit testing goes through the board's R-tree, so this stays cheap with
//! many images. Enable profiling with `--features profiling` for timings.

use super::coords::CoordinateConverter;
use crate::app::MoodboardApp;
use crate::profile_scope;
use gpui::*;
use tracing::debug;

impl MoodboardApp {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        if self.rotation_prompt.is_some() {
            return;
        }
        window.focus(&self.focus_handle);

        let pointer = CoordinateConverter::window_to_canvas(event.position);

        // Handles of the current selection win over any item body
        if let Some((item_id, handle)) = self.board.handle_at(pointer.0, pointer.1) {
            if let Some(rect) = self.board.get_item(item_id).map(|item| item.rect()) {
                debug!(item = item_id, handle = handle.label(), "Resize started");
                self.input_state
                    .start_resizing(item_id, handle, pointer, rect);
            }
            self.board.select(item_id);
        } else if let Some(item_id) = self.board.item_at(pointer.0, pointer.1) {
            self.board.select(item_id);
            if let Some(position) = self.board.get_item(item_id).map(|item| item.position) {
                self.input_state.start_dragging(item_id, pointer, position);
            }
        } else {
            self.board.deselect_all();
            self.input_state.reset();
        }

        cx.notify();
    }
}
