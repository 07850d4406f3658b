//! Left release: end the active gesture.

use crate::app::MoodboardApp;
use gpui::*;
use tracing::debug;

impl MoodboardApp {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.finish_gesture(cx);
    }

    pub(crate) fn finish_gesture(&mut self, cx: &mut Context<Self>) {
        let was_resizing = self.input_state.is_resizing();
        if let Some(item_id) = self.input_state.finish() {
            if let Some(item) = self.board.get_item(item_id) {
                debug!(
                    item = item_id,
                    resized = was_resizing,
                    position = ?item.position,
                    size = ?item.size,
                    "Gesture finished"
                );
            }
            cx.notify();
        }
    }
}
