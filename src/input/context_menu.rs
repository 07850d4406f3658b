//! Right click on an image opens the rotation prompt.

use super::coords::CoordinateConverter;
use crate::app::MoodboardApp;
use gpui::*;

impl MoodboardApp {
    pub fn handle_right_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.rotation_prompt.is_some() || !self.input_state.is_idle() {
            return;
        }
        let (x, y) = CoordinateConverter::window_to_canvas(event.position);
        if let Some(item_id) = self.board.item_at(x, y) {
            cx.stop_propagation();
            self.open_rotation_prompt(item_id, window, cx);
        }
    }
}
