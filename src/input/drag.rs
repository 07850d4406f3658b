//! Pointer motion during a drag or resize gesture.
//!
//! Called on every mouse move, so it exits early while idle.

use super::coords::CoordinateConverter;
use super::state::GestureUpdate;
use crate::app::MoodboardApp;
use crate::profile_scope;
use gpui::*;

impl MoodboardApp {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.input_state.is_idle() {
            return;
        }
        profile_scope!("handle_mouse_move");

        // Release happened outside the window
        if event.pressed_button != Some(MouseButton::Left) {
            self.finish_gesture(cx);
            return;
        }

        let pointer = CoordinateConverter::window_to_canvas(event.position);
        let changed = match self.input_state.update(pointer) {
            Some(GestureUpdate::Move { item_id, position }) => {
                self.board.move_item(item_id, position)
            }
            Some(GestureUpdate::Resize { item_id, rect }) => self.board.set_item_rect(item_id, rect),
            None => false,
        };

        if changed {
            cx.notify();
        }
    }
}
