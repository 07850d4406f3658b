//! Keyboard shortcuts for the selected image.
//!
//! Arrow keys nudge, Delete removes. Keys do nothing without a selection or
//! while the rotation prompt owns the keyboard.

use crate::app::MoodboardApp;
use gpui::{Context, KeyDownEvent, Window};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Nudge { dx: i32, dy: i32 },
    RemoveSelected,
}

/// Map a key name to a board command.
///
/// Accepts both gpui's lowercase key names and the DOM-style spellings.
pub fn key_command(key: &str, step: i32) -> Option<KeyCommand> {
    match key {
        "up" | "ArrowUp" => Some(KeyCommand::Nudge { dx: 0, dy: -step }),
        "down" | "ArrowDown" => Some(KeyCommand::Nudge { dx: 0, dy: step }),
        "left" | "ArrowLeft" => Some(KeyCommand::Nudge { dx: -step, dy: 0 }),
        "right" | "ArrowRight" => Some(KeyCommand::Nudge { dx: step, dy: 0 }),
        "delete" | "Delete" => Some(KeyCommand::RemoveSelected),
        _ => None,
    }
}

impl MoodboardApp {
    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let key = event.keystroke.key.as_str();

        if self.rotation_prompt.is_some() {
            if key == "escape" {
                self.cancel_rotation(window, cx);
            }
            return;
        }

        let Some(command) = key_command(key, self.settings.nudge_step) else {
            return;
        };
        if !self.board.has_selection() {
            return;
        }

        debug!(?command, "Keyboard command");
        match command {
            KeyCommand::Nudge { dx, dy } => {
                self.board.nudge_selected(dx, dy);
            }
            KeyCommand::RemoveSelected => self.remove_selected(cx),
        }
        cx.stop_propagation();
        cx.notify();
    }
}
