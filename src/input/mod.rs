//! Pointer and keyboard input for the canvas.
//!
//! ## Architecture
//!
//! An explicit state machine (`InputState`) tracks the active gesture. The
//! geometry it produces is pure and lives in `resize`; the gpui handlers in
//! `mouse_down`, `drag`, `mouse_up`, `context_menu` and `keyboard` translate
//! window events into board operations.

pub mod coords;
mod context_menu;
mod drag;
pub mod keyboard;
mod mouse_down;
mod mouse_up;
pub mod resize;
mod state;

pub use keyboard::{KeyCommand, key_command};
pub use state::{GestureUpdate, InputState};
