//! Application module - the moodboard window's state and the glue between
//! gpui events and the board controller.
//!
//! - `state` - The `MoodboardApp` struct
//! - `lifecycle` - Construction and settings hot-reload
//! - `board_actions` - Uploads, samples, clear-all, rotation and export
//! - `textures` - GPU image cache for placed items

mod board_actions;
mod lifecycle;
mod state;
mod textures;

pub use state::{MoodboardApp, RotationPrompt};
pub use textures::TextureCache;
