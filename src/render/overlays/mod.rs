//! Overlays painted above the main layout.

mod rotation_prompt;
mod toasts;

pub use rotation_prompt::render_rotation_prompt;
pub use toasts::render_toasts;
