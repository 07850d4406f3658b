//! Moodboard - a desktop image moodboard.
//!
//! Images are uploaded, dropped or downloaded as samples, arranged freely on
//! a canvas (move, resize by corner handles, rotate, stack, delete) and
//! exported as a PNG.
//!
//! The board model (`board`, `types`, `input::resize`, `export`, `raster`)
//! is independent of the UI and is what the test suite drives. The gpui
//! view lives in `app` and `render`.

pub mod app;
pub mod board;
pub mod constants;
pub mod error;
pub mod export;
pub mod ingest;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod raster;
mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
