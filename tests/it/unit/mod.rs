//! Unit tests for the moodboard.

mod export_tests;
mod input_state_tests;
mod notifications_tests;
mod raster_tests;
mod rotation_tests;
mod settings_tests;
