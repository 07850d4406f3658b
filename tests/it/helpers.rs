//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `TestBoardBuilder` - seeded boards with solid-colour images
//! - `solid_image` / `write_png_fixture` - in-memory and on-disk fixtures
//! - `FailingRasterizer` - export seam that always errors
//! - `export_through_control` - the window's begin/render/settle sequence

use image::{Rgba, RgbaImage};
use moodboard::board::Board;
use moodboard::error::{ExportError, ExportResult};
use moodboard::export::{
    ExportControl, ExportNotice, ExportScene, Rasterizer, render_and_save, settle_export,
};
use moodboard::types::{ItemId, LoadedImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Decoded image of one colour.
pub fn solid_image(name: &str, width: u32, height: u32, color: Rgba<u8>) -> LoadedImage {
    LoadedImage {
        name: name.to_string(),
        pixels: Arc::new(RgbaImage::from_pixel(width, height, color)),
    }
}

/// Write a solid PNG into `dir` and return its path.
pub fn write_png_fixture(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, RED)
        .save(&path)
        .expect("write fixture");
    path
}

/// Builder for seeded test boards.
///
/// # Example
/// ```ignore
/// let (board, ids) = TestBoardBuilder::new()
///     .with_canvas(800, 600)
///     .with_image("a.png")
///     .with_image("b.png")
///     .build();
/// ```
pub struct TestBoardBuilder {
    canvas: (u32, u32),
    seed: u64,
    images: Vec<LoadedImage>,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self {
            canvas: (1000, 800),
            seed: 42,
            images: Vec::new(),
        }
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = (width, height);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_image(mut self, name: &str) -> Self {
        self.images.push(solid_image(name, 8, 8, RED));
        self
    }

    pub fn with_images(mut self, count: usize) -> Self {
        for i in 0..count {
            self.images.push(solid_image(&format!("image-{i}.png"), 8, 8, RED));
        }
        self
    }

    /// Build the board, returning the ids of the added images in order.
    pub fn build(self) -> (Board, Vec<ItemId>) {
        let mut board = Board::with_seed(self.canvas, self.seed);
        let ids = board.add_images(self.images);
        (board, ids)
    }
}

/// Rasterizer that always fails, for exercising export error paths.
pub struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _scene: &ExportScene) -> ExportResult<RgbaImage> {
        Err(ExportError::Rasterize("simulated failure".to_string()))
    }
}

/// Run an export the way the export button does: take the control, render
/// and save, then settle.
pub fn export_through_control(
    control: &mut ExportControl,
    scene: &ExportScene,
    rasterizer: &dyn Rasterizer,
    dir: &Path,
    file_name: &str,
) -> ExportNotice {
    assert!(control.begin(), "export already running");
    let result = render_and_save(scene, rasterizer, dir, file_name);
    settle_export(control, result)
}
