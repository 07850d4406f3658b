//! PNG export of the board.
//!
//! ## Flow
//!
//! 1. `ExportControl::begin` disables the export button and flips its label.
//! 2. The UI thread snapshots the board into an `ExportScene`.
//! 3. The scene is rasterized and written on the background executor.
//! 4. `settle_export` restores the button whatever the outcome and turns
//!    the result into a toast or an alert.
//!
//! Rasterization sits behind the `Rasterizer` trait so tests can inject
//! failures without touching the file system.

use crate::board::Board;
use crate::constants::{EXPORT_BUSY_LABEL, EXPORT_FILE_PREFIX, EXPORT_LABEL};
use crate::error::{ExportError, ExportResult};
use crate::perf::measure;
use crate::raster;
use crate::types::Rect;
use image::codecs::png::PngEncoder;
use image::{Rgba, RgbaImage};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;
use tracing::{debug, error, info};

/// One item of a scene snapshot.
#[derive(Clone)]
pub struct ExportItem {
    pub rect: Rect,
    pub rotation: f32,
    pub pixels: Arc<RgbaImage>,
}

/// Immutable snapshot of the canvas, safe to move to another thread.
#[derive(Clone)]
pub struct ExportScene {
    pub canvas_size: (u32, u32),
    /// Back to front
    pub items: Vec<ExportItem>,
    pub scale: f32,
    pub background: Rgba<u8>,
}

impl ExportScene {
    pub fn from_board(board: &Board, scale: f32, background: Rgba<u8>) -> Self {
        let items = board
            .items_in_z_order()
            .into_iter()
            .map(|item| ExportItem {
                rect: item.rect(),
                rotation: item.rotation,
                pixels: Arc::clone(&item.pixels),
            })
            .collect();
        Self {
            canvas_size: board.canvas_size(),
            items,
            scale,
            background,
        }
    }

    /// Pixel size of the rendered output.
    pub fn output_size(&self) -> (u32, u32) {
        (
            (self.canvas_size.0 as f32 * self.scale).round() as u32,
            (self.canvas_size.1 as f32 * self.scale).round() as u32,
        )
    }
}

/// Turns a scene into pixels.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, scene: &ExportScene) -> ExportResult<RgbaImage>;
}

/// The CPU compositor in `raster`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeRasterizer;

impl Rasterizer for CompositeRasterizer {
    fn rasterize(&self, scene: &ExportScene) -> ExportResult<RgbaImage> {
        let (width, height) = scene.output_size();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCanvas { width, height });
        }
        Ok(raster::composite(scene))
    }
}

/// Busy flag behind the export button.
#[derive(Debug, Default)]
pub struct ExportControl {
    busy: bool,
}

impl ExportControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an export as started. False if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy { EXPORT_BUSY_LABEL } else { EXPORT_LABEL }
    }
}

/// `moodboard-<millis>.png`
pub fn export_file_name(unix_millis: u128) -> String {
    format!("{EXPORT_FILE_PREFIX}-{unix_millis}.png")
}

pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Downloads folder, falling back to home and then the working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Encode `image` as PNG into `dir/file_name`.
///
/// Writes to a temporary file in the same directory and renames it into
/// place, so a failed export never leaves a truncated PNG behind.
pub fn write_png(image: &RgbaImage, dir: &Path, file_name: &str) -> ExportResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let target = dir.join(file_name);

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        image.write_with_encoder(PngEncoder::new(&mut writer))?;
        writer.flush()?;
    }
    temp.persist(&target).map_err(|err| ExportError::Persist {
        path: target.clone(),
        source: err.error,
    })?;

    debug!(path = %target.display(), "Wrote PNG");
    Ok(target)
}

/// Rasterize `scene` and save it. Blocking; run it off the UI thread.
pub fn render_and_save(
    scene: &ExportScene,
    rasterizer: &dyn Rasterizer,
    dir: &Path,
    file_name: &str,
) -> ExportResult<PathBuf> {
    let (image, raster_ms) = measure(|| rasterizer.rasterize(scene));
    let image = image?;
    let path = write_png(&image, dir, file_name)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        items = scene.items.len(),
        raster_ms = format!("{raster_ms:.1}"),
        "Exported board"
    );
    Ok(path)
}

/// What the window shows once an export has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    /// Success toast naming the written file
    Saved { file_name: String },
    /// Blocking alert with the error as detail
    Failed { detail: String },
}

/// Release the export control and decide what to tell the user.
///
/// Every export started with `ExportControl::begin` ends here, whatever
/// the outcome, so the button is always restored.
pub fn settle_export(control: &mut ExportControl, result: ExportResult<PathBuf>) -> ExportNotice {
    control.finish();
    match result {
        Ok(path) => ExportNotice::Saved {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        },
        Err(err) => {
            error!(error = %err, "Export failed");
            ExportNotice::Failed {
                detail: err.to_string(),
            }
        }
    }
}
