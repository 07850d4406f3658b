//! Image ingestion: picked files, dropped files and remote samples.
//!
//! Everything here is blocking and runs on the background executor. Each
//! source is decoded independently so one bad file does not sink the batch.

use crate::constants::{FALLBACK_IMAGE_NAME, IMAGE_EXTENSIONS, MAX_IMAGE_DIMENSION, MAX_SAMPLE_BYTES};
use crate::error::{IngestError, IngestResult};
use crate::types::LoadedImage;
use image::imageops::FilterType;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Remote { name: String, url: String },
}

impl ImageSource {
    /// Display name for the placed item.
    pub fn name(&self) -> String {
        match self {
            ImageSource::File(path) => display_name(path),
            ImageSource::Remote { name, .. } => name.clone(),
        }
    }
}

/// File name of `path`, or the fallback name when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE_NAME.to_string())
}

/// Sample sources named `sample-1.jpg`, `sample-2.jpg`, ...
pub fn sample_sources(urls: &[String]) -> Vec<ImageSource> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| ImageSource::Remote {
            name: format!("sample-{}.jpg", index + 1),
            url: url.clone(),
        })
        .collect()
}

/// True when a path looks like an image, by extension or by its magic bytes.
pub fn is_image_path(path: &Path) -> bool {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    by_extension || sniff_image(path)
}

fn sniff_image(path: &Path) -> bool {
    let mut header = [0u8; 32];
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let Ok(read) = file.read(&mut header) else {
        return false;
    };
    read > 0 && image::guess_format(&header[..read]).is_ok()
}

/// Keep only image files, preserving order.
pub fn filter_image_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| path.is_file() && is_image_path(path))
        .cloned()
        .collect()
}

/// File sources for the picked or dropped paths. Non-images are skipped.
pub fn file_sources(paths: &[PathBuf]) -> Vec<ImageSource> {
    let images = filter_image_paths(paths);
    if images.len() < paths.len() {
        debug!(ignored = paths.len() - images.len(), "Ignored non-image files");
    }
    images.into_iter().map(ImageSource::File).collect()
}

/// Load and decode one source.
pub fn load_source(source: &ImageSource) -> IngestResult<LoadedImage> {
    let name = source.name();
    let bytes = match source {
        ImageSource::File(path) => std::fs::read(path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        })?,
        ImageSource::Remote { url, .. } => fetch(url)?,
    };
    decode_bytes(&name, &bytes)
}

/// Load every source, splitting successes from failures.
pub fn load_sources(sources: &[ImageSource]) -> (Vec<LoadedImage>, Vec<IngestError>) {
    let mut loaded = Vec::new();
    let mut errors = Vec::new();
    for source in sources {
        match load_source(source) {
            Ok(image) => loaded.push(image),
            Err(err) => {
                warn!(source = %source.name(), error = %err, "Failed to load image");
                errors.push(err);
            }
        }
    }
    (loaded, errors)
}

/// Decode encoded bytes into RGBA pixels, downscaling oversized images.
pub fn decode_bytes(name: &str, bytes: &[u8]) -> IngestResult<LoadedImage> {
    if image::guess_format(bytes).is_err() {
        return Err(IngestError::Unsupported(name.to_string()));
    }
    let mut decoded = image::load_from_memory(bytes).map_err(|source| IngestError::Decode {
        name: name.to_string(),
        source,
    })?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(IngestError::EmptyImage(name.to_string()));
    }

    if decoded.width() > MAX_IMAGE_DIMENSION || decoded.height() > MAX_IMAGE_DIMENSION {
        debug!(
            name,
            width = decoded.width(),
            height = decoded.height(),
            "Downscaling large image"
        );
        // resize() keeps the aspect ratio inside the bounds
        decoded = decoded.resize(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, FilterType::Triangle);
    }

    Ok(LoadedImage {
        name: name.to_string(),
        pixels: Arc::new(decoded.to_rgba8()),
    })
}

fn fetch(url: &str) -> IngestResult<Vec<u8>> {
    let http_error = |message: String| IngestError::Http {
        url: url.to_string(),
        message,
    };

    let response = ureq::get(url)
        .call()
        .map_err(|err| http_error(err.to_string()))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_SAMPLE_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|err| http_error(err.to_string()))?;
    debug!(url, bytes = bytes.len(), "Downloaded sample");
    Ok(bytes)
}
