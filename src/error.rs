//! Error types for ingestion, export and rotation input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a source into pixels
#[derive(Error, Debug)]
pub enum IngestError {
    /// IO error while reading a picked or dropped file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network failure while downloading a sample
    #[error("Download failed for {url}: {message}")]
    Http { url: String, message: String },

    /// The bytes could not be decoded as an image
    #[error("Could not decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// The source is not an image content type
    #[error("Not an image: {0}")]
    Unsupported(String),

    /// The source decoded to an image with no pixels
    #[error("Empty image: {0}")]
    EmptyImage(String),
}

/// Result type alias for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while exporting the board
#[derive(Error, Debug)]
pub enum ExportError {
    /// The canvas region has no area yet (window not laid out)
    #[error("Canvas has no area to export ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    /// The rasterizer failed to produce pixels
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary file could not be moved into place
    #[error("Could not save {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for export
pub type ExportResult<T> = Result<T, ExportError>;

/// Rejected input from the rotation prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("Rotation angle is empty")]
    Empty,

    #[error("Rotation angle must be a number, got \"{0}\"")]
    NotANumber(String),

    #[error("Rotation angle must be finite, got \"{0}\"")]
    NotFinite(String),
}
