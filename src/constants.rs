//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values so the board model, the input
//! handlers and the renderer agree on them.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the toolbar above the canvas in pixels
pub const HEADER_HEIGHT: f32 = 52.0;

/// Height of the status footer below the canvas in pixels
pub const FOOTER_HEIGHT: f32 = 28.0;

/// Edge length of a corner resize handle in pixels
pub const HANDLE_SIZE: f32 = 12.0;

/// Extra slop around a handle that still counts as a hit
pub const HANDLE_HIT_TOLERANCE: f32 = 4.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Width and height of a freshly placed image
pub const DEFAULT_ITEM_SIZE: u32 = 200;

/// Smallest width or height a resize may produce
pub const MIN_ITEM_SIZE: u32 = 20;

/// Largest width or height a resize may produce
pub const MAX_ITEM_SIZE: u32 = 4096;

/// First z-order value; the counter is pre-incremented before each use
pub const Z_ORDER_BASE: u64 = 100;

/// Longest edge kept for decoded pixel data (larger images are downscaled)
pub const MAX_IMAGE_DIMENSION: u32 = 2048;

/// Display name used when a source carries no usable file name
pub const FALLBACK_IMAGE_NAME: &str = "Image";

// ============================================================================
// Keyboard
// ============================================================================

/// Distance in pixels an arrow key moves the selected item
pub const NUDGE_STEP: i32 = 10;

// ============================================================================
// Export
// ============================================================================

/// Pixel density multiplier for exported PNGs
pub const EXPORT_SCALE: f32 = 2.0;

/// Background fill of exported PNGs
pub const EXPORT_BACKGROUND: &str = "#f8fafc";

/// Prefix of exported file names (`moodboard-<millis>.png`)
pub const EXPORT_FILE_PREFIX: &str = "moodboard";

/// Export button label when idle
pub const EXPORT_LABEL: &str = "Export as PNG";

/// Export button label while an export is running
pub const EXPORT_BUSY_LABEL: &str = "Exporting...";

/// Alert shown when an export fails
pub const EXPORT_FAILED_MESSAGE: &str = "Export failed. Please try again.";

// ============================================================================
// Prompts
// ============================================================================

pub const CLEAR_ALL_PROMPT: &str = "Clear all images?";

pub const ROTATION_PROMPT: &str = "Enter rotation angle (0-360):";

pub const ROTATION_PROMPT_DEFAULT: &str = "0";

/// Text of the info display when nothing is selected
pub const NO_SELECTION_LABEL: &str = "None";

// ============================================================================
// Samples
// ============================================================================

/// Remote images used by the "Add samples" button
pub const SAMPLE_IMAGE_URLS: [&str; 4] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=300&h=300&fit=crop",
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=300&h=300&fit=crop",
];

/// Upper bound on a downloaded sample body
pub const MAX_SAMPLE_BYTES: u64 = 16 * 1024 * 1024;

/// File extensions accepted by the picker and by drops
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

// ============================================================================
// Timing
// ============================================================================

/// How often the settings watcher is polled, in milliseconds
pub const SETTINGS_POLL_MS: u64 = 1000;
