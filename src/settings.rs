//! User settings stored as JSON.
//!
//! Every field has a default, so a partial or missing file still loads.
//! Invalid values are clamped rather than rejected.

use crate::constants::{EXPORT_BACKGROUND, EXPORT_SCALE, NUDGE_STEP, SAMPLE_IMAGE_URLS};
use crate::export::default_export_dir;
use crate::raster::parse_hex_color;
use crate::settings_watcher::default_settings_path;
use anyhow::Context as _;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MIN_EXPORT_SCALE: f32 = 0.5;
const MAX_EXPORT_SCALE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where exported PNGs go; the Downloads folder when unset
    pub export_dir: Option<PathBuf>,
    pub export_scale: f32,
    /// `#rrggbb` fill behind exported images
    pub background_color: String,
    /// Pixels moved per arrow key press
    pub nudge_step: i32,
    pub sample_urls: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: None,
            export_scale: EXPORT_SCALE,
            background_color: EXPORT_BACKGROUND.to_string(),
            nudge_step: NUDGE_STEP,
            sample_urls: SAMPLE_IMAGE_URLS.iter().map(|url| url.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load from the default location, or defaults when there is none.
    pub fn load() -> Self {
        default_settings_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Startup load: writes the defaults on first launch so there is a file
    /// to edit.
    pub fn init() -> Self {
        default_settings_path()
            .map(|path| Self::load_or_init(&path))
            .unwrap_or_default()
    }

    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        match settings.save_to(path) {
            Ok(()) => info!(path = %path.display(), "Wrote default settings"),
            Err(err) => warn!(path = %path.display(), error = %err, "Could not write default settings"),
        }
        settings
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Could not read settings, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(default_export_dir)
    }

    pub fn background_rgba(&self) -> Rgba<u8> {
        parse_hex_color(&self.background_color)
            .or_else(|| parse_hex_color(EXPORT_BACKGROUND))
            .unwrap_or(Rgba([255, 255, 255, 255]))
    }

    fn sanitized(mut self) -> Self {
        if !self.export_scale.is_finite() {
            self.export_scale = EXPORT_SCALE;
        }
        self.export_scale = self.export_scale.clamp(MIN_EXPORT_SCALE, MAX_EXPORT_SCALE);
        if self.nudge_step < 1 {
            self.nudge_step = NUDGE_STEP;
        }
        if parse_hex_color(&self.background_color).is_none() {
            warn!(color = %self.background_color, "Invalid background color, using default");
            self.background_color = EXPORT_BACKGROUND.to_string();
        }
        if self.sample_urls.is_empty() {
            self.sample_urls = Settings::default().sample_urls;
        }
        self
    }
}
