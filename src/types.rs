//! Core types for the moodboard.
//!
//! `PlacedImage` is the single source of truth for everything drawn on the
//! canvas: the renderer, the hit tester and the exporter all read these
//! fields and never the other way round.

use crate::error::RotationError;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a placed image, unique for the lifetime of a board.
pub type ItemId = u64;

/// An axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive), widened so it never overflows.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Bottom edge (exclusive), widened so it never overflows.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// One of the four corner resize handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Handle {
    pub fn all() -> &'static [Handle] {
        &[
            Handle::NorthWest,
            Handle::NorthEast,
            Handle::SouthWest,
            Handle::SouthEast,
        ]
    }

    /// Short compass label ("nw", "ne", "sw", "se").
    pub fn label(&self) -> &'static str {
        match self {
            Handle::NorthWest => "nw",
            Handle::NorthEast => "ne",
            Handle::SouthWest => "sw",
            Handle::SouthEast => "se",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "nw" => Some(Handle::NorthWest),
            "ne" => Some(Handle::NorthEast),
            "sw" => Some(Handle::SouthWest),
            "se" => Some(Handle::SouthEast),
            _ => None,
        }
    }

    /// True for handles on the left edge (they move `x`).
    pub fn moves_left_edge(&self) -> bool {
        matches!(self, Handle::NorthWest | Handle::SouthWest)
    }

    /// True for handles on the top edge (they move `y`).
    pub fn moves_top_edge(&self) -> bool {
        matches!(self, Handle::NorthWest | Handle::NorthEast)
    }

    /// The corner of `rect` this handle sits on, in unrotated item space.
    pub fn corner_of(&self, rect: &Rect) -> (f32, f32) {
        let left = rect.x as f32;
        let top = rect.y as f32;
        let right = rect.right() as f32;
        let bottom = rect.bottom() as f32;
        match self {
            Handle::NorthWest => (left, top),
            Handle::NorthEast => (right, top),
            Handle::SouthWest => (left, bottom),
            Handle::SouthEast => (right, bottom),
        }
    }
}

/// Decoded pixels plus a display name, ready to be placed on the board.
#[derive(Clone)]
pub struct LoadedImage {
    pub name: String,
    pub pixels: Arc<RgbaImage>,
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("name", &self.name)
            .field("pixels", &self.pixels.dimensions())
            .finish()
    }
}

/// A single user-positioned image instance on the board.
#[derive(Clone)]
pub struct PlacedImage {
    pub id: ItemId,
    /// Display name (file name or `sample-N.jpg`)
    pub name: String,
    /// Top-left corner in canvas pixels
    pub position: (u32, u32),
    /// Width and height in canvas pixels
    pub size: (u32, u32),
    /// Clockwise rotation in degrees, always in `[0, 360)`
    pub rotation: f32,
    /// Stacking order; higher renders in front
    pub z_index: u64,
    /// Decoded RGBA pixels shared with the renderer and the exporter
    pub pixels: Arc<RgbaImage>,
}

impl fmt::Debug for PlacedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacedImage")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("rotation", &self.rotation)
            .field("z_index", &self.z_index)
            .field("pixels", &self.pixels.dimensions())
            .finish()
    }
}

impl PlacedImage {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.0, self.position.1, self.size.0, self.size.1)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.position();
        self.size = rect.size();
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }

    /// Map a canvas point into the item's unrotated frame.
    pub fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        if !self.is_rotated() {
            return (x, y);
        }
        let (cx, cy) = self.rect().center();
        let (sin, cos) = (-self.rotation).to_radians().sin_cos();
        let (dx, dy) = (x - cx, y - cy);
        (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
    }

    /// Exact hit test that honours rotation.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let (lx, ly) = self.to_local(x, y);
        let rect = self.rect();
        lx >= rect.x as f32
            && lx <= rect.right() as f32
            && ly >= rect.y as f32
            && ly <= rect.bottom() as f32
    }

    /// Canvas position of a corner after rotation.
    pub fn rotated_corner(&self, handle: Handle) -> (f32, f32) {
        let (x, y) = handle.corner_of(&self.rect());
        if !self.is_rotated() {
            return (x, y);
        }
        let (cx, cy) = self.rect().center();
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let (dx, dy) = (x - cx, y - cy);
        (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
    }

    /// Axis-aligned bounds of the rotated item as `(min_x, min_y, max_x, max_y)`.
    pub fn bounding_box(&self) -> (f32, f32, f32, f32) {
        let (cx, cy) = self.rect().center();
        let (hw, hh) = rotated_half_extents(self.size, self.rotation);
        (cx - hw, cy - hh, cx + hw, cy + hh)
    }
}

/// Half width and half height of a `size` box after rotating it by `degrees`.
pub fn rotated_half_extents(size: (u32, u32), degrees: f32) -> (f32, f32) {
    let hw = size.0 as f32 / 2.0;
    let hh = size.1 as f32 / 2.0;
    if degrees == 0.0 {
        return (hw, hh);
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    (hw * cos + hh * sin, hw * sin + hh * cos)
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0) + 0.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Parse the text typed into the rotation prompt.
///
/// Accepts any finite number; values outside `[0, 360)` are wrapped.
pub fn parse_rotation(input: &str) -> Result<f32, RotationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RotationError::Empty);
    }
    let value: f32 = trimmed
        .parse()
        .map_err(|_| RotationError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(RotationError::NotFinite(trimmed.to_string()));
    }
    Ok(normalize_degrees(value))
}
