//! CPU rasterization of placed images.
//!
//! Used twice: to build the on-screen bitmaps of rotated items, and to
//! composite the whole board for PNG export. Heavy loops split the output
//! into rows and run them on rayon's pool.

use crate::export::{ExportItem, ExportScene};
use crate::profile_scope;
use crate::types::rotated_half_extents;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

/// Scale `src` to cover `width` x `height` and crop the overflow evenly.
pub fn fit_cover(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if width == 0 || height == 0 || src.width() == 0 || src.height() == 0 {
        return RgbaImage::new(width, height);
    }
    let scale = (width as f32 / src.width() as f32).max(height as f32 / src.height() as f32);
    let scaled_w = ((src.width() as f32 * scale).ceil() as u32).max(width);
    let scaled_h = ((src.height() as f32 * scale).ceil() as u32).max(height);

    let scaled = imageops::resize(src, scaled_w, scaled_h, FilterType::Triangle);
    imageops::crop_imm(
        &scaled,
        (scaled_w - width) / 2,
        (scaled_h - height) / 2,
        width,
        height,
    )
    .to_image()
}

/// Rotate clockwise by `degrees` about the centre.
///
/// The output is the rotated image's bounding box; corners outside the
/// source are transparent.
pub fn rotate(src: &RgbaImage, degrees: f32) -> RgbaImage {
    profile_scope!("raster::rotate");

    let (hw, hh) = rotated_half_extents(src.dimensions(), degrees);
    // Trim float noise so a quarter turn of 40x20 is exactly 20x40
    let out_w = (hw * 2.0 - 0.01).ceil().max(1.0) as u32;
    let out_h = (hh * 2.0 - 0.01).ceil().max(1.0) as u32;
    let mut dst = RgbaImage::new(out_w, out_h);

    let (sin, cos) = degrees.to_radians().sin_cos();
    let src_cx = src.width() as f32 / 2.0;
    let src_cy = src.height() as f32 / 2.0;
    let dst_cx = out_w as f32 / 2.0;
    let dst_cy = out_h as f32 / 2.0;
    let row_bytes = out_w as usize * 4;

    dst.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let dy = y as f32 + 0.5 - dst_cy;
            for x in 0..out_w as usize {
                let dx = x as f32 + 0.5 - dst_cx;
                // Inverse rotation back into source space
                let sx = dx * cos + dy * sin + src_cx - 0.5;
                let sy = -dx * sin + dy * cos + src_cy - 0.5;
                let px = bilinear_sample(src, sx, sy);
                row[x * 4..x * 4 + 4].copy_from_slice(&px.0);
            }
        });
    dst
}

fn bilinear_sample(img: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let sample = |sx: i64, sy: i64| -> [f32; 4] {
        if sx < 0 || sy < 0 || sx >= img.width() as i64 || sy >= img.height() as i64 {
            [0.0; 4]
        } else {
            let p = img.get_pixel(sx as u32, sy as u32);
            [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
        }
    };

    let tl = sample(x0, y0);
    let tr = sample(x0 + 1, y0);
    let bl = sample(x0, y0 + 1);
    let br = sample(x0 + 1, y0 + 1);

    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = lerp(tl[c], tr[c], fx);
        let bottom = lerp(bl[c], br[c], fx);
        out[c] = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// Bitmap of a `width` x `height` cover-fitted image, rotated if needed.
pub fn render_item(pixels: &RgbaImage, width: u32, height: u32, rotation: f32) -> RgbaImage {
    let covered = fit_cover(pixels, width.max(1), height.max(1));
    if rotation == 0.0 {
        covered
    } else {
        rotate(&covered, rotation)
    }
}

/// Flatten a scene into one bitmap at the scene's scale.
pub fn composite(scene: &ExportScene) -> RgbaImage {
    profile_scope!("raster::composite");

    let (width, height) = scene.output_size();
    let mut canvas = RgbaImage::from_pixel(width, height, scene.background);
    for item in &scene.items {
        draw_item(&mut canvas, item, scene.scale);
    }
    canvas
}

/// Paint one item straight into `canvas`.
///
/// Only output pixels inside both the canvas and the item's rotated bounds
/// are visited, so an item far larger than the canvas costs no more than
/// the canvas itself. Each pixel is mapped back through the rotation and
/// the cover fit into the source image.
fn draw_item(canvas: &mut RgbaImage, item: &ExportItem, scale: f32) {
    let src = item.pixels.as_ref();
    if src.width() == 0 || src.height() == 0 || canvas.width() == 0 {
        return;
    }

    let item_w = (item.rect.width as f32 * scale).round().max(1.0);
    let item_h = (item.rect.height as f32 * scale).round().max(1.0);
    let (center_x, center_y) = item.rect.center();
    let (cx, cy) = (center_x * scale, center_y * scale);
    let (hw, hh) = rotated_half_extents((item_w as u32, item_h as u32), item.rotation);

    let x0 = (cx - hw).floor().clamp(0.0, canvas.width() as f32) as usize;
    let x1 = (cx + hw).ceil().clamp(0.0, canvas.width() as f32) as usize;
    let y0 = (cy - hh).floor().clamp(0.0, canvas.height() as f32) as usize;
    let y1 = (cy + hh).ceil().clamp(0.0, canvas.height() as f32) as usize;
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    // Cover fit: uniform scale, overflow cropped evenly on both sides
    let cover = (item_w / src.width() as f32).max(item_h / src.height() as f32);
    let crop_x = (src.width() as f32 * cover - item_w) / 2.0;
    let crop_y = (src.height() as f32 * cover - item_h) / 2.0;
    let (sin, cos) = item.rotation.to_radians().sin_cos();

    let row_bytes = canvas.width() as usize * 4;
    let buffer: &mut [u8] = &mut **canvas;
    buffer[y0 * row_bytes..y1 * row_bytes]
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(offset, row)| {
            let dy = (y0 + offset) as f32 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                // Inverse rotation into the item's frame, origin top-left
                let lx = dx * cos + dy * sin + item_w / 2.0;
                let ly = -dx * sin + dy * cos + item_h / 2.0;
                if lx < 0.0 || ly < 0.0 || lx >= item_w || ly >= item_h {
                    continue;
                }
                let sx = (lx + crop_x) / cover - 0.5;
                let sy = (ly + crop_y) / cover - 0.5;
                let px = edge_sample(src, sx, sy);
                blend_pixel(&mut row[x * 4..x * 4 + 4], px.0);
            }
        });
}

/// Bilinear sample that repeats the border instead of fading to transparent.
fn edge_sample(img: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let max_x = (img.width() - 1) as f32;
    let max_y = (img.height() - 1) as f32;
    bilinear_sample(img, x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

fn blend_pixel(dst: &mut [u8], src: [u8; 4]) {
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let value = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
