//! Unit tests for the CPU compositor.

use crate::helpers::{BLUE, RED};
use image::{Rgba, RgbaImage};
use moodboard::export::{ExportItem, ExportScene};
use moodboard::raster::{composite, render_item, rotate};
use moodboard::types::Rect;
use std::sync::Arc;

const BG: Rgba<u8> = Rgba([0xf8, 0xfa, 0xfc, 255]);

fn item(rect: Rect, color: Rgba<u8>, rotation: f32) -> ExportItem {
    ExportItem {
        rect,
        rotation,
        pixels: Arc::new(RgbaImage::from_pixel(8, 8, color)),
    }
}

fn scene(items: Vec<ExportItem>) -> ExportScene {
    ExportScene {
        canvas_size: (100, 50),
        items,
        scale: 2.0,
        background: BG,
    }
}

#[test]
fn test_empty_scene_is_background() {
    let out = composite(&scene(Vec::new()));
    assert_eq!(out.dimensions(), (200, 100));
    assert!(out.pixels().all(|p| *p == BG));
}

#[test]
fn test_item_is_placed_at_scale() {
    let out = composite(&scene(vec![item(Rect::new(10, 10, 20, 20), RED, 0.0)]));

    // Item covers 20..60 on both axes at 2x
    assert_eq!(out.get_pixel(25, 25), &RED);
    assert_eq!(out.get_pixel(55, 55), &RED);
    assert_eq!(out.get_pixel(15, 15), &BG);
    assert_eq!(out.get_pixel(65, 65), &BG);
}

#[test]
fn test_later_items_paint_on_top() {
    let out = composite(&scene(vec![
        item(Rect::new(0, 0, 30, 30), RED, 0.0),
        item(Rect::new(10, 10, 30, 30), BLUE, 0.0),
    ]));
    assert_eq!(out.get_pixel(5, 5), &RED);
    assert_eq!(out.get_pixel(40, 40), &BLUE);
}

#[test]
fn test_items_past_the_edge_are_clipped() {
    let out = composite(&scene(vec![item(Rect::new(90, 40, 40, 40), RED, 0.0)]));
    assert_eq!(out.dimensions(), (200, 100));
    assert_eq!(out.get_pixel(199, 99), &RED);
}

#[test]
fn test_rotated_item_keeps_center() {
    let out = composite(&scene(vec![item(Rect::new(20, 5, 40, 10), RED, 90.0)]));
    // Center (40, 10) at 2x is (80, 20); a quarter turn makes it tall and thin
    assert_eq!(out.get_pixel(80, 20), &RED);
    assert_eq!(out.get_pixel(80, 2), &RED);
    assert_eq!(out.get_pixel(50, 20), &BG);
}

#[test]
fn test_half_turn_keeps_dimensions() {
    let src = RgbaImage::from_pixel(30, 12, RED);
    assert_eq!(rotate(&src, 180.0).dimensions(), (30, 12));
}

#[test]
fn test_render_item_cover_fits() {
    let src = RgbaImage::from_pixel(400, 100, BLUE);
    let out = render_item(&src, 40, 40, 0.0);
    assert_eq!(out.dimensions(), (40, 40));
    assert_eq!(out.get_pixel(0, 39), &BLUE);
}

#[test]
fn test_transparent_item_keeps_background() {
    let clear = ExportItem {
        rect: Rect::new(0, 0, 50, 25),
        rotation: 0.0,
        pixels: Arc::new(RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 0]))),
    };
    let out = composite(&scene(vec![clear]));
    assert!(out.pixels().all(|p| *p == BG));
}

#[test]
fn test_oversized_item_is_clipped_to_output() {
    // At 2x this item would be a 100000 px square bitmap if drawn whole
    let tiny = ExportScene {
        canvas_size: (10, 10),
        items: vec![item(Rect::new(0, 0, 50_000, 50_000), RED, 0.0)],
        scale: 2.0,
        background: BG,
    };
    let out = composite(&tiny);
    assert_eq!(out.dimensions(), (20, 20));
    assert!(out.pixels().all(|p| *p == RED));
}

#[test]
fn test_oversized_rotated_item_off_canvas() {
    let tiny = ExportScene {
        canvas_size: (10, 10),
        items: vec![
            item(Rect::new(5_000, 5_000, 40_000, 40_000), BLUE, 30.0),
            item(Rect::new(0, 0, 5, 5), RED, 0.0),
        ],
        scale: 2.0,
        background: BG,
    };
    let out = composite(&tiny);
    assert_eq!(out.dimensions(), (20, 20));
    assert_eq!(out.get_pixel(5, 5), &RED);
}
