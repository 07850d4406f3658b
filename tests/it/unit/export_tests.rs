//! Unit tests for PNG export.

use crate::helpers::{FailingRasterizer, TestBoardBuilder, RED, export_through_control};
use image::{Rgba, RgbaImage};
use moodboard::constants::EXPORT_LABEL;
use moodboard::error::ExportError;
use moodboard::export::{
    CompositeRasterizer, ExportControl, ExportNotice, ExportScene, Rasterizer, export_file_name,
    settle_export, write_png,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn test_write_png_round_trip() {
    let dir = tempdir().unwrap();
    let image = RgbaImage::from_pixel(12, 7, RED);

    let path = write_png(&image, dir.path(), "out.png").unwrap();
    assert_eq!(path, dir.path().join("out.png"));

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (12, 7));
    assert_eq!(decoded.get_pixel(6, 3), &RED);
}

#[test]
fn test_write_png_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    write_png(&RgbaImage::new(2, 2), dir.path(), "only.png").unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_write_png_creates_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let path = write_png(&RgbaImage::new(1, 1), &nested, "x.png").unwrap();
    assert!(path.is_file());
}

#[test]
fn test_scene_snapshot_is_back_to_front() {
    let (mut board, ids) = TestBoardBuilder::new().with_canvas(300, 200).with_images(3).build();
    board.select(ids[0]);

    let scene = ExportScene::from_board(&board, 2.0, WHITE);
    assert_eq!(scene.canvas_size, (300, 200));
    assert_eq!(scene.output_size(), (600, 400));
    assert_eq!(scene.items.len(), 3);
    let selected_rect = board.get_item(ids[0]).unwrap().rect();
    assert_eq!(scene.items.last().unwrap().rect, selected_rect);
}

#[test]
fn test_empty_canvas_is_rejected() {
    let (board, _) = TestBoardBuilder::new().with_canvas(0, 0).with_images(1).build();
    let scene = ExportScene::from_board(&board, 2.0, WHITE);
    assert!(matches!(
        CompositeRasterizer.rasterize(&scene),
        Err(ExportError::EmptyCanvas { width: 0, height: 0 })
    ));
}

#[test]
fn test_failed_export_restores_control() {
    let dir = tempdir().unwrap();
    let (board, _) = TestBoardBuilder::new().with_images(2).build();
    let scene = ExportScene::from_board(&board, 2.0, WHITE);
    let mut control = ExportControl::new();

    let notice = export_through_control(&mut control, &scene, &FailingRasterizer, dir.path(), "x.png");

    assert_eq!(
        notice,
        ExportNotice::Failed {
            detail: "Rasterization failed: simulated failure".to_string(),
        }
    );
    assert!(control.is_enabled());
    assert_eq!(control.label(), EXPORT_LABEL);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_successful_export_restores_control() {
    let dir = tempdir().unwrap();
    let (board, _) = TestBoardBuilder::new().with_canvas(40, 30).with_images(1).build();
    let scene = ExportScene::from_board(&board, 1.0, WHITE);
    let mut control = ExportControl::new();

    let notice =
        export_through_control(&mut control, &scene, &CompositeRasterizer, dir.path(), "ok.png");

    assert_eq!(
        notice,
        ExportNotice::Saved {
            file_name: "ok.png".to_string(),
        }
    );
    assert!(control.is_enabled());
    assert!(dir.path().join("ok.png").is_file());
}

#[test]
fn test_settle_releases_busy_control() {
    let mut control = ExportControl::new();
    assert!(control.begin());
    assert!(!control.begin(), "second export refused while busy");

    let notice = settle_export(&mut control, Err(ExportError::EmptyCanvas { width: 0, height: 0 }));
    assert!(matches!(notice, ExportNotice::Failed { .. }));
    assert!(control.is_enabled());

    let notice = settle_export(&mut control, Ok(PathBuf::from("/tmp/moodboard-5.png")));
    assert_eq!(
        notice,
        ExportNotice::Saved {
            file_name: "moodboard-5.png".to_string(),
        }
    );
}

#[test]
fn test_export_file_name() {
    let name = export_file_name(42);
    assert_eq!(name, "moodboard-42.png");
}
