//! Integration tests for exporting an edited board to disk.

use crate::helpers::{
    BLUE, RED, TestBoardBuilder, export_through_control, solid_image, write_png_fixture,
};
use moodboard::board::Board;
use moodboard::export::{
    CompositeRasterizer, ExportControl, ExportNotice, ExportScene, export_file_name,
};
use moodboard::ingest::{ImageSource, load_sources};
use moodboard::settings::Settings;
use moodboard::types::Rect;
use tempfile::tempdir;

#[test]
fn test_export_is_twice_canvas_size() {
    let dir = tempdir().unwrap();
    let (mut board, ids) = TestBoardBuilder::new().with_canvas(320, 240).with_images(2).build();
    board.set_item_rect(ids[0], Rect::new(0, 0, 50, 50));
    board.set_item_rect(ids[1], Rect::new(20, 20, 50, 50));
    board.rotate_item(ids[1], 30.0);
    let settings = Settings::default();

    let scene = ExportScene::from_board(&board, settings.export_scale, settings.background_rgba());
    let mut control = ExportControl::new();
    let notice = export_through_control(
        &mut control,
        &scene,
        &CompositeRasterizer,
        dir.path(),
        &export_file_name(1),
    );

    assert!(control.is_enabled());
    assert_eq!(
        notice,
        ExportNotice::Saved {
            file_name: "moodboard-1.png".to_string(),
        }
    );
    let exported = image::open(dir.path().join("moodboard-1.png")).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (640, 480));
    // Corner far from any item shows the page background
    assert_eq!(exported.get_pixel(639, 479), &settings.background_rgba());
}

#[test]
fn test_export_reflects_stacking() {
    let dir = tempdir().unwrap();
    let mut board = Board::with_seed((200, 200), 7);
    let ids = board.add_images(vec![
        solid_image("red.png", 4, 4, RED),
        solid_image("blue.png", 4, 4, BLUE),
    ]);
    board.set_item_rect(ids[0], Rect::new(0, 0, 100, 100));
    board.set_item_rect(ids[1], Rect::new(0, 0, 100, 100));

    let export = |board: &Board, name: &str| {
        let scene = ExportScene::from_board(board, 1.0, Settings::default().background_rgba());
        export_through_control(
            &mut ExportControl::new(),
            &scene,
            &CompositeRasterizer,
            dir.path(),
            name,
        );
        image::open(dir.path().join(name)).unwrap().to_rgba8()
    };

    assert_eq!(export(&board, "a.png").get_pixel(50, 50), &BLUE);

    // Selecting the red item raises it
    board.select(ids[0]);
    assert_eq!(export(&board, "b.png").get_pixel(50, 50), &RED);
}

#[test]
fn test_ingested_files_export() {
    let dir = tempdir().unwrap();
    let sources: Vec<_> = ["one.png", "two.png"]
        .iter()
        .map(|name| ImageSource::File(write_png_fixture(dir.path(), name, 64, 48)))
        .collect();
    let (loaded, errors) = load_sources(&sources);
    assert!(errors.is_empty());

    let mut board = Board::with_seed((400, 300), 3);
    board.add_images(loaded);
    assert_eq!(board.image_count(), 2);

    let out_dir = dir.path().join("exports");
    let scene = ExportScene::from_board(&board, 2.0, Settings::default().background_rgba());
    let notice = export_through_control(
        &mut ExportControl::new(),
        &scene,
        &CompositeRasterizer,
        &out_dir,
        "board.png",
    );
    assert!(matches!(notice, ExportNotice::Saved { .. }));
    let exported = image::open(out_dir.join("board.png")).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (800, 600));
}
