//! Unit tests for the gesture state machine.

use moodboard::input::{GestureUpdate, InputState};
use moodboard::types::{Handle, Rect};

#[test]
fn test_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.active_item(), None);
}

#[test]
fn test_drag_rounds_total_delta() {
    let mut state = InputState::default();
    state.start_dragging(1, (10.0, 10.0), (100, 100));
    assert!(state.is_dragging_item());

    let update = state.update((30.6, 4.4)).unwrap();
    assert_eq!(
        update,
        GestureUpdate::Move {
            item_id: 1,
            position: (121, 94),
        }
    );
}

#[test]
fn test_resize_se_from_gesture_start() {
    let mut state = InputState::default();
    state.start_resizing(4, Handle::SouthEast, (300.0, 300.0), Rect::new(100, 100, 200, 200));
    assert!(state.is_resizing());

    assert_eq!(
        state.update((320.0, 310.0)),
        Some(GestureUpdate::Resize {
            item_id: 4,
            rect: Rect::new(100, 100, 220, 210),
        })
    );
    // Moving back restores the original rect
    assert_eq!(
        state.update((300.0, 300.0)),
        Some(GestureUpdate::Resize {
            item_id: 4,
            rect: Rect::new(100, 100, 200, 200),
        })
    );
}

#[test]
fn test_reset_and_finish() {
    let mut state = InputState::default();
    state.start_resizing(2, Handle::NorthEast, (0.0, 0.0), Rect::new(0, 0, 50, 50));
    state.reset();
    assert!(state.is_idle());
    assert_eq!(state.finish(), None);
}
