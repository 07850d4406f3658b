//! Unit tests for notifications module.

use moodboard::notifications::{Toast, ToastManager, ToastVariant};
use std::time::Duration;

#[test]
fn test_toast_creation() {
    let toast = Toast::success("Exported moodboard-1.png");
    assert_eq!(toast.message, "Exported moodboard-1.png");
    assert_eq!(toast.variant, ToastVariant::Success);
}

#[test]
fn test_toast_manager() {
    let mut manager = ToastManager::new();
    assert!(manager.is_empty());

    manager.push(Toast::success("Added 2 images"));
    assert_eq!(manager.count(), 1);

    manager.push(Toast::error("Could not decode broken.png"));
    assert_eq!(manager.count(), 2);

    manager.clear();
    assert_eq!(manager.count(), 0);
}

#[test]
fn test_push_assigns_increasing_ids() {
    let mut manager = ToastManager::new();
    let first = manager.push(Toast::info("one"));
    let second = manager.push(Toast::info("two"));
    assert!(second > first);
    assert_eq!(manager.toasts()[0].id, first);
}

#[test]
fn test_toast_not_immediately_expired() {
    let toast = Toast::success("Test").with_duration(Duration::from_secs(10));
    assert!(!toast.is_expired(), "Fresh toast should not be expired");
}

#[test]
fn test_toast_remaining_percent_fresh() {
    let toast = Toast::success("Test").with_duration(Duration::from_secs(10));
    assert!(toast.remaining_percent() > 0.99);
}

#[test]
fn test_zero_duration_toast() {
    let toast = Toast::warning("gone").with_duration(Duration::ZERO);
    assert!(toast.is_expired());
    assert_eq!(toast.remaining_percent(), 0.0);
    assert_eq!(toast.opacity(false), 0.0);
}

#[test]
fn test_toast_opacity() {
    let toast = Toast::success("Fresh");
    assert_eq!(toast.opacity(false), 1.0);
    assert_eq!(toast.opacity(true), 1.0);
}

#[test]
fn test_remove_expired_keeps_live_toasts() {
    let mut manager = ToastManager::new();
    manager.push(Toast::info("stale").with_duration(Duration::ZERO));
    manager.push(Toast::info("live").with_duration(Duration::from_secs(10)));

    assert_eq!(manager.remove_expired(), 1);
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].message, "live");
}

/// Requires real time to pass, so it is slow and can be flaky on loaded CI
/// machines.
#[test]
#[ignore]
fn test_toast_expiration() {
    let toast = Toast::success("Test").with_duration(Duration::from_millis(1));
    std::thread::sleep(Duration::from_millis(10));
    assert!(toast.is_expired());
}

#[test]
fn test_variant_durations() {
    assert_eq!(ToastVariant::Success.default_duration(), Duration::from_secs(3));
    assert_eq!(ToastVariant::Info.default_duration(), Duration::from_secs(3));
    assert_eq!(ToastVariant::Warning.default_duration(), Duration::from_secs(4));
    assert_eq!(ToastVariant::Error.default_duration(), Duration::from_secs(5));
}

#[test]
fn test_variant_icons() {
    assert_eq!(ToastVariant::Success.icon(), "✓");
    assert_eq!(ToastVariant::Error.icon(), "✗");
    assert_eq!(ToastVariant::Info.icon(), "ℹ");
    assert_eq!(ToastVariant::Warning.icon(), "⚠");
}

#[test]
fn test_toast_manager_remove() {
    let mut manager = ToastManager::new();
    manager.push(Toast::success("Toast 1"));
    manager.push(Toast::info("Toast 2"));
    manager.push(Toast::warning("Toast 3"));

    let toast_id = manager.toasts()[1].id;
    manager.remove(toast_id);

    assert_eq!(manager.count(), 2);
    assert!(manager.toasts().iter().all(|t| t.id != toast_id));
}

#[test]
fn test_fade_starts_near_the_end() {
    let toast = Toast::info("long").with_duration(Duration::from_secs(10));
    let delay = toast.fade_delay();
    assert!(delay > Duration::from_millis(9_600) && delay <= Duration::from_millis(9_700));
    assert!(!toast.is_fading());
}

#[test]
fn test_short_toast_fades_immediately() {
    let toast = Toast::info("blink").with_duration(Duration::from_secs(60));
    let short = Toast::info("blink").with_duration(Duration::from_millis(200));
    assert!(!toast.is_fading());
    assert!(short.is_fading());
    assert!(short.fade_delay().is_zero());

    let mut manager = ToastManager::new();
    manager.push(toast);
    assert!(!manager.any_fading());
    manager.push(short);
    assert!(manager.any_fading());
}

#[test]
fn test_expired_toast_is_not_fading() {
    let toast = Toast::error("done").with_duration(Duration::ZERO);
    assert!(!toast.is_fading());
}
