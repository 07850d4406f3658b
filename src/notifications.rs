//! Transient toast messages.
//!
//! Toasts confirm finished actions (export saved, images added) and report
//! recoverable problems (a file that would not decode, a rejected rotation
//! angle). Blocking failures use a window prompt instead.

use std::time::{Duration, Instant};

/// Fade-out window at the end of a toast's life
const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    /// Assigned by `ToastManager::push`
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the lifetime still left, from 1.0 down to 0.0.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Time until the fade-out begins; zero once it has.
    pub fn fade_delay(&self) -> Duration {
        self.duration
            .saturating_sub(FADE_DURATION)
            .saturating_sub(self.created_at.elapsed())
    }

    /// True during the fade-out, while frames must keep coming.
    pub fn is_fading(&self) -> bool {
        !self.is_expired() && self.fade_delay().is_zero()
    }

    /// Opacity for rendering; fades out over the last few hundred ms.
    pub fn opacity(&self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 1.0;
        }
        let remaining = self.duration.saturating_sub(self.created_at.elapsed());
        if remaining >= FADE_DURATION {
            1.0
        } else {
            remaining.as_secs_f32() / FADE_DURATION.as_secs_f32()
        }
    }
}

/// Ordered stack of visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop expired toasts, returning how many went.
    pub fn remove_expired(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired());
        before - self.toasts.len()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn any_fading(&self) -> bool {
        self.toasts.iter().any(Toast::is_fading)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
