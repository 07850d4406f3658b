//! Construction and settings hot-reload.

use super::MoodboardApp;
use super::textures::TextureCache;
use crate::board::Board;
use crate::constants::SETTINGS_POLL_MS;
use crate::export::ExportControl;
use crate::input::InputState as CanvasInputState;
use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use gpui::*;
use std::time::Duration;
use tracing::{error, info, warn};

impl MoodboardApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings = Settings::init();
        let settings_watcher = default_settings_path().and_then(|path| {
            SettingsWatcher::new(path)
                .map_err(|err| warn!(error = %err, "Settings hot-reload disabled"))
                .ok()
        });

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self::spawn_settings_poll(cx);

        info!("Moodboard started");
        Self {
            board: Board::new((0, 0)),
            input_state: CanvasInputState::default(),
            export: ExportControl::new(),
            settings,
            settings_watcher,
            toasts: ToastManager::new(),
            textures: TextureCache::new(),
            rotation_prompt: None,
            pending_loads: 0,
            focus_handle,
        }
    }

    fn spawn_settings_poll(cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(SETTINGS_POLL_MS))
                    .await;
                if this
                    .update(cx, |this, cx| this.check_settings_reload(cx))
                    .is_err()
                {
                    break;
                }
            }
        })
        .detach();
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(event) = self.settings_watcher.as_mut().and_then(|w| w.poll()) else {
            return;
        };
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                info!("Settings file changed, reloading");
                self.settings = Settings::load();
                self.push_toast(Toast::info("Settings reloaded"), cx);
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted, using defaults");
                self.settings = Settings::default();
                self.push_toast(Toast::warning("Settings file deleted"), cx);
            }
            SettingsEvent::Error(err) => {
                error!("Settings watch error: {}", err);
            }
        }
    }

    /// Show a toast, then wake the view when it starts fading and again when
    /// it expires.
    pub fn push_toast(&mut self, toast: Toast, cx: &mut Context<Self>) {
        let fade_delay = toast.fade_delay();
        let lifetime = toast.duration;
        self.toasts.push(toast);
        cx.notify();

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(fade_delay).await;
            if this.update(cx, |_, cx| cx.notify()).is_err() {
                return;
            }
            cx.background_executor()
                .timer(lifetime.saturating_sub(fade_delay))
                .await;
            let _ = this.update(cx, |this, cx| {
                if this.toasts.remove_expired() > 0 {
                    cx.notify();
                }
            });
        })
        .detach();
    }
}
