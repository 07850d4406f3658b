//! Board actions triggered from the toolbar, drops, prompts and shortcuts.
//!
//! Slow work (decoding, downloads, rasterizing) goes to the background
//! executor; results come back through `this.update` and land on the board
//! in one step.

use super::{MoodboardApp, RotationPrompt};
use crate::constants::{
    CLEAR_ALL_PROMPT, EXPORT_FAILED_MESSAGE, ROTATION_PROMPT_DEFAULT,
};
use crate::error::{ExportResult, IngestError};
use crate::export::{self, CompositeRasterizer, ExportNotice, ExportScene};
use crate::ingest::{self, ImageSource};
use crate::notifications::Toast;
use crate::types::{ItemId, LoadedImage, parse_rotation};
use gpui::*;
use gpui_component::input::{InputEvent, InputState};
use std::path::PathBuf;
use tracing::{debug, info, warn};

impl MoodboardApp {
    // ==================== Adding images ====================

    /// Open the system file picker and add every chosen image.
    pub fn upload_images(&mut self, cx: &mut Context<Self>) {
        let picked = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: true,
            prompt: Some("Add images".into()),
        });

        cx.spawn(async move |this, cx| {
            let paths = match picked.await {
                Ok(Ok(Some(paths))) => paths,
                Ok(Ok(None)) | Err(_) => {
                    debug!("File picker cancelled");
                    return;
                }
                Ok(Err(err)) => {
                    warn!(error = %err, "File picker failed");
                    return;
                }
            };
            let sources = ingest::file_sources(&paths);
            let _ = this.update(cx, |this, cx| this.load_in_background(sources, cx));
        })
        .detach();
    }

    /// Files dropped onto the canvas. Non-images are ignored.
    pub fn handle_file_drop(
        &mut self,
        paths: &ExternalPaths,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let sources = ingest::file_sources(paths.paths());
        self.load_in_background(sources, cx);
    }

    /// Download and add the sample images.
    pub fn add_sample_images(&mut self, cx: &mut Context<Self>) {
        let sources = ingest::sample_sources(&self.settings.sample_urls);
        self.load_in_background(sources, cx);
    }

    fn load_in_background(&mut self, sources: Vec<ImageSource>, cx: &mut Context<Self>) {
        if sources.is_empty() {
            return;
        }
        let count = sources.len();
        self.pending_loads += count;
        cx.notify();

        let task = cx.background_spawn(async move { ingest::load_sources(&sources) });
        cx.spawn(async move |this, cx| {
            let (loaded, errors) = task.await;
            let _ = this.update(cx, |this, cx| {
                this.pending_loads = this.pending_loads.saturating_sub(count);
                this.finish_load(loaded, errors, cx);
            });
        })
        .detach();
    }

    fn finish_load(
        &mut self,
        loaded: Vec<LoadedImage>,
        errors: Vec<IngestError>,
        cx: &mut Context<Self>,
    ) {
        let added = self.board.add_images(loaded).len();
        for err in &errors {
            self.push_toast(Toast::error(err.to_string()), cx);
        }
        if added > 0 {
            let noun = if added == 1 { "image" } else { "images" };
            self.push_toast(Toast::success(format!("Added {added} {noun}")), cx);
        }
        cx.notify();
    }

    // ==================== Removing images ====================

    pub fn remove_selected(&mut self, cx: &mut Context<Self>) {
        if let Some(removed) = self.board.remove_selected() {
            self.textures.remove(removed.id);
            self.input_state.reset();
            cx.notify();
        }
    }

    /// Ask before wiping the board. Does nothing on an empty board.
    pub fn request_clear_all(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.board.is_empty() {
            return;
        }
        let answer = window.prompt(
            PromptLevel::Warning,
            CLEAR_ALL_PROMPT,
            None,
            &["Clear", "Cancel"],
            cx,
        );
        cx.spawn(async move |this, cx| {
            if matches!(answer.await, Ok(0)) {
                let _ = this.update(cx, |this, cx| this.clear_all(cx));
            } else {
                debug!("Clear all cancelled");
            }
        })
        .detach();
    }

    pub fn clear_all(&mut self, cx: &mut Context<Self>) {
        self.board.clear_all();
        self.textures.clear();
        self.input_state.reset();
        cx.notify();
    }

    // ==================== Rotation ====================

    /// Select `item_id` and open the angle prompt for it.
    pub fn open_rotation_prompt(
        &mut self,
        item_id: ItemId,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.board.select(item_id) {
            return;
        }

        let input = cx.new(|cx| InputState::new(window, cx).default_value(ROTATION_PROMPT_DEFAULT));
        let subscription = cx.subscribe_in(
            &input,
            window,
            |this, _input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.confirm_rotation(window, cx);
                }
            },
        );

        let input_clone = input.clone();
        window.defer(cx, move |window, cx| {
            input_clone.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        });

        self.rotation_prompt = Some(RotationPrompt {
            item_id,
            input,
            _subscription: subscription,
        });
        cx.notify();
    }

    /// Apply the typed angle. Invalid text leaves the rotation unchanged.
    pub fn confirm_rotation(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(prompt) = self.rotation_prompt.take() else {
            return;
        };
        let text = prompt.input.read(cx).value().to_string();

        match parse_rotation(&text) {
            Ok(degrees) => {
                self.board.rotate_item(prompt.item_id, degrees);
            }
            Err(err) => {
                warn!(input = %text, error = %err, "Rejected rotation");
                self.push_toast(Toast::warning(err.to_string()), cx);
            }
        }

        window.focus(&self.focus_handle);
        cx.notify();
    }

    pub fn cancel_rotation(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.rotation_prompt.take().is_some() {
            window.focus(&self.focus_handle);
            cx.notify();
        }
    }

    // ==================== Export ====================

    /// Rasterize the board to `moodboard-<millis>.png` off the UI thread.
    ///
    /// The button stays disabled until the export settles either way.
    pub fn export_png(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.export.begin() {
            debug!("Export already running");
            return;
        }

        let scene = ExportScene::from_board(
            &self.board,
            self.settings.export_scale,
            self.settings.background_rgba(),
        );
        let dir = self.settings.export_dir();
        let file_name = export::export_file_name(export::unix_millis());
        info!(items = scene.items.len(), dir = %dir.display(), "Export started");
        cx.notify();

        let task = cx.background_spawn(async move {
            export::render_and_save(&scene, &CompositeRasterizer, &dir, &file_name)
        });
        cx.spawn_in(window, async move |this, cx| {
            let result = task.await;
            let _ = this.update_in(cx, |this, window, cx| {
                this.finish_export(result, window, cx);
            });
        })
        .detach();
    }

    fn finish_export(
        &mut self,
        result: ExportResult<PathBuf>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match export::settle_export(&mut self.export, result) {
            ExportNotice::Saved { file_name } => {
                self.push_toast(Toast::success(format!("Saved {file_name}")), cx);
            }
            ExportNotice::Failed { detail } => {
                let _ = window.prompt(
                    PromptLevel::Critical,
                    EXPORT_FAILED_MESSAGE,
                    Some(detail.as_str()),
                    &["OK"],
                    cx,
                );
            }
        }
        cx.notify();
    }
}
