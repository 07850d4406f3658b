//! Rendering of the moodboard window.
//!
//! Layout, top to bottom: toolbar, canvas, footer. Overlays (the rotation
//! prompt and toasts) are deferred so they paint above everything else.

mod canvas;
mod footer;
mod overlays;
mod toolbar;

use crate::app::MoodboardApp;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::profile_scope;
use gpui::*;
use gpui_component::ActiveTheme as _;

impl Render for MoodboardApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render");

        // The canvas takes whatever the toolbar and footer leave
        let viewport = window.viewport_size();
        let canvas_w = f32::from(viewport.width).max(0.0) as u32;
        let canvas_h = (f32::from(viewport.height) - HEADER_HEIGHT - FOOTER_HEIGHT).max(0.0) as u32;
        self.board.set_canvas_size((canvas_w, canvas_h));
        self.textures.release_retired(window);
        if self.toasts.any_fading() {
            window.request_animation_frame();
        }

        let bg = cx.theme().background;
        let fg = cx.theme().foreground;
        let prompt_input = self
            .rotation_prompt
            .as_ref()
            .map(|prompt| prompt.input.clone());

        let toolbar = toolbar::render_toolbar(self, cx);
        let canvas = canvas::render_canvas_area(self, cx);
        let footer = footer::render_footer(self, cx);
        let prompt = prompt_input.map(|input| overlays::render_rotation_prompt(input, cx));
        let toasts = (!self.toasts.is_empty()).then(|| overlays::render_toasts(self.toasts.toasts(), cx));

        div()
            .id("moodboard")
            .key_context("Moodboard")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(bg)
            .text_color(fg)
            .child(toolbar)
            .child(canvas)
            .child(footer)
            .children(prompt)
            .children(toasts)
    }
}
