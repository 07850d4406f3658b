//! Toolbar above the canvas.

use crate::app::MoodboardApp;
use crate::constants::HEADER_HEIGHT;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex};

fn toolbar_button(
    id: &'static str,
    label: impl Into<SharedString>,
    primary: bool,
    enabled: bool,
    cx: &App,
) -> Stateful<Div> {
    let (bg, fg) = if primary {
        (cx.theme().primary, cx.theme().primary_foreground)
    } else {
        (cx.theme().muted, cx.theme().foreground)
    };
    let hover_bg = bg.opacity(0.85);

    div()
        .id(id)
        .h(px(32.0))
        .px(px(14.0))
        .rounded(px(6.0))
        .bg(bg)
        .text_color(fg)
        .text_size(px(13.0))
        .font_weight(FontWeight::MEDIUM)
        .flex()
        .items_center()
        .when(enabled, |b| b.cursor_pointer().hover(move |s| s.bg(hover_bg)))
        .when(!enabled, |b| b.opacity(0.5))
        .child(label.into())
}

pub fn render_toolbar(app: &MoodboardApp, cx: &mut Context<MoodboardApp>) -> Stateful<Div> {
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;
    let export_enabled = app.export.is_enabled();
    let has_items = !app.board.is_empty();
    let pending = app.pending_loads;

    h_flex()
        .id("toolbar")
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex_none()
        .px(px(16.0))
        .gap(px(8.0))
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_size(px(15.0))
                .font_weight(FontWeight::SEMIBOLD)
                .mr(px(12.0))
                .child("Moodboard"),
        )
        .child(
            toolbar_button("upload", "Upload", false, true, cx)
                .on_click(cx.listener(|this, _, _window, cx| this.upload_images(cx))),
        )
        .child(
            toolbar_button("samples", "Add samples", false, true, cx)
                .on_click(cx.listener(|this, _, _window, cx| this.add_sample_images(cx))),
        )
        .child(
            toolbar_button("clear-all", "Clear all", false, has_items, cx).when(has_items, |b| {
                b.on_click(cx.listener(|this, _, window, cx| this.request_clear_all(window, cx)))
            }),
        )
        .child(div().flex_1())
        .when(pending > 0, |el| {
            el.child(
                div()
                    .text_size(px(12.0))
                    .text_color(muted_fg)
                    .child(format!("Loading {pending}...")),
            )
        })
        .child(
            toolbar_button("export", app.export.label(), true, export_enabled, cx).when(
                export_enabled,
                |b| b.on_click(cx.listener(|this, _, window, cx| this.export_png(window, cx))),
            ),
        )
}
