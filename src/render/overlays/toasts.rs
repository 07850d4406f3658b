//! Toast stack in the bottom-right corner.

use crate::app::MoodboardApp;
use crate::constants::FOOTER_HEIGHT;
use crate::notifications::{Toast, ToastVariant};
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

fn accent(variant: ToastVariant) -> Hsla {
    match variant {
        ToastVariant::Success => hsla(142.0 / 360.0, 0.6, 0.42, 1.0),
        ToastVariant::Info => hsla(210.0 / 360.0, 0.7, 0.5, 1.0),
        ToastVariant::Warning => hsla(38.0 / 360.0, 0.9, 0.5, 1.0),
        ToastVariant::Error => hsla(0.0, 0.7, 0.5, 1.0),
    }
}

pub fn render_toasts(toasts: &[Toast], cx: &Context<MoodboardApp>) -> Deferred {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;

    let items = toasts.iter().map(|toast| {
        let color = accent(toast.variant);
        h_flex()
            .id(ElementId::Name(format!("toast-{}", toast.id).into()))
            .min_w(px(220.0))
            .max_w(px(360.0))
            .px(px(12.0))
            .py(px(8.0))
            .gap(px(8.0))
            .rounded(px(8.0))
            .bg(bg)
            .border_1()
            .border_color(border)
            .shadow_md()
            .opacity(toast.opacity(false))
            .child(div().text_color(color).child(toast.variant.icon()))
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(fg)
                    .child(toast.message.clone()),
            )
    });

    deferred(
        v_flex()
            .absolute()
            .right(px(16.0))
            .bottom(px(FOOTER_HEIGHT + 12.0))
            .gap(px(8.0))
            .items_end()
            .children(items),
    )
    .with_priority(2000)
}
