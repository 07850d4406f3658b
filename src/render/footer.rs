//! Status footer: image count and the selected image's name.

use crate::app::MoodboardApp;
use crate::constants::FOOTER_HEIGHT;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex};

pub fn render_footer(app: &MoodboardApp, cx: &Context<MoodboardApp>) -> Div {
    h_flex()
        .h(px(FOOTER_HEIGHT))
        .w_full()
        .flex_none()
        .px(px(16.0))
        .gap(px(24.0))
        .border_t_1()
        .border_color(cx.theme().border)
        .text_size(px(12.0))
        .text_color(cx.theme().muted_foreground)
        .child(format!("Images: {}", app.board.image_count()))
        .child(format!("Selected: {}", app.board.selected_info()))
}
