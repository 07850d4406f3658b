//! Modal that asks for a rotation angle.
//!
//! Enter or OK applies the angle, Escape, Cancel or a click on the backdrop
//! dismisses it. Clicks inside the dialog stop at the dialog.

use crate::app::MoodboardApp;
use crate::constants::ROTATION_PROMPT;
use gpui::*;
use gpui_component::input::{Input, InputState};
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

/// Backdrop dimming behind the dialog
const BACKDROP_OPACITY: f32 = 0.35;

fn dialog_button(id: &'static str, label: &'static str, primary: bool, cx: &App) -> Stateful<Div> {
    let (bg, fg) = if primary {
        (cx.theme().primary, cx.theme().primary_foreground)
    } else {
        (cx.theme().muted, cx.theme().foreground)
    };
    div()
        .id(id)
        .h(px(30.0))
        .px(px(14.0))
        .rounded(px(6.0))
        .bg(bg)
        .text_color(fg)
        .text_size(px(13.0))
        .flex()
        .items_center()
        .cursor_pointer()
        .hover(move |s| s.bg(bg.opacity(0.85)))
        .child(label)
}

pub fn render_rotation_prompt(input: Entity<InputState>, cx: &mut Context<MoodboardApp>) -> Deferred {
    let bg = cx.theme().background;
    let border = cx.theme().border;

    let dialog = v_flex()
        .id("rotation-dialog")
        .w(px(320.0))
        .p(px(16.0))
        .gap(px(12.0))
        .rounded(px(10.0))
        .bg(bg)
        .border_1()
        .border_color(border)
        .shadow_lg()
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::MEDIUM)
                .child(ROTATION_PROMPT),
        )
        .child(Input::new(&input))
        .child(
            h_flex()
                .justify_end()
                .gap(px(8.0))
                .child(
                    dialog_button("rotation-cancel", "Cancel", false, cx).on_click(cx.listener(
                        |this, _, window, cx| this.cancel_rotation(window, cx),
                    )),
                )
                .child(
                    dialog_button("rotation-ok", "OK", true, cx).on_click(cx.listener(
                        |this, _, window, cx| this.confirm_rotation(window, cx),
                    )),
                ),
        );

    deferred(
        div()
            .id("rotation-backdrop")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, window, cx| this.cancel_rotation(window, cx)),
            )
            .child(dialog),
    )
    .with_priority(1500)
}
