//! Canvas rendering - placed images, the selection outline and handles.
//!
//! Images are ordinary `img` elements stacked in z order. The selection
//! outline is painted with a path so it can follow a rotated item, which
//! styled divs cannot do.
//!
//! All pointer handling is attached to the canvas element itself and hit
//! tests against the board, so the image elements carry no listeners.

use crate::app::MoodboardApp;
use crate::constants::HANDLE_SIZE;
use crate::profile_scope;
use crate::types::Handle;
use gpui::prelude::FluentBuilder;
use gpui::{PathBuilder, *};
use gpui_component::ActiveTheme as _;

/// Canvas-space geometry of the current selection.
#[derive(Clone, Copy)]
struct SelectionOutline {
    /// Corners in drawing order: nw, ne, se, sw
    corners: [(f32, f32); 4],
}

pub fn render_canvas_area(app: &mut MoodboardApp, cx: &mut Context<MoodboardApp>) -> Stateful<Div> {
    profile_scope!("render_canvas_area");

    let theme = cx.theme();
    let canvas_bg = theme.background;
    let muted_fg = theme.muted_foreground;
    let outline_color = theme.primary;
    let handle_fill = theme.background;

    let outline = app.board.selected_item().map(|item| SelectionOutline {
        corners: [
            item.rotated_corner(Handle::NorthWest),
            item.rotated_corner(Handle::NorthEast),
            item.rotated_corner(Handle::SouthEast),
            item.rotated_corner(Handle::SouthWest),
        ],
    });

    let mut images: Vec<AnyElement> = Vec::with_capacity(app.board.image_count());
    for item in app.board.items_in_z_order() {
        let element = if item.is_rotated() {
            let (min_x, min_y, max_x, max_y) = item.bounding_box();
            img(app.textures.rotated(item))
                .absolute()
                .left(px(min_x))
                .top(px(min_y))
                .w(px(max_x - min_x))
                .h(px(max_y - min_y))
                .object_fit(ObjectFit::Fill)
        } else {
            img(app.textures.base(item))
                .absolute()
                .left(px(item.position.0 as f32))
                .top(px(item.position.1 as f32))
                .w(px(item.size.0 as f32))
                .h(px(item.size.1 as f32))
                .object_fit(ObjectFit::Cover)
        };
        images.push(element.into_any_element());
    }

    div()
        .id("canvas")
        .relative()
        .flex_1()
        .w_full()
        .overflow_hidden()
        .bg(canvas_bg)
        .on_mouse_down(MouseButton::Left, cx.listener(MoodboardApp::handle_mouse_down))
        .on_mouse_down(
            MouseButton::Right,
            cx.listener(MoodboardApp::handle_right_mouse_down),
        )
        .on_mouse_move(cx.listener(MoodboardApp::handle_mouse_move))
        .on_mouse_up(MouseButton::Left, cx.listener(MoodboardApp::handle_mouse_up))
        .on_mouse_up_out(MouseButton::Left, cx.listener(MoodboardApp::handle_mouse_up))
        .on_drop(cx.listener(MoodboardApp::handle_file_drop))
        .children(images)
        .when_some(outline, |el, outline| {
            el.child(render_selection(outline, outline_color, handle_fill))
        })
        .when(app.board.shows_placeholder(), |el| {
            el.child(
                div()
                    .absolute()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(15.0))
                    .text_color(muted_fg)
                    .child("Drop images here, or use Upload / Add samples"),
            )
        })
}

fn render_selection(outline: SelectionOutline, color: Hsla, handle_fill: Hsla) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_selection(bounds, window, &outline, color, handle_fill);
        },
    )
    .absolute()
    .top_0()
    .left_0()
    .size_full()
}

fn paint_selection(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    outline: &SelectionOutline,
    color: Hsla,
    handle_fill: Hsla,
) {
    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);
    let to_window = |(x, y): (f32, f32)| point(px(origin_x + x), px(origin_y + y));

    let mut path = PathBuilder::stroke(px(2.0));
    path.move_to(to_window(outline.corners[0]));
    for corner in &outline.corners[1..] {
        path.line_to(to_window(*corner));
    }
    path.close();
    if let Ok(built) = path.build() {
        window.paint_path(built, color);
    }

    let half = HANDLE_SIZE / 2.0;
    for corner in outline.corners {
        let handle_bounds = Bounds {
            origin: point(px(origin_x + corner.0 - half), px(origin_y + corner.1 - half)),
            size: size(px(HANDLE_SIZE), px(HANDLE_SIZE)),
        };
        window.paint_quad(quad(
            handle_bounds,
            px(2.0),
            handle_fill,
            px(2.0),
            color,
            Default::default(),
        ));
    }
}
