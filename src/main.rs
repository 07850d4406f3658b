use gpui::*;
use gpui_component::Root;
use moodboard::app::MoodboardApp;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG overrides, e.g. RUST_LOG=moodboard=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodboard=info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(1280.0), px(860.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Moodboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| MoodboardApp::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(err) = opened {
            tracing::error!("Failed to open window: {err:#}");
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();
        cx.activate(true);
    });
}
