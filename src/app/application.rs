//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

actions!(hover_button, [Quit]);

/// Run the demo application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(err) = open_main_window(config, cx) {
            tracing::error!("{err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn open_main_window(config: AppConfig, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Hover Button")),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |_window, cx| {
        cx.new(|cx| Workspace::new(config, cx))
    })
    .map_err(|err| Error::Window {
        message: err.to_string(),
    })?;

    tracing::info!("Main window opened");
    Ok(())
}
