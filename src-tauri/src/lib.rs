//! Delta - Tauri Application
//!
//! - Custom title bar, so the window is undecorated
//! - The webview draws tabs and hosts the editor widget
//! - Rust owns all state

mod bridge;
mod commands;
mod state;

use commands::MAIN_WINDOW_LABEL;
use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    delta_core::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Initialize workbench state
            let state = AppState::new();
            state.initialize(app.handle(), MAIN_WINDOW_LABEL)?;

            // Store state in Tauri
            app.manage(state);

            WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
                .title("Delta")
                .inner_size(1100.0, 650.0)
                .min_inner_size(800.0, 500.0)
                .decorations(false)
                .center()
                .build()?;

            tracing::info!("Delta started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Window commands
            commands::windows::window_control,
            // Tab commands
            commands::tabs::add_tab,
            commands::tabs::close_tab,
            commands::tabs::switch_tab,
            commands::tabs::tab_clicked,
            commands::tabs::get_tabs,
            commands::tabs::get_current_tab,
            // Editor commands
            commands::editor::editor_ready,
            commands::editor::editor_changed,
            // Action bar
            commands::actions::run_action,
            // Layout
            commands::layout::get_layout,
            commands::layout::toggle_nav,
            commands::layout::set_filter,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Delta");
}
