//! Webview lifecycle commands
use serde::Serialize;
use tauri::{State, Window};

use delta_core::{Layout, TabRow};

use super::CommandResult;
use crate::state::AppState;

/// First frame for a freshly loaded page. The strip is rendered before the
/// page exists, so its initial `tabs-rebuild` event is never seen.
#[derive(Debug, Serialize)]
pub struct FrontendBoot {
    pub tabs: Vec<TabRow>,
    pub layout: Layout,
}

#[tauri::command]
pub fn frontend_ready(window: Window, state: State<AppState>) -> CommandResult<FrontendBoot> {
    state
        .with_workbench(|workbench| {
            tracing::info!(
                window = %window.label(),
                tabs = workbench.tabs().len(),
                "Frontend ready"
            );
            Ok(FrontendBoot {
                tabs: workbench.rows(),
                layout: workbench.layout(),
            })
        })
        .into()
}
