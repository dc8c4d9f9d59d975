//! Tauri IPC Commands
//!
//! These commands bridge the UI webview to the workbench.
//! All tab and editor state lives on this side; the webview only renders.

pub mod actions;
pub mod diagnostics;
pub mod editor;
pub mod layout;
pub mod tabs;
pub mod windows;

use serde::Serialize;

pub const MAIN_WINDOW_LABEL: &str = "main";

/// Envelope every command answers with. Workbench errors become the
/// `error` string; the webview never sees a rejected promise.
#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> From<delta_core::Result<T>> for CommandResult<T> {
    fn from(result: delta_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Command failed");
                Self {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
