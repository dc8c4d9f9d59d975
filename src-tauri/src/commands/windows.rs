//! Title bar window controls
use tauri::Window;

use delta_core::{WindowAction, WindowController};

use super::CommandResult;
use crate::bridge::TauriWindowControl;

#[tauri::command]
pub fn window_control(window: Window, action: String) -> CommandResult<()> {
    action
        .parse::<WindowAction>()
        .map(|action| {
            WindowController::new(Box::new(TauriWindowControl(window))).control(action)
        })
        .into()
}
