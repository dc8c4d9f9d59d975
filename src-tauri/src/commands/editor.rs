//! Editor binding commands
use serde::Serialize;
use tauri::{AppHandle, State, Window};

use delta_core::EditorOptions;

use super::CommandResult;
use crate::bridge::WebviewEditor;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EditorBoot {
    pub options: EditorOptions,
    /// Text the widget starts with
    pub value: String,
}

/// The webview has created the editor widget
#[tauri::command]
pub fn editor_ready(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<EditorBoot> {
    state
        .with_workbench(|workbench| {
            let value = workbench.initial_editor_value();
            let editor = WebviewEditor::new(app, window.label(), value.clone());
            workbench.attach_editor(Box::new(editor));

            Ok(EditorBoot {
                options: workbench.config().editor.clone(),
                value,
            })
        })
        .into()
}

/// Change notification from the editor widget with its full text
#[tauri::command]
pub fn editor_changed(state: State<AppState>, content: String) -> CommandResult<()> {
    state
        .with_workbench(|workbench| {
            workbench.on_editor_change(content);
            Ok(())
        })
        .into()
}
