//! Webview-backed collaborators
//!
//! The editor widget and the tab strip are drawn by the UI webview. These
//! adapters keep the last state the webview was sent and push changes to it
//! as events.

use delta_core::{
    CoreError, EditorSurface, Result, TabId, TabListView, TabRow, TabStrip, WindowAction,
    WindowControl,
};
use tauri::{AppHandle, Emitter, Window};

pub const EDITOR_SET_VALUE_EVENT: &str = "editor-set-value";
pub const TABS_REBUILD_EVENT: &str = "tabs-rebuild";
pub const TABS_ACTIVE_EVENT: &str = "tabs-active";

/// Mirror of the editor widget's text
pub struct WebviewEditor {
    app: AppHandle,
    label: String,
    text: String,
}

impl WebviewEditor {
    pub fn new(app: AppHandle, label: &str, text: String) -> Self {
        Self {
            app,
            label: label.to_string(),
            text,
        }
    }
}

impl EditorSurface for WebviewEditor {
    fn get_value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
        if let Err(e) = self
            .app
            .emit_to(self.label.as_str(), EDITOR_SET_VALUE_EVENT, text)
        {
            tracing::warn!(error = %e, "Failed to push editor value");
        }
    }

    fn observe_change(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Tab strip drawn by the webview, retained here for reconciliation
pub struct WebviewTabList {
    app: AppHandle,
    label: String,
    strip: TabStrip,
}

impl WebviewTabList {
    pub fn new(app: AppHandle, label: &str) -> Self {
        Self {
            app,
            label: label.to_string(),
            strip: TabStrip::new(),
        }
    }
}

impl TabListView for WebviewTabList {
    fn rendered_ids(&self) -> Vec<TabId> {
        self.strip.rendered_ids()
    }

    fn rebuild(&mut self, rows: &[TabRow]) {
        self.strip.rebuild(rows);
        if let Err(e) = self
            .app
            .emit_to(self.label.as_str(), TABS_REBUILD_EVENT, self.strip.nodes())
        {
            tracing::warn!(error = %e, "Failed to emit tab strip");
        }
    }

    fn set_active(&mut self, active: TabId) {
        self.strip.set_active(active);
        if let Err(e) = self
            .app
            .emit_to(self.label.as_str(), TABS_ACTIVE_EVENT, active)
        {
            tracing::warn!(error = %e, "Failed to emit active tab");
        }
    }
}

/// Native window behind the custom title bar buttons
pub struct TauriWindowControl(pub Window);

impl WindowControl for TauriWindowControl {
    fn apply(&self, action: WindowAction) -> Result<()> {
        let window = &self.0;
        let result = match action {
            WindowAction::Minimize => window.minimize(),
            WindowAction::Maximize => match window.is_maximized() {
                Ok(true) => window.unmaximize(),
                Ok(false) => window.maximize(),
                Err(e) => Err(e),
            },
            WindowAction::Close => window.close(),
        };
        result.map_err(|e| CoreError::Window(e.to_string()))
    }
}
