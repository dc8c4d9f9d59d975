//! Application state management
use delta_core::{Config, CoreError, Result, Workbench};
use parking_lot::Mutex;
use std::sync::Arc;
use tauri::AppHandle;

use crate::bridge::WebviewTabList;

/// Environment variable holding a JSON config override
const CONFIG_ENV: &str = "DELTA_CONFIG";

/// Thread-safe application state wrapper
pub struct AppState {
    workbench: Arc<Mutex<Option<Workbench>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workbench: Arc::new(Mutex::new(None)),
        }
    }

    pub fn initialize(&self, app: &AppHandle, window_label: &str) -> Result<()> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(json) => Config::from_json(&json)?,
            Err(_) => Config::default(),
        };

        let view = WebviewTabList::new(app.clone(), window_label);
        *self.workbench.lock() = Some(Workbench::new(config, Box::new(view)));
        Ok(())
    }

    pub fn with_workbench<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Workbench) -> Result<T>,
    {
        let mut guard = self.workbench.lock();
        match guard.as_mut() {
            Some(workbench) => f(workbench),
            None => Err(CoreError::NotInitialized),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
