//! Delta Core
//!
//! Coordination layer for the Delta script editor.
//! The native side owns every tab and the editor binding; the webview only
//! renders and forwards gestures.

mod actions;
mod config;
mod editor;
mod error;
mod layout;
mod window;
mod workbench;

pub use actions::ScriptAction;
pub use config::{Config, EditorOptions};
pub use editor::{push_if_changed, EditorSurface};
pub use error::CoreError;
pub use layout::{Layout, ScriptFilter};
pub use window::{WindowAction, WindowControl, WindowController};
pub use workbench::Workbench;

// Re-export tab components
pub use delta_tabs::{
    reconcile, render, route_click, ClickTarget, CloseOutcome, RenderPlan, SwitchOutcome, Tab,
    TabDefaults, TabError, TabId, TabListView, TabListener, TabManager, TabNode, TabRow, TabStrip,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Directives read before `RUST_LOG`, so the host can be tuned on its own
pub const LOG_ENV: &str = "DELTA_LOG";

/// Install the global subscriber. `DELTA_LOG` wins over `RUST_LOG`; with
/// neither set the workspace crates log at `info`. A second call is a no-op.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn,delta_lib=info,delta_core=info,delta_tabs=info"));

    if fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}
