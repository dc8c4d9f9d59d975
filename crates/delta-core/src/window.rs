//! Window chrome controls
//!
//! Minimize, maximize and close go one way to whatever owns the native
//! window. Nothing comes back into the workbench; failures are logged.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowAction {
    Minimize,
    /// Toggles between maximized and restored
    Maximize,
    Close,
}

impl WindowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowAction::Minimize => "minimize",
            WindowAction::Maximize => "maximize",
            WindowAction::Close => "close",
        }
    }
}

impl std::fmt::Display for WindowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WindowAction {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimize" => Ok(WindowAction::Minimize),
            "maximize" => Ok(WindowAction::Maximize),
            "close" => Ok(WindowAction::Close),
            _ => Err(CoreError::UnknownWindowAction(s.to_string())),
        }
    }
}

/// Native side of the window controls
pub trait WindowControl {
    fn apply(&self, action: WindowAction) -> Result<()>;
}

pub struct WindowController {
    bridge: Box<dyn WindowControl + Send + Sync>,
}

impl WindowController {
    pub fn new(bridge: Box<dyn WindowControl + Send + Sync>) -> Self {
        Self { bridge }
    }

    /// Fire and forget: a failure is logged, never returned
    pub fn control(&self, action: WindowAction) {
        tracing::debug!(action = %action, "Window control requested");

        if let Err(e) = self.bridge.apply(action) {
            tracing::warn!(action = %action, error = %e, "Window control failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Recorder {
        seen: Arc<Mutex<Vec<WindowAction>>>,
        fail: bool,
    }

    impl WindowControl for Recorder {
        fn apply(&self, action: WindowAction) -> Result<()> {
            self.seen.lock().push(action);
            if self.fail {
                Err(CoreError::Window("window is gone".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("minimize".parse::<WindowAction>().unwrap(), WindowAction::Minimize);
        assert_eq!("Maximize".parse::<WindowAction>().unwrap(), WindowAction::Maximize);
        assert_eq!(" close ".parse::<WindowAction>().unwrap(), WindowAction::Close);
        assert!(matches!(
            "fullscreen".parse::<WindowAction>(),
            Err(CoreError::UnknownWindowAction(_))
        ));
    }

    #[test]
    fn test_dispatch_reaches_bridge() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let controller = WindowController::new(Box::new(Recorder {
            seen: Arc::clone(&seen),
            fail: false,
        }));

        controller.control(WindowAction::Minimize);
        controller.control(WindowAction::Close);
        assert_eq!(*seen.lock(), vec![WindowAction::Minimize, WindowAction::Close]);
    }

    #[test]
    fn test_bridge_failure_is_swallowed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let controller = WindowController::new(Box::new(Recorder {
            seen: Arc::clone(&seen),
            fail: true,
        }));

        controller.control(WindowAction::Maximize);
        assert_eq!(seen.lock().len(), 1);
    }
}
