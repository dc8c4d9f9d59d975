//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] delta_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown window action: {0}")]
    UnknownWindowAction(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Window control failed: {0}")]
    Window(String),

    #[error("Workbench not initialized")]
    NotInitialized,
}
