//! Delta Tab Management
//!
//! The ordered list of open scripts, the pointer to the active one, and the
//! reconciler that keeps a rendered tab strip in step with both.
//! At least one tab always exists and exactly one is active.

mod error;
mod id;
mod manager;
mod reconcile;
mod tab;
mod view;

pub use error::TabError;
pub use id::TabId;
pub use manager::{CloseOutcome, SwitchOutcome, TabDefaults, TabManager};
pub use reconcile::{reconcile, RenderPlan};
pub use tab::Tab;
pub use view::{render, route_click, ClickTarget, TabListView, TabListener, TabNode, TabRow, TabStrip};

pub type Result<T> = std::result::Result<T, TabError>;
