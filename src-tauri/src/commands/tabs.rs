//! Tab management commands
use serde::{Deserialize, Serialize};
use tauri::State;

use delta_core::{ClickTarget, CloseOutcome, CoreError, SwitchOutcome, Tab, TabId, TabRow};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub name: String,
    pub content: String,
    pub active: bool,
}

impl TabInfo {
    fn new(tab: &Tab, active: TabId) -> Self {
        Self {
            id: tab.id.to_string(),
            name: tab.name.clone(),
            content: tab.content.clone(),
            active: tab.id == active,
        }
    }
}

fn parse_tab_id(tab_id: &str) -> delta_core::Result<TabId> {
    tab_id.parse::<TabId>().map_err(CoreError::from)
}

#[tauri::command]
pub fn add_tab(
    state: State<AppState>,
    name: Option<String>,
    content: Option<String>,
) -> CommandResult<TabInfo> {
    state
        .with_workbench(|workbench| {
            let id = workbench.add_tab(name, content);
            let tab = workbench.tabs().get_tab(&id)?;
            Ok(TabInfo::new(tab, id))
        })
        .into()
}

/// Returns true if a tab was removed
#[tauri::command]
pub fn close_tab(state: State<AppState>, tab_id: String) -> CommandResult<bool> {
    state
        .with_workbench(|workbench| {
            let id = parse_tab_id(&tab_id)?;
            let closed = match workbench.close_tab(&id) {
                CloseOutcome::Closed { .. } => true,
                CloseOutcome::LastTab | CloseOutcome::NotFound => false,
            };
            Ok(closed)
        })
        .into()
}

/// Returns true if the active tab changed
#[tauri::command]
pub fn switch_tab(state: State<AppState>, tab_id: String) -> CommandResult<bool> {
    state
        .with_workbench(|workbench| {
            let id = parse_tab_id(&tab_id)?;
            Ok(workbench.switch_tab(&id) == SwitchOutcome::Switched)
        })
        .into()
}

/// A click on a rendered tab element. Returns false for a stale element
/// whose tab is no longer in the strip.
#[tauri::command]
pub fn tab_clicked(
    state: State<AppState>,
    tab_id: String,
    target: ClickTarget,
) -> CommandResult<bool> {
    state
        .with_workbench(|workbench| {
            let id = parse_tab_id(&tab_id)?;
            Ok(workbench.click(id, target))
        })
        .into()
}

#[tauri::command]
pub fn get_tabs(state: State<AppState>) -> CommandResult<Vec<TabRow>> {
    state.with_workbench(|workbench| Ok(workbench.rows())).into()
}

#[tauri::command]
pub fn get_current_tab(state: State<AppState>) -> CommandResult<Option<TabInfo>> {
    state
        .with_workbench(|workbench| {
            let active = workbench.tabs().active_tab_id();
            Ok(workbench.current_tab().map(|tab| TabInfo::new(tab, active)))
        })
        .into()
}
