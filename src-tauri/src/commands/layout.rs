//! Navigation panel and filter commands
use serde::Serialize;
use tauri::State;

use delta_core::{Layout, ScriptFilter, TabRow};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_layout(state: State<AppState>) -> CommandResult<Layout> {
    state.with_workbench(|workbench| Ok(workbench.layout())).into()
}

/// Returns the new hidden state
#[tauri::command]
pub fn toggle_nav(state: State<AppState>) -> CommandResult<bool> {
    state
        .with_workbench(|workbench| Ok(workbench.toggle_nav()))
        .into()
}

/// Script list after a filter change
#[derive(Debug, Serialize)]
pub struct FilteredList {
    pub layout: Layout,
    /// Rows whose names pass the filter, in strip order
    pub tabs: Vec<TabRow>,
}

#[tauri::command]
pub fn set_filter(state: State<AppState>, filter: String) -> CommandResult<FilteredList> {
    state
        .with_workbench(|workbench| {
            workbench.set_filter(filter.parse::<ScriptFilter>()?);
            Ok(FilteredList {
                layout: workbench.layout(),
                tabs: workbench.filtered_rows(),
            })
        })
        .into()
}
