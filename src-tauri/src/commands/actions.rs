//! Action bar commands
use tauri::State;

use delta_core::ScriptAction;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn run_action(state: State<AppState>, action: String) -> CommandResult<()> {
    state
        .with_workbench(|workbench| {
            workbench.run_action(action.parse::<ScriptAction>()?);
            Ok(())
        })
        .into()
}
