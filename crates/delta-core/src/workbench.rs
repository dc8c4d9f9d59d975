//! Main workbench state container
//!
//! One `Workbench` exists per application session. It owns the tab store,
//! the editor handle and the tab strip view, and re-renders and syncs the
//! editor after every tab operation. The webview only draws what it is told
//! and reports gestures back.

use delta_tabs::{
    render, route_click, ClickTarget, CloseOutcome, RenderPlan, SwitchOutcome, Tab, TabId,
    TabListView, TabListener, TabManager, TabRow,
};

use crate::actions::ScriptAction;
use crate::config::Config;
use crate::editor::{push_if_changed, EditorSurface};
use crate::layout::{Layout, ScriptFilter};

pub struct Workbench {
    /// Configuration
    config: Config,
    /// Tab store and active pointer
    tabs: TabManager,
    /// Rendered tab strip
    view: Box<dyn TabListView + Send>,
    /// Editor widget, once the webview has booted it
    editor: Option<Box<dyn EditorSurface + Send>>,
    layout: Layout,
}

impl Workbench {
    pub fn new(config: Config, view: Box<dyn TabListView + Send>) -> Self {
        let tabs = TabManager::new(config.tabs.clone());

        let mut workbench = Self {
            config,
            tabs,
            view,
            editor: None,
            layout: Layout::default(),
        };
        workbench.render();

        tracing::info!("Workbench initialized");

        workbench
    }

    /// Install the editor widget and give it the active tab's text
    pub fn attach_editor(&mut self, mut editor: Box<dyn EditorSurface + Send>) {
        let initial = self.initial_editor_value();
        push_if_changed(&mut *editor, &initial);
        self.editor = Some(editor);

        tracing::info!(tab_id = %self.tabs.active_tab_id(), "Editor attached");
    }

    /// Text the editor should start with
    pub fn initial_editor_value(&self) -> String {
        self.tabs
            .current_tab()
            .map(|tab| tab.content.clone())
            .unwrap_or_else(|| self.config.empty_editor_text.clone())
    }

    // === Tab operations ===

    pub fn add_tab(&mut self, name: Option<String>, content: Option<String>) -> TabId {
        let id = self.tabs.add_tab(name, content).id;
        self.render();
        self.push_active_content();
        id
    }

    pub fn close_tab(&mut self, tab_id: &TabId) -> CloseOutcome {
        let outcome = self.tabs.close_tab(tab_id);
        if outcome.is_closed() {
            self.render();
            self.push_active_content();
        }
        outcome
    }

    pub fn switch_tab(&mut self, tab_id: &TabId) -> SwitchOutcome {
        let outcome = self.tabs.switch_tab(tab_id);
        if outcome == SwitchOutcome::Switched {
            self.render();
            self.push_active_content();
        }
        outcome
    }

    /// Click on a tab element. Returns false when the id is not in the
    /// rendered strip.
    pub fn click(&mut self, tab_id: TabId, target: ClickTarget) -> bool {
        let rendered = self.view.rendered_ids();
        route_click(&rendered, tab_id, target, self)
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.tabs.current_tab()
    }

    pub fn update_current_tab_content(&mut self, content: String) -> bool {
        self.tabs.update_current_tab_content(content)
    }

    /// Change notification from the editor, carrying its full text
    pub fn on_editor_change(&mut self, text: String) {
        if let Some(editor) = self.editor.as_mut() {
            editor.observe_change(&text);
        }
        self.update_current_tab_content(text);
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    /// Tab strip rows in store order
    pub fn rows(&self) -> Vec<TabRow> {
        let active = self.tabs.active_tab_id();
        self.tabs
            .tabs()
            .iter()
            .map(|tab| TabRow::new(tab, active))
            .collect()
    }

    // === Action bar ===

    pub fn run_action(&mut self, action: ScriptAction) {
        match action {
            ScriptAction::Clear => self.clear(),
            ScriptAction::Execute
            | ScriptAction::Open
            | ScriptAction::Save
            | ScriptAction::Inject => {
                tracing::info!(action = %action, "Action not implemented");
            }
        }
    }

    /// Empty the active tab, and the editor if one is attached. The tab is
    /// cleared even before the editor has booted.
    pub fn clear(&mut self) {
        self.update_current_tab_content(String::new());
        self.push_active_content();
    }

    // === Layout ===

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn toggle_nav(&mut self) -> bool {
        let hidden = self.layout.toggle_nav();
        tracing::debug!(nav_hidden = hidden, "Toggled navigation panel");
        hidden
    }

    pub fn set_filter(&mut self, filter: ScriptFilter) {
        self.layout.filter = filter;
    }

    /// Strip rows whose names pass the active filter
    pub fn filtered_rows(&self) -> Vec<TabRow> {
        self.rows()
            .into_iter()
            .filter(|row| self.layout.filter.matches(&row.name))
            .collect()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn render(&mut self) -> RenderPlan {
        render(&self.tabs, &mut *self.view)
    }

    fn push_active_content(&mut self) -> bool {
        let (Some(editor), Some(tab)) = (self.editor.as_mut(), self.tabs.current_tab()) else {
            return false;
        };
        push_if_changed(&mut **editor, &tab.content)
    }
}

impl TabListener for Workbench {
    fn on_select(&mut self, tab_id: TabId) {
        self.switch_tab(&tab_id);
    }

    fn on_close_request(&mut self, tab_id: TabId) {
        self.close_tab(&tab_id);
    }
}
