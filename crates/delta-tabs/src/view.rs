//! Tab strip view contract
//!
//! The store never talks to a concrete renderer. It drives anything that
//! implements [`TabListView`], and clicks on rendered elements come back
//! through [`TabListener`].

use serde::{Deserialize, Serialize};

use crate::id::TabId;
use crate::manager::TabManager;
use crate::reconcile::{reconcile, RenderPlan};
use crate::tab::Tab;

/// What the strip shows for one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRow {
    pub id: TabId,
    pub name: String,
    pub active: bool,
}

impl TabRow {
    pub fn new(tab: &Tab, active: TabId) -> Self {
        Self {
            id: tab.id,
            name: tab.name.clone(),
            active: tab.id == active,
        }
    }
}

/// Render target for the tab strip
pub trait TabListView {
    /// Ids of the elements currently shown, in display order
    fn rendered_ids(&self) -> Vec<TabId>;

    /// Replace every element
    fn rebuild(&mut self, rows: &[TabRow]);

    /// Mark `active` and clear the marker on every other element
    fn set_active(&mut self, active: TabId);
}

/// Receiver for gestures on rendered tab elements
pub trait TabListener {
    fn on_select(&mut self, tab_id: TabId);
    fn on_close_request(&mut self, tab_id: TabId);
}

/// Bring `view` in line with `manager`
pub fn render(manager: &TabManager, view: &mut dyn TabListView) -> RenderPlan {
    let active = manager.active_tab_id();
    let plan = reconcile(&view.rendered_ids(), &manager.tab_ids(), active);

    match plan {
        RenderPlan::Rebuild => {
            let rows: Vec<TabRow> = manager
                .tabs()
                .iter()
                .map(|tab| TabRow::new(tab, active))
                .collect();
            tracing::trace!(count = rows.len(), "Rebuilding tab strip");
            view.rebuild(&rows);
        }
        RenderPlan::StyleOnly { active } => view.set_active(active),
    }

    plan
}

/// Part of a tab element that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Body,
    CloseButton,
}

/// One retained element of a [`TabStrip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNode {
    /// Unique per element instance; a rebuild issues fresh ids
    pub node_id: u64,
    #[serde(flatten)]
    pub row: TabRow,
}

/// Retained in-memory tab strip
#[derive(Debug, Default, Clone, Serialize)]
pub struct TabStrip {
    nodes: Vec<TabNode>,
    #[serde(skip)]
    next_node_id: u64,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[TabNode] {
        &self.nodes
    }

    pub fn active(&self) -> Option<TabId> {
        self.nodes.iter().find(|n| n.row.active).map(|n| n.row.id)
    }
}

/// Route a click on a tab element to `listener`. Clicks on ids that are not
/// in `rendered` are stale and dropped. A click on the close button never
/// also selects the tab.
pub fn route_click(
    rendered: &[TabId],
    tab_id: TabId,
    target: ClickTarget,
    listener: &mut dyn TabListener,
) -> bool {
    if !rendered.contains(&tab_id) {
        tracing::debug!(tab_id = %tab_id, "Ignoring click on unrendered tab");
        return false;
    }

    match target {
        ClickTarget::Body => listener.on_select(tab_id),
        ClickTarget::CloseButton => listener.on_close_request(tab_id),
    }
    true
}

impl TabListView for TabStrip {
    fn rendered_ids(&self) -> Vec<TabId> {
        self.nodes.iter().map(|n| n.row.id).collect()
    }

    fn rebuild(&mut self, rows: &[TabRow]) {
        self.nodes.clear();
        for row in rows {
            self.next_node_id += 1;
            self.nodes.push(TabNode {
                node_id: self.next_node_id,
                row: row.clone(),
            });
        }
    }

    fn set_active(&mut self, active: TabId) {
        for node in &mut self.nodes {
            node.row.active = node.row.id == active;
        }
    }
}
