//! Tab Manager
//!
//! Owns the ordered tab list and the active-tab pointer. Every operation is
//! total: unknown ids and closing the last tab come back as outcomes rather
//! than errors, and the store never drops below one tab.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::id::TabId;
use crate::tab::Tab;
use crate::Result;

/// Name and content given to tabs created without explicit values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabDefaults {
    /// Name template; `{n}` is replaced with the creation counter
    pub name_template: String,
    /// Placeholder body for new tabs
    pub content: String,
}

impl TabDefaults {
    pub fn name_for(&self, n: u64) -> String {
        self.name_template.replace("{n}", &n.to_string())
    }
}

impl Default for TabDefaults {
    fn default() -> Self {
        Self {
            name_template: "Script{n}.lua".to_string(),
            content: "-- Delta UI Remake by rwque.hpp".to_string(),
        }
    }
}

/// Result of [`TabManager::close_tab`]
#[derive(Debug, Clone)]
pub enum CloseOutcome {
    /// The tab was removed; `activated` is set when the pointer moved
    Closed { tab: Tab, activated: Option<TabId> },
    /// Refused, the tab is the only one left
    LastTab,
    NotFound,
}

impl CloseOutcome {
    pub fn is_closed(&self) -> bool {
        matches!(self, CloseOutcome::Closed { .. })
    }
}

/// Result of [`TabManager::switch_tab`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    AlreadyActive,
    NotFound,
}

#[derive(Debug)]
pub struct TabManager {
    /// Tabs in strip order
    tabs: Vec<Tab>,
    /// Always references an entry of `tabs`
    active_tab_id: TabId,
    /// Next creation sequence number, shared by ids and default names
    tab_counter: u64,
    defaults: TabDefaults,
}

impl TabManager {
    /// Create a store holding the single default tab
    pub fn new(defaults: TabDefaults) -> Self {
        let id = TabId::new(1);
        let first = Tab::new(id, defaults.name_for(1), defaults.content.clone());

        tracing::debug!(tab_id = %id, name = %first.name, "Created initial tab");

        Self {
            tabs: vec![first],
            active_tab_id: id,
            tab_counter: 2,
            defaults,
        }
    }

    /// Append a tab and make it active
    pub fn add_tab(&mut self, name: Option<String>, content: Option<String>) -> &Tab {
        let seq = self.tab_counter;
        self.tab_counter += 1;

        let id = TabId::new(seq);
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.defaults.name_for(seq));
        let content = content.unwrap_or_else(|| self.defaults.content.clone());

        tracing::info!(tab_id = %id, name = %name, "Created new tab");

        self.tabs.push(Tab::new(id, name, content));
        self.active_tab_id = id;

        let last = self.tabs.len() - 1;
        &self.tabs[last]
    }

    /// Remove a tab, moving the pointer to the tab that slides into its slot
    /// (or the new last tab) when the closed tab was active
    pub fn close_tab(&mut self, tab_id: &TabId) -> CloseOutcome {
        if self.tabs.len() <= 1 {
            tracing::debug!(tab_id = %tab_id, "Refusing to close the last tab");
            return CloseOutcome::LastTab;
        }

        let Some(index) = self.position(tab_id) else {
            return CloseOutcome::NotFound;
        };

        let tab = self.tabs.remove(index);

        let activated = if self.active_tab_id == tab.id {
            let next = self.tabs[index.min(self.tabs.len() - 1)].id;
            self.active_tab_id = next;
            Some(next)
        } else {
            None
        };

        tracing::info!(
            tab_id = %tab.id,
            activated = ?activated.map(|id| id.to_string()),
            "Closed tab"
        );

        CloseOutcome::Closed { tab, activated }
    }

    /// Point at another tab
    pub fn switch_tab(&mut self, tab_id: &TabId) -> SwitchOutcome {
        if self.position(tab_id).is_none() {
            return SwitchOutcome::NotFound;
        }

        if self.active_tab_id == *tab_id {
            return SwitchOutcome::AlreadyActive;
        }

        tracing::debug!(from = %self.active_tab_id, to = %tab_id, "Switched tab");

        self.active_tab_id = *tab_id;
        SwitchOutcome::Switched
    }

    /// The tab the pointer references
    pub fn current_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == self.active_tab_id)
    }

    /// Overwrite the active tab's body. Returns false if, against the
    /// invariants, no active tab was found.
    pub fn update_current_tab_content(&mut self, content: String) -> bool {
        let active = self.active_tab_id;
        match self.tabs.iter_mut().find(|t| t.id == active) {
            Some(tab) => {
                tab.set_content(content);
                true
            }
            None => false,
        }
    }

    /// Get a tab by ID
    pub fn get_tab(&self, tab_id: &TabId) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == *tab_id)
            .ok_or(TabError::NotFound(*tab_id))
    }

    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// Tabs in strip order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; the store holds at least one tab
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn defaults(&self) -> &TabDefaults {
        &self.defaults
    }

    fn position(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == *tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(TabDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(manager: &TabManager) -> Vec<&str> {
        manager.tabs().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_starts_with_default_tab() {
        let manager = TabManager::default();

        assert_eq!(manager.len(), 1);
        let tab = manager.current_tab().unwrap();
        assert_eq!(tab.id.to_string(), "tab-1");
        assert_eq!(tab.name, "Script1.lua");
        assert_eq!(tab.content, "-- Delta UI Remake by rwque.hpp");
    }

    #[test]
    fn test_size_tracks_adds() {
        let mut manager = TabManager::default();
        for k in 1..=10 {
            manager.add_tab(None, None);
            assert_eq!(manager.len(), k + 1);
        }
    }

    #[test]
    fn test_add_tab_becomes_active() {
        let mut manager = TabManager::default();
        let id = manager.add_tab(None, None).id;

        assert_eq!(manager.active_tab_id(), id);
        let current = manager.current_tab().unwrap();
        assert_eq!(current.name, "Script2.lua");
        assert_eq!(current.content, manager.defaults().content);
    }

    #[test]
    fn test_add_tab_with_explicit_values_still_advances_counter() {
        let mut manager = TabManager::default();
        manager.add_tab(Some("init.lua".to_string()), Some("print(1)".to_string()));
        let third = manager.add_tab(None, None).clone();

        assert_eq!(names(&manager), vec!["Script1.lua", "init.lua", "Script3.lua"]);
        assert_eq!(third.id.to_string(), "tab-3");
        assert_eq!(manager.tabs()[1].content, "print(1)");
    }

    #[test]
    fn test_add_tab_empty_name_uses_default() {
        let mut manager = TabManager::default();
        let tab = manager.add_tab(Some(String::new()), None);

        assert_eq!(tab.name, "Script2.lua");
    }

    #[test]
    fn test_close_last_tab_is_noop() {
        let mut manager = TabManager::default();
        let id = manager.active_tab_id();

        assert!(matches!(manager.close_tab(&id), CloseOutcome::LastTab));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active_tab_id(), id);
    }

    #[test]
    fn test_close_unknown_tab() {
        let mut manager = TabManager::default();
        manager.add_tab(None, None);
        let before = manager.active_tab_id();

        let missing: TabId = "tab-99".parse().unwrap();
        assert!(matches!(manager.close_tab(&missing), CloseOutcome::NotFound));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.active_tab_id(), before);
    }

    #[test]
    fn test_close_first_tab_after_add() {
        let mut manager = TabManager::default();
        let first = manager.active_tab_id();
        let second = manager.add_tab(None, None).id;

        let outcome = manager.close_tab(&first);
        match outcome {
            CloseOutcome::Closed { tab, activated } => {
                assert_eq!(tab.id, first);
                assert_eq!(activated, None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        assert_eq!(names(&manager), vec!["Script2.lua"]);
        assert_eq!(manager.active_tab_id(), second);
    }

    #[test]
    fn test_close_active_middle_tab_activates_next() {
        let mut manager = TabManager::default();
        let a = manager.active_tab_id();
        let b = manager.add_tab(None, None).id;
        let c = manager.add_tab(None, None).id;
        assert_eq!(manager.switch_tab(&b), SwitchOutcome::Switched);

        let outcome = manager.close_tab(&b);
        assert!(outcome.is_closed());
        assert_eq!(manager.tab_ids(), vec![a, c]);
        assert_eq!(manager.active_tab_id(), c);
    }

    #[test]
    fn test_close_active_last_tab_activates_new_last() {
        let mut manager = TabManager::default();
        manager.add_tab(None, None);
        let b = manager.active_tab_id();
        let c = manager.add_tab(None, None).id;

        manager.close_tab(&c);
        assert_eq!(manager.active_tab_id(), b);
    }

    #[test]
    fn test_close_active_follows_min_rule() {
        for closed_index in 0..5 {
            let mut manager = TabManager::default();
            for _ in 0..4 {
                manager.add_tab(None, None);
            }
            let victim = manager.tabs()[closed_index].id;
            manager.switch_tab(&victim);

            manager.close_tab(&victim);
            let expected = manager.tabs()[closed_index.min(manager.len() - 1)].id;
            assert_eq!(manager.active_tab_id(), expected);
        }
    }

    #[test]
    fn test_close_inactive_tab_keeps_pointer() {
        let mut manager = TabManager::default();
        let a = manager.active_tab_id();
        manager.add_tab(None, None);
        let c = manager.add_tab(None, None).id;

        manager.close_tab(&a);
        assert_eq!(manager.active_tab_id(), c);
    }

    #[test]
    fn test_switch_tab() {
        let mut manager = TabManager::default();
        let a = manager.active_tab_id();
        let b = manager.add_tab(None, None).id;

        assert_eq!(manager.switch_tab(&a), SwitchOutcome::Switched);
        assert_eq!(manager.active_tab_id(), a);
        assert_eq!(manager.switch_tab(&a), SwitchOutcome::AlreadyActive);
        assert_eq!(manager.switch_tab(&b), SwitchOutcome::Switched);
    }

    #[test]
    fn test_switch_unknown_tab_keeps_pointer() {
        let mut manager = TabManager::default();
        let active = manager.active_tab_id();

        let missing: TabId = "tab-42".parse().unwrap();
        assert_eq!(manager.switch_tab(&missing), SwitchOutcome::NotFound);
        assert_eq!(manager.active_tab_id(), active);
    }

    #[test]
    fn test_update_current_tab_content() {
        let mut manager = TabManager::default();
        manager.add_tab(None, None);

        assert!(manager.update_current_tab_content("local x = 1".to_string()));
        assert_eq!(manager.current_tab().unwrap().content, "local x = 1");
        assert_eq!(manager.tabs()[0].content, manager.defaults().content);
    }

    #[test]
    fn test_names_skip_after_close() {
        let mut manager = TabManager::default();
        let second = manager.add_tab(None, None).id;
        manager.close_tab(&second);
        manager.add_tab(None, None);

        assert_eq!(names(&manager), vec!["Script1.lua", "Script3.lua"]);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut manager = TabManager::default();
        let second = manager.add_tab(None, None).id;
        manager.close_tab(&second);
        let third = manager.add_tab(None, None).id;

        assert_ne!(second, third);
        assert!(third > second);
    }

    #[test]
    fn test_get_tab() {
        let manager = TabManager::default();
        let id = manager.active_tab_id();
        assert_eq!(manager.get_tab(&id).unwrap().name, "Script1.lua");

        let missing: TabId = "tab-5".parse().unwrap();
        assert!(matches!(
            manager.get_tab(&missing),
            Err(TabError::NotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = TabDefaults {
            name_template: "Untitled-{n}.txt".to_string(),
            content: String::new(),
        };
        let mut manager = TabManager::new(defaults);
        manager.add_tab(None, None);

        assert_eq!(names(&manager), vec!["Untitled-1.txt", "Untitled-2.txt"]);
        assert!(manager.current_tab().unwrap().content.is_empty());
    }
}
