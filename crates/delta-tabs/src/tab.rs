//! Tab data structure
//!
//! A tab is one open script: an id, the name shown in the strip, and the
//! text buffer mirrored into the editor while the tab is active.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::TabId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Display name, fixed at creation
    pub name: String,
    /// Document body
    pub content: String,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last content modification time
    pub updated_at: DateTime<Utc>,
}

impl Tab {
    pub(crate) fn new(id: TabId, name: String, content: String) -> Self {
        let now = Utc::now();

        Self {
            id,
            name,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the document body
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
