//! Tab strip reconciliation
//!
//! Compares what the view currently shows against the store. A changed
//! membership or order means the strip is rebuilt; otherwise only the
//! active marker moves, so elements (and their hover state) survive the
//! re-render that follows every edit.

use serde::{Deserialize, Serialize};

use crate::id::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPlan {
    /// Discard every element and rebuild in store order
    Rebuild,
    /// Same tabs in the same order, toggle the active marker only
    StyleOnly { active: TabId },
}

pub fn reconcile(rendered: &[TabId], current: &[TabId], active: TabId) -> RenderPlan {
    if rendered == current {
        RenderPlan::StyleOnly { active }
    } else {
        RenderPlan::Rebuild
    }
}
