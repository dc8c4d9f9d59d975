//! Tab identifiers
//!
//! Ids are handed out from a monotonically increasing counter and never
//! reused. On the wire (and in the webview) they read as `tab-N`.

use serde::{Deserialize, Serialize};

use crate::error::TabError;

const PREFIX: &str = "tab-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TabId(u64);

impl TabId {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Creation sequence number this id was assigned from
    pub fn seq(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

impl std::str::FromStr for TabId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix(PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .map(TabId)
            .ok_or_else(|| TabError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for TabId {
    type Error = TabError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TabId> for String {
    fn from(id: TabId) -> Self {
        id.to_string()
    }
}
