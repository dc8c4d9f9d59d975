//! Navigation panel visibility and the script filter

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFilter {
    #[default]
    All,
    Txt,
    Lua,
}

impl ScriptFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptFilter::All => "all",
            ScriptFilter::Txt => "txt",
            ScriptFilter::Lua => "lua",
        }
    }

    /// Whether a script called `name` passes the filter
    pub fn matches(&self, name: &str) -> bool {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
        match self {
            ScriptFilter::All => true,
            ScriptFilter::Txt => ext.as_deref() == Some("txt"),
            ScriptFilter::Lua => ext.as_deref() == Some("lua"),
        }
    }
}

impl std::fmt::Display for ScriptFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScriptFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ScriptFilter::All),
            "txt" => Ok(ScriptFilter::Txt),
            "lua" => Ok(ScriptFilter::Lua),
            _ => Err(CoreError::UnknownFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Home/navigation panel collapsed
    pub nav_hidden: bool,
    pub filter: ScriptFilter,
}

impl Layout {
    /// Flip the navigation panel, returning the new hidden state
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_hidden = !self.nav_hidden;
        self.nav_hidden
    }

    /// Editor, tab strip and action bar take the space the panel frees
    pub fn is_expanded(&self) -> bool {
        self.nav_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_nav() {
        let mut layout = Layout::default();
        assert!(!layout.is_expanded());

        assert!(layout.toggle_nav());
        assert!(layout.is_expanded());

        assert!(!layout.toggle_nav());
        assert!(!layout.nav_hidden);
    }

    #[test]
    fn test_filter_defaults_to_all() {
        assert_eq!(Layout::default().filter, ScriptFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        assert!(ScriptFilter::All.matches("anything"));
        assert!(ScriptFilter::Lua.matches("Script1.lua"));
        assert!(ScriptFilter::Lua.matches("MAIN.LUA"));
        assert!(!ScriptFilter::Lua.matches("notes.txt"));
        assert!(ScriptFilter::Txt.matches("notes.txt"));
        assert!(!ScriptFilter::Txt.matches("README"));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("Lua".parse::<ScriptFilter>().unwrap(), ScriptFilter::Lua);
        assert!(matches!(
            "md".parse::<ScriptFilter>(),
            Err(CoreError::UnknownFilter(_))
        ));
    }
}
