//! Action bar buttons

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Execute,
    /// Empty the editor and the active tab
    Clear,
    Open,
    Save,
    Inject,
}

impl ScriptAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptAction::Execute => "execute",
            ScriptAction::Clear => "clear",
            ScriptAction::Open => "open",
            ScriptAction::Save => "save",
            ScriptAction::Inject => "inject",
        }
    }
}

impl std::fmt::Display for ScriptAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScriptAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "execute" => Ok(ScriptAction::Execute),
            "clear" => Ok(ScriptAction::Clear),
            "open" => Ok(ScriptAction::Open),
            "save" => Ok(ScriptAction::Save),
            "inject" => Ok(ScriptAction::Inject),
            _ => Err(CoreError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("execute".parse::<ScriptAction>().unwrap(), ScriptAction::Execute);
        assert_eq!("CLEAR".parse::<ScriptAction>().unwrap(), ScriptAction::Clear);
        assert_eq!("inject".parse::<ScriptAction>().unwrap(), ScriptAction::Inject);
        assert!("run".parse::<ScriptAction>().is_err());
    }
}
