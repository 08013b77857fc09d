//! Keyboard Navigation
//!
//! Maps host key identifiers onto the three logical navigation commands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical navigation command, shared by keyboard and touch input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCommand {
    Next,
    Previous,
    Activate,
}

impl NavCommand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Activate => "activate",
        }
    }
}

/// Key identifier → command registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: HashMap<String, NavCommand>,
}

impl KeyBindings {
    /// Registry with no bindings
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn register(&mut self, key: impl Into<String>, command: NavCommand) {
        self.bindings.insert(key.into(), command);
    }

    pub fn unregister(&mut self, key: &str) -> Option<NavCommand> {
        self.bindings.remove(key)
    }

    /// Command bound to a key identifier (exact, case-sensitive like DOM `key`)
    pub fn get_command(&self, key: &str) -> Option<NavCommand> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("ArrowRight", NavCommand::Next);
        registry.register("ArrowLeft", NavCommand::Previous);
        registry.register("Enter", NavCommand::Activate);
        registry
    }
}

/// What the host should do with a key event after the simulator saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
    /// Bound key: suppress the host's default action
    Consumed(NavCommand),
    /// Unbound key or simulator inactive
    Ignored,
}

impl KeyHandling {
    pub fn prevent_default(&self) -> bool {
        matches!(self, Self::Consumed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get_command("ArrowRight"), Some(NavCommand::Next));
        assert_eq!(keys.get_command("ArrowLeft"), Some(NavCommand::Previous));
        assert_eq!(keys.get_command("Enter"), Some(NavCommand::Activate));
        assert_eq!(keys.get_command("arrowright"), None);
        assert_eq!(keys.get_command("Tab"), None);
    }

    #[test]
    fn test_rebinding() {
        let mut keys = KeyBindings::default();
        keys.register(" ", NavCommand::Activate);
        assert_eq!(keys.unregister("Enter"), Some(NavCommand::Activate));
        assert_eq!(keys.get_command(" "), Some(NavCommand::Activate));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_bindings_serde() {
        let keys: KeyBindings = serde_json::from_str(r#"{ "j": "next", "k": "previous" }"#).unwrap();
        assert_eq!(keys.get_command("j"), Some(NavCommand::Next));
        assert_eq!(keys.get_command("Enter"), None);
    }
}
