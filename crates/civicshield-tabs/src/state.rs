//! Session State Machine
//!
//! ```text
//! Empty
//!   ↓ open
//! HasTabs   (open / set_active / reorder / update / close_others stay here)
//!   ↓ close of the last tab, close_all
//! Empty
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No tabs open, nothing active
    Empty,
    /// At least one tab open, exactly one active
    #[serde(rename = "has-tabs")]
    HasTabs,
}

/// Commands that can move a session between states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabCommand {
    Open,
    Close,
    SetActive,
    CloseOthers,
    CloseAll,
    Reorder,
    Update,
}

impl SessionState {
    pub fn for_tab_count(count: usize) -> Self {
        if count == 0 {
            SessionState::Empty
        } else {
            SessionState::HasTabs
        }
    }

    /// Check if `command` may move the session from this state to `target`
    pub fn can_transition_to(&self, target: SessionState, command: TabCommand) -> bool {
        match (self, target) {
            (a, b) if *a == b => true,
            // Only opening a view leaves the empty state
            (SessionState::Empty, SessionState::HasTabs) => command == TabCommand::Open,
            // Only closing can empty the session
            (SessionState::HasTabs, SessionState::Empty) => {
                matches!(command, TabCommand::Close | TabCommand::CloseAll)
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Empty => "empty",
            SessionState::HasTabs => "has-tabs",
        }
    }
}

impl TabCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabCommand::Open => "open",
            TabCommand::Close => "close",
            TabCommand::SetActive => "set_active",
            TabCommand::CloseOthers => "close_others",
            TabCommand::CloseAll => "close_all",
            TabCommand::Reorder => "reorder",
            TabCommand::Update => "update",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for TabCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tab_count() {
        assert_eq!(SessionState::for_tab_count(0), SessionState::Empty);
        assert_eq!(SessionState::for_tab_count(1), SessionState::HasTabs);
        assert_eq!(SessionState::for_tab_count(8), SessionState::HasTabs);
    }

    #[test]
    fn test_valid_transitions() {
        // Empty -> HasTabs
        assert!(SessionState::Empty.can_transition_to(SessionState::HasTabs, TabCommand::Open));
        // HasTabs -> Empty
        assert!(SessionState::HasTabs.can_transition_to(SessionState::Empty, TabCommand::Close));
        assert!(
            SessionState::HasTabs.can_transition_to(SessionState::Empty, TabCommand::CloseAll)
        );
        // Staying put is always fine
        assert!(
            SessionState::HasTabs.can_transition_to(SessionState::HasTabs, TabCommand::Reorder)
        );
        assert!(SessionState::Empty.can_transition_to(SessionState::Empty, TabCommand::Close));
    }

    #[test]
    fn test_invalid_transitions() {
        // Focusing cannot create tabs
        assert!(
            !SessionState::Empty.can_transition_to(SessionState::HasTabs, TabCommand::SetActive)
        );
        // close_others keeps the target tab
        assert!(
            !SessionState::HasTabs.can_transition_to(SessionState::Empty, TabCommand::CloseOthers)
        );
        // Reordering never drops tabs
        assert!(
            !SessionState::HasTabs.can_transition_to(SessionState::Empty, TabCommand::Reorder)
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SessionState::HasTabs.to_string(), "has-tabs");
        assert_eq!(SessionState::Empty.to_string(), "empty");
        assert_eq!(TabCommand::CloseOthers.to_string(), "close_others");
    }
}
