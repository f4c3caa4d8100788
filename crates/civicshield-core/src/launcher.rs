//! Sidebar launcher
//!
//! Lists the registered views and turns a pick into an `open` command.

use serde::{Deserialize, Serialize};

use civicshield_tabs::TabSessionManager;

use crate::error::CoreError;
use crate::page::Page;
use crate::registry::ViewRegistry;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub href: String,
    /// Highlighted because its tab is the active one
    pub is_active: bool,
}

pub fn entries(registry: &ViewRegistry, sessions: &TabSessionManager<Page>) -> Vec<SidebarEntry> {
    let active_id = sessions.active_id();

    registry
        .iter()
        .map(|view| SidebarEntry {
            id: view.id.clone(),
            label: view.label.clone(),
            icon: view.icon.clone(),
            href: view.href.clone(),
            is_active: active_id == Some(view.id.as_str()),
        })
        .collect()
}

/// Open (or focus) the view with `view_id`
pub fn launch(
    registry: &ViewRegistry,
    sessions: &mut TabSessionManager<Page>,
    view_id: &str,
) -> Result<()> {
    let descriptor = registry.descriptor(view_id).inspect_err(|_| {
        tracing::warn!(view_id = %view_id, "Launch requested for unknown view");
    })?;

    sessions.open(descriptor);
    Ok(())
}

/// Open (or focus) the view routed at `href`
pub fn navigate(
    registry: &ViewRegistry,
    sessions: &mut TabSessionManager<Page>,
    href: &str,
) -> Result<()> {
    let Some(view) = registry.find_by_href(href) else {
        tracing::warn!(href = %href, "No view routed at path");
        return Err(CoreError::UnknownRoute(href.to_string()));
    };

    sessions.open(view.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_registry_order() {
        let registry = ViewRegistry::dashboard();
        let sessions = TabSessionManager::new();

        let entries = entries(&registry, &sessions);
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].label, "Home Dashboard");
        assert!(entries.iter().all(|e| !e.is_active));
    }

    #[test]
    fn test_launch_highlights_entry() {
        let registry = ViewRegistry::dashboard();
        let mut sessions = TabSessionManager::new();

        launch(&registry, &mut sessions, "heatmap").unwrap();

        let active: Vec<String> = entries(&registry, &sessions)
            .into_iter()
            .filter(|e| e.is_active)
            .map(|e| e.id)
            .collect();
        assert_eq!(active, vec!["heatmap"]);
    }

    #[test]
    fn test_launch_twice_keeps_one_tab() {
        let registry = ViewRegistry::dashboard();
        let mut sessions = TabSessionManager::new();

        launch(&registry, &mut sessions, "heatmap").unwrap();
        launch(&registry, &mut sessions, "settings").unwrap();
        launch(&registry, &mut sessions, "heatmap").unwrap();

        assert_eq!(sessions.ids(), vec!["heatmap", "settings"]);
        assert_eq!(sessions.active_id(), Some("heatmap"));
    }

    #[test]
    fn test_launch_unknown_view_leaves_session_alone() {
        let registry = ViewRegistry::dashboard();
        let mut sessions = TabSessionManager::new();

        let result = launch(&registry, &mut sessions, "claims");
        assert!(matches!(result, Err(CoreError::UnknownView(_))));
        assert!(sessions.is_empty());
        assert_eq!(sessions.revision(), 0);
    }

    #[test]
    fn test_navigate_by_route() {
        let registry = ViewRegistry::dashboard();
        let mut sessions = TabSessionManager::new();

        navigate(&registry, &mut sessions, "/deepfake-detector").unwrap();
        assert_eq!(sessions.active_id(), Some("deepfake-detector"));

        let result = navigate(&registry, &mut sessions, "/api/claims");
        assert!(matches!(result, Err(CoreError::UnknownRoute(_))));
        assert_eq!(sessions.len(), 1);
    }
}
