//! Tab bar model
//!
//! Read-only view of the session for the tab strip, plus the strip's menu
//! and drag handling. A finished drag becomes one `reorder` call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use civicshield_tabs::{OpenTab, SessionState, TabSessionManager};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub href: String,
    pub is_active: bool,
    pub is_dirty: bool,
    pub opened_at: DateTime<Utc>,
}

impl TabInfo {
    fn from_tab<T>(tab: &OpenTab<T>, active_id: Option<&str>) -> Self {
        Self {
            id: tab.id.clone(),
            label: tab.display_label().to_string(),
            icon: tab.icon.clone(),
            href: tab.href.clone(),
            is_active: active_id == Some(tab.id.as_str()),
            is_dirty: tab.is_dirty,
            opened_at: tab.opened_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabMenuAction {
    CloseAll,
    /// Close everything but the active tab
    CloseOthers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip {
    pub tabs: Vec<TabInfo>,
    pub active_id: Option<String>,
    pub state: SessionState,
    /// The bar is hidden while no tabs are open
    pub visible: bool,
    pub summary: String,
    pub menu: Vec<TabMenuAction>,
}

pub fn strip<T>(sessions: &TabSessionManager<T>) -> TabStrip {
    let active_id = sessions.active_id();

    TabStrip {
        tabs: sessions
            .list_open()
            .iter()
            .map(|tab| TabInfo::from_tab(tab, active_id))
            .collect(),
        active_id: active_id.map(str::to_string),
        state: sessions.state(),
        visible: !sessions.is_empty(),
        summary: open_count_label(sessions.len()),
        menu: menu_actions(sessions),
    }
}

pub fn open_count_label(count: usize) -> String {
    if count == 1 {
        "1 tab open".to_string()
    } else {
        format!("{count} tabs open")
    }
}

pub fn menu_actions<T>(sessions: &TabSessionManager<T>) -> Vec<TabMenuAction> {
    let mut actions = Vec::new();
    if !sessions.is_empty() {
        actions.push(TabMenuAction::CloseAll);
    }
    if sessions.active_id().is_some() {
        actions.push(TabMenuAction::CloseOthers);
    }
    actions
}

pub fn apply_menu_action<T>(sessions: &mut TabSessionManager<T>, action: TabMenuAction) {
    match action {
        TabMenuAction::CloseAll => sessions.close_all(),
        TabMenuAction::CloseOthers => {
            if let Some(active_id) = sessions.active_id().map(str::to_string) {
                sessions.close_others(&active_id);
            }
        }
    }
}

/// Order produced by dropping `dragged` onto `over`'s slot.
///
/// `None` when nothing moves or either tab is not in `tabs`.
pub fn drop_order<T>(tabs: &[OpenTab<T>], dragged: &str, over: &str) -> Option<Vec<String>> {
    if dragged == over {
        return None;
    }

    let from = tabs.iter().position(|t| t.id == dragged)?;
    let to = tabs.iter().position(|t| t.id == over)?;

    let mut order: Vec<String> = tabs.iter().map(|t| t.id.clone()).collect();
    let moved = order.remove(from);
    order.insert(to, moved);
    Some(order)
}

/// Apply a finished drag as a single reorder
pub fn finish_drag<T>(
    sessions: &mut TabSessionManager<T>,
    dragged: &str,
    over: &str,
) -> Result<()> {
    let Some(order) = drop_order(sessions.list_open(), dragged, over) else {
        tracing::trace!(dragged = %dragged, over = %over, "Drag ended without a move");
        return Ok(());
    };

    sessions.reorder(&order)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::registry::ViewRegistry;

    fn sessions(ids: &[&str]) -> TabSessionManager<Page> {
        let registry = ViewRegistry::dashboard();
        let mut sessions = TabSessionManager::new();
        for id in ids {
            sessions.open(registry.descriptor(id).unwrap());
        }
        sessions
    }

    #[test]
    fn test_empty_strip_is_hidden() {
        let strip = strip(&sessions(&[]));
        assert!(!strip.visible);
        assert!(strip.tabs.is_empty());
        assert!(strip.menu.is_empty());
        assert_eq!(strip.state, SessionState::Empty);
        assert_eq!(strip.summary, "0 tabs open");
    }

    #[test]
    fn test_strip_marks_active_tab() {
        let strip = strip(&sessions(&["home", "heatmap", "settings"]));

        let active: Vec<&str> = strip
            .tabs
            .iter()
            .filter(|t| t.is_active)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(active, vec!["settings"]);
        assert_eq!(strip.active_id.as_deref(), Some("settings"));
        assert_eq!(strip.summary, "3 tabs open");
        assert_eq!(
            strip.menu,
            vec![TabMenuAction::CloseAll, TabMenuAction::CloseOthers]
        );
    }

    #[test]
    fn test_summary_singular() {
        assert_eq!(open_count_label(1), "1 tab open");
        assert_eq!(open_count_label(2), "2 tabs open");
    }

    #[test]
    fn test_menu_close_others_uses_active_tab() {
        let mut sessions = sessions(&["home", "heatmap", "settings"]);
        sessions.set_active("heatmap");

        apply_menu_action(&mut sessions, TabMenuAction::CloseOthers);
        assert_eq!(sessions.ids(), vec!["heatmap"]);

        apply_menu_action(&mut sessions, TabMenuAction::CloseAll);
        assert!(sessions.is_empty());

        // Nothing active, nothing to keep
        apply_menu_action(&mut sessions, TabMenuAction::CloseOthers);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_drop_order_moves_right_and_left() {
        let sessions = sessions(&["home", "heatmap", "platform-trends", "settings"]);
        let tabs = sessions.list_open();

        assert_eq!(
            drop_order(tabs, "home", "platform-trends").unwrap(),
            vec!["heatmap", "platform-trends", "home", "settings"]
        );
        assert_eq!(
            drop_order(tabs, "settings", "heatmap").unwrap(),
            vec!["home", "settings", "heatmap", "platform-trends"]
        );
        assert!(drop_order(tabs, "home", "home").is_none());
        assert!(drop_order(tabs, "home", "crisis-mode").is_none());
    }

    #[test]
    fn test_finish_drag_keeps_focus() {
        let mut sessions = sessions(&["home", "heatmap", "settings"]);

        finish_drag(&mut sessions, "settings", "home").unwrap();
        assert_eq!(sessions.ids(), vec!["settings", "home", "heatmap"]);
        assert_eq!(sessions.active_id(), Some("settings"));

        // Dropping onto itself is not a reorder
        let revision = sessions.revision();
        finish_drag(&mut sessions, "home", "home").unwrap();
        assert_eq!(sessions.revision(), revision);
    }
}
