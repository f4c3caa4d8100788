//! Main dashboard state container
//!
//! The dashboard is the only owner of the tab session. The sidebar, tab bar
//! and content pane get read access; every change goes through one of the
//! commands below, which map one-to-one onto session operations.

use serde::{Deserialize, Serialize};

use civicshield_tabs::{TabPatch, TabSessionManager};

use crate::config::Config;
use crate::content::{ContentPane, Mounted};
use crate::launcher::{self, SidebarEntry};
use crate::page::Page;
use crate::registry::ViewRegistry;
use crate::tab_bar::{self, TabMenuAction, TabStrip};
use crate::Result;

/// Everything a UI bridge needs to draw the chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub sidebar: Vec<SidebarEntry>,
    pub tab_strip: TabStrip,
}

pub struct Dashboard {
    config: Config,
    registry: ViewRegistry,
    sessions: TabSessionManager<Page>,
    content: ContentPane,
}

impl Dashboard {
    /// Dashboard with the built-in views
    pub fn new(config: Config) -> Result<Self> {
        Self::with_registry(config, ViewRegistry::dashboard())
    }

    pub fn with_registry(config: Config, registry: ViewRegistry) -> Result<Self> {
        let mut dashboard = Self {
            config,
            registry,
            sessions: TabSessionManager::new(),
            content: ContentPane::new(),
        };

        for view_id in dashboard.config.startup_views.clone() {
            dashboard.open_view(&view_id)?;
        }

        tracing::info!(
            views = dashboard.registry.len(),
            open_tabs = dashboard.sessions.len(),
            "Dashboard initialized"
        );

        Ok(dashboard)
    }

    // === Tab commands ===

    /// Sidebar pick: open the view, or focus its tab
    pub fn open_view(&mut self, view_id: &str) -> Result<()> {
        launcher::launch(&self.registry, &mut self.sessions, view_id)
    }

    /// Open the view routed at `href`
    pub fn navigate(&mut self, href: &str) -> Result<()> {
        launcher::navigate(&self.registry, &mut self.sessions, href)
    }

    pub fn close_tab(&mut self, tab_id: &str) {
        self.sessions.close(tab_id);
    }

    pub fn activate_tab(&mut self, tab_id: &str) {
        self.sessions.set_active(tab_id);
    }

    pub fn close_other_tabs(&mut self, tab_id: &str) {
        self.sessions.close_others(tab_id);
    }

    pub fn close_all_tabs(&mut self) {
        self.sessions.close_all();
    }

    pub fn reorder_tabs<S: AsRef<str>>(&mut self, order: &[S]) -> Result<()> {
        Ok(self.sessions.reorder(order)?)
    }

    /// Finished drag of `dragged` onto `over`
    pub fn drag_tab(&mut self, dragged: &str, over: &str) -> Result<()> {
        tab_bar::finish_drag(&mut self.sessions, dragged, over)
    }

    pub fn apply_menu_action(&mut self, action: TabMenuAction) {
        tab_bar::apply_menu_action(&mut self.sessions, action);
    }

    pub fn update_tab(&mut self, tab_id: &str, patch: TabPatch<Page>) {
        self.sessions.update(tab_id, patch);
    }

    pub fn set_tab_dirty(&mut self, tab_id: &str, is_dirty: bool) {
        self.sessions.update(tab_id, TabPatch::new().dirty(is_dirty));
    }

    // === Read side ===

    /// Render cycle for the content area
    pub fn render(&mut self) -> &Mounted {
        self.content.render(&self.sessions)
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        launcher::entries(&self.registry, &self.sessions)
    }

    pub fn tab_strip(&self) -> TabStrip {
        tab_bar::strip(&self.sessions)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            sidebar: self.sidebar(),
            tab_strip: self.tab_strip(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn sessions(&self) -> &TabSessionManager<Page> {
        &self.sessions
    }

    pub fn content(&self) -> &ContentPane {
        &self.content
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
