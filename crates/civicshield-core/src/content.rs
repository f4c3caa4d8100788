//! Content pane
//!
//! Mounts the active tab's view. Has read-only access to the session and
//! remounts only after the session has changed.

use serde::Serialize;

use civicshield_tabs::TabSessionManager;

use crate::page::Page;

pub const WELCOME_TITLE: &str = "Welcome to CivicShield AI";
pub const WELCOME_MESSAGE: &str =
    "Select a page from the sidebar to get started with election monitoring";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mounted {
    /// Shown while no tab is active
    Welcome { title: String, message: String },
    View(Page),
}

impl Mounted {
    fn welcome() -> Self {
        Mounted::Welcome {
            title: WELCOME_TITLE.to_string(),
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, Mounted::Welcome { .. })
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Mounted::View(page) => Some(page),
            Mounted::Welcome { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentPane {
    mounted: Mounted,
    /// Session revision the current mount reflects
    rendered_revision: Option<u64>,
    mount_count: u64,
}

impl ContentPane {
    pub fn new() -> Self {
        Self {
            mounted: Mounted::welcome(),
            rendered_revision: None,
            mount_count: 0,
        }
    }

    /// Render cycle: remount if the session changed since the last cycle
    pub fn render(&mut self, sessions: &TabSessionManager<Page>) -> &Mounted {
        if self.rendered_revision == Some(sessions.revision()) {
            return &self.mounted;
        }

        self.mounted = match sessions.active() {
            Some(tab) => Mounted::View(tab.render()),
            None => Mounted::welcome(),
        };
        self.rendered_revision = Some(sessions.revision());
        self.mount_count += 1;

        tracing::trace!(
            active = ?sessions.active_id(),
            revision = sessions.revision(),
            "Mounted content"
        );

        &self.mounted
    }

    /// Last mounted content, without a render cycle
    pub fn mounted(&self) -> &Mounted {
        &self.mounted
    }

    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }
}

impl Default for ContentPane {
    fn default() -> Self {
        Self::new()
    }
}
