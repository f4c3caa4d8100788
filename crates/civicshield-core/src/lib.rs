//! CivicShield Core
//!
//! Coordination layer for the CivicShield AI dashboard. The dashboard owns
//! the tab session; the sidebar, tab bar and content pane read it and issue
//! commands through the dashboard.

mod config;
mod content;
mod dashboard;
mod error;
mod launcher;
mod page;
mod registry;
mod tab_bar;

pub use config::Config;
pub use content::{ContentPane, Mounted, WELCOME_MESSAGE, WELCOME_TITLE};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::CoreError;
pub use launcher::SidebarEntry;
pub use page::Page;
pub use registry::ViewRegistry;
pub use tab_bar::{TabInfo, TabMenuAction, TabStrip};

// Re-export the session types the dashboard exposes
pub use civicshield_tabs::{
    OpenTab, RenderHandle, SessionState, TabError, TabPatch, TabSessionManager, ViewDescriptor,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    if fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        tracing::debug!("Logging already initialized");
    }
}
