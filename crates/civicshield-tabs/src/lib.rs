//! CivicShield Tab Sessions
//!
//! Keeps the dashboard's open views in order with at most one active view.
//! Tabs are opened views, not pages: the session owns order and focus,
//! renderers only read from it.

mod error;
mod manager;
mod state;
mod tab;
mod view;

pub use error::TabError;
pub use manager::TabSessionManager;
pub use state::{SessionState, TabCommand};
pub use tab::{OpenTab, TabPatch};
pub use view::{RenderHandle, ViewDescriptor};

pub type Result<T> = std::result::Result<T, TabError>;
