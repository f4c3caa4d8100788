//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("No view is routed at {0}")]
    UnknownRoute(String),

    #[error("View already registered: {0}")]
    DuplicateView(String),

    #[error("Route {href} already belongs to view {existing}")]
    DuplicateRoute { href: String, existing: String },

    #[error("Tab error: {0}")]
    Tab(#[from] civicshield_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
