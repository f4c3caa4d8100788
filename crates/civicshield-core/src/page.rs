//! Page content produced by a view's renderer

use serde::{Deserialize, Serialize};

/// What the content pane shows for an open view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub view_id: String,
    pub title: String,
    pub description: String,
}

impl Page {
    pub fn new(
        view_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            view_id: view_id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
