//! Open tab data structure
//!
//! An open tab is a view descriptor that has been opened in the session.
//! Two tabs are the same tab when their ids match.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::view::{RenderHandle, ViewDescriptor};

pub struct OpenTab<T> {
    /// View identifier, never changes while the tab is open
    pub id: String,
    /// Title shown in the tab strip
    pub label: String,
    pub icon: String,
    pub href: String,
    pub renderer: RenderHandle<T>,
    /// Tab has unsaved changes
    pub is_dirty: bool,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
    /// Last time the tab became the active tab
    pub last_activated_at: DateTime<Utc>,
}

impl<T> OpenTab<T> {
    pub fn from_descriptor(descriptor: ViewDescriptor<T>) -> Self {
        let now = Utc::now();

        Self {
            id: descriptor.id,
            label: descriptor.label,
            icon: descriptor.icon,
            href: descriptor.href,
            renderer: descriptor.renderer,
            is_dirty: false,
            opened_at: now,
            last_activated_at: now,
        }
    }

    /// Rebuild the descriptor this tab currently stands for
    pub fn descriptor(&self) -> ViewDescriptor<T> {
        ViewDescriptor {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            href: self.href.clone(),
            renderer: self.renderer.clone(),
        }
    }

    /// Merge a patch into the non-identity fields. Returns true if anything changed.
    pub fn apply(&mut self, patch: TabPatch<T>) -> bool {
        let mut changed = false;

        if let Some(label) = patch.label {
            changed |= self.label != label;
            self.label = label;
        }
        if let Some(icon) = patch.icon {
            changed |= self.icon != icon;
            self.icon = icon;
        }
        if let Some(href) = patch.href {
            changed |= self.href != href;
            self.href = href;
        }
        if let Some(renderer) = patch.renderer {
            changed |= !self.renderer.same_as(&renderer);
            self.renderer = renderer;
        }
        if let Some(is_dirty) = patch.is_dirty {
            changed |= self.is_dirty != is_dirty;
            self.is_dirty = is_dirty;
        }

        changed
    }

    pub(crate) fn mark_activated(&mut self) {
        self.last_activated_at = Utc::now();
    }

    /// Get display label (with fallback to the view id)
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    pub fn render(&self) -> T {
        self.renderer.render()
    }
}

impl<T> PartialEq for OpenTab<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for OpenTab<T> {}

impl<T> Clone for OpenTab<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            href: self.href.clone(),
            renderer: self.renderer.clone(),
            is_dirty: self.is_dirty,
            opened_at: self.opened_at,
            last_activated_at: self.last_activated_at,
        }
    }
}

impl<T> fmt::Debug for OpenTab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTab")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("href", &self.href)
            .field("is_dirty", &self.is_dirty)
            .field("opened_at", &self.opened_at)
            .field("last_activated_at", &self.last_activated_at)
            .finish_non_exhaustive()
    }
}

/// Partial update for an open tab. Absent fields are left alone.
pub struct TabPatch<T> {
    pub label: Option<String>,
    pub icon: Option<String>,
    pub href: Option<String>,
    pub renderer: Option<RenderHandle<T>>,
    pub is_dirty: Option<bool>,
}

impl<T> TabPatch<T> {
    pub fn new() -> Self {
        Self {
            label: None,
            icon: None,
            href: None,
            renderer: None,
            is_dirty: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn renderer(mut self, renderer: RenderHandle<T>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn dirty(mut self, is_dirty: bool) -> Self {
        self.is_dirty = Some(is_dirty);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.icon.is_none()
            && self.href.is_none()
            && self.renderer.is_none()
            && self.is_dirty.is_none()
    }
}

impl<T> Default for TabPatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TabPatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabPatch")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("href", &self.href)
            .field("renderer", &self.renderer.as_ref().map(|_| ".."))
            .field("is_dirty", &self.is_dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heatmap() -> ViewDescriptor<&'static str> {
        ViewDescriptor::new(
            "heatmap",
            "Heatmap",
            "map",
            "/heatmap",
            RenderHandle::new(|| "heatmap page"),
        )
    }

    #[test]
    fn test_new_tab() {
        let tab = OpenTab::from_descriptor(heatmap());
        assert_eq!(tab.id, "heatmap");
        assert_eq!(tab.label, "Heatmap");
        assert!(!tab.is_dirty);
        assert_eq!(tab.opened_at, tab.last_activated_at);
        assert_eq!(tab.render(), "heatmap page");
    }

    #[test]
    fn test_equality_is_by_id() {
        let tab = OpenTab::from_descriptor(heatmap());
        let mut renamed = OpenTab::from_descriptor(heatmap());
        renamed.apply(TabPatch::new().label("Regional Heatmap").dirty(true));

        assert_eq!(tab, renamed);
    }

    #[test]
    fn test_patch_leaves_missing_fields() {
        let mut tab = OpenTab::from_descriptor(heatmap());

        assert!(tab.apply(TabPatch::new().icon("globe")));
        assert_eq!(tab.icon, "globe");
        assert_eq!(tab.label, "Heatmap");
        assert_eq!(tab.href, "/heatmap");

        // Same values again are not a change
        assert!(!tab.apply(TabPatch::new().icon("globe")));
        assert!(!tab.apply(TabPatch::new()));
    }

    #[test]
    fn test_patch_renderer() {
        let mut tab = OpenTab::from_descriptor(heatmap());
        let same = tab.renderer.clone();

        assert!(!tab.apply(TabPatch::new().renderer(same)));
        assert!(tab.apply(TabPatch::new().renderer(RenderHandle::new(|| "live heatmap"))));
        assert_eq!(tab.render(), "live heatmap");
    }

    #[test]
    fn test_display_label_fallback() {
        let mut tab = OpenTab::from_descriptor(heatmap());
        tab.apply(TabPatch::new().label("  "));
        assert_eq!(tab.display_label(), "heatmap");
    }

    #[test]
    fn test_descriptor_round_trip_keeps_identity() {
        let tab = OpenTab::from_descriptor(heatmap());
        let descriptor = tab.descriptor();
        assert_eq!(descriptor.id, tab.id);
        assert!(descriptor.renderer.same_as(&tab.renderer));
    }
}
