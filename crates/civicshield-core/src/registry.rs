//! View registry
//!
//! Static mapping from view id to descriptor, in sidebar order.

use civicshield_tabs::{RenderHandle, ViewDescriptor};

use crate::error::CoreError;
use crate::page::Page;
use crate::Result;

/// Dashboard destinations: id, label, icon, route, description
const DASHBOARD_VIEWS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "home",
        "Home Dashboard",
        "home",
        "/",
        "Overview of election misinformation activity",
    ),
    (
        "heatmap",
        "Heatmap",
        "map",
        "/heatmap",
        "Regional concentration of flagged claims",
    ),
    (
        "platform-trends",
        "Platform Trends",
        "trending-up",
        "/platform-trends",
        "Track election-related news & misinformation signals",
    ),
    (
        "deepfake-detector",
        "Deepfake Detector",
        "shield",
        "/deepfake-detector",
        "AI-powered detection of manipulated media in election content",
    ),
    (
        "source-graph",
        "Source Graph",
        "network",
        "/source-graph",
        "Network analysis of misinformation spread and source credibility",
    ),
    (
        "fact-check-bots",
        "AI Fact-Check Bots",
        "bot",
        "/fact-check-bots",
        "Automated fact-checking queue for incoming claims",
    ),
    (
        "crisis-mode",
        "Crisis Mode",
        "alert-triangle",
        "/crisis-mode",
        "Escalation controls for coordinated misinformation events",
    ),
    (
        "settings",
        "Settings / Profile",
        "settings",
        "/settings",
        "Account, notification and monitoring preferences",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<ViewDescriptor<Page>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Registry with every dashboard destination
    pub fn dashboard() -> Self {
        let views = DASHBOARD_VIEWS
            .iter()
            .map(|&(id, label, icon, href, description)| {
                let page = Page::new(id, label, description);
                ViewDescriptor::new(
                    id,
                    label,
                    icon,
                    href,
                    RenderHandle::new(move || page.clone()),
                )
            })
            .collect();

        Self { views }
    }

    /// Register a view. Ids and routes must be unique.
    pub fn register(&mut self, view: ViewDescriptor<Page>) -> Result<()> {
        if self.get(&view.id).is_some() {
            return Err(CoreError::DuplicateView(view.id));
        }
        if let Some(existing) = self.find_by_href(&view.href) {
            return Err(CoreError::DuplicateRoute {
                href: view.href,
                existing: existing.id.clone(),
            });
        }

        tracing::debug!(view_id = %view.id, href = %view.href, "Registered view");
        self.views.push(view);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ViewDescriptor<Page>> {
        self.views.iter().find(|v| v.id == id)
    }

    /// Descriptor to hand to the tab session
    pub fn descriptor(&self, id: &str) -> Result<ViewDescriptor<Page>> {
        self.get(id)
            .cloned()
            .ok_or_else(|| CoreError::UnknownView(id.to_string()))
    }

    /// Find the view routed at `href`. A trailing slash is ignored.
    pub fn find_by_href(&self, href: &str) -> Option<&ViewDescriptor<Page>> {
        let wanted = normalize_href(href);
        self.views.iter().find(|v| normalize_href(&v.href) == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewDescriptor<Page>> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

fn normalize_href(href: &str) -> &str {
    let href = href.trim();
    match href.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
