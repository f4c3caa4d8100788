//! View descriptors
//!
//! A descriptor is the registry's record for one dashboard destination.
//! The session stores it and hands it back; it never looks inside the
//! render handle.

use std::fmt;
use std::sync::Arc;

/// Opaque zero-argument view producer.
pub struct RenderHandle<T> {
    render: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> RenderHandle<T> {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Produce the view. Only renderers call this.
    pub fn render(&self) -> T {
        (self.render)()
    }

    /// True when both handles point at the same producer
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl<T> Clone for RenderHandle<T> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for RenderHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderHandle(..)")
    }
}

pub struct ViewDescriptor<T> {
    /// Unique view identifier, also the tab identity
    pub id: String,
    /// Display title
    pub label: String,
    /// Icon name, passed through to the UI
    pub icon: String,
    /// Route the view is reachable at
    pub href: String,
    pub renderer: RenderHandle<T>,
}

impl<T> ViewDescriptor<T> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        href: impl Into<String>,
        renderer: RenderHandle<T>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            href: href.into(),
            renderer,
        }
    }
}

impl<T> Clone for ViewDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            href: self.href.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for ViewDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("href", &self.href)
            .finish_non_exhaustive()
    }
}
