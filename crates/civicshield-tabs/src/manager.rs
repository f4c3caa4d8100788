//! Tab Session Manager
//!
//! Owns the ordered list of open tabs and the active tab id. Every change
//! goes through one of the named commands so the session invariants are
//! checked in one place:
//! - tab ids are unique
//! - the active id is absent exactly when no tabs are open
//! - when present, the active id names an open tab

use std::collections::{HashMap, HashSet};

use crate::error::TabError;
use crate::state::{SessionState, TabCommand};
use crate::tab::{OpenTab, TabPatch};
use crate::view::ViewDescriptor;
use crate::Result;

pub struct TabSessionManager<T> {
    /// Open tabs, left to right
    tabs: Vec<OpenTab<T>>,
    /// Currently active tab ID
    active_id: Option<String>,
    /// Bumped on every change
    revision: u64,
}

impl<T> TabSessionManager<T> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_id: None,
            revision: 0,
        }
    }

    /// Open a view, or focus it if it is already open.
    ///
    /// Re-opening never moves the existing tab.
    pub fn open(&mut self, descriptor: ViewDescriptor<T>) {
        let before = self.state();

        if let Some(index) = self.position(&descriptor.id) {
            if self.active_id.as_deref() == Some(descriptor.id.as_str()) {
                return;
            }
            self.tabs[index].mark_activated();
            self.active_id = Some(descriptor.id);
            tracing::debug!(tab_id = %self.tabs[index].id, "Focused open tab");
        } else {
            let tab = OpenTab::from_descriptor(descriptor);
            tracing::debug!(tab_id = %tab.id, label = %tab.label, "Opened tab");
            self.active_id = Some(tab.id.clone());
            self.tabs.push(tab);
        }

        self.commit(before, TabCommand::Open);
    }

    /// Close a tab. Unknown ids are ignored.
    ///
    /// Closing the active tab focuses the tab that slides into its slot,
    /// or the new last tab when the closed tab was rightmost.
    pub fn close(&mut self, id: &str) {
        let Some(index) = self.position(id) else {
            tracing::trace!(tab_id = %id, "Close ignored, tab not open");
            return;
        };

        let before = self.state();
        let removed = self.tabs.remove(index);

        if self.active_id.as_deref() == Some(removed.id.as_str()) {
            self.active_id = if self.tabs.is_empty() {
                None
            } else {
                let next_index = index.min(self.tabs.len() - 1);
                let next = &mut self.tabs[next_index];
                next.mark_activated();
                Some(next.id.clone())
            };
        }

        tracing::debug!(
            tab_id = %removed.id,
            next_active = ?self.active_id,
            "Closed tab"
        );

        self.commit(before, TabCommand::Close);
    }

    /// Focus an open tab without moving it. Unknown ids are ignored.
    pub fn set_active(&mut self, id: &str) {
        let Some(index) = self.position(id) else {
            tracing::trace!(tab_id = %id, "Activate ignored, tab not open");
            return;
        };
        if self.active_id.as_deref() == Some(id) {
            return;
        }

        let before = self.state();
        self.tabs[index].mark_activated();
        self.active_id = Some(id.to_string());

        tracing::debug!(tab_id = %id, "Activated tab");

        self.commit(before, TabCommand::SetActive);
    }

    /// Close every tab except `id`, which becomes active
    pub fn close_others(&mut self, id: &str) {
        let Some(index) = self.position(id) else {
            tracing::trace!(tab_id = %id, "Close others ignored, tab not open");
            return;
        };
        if self.tabs.len() == 1 && self.active_id.as_deref() == Some(id) {
            return;
        }

        let before = self.state();
        let closed = self.tabs.len() - 1;
        let mut keep = self.tabs.swap_remove(index);
        self.tabs.clear();

        if self.active_id.as_deref() != Some(id) {
            keep.mark_activated();
        }
        self.active_id = Some(keep.id.clone());
        self.tabs.push(keep);

        tracing::debug!(tab_id = %id, closed, "Closed other tabs");

        self.commit(before, TabCommand::CloseOthers);
    }

    pub fn close_all(&mut self) {
        if self.tabs.is_empty() {
            return;
        }

        let before = self.state();
        let closed = self.tabs.len();
        self.tabs.clear();
        self.active_id = None;

        tracing::debug!(closed, "Closed all tabs");

        self.commit(before, TabCommand::CloseAll);
    }

    /// Rearrange the open tabs to match `new_order`.
    ///
    /// `new_order` must be a permutation of the open tab ids; anything else
    /// is rejected and the current order is kept.
    pub fn reorder<S: AsRef<str>>(&mut self, new_order: &[S]) -> Result<()> {
        let order: Vec<&str> = new_order.iter().map(AsRef::as_ref).collect();
        let rank = match self.validate_order(&order) {
            Ok(rank) => rank,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected tab reorder");
                return Err(e);
            }
        };

        if self.ids() == order {
            return Ok(());
        }

        let before = self.state();
        self.tabs.sort_by_key(|tab| rank.get(tab.id.as_str()).copied());

        tracing::debug!(order = ?order, "Reordered tabs");

        self.commit(before, TabCommand::Reorder);
        Ok(())
    }

    /// Patch a tab's label, icon, route, renderer or dirty flag.
    ///
    /// Identity, position and focus never change. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, patch: TabPatch<T>) {
        let Some(index) = self.position(id) else {
            tracing::trace!(tab_id = %id, "Update ignored, tab not open");
            return;
        };
        if patch.is_empty() {
            return;
        }

        let before = self.state();
        if self.tabs[index].apply(patch) {
            tracing::debug!(tab_id = %id, "Updated tab");
            self.commit(before, TabCommand::Update);
        }
    }

    /// Open tabs in display order
    pub fn list_open(&self) -> &[OpenTab<T>] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&OpenTab<T>> {
        let id = self.active_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Get an open tab by ID
    pub fn get(&self, id: &str) -> Option<&OpenTab<T>> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Open tab ids in display order
    pub fn ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn state(&self) -> SessionState {
        SessionState::for_tab_count(self.tabs.len())
    }

    /// Change counter. Renderers compare it to decide whether to remount.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check the session invariants: unique ids, and an active id that is
    /// present exactly when tabs are open and names one of them.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.tabs.len());
        if !self.tabs.iter().all(|t| seen.insert(t.id.as_str())) {
            return false;
        }

        match self.active_id.as_deref() {
            None => self.tabs.is_empty(),
            Some(id) => seen.contains(id),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Map each id in `new_order` to its target index, if it is a permutation
    fn validate_order<'a>(&self, new_order: &[&'a str]) -> Result<HashMap<&'a str, usize>> {
        if new_order.len() != self.tabs.len() {
            return Err(TabError::OrderLengthMismatch {
                expected: self.tabs.len(),
                actual: new_order.len(),
            });
        }

        let mut rank = HashMap::with_capacity(new_order.len());
        for (index, &id) in new_order.iter().enumerate() {
            if !self.is_open(id) {
                return Err(TabError::NotOpen(id.to_string()));
            }
            if rank.insert(id, index).is_some() {
                return Err(TabError::DuplicateInOrder(id.to_string()));
            }
        }

        Ok(rank)
    }

    fn commit(&mut self, before: SessionState, command: TabCommand) {
        let after = self.state();
        debug_assert!(
            before.can_transition_to(after, command),
            "illegal session transition {before} -> {after} via {command}"
        );
        debug_assert!(self.is_consistent(), "session invariants broken by {command}");

        if before != after {
            tracing::debug!(
                from = %before,
                to = %after,
                via = %command,
                "Session state transition"
            );
        }

        self.revision += 1;
    }
}

impl<T> Default for TabSessionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
