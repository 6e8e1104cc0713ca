//! Selection model: the set of selected item ids and its mutation operations.
//!
//! The selection never outlives the items it references — deletions prune the
//! set and zone reloads clear it. Observer notification is the engine's job:
//! every externally visible change is reported through one
//! `Action::SelectionChanged` carrying both the single-item and the array
//! form, so observers needing either granularity register once.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

use crate::doc::{ItemId, ItemStore};

/// The set of currently selected item ids.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<ItemId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select one item. Clears the set first unless `additive`.
    /// Returns true when the set changed.
    pub fn select_single(&mut self, id: ItemId, additive: bool) -> bool {
        if additive {
            return self.ids.insert(id);
        }
        if self.ids.len() == 1 && self.ids.contains(&id) {
            return false;
        }
        self.ids.clear();
        self.ids.insert(id);
        true
    }

    /// Remove `id` when present, otherwise add it to the existing selection.
    pub fn toggle(&mut self, id: ItemId) {
        if !self.ids.remove(&id) {
            self.select_single(id, true);
        }
    }

    /// Empty the selection. Returns true when it was non-empty.
    pub fn deselect_all(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }

    /// Bulk variant of [`Selection::select_single`].
    pub fn select_many(&mut self, ids: &[ItemId], additive: bool) {
        if !additive {
            self.ids.clear();
        }
        self.ids.extend(ids.iter().copied());
    }

    /// Select every item currently in the store.
    pub fn select_all(&mut self, store: &ItemStore) {
        self.ids = store.ids().into_iter().collect();
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order, for deterministic notifications and
    /// persistence batches.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The selected id when exactly one item is selected — the single-item
    /// notification form consumed by the detail panel.
    #[must_use]
    pub fn primary(&self) -> Option<ItemId> {
        if self.ids.len() == 1 {
            self.ids.iter().next().copied()
        } else {
            None
        }
    }

    /// Drop ids whose item no longer exists in the store.
    /// Returns true when anything was removed.
    pub fn prune(&mut self, store: &ItemStore) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| store.contains(*id));
        self.ids.len() != before
    }
}
