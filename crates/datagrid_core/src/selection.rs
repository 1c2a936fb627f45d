//! Selection set keyed by record identity.

use crate::record::RecordStore;
use crate::types::RecordId;
use datagrid_codec::Record;
use std::collections::HashSet;

/// Identities of the rows the user marked selected.
///
/// Membership survives filtering, sorting and paging. Removing a record
/// from the store must be followed by [`SelectionSet::retain_present`]
/// or [`SelectionSet::remove`]; the grid does both in the same command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashSet<RecordId>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks or unmarks one record. Returns true if membership changed.
    pub fn toggle(&mut self, id: RecordId, selected: bool) -> bool {
        if selected {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    /// Marks or unmarks every listed record.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = RecordId>, selected: bool) {
        if selected {
            self.selected.extend(ids);
        } else {
            for id in ids {
                self.selected.remove(&id);
            }
        }
    }

    /// Unmarks everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops one identity.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.selected.remove(&id)
    }

    /// Drops identities no longer present in `store`.
    pub fn retain_present(&mut self, store: &RecordStore) {
        self.selected.retain(|id| store.contains(*id));
    }

    /// Number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Checks membership.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected identities in store order.
    #[must_use]
    pub fn ids_in_store_order(&self, store: &RecordStore) -> Vec<RecordId> {
        store
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .map(|r| r.id)
            .collect()
    }

    /// Selected records in store order.
    #[must_use]
    pub fn materialize(&self, store: &RecordStore) -> Vec<Record> {
        store
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .map(|r| r.record.clone())
            .collect()
    }
}
