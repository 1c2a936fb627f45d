//! Record store for CRUD operations.

use crate::error::{GridError, GridResult};
use crate::record::IdGenerator;
use crate::types::RecordId;
use datagrid_codec::Record;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A record together with its stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRecord {
    /// Stable identity.
    pub id: RecordId,
    /// Field values.
    pub record: Record,
}

/// Where `insert` places a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Before every existing record.
    #[default]
    Front,
    /// After every existing record.
    Back,
    /// At the given index, clamped to the store length.
    At(usize),
}

/// Owns the canonical ordered sequence of records.
///
/// The store is the single source of truth the view is derived from.
/// Every record carries an identity from the store's [`IdGenerator`];
/// positions shift as records come and go, identities do not.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<StoredRecord>,
    ids: IdGenerator,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records` in the given order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        store.extend(records);
        store
    }

    fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        for record in records {
            let id = self.ids.next_id();
            self.records.push(StoredRecord { id, record });
        }
    }

    /// Inserts a record and returns its new identity.
    pub fn insert(&mut self, record: Record, position: InsertPosition) -> RecordId {
        let id = self.ids.next_id();
        let index = match position {
            InsertPosition::Front => 0,
            InsertPosition::Back => self.records.len(),
            InsertPosition::At(i) => i.min(self.records.len()),
        };
        self.records.insert(index, StoredRecord { id, record });
        debug!(%id, index, "record inserted");
        id
    }

    /// Gets a record by identity.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(|r| &r.record)
    }

    /// Returns the store position of a record.
    #[must_use]
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Checks if a record exists.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Overwrites one field of a record and returns the previous value.
    ///
    /// A field the record did not carry yet reads as empty before the
    /// update.
    pub fn update(&mut self, id: RecordId, field: &str, value: impl Into<String>) -> GridResult<String> {
        let stored = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GridError::not_found(id))?;
        let previous = stored.record.set(field, value).unwrap_or_default();
        debug!(%id, field, "record updated");
        Ok(previous)
    }

    /// Removes a record and returns it.
    pub fn delete(&mut self, id: RecordId) -> GridResult<Record> {
        let index = self.position(id).ok_or_else(|| GridError::not_found(id))?;
        let removed = self.records.remove(index);
        debug!(%id, "record deleted");
        Ok(removed.record)
    }

    /// Removes every listed record in one pass.
    ///
    /// Identities that are not in the store are ignored. Returns the
    /// identities that were actually removed, in store order.
    pub fn bulk_delete(&mut self, ids: &[RecordId]) -> Vec<RecordId> {
        let targets: HashSet<RecordId> = ids.iter().copied().collect();
        let mut removed = Vec::new();
        self.records.retain(|r| {
            if targets.contains(&r.id) {
                removed.push(r.id);
                false
            } else {
                true
            }
        });
        debug!(requested = ids.len(), removed = removed.len(), "bulk delete");
        removed
    }

    /// Replaces the entire contents with `records`.
    ///
    /// The new records receive fresh identities; identities of the old
    /// records are not reused.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.clear();
        self.extend(records);
        debug!(count = self.records.len(), "store replaced");
    }

    /// Returns an ordered copy of all records with their identities.
    #[must_use]
    pub fn snapshot(&self) -> Vec<StoredRecord> {
        self.records.clone()
    }

    /// Returns an ordered copy of all record values.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records.iter().map(|r| r.record.clone()).collect()
    }

    /// Iterates over stored records in order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredRecord> {
        self.records.iter()
    }

    /// Returns identities in store order.
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the largest number embedded in `field` across all records.
    ///
    /// Non-digits are stripped before parsing; values without digits
    /// count as 0.
    #[must_use]
    pub fn max_embedded_number(&self, field: &str) -> u64 {
        self.records
            .iter()
            .filter_map(|r| {
                let digits: String = r
                    .record
                    .value(field)
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect();
                digits.parse::<u64>().ok()
            })
            .max()
            .unwrap_or(0)
    }
}
