//! Single-cell edit session.

use crate::error::{GridError, GridResult};
use crate::record::RecordStore;
use crate::types::RecordId;
use crate::validation::{validate, RuleSet};
use serde::Serialize;
use tracing::debug;

/// The cell being edited and what it held before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveEdit {
    /// Record under edit.
    pub record_id: RecordId,
    /// Field under edit.
    pub field: String,
    /// Stored value when the edit began.
    pub original_value: String,
    /// Last value passed to `set_draft` or a rejected `commit`.
    pub draft: Option<String>,
}

/// State of the edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No cell is being edited.
    #[default]
    Idle,
    /// One cell is being edited.
    Editing(ActiveEdit),
}

/// A committed edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    /// Record that was written.
    pub record_id: RecordId,
    /// Field that was written.
    pub field: String,
    /// Value before the commit.
    pub previous: String,
    /// Value after the commit.
    pub value: String,
}

/// What happened to an open session when a new one began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorEditResolution {
    /// No session was open.
    None,
    /// The draft passed validation and was written.
    Committed(CommitOutcome),
    /// The session was closed without writing. The caller shows
    /// `original_value` again.
    Discarded(ActiveEdit),
}

/// Coordinates "begin, validate, commit or cancel" for one cell at a
/// time.
///
/// The session never writes a value that failed validation. A rejected
/// commit leaves the session open so the caller can retry or cancel.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Returns the open edit, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveEdit> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing(edit) => Some(edit),
        }
    }

    /// Checks if a cell is being edited.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    /// Checks if the given cell is the one being edited.
    #[must_use]
    pub fn is_editing(&self, record_id: RecordId, field: &str) -> bool {
        self.active()
            .is_some_and(|e| e.record_id == record_id && e.field == field)
    }

    /// Opens an edit on `field` of `record_id`.
    ///
    /// An open session is closed first: its draft is committed if it
    /// validates, otherwise it is discarded. A session without a draft
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `record_id` is not in the store. The open
    /// session is left untouched in that case.
    pub fn begin(
        &mut self,
        record_id: RecordId,
        field: &str,
        store: &mut RecordStore,
        rules: &RuleSet,
    ) -> GridResult<PriorEditResolution> {
        if !store.contains(record_id) {
            return Err(GridError::not_found(record_id));
        }

        let prior = self.close_prior(store, rules);
        let original_value = store
            .get(record_id)
            .map(|record| record.value(field).to_string())
            .unwrap_or_default();
        debug!(%record_id, field, "edit started");
        self.state = EditState::Editing(ActiveEdit {
            record_id,
            field: field.to_string(),
            original_value,
            draft: None,
        });
        Ok(prior)
    }

    fn close_prior(&mut self, store: &mut RecordStore, rules: &RuleSet) -> PriorEditResolution {
        let Some(open) = self.active().cloned() else {
            return PriorEditResolution::None;
        };
        if let Some(value) = open.draft.clone() {
            if let Ok(outcome) = self.commit(value, store, rules) {
                return PriorEditResolution::Committed(outcome);
            }
        }
        PriorEditResolution::Discarded(self.discard().unwrap_or(open))
    }

    /// Validates `value` for the open edit and records it as the draft.
    ///
    /// Nothing is written to the store.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveEdit` when idle and `ValidationFailed` when the
    /// draft is rejected. A rejected draft is still recorded.
    pub fn set_draft(&mut self, value: impl Into<String>, rules: &RuleSet) -> GridResult<()> {
        let EditState::Editing(edit) = &mut self.state else {
            return Err(GridError::NoActiveEdit);
        };
        let value = value.into();
        let outcome = validate(&edit.field, &value, rules);
        edit.draft = Some(value);
        outcome.into_result(&edit.field)
    }

    /// Validates `value` and writes it to the store.
    ///
    /// # Errors
    ///
    /// - `NoActiveEdit` when idle.
    /// - `ValidationFailed` when rejected; the store is not touched and
    ///   the session stays open.
    /// - `NotFound` when the record was removed in the meantime; the
    ///   session is closed.
    pub fn commit(
        &mut self,
        value: impl Into<String>,
        store: &mut RecordStore,
        rules: &RuleSet,
    ) -> GridResult<CommitOutcome> {
        let EditState::Editing(edit) = &mut self.state else {
            return Err(GridError::NoActiveEdit);
        };
        let value = value.into();

        let outcome = validate(&edit.field, &value, rules);
        if !outcome.valid {
            debug!(record_id = %edit.record_id, field = %edit.field, "edit rejected");
            edit.draft = Some(value);
            return Err(GridError::validation_failed(
                &edit.field,
                outcome.message.unwrap_or_default(),
            ));
        }

        let record_id = edit.record_id;
        let field = edit.field.clone();
        self.state = EditState::Idle;
        let previous = store.update(record_id, &field, value.clone())?;
        debug!(%record_id, field = %field, "edit committed");
        Ok(CommitOutcome {
            record_id,
            field,
            previous,
            value,
        })
    }

    /// Closes the session without writing and returns what was open.
    pub fn discard(&mut self) -> Option<ActiveEdit> {
        match std::mem::take(&mut self.state) {
            EditState::Idle => None,
            EditState::Editing(edit) => {
                debug!(record_id = %edit.record_id, field = %edit.field, "edit discarded");
                Some(edit)
            }
        }
    }

    /// Discards the open edit if it targets `record_id`.
    pub fn on_record_deleted(&mut self, record_id: RecordId) -> Option<ActiveEdit> {
        if self.active().is_some_and(|e| e.record_id == record_id) {
            self.discard()
        } else {
            None
        }
    }
}
