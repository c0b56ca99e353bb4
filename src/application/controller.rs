//! Form-driven ledger controller

use crate::application::render::{Dialogs, Renderer};
use crate::domain::{
    check, EditMode, EditSession, Entry, EntryForm, EntryId, FormInput, FormState, Totals,
    ValidationError,
};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, EntryStorage};

pub const INVALID_INPUT_MESSAGE: &str = "Please fill in all the fields correctly.";
pub const ENTRY_ADDED_MESSAGE: &str = "Entry added successfully!";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this entry?";

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Entry),
    Rejected(ValidationError),
}

/// Reacts to one user event at a time: submit, edit, delete, cancel.
///
/// Every event that changes the ledger ends with a full re-render of the
/// list and the totals.
pub struct LedgerController<S: EntryStorage, R: Renderer, D: Dialogs> {
    repository: EntryRepository<S>,
    renderer: R,
    dialogs: D,
    form: FormState,
    edit_mode: EditMode,
}

impl<S: EntryStorage, R: Renderer, D: Dialogs> LedgerController<S, R, D> {
    pub fn new(
        repository: EntryRepository<S>,
        renderer: R,
        dialogs: D,
        edit_mode: EditMode,
    ) -> Self {
        LedgerController {
            repository,
            renderer,
            dialogs,
            form: FormState::default(),
            edit_mode,
        }
    }

    /// Resume with the form left by an earlier event
    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn repository(&self) -> &EntryRepository<S> {
        &self.repository
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Render the list and the totals from the stored entries
    pub fn refresh(&mut self) {
        let entries = self.repository.list_all();
        self.renderer.render_list(&entries);
        self.renderer.render_totals(&Totals::from_entries(&entries));
    }

    /// Submit the form with `input` laid over its current fields.
    ///
    /// A rejected submission keeps the fields for correction and leaves the
    /// ledger untouched.
    pub fn submit(&mut self, input: FormInput) -> Result<SubmitOutcome> {
        let fields = self.form.fields.merged_with(input);
        self.form.fields = fields.clone();

        let checked = check(&fields.kind, &fields.category, &fields.amount, &fields.date);
        let candidate = match checked {
            Ok(candidate) => candidate,
            Err(reason) => {
                tracing::debug!(%reason, "submission rejected");
                self.dialogs.alert(&format!("{} ({})", INVALID_INPUT_MESSAGE, reason));
                return Ok(SubmitOutcome::Rejected(reason));
            }
        };

        let entry = match self.form.editing.take() {
            Some(session) => {
                let entry = Entry::from_candidate(session.original.id, candidate);
                self.repository.restore(session.position, session.next.as_ref(), entry)?
            }
            None => self.repository.create(candidate)?,
        };

        tracing::info!(id = %entry.id, "entry submitted");
        self.dialogs.alert(ENTRY_ADDED_MESSAGE);
        self.form = FormState::default();
        self.refresh();

        Ok(SubmitOutcome::Created(entry))
    }

    /// Load an entry into the form and remove it from the ledger.
    ///
    /// Under [`EditMode::Discard`] the entry only comes back if the form is
    /// resubmitted. Unknown ids are ignored.
    pub fn edit(&mut self, id: &EntryId) -> Result<Option<Entry>> {
        if self.repository.find_by_id(id).is_none() {
            return Ok(None);
        }

        self.restore_pending_edit()?;

        let Some(taken) = self.repository.take_by_id(id)? else {
            return Ok(None);
        };
        let entry = taken.entry;

        self.form.fields = EntryForm::from_entry(&entry);
        self.form.editing = match self.edit_mode {
            EditMode::Discard => None,
            EditMode::Restore => Some(EditSession {
                position: taken.position,
                next: taken.next,
                original: entry.clone(),
            }),
        };

        tracing::info!(id = %entry.id, mode = self.edit_mode.as_str(), "editing entry");
        self.refresh();

        Ok(Some(entry))
    }

    /// Delete an entry after the user confirms. Returns whether the user confirmed.
    pub fn delete(&mut self, id: &EntryId) -> Result<bool> {
        if !self.dialogs.confirm(CONFIRM_DELETE_MESSAGE) {
            return Ok(false);
        }

        self.repository.delete_by_id(id)?;
        tracing::info!(id = %id, "entry deleted");
        self.refresh();

        Ok(true)
    }

    /// Abandon the form. An entry being edited under [`EditMode::Restore`] is put back.
    pub fn cancel(&mut self) -> Result<Option<Entry>> {
        let restored = self.restore_pending_edit()?;
        self.form = FormState::default();
        self.refresh();

        Ok(restored)
    }

    fn restore_pending_edit(&mut self) -> Result<Option<Entry>> {
        let Some(session) = self.form.editing.take() else {
            return Ok(None);
        };

        let entry = self.repository.restore(
            session.position,
            session.next.as_ref(),
            session.original,
        )?;
        tracing::info!(id = %entry.id, "edit abandoned, entry restored");
        Ok(Some(entry))
    }
}
