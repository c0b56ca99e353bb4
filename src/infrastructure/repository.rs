//! Entry repository over an injected storage port

use crate::domain::{Candidate, Entry, EntryId};
use crate::error::Result;
use crate::infrastructure::storage::EntryStorage;

/// An entry removed for editing, with enough context to put it back
#[derive(Debug, Clone, PartialEq)]
pub struct Taken {
    pub position: usize,
    /// Id of the entry that followed it
    pub next: Option<EntryId>,
    pub entry: Entry,
}

/// CRUD over the stored entry list.
///
/// Holds no cache: every read reloads the list from storage and every
/// mutation writes the whole list back.
#[derive(Debug)]
pub struct EntryRepository<S: EntryStorage> {
    storage: S,
}

impl<S: EntryStorage> EntryRepository<S> {
    pub fn new(storage: S) -> Self {
        EntryRepository { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Store a new entry under a fresh id and return it
    pub fn create(&self, candidate: Candidate) -> Result<Entry> {
        let mut entries = self.storage.load();
        let entry = Entry::from_candidate(EntryId::generate(), candidate);
        entries.push(entry.clone());
        self.storage.save(&entries)?;

        tracing::debug!(id = %entry.id, "created entry");
        Ok(entry)
    }

    pub fn find_by_id(&self, id: &EntryId) -> Option<Entry> {
        self.storage
            .load()
            .into_iter()
            .find(|entry| &entry.id == id)
    }

    /// Remove the entry with `id`. Absent ids are ignored.
    pub fn delete_by_id(&self, id: &EntryId) -> Result<()> {
        let mut entries = self.storage.load();
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        self.storage.save(&entries)?;

        tracing::debug!(id = %id, removed = before - entries.len(), "deleted entry");
        Ok(())
    }

    pub fn list_all(&self) -> Vec<Entry> {
        self.storage.load()
    }

    /// Remove the entry with `id`, returning it with where it stood
    pub fn take_by_id(&self, id: &EntryId) -> Result<Option<Taken>> {
        let mut entries = self.storage.load();
        let Some(position) = entries.iter().position(|entry| &entry.id == id) else {
            return Ok(None);
        };

        let entry = entries.remove(position);
        let next = entries.get(position).map(|following| following.id.clone());
        self.storage.save(&entries)?;

        tracing::debug!(id = %id, position, "took entry");
        Ok(Some(Taken {
            position,
            next,
            entry,
        }))
    }

    /// Put an entry back in front of `next`.
    ///
    /// Falls back to `position`, clamped to the list length, when `next` is
    /// `None` or no longer stored.
    pub fn restore(
        &self,
        position: usize,
        next: Option<&EntryId>,
        entry: Entry,
    ) -> Result<Entry> {
        let mut entries = self.storage.load();
        let position = next
            .and_then(|next| entries.iter().position(|e| &e.id == next))
            .unwrap_or_else(|| position.min(entries.len()));
        entries.insert(position, entry.clone());
        self.storage.save(&entries)?;

        tracing::debug!(id = %entry.id, position, "restored entry");
        Ok(entry)
    }
}
