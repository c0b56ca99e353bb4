//! Entry form state and edit modes

use crate::domain::entry::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw text held by the entry form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl EntryForm {
    /// Populate the form from a stored entry
    pub fn from_entry(entry: &Entry) -> Self {
        EntryForm {
            kind: entry.kind.to_string(),
            category: entry.category.clone(),
            amount: entry.amount.to_string(),
            date: entry.date.clone(),
        }
    }

    /// Overlay the given fields on top of the current form contents
    pub fn merged_with(&self, overrides: FormInput) -> Self {
        EntryForm {
            kind: overrides.kind.unwrap_or_else(|| self.kind.clone()),
            category: overrides.category.unwrap_or_else(|| self.category.clone()),
            amount: overrides.amount.unwrap_or_else(|| self.amount.clone()),
            date: overrides.date.unwrap_or_else(|| self.date.clone()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind.is_empty()
            && self.category.is_empty()
            && self.amount.is_empty()
            && self.date.is_empty()
    }
}

/// Fields supplied with a single submission; `None` keeps the form value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
}

/// An entry pulled out of the list for editing, remembered so it can be put back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSession {
    pub position: usize,
    /// Entry that followed the original, `None` if it was last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<EntryId>,
    pub original: Entry,
}

/// Everything the form holds between events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub fields: EntryForm,
    /// Set only while editing under [`EditMode::Restore`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<EditSession>,
}

impl FormState {
    pub fn is_empty(&self) -> bool {
        self.fields.is_blank() && self.editing.is_none()
    }
}

/// What happens to an entry whose edit is abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// The entry is deleted when editing starts and is lost unless resubmitted
    #[default]
    Discard,
    /// Cancelling puts the original entry back; resubmitting keeps its id and position
    Restore,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Discard => "discard",
            EditMode::Restore => "restore",
        }
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(EditMode::Discard),
            "restore" => Ok(EditMode::Restore),
            _ => Err(format!(
                "Invalid edit mode: '{}'. Valid edit modes are: discard, restore",
                s
            )),
        }
    }
}
