//! Ledger entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Whether an entry adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            _ => Err(format!(
                "Invalid entry type: '{}'. Valid types are: income, expense",
                s
            )),
        }
    }
}

/// Opaque entry identifier.
///
/// Only uniqueness is meaningful; ids carry no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Allocate a fresh id
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated entry that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub kind: EntryType,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// A stored ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl Entry {
    /// Build an entry from a candidate under the given id
    pub fn from_candidate(id: EntryId, candidate: Candidate) -> Self {
        Entry {
            id,
            kind: candidate.kind,
            category: candidate.category,
            amount: candidate.amount,
            date: candidate.date,
        }
    }
}
