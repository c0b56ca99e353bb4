//! Presentation ports used by the controller

use crate::domain::{format_currency_grouped, Entry, EntryId, Totals};

/// Message shown in place of the list when there are no entries
pub const NO_ENTRIES_MESSAGE: &str = "No entries found";

/// Something that can show the entry list and the totals.
///
/// Both calls replace whatever was shown before.
pub trait Renderer {
    fn render_list(&mut self, entries: &[Entry]);
    fn render_totals(&mut self, totals: &Totals);
}

/// Blocking user interaction
pub trait Dialogs {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

/// Action a rendered row offers, bound to its entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(EntryId),
    Delete(EntryId),
}

/// Display-ready view of a single entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub id: EntryId,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub date: String,
}

impl EntryRow {
    pub fn new(entry: &Entry, currency: &str) -> Self {
        EntryRow {
            id: entry.id.clone(),
            category: entry.category.clone(),
            kind: format!("({})", entry.kind),
            amount: format_currency_grouped(currency, entry.amount),
            date: entry.date.clone(),
        }
    }

    pub fn actions(&self) -> [RowAction; 2] {
        [
            RowAction::Edit(self.id.clone()),
            RowAction::Delete(self.id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryType;

    #[test]
    fn test_row_formats_entry() {
        let entry = Entry {
            id: EntryId::from("r1"),
            kind: EntryType::Expense,
            category: "Rent".to_string(),
            amount: 1200.0,
            date: "2024-03-01".to_string(),
        };

        let row = EntryRow::new(&entry, "$");
        assert_eq!(row.category, "Rent");
        assert_eq!(row.kind, "(expense)");
        assert_eq!(row.amount, "$1,200.00");
        assert_eq!(row.date, "2024-03-01");
        assert_eq!(
            row.actions(),
            [
                RowAction::Edit(EntryId::from("r1")),
                RowAction::Delete(EntryId::from("r1"))
            ]
        );
    }
}
