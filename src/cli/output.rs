//! Output formatting and console implementations of the presentation ports

use crate::application::{Dialogs, EntryRow, Renderer, RowAction, NO_ENTRIES_MESSAGE};
use crate::domain::{format_currency, Entry, FormState, Totals};
use std::io::{self, BufRead, Write};

/// Format the entry list for display
pub fn format_entry_list(entries: &[Entry], currency: &str) -> String {
    if entries.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let row = EntryRow::new(entry, currency);
        let actions: Vec<&str> = row
            .actions()
            .iter()
            .map(|action| match action {
                RowAction::Edit(_) => "edit",
                RowAction::Delete(_) => "delete",
            })
            .collect();

        output.push_str(&format!(
            "{}  {} {}  {}  [{} {}]\n",
            row.date,
            row.category,
            row.kind,
            row.amount,
            actions.join("|"),
            row.id
        ));
    }
    output
}

/// Format income, expense and balance, two decimals each
pub fn format_totals(totals: &Totals, currency: &str) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}",
        format_currency(currency, totals.income),
        format_currency(currency, totals.expense),
        format_currency(currency, totals.balance)
    )
}

/// Format the current form contents
pub fn format_form(form: &FormState) -> String {
    if form.is_empty() {
        return "Form is empty".to_string();
    }

    let mut output = format!(
        "type:     {}\ncategory: {}\namount:   {}\ndate:     {}",
        form.fields.kind, form.fields.category, form.fields.amount, form.fields.date
    );
    if let Some(session) = &form.editing {
        output.push_str(&format!(
            "\nediting:  {} (restored on cancel)",
            session.original.id
        ));
    }
    output
}

/// Prints the list and totals to stdout
pub struct ConsoleRenderer {
    currency: String,
}

impl ConsoleRenderer {
    pub fn new(currency: String) -> Self {
        ConsoleRenderer { currency }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_list(&mut self, entries: &[Entry]) {
        println!("{}", format_entry_list(entries, &self.currency).trim_end());
    }

    fn render_totals(&mut self, totals: &Totals) {
        println!();
        println!("{}", format_totals(totals, &self.currency));
    }
}

/// Alerts on stdout, confirmations read from stdin
pub struct ConsoleDialogs {
    assume_yes: bool,
}

impl ConsoleDialogs {
    pub fn new(assume_yes: bool) -> Self {
        ConsoleDialogs { assume_yes }
    }
}

impl Dialogs for ConsoleDialogs {
    fn alert(&mut self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EditSession, EntryForm, EntryId, EntryType};

    fn rent() -> Entry {
        Entry {
            id: EntryId::from("rent-1"),
            kind: EntryType::Expense,
            category: "Rent".to_string(),
            amount: 1200.0,
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], "$"), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[rent()], "$");
        assert_eq!(
            output,
            "2024-03-01  Rent (expense)  $1,200.00  [edit|delete rent-1]\n"
        );
    }

    #[test]
    fn test_format_totals() {
        let totals = Totals::from_entries(&[rent()]);
        assert_eq!(
            format_totals(&totals, "$"),
            "Income:  $0.00\nExpense: $1200.00\nBalance: $-1200.00"
        );
    }

    #[test]
    fn test_format_form() {
        assert_eq!(format_form(&FormState::default()), "Form is empty");

        let form = FormState {
            fields: EntryForm::from_entry(&rent()),
            editing: Some(EditSession {
                position: 0,
                next: None,
                original: rent(),
            }),
        };
        let output = format_form(&form);
        assert!(output.contains("category: Rent"));
        assert!(output.contains("amount:   1200"));
        assert!(output.contains("editing:  rent-1"));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }
}
