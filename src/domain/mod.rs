//! Domain layer - Ledger entries, form state, validation and totals

pub mod entry;
pub mod form;
pub mod totals;
pub mod validation;

pub use entry::{Candidate, Entry, EntryId, EntryType};
pub use form::{EditMode, EditSession, EntryForm, FormInput, FormState};
pub use totals::{format_currency, format_currency_grouped, Totals};
pub use validation::{check, validate, ValidationError};
