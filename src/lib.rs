//! budgetbook - Income and expense ledger
//!
//! Records income and expense entries through a form, keeps them in a
//! directory-local store and shows the running list with its totals.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BudgetError;
