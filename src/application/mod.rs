//! Application layer - Use cases and orchestration

pub mod controller;
pub mod init;
pub mod manage_config;
pub mod render;

pub use controller::{LedgerController, SubmitOutcome};
pub use manage_config::ConfigService;
pub use render::{Dialogs, EntryRow, Renderer, RowAction, NO_ENTRIES_MESSAGE};
