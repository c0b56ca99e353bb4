//! Infrastructure layer - Persistence and ledger directory handling

pub mod config;
pub mod repository;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use repository::{EntryRepository, Taken};
pub use storage::{EntryStorage, JsonFileStorage, MemoryStorage, ENTRIES_KEY};
pub use workspace::Workspace;
