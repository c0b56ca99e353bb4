//! Initialize ledger use case

use crate::domain::EditMode;
use crate::error::Result;
use crate::infrastructure::{Config, EntryStorage, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new ledger at the specified path.
pub fn init(path: &Path, currency: Option<String>, edit_mode: EditMode) -> Result<Workspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let mut config = Config::new();
    if let Some(currency) = currency {
        config.currency = currency;
    }
    config.edit_mode = edit_mode;
    workspace.save_config(&config)?;

    // Start with an explicit empty list under the entries key
    workspace.storage().save(&[])?;

    println!("Initialized budgetbook ledger at {}", path.display());
    println!("Edit mode: {}", edit_mode.as_str());

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_and_empty_list() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("ledger");

        let workspace = init(&root, Some("€".to_string()), EditMode::Restore).unwrap();

        assert!(root.join(".budgetbook/config.toml").exists());
        let config = workspace.load_config().unwrap();
        assert_eq!(config.currency, "€");
        assert_eq!(config.edit_mode, EditMode::Restore);

        let blob = fs::read_to_string(root.join(".budgetbook/budgetEntries.json")).unwrap();
        assert_eq!(blob.trim(), "[]");
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), None, EditMode::Discard).unwrap();
        assert!(init(temp.path(), None, EditMode::Discard).is_err());
    }
}
