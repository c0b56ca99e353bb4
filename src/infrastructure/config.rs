//! Configuration management

use crate::domain::EditMode;
use crate::error::{BudgetError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub edit_mode: EditMode,
    pub created: DateTime<Utc>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            currency: default_currency(),
            edit_mode: EditMode::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .budgetbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".budgetbook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BudgetError::NotBudgetDirectory(path.to_path_buf())
            } else {
                BudgetError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .budgetbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let book_dir = path.join(".budgetbook");
        let config_path = book_dir.join("config.toml");

        if !book_dir.exists() {
            fs::create_dir(&book_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
