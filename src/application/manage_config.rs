//! Config management use case

use crate::domain::EditMode;
use crate::error::{BudgetError, Result};
use crate::infrastructure::{Config, Workspace};
use std::str::FromStr;

/// Service for managing ledger configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "currency" => Ok(config.currency),
            "edit_mode" => Ok(config.edit_mode.as_str().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BudgetError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: currency, edit_mode, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "currency" => {
                config.currency = value.to_string();
            }
            "edit_mode" => {
                config.edit_mode = EditMode::from_str(value).map_err(BudgetError::Config)?;
            }
            "created" => {
                return Err(BudgetError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BudgetError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: currency, edit_mode",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
