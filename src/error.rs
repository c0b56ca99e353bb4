//! Error types for budgetbook

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for budgetbook application
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Not a budgetbook directory: {0}")]
    NotBudgetDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BudgetError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BudgetError::NotBudgetDirectory(_) => 2,
            BudgetError::Validation(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BudgetError::NotBudgetDirectory(path) => {
                format!(
                    "Not a budgetbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'budgetbook init' in this directory to create a new ledger\n\
                    • Navigate to an existing budgetbook directory\n\
                    • Set BUDGETBOOK_ROOT environment variable to your ledger path",
                    path.display()
                )
            }
            BudgetError::Validation(reason) => {
                format!(
                    "Please fill in all the fields correctly. ({})\n\n\
                    Required fields:\n\
                    • --type income|expense\n\
                    • --category <label>\n\
                    • --amount <positive number>\n\
                    • --date <date>\n\n\
                    Example:\n\
                    budgetbook add --type expense --category Rent --amount 1200 --date 2024-03-01",
                    reason
                )
            }
            BudgetError::Config(msg) => {
                if msg.contains("Invalid edit mode") {
                    format!(
                        "{}\n\n\
                        Valid edit modes: discard, restore\n\
                        Example: budgetbook config edit_mode restore",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BudgetError
pub type Result<T> = std::result::Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_budget_directory_suggestion() {
        let err = BudgetError::NotBudgetDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("budgetbook init"));
        assert!(msg.contains("BUDGETBOOK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = BudgetError::Validation(ValidationError::NonPositiveAmount);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Please fill in all the fields correctly."));
        assert!(msg.contains("--amount"));
        assert!(msg.contains("budgetbook add"));
    }

    #[test]
    fn test_config_invalid_edit_mode_suggestions() {
        let err = BudgetError::Config("Invalid edit mode: 'xyz'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("discard, restore"));
        assert!(msg.contains("budgetbook config edit_mode restore"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            BudgetError::NotBudgetDirectory(PathBuf::from("/")).exit_code(),
            2
        );
        assert_eq!(
            BudgetError::Validation(ValidationError::MissingField("date")).exit_code(),
            3
        );
        assert_eq!(BudgetError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BudgetError::Config("plain message".to_string());
        assert_eq!(err.display_with_suggestions(), "plain message");
    }
}
