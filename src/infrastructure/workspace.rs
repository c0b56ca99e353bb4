//! Ledger directory discovery and local state files

use crate::domain::FormState;
use crate::error::{BudgetError, Result};
use crate::infrastructure::storage::JsonFileStorage;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that marks a ledger root
pub const BOOK_DIR: &str = ".budgetbook";

const FORM_FILE: &str = "form.toml";

/// A ledger root directory and the files under its `.budgetbook/`
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the ledger root.
    /// Checks BUDGETBOOK_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BUDGETBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_book_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(BudgetError::Config(format!(
                    "BUDGETBOOK_ROOT is set to '{}' but no .budgetbook directory found. \
                    Run 'budgetbook init' in that directory or unset BUDGETBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the ledger root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_book_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BudgetError::NotBudgetDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_book_dir(path: &Path) -> bool {
        path.join(BOOK_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_book_dir(&self.root)
    }

    /// Create the .budgetbook directory
    pub fn initialize(&self) -> Result<()> {
        let book_dir = self.root.join(BOOK_DIR);

        if book_dir.exists() {
            return Err(BudgetError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&book_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Entry storage backing this ledger
    pub fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(&self.root)
    }

    fn form_path(&self) -> PathBuf {
        self.root.join(BOOK_DIR).join(FORM_FILE)
    }

    /// Load the form left behind by the previous command.
    ///
    /// A missing or unreadable form file yields an empty form.
    pub fn load_form(&self) -> FormState {
        let path = self.form_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FormState::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read form, starting empty"
                );
                return FormState::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(form) => form,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "form is not valid TOML, starting empty"
                );
                FormState::default()
            }
        }
    }

    /// Persist the form; an empty form removes the file
    pub fn save_form(&self, form: &FormState) -> Result<()> {
        let path = self.form_path();

        if form.is_empty() {
            if path.exists() {
                fs::remove_file(&path)?;
            }
            return Ok(());
        }

        let contents = toml::to_string_pretty(form)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}
