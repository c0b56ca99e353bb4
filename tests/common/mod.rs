#![allow(dead_code)]

use assert_cmd::Command;
use budgetbook::domain::Entry;
use budgetbook::infrastructure::{EntryStorage, JsonFileStorage};
use std::path::Path;

pub fn budgetbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("budgetbook").unwrap();
    cmd.env_remove("BUDGETBOOK_ROOT");
    cmd.env_remove("BUDGETBOOK_LOG");
    cmd
}

/// Initialize a ledger in `dir` with the given edit mode
pub fn init_ledger(dir: &Path, edit_mode: &str) {
    budgetbook_cmd()
        .arg("init")
        .arg(dir)
        .arg("--edit-mode")
        .arg(edit_mode)
        .assert()
        .success();
}

/// Submit a complete entry from within `dir`
pub fn add_entry(dir: &Path, kind: &str, category: &str, amount: &str, date: &str) {
    budgetbook_cmd()
        .current_dir(dir)
        .args(["add", "--type", kind, "--category", category])
        .args(["--amount", amount, "--date", date])
        .assert()
        .success();
}

/// Entries as currently persisted under `dir`
pub fn stored_entries(dir: &Path) -> Vec<Entry> {
    JsonFileStorage::new(dir).load()
}
