//! Path management for expense-cli
//!
//! The data file defaults to `expenses.json` in the current working
//! directory. A relative `--file` is also resolved against the working
//! directory; absolute paths are used as given.

use std::path::{Path, PathBuf};

/// File name used when no `--file` is given
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Manages the paths used by expense-cli
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional command-line override
    pub fn new(file: Option<PathBuf>) -> Self {
        let data_file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_file }
    }

    /// Path of the JSON file holding all expenses
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Scratch file written before being renamed over `path`
///
/// `expenses.json` -> `expenses.json.tmp`, in the same directory so the
/// rename stays on one filesystem.
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
