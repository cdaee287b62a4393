//! Expense store backed by a single JSON file
//!
//! The whole file is read once when the store is loaded and rewritten in
//! full on every save. There is no locking: two processes saving at the same
//! time race, and the later write wins.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::reports::ExpenseSummary;

use super::file_io::{read_json_if_exists, write_json_atomic};

/// A record in the data file that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based position in the file's array
    pub position: usize,
    pub reason: String,
}

/// Non-fatal problem hit while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file as a whole was unusable; the store came back empty
    Unreadable { path: PathBuf, reason: String },
    /// Some records were left out; the others loaded normally
    SkippedRecords {
        path: PathBuf,
        skipped: Vec<SkippedRecord>,
    },
}

impl LoadWarning {
    /// File the warning is about
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::SkippedRecords { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, reason } => write!(
                f,
                "ignoring unreadable expense file {} ({}); starting with an empty expense list",
                path.display(),
                reason
            ),
            Self::SkippedRecords { path, skipped } => {
                write!(f, "skipping {} unreadable record(s) in {}", skipped.len(), path.display())?;
                for record in skipped {
                    write!(f, "; record {}: {}", record.position, record.reason)?;
                }
                write!(f, "; they will be dropped the next time the file is saved")
            }
        }
    }
}

/// What [`ExpenseStore::load`] produced
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: ExpenseStore,
    pub warning: Option<LoadWarning>,
}

/// In-memory expense list plus id allocation state
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
    records: Vec<Expense>,
    /// Strictly greater than every id in `records`; never decreases
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create an empty store that will save to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }

    /// Load the store from `path`
    ///
    /// A missing file gives an empty store. A file that cannot be read, is
    /// not a JSON array, or breaks the id rules gives an empty store with a
    /// warning. Array entries that do not decode as expenses are skipped with
    /// a warning and the rest are kept. This never fails.
    pub fn load(path: impl Into<PathBuf>) -> LoadOutcome {
        let path = path.into();

        let loaded = read_json_if_exists::<Vec<Value>, _>(&path).and_then(|raw| match raw {
            Some(raw) => {
                let (records, skipped) = decode_records(raw);
                Self::from_records(path.clone(), records).map(|store| (store, skipped))
            }
            None => {
                debug!(path = %path.display(), "no expense file yet");
                Ok((Self::empty(path.clone()), Vec::new()))
            }
        });

        match loaded {
            Ok((store, skipped)) => {
                debug!(
                    path = %path.display(),
                    count = store.len(),
                    skipped = skipped.len(),
                    next_id = %store.next_id,
                    "loaded expenses"
                );
                let warning = (!skipped.is_empty())
                    .then(|| LoadWarning::SkippedRecords { path, skipped });
                LoadOutcome { store, warning }
            }
            Err(err) => {
                let reason = match err {
                    ExpenseError::Parse(msg) | ExpenseError::Io(msg) => msg,
                    other => other.to_string(),
                };
                LoadOutcome {
                    store: Self::empty(path.clone()),
                    warning: Some(LoadWarning::Unreadable { path, reason }),
                }
            }
        }
    }

    /// Build a store from already-parsed records
    ///
    /// Rejects ids of 0, duplicate ids, and an id with no successor as
    /// malformed content.
    pub fn from_records(path: impl Into<PathBuf>, records: Vec<Expense>) -> ExpenseResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for expense in &records {
            if !expense.id.is_valid() {
                return Err(ExpenseError::Parse(
                    "expense ids must be positive, found 0".to_string(),
                ));
            }
            if !seen.insert(expense.id) {
                return Err(ExpenseError::Parse(format!(
                    "duplicate expense id {}",
                    expense.id
                )));
            }
        }

        let next_id = match records.iter().map(|e| e.id).max() {
            None => ExpenseId::FIRST,
            Some(max) => max.checked_next().ok_or_else(|| {
                ExpenseError::Parse(format!("expense id {} leaves no room for new ids", max))
            })?,
        };

        Ok(Self {
            path: path.into(),
            records,
            next_id,
        })
    }

    /// Write every record back to the store's file
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.records)?;
        info!(path = %self.path.display(), count = self.records.len(), "saved expenses");
        Ok(())
    }

    /// Append a new expense and return it
    ///
    /// `date` comes from the caller so the store never reads a clock. Fails
    /// without changing the store once every id has been handed out.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> ExpenseResult<Expense> {
        let following = self.next_id.checked_next().ok_or_else(|| {
            ExpenseError::Overflow(format!("no expense ids left after {}", self.next_id))
        })?;

        let expense = Expense::new(self.next_id, date, description, amount);
        self.next_id = following;
        self.records.push(expense.clone());
        debug!(id = %expense.id, "added expense");
        Ok(expense)
    }

    /// Remove the expense with `id`, keeping the others in order
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let removed = self.records.remove(index);
        debug!(id = %removed.id, "deleted expense");
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.records
    }

    /// Total of all expenses, or of those in one month (1-12)
    pub fn summary(&self, month: Option<u32>) -> ExpenseResult<ExpenseSummary> {
        ExpenseSummary::generate(&self.records, month)
    }

    /// The id the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// File this store loads from and saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decode each array entry on its own so one bad record does not cost the rest
fn decode_records(raw: Vec<Value>) -> (Vec<Expense>, Vec<SkippedRecord>) {
    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();

    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Expense>(value) {
            Ok(expense) => records.push(expense),
            Err(err) => skipped.push(SkippedRecord {
                position: index + 1,
                reason: err.to_string(),
            }),
        }
    }

    (records, skipped)
}
