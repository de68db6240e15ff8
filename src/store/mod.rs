//! The expense store
//!
//! An ordered, immutable collection of expense records. The store is built
//! once, either from the built-in sample data or from a data file, and only
//! ever handed out by shared reference afterwards.

pub mod loader;
pub mod seed;

use std::path::Path;

use crate::error::FintrixResult;
use crate::models::ExpenseRecord;

pub use loader::{load_records, read_records, DataFormat};

/// Immutable, ordered expense records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Store holding the built-in sample expenses
    pub fn seed() -> Self {
        Self::from_records(seed::seed_records())
    }

    /// Store over the given records, keeping their order
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Store read from a JSON or CSV data file
    pub fn from_file(path: &Path) -> FintrixResult<Self> {
        load_records(path).map(Self::from_records)
    }

    /// Empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Records in their original order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct currency symbols in encounter order
    pub fn currencies(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.currency.as_str()) {
                seen.push(&record.currency);
            }
        }
        seen
    }

    /// Whether records use more than one currency symbol
    pub fn is_mixed_currency(&self) -> bool {
        self.currencies().len() > 1
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
