//! Row model shared by every lookup table.

use std::collections::HashMap;

/// Column holding the lookup key in every table.
pub const CODE_COLUMN: &str = "Code";
/// Column holding the optional file reference.
pub const FILEPATH_COLUMN: &str = "Filepath";

/// One sheet row as a header→cell map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRecord {
    values: HashMap<String, String>,
}

impl LookupRecord {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Cell under the given header, if the row has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Cell under the given header, empty string when absent. Display
    /// formatting uses this so a sparse row still renders.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Non-empty file reference, when the row carries one.
    pub fn file_reference(&self) -> Option<&str> {
        self.get(FILEPATH_COLUMN).filter(|v| !v.is_empty())
    }
}

/// First record whose `Code` matches `key` case-insensitively, in table
/// order. Duplicate codes are not validated by the source; first wins.
pub fn find_by_code(records: Vec<LookupRecord>, key: &str) -> Option<LookupRecord> {
    records
        .into_iter()
        .find(|record| record.field(CODE_COLUMN).eq_ignore_ascii_case(key))
}
