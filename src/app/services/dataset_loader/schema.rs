//! Column mapping and schema validation for the station dataset
//!
//! This module analyzes CSV headers to build a column-name-to-index mapping
//! and enforces the required column contract. Missing required columns are a
//! fatal validation error for the whole dataset; extra columns are ignored.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping from header names to field indices
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping (case-sensitive)
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze column headers and build the name-to-index mapping
    ///
    /// Header names are trimmed. When a name appears more than once, the
    /// first occurrence wins.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            name_to_index.entry(column_name).or_insert(index);
        }

        ColumnMapping { name_to_index }
    }

    /// Check that all required columns are present
    ///
    /// # Errors
    /// Returns `Error::Schema` naming every missing column. No partial
    /// validation is performed; the caller must reject the dataset wholesale.
    pub fn validate_required(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !self.name_to_index.contains_key(**column))
            .map(|column| (*column).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::schema(missing))
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of columns in the mapping
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
