//! Column and dataset abstraction
//!
//! A generic key-indexed table: each metric builder contributes one or more
//! named columns mapping a period key to a value, and the orchestrator joins
//! them over one shared key column. A key absent from a column renders as a
//! missing cell, never as zero, so "no data" stays distinguishable from
//! "measured zero".

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

/// Error assembling a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("column '{header}' has a value for key {key}, which is not in the key column")]
    OrphanKey { header: String, key: String },
}

/// A named, key-indexed column of optional values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column<K: Ord> {
    header: String,
    values: BTreeMap<K, f64>,
}

impl<K: Ord> Column<K> {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            values: BTreeMap::new(),
        }
    }

    /// Build a column from key/value pairs.
    ///
    /// One value per key: a repeated key keeps the last value, but builders
    /// produce at most one value per group so this does not arise in
    /// practice.
    pub fn from_entries(
        header: impl Into<String>,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            header: header.into(),
            values: entries.into_iter().collect(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Record the value for a key
    pub fn insert(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// The value at a key, or `None` when the key was never observed
    pub fn value_at(&self, key: &K) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// A wide table: one key column plus an ordered list of data columns
#[derive(Debug, Clone, Serialize)]
pub struct Dataset<K: Ord> {
    keys: Vec<K>,
    columns: Vec<Column<K>>,
}

impl<K: Ord + Display> Dataset<K> {
    /// Assemble a dataset, rejecting any column holding a key outside the
    /// key column's domain.
    pub fn new(keys: Vec<K>, columns: Vec<Column<K>>) -> Result<Self, DatasetError> {
        for column in &columns {
            if let Some(orphan) = column.keys().find(|&k| !keys.contains(k)) {
                return Err(DatasetError::OrphanKey {
                    header: column.header().to_string(),
                    key: orphan.to_string(),
                });
            }
        }
        Ok(Self { keys, columns })
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn columns(&self) -> &[Column<K>] {
        &self.columns
    }

    /// Column headers in output order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::header)
    }

    /// Iterate rows in key-column order; absent cells are `None`
    pub fn rows(&self) -> impl Iterator<Item = (&K, Vec<Option<f64>>)> {
        self.keys.iter().map(move |key| {
            let cells = self.columns.iter().map(|c| c.value_at(key)).collect();
            (key, cells)
        })
    }
}
