//! Authoritative row storage.
//!
//! The store owns the canonical ordered collection of rows and is the only
//! component allowed to change a record's field value. Every mutation
//! funnels through [`RowStore::replace_field`], which is called exclusively
//! from the success path of an edit commit.

use std::collections::HashSet;

use crate::error::{GridError, Result};
use crate::types::{Field, RowId, RowRecord};

#[derive(Debug, Default)]
pub struct RowStore {
    rows: Vec<RowRecord>,
}

impl RowStore {
    /// Build a store from the data source's initial collection.
    ///
    /// The data-source contract requires unique identities; a duplicate id
    /// is a hard error, the only one this component can produce.
    pub fn from_records(rows: Vec<RowRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.id) {
                return Err(GridError::DuplicateRowId(row.id));
            }
        }
        Ok(Self { rows })
    }

    /// Full consistent snapshot of the current records, in store order.
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by identity.
    pub fn get(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Sole mutation entry point.
    ///
    /// A stale id (rows are never removed in this system, but the contract
    /// tolerates it) and a non-editable field are both absorbed as no-ops
    /// rather than errors. Returns whether a record actually changed.
    pub fn replace_field(&mut self, id: RowId, field: Field, value: &str) -> bool {
        if !field.is_editable() {
            return false;
        }
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        match field {
            Field::Name => row.name = value.to_string(),
            Field::Role => row.role = value.to_string(),
            Field::Id | Field::Status => return false,
        }
        true
    }
}
