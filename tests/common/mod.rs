//! Shared fixtures for integration tests.
#![allow(dead_code)]

use rowgrid::types::{RowId, RowRecord, RowStatus};

/// Build a single row.
pub fn row(id: RowId, name: &str, role: &str, status: RowStatus) -> RowRecord {
    RowRecord {
        id,
        name: name.to_string(),
        role: role.to_string(),
        status,
    }
}

/// A small hand-built dataset with duplicate role and status values,
/// deliberately out of order on every column.
pub fn crew() -> Vec<RowRecord> {
    vec![
        row(1, "Mallory", "Developer", RowStatus::Active),
        row(2, "Alice", "Manager", RowStatus::Inactive),
        row(3, "Bob", "Developer", RowStatus::Active),
        row(4, "Eve", "Manager", RowStatus::Active),
        row(5, "Carol", "Developer", RowStatus::Inactive),
    ]
}

/// Ids of `rows` in their current order.
pub fn ids(rows: &[RowRecord]) -> Vec<RowId> {
    rows.iter().map(|r| r.id).collect()
}
