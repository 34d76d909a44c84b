//! Deterministic sample dataset.
//!
//! The reference data source: sequential ids, "Employee N" names, roles
//! cycling every third row, alternating status. Used by the CLI, the
//! benchmarks and the test fixtures.

use crate::types::{RowId, RowRecord, RowStatus};

/// Generate `count` sample rows with unique sequential ids.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_rows(count: usize) -> Vec<RowRecord> {
    (0..count)
        .map(|i| RowRecord {
            id: i as RowId,
            name: format!("Employee {}", i + 1),
            role: if i % 3 == 0 { "Developer" } else { "Manager" }.to_string(),
            status: if i % 2 == 0 {
                RowStatus::Active
            } else {
                RowStatus::Inactive
            },
        })
        .collect()
}
