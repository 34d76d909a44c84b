use serde::{Deserialize, Serialize};

use super::Field;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The (column, direction) pair driving the current ordering.
///
/// `None` at the holder means no sort is active (the initial state).
/// A spec is replaced wholesale on every header activation; no history
/// is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub column: Field,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: Field, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Compute the spec that results from activating a column header.
    ///
    /// Activating the currently-ascending column flips it to descending;
    /// activating any other column (or a column with no direction yet)
    /// starts ascending. There is no cycle back to the unsorted state.
    pub fn toggled(current: Option<SortSpec>, column: Field) -> SortSpec {
        match current {
            Some(spec) if spec.column == column && spec.direction == SortDirection::Ascending => {
                SortSpec::new(column, SortDirection::Descending)
            }
            _ => SortSpec::new(column, SortDirection::Ascending),
        }
    }
}
