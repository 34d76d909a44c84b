//! Column sort engine.
//!
//! Pure: (rows, spec) in, new ordered copy out. The row store is never
//! mutated from here. Recomputed wholesale once per sort request, O(n log n)
//! over the full dataset; never invoked per scroll or per keystroke.

use std::cmp::Ordering;

use crate::types::{Field, RowRecord, SortDirection, SortSpec};

/// Produce the view order for the given sort spec.
///
/// `None` returns the store order unchanged. The result is always a fresh
/// copy; callers must not rely on reference identity. Equal keys keep their
/// relative order (stable sort), so repeated sorts over duplicate values
/// are reproducible across runs.
pub fn sorted_view(rows: &[RowRecord], spec: Option<SortSpec>) -> Vec<RowRecord> {
    let mut view = rows.to_vec();
    let Some(spec) = spec else {
        return view;
    };

    view.sort_by(|a, b| {
        let ord = compare_field(a, b, spec.column);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    view
}

/// Natural order of a single column: numeric for the identity field,
/// lexicographic for text, Active before Inactive for status.
fn compare_field(a: &RowRecord, b: &RowRecord, column: Field) -> Ordering {
    match column {
        Field::Id => a.id.cmp(&b.id),
        Field::Name => a.name.cmp(&b.name),
        Field::Role => a.role.cmp(&b.role),
        Field::Status => a.status.cmp(&b.status),
    }
}
