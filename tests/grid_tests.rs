//! Grid engine integration tests
//!
//! Drives the whole pipeline the way a host would: load, scroll, sort,
//! edit, resolve. Covers the reference 50,000-row scenario and the
//! interplay between an active sort and a committed edit.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::crew;
use rowgrid::editor::EditPhase;
use rowgrid::error::GridError;
use rowgrid::grid::GridEngine;
use rowgrid::sample::sample_rows;
use rowgrid::types::{Field, SortDirection};

fn crew_engine() -> GridEngine {
    GridEngine::new(crew(), 40.0, 600.0).unwrap()
}

// =============================================================================
// REFERENCE SCENARIO (50k rows)
// =============================================================================

#[test]
fn test_50k_scroll_scenario() {
    let mut engine = GridEngine::new(sample_rows(50_000), 40.0, 600.0).unwrap();
    engine.set_scroll_offset(4000.0);

    let window = engine.window();
    assert_eq!(window.start, 100);
    assert_eq!(window.end, 120);
    assert_eq!(window.total_extent, 2_000_000.0);

    let visible = engine.rows_in_window(&window);
    assert_eq!(visible.len(), 20);
    assert_eq!(visible[0].id, 100);
    assert_eq!(visible[0].name, "Employee 101");
}

#[test]
fn test_scroll_does_not_reorder_rows() {
    let mut engine = GridEngine::new(sample_rows(50_000), 40.0, 600.0).unwrap();
    engine.toggle_sort(Field::Name);
    let first = engine.rows()[0].clone();

    engine.set_scroll_offset(123_456.0);
    engine.set_scroll_offset(0.0);

    assert_eq!(engine.rows()[0], first, "scrolling must never re-sort");
}

#[test]
fn test_scroll_offset_clamps_to_extent() {
    let mut engine = crew_engine();

    engine.set_scroll_offset(1_000_000.0);
    assert_eq!(engine.scroll_offset(), engine.total_extent());

    engine.set_scroll_offset(-50.0);
    assert_eq!(engine.scroll_offset(), 0.0);
}

#[test]
fn test_total_extent_tracks_row_count() {
    let engine = crew_engine();
    assert_eq!(engine.total_extent(), 5.0 * 40.0);
}

// =============================================================================
// SORT THROUGH THE ENGINE
// =============================================================================

#[test]
fn test_header_toggle_sorts_view() {
    let mut engine = crew_engine();

    engine.toggle_sort(Field::Name);
    let spec = engine.sort_spec().unwrap();
    assert_eq!(spec.column, Field::Name);
    assert_eq!(spec.direction, SortDirection::Ascending);
    assert_eq!(engine.rows()[0].name, "Alice");

    engine.toggle_sort(Field::Name);
    assert_eq!(
        engine.sort_spec().unwrap().direction,
        SortDirection::Descending
    );
    assert_eq!(engine.rows()[0].name, "Mallory");
}

#[test]
fn test_window_operates_on_sorted_view() {
    let mut engine = GridEngine::new(sample_rows(1000), 40.0, 600.0).unwrap();

    engine.toggle_sort(Field::Id);
    engine.toggle_sort(Field::Id); // descending
    let window = engine.window();
    let visible = engine.rows_in_window(&window);

    assert_eq!(visible[0].id, 999, "window must slice the sorted view");
}

// =============================================================================
// EDIT LIFECYCLE THROUGH THE ENGINE
// =============================================================================

#[test]
fn test_edit_round_trip_mutates_row() {
    let mut engine = crew_engine();

    assert!(engine.begin_edit(2, Field::Name).is_none());
    engine.update_draft("Alicia");
    let request = engine.commit().unwrap();
    assert_eq!(request.value, "Alicia");
    assert!(engine.is_saving());

    engine.resolve_commit(Ok(()));

    assert_eq!(engine.edit_phase(), EditPhase::Idle);
    assert_eq!(engine.row(2).unwrap().name, "Alicia");
}

#[test]
fn test_cancel_leaves_rows_untouched() {
    let mut engine = crew_engine();

    engine.begin_edit(2, Field::Name);
    engine.update_draft("X");
    engine.cancel_edit();

    assert_eq!(engine.edit_phase(), EditPhase::Idle);
    assert_eq!(engine.row(2).unwrap().name, "Alice");
}

#[test]
fn test_failed_commit_keeps_session_and_rows() {
    let mut engine = crew_engine();

    engine.begin_edit(2, Field::Name);
    engine.update_draft("X");
    let _ = engine.commit().unwrap();
    engine.resolve_commit(Err(GridError::Persistence("timeout".to_string())));

    assert_eq!(engine.edit_phase(), EditPhase::Editing);
    assert_eq!(engine.edit_session().unwrap().draft, "X");
    assert_eq!(engine.row(2).unwrap().name, "Alice");
    assert!(!engine.is_saving());
}

#[test]
fn test_non_editable_begin_is_ignored() {
    let mut engine = crew_engine();

    assert!(engine.begin_edit(2, Field::Status).is_none());
    assert_eq!(engine.edit_phase(), EditPhase::Idle);
    assert!(engine.edit_session().is_none());
}

#[test]
fn test_committed_edit_resorts_the_view() {
    let mut engine = crew_engine();
    engine.toggle_sort(Field::Name); // Alice, Bob, Carol, Eve, Mallory

    engine.begin_edit(2, Field::Name); // Alice
    engine.update_draft("Zoe");
    let _ = engine.commit().unwrap();
    engine.resolve_commit(Ok(()));

    let names: Vec<&str> = engine.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["Bob", "Carol", "Eve", "Mallory", "Zoe"],
        "the renamed row must sort to its new position"
    );
}

#[test]
fn test_blur_through_engine_commits() {
    let mut engine = crew_engine();

    engine.begin_edit(2, Field::Name);
    engine.update_draft("Alicia");
    let request = engine.blur().unwrap();
    assert_eq!(request.row_id, 2);

    engine.resolve_commit(Ok(()));
    assert_eq!(engine.row(2).unwrap().name, "Alicia");
}

#[test]
fn test_edit_survives_scrolling_and_sorting() {
    // The session targets a row id, not a view index; reordering the view
    // underneath it must not corrupt the edit.
    let mut engine = crew_engine();

    engine.begin_edit(2, Field::Name);
    engine.update_draft("Alicia");

    engine.set_scroll_offset(80.0);
    engine.toggle_sort(Field::Role);

    let session = engine.edit_session().unwrap();
    assert_eq!(session.row_id, 2);
    assert_eq!(session.draft, "Alicia");

    let _ = engine.commit().unwrap();
    engine.resolve_commit(Ok(()));
    assert_eq!(engine.row(2).unwrap().name, "Alicia");
}

// =============================================================================
// RELOAD
// =============================================================================

#[test]
fn test_reload_resets_sort_scroll_and_session() {
    let mut engine = crew_engine();

    engine.toggle_sort(Field::Name);
    engine.set_scroll_offset(80.0);
    engine.begin_edit(2, Field::Name);

    engine.reload(sample_rows(10)).unwrap();

    assert!(engine.sort_spec().is_none());
    assert_eq!(engine.scroll_offset(), 0.0);
    assert_eq!(engine.edit_phase(), EditPhase::Idle);
    assert_eq!(engine.row_count(), 10);
}

#[test]
fn test_reload_rejects_duplicate_ids() {
    let mut engine = crew_engine();
    let mut rows = crew();
    rows.push(common::row(
        1,
        "Copy",
        "Manager",
        rowgrid::types::RowStatus::Active,
    ));

    assert!(engine.reload(rows).is_err());
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_non_positive_geometry_falls_back_to_defaults() {
    let engine = GridEngine::new(crew(), 0.0, -10.0).unwrap();
    assert_eq!(engine.item_height(), 40.0);
    assert_eq!(engine.container_height(), 600.0);
}

#[test]
fn test_empty_engine_has_empty_window() {
    let engine = GridEngine::new(Vec::new(), 40.0, 600.0).unwrap();
    let window = engine.window();
    assert!(window.is_empty());
    assert!(engine.rows_in_window(&window).is_empty());
}
