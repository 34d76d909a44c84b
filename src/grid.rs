//! The grid engine: the state holder the presentation layer drives.
//!
//! Aggregates the row store, sort state, viewport geometry and the edit
//! controller, and exposes the derived outputs (sorted view, virtual
//! window, edit session) the host reads back after each event.
//!
//! Data flows store -> sort -> window; edit intents flow the other way,
//! host -> controller -> store, gated by the persistence collaborator.

use crate::editor::{
    CommitOutcome, CommitRequest, EditController, EditInput, EditPhase, EditSession,
};
use crate::error::Result;
use crate::layout::compute_window;
use crate::sort::sorted_view;
use crate::store::RowStore;
use crate::types::{Field, RowId, RowRecord, SortSpec, VirtualWindow};

/// Default row height in logical pixels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 40.0;

/// Default viewport height in logical pixels.
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 600.0;

pub struct GridEngine {
    store: RowStore,
    sort: Option<SortSpec>,
    /// Current sorted view, a copy in view order. Recomputed on sort
    /// requests and after a successful commit, never per scroll event.
    view: Vec<RowRecord>,
    scroll_offset: f32,
    item_height: f32,
    container_height: f32,
    editor: EditController,
}

impl GridEngine {
    /// Build an engine over the data source's initial collection.
    ///
    /// Fails only when the collection breaches the unique-id contract.
    /// Non-positive geometry falls back to the defaults.
    pub fn new(records: Vec<RowRecord>, item_height: f32, container_height: f32) -> Result<Self> {
        let store = RowStore::from_records(records)?;
        let view = store.rows().to_vec();
        Ok(Self {
            store,
            sort: None,
            view,
            scroll_offset: 0.0,
            item_height: if item_height > 0.0 {
                item_height
            } else {
                DEFAULT_ITEM_HEIGHT
            },
            container_height: if container_height > 0.0 {
                container_height
            } else {
                DEFAULT_CONTAINER_HEIGHT
            },
            editor: EditController::new(),
        })
    }

    /// Replace the dataset wholesale (host reload). Clears the sort, the
    /// scroll position and any open session; geometry is kept.
    pub fn reload(&mut self, records: Vec<RowRecord>) -> Result<()> {
        self.store = RowStore::from_records(records)?;
        self.sort = None;
        self.scroll_offset = 0.0;
        self.editor = EditController::new();
        self.refresh_view();
        Ok(())
    }

    // ---- viewport inputs ----

    /// Scroll-position change from the host, clamped to the content extent.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.total_extent());
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_item_height(&mut self, height: f32) {
        if height > 0.0 {
            self.item_height = height;
            self.set_scroll_offset(self.scroll_offset);
        }
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn set_container_height(&mut self, height: f32) {
        if height > 0.0 {
            self.container_height = height;
        }
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Full content height, for sizing the host's scroll track.
    pub fn total_extent(&self) -> f32 {
        self.view.len() as f32 * self.item_height
    }

    // ---- derived outputs ----

    /// The window of rows to present for the current scroll position.
    pub fn window(&self) -> VirtualWindow {
        compute_window(
            self.view.len(),
            self.item_height,
            self.container_height,
            self.scroll_offset,
        )
    }

    /// The full sorted view, in presentation order.
    pub fn rows(&self) -> &[RowRecord] {
        &self.view
    }

    /// The slice of the sorted view covered by `window`.
    pub fn rows_in_window(&self, window: &VirtualWindow) -> &[RowRecord] {
        self.view.get(window.start..window.end).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.view.len()
    }

    /// Look up a row by identity (store order, unaffected by the sort).
    pub fn row(&self, id: RowId) -> Option<&RowRecord> {
        self.store.get(id)
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    // ---- sort input ----

    /// Column-header activation: toggle the sort and recompute the view.
    pub fn toggle_sort(&mut self, column: Field) {
        self.sort = Some(SortSpec::toggled(self.sort, column));
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = sorted_view(self.store.rows(), self.sort);
        self.set_scroll_offset(self.scroll_offset);
    }

    // ---- edit inputs ----

    /// Cell-edit start. A returned request is a commit-on-blur of the
    /// previously open session and must be dispatched to persistence.
    pub fn begin_edit(&mut self, row_id: RowId, field: Field) -> Option<CommitRequest> {
        self.editor.begin_edit(&self.store, row_id, field)
    }

    /// Raw editor input (confirm/abort/draft).
    pub fn edit_input(&mut self, input: EditInput) -> Option<CommitRequest> {
        self.editor.handle_input(input)
    }

    /// Per-keystroke draft replacement.
    pub fn update_draft(&mut self, text: &str) {
        self.editor.update_draft(text);
    }

    /// Explicit confirm.
    pub fn commit(&mut self) -> Option<CommitRequest> {
        self.editor.commit()
    }

    /// Explicit abort.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Loss-of-focus signal.
    pub fn blur(&mut self) -> Option<CommitRequest> {
        self.editor.blur()
    }

    /// Persistence resolution. On success the store mutates and the view
    /// is recomputed so the edited row sorts to its new position.
    pub fn resolve_commit(&mut self, outcome: CommitOutcome) -> bool {
        let changed = self.editor.resolve_commit(&mut self.store, outcome);
        if changed {
            self.refresh_view();
        }
        changed
    }

    // ---- edit outputs ----

    pub fn edit_phase(&self) -> EditPhase {
        self.editor.phase()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editor.session()
    }

    /// True while a commit is in flight (host shows its saving indicator).
    pub fn is_saving(&self) -> bool {
        self.editor.is_saving()
    }
}
