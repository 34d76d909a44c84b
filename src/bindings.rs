//! JS-facing grid handle (wasm32 only).
//!
//! The presentation layer owns the DOM; this module owns the state. The
//! handle wraps the engine in `Rc<RefCell<..>>` so the asynchronous commit
//! continuation can reach it after the persistence promise settles, and
//! fires an optional change callback so the host knows to re-render.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::editor::{CommitRequest, EditInput};
use crate::error::GridError;
use crate::grid::GridEngine;
use crate::types::{Field, RowId, RowRecord};

/// Delay (ms) of the built-in simulated persistence, used when the host
/// registers no persistence function. Mirrors the reference backend stub.
const SIMULATED_SAVE_DELAY_MS: i32 = 600;

struct SharedState {
    engine: GridEngine,
    /// `(rowId, column, value) -> Promise` supplied by the host.
    persist: Option<Function>,
    /// Fired after every asynchronous state change.
    on_change: Option<Function>,
}

/// The main grid handle exported to JavaScript.
#[wasm_bindgen]
pub struct RowGrid {
    state: Rc<RefCell<SharedState>>,
}

#[wasm_bindgen]
impl RowGrid {
    /// Create an empty grid with the given row and viewport heights
    /// (logical pixels). Load data with [`RowGrid::load`].
    #[wasm_bindgen(constructor)]
    pub fn new(item_height: f32, container_height: f32) -> Result<RowGrid, JsValue> {
        console_error_panic_hook::set_once();

        let engine =
            GridEngine::new(Vec::new(), item_height, container_height).map_err(JsValue::from)?;
        Ok(RowGrid {
            state: Rc::new(RefCell::new(SharedState {
                engine,
                persist: None,
                on_change: None,
            })),
        })
    }

    /// Load the dataset produced by the row data source: an array of
    /// `{id, name, role, status}` objects with unique ids.
    ///
    /// Replaces any previous dataset and clears sort, scroll and edit
    /// state.
    pub fn load(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<RowRecord> =
            serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state
            .borrow_mut()
            .engine
            .reload(rows)
            .map_err(JsValue::from)
    }

    // ---- viewport ----

    /// Scroll-position change from the host's scroll container.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.state.borrow_mut().engine.set_scroll_offset(offset);
    }

    pub fn set_item_height(&mut self, height: f32) {
        self.state.borrow_mut().engine.set_item_height(height);
    }

    pub fn set_container_height(&mut self, height: f32) {
        self.state.borrow_mut().engine.set_container_height(height);
    }

    /// Full content height, for sizing the scroll track.
    pub fn total_extent(&self) -> f32 {
        self.state.borrow().engine.total_extent()
    }

    /// The current virtual window as
    /// `{start, end, totalExtent, rows: [{index, offset}]}`.
    pub fn window(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().engine.window())
    }

    /// The row records inside the current window, in draw order.
    pub fn visible_rows(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        let window = s.engine.window();
        to_js(&s.engine.rows_in_window(&window))
    }

    pub fn row_count(&self) -> usize {
        self.state.borrow().engine.row_count()
    }

    // ---- sort ----

    /// Column-header activation.
    pub fn toggle_sort(&mut self, column: &str) -> Result<(), JsValue> {
        let field: Field = column.parse().map_err(JsValue::from)?;
        self.state.borrow_mut().engine.toggle_sort(field);
        Ok(())
    }

    /// The active sort as `{column, direction}`, or `null` when unsorted.
    pub fn sort_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().engine.sort_spec())
    }

    // ---- editing ----

    /// Register the persistence collaborator:
    /// `(rowId, column, value) -> Promise`. Without one, commits resolve
    /// through the built-in simulated save.
    pub fn set_persistence(&mut self, f: Function) {
        self.state.borrow_mut().persist = Some(f);
    }

    /// Register a callback fired after every asynchronous state change
    /// (commit resolution), so the host can re-render.
    pub fn set_change_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().on_change = callback;
    }

    /// Cell-edit start (double-click on an editable cell). Non-editable
    /// columns and unknown rows are ignored.
    pub fn begin_edit(&mut self, row_id: RowId, column: &str) -> Result<(), JsValue> {
        let field: Field = column.parse().map_err(JsValue::from)?;
        let request = self.state.borrow_mut().engine.begin_edit(row_id, field);
        self.dispatch(request);
        Ok(())
    }

    /// Per-keystroke draft text from the input element.
    pub fn set_draft(&mut self, text: &str) {
        self.state.borrow_mut().engine.update_draft(text);
    }

    /// Keyboard input on the open editor (DOM `KeyboardEvent.key`):
    /// Enter commits, Escape cancels, everything else is left to the
    /// input element.
    pub fn key_down(&mut self, key: &str) {
        let Some(input) = EditInput::from_key(key) else {
            return;
        };
        let request = self.state.borrow_mut().engine.edit_input(input);
        self.dispatch(request);
    }

    /// Explicit confirm.
    pub fn commit(&mut self) {
        let request = self.state.borrow_mut().engine.commit();
        self.dispatch(request);
    }

    /// Explicit abort.
    pub fn cancel(&mut self) {
        self.state.borrow_mut().engine.cancel_edit();
    }

    /// Loss-of-focus signal from the editing cell.
    pub fn blur(&mut self) {
        let request = self.state.borrow_mut().engine.blur();
        self.dispatch(request);
    }

    /// True while a commit is in flight.
    pub fn is_saving(&self) -> bool {
        self.state.borrow().engine.is_saving()
    }

    /// The open session as `{rowId, field, draft}`, or `null`.
    pub fn edit_session(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().engine.edit_session())
    }

    /// The session phase: `"idle"`, `"editing"` or `"committing"`.
    pub fn edit_phase(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().engine.edit_phase())
    }
}

impl RowGrid {
    fn dispatch(&self, request: Option<CommitRequest>) {
        if let Some(request) = request {
            dispatch_commit(&self.state, request);
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Drive one commit through the persistence collaborator.
///
/// The single suspension point: the spawned future awaits the promise,
/// feeds the outcome back into the engine and notifies the host. The
/// engine borrow must not be held across the await.
fn dispatch_commit(state: &Rc<RefCell<SharedState>>, request: CommitRequest) {
    let state = Rc::clone(state);
    spawn_local(async move {
        let promise = {
            let s = state.borrow();
            match &s.persist {
                Some(f) => call_persistence(f, &request),
                None => Some(simulated_save()),
            }
        };

        let outcome = match promise {
            Some(p) => JsFuture::from(p)
                .await
                .map(|_| ())
                .map_err(|e| GridError::Persistence(js_error_text(&e))),
            None => Err(GridError::Persistence(
                "persistence function did not return a promise".to_string(),
            )),
        };

        let callback = {
            let mut s = state.borrow_mut();
            s.engine.resolve_commit(outcome);
            s.on_change.clone()
        };
        if let Some(cb) = callback {
            let _ = cb.call0(&JsValue::NULL);
        }
    });
}

fn call_persistence(f: &Function, request: &CommitRequest) -> Option<Promise> {
    let result = f
        .call3(
            &JsValue::NULL,
            &JsValue::from(request.row_id),
            &JsValue::from_str(request.field.as_str()),
            &JsValue::from_str(&request.value),
        )
        .ok()?;
    result.dyn_into::<Promise>().ok()
}

/// Promise that resolves after a fixed timeout and never fails.
fn simulated_save() -> Promise {
    Promise::new(&mut |resolve, _reject| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                SIMULATED_SAVE_DELAY_MS,
            )
            .is_err()
        {
            let _ = resolve.call0(&JsValue::NULL);
        }
    })
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
