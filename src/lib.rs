//! rowgrid - headless virtualized data grid engine
//!
//! Keeps tens of thousands of in-memory rows presentable inside a
//! fixed-height viewport without materializing them all:
//! - Scroll windowing with a fixed overscan; O(visible rows) per event
//! - Stable single-column sort with an ascending/descending toggle
//! - At-most-one inline edit session with asynchronous commit; failures
//!   keep the draft so the user can retry
//! - Presentation-agnostic: the host draws, this crate decides what
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { RowGrid, sample_dataset } from 'rowgrid';
//! await init();
//! const grid = new RowGrid(40, 600);
//! grid.load(sample_dataset(50000));
//! grid.set_scroll_offset(4000);
//! const { start, end, rows } = grid.window();
//! ```

// Core modules (native + wasm)
pub mod editor;
pub mod error;
pub mod grid;
pub mod layout;
pub mod sample;
pub mod sort;
pub mod store;
pub mod types;

// JS-facing surface
#[cfg(target_arch = "wasm32")]
pub mod bindings;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use bindings::RowGrid;
pub use error::GridError;
pub use grid::GridEngine;
pub use types::*;

/// Generate the deterministic demo dataset as a JS array of row objects.
///
/// # Errors
/// Returns an error if the rows cannot be serialized for the JS side.
#[wasm_bindgen]
pub fn sample_dataset(count: usize) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&sample::sample_rows(count))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
