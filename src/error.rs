//! Structured error types for rowgrid.
//!
//! Invalid edit targets and stale mutation ids are deliberately NOT errors;
//! they are absorbed as no-ops where they occur. Only contract breaches at
//! the crate boundary surface here.

use crate::types::RowId;

/// All errors that can occur in the grid engine.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The row data source supplied two records with the same identity.
    #[error("duplicate row id: {0}")]
    DuplicateRowId(RowId),

    /// A column name from the host did not match any known field.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The persistence collaborator reported a transient failure.
    #[error("persistence failed: {0}")]
    Persistence(String),

    /// Catch-all for string errors at the JS boundary.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
