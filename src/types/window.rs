use serde::Serialize;

/// One row the presentation layer must draw, with its absolute vertical
/// position inside the scrollable track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRow {
    /// Index into the currently sorted view.
    pub index: usize,
    /// Vertical position in logical pixels (`index * item_height`).
    pub offset: f32,
}

/// The minimal contiguous slice of the sorted view that covers the
/// viewport, plus overscan.
///
/// `[start, end)` is half-open; `0 <= start <= end <= item_count` always
/// holds. Derived data: recomputed from current inputs on every scroll or
/// resize, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWindow {
    pub start: usize,
    pub end: usize,
    /// Full content height; the host sizes its scroll track with this so
    /// native scrollbars reflect true content length.
    pub total_extent: f32,
    pub rows: Vec<VirtualRow>,
}

impl VirtualWindow {
    /// An empty window (zero items or degenerate geometry).
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            total_extent: 0.0,
            rows: Vec::new(),
        }
    }

    /// Number of rows the presentation layer will materialize.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
