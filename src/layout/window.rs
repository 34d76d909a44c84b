//! Scroll offset to row range windowing.
//!
//! The calculator is a pure function of its inputs: no hidden state, no
//! caching, recomputed on every scroll event. Cost is O(visible rows),
//! independent of the dataset size.

use crate::types::{VirtualRow, VirtualWindow};

/// Extra rows included beyond the geometrically visible range, to absorb
/// the latency between a scroll event and the next render pass.
pub const OVERSCAN: usize = 5;

/// Compute the window of rows the presentation layer must materialize.
///
/// `scroll_offset` is expected pre-clamped to `[0, item_count * item_height]`
/// by the caller; out-of-range values are tolerated and clamp here as well.
/// Degenerate geometry (zero items, non-positive heights) yields an empty
/// window rather than an error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_window(
    item_count: usize,
    item_height: f32,
    container_height: f32,
    scroll_offset: f32,
) -> VirtualWindow {
    if item_count == 0 || item_height <= 0.0 || container_height <= 0.0 {
        return VirtualWindow::empty();
    }

    let total_extent = item_count as f32 * item_height;

    // start = floor(offset / height), clamped so end never exceeds item_count
    let start = ((scroll_offset.max(0.0) / item_height).floor() as usize).min(item_count);
    let visible_count = (container_height / item_height).ceil() as usize;
    let end = (start + visible_count + OVERSCAN).min(item_count);

    let rows = (start..end)
        .map(|index| VirtualRow {
            index,
            offset: index as f32 * item_height,
        })
        .collect();

    VirtualWindow {
        start,
        end,
        total_extent,
        rows,
    }
}
