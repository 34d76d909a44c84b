//! Viewport geometry.
//!
//! Maps a scroll position onto the minimal contiguous range of rows that
//! must be presented, with per-row offsets and the total scrollable extent.

mod window;

pub use window::{compute_window, OVERSCAN};
