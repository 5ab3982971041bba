//! Diff reduction before prompting.

pub mod window;

pub use window::{LineKind, NO_DIFF_PLACEHOLDER, classify_line, window_diff};
