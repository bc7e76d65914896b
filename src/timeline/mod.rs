pub mod merge;

pub use merge::{merge_intervals, merge_window_sets};
