pub mod combinations;

pub use combinations::{combination_count, combinations_of, combinations_with_repetition};
