//! Entry point for the collaborator: one call per configuration change

pub mod recompute;
pub mod results;

pub use recompute::recompute;
pub use results::RankedResults;
