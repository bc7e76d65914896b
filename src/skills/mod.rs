//! Skill variants and their activation windows

pub mod pool;
pub mod variant;
pub mod windows;

pub use pool::{reduction_count, reduction_values, SkillPool};
pub use variant::{effective_recurrence, SkillVariant};
pub use windows::{generate_windows, SkillWindowSet};
