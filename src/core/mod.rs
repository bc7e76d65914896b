pub mod config;
pub mod error;
pub mod interval;
pub mod time_format;

pub use config::{PlannerConfig, RouteConfig, SearchConfig, SkillConfig, StationStop};
pub use error::{Result, UptimeError};
pub use interval::{round2, total_duration, Interval};
pub use time_format::format_time;
