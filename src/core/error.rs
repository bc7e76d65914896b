use thiserror::Error;

#[derive(Error, Debug)]
pub enum UptimeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Movement simulation stalled before station {station_index} after {iterations} steps")]
    SimulationStall {
        station_index: usize,
        iterations: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UptimeError>;
