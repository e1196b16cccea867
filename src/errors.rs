use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
