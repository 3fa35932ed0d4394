use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Unknown bin-range key: {0}")]
    UnknownBinKey(String),

    #[error("Empty event series")]
    EmptySeries,

    #[error("Empty scan range")]
    EmptyScanRange,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
