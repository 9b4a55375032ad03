use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("workspace path does not exist: {0}")]
    WorkspaceNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("team not found in config: {0}")]
    TeamNotFound(String),

    #[error("event ingestion failed: {0}")]
    IngestFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImpactError>;
