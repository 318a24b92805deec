use thiserror::Error;

#[derive(Debug, Error)]
pub enum HlsEvalError {
    #[error("Invalid synthesis request: {0}")]
    Request(String),

    #[error("External tool error: {0}")]
    ExternalTool(String),

    #[error("Project directory not found: {0}")]
    ProjectNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
