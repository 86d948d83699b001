use thiserror::Error;

/// Raised when an incoming lifecycle event cannot be acted on.
///
/// These are detected before any remote call is made.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to parse lifecycle event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required resource property '{0}'")]
    MissingProperty(&'static str),
}

pub type Result<T> = std::result::Result<T, EventError>;
