use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{BuildError, ProvideErrorMetadata, SdkError};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DynamoError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    Build(#[from] BuildError),

    #[error("{operation} failed: {code}: {message}")]
    Service {
        operation: &'static str,
        status: Option<u16>,
        code: String,
        message: String,
    },

    #[error("{operation} timed out")]
    Timeout { operation: &'static str },

    #[error("{operation} request could not be sent")]
    Transport {
        operation: &'static str,
        retryable: bool,
        #[source]
        source: BoxError,
    },

    #[error("failed to read {operation} response")]
    Response {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

/// Error codes the service documents as safe to retry.
const RETRYABLE_CODES: &[&str] = &[
    "ThrottlingException",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "LimitExceededException",
    "InternalServerError",
    "ServiceUnavailable",
];

impl DynamoError {
    pub(crate) fn from_sdk<E>(operation: &'static str, err: SdkError<E, HttpResponse>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        match err {
            SdkError::ServiceError(_) => Self::Service {
                operation,
                status: err.raw_response().map(|r| r.status().as_u16()),
                code: err.code().unwrap_or("UnknownError").to_string(),
                message: err.message().unwrap_or_default().to_string(),
            },
            SdkError::TimeoutError(_) => Self::Timeout { operation },
            SdkError::ResponseError(_) => Self::Response {
                operation,
                source: Box::new(err),
            },
            SdkError::DispatchFailure(ref failure) => {
                let retryable = failure.is_io() || failure.is_timeout();
                Self::Transport {
                    operation,
                    retryable,
                    source: Box::new(err),
                }
            }
            _ => Self::Transport {
                operation,
                retryable: false,
                source: Box::new(err),
            },
        }
    }

    /// Whether a later re-invocation is likely to succeed. Used for logging;
    /// the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Service { status, code, .. } => {
                status.is_some_and(|s| s >= 500) || RETRYABLE_CODES.contains(&code.as_str())
            }
            Self::Timeout { .. } => true,
            Self::Transport { retryable, .. } => *retryable,
            Self::Config(_) | Self::Build(_) | Self::Response { .. } => false,
        }
    }
}
