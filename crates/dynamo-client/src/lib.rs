//! DynamoDB binding for [`replica_core::TableService`].
//!
//! Wraps `aws-sdk-dynamodb`. Region and credentials resolve through the
//! shared AWS configuration (environment, profiles, web identity, container
//! and instance roles) unless [`ClientConfig`] overrides them. Only
//! `DescribeTable` and `UpdateTable` are exposed.
//!
//! ```rust,ignore
//! use dynamo_client::{ClientConfig, DynamoClient};
//! use replica_core::TableService;
//!
//! let client = DynamoClient::new(ClientConfig::new().with_region("us-east-1")).await?;
//! let table = client.describe_table("Orders").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::DynamoClient;
pub use config::{ClientConfig, Credentials, DEFAULT_TIMEOUT};
pub use error::DynamoError;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, DynamoError>;
