use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

use crate::table::TableDescription;

// ---------------------------------------------------------------------------
// ReplicaUpdate
// ---------------------------------------------------------------------------

/// A single replica directive for one region.
///
/// Serialises to the service's `ReplicaUpdates` element shape:
/// `{"Create": {"RegionName": "eu-west-1"}}` or
/// `{"Delete": {"RegionName": "eu-west-1"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplicaUpdate {
    #[serde(rename = "Create")]
    Add {
        #[serde(rename = "RegionName")]
        region_name: String,
    },
    #[serde(rename = "Delete")]
    Remove {
        #[serde(rename = "RegionName")]
        region_name: String,
    },
}

impl ReplicaUpdate {
    pub fn add(region: impl Into<String>) -> Self {
        Self::Add {
            region_name: region.into(),
        }
    }

    pub fn remove(region: impl Into<String>) -> Self {
        Self::Remove {
            region_name: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        match self {
            Self::Add { region_name } | Self::Remove { region_name } => region_name,
        }
    }
}

impl fmt::Display for ReplicaUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { region_name } => write!(f, "add replica in '{region_name}'"),
            Self::Remove { region_name } => write!(f, "remove replica in '{region_name}'"),
        }
    }
}

// ---------------------------------------------------------------------------
// TableService
// ---------------------------------------------------------------------------

/// The remote table service the planner and checker talk to.
///
/// Implementations perform exactly one remote call per method and never
/// retry; failures are returned as `Self::Error` and passed through to the
/// caller untouched.
pub trait TableService {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a fresh snapshot of the named table.
    fn describe_table(
        &self,
        table_name: &str,
    ) -> impl Future<Output = Result<TableDescription, Self::Error>> + Send;

    /// Submit a single replica add/remove for the named table. The returned
    /// description only acknowledges acceptance; the replica change itself
    /// completes asynchronously.
    fn update_table(
        &self,
        table_name: &str,
        update: &ReplicaUpdate,
    ) -> impl Future<Output = Result<TableDescription, Self::Error>> + Send;
}
