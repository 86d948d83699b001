//! Snapshot of live table state, as returned by the remote table service.
//!
//! Field names follow the service's PascalCase wire format so the same
//! types decode `DescribeTable` and `UpdateTable` responses directly. Status
//! strings the service may add later decode to `Unknown` rather than failing.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TableStatus / ReplicaStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Creating,
    Updating,
    Deleting,
    Active,
    InaccessibleEncryptionCredentials,
    Archiving,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicaStatus {
    Creating,
    CreationFailed,
    Updating,
    Deleting,
    Active,
    RegionDisabled,
    InaccessibleEncryptionCredentials,
    #[serde(other)]
    Unknown,
}

impl From<&str> for TableStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => Self::Creating,
            "UPDATING" => Self::Updating,
            "DELETING" => Self::Deleting,
            "ACTIVE" => Self::Active,
            "INACCESSIBLE_ENCRYPTION_CREDENTIALS" => Self::InaccessibleEncryptionCredentials,
            "ARCHIVING" => Self::Archiving,
            "ARCHIVED" => Self::Archived,
            _ => Self::Unknown,
        }
    }
}

impl From<&str> for ReplicaStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => Self::Creating,
            "CREATION_FAILED" => Self::CreationFailed,
            "UPDATING" => Self::Updating,
            "DELETING" => Self::Deleting,
            "ACTIVE" => Self::Active,
            "REGION_DISABLED" => Self::RegionDisabled,
            "INACCESSIBLE_ENCRYPTION_CREDENTIALS" => Self::InaccessibleEncryptionCredentials,
            _ => Self::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// ReplicaDescription
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaDescription {
    pub region_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_status: Option<ReplicaStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_status_description: Option<String>,
    /// Percentage string such as `"42.5"`, reported while a replica is being
    /// created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_status_percent_progress: Option<String>,
}

impl ReplicaDescription {
    pub fn new(region_name: impl Into<String>, status: ReplicaStatus) -> Self {
        Self {
            region_name: region_name.into(),
            replica_status: Some(status),
            replica_status_description: None,
            replica_status_percent_progress: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.replica_status == Some(ReplicaStatus::Active)
    }
}

// ---------------------------------------------------------------------------
// TableDescription
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_status: Option<TableStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replicas: Vec<ReplicaDescription>,
}

impl TableDescription {
    pub fn new(table_name: impl Into<String>, status: TableStatus) -> Self {
        Self {
            table_name: Some(table_name.into()),
            table_status: Some(status),
            replicas: Vec::new(),
        }
    }

    pub fn with_replica(mut self, region_name: impl Into<String>, status: ReplicaStatus) -> Self {
        self.replicas.push(ReplicaDescription::new(region_name, status));
        self
    }

    pub fn is_active(&self) -> bool {
        self.table_status == Some(TableStatus::Active)
    }

    /// The replica descriptor for `region`, if the table lists one in any
    /// status.
    pub fn replica(&self, region: &str) -> Option<&ReplicaDescription> {
        self.replicas.iter().find(|r| r.region_name == region)
    }
}
