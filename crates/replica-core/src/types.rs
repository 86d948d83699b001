use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::io::Read;

use crate::error::{EventError, Result};

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Lifecycle transition requested by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// ResourceProperties
// ---------------------------------------------------------------------------

/// Properties of the replica resource as declared in the template.
///
/// The orchestrator stringifies every property value, so
/// `SkipReplicationCompletedWait` usually arrives as `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    pub table_name: String,
    pub region: String,
    /// Declare completion as soon as the table is active, without waiting
    /// for the replica itself to report `ACTIVE`. This weakens the
    /// completion guarantee and is off unless explicitly requested.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub skip_replication_completed_wait: bool,
}

impl ResourceProperties {
    pub fn new(table_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            region: region.into(),
            skip_replication_completed_wait: false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(EventError::MissingProperty("TableName"));
        }
        if self.region.trim().is_empty() {
            return Err(EventError::MissingProperty("Region"));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Only a literal `true` (boolean or the exact string) enables the flag.
fn deserialize_flag<'de, D>(d: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<Flag> = Option::deserialize(d)?;
    Ok(match flag {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s == "true",
        None => false,
    })
}

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// A custom-resource lifecycle event, as delivered to both the event phase
/// and every completion check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    pub request_type: RequestType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
    #[serde(rename = "ResponseURL", default, skip_serializing_if = "Option::is_none")]
    pub response_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_id: Option<String>,
    /// Set on Update and Delete, and on every completion check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub resource_properties: ResourceProperties,
    /// Previous properties on Update. Kept opaque: the old declaration may
    /// predate the current property schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_resource_properties: Option<serde_json::Value>,
}

impl LifecycleEvent {
    /// Build a minimal event, mostly useful for dry runs and tests.
    pub fn new(request_type: RequestType, properties: ResourceProperties) -> Self {
        Self {
            request_type,
            service_token: None,
            response_url: None,
            stack_id: None,
            request_id: None,
            logical_resource_id: None,
            physical_resource_id: None,
            resource_type: None,
            resource_properties: properties,
            old_resource_properties: None,
        }
    }

    /// Parse and validate an event from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let event: Self = serde_json::from_str(json)?;
        event.resource_properties.validate()?;
        Ok(event)
    }

    /// Parse and validate an event from a reader (stdin, a file).
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let event: Self = serde_json::from_reader(reader)?;
        event.resource_properties.validate()?;
        Ok(event)
    }

    pub fn table_name(&self) -> &str {
        &self.resource_properties.table_name
    }

    pub fn region(&self) -> &str {
        &self.resource_properties.region
    }

    /// JSON rendering for logs. The pre-signed response URL is a bearer
    /// credential and is masked.
    pub fn redacted(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let Some(url) = value.get_mut("ResponseURL") {
            *url = serde_json::Value::String("...".into());
        }
        value
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Result of the event phase. `PhysicalResourceId` is omitted on Delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OnEventResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
}

/// Result of a completion check. `false` means "poll again".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsCompleteResponse {
    pub is_complete: bool,
}
