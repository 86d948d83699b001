use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::types::{
    self as sdk, CreateReplicationGroupMemberAction, DeleteReplicationGroupMemberAction,
    ReplicationGroupUpdate,
};
use aws_smithy_types::retry::RetryConfig;
use aws_smithy_types::timeout::TimeoutConfig;
use tracing::debug;

use replica_core::{
    ReplicaDescription, ReplicaStatus, ReplicaUpdate, TableDescription, TableService, TableStatus,
};

use crate::config::ClientConfig;
use crate::error::DynamoError;
use crate::Result;

/// DynamoDB client for the two operations replica provisioning needs.
/// One attempt per call; the SDK's retry layer is disabled.
#[derive(Debug, Clone)]
pub struct DynamoClient {
    client: aws_sdk_dynamodb::Client,
    region: String,
}

impl DynamoClient {
    /// Load the shared AWS configuration, then apply `config`'s overrides.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(credentials) = config.credentials.clone() {
            loader = loader.credentials_provider(credentials);
        }
        let sdk_config = loader.load().await;
        Self::from_sdk_config(&sdk_config, &config)
    }

    /// Build from an already-loaded [`SdkConfig`]. The region must be known
    /// by now, either from `config` or from the default chain.
    pub fn from_sdk_config(sdk_config: &SdkConfig, config: &ClientConfig) -> Result<Self> {
        let region = config
            .region
            .clone()
            .or_else(|| sdk_config.region().map(ToString::to_string))
            .ok_or_else(|| {
                DynamoError::Config("no region configured: pass --region or set AWS_REGION".into())
            })?;

        let timeouts = TimeoutConfig::builder()
            .operation_timeout(config.timeout)
            .build();
        let mut builder = aws_sdk_dynamodb::config::Builder::from(sdk_config)
            .region(Region::new(region.clone()))
            .timeout_config(timeouts)
            .retry_config(RetryConfig::disabled());
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        debug!(
            %region,
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            timeout_secs = config.timeout.as_secs(),
            "dynamodb client ready"
        );
        Ok(Self {
            client: aws_sdk_dynamodb::Client::from_conf(builder.build()),
            region,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl TableService for DynamoClient {
    type Error = DynamoError;

    async fn describe_table(&self, table_name: &str) -> Result<TableDescription> {
        let output = self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| DynamoError::from_sdk("DescribeTable", e))?;
        Ok(output.table().map(table_description).unwrap_or_default())
    }

    async fn update_table(
        &self,
        table_name: &str,
        update: &ReplicaUpdate,
    ) -> Result<TableDescription> {
        let output = self
            .client
            .update_table()
            .table_name(table_name)
            .replica_updates(replication_group_update(update)?)
            .send()
            .await
            .map_err(|e| DynamoError::from_sdk("UpdateTable", e))?;
        Ok(output
            .table_description()
            .map(table_description)
            .unwrap_or_default())
    }
}

// ─── SDK type mapping ─────────────────────────────────────────────────────

fn replication_group_update(update: &ReplicaUpdate) -> Result<ReplicationGroupUpdate> {
    let builder = ReplicationGroupUpdate::builder();
    let builder = match update {
        ReplicaUpdate::Add { region_name } => builder.create(
            CreateReplicationGroupMemberAction::builder()
                .region_name(region_name.clone())
                .build()?,
        ),
        ReplicaUpdate::Remove { region_name } => builder.delete(
            DeleteReplicationGroupMemberAction::builder()
                .region_name(region_name.clone())
                .build()?,
        ),
    };
    Ok(builder.build())
}

fn table_description(table: &sdk::TableDescription) -> TableDescription {
    TableDescription {
        table_name: table.table_name().map(str::to_owned),
        table_status: table.table_status().map(|s| TableStatus::from(s.as_str())),
        replicas: table
            .replicas()
            .iter()
            .filter_map(replica_description)
            .collect(),
    }
}

// Descriptors without a region cannot be matched against an event.
fn replica_description(replica: &sdk::ReplicaDescription) -> Option<ReplicaDescription> {
    Some(ReplicaDescription {
        region_name: replica.region_name()?.to_string(),
        replica_status: replica
            .replica_status()
            .map(|s| ReplicaStatus::from(s.as_str())),
        replica_status_description: replica.replica_status_description().map(str::to_owned),
        replica_status_percent_progress: replica
            .replica_status_percent_progress()
            .map(str::to_owned),
    })
}
