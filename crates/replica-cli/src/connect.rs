use anyhow::{Context, Result};
use dynamo_client::{ClientConfig, DynamoClient};
use std::time::Duration;

/// Connection settings shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Region the table lives in [falls back to the AWS default region chain]
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// DynamoDB endpoint override (local emulator, VPC endpoint)
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL_DYNAMODB")]
    pub endpoint_url: Option<String>,

    /// Per-operation timeout in seconds
    #[arg(
        long,
        global = true,
        env = "REPLICA_PROVIDER_TIMEOUT_SECS",
        default_value = "10"
    )]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            config = config.with_region(region);
        }
        if let Some(endpoint) = self.endpoint_url.as_deref().filter(|e| !e.is_empty()) {
            config = config.with_endpoint(endpoint);
        }
        config
    }

    /// Build a client from flags plus the shared AWS configuration.
    /// Credentials come from the SDK's default chain.
    pub async fn connect(&self) -> Result<DynamoClient> {
        let client = DynamoClient::new(self.client_config())
            .await
            .context("failed to build DynamoDB client")?;
        tracing::debug!(region = client.region(), "connected");
        Ok(client)
    }
}
