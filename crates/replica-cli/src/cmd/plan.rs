use anyhow::{Context, Result};
use replica_core::planner::{physical_resource_id, plan};
use replica_core::{ReplicaUpdate, RequestType, TableService};
use serde::Serialize;

use crate::connect::ConnectionArgs;
use crate::output::print_json;

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum RequestKind {
    Create,
    Update,
    Delete,
}

impl From<RequestKind> for RequestType {
    fn from(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Create => RequestType::Create,
            RequestKind::Update => RequestType::Update,
            RequestKind::Delete => RequestType::Delete,
        }
    }
}

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    request_type: RequestType,
    table_name: &'a str,
    replica_region: &'a str,
    /// `null` when no mutating call would be made.
    action: Option<ReplicaUpdate>,
    physical_resource_id: Option<String>,
}

/// Dry run of the event phase: print what would be submitted, never mutate.
///
/// Only Update needs live state, so Create and Delete plans work offline.
pub async fn run(
    conn: &ConnectionArgs,
    table: &str,
    replica_region: &str,
    kind: RequestKind,
    pretty: bool,
) -> Result<()> {
    let request_type = RequestType::from(kind);

    let live = match request_type {
        RequestType::Update => {
            let client = conn.connect().await?;
            let description = client
                .describe_table(table)
                .await
                .with_context(|| format!("failed to describe table '{table}'"))?;
            Some(description)
        }
        RequestType::Create | RequestType::Delete => None,
    };

    let action = plan(request_type, live.as_ref(), replica_region);
    let label = action
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);
    tracing::info!(table, replica_region, %request_type, action = %label, "dry run");

    print_json(
        &PlanReport {
            request_type,
            table_name: table,
            replica_region,
            physical_resource_id: physical_resource_id(request_type, table, replica_region),
            action,
        },
        pretty,
    )
}
