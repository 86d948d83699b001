//! Event phase: decide which replica change a lifecycle event requires and
//! submit it.
//!
//! Create and Delete map directly to an add or a remove. Update is
//! ambiguous: it fires both when the table was replaced (the new table has
//! no replica yet) and when an unrelated property changed (the replica is
//! already there). Live state is the only reliable way to tell them apart,
//! so Update describes the table before deciding.

use tracing::{debug, info};

use crate::service::{ReplicaUpdate, TableService};
use crate::table::TableDescription;
use crate::types::{LifecycleEvent, OnEventResponse, RequestType};

/// Pure decision table for the event phase.
///
/// `live` is only consulted for Update; Create and Delete never read it.
/// An Update with no live snapshot is treated as "no replica present".
pub fn plan(
    request_type: RequestType,
    live: Option<&TableDescription>,
    region: &str,
) -> Option<ReplicaUpdate> {
    match request_type {
        RequestType::Create => Some(ReplicaUpdate::add(region)),
        RequestType::Delete => Some(ReplicaUpdate::remove(region)),
        RequestType::Update => {
            let replica_exists = live.is_some_and(|table| table.replica(region).is_some());
            if replica_exists {
                None
            } else {
                Some(ReplicaUpdate::add(region))
            }
        }
    }
}

/// `{table}-{region}` for Create and Update; `None` for Delete.
pub fn physical_resource_id(
    request_type: RequestType,
    table_name: &str,
    region: &str,
) -> Option<String> {
    match request_type {
        RequestType::Create | RequestType::Update => Some(format!("{table_name}-{region}")),
        RequestType::Delete => None,
    }
}

/// Handle the event phase: describe (Update only), submit at most one
/// replica change, and report the physical resource id.
///
/// Remote failures are returned unchanged. Re-invoking after a failure is
/// safe: Create/Delete resubmit the same directive and Update re-reads live
/// state first.
pub async fn on_event<S: TableService>(
    service: &S,
    event: &LifecycleEvent,
) -> Result<OnEventResponse, S::Error> {
    info!(event = %event.redacted(), "received lifecycle event");

    let table = event.table_name();
    let region = event.region();

    let live = match event.request_type {
        RequestType::Update => {
            let description = service.describe_table(table).await?;
            debug!(table, ?description, "describe table");
            Some(description)
        }
        RequestType::Create | RequestType::Delete => None,
    };

    match plan(event.request_type, live.as_ref(), region) {
        Some(update) => {
            info!(table, request_type = %event.request_type, "submitting {update}");
            let description = service.update_table(table, &update).await?;
            debug!(table, ?description, "update table");
        }
        None => {
            info!(
                table,
                region, "skipping table update, a replica in '{region}' already exists"
            );
        }
    }

    Ok(OnEventResponse {
        physical_resource_id: physical_resource_id(event.request_type, table, region),
    })
}
