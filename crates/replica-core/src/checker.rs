//! Completion-check phase: decide from live state whether a previously
//! submitted replica change has converged.
//!
//! Convergence is always judged on a fresh describe, never on the outcome of
//! the mutating call, which only acknowledges acceptance. A table that is
//! not itself `ACTIVE` is never complete: its replica statuses may be stale
//! while it transitions.

use tracing::{debug, info};

use crate::service::TableService;
use crate::table::TableDescription;
use crate::types::{IsCompleteResponse, LifecycleEvent, RequestType};

/// Pure completion predicate.
///
/// - Create/Update: table `ACTIVE` and (replica `ACTIVE` or `skip_wait`).
/// - Delete: table `ACTIVE` and no replica listed for `region`.
///
/// `skip_wait` declares completion without confirming replica health. It is
/// a caller-supplied override and has no effect on Delete.
pub fn evaluate(
    request_type: RequestType,
    live: &TableDescription,
    region: &str,
    skip_wait: bool,
) -> bool {
    let table_active = live.is_active();
    let replica = live.replica(region);

    match request_type {
        RequestType::Create | RequestType::Update => {
            table_active && (replica.is_some_and(|r| r.is_active()) || skip_wait)
        }
        RequestType::Delete => table_active && replica.is_none(),
    }
}

/// Handle one completion check: a single describe, no mutation.
///
/// Returns `IsComplete: false` as the normal "poll again" outcome; a failed
/// describe is an error, not `false`.
pub async fn is_complete<S: TableService>(
    service: &S,
    event: &LifecycleEvent,
) -> Result<IsCompleteResponse, S::Error> {
    info!(event = %event.redacted(), "received completion check");

    let table = event.table_name();
    let region = event.region();

    let live = service.describe_table(table).await?;
    debug!(table, description = ?live, "describe table");

    if let Some(replica) = live.replica(region) {
        debug!(
            table,
            region,
            status = ?replica.replica_status,
            progress = replica.replica_status_percent_progress.as_deref().unwrap_or("-"),
            "replica state"
        );
    }

    let skip_wait = event.resource_properties.skip_replication_completed_wait;
    let is_complete = evaluate(event.request_type, &live, region, skip_wait);
    info!(
        table,
        region,
        request_type = %event.request_type,
        table_status = ?live.table_status,
        skip_wait,
        is_complete,
        "completion check"
    );

    Ok(IsCompleteResponse { is_complete })
}
