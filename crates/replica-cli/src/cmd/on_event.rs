use anyhow::{Context, Result};
use std::path::Path;

use crate::connect::ConnectionArgs;
use crate::output::print_json;

pub async fn run(conn: &ConnectionArgs, event_path: &Path, pretty: bool) -> Result<()> {
    let event = super::read_event(event_path)?;
    let client = conn.connect().await?;

    let response = replica_core::on_event(&client, &event)
        .await
        .with_context(|| {
            format!(
                "{} of replica '{}' for table '{}' failed",
                event.request_type,
                event.region(),
                event.table_name()
            )
        })?;

    print_json(&response, pretty)
}
