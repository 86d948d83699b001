pub mod is_complete;
pub mod on_event;
pub mod plan;

use anyhow::{Context, Result};
use replica_core::LifecycleEvent;
use std::path::Path;

/// Load a lifecycle event from `path`, or from stdin when `path` is `-`.
pub fn read_event(path: &Path) -> Result<LifecycleEvent> {
    if path == Path::new("-") {
        return LifecycleEvent::from_reader(std::io::stdin().lock())
            .context("failed to read lifecycle event from stdin");
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open event file '{}'", path.display()))?;
    LifecycleEvent::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("invalid lifecycle event in '{}'", path.display()))
}
