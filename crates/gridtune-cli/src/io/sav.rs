use std::path::Path;

use anyhow::Context;
use gridtune_core::TargetVector;

/// Read and decode the save file, attaching the path to whatever goes wrong
/// underneath (I/O or format).
pub fn read_targets(path: &str) -> anyhow::Result<TargetVector> {
    let target = gridtune_core::read_targets(Path::new(path))
        .with_context(|| format!("read {path}"))?;
    Ok(target)
}
