//! Duplicate launcher - starts another ruler process with the same settings.
//!
//! Fire-and-forget: the child is never waited on and nothing flows back to
//! the parent.

use crate::params::StartupParams;
use anyhow::{Context, Result};
use std::process::Command;

pub fn spawn_duplicate(params: &StartupParams) -> Result<()> {
    let exe = std::env::current_exe().context("Failed to locate the ruler executable")?;

    let child = Command::new(&exe)
        .args(params.to_args())
        .spawn()
        .with_context(|| format!("Failed to launch {}", exe.display()))?;

    tracing::info!(pid = child.id(), params = %params, "Spawned duplicate ruler");
    Ok(())
}
