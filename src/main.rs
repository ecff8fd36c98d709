//! Ruler - an on-screen pixel ruler.
//!
//! Usage: `ruler [width height isVertical opacity isLocked topMost]`
//!
//! With no arguments the ruler opens at its default size. Duplicates are
//! launched with the full parameter list.

use anyhow::Context as _;
use ruler::StartupParams;

fn main() -> anyhow::Result<()> {
    ruler::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let params = StartupParams::from_args(&args).context("Invalid startup parameters")?;

    tracing::info!(%params, "Starting ruler");
    ruler::app::gui::run(params);
    Ok(())
}
