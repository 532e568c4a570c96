//! Thin entry point: discover a flat results folder, run a session pass and
//! print per-session counts plus the run statistics.
//!
//! ```text
//! report <results-dir> [region ...]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

use atlas_points::discover::{discover_flat, require_non_empty};
use atlas_points::{run_pass, GroupMode, RegionFilter};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let root: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("usage: report <results-dir> [region ...]")?;
    let filter = RegionFilter::new(args);

    let files = require_non_empty(discover_flat(&root)?, &root)?;
    let output = run_pass(&files, &filter, GroupMode::Session);

    println!("Processed {} sessions.", output.summary.groups);
    println!("Total units across all sessions: {}", output.summary.total);
    println!("Units per session – {}", output.summary);
    println!();
    println!("Units by session:");
    for group in &output.groups {
        println!("  {}: {}", group.key, group.count());
    }

    Ok(())
}
