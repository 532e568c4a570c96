use std::path::PathBuf;

use thiserror::Error;

/// Fatal discovery failures, reported to the caller before any file is
/// processed. Per-file parse failures are not here: those are recovered
/// locally by the aggregator and never abort a run.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// A named root path does not exist or is not a directory.
    #[error("results folder not found or not a directory: {}", .0.display())]
    BadRoot(PathBuf),

    /// Zero candidate files found when the caller requires at least one.
    #[error("no files matched the expected naming patterns under {}", .0.display())]
    EmptyDiscovery(PathBuf),
}
