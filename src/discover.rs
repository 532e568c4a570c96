//! Source file discovery.
//!
//! Three layouts are supported:
//! * flat – one root whose immediate children are session JSON files
//!   (`ccf_channel_*.json` or `*_ccf_loc.json`)
//! * hierarchical – alignment roots laid out as
//!   `<root>/<anything>/<session_prefix>*/<probe_prefix>*/` with the same
//!   JSON patterns in the innermost directories
//! * tracks – one or more roots whose immediate children are `.fcsv`
//!   point-set files
//!
//! Enumeration order is whatever the filesystem yields; callers that need a
//! stable order sort the result. Grouping downstream is keyed, so group
//! output is deterministic either way.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::data::model::{NamingPattern, SourceFile};
use crate::error::DiscoverError;

// ---------------------------------------------------------------------------
// Flat mode
// ---------------------------------------------------------------------------

/// Scan the immediate children of `root` for session JSON files. Zero
/// matches is an empty result, not an error; callers that need at least one
/// file follow up with [`require_non_empty`].
pub fn discover_flat(root: &Path) -> Result<Vec<SourceFile>> {
    let mut found = Vec::new();
    collect_json_files(root, &mut found)?;
    Ok(found)
}

/// Reject an empty discovery result for callers that require at least one
/// candidate file.
pub fn require_non_empty(
    files: Vec<SourceFile>,
    root: &Path,
) -> Result<Vec<SourceFile>, DiscoverError> {
    if files.is_empty() {
        Err(DiscoverError::EmptyDiscovery(root.to_path_buf()))
    } else {
        Ok(files)
    }
}

// ---------------------------------------------------------------------------
// Hierarchical mode
// ---------------------------------------------------------------------------

/// Directory-name prefixes for the fixed three-level alignment layout.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Second-level directories must start with this, e.g. `ecephys_`.
    pub session_prefix: String,
    /// Third-level directories must start with this, e.g. `Probe`.
    pub probe_prefix: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            session_prefix: "ecephys_".to_string(),
            probe_prefix: "Probe".to_string(),
        }
    }
}

/// Walk each root three levels deep (any subfolder, then session-prefixed,
/// then probe-prefixed) and match session JSON files in the innermost
/// directories. Every root must exist and be a directory; that is checked
/// up front, before any file is touched.
pub fn discover_hierarchical(roots: &[PathBuf], config: &WalkConfig) -> Result<Vec<SourceFile>> {
    for root in roots {
        if !root.is_dir() {
            return Err(DiscoverError::BadRoot(root.clone()).into());
        }
    }

    let mut found = Vec::new();
    for root in roots {
        for result_dir in subdirs(root, "")? {
            for session_dir in subdirs(&result_dir, &config.session_prefix)? {
                for probe_dir in subdirs(&session_dir, &config.probe_prefix)? {
                    collect_json_files(&probe_dir, &mut found)?;
                }
            }
        }
    }
    Ok(found)
}

// ---------------------------------------------------------------------------
// Track mode
// ---------------------------------------------------------------------------

/// Gather `.fcsv` point-set files from the immediate children of each root.
/// Every root must exist and be a directory.
pub fn discover_tracks(roots: &[PathBuf]) -> Result<Vec<SourceFile>> {
    for root in roots {
        if !root.is_dir() {
            return Err(DiscoverError::BadRoot(root.clone()).into());
        }
    }

    let mut found = Vec::new();
    for root in roots {
        for entry in read_dir(root)? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches!(NamingPattern::detect(name), Some(NamingPattern::Fcsv)) {
                    found.push(SourceFile::new(path, NamingPattern::Fcsv));
                }
            }
        }
    }
    Ok(found)
}

// ---------------------------------------------------------------------------
// Shared walkers
// ---------------------------------------------------------------------------

/// Push every child of `dir` matching one of the two JSON naming patterns.
fn collect_json_files(dir: &Path, found: &mut Vec<SourceFile>) -> Result<()> {
    for entry in read_dir(dir)? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match NamingPattern::detect(name) {
            Some(pattern @ (NamingPattern::CcfChannel | NamingPattern::CcfLoc)) => {
                found.push(SourceFile::new(path, pattern));
            }
            _ => debug!("ignoring {}", path.display()),
        }
    }
    Ok(())
}

/// Subdirectories of `dir` whose name starts with `prefix` (empty prefix
/// matches any directory).
fn subdirs(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in read_dir(dir)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing {}", dir.display()))
}
