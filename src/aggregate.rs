//! Grouping of extracted point sets by session or probe key, plus run
//! statistics.

use std::collections::BTreeMap;
use std::fmt;

use log::warn;

use crate::data::filter::RegionFilter;
use crate::data::loader::extract_points;
use crate::data::model::{DisplayPoint, SourceFile};
use crate::transform::lps_to_pvl;

// ---------------------------------------------------------------------------
// Group key derivation
// ---------------------------------------------------------------------------

/// How files map to output groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// One group per file stem.
    Session,
    /// One group per probe: `_fit` and `_Shank<digits>` suffixes stripped,
    /// so all shanks of one probe land in the same group.
    Probe,
}

impl GroupMode {
    fn key_for(self, file: &SourceFile) -> String {
        match self {
            GroupMode::Session => file.session_key(),
            GroupMode::Probe => file.probe_key(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One output group: a display name and its normalized points. A group with
/// zero points is retained so the run statistics see it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub points: Vec<DisplayPoint>,
}

impl Group {
    pub fn count(&self) -> usize {
        self.points.len()
    }
}

/// Whole-run statistics over per-group point counts. Always recomputed from
/// the final groups, never mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub groups: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
}

impl RunSummary {
    /// Compute the summary from per-group counts. An empty distribution
    /// reports zeros rather than failing.
    pub fn from_counts(counts: &[usize]) -> Self {
        let groups = counts.len();
        let total: usize = counts.iter().sum();
        if groups == 0 {
            return RunSummary {
                total: 0,
                groups: 0,
                min: 0,
                max: 0,
                mean: 0.0,
                median: 0.0,
            };
        }

        let mut sorted = counts.to_vec();
        sorted.sort_unstable();
        let median = if groups % 2 == 1 {
            sorted[groups / 2] as f64
        } else {
            (sorted[groups / 2 - 1] + sorted[groups / 2]) as f64 / 2.0
        };

        RunSummary {
            total,
            groups,
            min: sorted[0],
            max: sorted[groups - 1],
            mean: total as f64 / groups as f64,
            median,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {}, max: {}, mean: {:.1}, median: {:.1}",
            self.min, self.max, self.mean, self.median
        )
    }
}

/// The result of one batch pass, owned by the caller. No state survives the
/// pass anywhere else.
#[derive(Debug, Clone)]
pub struct PassOutput {
    /// Groups in key order.
    pub groups: Vec<Group>,
    pub summary: RunSummary,
}

// ---------------------------------------------------------------------------
// The pass
// ---------------------------------------------------------------------------

/// Run one batch pass over the discovered files: extract, filter, transform
/// and group every qualifying point, then compute the run statistics.
///
/// A file that fails to parse is skipped with a warning and contributes no
/// group; a file that parses but yields no qualifying points still creates
/// its (empty) group. For a fixed, sorted file list and a fixed filter the
/// output is exactly reproducible.
pub fn run_pass(files: &[SourceFile], filter: &RegionFilter, mode: GroupMode) -> PassOutput {
    let mut buckets: BTreeMap<String, Vec<DisplayPoint>> = BTreeMap::new();

    for file in files {
        let raw = match extract_points(file, filter) {
            Ok(points) => points,
            Err(e) => {
                warn!("skipping {}: {e:#}", file.path().display());
                continue;
            }
        };
        buckets
            .entry(mode.key_for(file))
            .or_default()
            .extend(raw.iter().map(lps_to_pvl));
    }

    let groups: Vec<Group> = buckets
        .into_iter()
        .map(|(key, points)| Group { key, points })
        .collect();
    let counts: Vec<usize> = groups.iter().map(Group::count).collect();
    let summary = RunSummary::from_counts(&counts);

    PassOutput { groups, summary }
}
