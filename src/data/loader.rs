use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::filter::RegionFilter;
use super::model::{ContentShape, RawPoint, SourceFile};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Extract all qualifying points from one discovered file. Dispatch by the
/// content shape resolved at discovery time.
///
/// Supported shapes:
/// * keyed JSON – object of per-channel records with optional
///   `brain_region`, `x`, `y`, `z` fields (millimeters)
/// * tabular – Slicer fiducial rows (`.fcsv`), 14 positional columns,
///   `#` comment lines, no header
///
/// A returned `Err` means the whole file is unusable (unreadable or
/// malformed); callers skip the file and continue. Records missing a
/// coordinate are skipped silently and never fail the file.
pub fn extract_points(file: &SourceFile, filter: &RegionFilter) -> Result<Vec<RawPoint>> {
    match file.shape() {
        ContentShape::KeyedJson => extract_keyed_json(file.path(), filter),
        ContentShape::Tabular => extract_fcsv(file.path()),
    }
}

// ---------------------------------------------------------------------------
// Keyed-JSON extractor
// ---------------------------------------------------------------------------

/// One per-channel record. Every field is optional; presence of x/y/z is
/// checked explicitly rather than trusting the file.
#[derive(Debug, Deserialize)]
struct ChannelRecord {
    #[serde(default)]
    brain_region: Option<String>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    z: Option<f64>,
}

/// Expected JSON schema:
///
/// ```json
/// {
///   "LFP1": { "brain_region": "MD", "x": 5.7, "y": 5.3, "z": 4.2 },
///   "LFP2": { "brain_region": "PVT", "x": 5.6, "y": 5.4, "z": 4.0 },
///   ...
/// }
/// ```
fn extract_keyed_json(path: &Path, filter: &RegionFilter) -> Result<Vec<RawPoint>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    let channels = root
        .as_object()
        .context("expected a top-level JSON object keyed by channel")?;

    let mut points = Vec::new();

    for (key, value) in channels {
        if !value.is_object() {
            continue;
        }
        let record: ChannelRecord = match serde_json::from_value(value.clone()) {
            Ok(r) => r,
            Err(e) => {
                debug!("{}: channel {key}: malformed record: {e}", path.display());
                continue;
            }
        };

        if !filter.passes(record.brain_region.as_deref()) {
            continue;
        }
        let (Some(x), Some(y), Some(z)) = (record.x, record.y, record.z) else {
            debug!("{}: channel {key}: missing coordinate, skipped", path.display());
            continue;
        };

        points.push(RawPoint {
            x,
            y,
            z,
            region: record.brain_region,
            id: Some(key.clone()),
        });
    }

    Ok(points)
}

// ---------------------------------------------------------------------------
// Tabular (fcsv) extractor
// ---------------------------------------------------------------------------

/// One fiducial row. The full 14-column layout is declared so the reader
/// enforces row arity; only id and the coordinates are consumed.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FcsvRow {
    id: String,
    x: f64,
    y: f64,
    z: f64,
    ow: f64,
    ox: f64,
    oy: f64,
    oz: f64,
    vis: i64,
    sel: i64,
    lock: i64,
    label: String,
    desc: String,
    associated_node_id: String,
}

/// The fcsv shape carries no region label, so the region filter does not
/// apply to it.
fn extract_fcsv(path: &Path) -> Result<Vec<RawPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening fcsv")?;

    let mut points = Vec::new();

    for (row_no, result) in reader.deserialize::<FcsvRow>().enumerate() {
        let row = result.with_context(|| format!("fcsv row {row_no}"))?;
        points.push(RawPoint {
            x: row.x,
            y: row.y,
            z: row.z,
            region: None,
            id: Some(row.id),
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::NamingPattern;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn json_source(path: PathBuf) -> SourceFile {
        SourceFile::new(path, NamingPattern::CcfChannel)
    }

    #[test]
    fn extracts_filtered_channels_from_keyed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "ccf_channel_0.json",
            r#"{
                "LFP1": { "brain_region": "MD",  "x": 1.0, "y": 2.0, "z": 3.0 },
                "LFP2": { "brain_region": "VPM", "x": 4.0, "y": 5.0, "z": 6.0 },
                "meta": "not a record"
            }"#,
        );

        let filter = RegionFilter::new(["MD"]);
        let points = extract_points(&json_source(path), &filter).unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id.as_deref(), Some("LFP1"));
        assert_eq!((points[0].x, points[0].y, points[0].z), (1.0, 2.0, 3.0));
        assert_eq!(points[0].region.as_deref(), Some("MD"));
    }

    #[test]
    fn missing_coordinate_skips_the_record_not_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "ccf_channel_1.json",
            r#"{
                "a": { "brain_region": "MD", "x": 1.0, "y": 2.0 },
                "b": { "brain_region": "MD", "x": 1.0, "y": 2.0, "z": 3.0 }
            }"#,
        );

        let points = extract_points(&json_source(path), &RegionFilter::disabled()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id.as_deref(), Some("b"));
    }

    #[test]
    fn unlabeled_json_record_fails_a_non_empty_filter() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "ccf_channel_2.json",
            r#"{ "a": { "x": 1.0, "y": 2.0, "z": 3.0 } }"#,
        );

        let filter = RegionFilter::new(["MD"]);
        let points = extract_points(&json_source(path), &filter).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn malformed_json_fails_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "ccf_channel_3.json", "{ not json");
        let result = extract_points(&json_source(path), &RegionFilter::disabled());
        assert!(result.is_err());
    }

    #[test]
    fn top_level_array_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "ccf_channel_4.json", "[1, 2, 3]");
        let result = extract_points(&json_source(path), &RegionFilter::disabled());
        assert!(result.is_err());
    }

    #[test]
    fn parses_fcsv_rows_and_ignores_comments() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "ProbeA_Shank1.fcsv",
            "# Markups fiducial file version = 4.11\n\
             # CoordinateSystem = LPS\n\
             P-1,1.0,2.0,3.0,0,0,0,1,1,1,0,F-1,,vtkMRMLModelNode4\n\
             P-2,4.0,5.0,6.0,0,0,0,1,1,1,0,F-2,,vtkMRMLModelNode4\n",
        );

        let source = SourceFile::new(path, NamingPattern::Fcsv);
        // Non-empty filter is bypassed for the tabular shape.
        let points = extract_points(&source, &RegionFilter::new(["MD"])).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id.as_deref(), Some("P-1"));
        assert_eq!((points[1].x, points[1].y, points[1].z), (4.0, 5.0, 6.0));
        assert!(points[0].region.is_none());
    }

    #[test]
    fn fcsv_with_wrong_column_count_fails_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "ProbeA.fcsv", "P-1,1.0,2.0,3.0\n");
        let source = SourceFile::new(path, NamingPattern::Fcsv);
        assert!(extract_points(&source, &RegionFilter::disabled()).is_err());
    }
}
