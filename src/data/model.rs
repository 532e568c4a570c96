use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// RawPoint – one recorded point as it appears in a localization file
// ---------------------------------------------------------------------------

/// A recorded point in the source anatomical convention: LPS axes,
/// millimeters. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    /// Left (mm).
    pub x: f64,
    /// Posterior (mm).
    pub y: f64,
    /// Superior (mm).
    pub z: f64,
    /// Anatomical region label, when the source shape carries one.
    pub region: Option<String>,
    /// Free-form identifier: the channel key (JSON shape) or the fiducial
    /// id column (fcsv shape).
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// DisplayPoint – the same point in renderer space
// ---------------------------------------------------------------------------

/// A point in the display convention: PVL axes, micrometers. Derived from
/// exactly one [`RawPoint`] by [`crate::transform::lps_to_pvl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DisplayPoint {
    /// `[X, Y, Z]` triplet for renderers that take flat arrays.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// ---------------------------------------------------------------------------
// NamingPattern / ContentShape – resolved once at discovery time
// ---------------------------------------------------------------------------

/// Which file-naming convention a discovered file matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPattern {
    /// Pattern A: `ccf_channel_*.json`.
    CcfChannel,
    /// Pattern B: `*_ccf_loc.json`.
    CcfLoc,
    /// Slicer fiducial point-set file: `*.fcsv`.
    Fcsv,
}

impl NamingPattern {
    /// Match a file name against the supported conventions.
    pub fn detect(file_name: &str) -> Option<NamingPattern> {
        if file_name.starts_with("ccf_channel_") && file_name.ends_with(".json") {
            Some(NamingPattern::CcfChannel)
        } else if file_name.ends_with("_ccf_loc.json") {
            Some(NamingPattern::CcfLoc)
        } else if file_name.ends_with(".fcsv") {
            Some(NamingPattern::Fcsv)
        } else {
            None
        }
    }

    /// The content shape implied by the naming convention.
    pub fn shape(self) -> ContentShape {
        match self {
            NamingPattern::CcfChannel | NamingPattern::CcfLoc => ContentShape::KeyedJson,
            NamingPattern::Fcsv => ContentShape::Tabular,
        }
    }
}

/// The two supported file content shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// JSON object whose values are per-channel records.
    KeyedJson,
    /// Delimited rows with 14 positional columns, `#` comments, no header.
    Tabular,
}

// ---------------------------------------------------------------------------
// SourceFile – a discovered candidate plus its pattern tag
// ---------------------------------------------------------------------------

/// A discovered localization file. The naming pattern is resolved once at
/// discovery so extraction never re-branches on the file name.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    path: PathBuf,
    pattern: NamingPattern,
}

impl SourceFile {
    pub fn new(path: PathBuf, pattern: NamingPattern) -> Self {
        SourceFile { path, pattern }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> NamingPattern {
        self.pattern
    }

    pub fn shape(&self) -> ContentShape {
        self.pattern.shape()
    }

    /// Session grouping key: the file stem, e.g. `ccf_channel_0.json` →
    /// `ccf_channel_0`.
    pub fn session_key(&self) -> String {
        self.stem().to_string()
    }

    /// Probe grouping key: the file stem with a trailing `_fit` token and
    /// then a trailing `_Shank<digits>` suffix stripped, so all shanks of
    /// one probe share a key. `ProbeB_Shank4_fit` → `ProbeB`.
    pub fn probe_key(&self) -> String {
        let base = self.stem();
        let base = base.strip_suffix("_fit").unwrap_or(base);
        strip_shank_suffix(base).to_string()
    }

    fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Strip a trailing `_Shank<digits>` suffix, if present.
fn strip_shank_suffix(base: &str) -> &str {
    if let Some((head, tail)) = base.rsplit_once("_Shank") {
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            return head;
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_both_json_patterns() {
        assert_eq!(
            NamingPattern::detect("ccf_channel_0.json"),
            Some(NamingPattern::CcfChannel)
        );
        assert_eq!(
            NamingPattern::detect("sess12_ccf_loc.json"),
            Some(NamingPattern::CcfLoc)
        );
        assert_eq!(NamingPattern::detect("notes.txt"), None);
        assert_eq!(NamingPattern::detect("ccf_channel_0.json.bak"), None);
    }

    #[test]
    fn fcsv_pattern_maps_to_tabular_shape() {
        let pattern = NamingPattern::detect("ProbeA_Shank1.fcsv").unwrap();
        assert_eq!(pattern, NamingPattern::Fcsv);
        assert_eq!(pattern.shape(), ContentShape::Tabular);
    }

    #[test]
    fn session_key_is_the_file_stem() {
        let f = SourceFile::new("a/b/ccf_channel_3.json".into(), NamingPattern::CcfChannel);
        assert_eq!(f.session_key(), "ccf_channel_3");
    }

    #[test]
    fn probe_key_strips_fit_and_shank_suffixes() {
        let cases = [
            ("ProbeB_Shank4_fit.fcsv", "ProbeB"),
            ("ProbeB_Shank12.fcsv", "ProbeB"),
            ("ProbeA.fcsv", "ProbeA"),
            ("ProbeA_fit.fcsv", "ProbeA"),
            ("ProbeC_ShankX.fcsv", "ProbeC_ShankX"),
        ];
        for (name, key) in cases {
            let f = SourceFile::new(name.into(), NamingPattern::Fcsv);
            assert_eq!(f.probe_key(), key, "for {name}");
        }
    }
}
