// ---------------------------------------------------------------------------
// Region filter: allow-list predicate over record labels
// ---------------------------------------------------------------------------

/// Inclusion predicate over anatomical region labels.
///
/// An empty allow-list means the filter is disabled and every record passes,
/// labeled or not. A non-empty allow-list passes a record only when its label
/// is present and an exact, case-sensitive member.
#[derive(Debug, Clone, Default)]
pub struct RegionFilter {
    allow: Vec<String>,
}

impl RegionFilter {
    pub fn new<I, S>(allow: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RegionFilter {
            allow: allow.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that passes everything.
    pub fn disabled() -> Self {
        RegionFilter::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.allow.is_empty()
    }

    /// Whether a record with the given label passes.
    pub fn passes(&self, region: Option<&str>) -> bool {
        if self.allow.is_empty() {
            return true;
        }
        region.is_some_and(|r| self.allow.iter().any(|a| a == r))
    }
}
