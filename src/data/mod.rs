/// Data layer: core types, record extraction, and region filtering.
///
/// ```text
///  ccf_channel_*.json / *_ccf_loc.json / *.fcsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse one SourceFile → Vec<RawPoint>
///   └──────────┘
///        │  (RegionFilter applied inside, JSON shape only)
///        ▼
///   ┌──────────┐
///   │  model    │  RawPoint → DisplayPoint, SourceFile keys
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
