//! Ingestion and coordinate normalization for probe/channel localization
//! files, feeding 3D brain-atlas renderers.
//!
//! ```text
//!  root directories
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ discover  │  flat / hierarchical / track layouts → SourceFiles
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   data    │  extract labeled RawPoints, apply RegionFilter
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ transform │  LPS mm → PVL µm
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ aggregate │  group by session/probe key, RunSummary stats
//!   └──────────┘
//! ```
//!
//! Rendering itself stays outside this crate: a pass produces named
//! [`Group`]s of `[X, Y, Z]` micrometer triplets plus a [`RunSummary`], and
//! [`color`] supplies the index-to-color cycling a caller's scene needs.

pub mod aggregate;
pub mod color;
pub mod data;
pub mod discover;
pub mod error;
pub mod transform;

pub use aggregate::{run_pass, Group, GroupMode, PassOutput, RunSummary};
pub use data::filter::RegionFilter;
pub use data::model::{ContentShape, DisplayPoint, NamingPattern, RawPoint, SourceFile};
pub use error::DiscoverError;
