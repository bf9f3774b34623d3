/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  launch_records.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload-range predicates → indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
