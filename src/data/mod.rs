/// Data layer: core types, loading, filtering, and descriptive statistics.
///
/// Architecture:
/// ```text
///   .csv
///     │
///     ▼
///  ┌──────────┐
///  │  loader   │  parse file → FireDataset (header-validated)
///  └──────────┘
///     │
///     ▼
///  ┌─────────────┐
///  │ FireDataset  │  Vec<FireRecord>, read-only after startup
///  └─────────────┘
///     │
///     ▼
///  ┌──────────┐      ┌───────────┐
///  │  filter   │ ───▶ │  summary   │  year predicate → indices → describe table
///  └──────────┘      └───────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
