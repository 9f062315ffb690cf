/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  remote CSV / local CSV
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → SalaryTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SalaryTable  │  Vec<SalaryRecord>, filter facets
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  four selections → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ metrics / charts   │  → Dashboard
///   └───────────────────┘
/// ```

pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
