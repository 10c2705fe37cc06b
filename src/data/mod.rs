/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean → PaperDataset   (memoized by cache)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PaperDataset  │  Vec<Paper>, distinct years / journals
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year + journal selection → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  chart inputs → DashboardSummary
///   └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
