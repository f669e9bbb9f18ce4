/// Data layer: table model, loading and the per-interaction pipeline.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  mapper   │  role names → column indices, preview
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  "All" or exact status match → sub-table
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  risk column → numbers / missing
///   └───────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  chart    │   │  alert    │  risk > 0.7
///   └──────────┘   └──────────┘
/// ```
/// `pipeline` chains the stages for one `ViewRequest`.

pub mod alert;
pub mod chart;
pub mod filter;
pub mod loader;
pub mod mapper;
pub mod model;
pub mod normalize;
pub mod pipeline;
