/// Data layer: core types and input parsing.
///
/// Architecture:
/// ```text
///  instrument text files
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  lines → Series / AbsorptionLines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Series, Window, LabeledDataset, LabeledRow
///   └──────────┘
/// ```
pub mod model;
pub mod parser;
