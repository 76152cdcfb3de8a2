//! Absorption-line window labeling for paired spectroscopic traces.
//!
//! Given a trace measured with a substance in the beam and a table of known
//! absorption-line frequencies, `specmark` cuts the trace into fixed-width
//! amplitude windows: one positive window per line, plus an equal number of
//! negative windows drawn from line-free regions. The result is a balanced
//! training set, flattened to a `(frequency, amplitude, label)` table for
//! persistence.
//!
//! ```
//! use specmark::{mark_data, assemble, MarkConfig, Series};
//!
//! let series = Series::new(
//!     (0..40).map(|i| 100.0 + i as f64 * 0.5).collect(),
//!     (0..40).map(|i| (i as f64 * 0.7).sin().abs()).collect(),
//! )?;
//! let config = MarkConfig { window_width: 4, ..MarkConfig::default() };
//! let dataset = mark_data(&series, &[105.0, 115.0], &config)?;
//! assert!(dataset.is_balanced());
//! let rows = assemble(&dataset);
//! assert_eq!(rows.len(), 4 * dataset.len());
//! # Ok::<(), specmark::MarkError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod mark;
pub mod observer;
pub mod resample;

pub use config::{EdgePolicy, MarkConfig, NegativeSampling};
pub use data::model::{
    AbsorptionLines, AbsorptionPoint, LabeledDataset, LabeledRow, Series, Window,
};
pub use data::parser::{parse_absorption_lines, parse_trace};
pub use error::MarkError;
pub use mark::assemble::assemble;
pub use mark::locate::nearest_index;
pub use mark::{mark_data, mark_data_with_observer};
pub use observer::{LogObserver, MarkEvent, MarkObserver, NullObserver};
pub use resample::resample;
