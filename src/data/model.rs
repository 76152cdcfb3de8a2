use serde::{Deserialize, Serialize};

use crate::error::{MarkError, Result};

// ---------------------------------------------------------------------------
// Series – one spectroscopic trace
// ---------------------------------------------------------------------------

/// Paired frequency/amplitude samples describing a spectroscopic trace.
///
/// Frequencies are assumed monotonically increasing (not enforced; the
/// nearest-index search and resampler rely on it for correctness).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Frequency axis (x).
    pub frequency: Vec<f64>,
    /// Amplitude axis (y) – same length as `frequency`.
    pub amplitude: Vec<f64>,
}

impl Series {
    /// Build a series, validating the model invariants: equal lengths,
    /// all values finite.
    pub fn new(frequency: Vec<f64>, amplitude: Vec<f64>) -> Result<Self> {
        let series = Series {
            frequency,
            amplitude,
        };
        series.validate()?;
        Ok(series)
    }

    /// Re-check the model invariants. The fields are public, so the engine
    /// validates again at its entry points.
    pub fn validate(&self) -> Result<()> {
        if self.frequency.len() != self.amplitude.len() {
            return Err(MarkError::MalformedSeries(format!(
                "frequency has {} samples but amplitude has {}",
                self.frequency.len(),
                self.amplitude.len()
            )));
        }
        if let Some(i) = self.frequency.iter().position(|f| !f.is_finite()) {
            return Err(MarkError::MalformedSeries(format!(
                "non-finite frequency at index {i}"
            )));
        }
        if let Some(i) = self.amplitude.iter().position(|a| !a.is_finite()) {
            return Err(MarkError::MalformedSeries(format!(
                "non-finite amplitude at index {i}"
            )));
        }
        Ok(())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

// ---------------------------------------------------------------------------
// AbsorptionLines – known line centers
// ---------------------------------------------------------------------------

/// One known absorption line: a frequency where the substance absorbs
/// energy, with the amplitude and source flag carried by the input format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionPoint {
    pub frequency: f64,
    pub amplitude: f64,
    /// Whether the line came from the reference catalogue (`true`/`false`
    /// column of the input file).
    pub from_reference: bool,
}

/// The parsed absorption-line table. Order and duplicates are preserved;
/// each point produces its own positive window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsorptionLines {
    pub points: Vec<AbsorptionPoint>,
}

impl AbsorptionLines {
    /// Line-center frequencies, in input order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Window – one labeled training example
// ---------------------------------------------------------------------------

/// Fixed-width contiguous slice of amplitude samples, labeled positive
/// (contains an absorption line) or negative. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Amplitude samples; length is constant across a dataset.
    pub amplitudes: Vec<f64>,
    /// The paired frequency samples, kept for display/export only.
    pub frequencies: Option<Vec<f64>>,
    /// `true` = positive class (centered on an absorption line).
    pub label: bool,
    /// Sample index the window was extracted around.
    pub center: usize,
}

impl Window {
    pub fn width(&self) -> usize {
        self.amplitudes.len()
    }
}

// ---------------------------------------------------------------------------
// LabeledDataset – the output of a labeling run
// ---------------------------------------------------------------------------

/// All windows produced by one labeling run. The sampler enforces
/// `positive.len() == negative.len()` except when too few negative
/// candidates exist; callers should check [`LabeledDataset::is_balanced`]
/// before relying on class balance.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    pub positive: Vec<Window>,
    pub negative: Vec<Window>,
    /// Width shared by every window in both classes.
    pub window_width: usize,
}

impl LabeledDataset {
    /// Total window count across both classes.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Whether the 1:1 class-balance invariant held for this run.
    pub fn is_balanced(&self) -> bool {
        self.positive.len() == self.negative.len()
    }

    /// All windows, positives first.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.positive.iter().chain(self.negative.iter())
    }
}

// ---------------------------------------------------------------------------
// LabeledRow – flat tabular form for persistence
// ---------------------------------------------------------------------------

/// One (window, sample-offset) pair of the assembled output table.
/// This is the minimal round-trip contract persisted by external code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledRow {
    /// Frequency of the sample, when the window kept its frequency axis.
    pub frequency: Option<f64>,
    pub amplitude: f64,
    pub label: bool,
}
