use serde::{Deserialize, Serialize};

use crate::error::{MarkError, Result};

// ---------------------------------------------------------------------------
// Policy enums
// ---------------------------------------------------------------------------

/// How windows whose span would leave the series bounds are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Reject out-of-range windows outright (the candidate is skipped).
    /// Requires an even `window_width`.
    Strict,
    /// Pad by repeating the edge sample so every window has full width.
    Padded,
}

/// How negative window centers are selected from the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeSampling {
    /// Left-to-right scan, marking each accepted window as used so negatives
    /// never overlap each other either.
    Sequential,
    /// Shuffle the candidate centers and take the first `n_positive`.
    /// Negatives never overlap positives, but may overlap each other.
    Shuffled,
}

// ---------------------------------------------------------------------------
// MarkConfig
// ---------------------------------------------------------------------------

/// Configuration surface of a labeling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkConfig {
    /// Number of samples per window. Must be > 0; even under [`EdgePolicy::Strict`].
    pub window_width: usize,
    /// Edge handling for windows near the series boundaries.
    pub edge_policy: EdgePolicy,
    /// Negative-window selection policy.
    pub negative_sampling: NegativeSampling,
    /// Optional uniform-grid step; when set, the series is resampled first.
    pub resample_step: Option<f64>,
    /// Seed for shuffled negative sampling. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for MarkConfig {
    fn default() -> Self {
        Self {
            window_width: 10,
            edge_policy: EdgePolicy::Padded,
            negative_sampling: NegativeSampling::Sequential,
            resample_step: None,
            random_seed: None,
        }
    }
}

impl MarkConfig {
    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 {
            return Err(MarkError::InvalidConfig(
                "window_width must be greater than zero".into(),
            ));
        }
        if self.edge_policy == EdgePolicy::Strict && self.window_width % 2 != 0 {
            return Err(MarkError::InvalidConfig(format!(
                "strict edge policy requires an even window_width, got {}",
                self.window_width
            )));
        }
        if let Some(step) = self.resample_step {
            if !(step > 0.0) || !step.is_finite() {
                return Err(MarkError::InvalidConfig(format!(
                    "resample_step must be a positive finite number, got {step}"
                )));
            }
        }
        Ok(())
    }

    /// Half-width used by both edge policies (integer division).
    pub fn half_width(&self) -> usize {
        self.window_width / 2
    }
}
