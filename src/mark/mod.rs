/// Labeling pipeline: locate line centers, extract windows, balance classes.
///
/// ```text
///   with-substance Series      absorption frequencies
///          │                          │
///          ▼                          ▼
///   ┌───────────┐  per line   ┌──────────────┐
///   │  locate    │───────────▶│   window      │  positive windows
///   └───────────┘             └──────────────┘
///                                     │
///                                     ▼
///                             ┌──────────────┐
///                             │   sampler     │  negative windows,
///                             └──────────────┘  1:1 with positives
///                                     │
///                                     ▼
///                             ┌──────────────┐
///                             │  assemble     │  flat labeled table
///                             └──────────────┘
/// ```
pub mod assemble;
pub mod locate;
pub mod window;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{MarkConfig, NegativeSampling};
use crate::data::model::{LabeledDataset, Series, Window};
use crate::error::{MarkError, Result};
use crate::observer::{LogObserver, MarkEvent, MarkObserver};
use crate::resample::resample;

use self::locate::nearest_index;
use self::window::extract;

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Mark a series: one positive window per absorption frequency, an equal
/// number of line-free negative windows, per the configured policies.
/// Events go to the `log` crate; see [`mark_data_with_observer`] to inject
/// a different sink.
pub fn mark_data(
    with_substance: &Series,
    absorption_frequencies: &[f64],
    config: &MarkConfig,
) -> Result<LabeledDataset> {
    mark_data_with_observer(
        with_substance,
        absorption_frequencies,
        config,
        &mut LogObserver,
    )
}

/// [`mark_data`] with an injected observer for skip/shortfall events.
///
/// Pure function of its inputs plus `config.random_seed`: repeated calls
/// with the same arguments produce the same dataset.
pub fn mark_data_with_observer(
    with_substance: &Series,
    absorption_frequencies: &[f64],
    config: &MarkConfig,
    observer: &mut dyn MarkObserver,
) -> Result<LabeledDataset> {
    config.validate()?;
    with_substance.validate()?;
    if with_substance.is_empty() {
        return Err(MarkError::EmptyInput {
            what: "with-substance series",
        });
    }

    // Optional resampling onto a uniform grid before any window work.
    let resampled;
    let series = match config.resample_step {
        Some(step) => {
            resampled = resample(with_substance, step)?;
            &resampled
        }
        None => with_substance,
    };

    let width = config.window_width;
    let mut used = vec![false; series.len()];

    // Positive windows, one per absorption frequency. Duplicates each get
    // their own window; strict-policy rejections are silent skips.
    let mut positive = Vec::with_capacity(absorption_frequencies.len());
    for &freq in absorption_frequencies {
        let center = nearest_index(&series.frequency, freq);
        match extract(&series.amplitude, center, width, config.edge_policy) {
            Some(ext) => {
                let freqs = extract(&series.frequency, center, width, config.edge_policy)
                    .map(|f| f.values);
                for i in ext.coverage.clone() {
                    used[i] = true;
                }
                positive.push(Window {
                    amplitudes: ext.values,
                    frequencies: freqs,
                    label: true,
                    center,
                });
            }
            None => observer.on_event(&MarkEvent::PositiveSkipped {
                frequency: freq,
                center,
            }),
        }
    }

    let n_positive = positive.len();
    if n_positive == 0 {
        return Err(MarkError::InsufficientData(
            "no positive windows could be extracted".into(),
        ));
    }

    let negative = select_negatives(series, &mut used, n_positive, config)?;

    if negative.len() < n_positive {
        observer.on_event(&MarkEvent::NegativeShortfall {
            wanted: n_positive,
            found: negative.len(),
        });
    }
    observer.on_event(&MarkEvent::Marked {
        positives: n_positive,
        negatives: negative.len(),
    });

    Ok(LabeledDataset {
        positive,
        negative,
        window_width: width,
    })
}

// ---------------------------------------------------------------------------
// Negative selection
// ---------------------------------------------------------------------------

/// Select up to `n_positive` negative windows whose spans stay clear of
/// every positive window.
///
/// Candidate centers are those whose full span fits in bounds, so negatives
/// never need edge padding. Under [`NegativeSampling::Sequential`] the used
/// mask is updated after each accepted window, making negatives mutually
/// disjoint as well; under [`NegativeSampling::Shuffled`] candidates are
/// checked against positive coverage only, so two negatives may overlap
/// each other.
fn select_negatives(
    series: &Series,
    used: &mut [bool],
    n_positive: usize,
    config: &MarkConfig,
) -> Result<Vec<Window>> {
    let width = config.window_width;
    let half = config.half_width();
    let len = series.len();

    let take = |center: usize| -> Window {
        let ext = extract(&series.amplitude, center, width, config.edge_policy)
            .expect("candidate span verified in bounds");
        let freqs =
            extract(&series.frequency, center, width, config.edge_policy).map(|f| f.values);
        Window {
            amplitudes: ext.values,
            frequencies: freqs,
            label: false,
            center,
        }
    };

    // A candidate's span is [center-half, center-half+width); with centers
    // drawn from half..len-half it never leaves the array.
    let span_free = |used: &[bool], center: usize| -> bool {
        let start = center - half;
        (start..start + width).all(|i| !used[i])
    };

    let mut negative = Vec::with_capacity(n_positive);
    match config.negative_sampling {
        NegativeSampling::Sequential => {
            for center in half..len.saturating_sub(half) {
                if negative.len() == n_positive {
                    break;
                }
                if span_free(used, center) {
                    let w = take(center);
                    let start = center - half;
                    for i in start..start + width {
                        used[i] = true;
                    }
                    negative.push(w);
                }
            }
        }
        NegativeSampling::Shuffled => {
            let mut candidates: Vec<usize> = (half..len.saturating_sub(half))
                .filter(|&center| span_free(used, center))
                .collect();
            let mut rng = match config.random_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            candidates.shuffle(&mut rng);
            negative.extend(candidates.into_iter().take(n_positive).map(take));
        }
    }

    if negative.is_empty() {
        return Err(MarkError::InsufficientData(
            "no line-free region can hold a negative window".into(),
        ));
    }
    Ok(negative)
}
