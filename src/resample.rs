use crate::data::model::Series;
use crate::error::{MarkError, Result};

// ---------------------------------------------------------------------------
// Series resampler
// ---------------------------------------------------------------------------

/// Re-sample a series onto a uniform frequency grid via linear interpolation.
///
/// The grid is `min_f, min_f+step, ...` for every value below `max_f + step`,
/// so the last grid point may overshoot `max_f` by up to one step. The
/// overshoot is intentional and matches the historical output: downstream
/// files always carry one extra point past the end of the measured range.
/// Grid points outside `[min_f, max_f]` are extrapolated linearly from the
/// nearest edge segment, not clamped.
pub fn resample(series: &Series, step: f64) -> Result<Series> {
    series.validate()?;
    if series.is_empty() {
        return Err(MarkError::EmptyInput {
            what: "series to resample",
        });
    }
    if !(step > 0.0) || !step.is_finite() {
        return Err(MarkError::InvalidConfig(format!(
            "resample step must be a positive finite number, got {step}"
        )));
    }

    let min_f = series
        .frequency
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max_f = series
        .frequency
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let mut frequency = Vec::new();
    let mut amplitude = Vec::new();
    let mut k = 0usize;
    loop {
        let f = min_f + k as f64 * step;
        if f >= max_f + step {
            break;
        }
        frequency.push(f);
        amplitude.push(interpolate(series, f));
        k += 1;
    }

    Series::new(frequency, amplitude)
}

/// Linear interpolation at `target`, extrapolating with the slope of the
/// nearest edge segment when `target` lies outside the measured range.
fn interpolate(series: &Series, target: f64) -> f64 {
    let f = &series.frequency;
    let a = &series.amplitude;
    let n = f.len();

    if n == 1 {
        return a[0];
    }

    // Segment index: the pair (i, i+1) bracketing target, with the edge
    // segments reused for extrapolation.
    let seg = if target <= f[0] {
        0
    } else if target >= f[n - 1] {
        n - 2
    } else {
        // frequencies are sorted, so partition_point finds the bracket
        f.partition_point(|&x| x < target).saturating_sub(1)
    };

    let (f0, f1) = (f[seg], f[seg + 1]);
    let (a0, a1) = (a[seg], a[seg + 1]);
    if f1 == f0 {
        return a0;
    }
    a0 + (a1 - a0) * (target - f0) / (f1 - f0)
}
