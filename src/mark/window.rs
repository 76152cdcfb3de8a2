use std::ops::Range;

use crate::config::EdgePolicy;

// ---------------------------------------------------------------------------
// Window extractor
// ---------------------------------------------------------------------------

/// A window of samples plus the in-bounds index range it actually covers.
///
/// `coverage` drives the overlap bookkeeping in the sampler; padded samples
/// repeated from the edges cover no extra indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub values: Vec<f64>,
    pub coverage: Range<usize>,
}

/// Extract a window of `width` samples around `center`.
///
/// Both policies use `half = width / 2` and the half-open convention
/// `[center - half, center - half + width)`:
/// * [`EdgePolicy::Strict`] returns `None` whenever the span leaves the
///   array or its length differs from `width` (so odd widths never
///   extract).
/// * [`EdgePolicy::Padded`] fills out-of-range positions by repeating the
///   first or last sample; the result is always exactly `width` long.
pub fn extract(
    values: &[f64],
    center: usize,
    width: usize,
    policy: EdgePolicy,
) -> Option<Extraction> {
    let half = width / 2;
    let len = values.len();
    if len == 0 || width == 0 {
        return None;
    }
    let start = center as isize - half as isize;

    match policy {
        EdgePolicy::Strict => {
            let end = center as isize + half as isize;
            if start < 0 || end as usize > len || (end - start) as usize != width {
                return None;
            }
            let (start, end) = (start as usize, end as usize);
            Some(Extraction {
                values: values[start..end].to_vec(),
                coverage: start..end,
            })
        }
        EdgePolicy::Padded => {
            let window: Vec<f64> = (0..width as isize)
                .map(|offset| {
                    let idx = (start + offset).clamp(0, len as isize - 1) as usize;
                    values[idx]
                })
                .collect();
            let covered_start = start.max(0) as usize;
            let covered_end = ((start + width as isize).max(0) as usize).min(len);
            Some(Extraction {
                values: window,
                coverage: covered_start..covered_end,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<f64> {
        (0..10).map(|i| i as f64).collect()
    }

    // -- strict policy --

    #[test]
    fn strict_interior_window() {
        let ext = extract(&samples(), 5, 4, EdgePolicy::Strict).unwrap();
        assert_eq!(ext.values, vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ext.coverage, 3..7);
    }

    #[test]
    fn strict_rejects_out_of_range() {
        assert!(extract(&samples(), 1, 4, EdgePolicy::Strict).is_none());
        assert!(extract(&samples(), 9, 4, EdgePolicy::Strict).is_none());
        // boundary-exact spans still fit
        assert!(extract(&samples(), 2, 4, EdgePolicy::Strict).is_some());
        assert!(extract(&samples(), 8, 4, EdgePolicy::Strict).is_some());
    }

    #[test]
    fn strict_rejects_odd_width() {
        // span [c-2, c+2) is 4 samples, never 5
        assert!(extract(&samples(), 5, 5, EdgePolicy::Strict).is_none());
    }

    // -- padded policy --

    #[test]
    fn padded_interior_matches_strict() {
        let ext = extract(&samples(), 5, 4, EdgePolicy::Padded).unwrap();
        assert_eq!(ext.values, vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ext.coverage, 3..7);
    }

    #[test]
    fn padded_left_edge_repeats_first_sample() {
        // center 0, half 2: first two positions fall before the array
        let ext = extract(&samples(), 0, 4, EdgePolicy::Padded).unwrap();
        assert_eq!(ext.values, vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(ext.coverage, 0..2);
    }

    #[test]
    fn padded_right_edge_repeats_last_sample() {
        let ext = extract(&samples(), 9, 4, EdgePolicy::Padded).unwrap();
        assert_eq!(ext.values, vec![7.0, 8.0, 9.0, 9.0]);
        assert_eq!(ext.coverage, 7..10);
    }

    #[test]
    fn padded_width_is_constant_everywhere() {
        for width in [3, 4, 7, 10, 15] {
            for center in 0..10 {
                let ext = extract(&samples(), center, width, EdgePolicy::Padded).unwrap();
                assert_eq!(ext.values.len(), width, "center {center}, width {width}");
            }
        }
    }

    #[test]
    fn padded_odd_width_is_centered() {
        let ext = extract(&samples(), 5, 5, EdgePolicy::Padded).unwrap();
        assert_eq!(ext.values, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
