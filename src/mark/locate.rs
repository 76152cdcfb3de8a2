// ---------------------------------------------------------------------------
// Nearest-index locator
// ---------------------------------------------------------------------------

/// Index of the sample closest to `target`, by absolute difference.
///
/// Plain linear scan; ties resolve to the lowest index, which downstream
/// results depend on for determinism. The caller guarantees a non-empty
/// array.
pub fn nearest_index(frequency: &[f64], target: f64) -> usize {
    debug_assert!(!frequency.is_empty());

    let mut best = 0;
    let mut best_dist = (frequency[0] - target).abs();
    for (i, &f) in frequency.iter().enumerate().skip(1) {
        let dist = (f - target).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
