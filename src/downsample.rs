//! Display downsampling
//!
//! Reduces a long series to a bounded number of points for charting. Pure
//! and stateless; unrelated to the wire format.

/// Keep every `step`-th element so that at most `max_points` remain.
///
/// `step = ceil(len / max_points)`. Sequences that already fit are returned
/// unchanged, and the first element is always kept. A `max_points` of zero
/// yields an empty result.
pub fn downsample<T: Clone>(seq: &[T], max_points: usize) -> Vec<T> {
    if seq.len() <= max_points {
        return seq.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }

    let step = seq.len().div_ceil(max_points);
    seq.iter().step_by(step).cloned().collect()
}
