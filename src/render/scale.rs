//! Normalisation shared by every tick style.

/// Inclusive bounds of the series, ignoring non-finite values.
///
/// Falls back to `(0.0, 1.0)` when nothing finite is present so that the
/// renderers never divide by a non-finite span.
#[must_use]
pub fn bounds(data: &[f64]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in data {
        if v.is_finite() {
            low = low.min(v);
            high = high.max(v);
        }
    }
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    (low, high)
}

/// Map each sample to its relative position in `[0, 1]` within `[min, max]`.
///
/// A zero-range series collapses to all zeros, so degenerate input lands on
/// the lowest glyph level instead of dividing by zero.
#[must_use]
pub fn normalize(data: &[f64]) -> Vec<f64> {
    let (low, high) = bounds(data);
    let span = high - low;
    if span <= 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter()
        .map(|v| ((v - low) / span).clamp(0.0, 1.0))
        .collect()
}

/// Quantize a normalized position onto `levels` discrete steps.
///
/// Rounds half away from zero, so the minimum always lands on step 0 and the
/// maximum on `levels - 1`; never out of bounds.
#[must_use]
pub fn quantize(t: f64, levels: usize) -> usize {
    debug_assert!(levels > 0);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = (t * (levels - 1) as f64).round() as usize;
    idx.min(levels - 1)
}
