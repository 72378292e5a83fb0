//! Kernel weight normalization.

use tracing::trace;

/// Sums with an absolute value below this are treated as zero.
pub const ZERO_SUM_EPSILON: f64 = 1e-8;

/// Returns the divisor [`normalize`] would use, or `None` when it leaves
/// the weights untouched.
///
/// Normally this is the plain sum. Zero-sum kernels (edge and derivative
/// filters whose lobes cancel) fall back to the sum of the positive
/// weights only, so the positive lobe ends up summing to one and the
/// negative lobe is scaled by the same factor.
pub fn normalization_divisor(weights: &[f32]) -> Option<f64> {
    let mut sum: f64 = weights.iter().map(|&w| w as f64).sum();

    if sum.abs() < ZERO_SUM_EPSILON {
        sum = weights
            .iter()
            .filter(|&&w| w > 0.0)
            .map(|&w| w as f64)
            .sum();
    }

    // Exact compare: only division by zero needs avoiding.
    if sum == 0.0 { None } else { Some(sum) }
}

/// Rescales `weights` in place so that they sum to one where possible.
///
/// All-zero kernels, and zero-sum kernels without positive weights, are
/// left unmodified.
///
/// # Example
///
/// ```rust
/// use convfx_kernel::normalize;
///
/// let mut w = vec![1.0, -1.0, 1.0, -1.0];
/// normalize(&mut w);
/// assert_eq!(w, vec![0.5, -0.5, 0.5, -0.5]);
/// ```
pub fn normalize(weights: &mut [f32]) {
    let Some(sum) = normalization_divisor(weights) else {
        trace!(len = weights.len(), "normalize: zero divisor, weights unchanged");
        return;
    };

    trace!(len = weights.len(), sum, "normalize");

    for w in weights.iter_mut() {
        *w = (*w as f64 / sum) as f32;
    }
}
