//! Optimal Grover iteration count
//!
//! For `M` marked items among `N`, the success probability after `k`
//! iterations is `sin^2((2k + 1) θ)` with `sin θ = sqrt(M / N)`. It peaks near
//! `k = (π/4) sqrt(N / M)`. The closed form drifts from the true optimum when
//! `N / M` is small, so treat the result as a sizing hint there.

use std::f64::consts::FRAC_PI_4;

/// `max(1, floor((π/4) * sqrt(total_items / marked_items)))`
///
/// Returns 1 when either count is zero or negative: with nothing marked there
/// is nothing to amplify.
///
/// # Example
/// ```
/// use motif_grover::iterations::calculate_optimal_iterations;
///
/// assert_eq!(calculate_optimal_iterations(1024, 1), 25);
/// assert_eq!(calculate_optimal_iterations(0, 5), 1);
/// ```
pub fn calculate_optimal_iterations(total_items: i64, marked_items: i64) -> i64 {
    if marked_items <= 0 || total_items <= 0 {
        return 1;
    }

    let ratio = total_items as f64 / marked_items as f64;
    let iterations = (FRAC_PI_4 * ratio.sqrt()).floor() as i64;

    iterations.max(1)
}

/// Theoretical success probability after `iterations` Grover steps
///
/// Returns 0 for degenerate inputs and 1 when every item is marked.
pub fn success_probability_after(total_items: i64, marked_items: i64, iterations: i64) -> f64 {
    if marked_items <= 0 || total_items <= 0 {
        return 0.0;
    }
    if marked_items >= total_items {
        return 1.0;
    }

    let theta = (marked_items as f64 / total_items as f64).sqrt().asin();
    ((2 * iterations.max(0) + 1) as f64 * theta).sin().powi(2)
}
