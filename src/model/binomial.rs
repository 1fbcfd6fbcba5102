//! Binomial coefficients on rounded real arguments.
//!
//! The spawn model feeds real-valued trial counts and distances into
//! `C(n, k)`. Both are rounded to the nearest integer with ties to even
//! first; a negative `n`, a negative `k` or `k > n` gives a zero
//! coefficient.
//!
//! The likelihood only ever uses [`ln_binomial_coefficient`]. For a small
//! `min(k, n - k)` it sums `ln((n - i) / (i + 1))` term by term, which keeps
//! full relative precision for any finite trial count. Otherwise it falls
//! back to log-gamma differences, which lose absolute precision as `n`
//! grows (a few hundredths at `n ≈ 1e13`).
use statrs::function::{factorial::binomial, gamma::ln_gamma};

/// Largest `min(k, n - k)` summed term by term.
const DIRECT_SUM_MAX_K: f64 = 256.0;

/// Round to the nearest integer, ties to even (`0.5 → 0`, `1.5 → 2`,
/// `2.5 → 2`).
pub fn round_half_even(x: f64) -> f64 {
    x.round_ties_even()
}

/// Rounded `(n, k)`, or `None` when `C(n, k)` is zero.
fn rounded_pair(n: f64, k: f64) -> Option<(f64, f64)> {
    let (n, k) = (round_half_even(n), round_half_even(k));
    if n < 0.0 || k < 0.0 || k > n {
        return None;
    }
    Some((n, k))
}

/// `C(round(n), round(k))`, `0.0` when `k > n` or either argument is
/// negative after rounding.
///
/// Overflows to `inf` for very large `n`; use [`ln_binomial_coefficient`]
/// where that matters.
pub fn binomial_coefficient(n: f64, k: f64) -> f64 {
    rounded_pair(n, k).map_or(0.0, |(n, k)| binomial(n as u64, k as u64))
}

/// `ln C(round(n), round(k))`, or `None` in exactly the cases where
/// [`binomial_coefficient`] is zero.
pub fn ln_binomial_coefficient(n: f64, k: f64) -> Option<f64> {
    rounded_pair(n, k).map(|(n, k)| {
        let k = k.min(n - k);
        if k <= DIRECT_SUM_MAX_K {
            (0..k as u32).map(|i| ((n - f64::from(i)) / f64::from(i + 1)).ln()).sum()
        } else {
            ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_sends_ties_to_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-0.5), -0.0);
        assert_eq!(round_half_even(0.715), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Zero coefficients are exactly the impossible draws.
    //
    // Given
    // -----
    // - `k > n`, negative `k`, negative `n`, and `k` that only exceeds `n`
    //   before rounding.
    //
    // Expect
    // ------
    // - `C = 0` and `ln C = None` for the impossible ones.
    // - `C(2, 2.4) = 1` because 2.4 rounds to 2.
    fn impossible_draws_have_zero_coefficient() {
        assert_eq!(binomial_coefficient(3.0, 4.0), 0.0);
        assert_eq!(binomial_coefficient(3.0, -1.0), 0.0);
        assert_eq!(binomial_coefficient(-2.0, 0.0), 0.0);
        assert_eq!(ln_binomial_coefficient(3.0, 4.0), None);
        assert_eq!(ln_binomial_coefficient(-2.0, 0.0), None);
        assert_eq!(binomial_coefficient(2.0, 2.4), 1.0);
    }

    #[test]
    fn choosing_nothing_is_always_one() {
        for n in 0..50 {
            assert_eq!(binomial_coefficient(n as f64, 0.0), 1.0);
            assert_eq!(ln_binomial_coefficient(n as f64, 0.0), Some(0.0));
        }
    }

    #[test]
    fn small_coefficients_match_pascal() {
        assert_eq!(binomial_coefficient(2.0, 1.0), 2.0);
        assert_eq!(binomial_coefficient(5.0, 2.0), 10.0);
        assert_eq!(binomial_coefficient(10.0, 5.0), 252.0);
        let ln = ln_binomial_coefficient(10.0, 5.0).expect("possible draw");
        assert!((ln - 252.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Small draws from a huge trial count keep their precision.
    //
    // Given
    // -----
    // - n = 1.4e13, k = 20, where log-gamma differences are only good
    //   to about 0.06.
    //
    // Expect
    // ------
    // - ln C within 1e-9 of Σ ln((n - i)/(i + 1)) computed independently
    //   as 20·ln n - ln 20! to first order, and symmetric in k ↔ n - k.
    fn small_draws_from_huge_trial_counts_stay_precise() {
        // Arrange
        let n = 1.4e13_f64;
        let ln_20_factorial = (1..=20).map(|i| f64::from(i).ln()).sum::<f64>();
        let first_order = 20.0 * n.ln() - ln_20_factorial - 190.0 / n;

        // Act
        let ln = ln_binomial_coefficient(n, 20.0).expect("possible draw");
        let mirrored = ln_binomial_coefficient(n, n - 20.0).expect("possible draw");

        // Assert
        assert!((ln - first_order).abs() < 1e-9, "ln C = {ln}, expected {first_order}");
        assert_eq!(ln, mirrored);
    }

    #[test]
    fn log_coefficient_stays_finite_for_huge_trial_counts() {
        let ln = ln_binomial_coefficient(1.0e7, 5.0e6).expect("possible draw");
        assert!(ln.is_finite());
        assert!(binomial_coefficient(1.0e7, 5.0e6).is_infinite());
    }
}
