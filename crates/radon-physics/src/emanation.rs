// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Emanation Strength
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Emanation sample strength and pre-measurement decay.
//!
//! A sample that emanates for a finite time has not reached its
//! emanation equilibrium; these functions give the fraction of the
//! equilibrium activity present when the sample is expanded.

use radon_types::constants::SECONDS_PER_DAY;

/// Fraction of the emanation equilibrium reached after `t` days.
///
/// `1 - exp(-λ·t·86400)`, with `lambda` the source decay constant [1/s].
pub fn source_strength(t: f64, lambda: f64) -> f64 {
    1.0 - (-lambda * t * SECONDS_PER_DAY).exp()
}

/// First-order propagated error on [`source_strength`] from an
/// uncertainty `dt` [day] on the emanation time.
pub fn err_source_strength(t: f64, dt: f64, lambda: f64) -> f64 {
    (-lambda * t * SECONDS_PER_DAY).exp() * dt
}

/// Activity of a standard of intrinsic activity `a` [Bq] at the moment
/// of expansion, after emanating for `t` days.
pub fn standard_strength(a: f64, t: f64, lambda: f64) -> f64 {
    a * (1.0 - (-lambda * t * SECONDS_PER_DAY).exp())
}

/// Error on [`standard_strength`]: quadrature of the activity term
/// `(1 - exp(-λ·t·86400))·ea` and the time term `a·exp(-λ·t·86400)·et`.
pub fn err_standard_strength(a: f64, ea: f64, t: f64, et: f64, lambda: f64) -> f64 {
    let decay = (-lambda * t * SECONDS_PER_DAY).exp();
    (((1.0 - decay) * ea).powi(2) + (a * decay * et).powi(2)).sqrt()
}

/// Fraction of the sample surviving a delay `t` [s] between emanation
/// stop and DAQ start.
pub fn decay_before_measurement(t: f64, lambda: f64) -> f64 {
    (-lambda * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::lambda_rn222;

    #[test]
    fn test_zero_emanation_time() {
        assert_eq!(source_strength(0.0, lambda_rn222()), 0.0);
        assert_eq!(standard_strength(2.5, 0.0, lambda_rn222()), 0.0);
    }

    #[test]
    fn test_long_emanation_saturates() {
        // 20 half-lives of emanation is indistinguishable from equilibrium.
        let s = source_strength(20.0 * 3.84, lambda_rn222());
        assert!(s > 0.999_999);
        assert!(s <= 1.0);
    }

    #[test]
    fn test_err_source_strength_shrinks_with_time() {
        let l = lambda_rn222();
        let early = err_source_strength(1.0, 0.1, l);
        let late = err_source_strength(10.0, 0.1, l);
        assert!(late < early);
    }

    #[test]
    fn test_err_standard_strength_quadrature() {
        let l = lambda_rn222();
        let decay = (-l * 7.0 * 86_400.0).exp();
        let term_a = (1.0 - decay) * 0.1;
        let term_t = 2.5 * decay * 0.1;
        let expected = (term_a * term_a + term_t * term_t).sqrt();
        assert!((err_standard_strength(2.5, 0.1, 7.0, 0.1, l) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_decay_before_measurement_bounds() {
        let l = lambda_rn222();
        assert_eq!(decay_before_measurement(0.0, l), 1.0);
        // One half-life of delay in seconds
        let half = decay_before_measurement(3.84 * 86_400.0, l);
        assert!((half - 0.5).abs() < 1e-12);
    }
}
