// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Efficiency Calibration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Detector efficiency back-calculated from a standard of known
//! activity.
//!
//! The calibration integral runs from `t1` (emanation stop to
//! measurement start) to `t2` (end of measurement after the blind
//! time), so the number of decays in the window is
//! `(a/λ)·(exp(-λ·t1) - exp(-λ·t2))`. The sign convention differs
//! from the activity formula on purpose; the two are separate
//! derivations, not duplicates.

use radon_types::error::{MonitorError, MonitorResult};

use crate::activity::MIN_LAMBDA_DT;

/// Measured rd-monitor efficiency from `c` counts of a standard of
/// activity `a` [Bq]. Python: `calc_eff_rdMonitor`.
pub fn calibrated_efficiency(c: f64, a: f64, lambda: f64, t1: f64, t2: f64) -> f64 {
    c / ((a / lambda) * (-(-lambda * t2).exp() + (-lambda * t1).exp()))
}

/// Error on [`calibrated_efficiency`]: quadrature of the counting term
/// `ec·λ/((exp(-λ·t1) - exp(-λ·t2))·a)` and the standard-activity term
/// `ea·c·λ/((exp(-λ·t1) - exp(-λ·t2))·a²)`.
pub fn err_calibrated_efficiency(
    c: f64,
    ec: f64,
    a: f64,
    ea: f64,
    lambda: f64,
    t1: f64,
    t2: f64,
) -> f64 {
    let window = (-lambda * t1).exp() - (-lambda * t2).exp();
    let counting = ec * lambda / (window * a);
    let standard = ea * c * lambda / (window * a * a);
    (counting * counting + standard * standard).sqrt()
}

/// Guarded variant of [`calibrated_efficiency`], rejecting a
/// non-positive standard activity and a degenerate window.
pub fn checked_calibrated_efficiency(
    c: f64,
    a: f64,
    lambda: f64,
    t1: f64,
    t2: f64,
) -> MonitorResult<f64> {
    if a <= 0.0 {
        return Err(MonitorError::PhysicsViolation(format!(
            "standard activity must be positive, got {}",
            a
        )));
    }
    let lambda_dt = lambda * (t2 - t1);
    if lambda_dt < MIN_LAMBDA_DT {
        return Err(MonitorError::PhysicsViolation(format!(
            "lambda * (t2 - t1) = {} below {}",
            lambda_dt, MIN_LAMBDA_DT
        )));
    }
    Ok(calibrated_efficiency(c, a, lambda, t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::activity;
    use crate::decay::lambda_rn222;

    #[test]
    fn test_activity_efficiency_inverse_at_t1_zero() {
        // With t1 = 0 the calibration window equals the activity growth
        // factor, so recomputing the efficiency from the measured
        // activity reproduces the assumed one.
        let l = lambda_rn222();
        let (n, t1, t2, eff) = (500.0, 0.0, 2.0 * 86_400.0, 0.21);
        let a = activity(n, t1, t2, eff, l);
        let eff_back = calibrated_efficiency(n, a, l, t1, t2);
        assert!((eff_back - eff).abs() < 1e-12);
    }

    #[test]
    fn test_nonzero_t1_shifts_efficiency() {
        // A delayed measurement sees fewer decays for the same counts,
        // so the back-calculated efficiency comes out larger by e^{λ·t1}.
        let l = lambda_rn222();
        let (n, t1, t2, eff) = (500.0, 43_200.0, 2.0 * 86_400.0, 0.21);
        let a = activity(n, t1, t2, eff, l);
        let eff_back = calibrated_efficiency(n, a, l, t1, t2);
        assert!((eff_back - eff * (l * t1).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_err_calibrated_efficiency_quadrature() {
        let l = lambda_rn222();
        let (c, ec, a, ea, t1, t2) = (500.0, 500.0_f64.sqrt(), 2.5, 0.1, 0.0, 86_400.0);
        let window = (-l * t1).exp() - (-l * t2).exp();
        let expected = ((ec * l / (window * a)).powi(2)
            + (ea * c * l / (window * a * a)).powi(2))
        .sqrt();
        assert!((err_calibrated_efficiency(c, ec, a, ea, l, t1, t2) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_checked_calibrated_efficiency_guards() {
        let l = lambda_rn222();
        assert!(checked_calibrated_efficiency(500.0, 0.0, l, 0.0, 86_400.0).is_err());
        assert!(checked_calibrated_efficiency(500.0, 2.5, l, 100.0, 100.0).is_err());
        assert!(checked_calibrated_efficiency(500.0, 2.5, l, 0.0, 86_400.0).is_ok());
    }
}
