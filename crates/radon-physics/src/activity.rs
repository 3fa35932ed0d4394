// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Activity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measured source activity and its propagated uncertainty.
//!
//! The activity filled into the detector at measurement start is
//!
//!   A = c·λ / (ε · (1 - exp(-λ·Δt)))
//!
//! with `c` the number of counts, `ε` the detector efficiency and `Δt`
//! the run time. Counting errors are Poisson (√c); all uncertainty
//! terms combine in quadrature assuming uncorrelated Gaussian inputs.

use radon_types::error::{MonitorError, MonitorResult};

/// Smallest λ·Δt accepted by the checked layer before the
/// `1 - exp(-λ·Δt)` denominator is treated as degenerate.
pub const MIN_LAMBDA_DT: f64 = 1e-12;

/// Activity [Bq] from `ncount` events in the window `[t1, t2]` [s].
///
/// Singular as `λ·(t2-t1) -> 0` or `eff -> 0`; the singularities
/// propagate as IEEE infinity/NaN. See [`checked_activity`] for the
/// guarded variant.
pub fn activity(ncount: f64, t1: f64, t2: f64, eff: f64, lambda: f64) -> f64 {
    ncount * lambda / (eff * (1.0 - (-lambda * (t2 - t1)).exp()))
}

/// Error on [`activity`]: quadrature of the Poisson counting term
/// (√ncount in the numerator) and the efficiency term
/// `ncount·λ·eeff / (ε²·(1 - exp(-λ·Δt)))`.
pub fn err_activity(ncount: f64, t1: f64, t2: f64, eff: f64, eeff: f64, lambda: f64) -> f64 {
    let growth = 1.0 - (-lambda * (t2 - t1)).exp();
    let counting = ncount.sqrt() * lambda / (eff * growth);
    let efficiency = ncount * lambda * eeff / (eff * eff * growth);
    (counting * counting + efficiency * efficiency).sqrt()
}

/// Error on an activity `a` already corrected by the multiplicative
/// factors c1 (emanation equilibrium), c2 (decay before DAQ start) and
/// c3 (extraction loss).
///
/// The c2 uncertainty is fixed at zero: it is already folded into the
/// c1 uncertainty. Three quadrature terms remain: the direct `ea`
/// term, the c1 term and the c3 term.
pub fn err_activity_factors(
    a: f64,
    ea: f64,
    c1: f64,
    ec1: f64,
    c2: f64,
    c3: f64,
    ec3: f64,
) -> f64 {
    ((ea / (c1 * c2 * c3)).powi(2)
        + (a * ec1 / (c1 * c1 * c2 * c3)).powi(2)
        + (a * ec3 / (c1 * c2 * c3 * c3)).powi(2))
    .sqrt()
}

/// Guarded variant of [`activity`], rejecting a non-positive
/// efficiency and a degenerate measurement window.
pub fn checked_activity(
    ncount: f64,
    t1: f64,
    t2: f64,
    eff: f64,
    lambda: f64,
) -> MonitorResult<f64> {
    if eff <= 0.0 {
        return Err(MonitorError::PhysicsViolation(format!(
            "efficiency must be positive, got {}",
            eff
        )));
    }
    let lambda_dt = lambda * (t2 - t1);
    if lambda_dt < MIN_LAMBDA_DT {
        return Err(MonitorError::PhysicsViolation(format!(
            "lambda * (t2 - t1) = {} below {}",
            lambda_dt, MIN_LAMBDA_DT
        )));
    }
    Ok(activity(ncount, t1, t2, eff, lambda))
}
