// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Decay Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decay constants of the isotopes seen by the monitor.
//!
//! λ = ln(2) / T½, with the half-lives pinned in `radon_types::constants`.

use radon_types::constants::{
    HALF_LIFE_PO210_DAYS, HALF_LIFE_RA226_YEARS, HALF_LIFE_RN222_DAYS, SECONDS_PER_DAY,
    SECONDS_PER_YEAR,
};

/// Decay constant [1/s] from a half-life given in seconds.
pub fn decay_constant(half_life_s: f64) -> f64 {
    std::f64::consts::LN_2 / half_life_s
}

/// Rn-222 decay constant [1/s]. Python: `lRn`.
pub fn lambda_rn222() -> f64 {
    decay_constant(HALF_LIFE_RN222_DAYS * SECONDS_PER_DAY)
}

/// Ra-226 decay constant [1/s]. Python: `lRa`.
pub fn lambda_ra226() -> f64 {
    decay_constant(HALF_LIFE_RA226_YEARS * SECONDS_PER_YEAR)
}

/// Po-210 decay constant [1/s]. Python: `lPo210`.
pub fn lambda_po210() -> f64 {
    decay_constant(HALF_LIFE_PO210_DAYS * SECONDS_PER_DAY)
}
