// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical and calibration constants shared across the monitor crates.
//!
//! Half-lives are carried exactly as the measurement bookkeeping uses
//! them, including the 365-day year for Ra-226.

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per 365-day year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

/// Rn-222 half-life [day]. Python: 3.84.
pub const HALF_LIFE_RN222_DAYS: f64 = 3.84;

/// Ra-226 half-life [year]. Python: 1602.
pub const HALF_LIFE_RA226_YEARS: f64 = 1602.0;

/// Po-210 half-life [day]. Python: 138376.
pub const HALF_LIFE_PO210_DAYS: f64 = 138_376.0;

/// Default rd-monitor efficiency, MonA in N2 at 1300 mbar and HV = -1 kV.
/// Python: 0.21.
pub const DEFAULT_EFFICIENCY: f64 = 0.21;

/// Default uncertainty on the rd-monitor efficiency. Python: 0.01.
pub const DEFAULT_ERROR_EFFICIENCY: f64 = 0.01;

/// Default blinding time after the HVs are ramped [min]. Python: 300.
pub const DEFAULT_BLINDING_TIME_MIN: f64 = 300.0;

/// Po-214 selection window, lower bin. Python: x1 = 275.
pub const PO214_BIN_MIN: f64 = 275.0;

/// Po-214 selection window, upper bin. Python: x2 = 360.
pub const PO214_BIN_MAX: f64 = 360.0;

/// Po-218 selection window, lower bin. Python: x3 = 245.
pub const PO218_BIN_MIN: f64 = 245.0;

/// Po-218 selection window, upper bin; shares the Po-214 lower edge.
pub const PO218_BIN_MAX: f64 = PO214_BIN_MIN;

/// Po-210 selection window, lower bin. Python: x5 = 180.
pub const PO210_BIN_MIN: f64 = 180.0;

/// Po-210 selection window, upper bin; shares the Po-218 lower edge.
pub const PO210_BIN_MAX: f64 = PO218_BIN_MIN;
