// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Polonium Bin Windows
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Histogram bin windows of the three polonium peaks.
//!
//! Port of `def_Pol_ranges`. The windows are fixed by the spectrum
//! calibration and share edges: the Po-218 upper bound is the Po-214
//! lower bound, the Po-210 upper bound is the Po-218 lower bound.

use radon_types::constants::{
    PO210_BIN_MAX, PO210_BIN_MIN, PO214_BIN_MAX, PO214_BIN_MIN, PO218_BIN_MAX, PO218_BIN_MIN,
};
use radon_types::error::{MonitorError, MonitorResult};

/// Polonium peak selected in the alpha spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoloniumWindow {
    Po214,
    Po218,
    Po210,
}

impl PoloniumWindow {
    /// Bin window as `(min, max)` bin numbers.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            PoloniumWindow::Po214 => (PO214_BIN_MIN, PO214_BIN_MAX),
            PoloniumWindow::Po218 => (PO218_BIN_MIN, PO218_BIN_MAX),
            PoloniumWindow::Po210 => (PO210_BIN_MIN, PO210_BIN_MAX),
        }
    }
}

/// One of the six symbolic bin-boundary keys the pipeline passes
/// around as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinBound {
    Po214Min,
    Po214Max,
    Po218Min,
    Po218Max,
    Po210Min,
    Po210Max,
}

impl BinBound {
    /// Parse the legacy string key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Pol_214_min" => Some(BinBound::Po214Min),
            "Pol_214_max" => Some(BinBound::Po214Max),
            "Pol_218_min" => Some(BinBound::Po218Min),
            "Pol_218_max" => Some(BinBound::Po218Max),
            "Pol_210_min" => Some(BinBound::Po210Min),
            "Pol_210_max" => Some(BinBound::Po210Max),
            _ => None,
        }
    }

    /// Bin number of this boundary.
    pub fn value(self) -> f64 {
        match self {
            BinBound::Po214Min => PO214_BIN_MIN,
            BinBound::Po214Max => PO214_BIN_MAX,
            BinBound::Po218Min => PO218_BIN_MIN,
            BinBound::Po218Max => PO218_BIN_MAX,
            BinBound::Po210Min => PO210_BIN_MIN,
            BinBound::Po210Max => PO210_BIN_MAX,
        }
    }
}

/// Resolve a symbolic bin-boundary key to its bin number.
///
/// Unknown keys resolve to 0.0, matching the Python lookup the
/// acquisition scripts rely on. Use [`resolve_checked`] to get a
/// discriminated error instead.
pub fn resolve(key: &str) -> f64 {
    match BinBound::from_key(key) {
        Some(bound) => bound.value(),
        None => 0.0,
    }
}

/// Strict variant of [`resolve`]: unknown keys are an error.
pub fn resolve_checked(key: &str) -> MonitorResult<f64> {
    BinBound::from_key(key)
        .map(BinBound::value)
        .ok_or_else(|| MonitorError::UnknownBinKey(key.to_string()))
}
