// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Radon Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stateless decay and activity formulas for the radon emanation monitor.
//!
//! Port of `rdEmanation.py` and `rdEmanationActivity.py`.
//! Every function is a pure mapping from its numeric arguments; the
//! acquisition pipeline owns all I/O, histogramming and plotting.

pub mod activity;
pub mod binning;
pub mod decay;
pub mod efficiency;
pub mod emanation;
pub mod extraction;
pub mod mode;
pub mod ratio;
