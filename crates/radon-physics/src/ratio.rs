//! Isotope count ratios with Poisson counting errors.

/// Ratio between the event counts of isotopes A and B.
pub fn element_ratio(ncount_a: u64, ncount_b: u64) -> f64 {
    ncount_a as f64 / ncount_b as f64
}

/// Error on [`element_ratio`], propagating the Poisson errors √nA and
/// √nB through the ratio in quadrature.
pub fn err_element_ratio(ncount_a: u64, ncount_b: u64) -> f64 {
    let na = ncount_a as f64;
    let nb = ncount_b as f64;
    ((na.sqrt() / nb).powi(2) + (na * nb.sqrt() / (nb * nb)).powi(2)).sqrt()
}
