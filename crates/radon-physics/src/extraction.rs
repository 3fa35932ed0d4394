//! Gas extraction losses.
//!
//! The sample volume is never pumped to 0 mbar, so only the fraction
//! `1 - p1/p0` of the gas reaches the detector.

/// Fraction of gas extracted between a starting pressure `p0` [mbar]
/// and a final pressure `p1` [mbar]. Caller guarantees `p0 != 0`.
pub fn gas_extracted(p0: f64, p1: f64) -> f64 {
    1.0 - p1 / p0
}

/// Error on [`gas_extracted`] from a single shared pressure-gauge
/// uncertainty `ep` [mbar], combining both partial derivatives in
/// quadrature: `sqrt((ep/p0)² + (ep·p1/p0²)²)`.
pub fn err_gas_extracted(p0: f64, p1: f64, ep: f64) -> f64 {
    ((ep / p0).powi(2) + (ep * p1 / (p0 * p0)).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_complement() {
        // gas_extracted + p1/p0 == 1 for any p0 != 0
        for (p0, p1) in [(1300.0, 50.0), (1000.0, 0.0), (800.0, 800.0)] {
            assert!((gas_extracted(p0, p1) + p1 / p0 - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_full_extraction() {
        assert_eq!(gas_extracted(1300.0, 0.0), 1.0);
    }

    #[test]
    fn test_err_gas_extracted_value() {
        let e = err_gas_extracted(1000.0, 100.0, 1.0);
        let expected = ((1.0_f64 / 1000.0).powi(2) + (100.0_f64 / 1.0e6).powi(2)).sqrt();
        assert!((e - expected).abs() < 1e-15);
    }

    #[test]
    fn test_zero_start_pressure_is_ieee() {
        // The p0 = 0 singularity propagates as IEEE infinity, not a panic.
        assert!(gas_extracted(0.0, 100.0).is_infinite());
    }
}
