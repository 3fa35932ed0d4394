// ─────────────────────────────────────────────────────────────────────
// Radon Emanation Monitor — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLINDING_TIME_MIN, DEFAULT_EFFICIENCY, DEFAULT_ERROR_EFFICIENCY};
use crate::error::{MonitorError, MonitorResult};

/// Top-level monitor configuration.
/// Maps 1:1 to monitor_config.json schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub monitor_name: String,
    #[serde(default)]
    pub detector: DetectorParams,
    /// Optional emanation source description.
    /// When absent, the pipeline passes source parameters by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceParams>,
}

/// Detector calibration parameters (optional in JSON config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Counting efficiency (default: 0.21)
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    /// Uncertainty on the counting efficiency (default: 0.01)
    #[serde(default = "default_error_efficiency")]
    pub error_efficiency: f64,
    /// Blinding time after HV ramp [min] (default: 300)
    #[serde(default = "default_blinding_time")]
    pub blinding_time_min: f64,
}

fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY
}
fn default_error_efficiency() -> f64 {
    DEFAULT_ERROR_EFFICIENCY
}
fn default_blinding_time() -> f64 {
    DEFAULT_BLINDING_TIME_MIN
}

impl Default for DetectorParams {
    fn default() -> Self {
        DetectorParams {
            efficiency: default_efficiency(),
            error_efficiency: default_error_efficiency(),
            blinding_time_min: default_blinding_time(),
        }
    }
}

/// Emanation source parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceParams {
    /// Intrinsic activity of the source [Bq].
    pub intrinsic_activity_bq: f64,
    /// Time spent emanating [day].
    pub emanation_time_days: f64,
    /// Uncertainty on the emanation time [day].
    #[serde(default)]
    pub emanation_time_err_days: f64,
}

impl MonitorConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> MonitorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Check the calibration values fall in their physical ranges.
    pub fn validate(&self) -> MonitorResult<()> {
        let d = &self.detector;
        if !(d.efficiency > 0.0 && d.efficiency <= 1.0) {
            return Err(MonitorError::Config(format!(
                "efficiency must be in (0, 1], got {}",
                d.efficiency
            )));
        }
        if d.error_efficiency < 0.0 {
            return Err(MonitorError::Config(format!(
                "error_efficiency must be non-negative, got {}",
                d.error_efficiency
            )));
        }
        if d.blinding_time_min < 0.0 {
            return Err(MonitorError::Config(format!(
                "blinding_time_min must be non-negative, got {}",
                d.blinding_time_min
            )));
        }
        Ok(())
    }
}

/// Blinding time after starting the HVs [min]. Python default: 300.
pub fn blinding_time(tblind: Option<f64>) -> f64 {
    tblind.unwrap_or(DEFAULT_BLINDING_TIME_MIN)
}

/// Assumed rd-monitor efficiency. Python default: 0.21.
pub fn efficiency(eff: Option<f64>) -> f64 {
    eff.unwrap_or(DEFAULT_EFFICIENCY)
}

/// Assumed uncertainty on the rd-monitor efficiency. Python default: 0.01.
pub fn error_efficiency(eeff: Option<f64>) -> f64 {
    eeff.unwrap_or(DEFAULT_ERROR_EFFICIENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Build path relative to the workspace root.
    /// CARGO_MANIFEST_DIR points to crates/radon-types/ at compile time.
    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    #[test]
    fn test_load_monitor_config() {
        let path = workspace_root().join("monitor_config.json");
        let cfg = MonitorConfig::from_file(&path.to_string_lossy()).unwrap();
        assert_eq!(cfg.monitor_name, "MonA");
        assert!((cfg.detector.efficiency - 0.21).abs() < 1e-12);
        assert!((cfg.detector.error_efficiency - 0.01).abs() < 1e-12);
        assert!((cfg.detector.blinding_time_min - 300.0).abs() < 1e-12);
        let source = cfg.source.as_ref().expect("example config carries a source block");
        assert!((source.intrinsic_activity_bq - 2.5).abs() < 1e-12);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_detector_defaults_fill_in() {
        let cfg: MonitorConfig = serde_json::from_str(r#"{"monitor_name": "MonB"}"#).unwrap();
        assert!((cfg.detector.efficiency - 0.21).abs() < 1e-12);
        assert!((cfg.detector.error_efficiency - 0.01).abs() < 1e-12);
        assert!((cfg.detector.blinding_time_min - 300.0).abs() < 1e-12);
        assert!(cfg.source.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_efficiency() {
        let mut cfg: MonitorConfig = serde_json::from_str(r#"{"monitor_name": "MonB"}"#).unwrap();
        cfg.detector.efficiency = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_accessors_default_and_override() {
        assert_eq!(blinding_time(None), 300.0);
        assert_eq!(blinding_time(Some(120.0)), 120.0);
        assert_eq!(efficiency(None), 0.21);
        assert_eq!(efficiency(Some(0.3)), 0.3);
        assert_eq!(error_efficiency(None), 0.01);
        assert_eq!(error_efficiency(Some(0.02)), 0.02);
    }
}
