// =============================================================================
// Engine Configuration — Calibration constants for the scoring model
// =============================================================================
//
// Every tunable constant of the scoring model lives here so that calibration
// runs can adjust behaviour without touching engine code. The amplification
// and momentum weights are empirical values, not derived quantities, so they
// are configuration rather than hard-coded constants.
//
// All fields carry `#[serde(default)]` so that adding new fields never breaks
// loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_amplification() -> f64 {
    8.0
}

fn default_momentum_weight() -> f64 {
    2.5
}

fn default_sensitivity_floor() -> f64 {
    0.15
}

fn default_volatility_floor() -> f64 {
    0.05
}

fn default_default_sensitivity() -> f64 {
    0.5
}

fn default_recency_half_life_days() -> f64 {
    14.0
}

fn default_short_term_max_age_days() -> i64 {
    30
}

fn default_medium_term_max_age_days() -> i64 {
    180
}

fn default_momentum_norm_pct() -> f64 {
    10.0
}

fn default_reference_currency() -> String {
    "usd".to_string()
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Calibration constants for the Prism scoring engine.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // --- Calibration -----------------------------------------------------

    /// Multiplier applied to the summed macro influences of a horizon before
    /// the sigmoid, so that a single strong event spans a useful range of
    /// the output curve.
    #[serde(default = "default_amplification")]
    pub amplification: f64,

    /// Weight of the momentum contribution relative to the macro signal.
    /// Calibrated so a double-digit percentage move saturates its horizon.
    #[serde(default = "default_momentum_weight")]
    pub momentum_weight: f64,

    /// Full-scale percentage for momentum normalization: a price change of
    /// +/- this many percent maps to +/- 1.0.
    #[serde(default = "default_momentum_norm_pct")]
    pub momentum_norm_pct: f64,

    // --- Sensitivity floors ------------------------------------------------

    /// Minimum value enforced on every sensitivity factor, so no factor can
    /// zero out an event's influence entirely.
    #[serde(default = "default_sensitivity_floor")]
    pub sensitivity_floor: f64,

    /// Floor applied to the derived volatility level specifically.
    #[serde(default = "default_volatility_floor")]
    pub volatility_floor: f64,

    /// Sensitivity assumed for event categories with no mapped profile
    /// factor.
    #[serde(default = "default_default_sensitivity")]
    pub default_sensitivity: f64,

    // --- Recency & horizon windows -------------------------------------------

    /// Half-life, in days, of the exponential recency decay.
    #[serde(default = "default_recency_half_life_days")]
    pub recency_half_life_days: f64,

    /// Maximum whole-day age (inclusive) for an event to count toward the
    /// short-term horizon.
    #[serde(default = "default_short_term_max_age_days")]
    pub short_term_max_age_days: i64,

    /// Maximum whole-day age (inclusive) for an event to count toward the
    /// medium-term horizon. The long-term horizon has no age limit.
    #[serde(default = "default_medium_term_max_age_days")]
    pub medium_term_max_age_days: i64,

    // --- Boundary normalization ---------------------------------------------

    /// Currency key selected when an upstream market-data field arrives as a
    /// currency-keyed mapping instead of a scalar.
    #[serde(default = "default_reference_currency")]
    pub reference_currency: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            amplification: default_amplification(),
            momentum_weight: default_momentum_weight(),
            momentum_norm_pct: default_momentum_norm_pct(),
            sensitivity_floor: default_sensitivity_floor(),
            volatility_floor: default_volatility_floor(),
            default_sensitivity: default_default_sensitivity(),
            recency_half_life_days: default_recency_half_life_days(),
            short_term_max_age_days: default_short_term_max_age_days(),
            medium_term_max_age_days: default_medium_term_max_age_days(),
            reference_currency: default_reference_currency(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist or fails to parse, returns an error so the
    /// caller can fall back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            amplification = config.amplification,
            momentum_weight = config.momentum_weight,
            half_life_days = config.recency_half_life_days,
            "engine config loaded"
        );

        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = EngineConfig::default();
        assert!((cfg.amplification - 8.0).abs() < f64::EPSILON);
        assert!((cfg.momentum_weight - 2.5).abs() < f64::EPSILON);
        assert!((cfg.momentum_norm_pct - 10.0).abs() < f64::EPSILON);
        assert!((cfg.sensitivity_floor - 0.15).abs() < f64::EPSILON);
        assert!((cfg.volatility_floor - 0.05).abs() < f64::EPSILON);
        assert!((cfg.default_sensitivity - 0.5).abs() < f64::EPSILON);
        assert!((cfg.recency_half_life_days - 14.0).abs() < f64::EPSILON);
        assert_eq!(cfg.short_term_max_age_days, 30);
        assert_eq!(cfg.medium_term_max_age_days, 180);
        assert_eq!(cfg.reference_currency, "usd");
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
        assert!((cfg.amplification - 8.0).abs() < f64::EPSILON);
        assert!((cfg.sensitivity_floor - 0.15).abs() < f64::EPSILON);
        assert_eq!(cfg.medium_term_max_age_days, 180);
        assert_eq!(cfg.reference_currency, "usd");
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "amplification": 4.0, "reference_currency": "eur" }"#;
        let cfg: EngineConfig = serde_json::from_str(json).unwrap();
        assert!((cfg.amplification - 4.0).abs() < f64::EPSILON);
        assert_eq!(cfg.reference_currency, "eur");
        // Untouched fields keep their defaults.
        assert!((cfg.momentum_weight - 2.5).abs() < f64::EPSILON);
        assert_eq!(cfg.short_term_max_age_days, 30);
    }

    #[test]
    fn roundtrip_serialisation() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: EngineConfig = serde_json::from_str(&json).unwrap();
        assert!((cfg.amplification - cfg2.amplification).abs() < f64::EPSILON);
        assert!((cfg.sensitivity_floor - cfg2.sensitivity_floor).abs() < f64::EPSILON);
        assert_eq!(cfg.reference_currency, cfg2.reference_currency);
    }
}
