// =============================================================================
// Analysis Report — Output record of one completed analysis
// =============================================================================
//
// The report is the engine's hand-off to the persistence and narrative
// collaborators. It is Serialize-only: the engine produces reports but never
// reads them back.

use serde::Serialize;

use crate::profile::{AssetProfile, FactorBreakdown};
use crate::types::{ConfidenceLevel, HorizonProbabilities};

/// Everything downstream collaborators need from one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier for this report (UUID v4).
    pub id: String,

    pub asset_name: String,
    pub symbol: String,

    /// Probability per horizon, each in [0, 1] rounded to 3 decimals.
    pub probabilities: HorizonProbabilities,

    pub confidence_level: ConfidenceLevel,

    /// Display-oriented view of the profile's sensitivity factors.
    pub factor_breakdown: FactorBreakdown,

    /// Number of macro events that went into the probabilities.
    pub events_analyzed: usize,

    /// RFC 3339 timestamp of report creation.
    pub created_at: String,
}

impl AnalysisReport {
    pub fn new(
        profile: &AssetProfile,
        probabilities: HorizonProbabilities,
        confidence_level: ConfidenceLevel,
        events_analyzed: usize,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            asset_name: profile.asset_name.clone(),
            symbol: profile.symbol.clone(),
            probabilities,
            confidence_level,
            factor_breakdown: profile.factor_breakdown(),
            events_analyzed,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_config::EngineConfig;
    use crate::profile::CustomProfile;

    fn profile() -> AssetProfile {
        AssetProfile::from_custom(
            &CustomProfile {
                asset_name: "TestToken".to_string(),
                asset_class: "DeFi".to_string(),
                volatility_level: 0.4,
                liquidity_sensitivity: 0.6,
                regulation_sensitivity: 0.5,
                interest_rate_sensitivity: 0.3,
                geopolitical_sensitivity: 0.2,
            },
            &EngineConfig::default(),
        )
    }

    #[test]
    fn report_carries_profile_identity_and_breakdown() {
        let report = AnalysisReport::new(
            &profile(),
            HorizonProbabilities::neutral(),
            ConfidenceLevel::Medium,
            4,
        );

        assert_eq!(report.asset_name, "TestToken");
        assert_eq!(report.events_analyzed, 4);
        assert!((report.factor_breakdown.volatility - 0.4).abs() < 1e-10);
        assert!((report.factor_breakdown.liquidity - 0.4).abs() < 1e-10);
    }

    #[test]
    fn report_ids_are_unique() {
        let p = profile();
        let a = AnalysisReport::new(&p, HorizonProbabilities::neutral(), ConfidenceLevel::Low, 0);
        let b = AnalysisReport::new(&p, HorizonProbabilities::neutral(), ConfidenceLevel::Low, 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn report_serializes_with_expected_fields() {
        let report = AnalysisReport::new(
            &profile(),
            HorizonProbabilities::neutral(),
            ConfidenceLevel::High,
            7,
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["asset_name"], "TestToken");
        assert_eq!(json["confidence_level"], "High");
        assert_eq!(json["events_analyzed"], 7);
        assert!((json["probabilities"]["short_term"].as_f64().unwrap() - 0.5).abs() < 1e-10);
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }
}
