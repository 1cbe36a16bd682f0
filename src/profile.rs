// =============================================================================
// Asset Profile — Sensitivity factors derived from market data
// =============================================================================
//
// An asset profile maps each macro event category to a sensitivity in [0, 1].
// Every factor carries a non-zero floor so that no single factor can zero out
// an event's influence entirely.
//
// Two construction paths:
//   - `from_market`: derived from a normalized market snapshot (high quality).
//   - `from_custom`: user-supplied sensitivities for assets without market
//     data (medium quality).
//
// Profiles are built once per analysis and never mutated afterwards.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine_config::EngineConfig;
use crate::events::EventCategory;
use crate::market_data::MarketSnapshot;
use crate::types::{DataQuality, PriceChanges};

/// Full-scale average percentage move: a mean |24h|/|7d| change of 50% maps
/// to volatility 1.0.
const VOLATILITY_FULL_SCALE_PCT: f64 = 50.0;

/// Volume/market-cap ratio treated as fully liquid.
const LIQUIDITY_FULL_SCALE_RATIO: f64 = 0.1;

/// Sensitivity profile of one asset, fixed for the duration of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub asset_name: String,
    pub symbol: String,

    /// How volatile the asset has been recently; doubles as its sensitivity
    /// to volatility-category events.
    pub volatility_level: f64,

    /// Inverse of observed liquidity: thinly traded assets react harder.
    pub liquidity_sensitivity: f64,

    /// Smaller-cap (higher numeric rank) assets are more exposed to
    /// regulatory action.
    pub regulation_sensitivity: f64,

    pub interest_rate_sensitivity: f64,
    pub geopolitical_sensitivity: f64,

    /// Raw percentage price changes, carried along for the momentum signal.
    pub price_changes: PriceChanges,

    pub data_quality: DataQuality,
}

/// User-supplied sensitivity profile for an asset with no market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProfile {
    pub asset_name: String,
    /// Free-form classification, e.g. "DeFi", "Layer 1", "Corporate Stock".
    pub asset_class: String,
    pub volatility_level: f64,
    pub liquidity_sensitivity: f64,
    pub regulation_sensitivity: f64,
    pub interest_rate_sensitivity: f64,
    pub geopolitical_sensitivity: f64,
}

/// Display-oriented view of a profile's factors, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub volatility: f64,
    pub liquidity: f64,
    pub regulation_exposure: f64,
    pub interest_rate_impact: f64,
    pub geopolitical_risk: f64,
}

impl AssetProfile {
    /// Derive a profile from a normalized market snapshot.
    ///
    /// Total function: every input shape produces a fully populated profile.
    /// Malformed numerics were already degraded to 0 at the boundary, so the
    /// formulas here only have to enforce caps and floors.
    pub fn from_market(
        asset_name: impl Into<String>,
        symbol: impl Into<String>,
        snapshot: &MarketSnapshot,
        config: &EngineConfig,
    ) -> Self {
        let floor = config.sensitivity_floor;

        let avg_move =
            (snapshot.price_changes.h24.abs() + snapshot.price_changes.d7.abs()) / 2.0;
        let volatility = (avg_move / VOLATILITY_FULL_SCALE_PCT)
            .min(1.0)
            .max(config.volatility_floor);

        let liquidity = if snapshot.market_cap > 0.0 {
            ((snapshot.total_volume / snapshot.market_cap) / LIQUIDITY_FULL_SCALE_RATIO).min(1.0)
        } else {
            0.1
        };

        let profile = Self {
            asset_name: asset_name.into(),
            symbol: symbol.into(),
            volatility_level: volatility,
            liquidity_sensitivity: (1.0 - liquidity).max(floor),
            regulation_sensitivity: (snapshot.market_cap_rank as f64 / 100.0)
                .min(1.0)
                .max(floor),
            interest_rate_sensitivity: (volatility * 0.8 + 0.15).max(floor),
            geopolitical_sensitivity: (volatility * 0.6 + 0.1).max(floor),
            price_changes: snapshot.price_changes,
            data_quality: DataQuality::High,
        };

        debug!(
            asset = %profile.asset_name,
            volatility = format!("{:.3}", profile.volatility_level),
            liquidity_sens = format!("{:.3}", profile.liquidity_sensitivity),
            regulation_sens = format!("{:.3}", profile.regulation_sensitivity),
            "asset profile built from market data"
        );

        profile
    }

    /// Build a profile from user-supplied sensitivities.
    ///
    /// Each factor is clamped to [0, 1] and then floored; there is no price
    /// history, so momentum contributes nothing for this asset.
    pub fn from_custom(custom: &CustomProfile, config: &EngineConfig) -> Self {
        let floor = config.sensitivity_floor;
        let bounded = |v: f64| v.clamp(0.0, 1.0).max(floor);

        Self {
            asset_name: custom.asset_name.clone(),
            symbol: String::new(),
            volatility_level: bounded(custom.volatility_level),
            liquidity_sensitivity: bounded(custom.liquidity_sensitivity),
            regulation_sensitivity: bounded(custom.regulation_sensitivity),
            interest_rate_sensitivity: bounded(custom.interest_rate_sensitivity),
            geopolitical_sensitivity: bounded(custom.geopolitical_sensitivity),
            price_changes: PriceChanges::default(),
            data_quality: DataQuality::Medium,
        }
    }

    /// Sensitivity factor for an event category.
    ///
    /// `General` has no mapped factor and returns `None`; callers fall back
    /// to the configured default sensitivity.
    pub fn sensitivity(&self, category: EventCategory) -> Option<f64> {
        match category {
            EventCategory::InterestRate => Some(self.interest_rate_sensitivity),
            EventCategory::Regulation => Some(self.regulation_sensitivity),
            EventCategory::Geopolitical => Some(self.geopolitical_sensitivity),
            EventCategory::Liquidity => Some(self.liquidity_sensitivity),
            EventCategory::Volatility => Some(self.volatility_level),
            EventCategory::General => None,
        }
    }

    /// Display-oriented factor summary, rounded to 2 decimals.
    pub fn factor_breakdown(&self) -> FactorBreakdown {
        let round2 = |v: f64| (v * 100.0).round() / 100.0;
        FactorBreakdown {
            volatility: round2(self.volatility_level),
            liquidity: round2(1.0 - self.liquidity_sensitivity),
            regulation_exposure: round2(self.regulation_sensitivity),
            interest_rate_impact: round2(self.interest_rate_sensitivity),
            geopolitical_risk: round2(self.geopolitical_sensitivity),
        }
    }
}
