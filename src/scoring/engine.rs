// =============================================================================
// Scoring Engine — Horizon aggregation and sigmoid calibration
// =============================================================================
//
// The engine fuses per-event influences and market momentum into one
// calibrated probability per time horizon:
//
//   combined    = sum(influences in bucket) * amplification
//               + momentum(horizon) * momentum_weight
//   probability = 1 / (1 + exp(-combined))
//
// Bucketing by whole-day event age (inclusive bounds):
//
//   short term   — age <= 30 days
//   medium term  — age <= 180 days
//   long term    — every event, regardless of age
//
// One event may land in several buckets. The sigmoid bounds the output to a
// valid probability no matter how many influences are summed; the
// amplification and momentum weight are calibration constants carried in
// `EngineConfig`.
//
// The engine is a stateless value type: no shared mutable state, no I/O.
// "Now" is captured once per invocation and threaded through explicitly, so
// every event's age is judged against the same instant within a single run.
// =============================================================================

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::engine_config::EngineConfig;
use crate::events::MacroEvent;
use crate::profile::AssetProfile;
use crate::report::AnalysisReport;
use crate::scoring::influence::influence_score;
use crate::scoring::momentum::momentum;
use crate::scoring::recency::decay_factor;
use crate::types::{ConfidenceLevel, DataQuality, Horizon, HorizonProbabilities};

/// The deterministic scoring model, parameterized by its calibration.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Signed influence of one event on the profiled asset at instant `now`.
    ///
    /// The sensitivity is resolved through the category mapping, falling back
    /// to the configured default for `General` events, and floored so that no
    /// factor can cancel an event entirely.
    pub fn score_event(
        &self,
        profile: &AssetProfile,
        event: &MacroEvent,
        now: DateTime<Utc>,
    ) -> f64 {
        let sensitivity = profile
            .sensitivity(event.category)
            .unwrap_or(self.config.default_sensitivity)
            .max(self.config.sensitivity_floor);

        let recency = decay_factor(event.age_days(now), self.config.recency_half_life_days);

        influence_score(
            sensitivity,
            event.severity_score,
            event.sentiment_score,
            recency,
            event.attention_score,
        )
    }

    /// Probability triple for all three horizons, evaluated at `now`.
    ///
    /// An empty bucket with zero momentum yields exactly 0.5, the neutral
    /// prior. Each probability is rounded to 3 decimal digits.
    pub fn horizon_probabilities(
        &self,
        profile: &AssetProfile,
        events: &[MacroEvent],
        now: DateTime<Utc>,
    ) -> HorizonProbabilities {
        let mut short_sum = 0.0;
        let mut short_count = 0usize;
        let mut medium_sum = 0.0;
        let mut medium_count = 0usize;
        let mut long_sum = 0.0;

        for event in events {
            let influence = self.score_event(profile, event, now);
            let age = event.age_days(now);

            if age <= self.config.short_term_max_age_days {
                short_sum += influence;
                short_count += 1;
            }
            if age <= self.config.medium_term_max_age_days {
                medium_sum += influence;
                medium_count += 1;
            }
            long_sum += influence;
        }

        let probabilities = HorizonProbabilities {
            short_term: self.calibrate(profile, Horizon::ShortTerm, short_sum, short_count),
            medium_term: self.calibrate(profile, Horizon::MediumTerm, medium_sum, medium_count),
            long_term: self.calibrate(profile, Horizon::LongTerm, long_sum, events.len()),
        };

        debug!(
            asset = %profile.asset_name,
            events = events.len(),
            short = probabilities.short_term,
            medium = probabilities.medium_term,
            long = probabilities.long_term,
            "horizon probabilities computed"
        );

        probabilities
    }

    /// Turn one horizon's summed influence into a calibrated probability.
    fn calibrate(
        &self,
        profile: &AssetProfile,
        horizon: Horizon,
        influence_sum: f64,
        bucket_count: usize,
    ) -> f64 {
        let momentum_contribution = momentum(
            &profile.price_changes,
            horizon,
            self.config.momentum_norm_pct,
        ) * self.config.momentum_weight;

        // Neutral prior: nothing to say about this horizon.
        if bucket_count == 0 && momentum_contribution == 0.0 {
            return 0.5;
        }

        let combined = influence_sum * self.config.amplification + momentum_contribution;
        round3(sigmoid(combined))
    }

    /// Confidence label from event count and profile data quality.
    ///
    /// High needs both high-quality data and at least 5 events. Medium-quality
    /// data is Medium regardless of event count, as is any run with at least
    /// 3 events.
    pub fn confidence_level(num_events: usize, quality: DataQuality) -> ConfidenceLevel {
        if quality == DataQuality::High && num_events >= 5 {
            ConfidenceLevel::High
        } else if quality == DataQuality::Medium || num_events >= 3 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Run a full analysis, capturing "now" once at entry.
    pub fn analyze(&self, profile: &AssetProfile, events: &[MacroEvent]) -> AnalysisReport {
        self.analyze_at(profile, events, Utc::now())
    }

    /// Deterministic variant of [`analyze`](Self::analyze) for callers that
    /// manage the clock themselves.
    pub fn analyze_at(
        &self,
        profile: &AssetProfile,
        events: &[MacroEvent],
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let probabilities = self.horizon_probabilities(profile, events, now);
        let confidence = Self::confidence_level(events.len(), profile.data_quality);

        let report = AnalysisReport::new(profile, probabilities, confidence, events.len());

        info!(
            asset = %profile.asset_name,
            report_id = %report.id,
            events = events.len(),
            confidence = %confidence,
            "analysis complete"
        );

        report
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
