// =============================================================================
// Recency Decay — Half-life down-weighting of event age
// =============================================================================

use chrono::{DateTime, Utc};

/// Exponential decay factor for an event `days_ago` days old.
///
/// Half-life model: the factor halves every `half_life_days`. Clamped to
/// [0, 1], so a zero or negative age yields 1.0. A non-positive half-life
/// degrades to a step function (1.0 at age <= 0, else 0.0).
pub fn decay_factor(days_ago: i64, half_life_days: f64) -> f64 {
    if half_life_days <= 0.0 {
        return if days_ago <= 0 { 1.0 } else { 0.0 };
    }
    let decay = (-(days_ago as f64) * 2.0_f64.ln() / half_life_days).exp();
    decay.clamp(0.0, 1.0)
}

/// Recency score of an event at the evaluation instant `now`.
///
/// Age is measured in whole days (truncating), so everything that happened
/// within the last 24 hours decays not at all.
pub fn recency_score(
    occurred_at: DateTime<Utc>,
    now: DateTime<Utc>,
    half_life_days: f64,
) -> f64 {
    decay_factor((now - occurred_at).num_days(), half_life_days)
}
