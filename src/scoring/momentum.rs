// =============================================================================
// Momentum Signal — Horizon-weighted blend of recent price action
// =============================================================================
//
// Each observed window (24h / 7d / 30d) is normalized to [-1, 1] and blended
// with a per-horizon weight triple. Near-term probability tracks recent price
// action strongly; the long horizon tracks the sustained trend.

use crate::types::{Horizon, PriceChanges};

// =============================================================================
// Decision matrix: per-horizon window weights
// =============================================================================

impl Horizon {
    /// Weight triple `(w_24h, w_7d, w_30d)` for this horizon. Each triple
    /// sums to 1.0.
    pub fn momentum_weights(self) -> (f64, f64, f64) {
        match self {
            // Short term: yesterday matters most.
            Self::ShortTerm => (0.5, 0.3, 0.2),
            // Medium term: balanced, leaning on the monthly move.
            Self::MediumTerm => (0.15, 0.35, 0.50),
            // Long term: dominated by the sustained trend.
            Self::LongTerm => (0.05, 0.15, 0.80),
        }
    }
}

/// Horizon-weighted momentum in [-1, 1].
///
/// `norm_pct` is the full-scale percentage: a move of +/- that many percent
/// in any window saturates that window's contribution.
pub fn momentum(changes: &PriceChanges, horizon: Horizon, norm_pct: f64) -> f64 {
    let normalize = |pct: f64| (pct / norm_pct).clamp(-1.0, 1.0);

    let (w_24h, w_7d, w_30d) = horizon.momentum_weights();
    w_24h * normalize(changes.h24) + w_7d * normalize(changes.d7) + w_30d * normalize(changes.d30)
}
