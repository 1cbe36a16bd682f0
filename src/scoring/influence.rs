// =============================================================================
// Influence Score — Signed contribution of one event
// =============================================================================
//
// influence = sensitivity * severity * recency * attention * direction
//
// The four magnitude factors are each in [0, 1]; direction maps sentiment
// from [0, 1] onto [-1, +1] with 0.5 neutral. The product is therefore in
// [-1, +1]: positive means upward pressure, negative means downward.

/// Signed influence of a single event on a single asset.
///
/// Pure and stateless. A neutral sentiment (0.5) always yields exactly 0,
/// regardless of how severe or well-attended the event is.
pub fn influence_score(
    sensitivity: f64,
    severity: f64,
    sentiment: f64,
    recency: f64,
    attention: f64,
) -> f64 {
    let magnitude = sensitivity * severity * recency * attention;
    let direction = (sentiment - 0.5) * 2.0;
    magnitude * direction
}
