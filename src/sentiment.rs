// =============================================================================
// Headline Sentiment — Keyword-based classifier for news text
// =============================================================================
//
// Deliberately simple: counts fixed positive and negative keywords and maps
// the majority to one of three sentiment scores. No model, no I/O. A richer
// classifier can replace this without touching the scoring core, since events
// only carry the resulting score.

const POSITIVE_KEYWORDS: [&str; 8] = [
    "surge", "boom", "adoption", "growth", "positive", "bullish", "rally", "gain",
];

const NEGATIVE_KEYWORDS: [&str; 8] = [
    "crash", "ban", "regulation", "crackdown", "bearish", "decline", "fall", "risk",
];

/// Classify a headline into a sentiment score.
///
/// Returns 0.7 when positive keywords outnumber negative ones, 0.3 for the
/// reverse, and 0.5 on a tie (including no hits at all).
pub fn classify_headline(text: &str) -> f64 {
    let lower = text.to_lowercase();

    let positives = POSITIVE_KEYWORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let negatives = NEGATIVE_KEYWORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();

    if positives > negatives {
        0.7
    } else if negatives > positives {
        0.3
    } else {
        0.5
    }
}
