// =============================================================================
// Macro Events — Scored macroeconomic events and their builders
// =============================================================================
//
// A macro event is an ephemeral record: constructed per analysis call from
// collaborator data, scored, and discarded. Scores are clamped to [0, 1] at
// construction and on deserialization so the scoring core never sees an
// out-of-range value.
//
// Event categories form a closed set mapped to profile factors. Unknown wire
// tags degrade to `General` once, at the parse boundary, instead of silently
// falling back inside every sensitivity lookup.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::sentiment::classify_headline;

// =============================================================================
// EventCategory
// =============================================================================

/// Closed set of macro event categories.
///
/// Each category except `General` maps to one sensitivity factor of the
/// asset profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    InterestRate,
    Regulation,
    Geopolitical,
    Liquidity,
    Volatility,
    /// Catch-all for unrecognized event types; scored with the configured
    /// default sensitivity.
    General,
}

impl EventCategory {
    /// Parse a wire slug. Unknown input degrades to `General`.
    pub fn parse(slug: &str) -> Self {
        match slug.trim().to_lowercase().as_str() {
            "interest_rate" => Self::InterestRate,
            "regulation" => Self::Regulation,
            "geopolitical" => Self::Geopolitical,
            "liquidity" => Self::Liquidity,
            "volatility" => Self::Volatility,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InterestRate => "interest_rate",
            Self::Regulation => "regulation",
            Self::Geopolitical => "geopolitical",
            Self::Liquidity => "liquidity",
            Self::Volatility => "volatility",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for EventCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<EventCategory> for String {
    fn from(c: EventCategory) -> Self {
        c.as_str().to_string()
    }
}

// =============================================================================
// MacroEvent
// =============================================================================

/// One scored macroeconomic event.
///
/// Sentiment 0.5 is neutral; below 0.5 is negative pressure, above 0.5 is
/// positive. All three scores live in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroEvent {
    #[serde(rename = "event_type")]
    pub category: EventCategory,

    #[serde(rename = "event_description")]
    pub description: String,

    /// How significant the event is.
    #[serde(deserialize_with = "de_unit_interval")]
    pub severity_score: f64,

    /// 0.0 very negative .. 1.0 very positive; 0.5 neutral.
    #[serde(deserialize_with = "de_unit_interval")]
    pub sentiment_score: f64,

    /// Media / market attention level.
    #[serde(deserialize_with = "de_unit_interval")]
    pub attention_score: f64,

    /// When the event occurred.
    #[serde(rename = "created_at")]
    pub occurred_at: DateTime<Utc>,
}

/// Clamp deserialized scores into [0, 1].
fn de_unit_interval<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.clamp(0.0, 1.0))
}

impl MacroEvent {
    /// Create an event, clamping every score into [0, 1].
    pub fn new(
        category: EventCategory,
        description: impl Into<String>,
        severity_score: f64,
        sentiment_score: f64,
        attention_score: f64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            severity_score: severity_score.clamp(0.0, 1.0),
            sentiment_score: sentiment_score.clamp(0.0, 1.0),
            attention_score: attention_score.clamp(0.0, 1.0),
            occurred_at,
        }
    }

    /// Whole-day age of the event at the evaluation instant.
    ///
    /// Truncating arithmetic: an event 30.9 days old is 30 days old. Events
    /// timestamped in the future report a negative age.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.occurred_at).num_days()
    }

    /// Build an interest-rate event from a central-bank rate reading.
    pub fn from_rate_reading(reading: &RateReading, now: DateTime<Utc>) -> Self {
        let trend = reading.trend();
        let sentiment = match trend {
            // Rising rates pressure risk assets.
            RateTrend::Rising => 0.4,
            RateTrend::Falling | RateTrend::Stable => 0.6,
        };
        Self::new(
            EventCategory::InterestRate,
            format!(
                "Federal funds rate at {}%, trend {}",
                reading.current_rate, trend
            ),
            0.7,
            sentiment,
            0.8,
            now,
        )
    }

    /// Build an interest-rate event from a year-over-year inflation reading.
    pub fn from_inflation_reading(reading: &InflationReading, now: DateTime<Utc>) -> Self {
        let severity = (reading.yoy_inflation.abs() / 10.0).min(1.0);
        let sentiment = if reading.yoy_inflation > 3.0 { 0.3 } else { 0.6 };
        Self::new(
            EventCategory::InterestRate,
            format!(
                "Inflation at {}% year-over-year",
                reading.yoy_inflation
            ),
            severity,
            sentiment,
            0.7,
            now,
        )
    }

    /// Build a regulation-category event from a news headline, with sentiment
    /// from the keyword classifier.
    pub fn from_headline(headline: &str, now: DateTime<Utc>) -> Self {
        Self::new(
            EventCategory::Regulation,
            headline,
            0.6,
            classify_headline(headline),
            0.7,
            now,
        )
    }
}

// =============================================================================
// Collaborator readings
// =============================================================================

/// A central-bank policy rate observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateReading {
    pub current_rate: f64,
    pub previous_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTrend {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for RateTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

impl RateReading {
    pub fn trend(&self) -> RateTrend {
        if self.current_rate > self.previous_rate {
            RateTrend::Rising
        } else if self.current_rate < self.previous_rate {
            RateTrend::Falling
        } else {
            RateTrend::Stable
        }
    }
}

/// A year-over-year inflation observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationReading {
    pub yoy_inflation: f64,
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-26T12:00:00Z".parse().unwrap()
    }

    // ---- EventCategory -----------------------------------------------------

    #[test]
    fn known_slugs_parse_to_their_category() {
        assert_eq!(EventCategory::parse("interest_rate"), EventCategory::InterestRate);
        assert_eq!(EventCategory::parse("regulation"), EventCategory::Regulation);
        assert_eq!(EventCategory::parse("geopolitical"), EventCategory::Geopolitical);
        assert_eq!(EventCategory::parse("liquidity"), EventCategory::Liquidity);
        assert_eq!(EventCategory::parse("volatility"), EventCategory::Volatility);
    }

    #[test]
    fn unknown_slug_degrades_to_general() {
        assert_eq!(EventCategory::parse("regulatoin"), EventCategory::General);
        assert_eq!(EventCategory::parse(""), EventCategory::General);
        assert_eq!(EventCategory::parse("elections"), EventCategory::General);
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(EventCategory::parse(" Regulation "), EventCategory::Regulation);
        assert_eq!(EventCategory::parse("INTEREST_RATE"), EventCategory::InterestRate);
    }

    #[test]
    fn category_serde_roundtrips_through_strings() {
        let json = serde_json::to_string(&EventCategory::InterestRate).unwrap();
        assert_eq!(json, "\"interest_rate\"");
        let parsed: EventCategory = serde_json::from_str("\"no_such_type\"").unwrap();
        assert_eq!(parsed, EventCategory::General);
    }

    // ---- MacroEvent --------------------------------------------------------

    #[test]
    fn constructor_clamps_scores() {
        let e = MacroEvent::new(EventCategory::General, "x", 1.5, -0.3, 0.7, now());
        assert!((e.severity_score - 1.0).abs() < 1e-10);
        assert!(e.sentiment_score.abs() < 1e-10);
        assert!((e.attention_score - 0.7).abs() < 1e-10);
    }

    #[test]
    fn deserialization_uses_wire_names_and_clamps() {
        let json = r#"{
            "event_type": "regulation",
            "event_description": "SEC proposes new disclosure rules",
            "severity_score": 0.6,
            "sentiment_score": 1.4,
            "attention_score": 0.7,
            "created_at": "2026-08-20T00:00:00Z"
        }"#;
        let e: MacroEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.category, EventCategory::Regulation);
        assert_eq!(e.description, "SEC proposes new disclosure rules");
        assert!((e.sentiment_score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn age_truncates_to_whole_days() {
        let e = MacroEvent::new(
            EventCategory::General,
            "x",
            0.5,
            0.5,
            0.5,
            now() - Duration::hours(30 * 24 + 21),
        );
        // 30.875 days old counts as 30.
        assert_eq!(e.age_days(now()), 30);

        let future = MacroEvent::new(
            EventCategory::General,
            "x",
            0.5,
            0.5,
            0.5,
            now() + Duration::days(2),
        );
        assert_eq!(future.age_days(now()), -2);
    }

    // ---- builders ----------------------------------------------------------

    #[test]
    fn rising_rate_reading_is_bearish() {
        let reading = RateReading {
            current_rate: 5.5,
            previous_rate: 5.25,
        };
        assert_eq!(reading.trend(), RateTrend::Rising);

        let e = MacroEvent::from_rate_reading(&reading, now());
        assert_eq!(e.category, EventCategory::InterestRate);
        assert!((e.severity_score - 0.7).abs() < 1e-10);
        assert!((e.sentiment_score - 0.4).abs() < 1e-10);
        assert!((e.attention_score - 0.8).abs() < 1e-10);
        assert!(e.description.contains("rising"));
    }

    #[test]
    fn falling_or_stable_rate_reading_is_mildly_bullish() {
        let falling = RateReading {
            current_rate: 5.0,
            previous_rate: 5.25,
        };
        let e = MacroEvent::from_rate_reading(&falling, now());
        assert!((e.sentiment_score - 0.6).abs() < 1e-10);

        let stable = RateReading {
            current_rate: 5.0,
            previous_rate: 5.0,
        };
        assert_eq!(stable.trend(), RateTrend::Stable);
        let e = MacroEvent::from_rate_reading(&stable, now());
        assert!((e.sentiment_score - 0.6).abs() < 1e-10);
    }

    #[test]
    fn inflation_reading_scales_severity_with_magnitude() {
        let hot = InflationReading { yoy_inflation: 8.0 };
        let e = MacroEvent::from_inflation_reading(&hot, now());
        assert!((e.severity_score - 0.8).abs() < 1e-10);
        assert!((e.sentiment_score - 0.3).abs() < 1e-10);

        let tame = InflationReading { yoy_inflation: 2.0 };
        let e = MacroEvent::from_inflation_reading(&tame, now());
        assert!((e.severity_score - 0.2).abs() < 1e-10);
        assert!((e.sentiment_score - 0.6).abs() < 1e-10);

        // Hyperinflation saturates severity.
        let hyper = InflationReading { yoy_inflation: 42.0 };
        let e = MacroEvent::from_inflation_reading(&hyper, now());
        assert!((e.severity_score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn headline_event_uses_keyword_sentiment() {
        let e = MacroEvent::from_headline("Regulators announce crypto crackdown", now());
        assert_eq!(e.category, EventCategory::Regulation);
        assert!((e.severity_score - 0.6).abs() < 1e-10);
        assert!((e.sentiment_score - 0.3).abs() < 1e-10);
        assert!((e.attention_score - 0.7).abs() < 1e-10);
    }
}
