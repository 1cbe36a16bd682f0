// =============================================================================
// Shared types used across the Prism scoring engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// One of the three analysis windows a probability is computed for.
///
/// `ShortTerm` covers 0-4 weeks, `MediumTerm` 1-6 months, `LongTerm`
/// 6-24 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Horizon {
    /// All horizons, nearest first.
    pub const ALL: [Horizon; 3] = [Horizon::ShortTerm, Horizon::MediumTerm, Horizon::LongTerm];
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortTerm => write!(f, "short_term"),
            Self::MediumTerm => write!(f, "medium_term"),
            Self::LongTerm => write!(f, "long_term"),
        }
    }
}

/// Provenance-based quality of the data behind an asset profile.
///
/// `High` means the profile was derived from live market data, `Medium`
/// means a user-supplied sensitivity profile, `Low` means minimal data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl Default for DataQuality {
    fn default() -> Self {
        Self::Low
    }
}

impl std::fmt::Display for DataQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Confidence label attached to a finished analysis.
///
/// Derived from the number of events analysed and the profile data quality;
/// never stored independently of the report it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Raw percentage price changes over the three observed windows.
///
/// Carried unmodified from market data into the asset profile so the
/// momentum calculation can weight them per horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChanges {
    /// Change over the last 24 hours, in percent.
    pub h24: f64,
    /// Change over the last 7 days, in percent.
    pub d7: f64,
    /// Change over the last 30 days, in percent.
    pub d30: f64,
}

impl PriceChanges {
    pub fn new(h24: f64, d7: f64, d30: f64) -> Self {
        Self { h24, d7, d30 }
    }
}

/// The probability triple produced by one analysis run.
///
/// Each value is in [0, 1] and rounded to 3 decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonProbabilities {
    pub short_term: f64,
    pub medium_term: f64,
    pub long_term: f64,
}

impl HorizonProbabilities {
    /// The neutral prior: 0.5 for every horizon.
    pub fn neutral() -> Self {
        Self {
            short_term: 0.5,
            medium_term: 0.5,
            long_term: 0.5,
        }
    }

    /// The probability for a single horizon.
    pub fn for_horizon(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::ShortTerm => self.short_term,
            Horizon::MediumTerm => self.medium_term,
            Horizon::LongTerm => self.long_term,
        }
    }
}
