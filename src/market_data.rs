// =============================================================================
// Market Data Normalization — strict typed snapshot from a dynamic payload
// =============================================================================
//
// Upstream market-data providers deliver numeric fields in two shapes: plain
// scalars (12.5) or currency-keyed mappings ({"usd": 12.5}). This module
// flattens that dynamism at the boundary so the scoring core only ever sees
// a strict typed record.
//
// Degradation rules:
//   - missing field / JSON null / missing currency key   => 0.0
//   - numeric string                                      => parsed value
//   - bool, array, nested object, non-numeric string      => hard error
//   - market_cap_rank is special: any malformed shape     => 1000

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;
use crate::types::PriceChanges;

/// Rank assumed when the provider supplies none: deep enough that the
/// regulation-sensitivity cap (rank/100, capped at 1.0) saturates.
const DEFAULT_RANK: u32 = 1000;

/// Strict typed snapshot of one asset's market state.
///
/// Produced once per analysis from the raw provider payload; the scoring
/// core never touches `serde_json::Value` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub price_changes: PriceChanges,
    /// Market-cap rank; defaults to 1000 when the provider supplies none.
    pub market_cap_rank: u32,
    pub ath: f64,
    pub ath_change_pct: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl MarketSnapshot {
    /// Normalize a raw provider payload into a typed snapshot.
    ///
    /// `reference_currency` selects the entry used when a field arrives as a
    /// currency-keyed mapping. Missing and null fields degrade to 0.0; a
    /// payload that is not a JSON object, or a field value that cannot be
    /// coerced to a number, is a contract violation and fails loudly.
    pub fn from_raw(raw: &Value, reference_currency: &str) -> Result<Self, EngineError> {
        let record = raw.as_object().ok_or(EngineError::InvalidRecord)?;

        let field =
            |name: &str| coerce_numeric(name, record.get(name), reference_currency);

        Ok(Self {
            current_price: field("current_price")?,
            market_cap: field("market_cap")?,
            total_volume: field("total_volume")?,
            price_changes: PriceChanges::new(
                field("price_change_percentage_24h")?,
                field("price_change_percentage_7d")?,
                field("price_change_percentage_30d")?,
            ),
            market_cap_rank: coerce_rank(record.get("market_cap_rank")),
            ath: field("ath")?,
            ath_change_pct: field("ath_change_percentage")?,
            high_24h: field("high_24h")?,
            low_24h: field("low_24h")?,
        })
    }
}

// =============================================================================
// Coercion helpers
// =============================================================================

/// Coerce one raw field into an `f64`.
///
/// Handles the scalar-or-currency-keyed duality; anything absent or null
/// becomes 0.0, and anything fundamentally non-numeric is an error.
fn coerce_numeric(
    field: &str,
    value: Option<&Value>,
    currency: &str,
) -> Result<f64, EngineError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(0.0),
        Some(v) => v,
    };

    match value {
        Value::Object(map) => match map.get(currency) {
            None | Some(Value::Null) => Ok(0.0),
            Some(inner) => coerce_scalar(field, inner),
        },
        _ => coerce_scalar(field, value),
    }
}

/// Coerce an already-unwrapped scalar into an `f64`.
fn coerce_scalar(field: &str, value: &Value) -> Result<f64, EngineError> {
    match value {
        Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(non_numeric(field, value)),
        },
        _ => Err(non_numeric(field, value)),
    }
}

/// Normalize the market-cap rank. The rank never hard-errors: any malformed
/// or missing shape falls back to [`DEFAULT_RANK`].
fn coerce_rank(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f as u32).unwrap_or(DEFAULT_RANK),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .map(|f| f as u32)
            .unwrap_or(DEFAULT_RANK),
        _ => DEFAULT_RANK,
    }
}

fn non_numeric(field: &str, value: &Value) -> EngineError {
    EngineError::NonNumericField {
        field: field.to_string(),
        value: value.to_string(),
    }
}
