// =============================================================================
// Engine errors — caller contract violations only
// =============================================================================
//
// The engine degrades gracefully on data-quality problems (missing fields,
// currency-keyed shapes, out-of-range scores). The variants below are the
// only hard failures: they mean the caller handed us something that is not a
// market-data record at all, and silently defaulting would hide the bug.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The raw market-data payload is not a JSON object.
    #[error("market data record is not a JSON object")]
    InvalidRecord,

    /// A field survived shape normalization but still is not a number and
    /// cannot be coerced into one (bool, array, nested object, or a
    /// non-numeric string).
    #[error("field `{field}` is not numeric and cannot be coerced (got {value})")]
    NonNumericField { field: String, value: String },
}
