// =============================================================================
// Prism Engine — Macro-influence probability scoring for financial assets
// =============================================================================
//
// A pure scoring library: it turns an asset's sensitivity profile and a list
// of scored macroeconomic events into calibrated probabilities for three time
// horizons, plus a confidence label.
//
// The engine owns no I/O surface. Data fetching, HTTP serving, persistence,
// and narrative generation are external collaborators that feed it typed
// records and consume its reports.
//
// Pipeline:
//
//   raw market payload ──> MarketSnapshot ──> AssetProfile ─┐
//                                                           ├─> ScoringEngine ──> AnalysisReport
//   collaborator readings ──> MacroEvent list ──────────────┘
// =============================================================================

pub mod engine_config;
pub mod error;
pub mod events;
pub mod market_data;
pub mod profile;
pub mod report;
pub mod scoring;
pub mod sentiment;
pub mod types;

pub use engine_config::EngineConfig;
pub use error::EngineError;
pub use events::{EventCategory, InflationReading, MacroEvent, RateReading, RateTrend};
pub use market_data::MarketSnapshot;
pub use profile::{AssetProfile, CustomProfile, FactorBreakdown};
pub use report::AnalysisReport;
pub use scoring::ScoringEngine;
pub use types::{ConfidenceLevel, DataQuality, Horizon, HorizonProbabilities, PriceChanges};
