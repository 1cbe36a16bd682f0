// =============================================================================
// Scoring — The deterministic probability model
// =============================================================================

pub mod engine;
pub mod influence;
pub mod momentum;
pub mod recency;

pub use engine::ScoringEngine;
pub use influence::influence_score;
pub use momentum::momentum;
pub use recency::{decay_factor, recency_score};
