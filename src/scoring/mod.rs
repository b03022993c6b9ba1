pub mod config;
pub mod engine;
pub mod validation;

pub use config::{Tier, Weights, TIERS, WEIGHTS};
pub use engine::{calculate_score, classify, evaluate, ScoreResult, Stats};
pub use validation::{validate_tiers, validate_weights};
