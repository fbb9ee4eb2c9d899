pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, score_leads, Rule, ScoreResult};
pub use validation::validate_scoring;
