pub mod config;
pub mod engine;
pub mod explain;
pub mod tiebreak;
pub mod validation;

pub use config::*;
pub use engine::{round2, score, score_candidates, ScoredCandidate};
pub use explain::{pitch, recommend, CriterionReason, Recommendation};
pub use validation::{validate_scoring, MAX_CATEGORY_WEIGHT};
