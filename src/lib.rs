pub mod answers;
pub mod candidate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod questionnaire;
pub mod scoring;

pub use answers::{Answer, AnswerSheet};
pub use candidate::Candidate;
pub use catalog::Catalog;
pub use error::LoadError;
pub use evaluation::Evaluation;
pub use scoring::{score, CategoryWeights, ScoredCandidate};
