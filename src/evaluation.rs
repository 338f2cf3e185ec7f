//! Scoring pipeline shared by every output format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::{Answer, AnswerSheet};
use crate::candidate::Candidate;
use crate::catalog::Catalog;
use crate::scoring::{recommend, score_candidates, CategoryWeights, Recommendation, ScoredCandidate};

/// Snapshot of one scoring run: what a caller would persist or render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub ranking: Vec<ScoredCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    pub answers: Vec<Answer>,
}

impl Evaluation {
    pub fn build(
        sheet: &AnswerSheet,
        catalog: &Catalog,
        weights: &CategoryWeights,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self::build_for(&Candidate::ALL, sheet, catalog, weights, generated_at)
    }

    /// Like [`Evaluation::build`], ranking only `candidates`.
    pub fn build_for(
        candidates: &[Candidate],
        sheet: &AnswerSheet,
        catalog: &Catalog,
        weights: &CategoryWeights,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let ranking = score_candidates(candidates, &sheet.answers, catalog, weights);
        let recommendation = recommend(&ranking, &sheet.answers, catalog);
        Self {
            generated_at,
            project: sheet.project.clone(),
            ranking,
            recommendation,
            answers: sheet.answers.clone(),
        }
    }

    pub fn recommended(&self) -> Option<Candidate> {
        self.recommendation.as_ref().map(|r| r.candidate)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
