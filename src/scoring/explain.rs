use serde::{Deserialize, Serialize};

use super::engine::ScoredCandidate;
use crate::answers::Answer;
use crate::candidate::Candidate;
use crate::catalog::Catalog;

/// An answer that points at the recommended candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionReason {
    pub question_id: u32,
    pub category: String,
    pub option_text: String,
}

impl CriterionReason {
    pub fn sentence(&self, candidate: Candidate) -> String {
        format!(
            "Your answer \"{}\" strongly aligns with {}'s strengths in {}.",
            self.option_text,
            candidate,
            self.category.to_lowercase()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub candidate: Candidate,
    pub score: f64,
    /// Top score as a share of all final scores, 0-100
    pub match_percentage: u32,
    pub reasons: Vec<CriterionReason>,
}

/// Derive the recommendation from a ranking produced by `score`.
///
/// Returns `None` for an empty ranking.
pub fn recommend(
    ranking: &[ScoredCandidate],
    answers: &[Answer],
    catalog: &Catalog,
) -> Option<Recommendation> {
    let top = ranking.first()?;

    let total: f64 = ranking.iter().map(|s| s.final_score).sum();
    let match_percentage = if total > 0.0 {
        (top.final_score / total * 100.0).round() as u32
    } else {
        0
    };

    let reasons = answers
        .iter()
        .filter_map(|a| catalog.resolve(a.question_id, a.selected_value))
        .filter(|(_, option)| {
            let max = option.weights.max_weight();
            max > 0 && option.weights.get(top.candidate) == Some(max)
        })
        .map(|(question, option)| CriterionReason {
            question_id: question.id,
            category: question.category.clone(),
            option_text: option.text.clone(),
        })
        .collect();

    Some(Recommendation {
        candidate: top.candidate,
        score: top.final_score,
        match_percentage,
        reasons,
    })
}

/// One-paragraph pitch for a candidate
pub fn pitch(candidate: Candidate) -> &'static str {
    match candidate {
        Candidate::Selenium => "Selenium suits teams that value open-source solutions, have strong technical expertise and need maximum flexibility. It has extensive community support and works well for large teams with complex testing requirements.",
        Candidate::Playwright => "Playwright suits teams that need modern, fast and reliable automation. It excels at cross-browser testing, integrates well with CI/CD and offers a strong developer experience with good documentation.",
        Candidate::Testim => "Testim suits teams that want AI-powered automation with minimal maintenance. Its AI maintenance features keep tests current and reduce flakiness without giving up automation power.",
        Candidate::Mabl => "Mabl suits teams that prioritise intelligent automation with self-healing tests. It offers enterprise-grade support and AI-driven maintenance without requiring extensive coding knowledge.",
    }
}
