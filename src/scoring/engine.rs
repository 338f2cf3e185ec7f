use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::config::CategoryWeights;
use super::tiebreak::resolve_ties;
use crate::answers::Answer;
use crate::candidate::Candidate;
use crate::catalog::Catalog;

/// Multiplier turning the category-weighted sum into a base score.
pub const BASE_SCORE_SCALE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Base score plus tie-break, rounded to 2 decimals. Unique per ranking.
    pub final_score: f64,
    /// `round2(weighted_score * 10)`
    pub base_score: f64,
    /// Sum of category weights over strong-match answers
    pub weighted_score: f64,
    pub strong_matches: u32,
    /// Increment added to separate this candidate from tied ones
    pub tie_break: f64,
}

/// Round half away from zero to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score in whole hundredths, the precision ties are judged at.
pub(crate) fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Score every candidate against `answers` and return them best-first.
pub fn score(
    answers: &[Answer],
    catalog: &Catalog,
    weights: &CategoryWeights,
) -> Vec<ScoredCandidate> {
    score_candidates(&Candidate::ALL, answers, catalog, weights)
}

/// Score an explicit candidate set.
///
/// Answers that do not resolve against the catalog are skipped. The result
/// is sorted by `final_score` descending and no two entries share a score
/// at 2 decimals. An empty candidate set yields an empty ranking.
pub fn score_candidates(
    candidates: &[Candidate],
    answers: &[Answer],
    catalog: &Catalog,
    weights: &CategoryWeights,
) -> Vec<ScoredCandidate> {
    let candidates: BTreeSet<Candidate> = candidates.iter().copied().collect();
    let mut contributions: Vec<(Candidate, Vec<f64>)> =
        candidates.into_iter().map(|c| (c, Vec::new())).collect();

    for answer in answers {
        let Some((question, option)) = catalog.resolve(answer.question_id, answer.selected_value)
        else {
            continue;
        };
        let multiplier = weights.get(&question.category);
        for (candidate, parts) in contributions.iter_mut() {
            if option.weights.is_strong_match(*candidate) {
                parts.push(multiplier);
            }
        }
    }

    let mut scored: Vec<ScoredCandidate> = contributions
        .into_iter()
        .map(|(candidate, mut parts)| {
            // Summing in sorted order keeps the total independent of answer order
            parts.sort_by(f64::total_cmp);
            let weighted_score: f64 = parts.iter().sum();
            let base_score = round2(weighted_score * BASE_SCORE_SCALE);
            ScoredCandidate {
                candidate,
                final_score: base_score,
                base_score,
                weighted_score,
                strong_matches: parts.len() as u32,
                tie_break: 0.0,
            }
        })
        .collect();

    resolve_ties(&mut scored);

    scored.sort_by(|a, b| {
        hundredths(b.final_score)
            .cmp(&hundredths(a.final_score))
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Question, QuestionOption, WeightTable};

    fn weights(strong: &[Candidate]) -> WeightTable {
        Candidate::ALL
            .into_iter()
            .map(|c| (c, if strong.contains(&c) { 10 } else { 5 }))
            .collect()
    }

    fn catalog(questions: &[(u32, &str, &[Candidate])]) -> Catalog {
        Catalog::new(
            questions
                .iter()
                .map(|(id, category, strong)| Question {
                    id: *id,
                    category: category.to_string(),
                    text: format!("Question {}", id),
                    options: vec![
                        QuestionOption {
                            value: 1,
                            text: "Strong option".to_string(),
                            weights: weights(strong),
                        },
                        QuestionOption {
                            value: 2,
                            text: "Neutral option".to_string(),
                            weights: weights(&[]),
                        },
                    ],
                })
                .collect(),
        )
        .unwrap()
    }

    fn ranking(result: &[ScoredCandidate]) -> Vec<(Candidate, f64)> {
        result.iter().map(|s| (s.candidate, s.final_score)).collect()
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(12.0), 12.0);
        assert_eq!(round2(11.504), 11.5);
    }

    #[test]
    fn test_empty_answers_alphabetical() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Selenium])]);
        let result = score(&[], &catalog, &CategoryWeights::default());
        assert_eq!(
            ranking(&result),
            vec![
                (Candidate::Mabl, 0.04),
                (Candidate::Playwright, 0.03),
                (Candidate::Selenium, 0.02),
                (Candidate::Testim, 0.01),
            ]
        );
        assert!(result.iter().all(|s| s.base_score == 0.0));
    }

    #[test]
    fn test_single_strong_match() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Selenium])]);
        let weights = CategoryWeights::from([("Budget", 1.2)]);
        let result = score(&[Answer::new(1, 1)], &catalog, &weights);

        assert_eq!(
            ranking(&result),
            vec![
                (Candidate::Selenium, 12.0),
                (Candidate::Mabl, 0.03),
                (Candidate::Playwright, 0.02),
                (Candidate::Testim, 0.01),
            ]
        );
        assert_eq!(result[0].tie_break, 0.0);
        assert_eq!(result[0].strong_matches, 1);
    }

    #[test]
    fn test_equal_pair_breaks_alphabetically() {
        let both = &[Candidate::Playwright, Candidate::Testim][..];
        let catalog = catalog(&[(1, "Execution", both), (2, "Scale", both)]);
        let weights = CategoryWeights::from([("Execution", 1.0), ("Scale", 1.0)]);
        let result = score(&[Answer::new(1, 1), Answer::new(2, 1)], &catalog, &weights);

        assert_eq!(
            ranking(&result),
            vec![
                (Candidate::Playwright, 20.02),
                (Candidate::Testim, 20.01),
                (Candidate::Mabl, 0.02),
                (Candidate::Selenium, 0.01),
            ]
        );
        assert_eq!(result[0].base_score, 20.0);
        assert_eq!(result[0].tie_break, 0.02);
    }

    #[test]
    fn test_float_noise_is_not_a_difference() {
        // Selenium: 1.2 + 1.0, Mabl: 1.1 + 1.1. Both land on 22.00 and the
        // raw sums only differ by float noise, so name order decides.
        let catalog = catalog(&[
            (1, "Budget", &[Candidate::Selenium]),
            (2, "Setup", &[Candidate::Selenium]),
            (3, "Team", &[Candidate::Mabl]),
            (4, "Support", &[Candidate::Mabl]),
        ]);
        let result = score(
            &[
                Answer::new(1, 1),
                Answer::new(2, 1),
                Answer::new(3, 1),
                Answer::new(4, 1),
            ],
            &catalog,
            &CategoryWeights::default(),
        );
        assert_eq!(result[0].candidate, Candidate::Mabl);
        assert_eq!(result[0].final_score, 22.02);
        assert_eq!(result[1].candidate, Candidate::Selenium);
        assert_eq!(result[1].final_score, 22.01);
    }

    #[test]
    fn test_sub_threshold_weighted_difference_uses_name() {
        let catalog = catalog(&[
            (1, "A", &[Candidate::Testim]),
            (2, "B", &[Candidate::Mabl]),
        ]);
        // 10.004 and 10.0 share 10.00 and sit 0.0004 apart in raw score
        let weights = CategoryWeights::from([("A", 1.0004), ("B", 1.0)]);
        let result = score(&[Answer::new(1, 1), Answer::new(2, 1)], &catalog, &weights);
        assert_eq!(result[0].candidate, Candidate::Mabl);
        assert_eq!(result[0].final_score, 10.02);
        assert_eq!(result[1].final_score, 10.01);

        // 10.009 rounds to 10.01: separate groups, no nudge
        let weights = CategoryWeights::from([("A", 1.0009), ("B", 1.0)]);
        let result = score(&[Answer::new(1, 1), Answer::new(2, 1)], &catalog, &weights);
        assert_eq!(result[0].candidate, Candidate::Testim);
        assert_eq!(result[0].final_score, 10.01);
        assert_eq!(result[0].tie_break, 0.0);
    }

    #[test]
    fn test_nudge_collision_is_separated() {
        // Testim sits alone on 10.01; the Mabl/Playwright pair on 10.00 is
        // nudged to 10.02/10.01 and Playwright lands on Testim's score.
        let catalog = catalog(&[
            (1, "A", &[Candidate::Testim]),
            (2, "B", &[Candidate::Mabl, Candidate::Playwright]),
        ]);
        let weights = CategoryWeights::from([("A", 1.0014), ("B", 1.0)]);
        let result = score(&[Answer::new(1, 1), Answer::new(2, 1)], &catalog, &weights);

        assert_eq!(
            ranking(&result),
            vec![
                (Candidate::Mabl, 10.03),
                (Candidate::Testim, 10.02),
                (Candidate::Playwright, 10.01),
                (Candidate::Selenium, 0.0),
            ]
        );
        assert_eq!(result[1].base_score, 10.01);
        assert_eq!(result[1].tie_break, 0.01);
    }

    #[test]
    fn test_out_of_range_weight_does_not_panic() {
        // Library callers can bypass validate_scoring
        let catalog = catalog(&[(1, "Budget", &[Candidate::Playwright, Candidate::Selenium])]);
        let weights = CategoryWeights::from([("Budget", 1e17)]);
        let result = score(&[Answer::new(1, 1)], &catalog, &weights);
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|s| s.final_score.is_finite()));
    }

    #[test]
    fn test_unresolvable_answers_ignored() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Selenium])]);
        let weights = CategoryWeights::default();
        let clean = score(&[Answer::new(1, 1)], &catalog, &weights);
        let noisy = score(
            &[Answer::new(42, 1), Answer::new(1, 1), Answer::new(1, 77)],
            &catalog,
            &weights,
        );
        assert_eq!(clean, noisy);
    }

    #[test]
    fn test_neutral_option_scores_nothing() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Selenium])]);
        let result = score(&[Answer::new(1, 2)], &catalog, &CategoryWeights::default());
        assert!(result.iter().all(|s| s.strong_matches == 0));
    }

    #[test]
    fn test_empty_candidate_set() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Selenium])]);
        let result = score_candidates(&[], &[Answer::new(1, 1)], &catalog, &CategoryWeights::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_candidate_subset_and_duplicates() {
        let catalog = catalog(&[(1, "Budget", &[Candidate::Testim])]);
        let result = score_candidates(
            &[Candidate::Testim, Candidate::Selenium, Candidate::Testim],
            &[],
            &catalog,
            &CategoryWeights::default(),
        );
        assert_eq!(
            ranking(&result),
            vec![(Candidate::Selenium, 0.02), (Candidate::Testim, 0.01)]
        );
    }

    #[test]
    fn test_builtin_catalog_full_sheet() {
        let catalog = Catalog::builtin().unwrap();
        // First option of every question
        let answers: Vec<Answer> = catalog
            .questions()
            .iter()
            .map(|q| Answer::new(q.id, q.options[0].value))
            .collect();
        let result = score(&answers, &catalog, &CategoryWeights::default());
        assert_eq!(result.len(), 4);
        for pair in result.windows(2) {
            assert!(hundredths(pair[0].final_score) > hundredths(pair[1].final_score));
        }
    }
}
