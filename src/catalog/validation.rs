use std::collections::HashSet;

use super::{Question, STRONG_MATCH_WEIGHT};
use crate::candidate::Candidate;

/// Validate a question list at load time.
/// Returns all validation errors at once (not just the first).
pub fn validate_questions(questions: &[Question]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, question) in questions.iter().enumerate() {
        if !seen_ids.insert(question.id) {
            errors.push(format!("questions[{}].id: duplicate id {}", i, question.id));
        }

        if question.category.trim().is_empty() {
            errors.push(format!("questions[{}].category: must not be empty", i));
        }

        if question.options.is_empty() {
            errors.push(format!("questions[{}].options: at least one option required", i));
        }

        let mut seen_values = HashSet::new();
        for (j, option) in question.options.iter().enumerate() {
            if !seen_values.insert(option.value) {
                errors.push(format!(
                    "questions[{}].options[{}].value: duplicate value {}",
                    i, j, option.value
                ));
            }

            for candidate in Candidate::ALL {
                match option.weights.get(candidate) {
                    None => errors.push(format!(
                        "questions[{}].options[{}].weights: missing weight for {}",
                        i,
                        j,
                        candidate.key()
                    )),
                    Some(w) if w > STRONG_MATCH_WEIGHT => errors.push(format!(
                        "questions[{}].options[{}].weights.{}: {} is above {}",
                        i,
                        j,
                        candidate.key(),
                        w,
                        STRONG_MATCH_WEIGHT
                    )),
                    Some(_) => {}
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
