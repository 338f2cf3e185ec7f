pub mod storage;

pub use storage::{load_answers, save_answers};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::error::LoadError;

/// The option a user chose for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub question_id: u32,
    pub selected_value: u32,
}

impl Answer {
    pub fn new(question_id: u32, selected_value: u32) -> Self {
        Self {
            question_id,
            selected_value,
        }
    }
}

/// A set of answers as stored on disk.
///
/// Example YAML:
/// ```yaml
/// project: Checkout revamp
/// answers:
///   - { question_id: 1, selected_value: 2 }
///   - { question_id: 2, selected_value: 4 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new(project: Option<String>, answers: Vec<Answer>) -> Self {
        Self { project, answers }
    }

    pub fn from_yaml(content: &str) -> Result<Self, LoadError> {
        serde_saphyr::from_str(content).map_err(|e| LoadError::parse("answer sheet", e))
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::parse("answer sheet", e))
    }

    /// Check every answer against the catalog.
    ///
    /// Reports unknown questions, unknown option values and repeated
    /// questions. Scoring tolerates all of these; callers decide whether
    /// they are fatal.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let mut first_seen: HashMap<u32, usize> = HashMap::new();

        for (i, answer) in self.answers.iter().enumerate() {
            match catalog.question(answer.question_id) {
                None => errors.push(format!(
                    "answers[{}]: unknown question {}",
                    i, answer.question_id
                )),
                Some(question) if question.option(answer.selected_value).is_none() => {
                    errors.push(format!(
                        "answers[{}]: question {} has no option {}",
                        i, answer.question_id, answer.selected_value
                    ))
                }
                Some(_) => {}
            }

            if let Some(first) = first_seen.get(&answer.question_id) {
                errors.push(format!(
                    "answers[{}]: question {} already answered at answers[{}]",
                    i, answer.question_id, first
                ));
            } else {
                first_seen.insert(answer.question_id, i);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
