pub mod option_text;
pub mod validation;

pub use option_text::{parse_option_text, OptionText};
pub use validation::validate_questions;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::candidate::Candidate;
use crate::error::LoadError;

/// Weight marking an option as a strong match for a candidate.
pub const STRONG_MATCH_WEIGHT: u8 = 10;

const BUILTIN_CATALOG: &str = include_str!("questions.yaml");

/// Per-candidate weights for one option.
///
/// Keys are typed, so an unknown candidate name fails while parsing the
/// catalog rather than at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable(BTreeMap<Candidate, u8>);

impl WeightTable {
    pub fn get(&self, candidate: Candidate) -> Option<u8> {
        self.0.get(&candidate).copied()
    }

    pub fn is_strong_match(&self, candidate: Candidate) -> bool {
        self.get(candidate) == Some(STRONG_MATCH_WEIGHT)
    }

    /// Highest weight in the table (0 for an empty table)
    pub fn max_weight(&self) -> u8 {
        self.0.values().copied().max().unwrap_or(0)
    }
}

impl<const N: usize> From<[(Candidate, u8); N]> for WeightTable {
    fn from(entries: [(Candidate, u8); N]) -> Self {
        Self(entries.into_iter().collect())
    }
}

impl FromIterator<(Candidate, u8)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (Candidate, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionOption {
    /// Identifier the user selects
    pub value: u32,
    pub text: String,
    pub weights: WeightTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, value: u32) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Read-only, validated question catalog.
///
/// Only constructible through [`Catalog::new`] and the loaders, all of which
/// validate, so scoring never sees a malformed weight table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        validate_questions(&questions).map_err(|errors| LoadError::Invalid {
            what: "catalog",
            errors,
        })?;
        Ok(Self { questions })
    }

    /// The built-in 12-question catalog
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse a YAML list of questions
    pub fn from_yaml(content: &str) -> Result<Self, LoadError> {
        let questions: Vec<Question> =
            serde_saphyr::from_str(content).map_err(|e| LoadError::parse("catalog", e))?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Resolve an answer to its question and selected option
    pub fn resolve(&self, question_id: u32, value: u32) -> Option<(&Question, &QuestionOption)> {
        let question = self.question(question_id)?;
        let option = question.option(value)?;
        Some((question, option))
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category.as_str()) {
                seen.push(q.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Load and validate a catalog from a YAML file
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let catalog = Catalog::from_yaml(&content)?;
    tracing::debug!(
        path = %path.display(),
        questions = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.questions().iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn test_builtin_categories() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 12);
        assert_eq!(categories[0], "Budget");
        assert_eq!(categories[11], "Scale");
    }

    #[test]
    fn test_builtin_first_option_weights() {
        let catalog = Catalog::builtin().unwrap();
        let (question, option) = catalog.resolve(1, 1).unwrap();
        assert_eq!(question.category, "Budget");
        assert!(option.weights.is_strong_match(Candidate::Selenium));
        assert!(option.weights.is_strong_match(Candidate::Playwright));
        assert_eq!(option.weights.get(Candidate::Testim), Some(5));
        assert_eq!(option.weights.get(Candidate::Mabl), Some(3));
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.resolve(99, 1).is_none());
        assert!(catalog.resolve(1, 99).is_none());
    }

    #[test]
    fn test_unknown_candidate_is_parse_error() {
        let yaml = r#"
- id: 1
  category: Budget
  text: "Budget?"
  options:
    - value: 1
      text: "Free"
      weights: { selenium: 10, cypress: 10 }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_missing_candidate_is_invalid() {
        let yaml = r#"
- id: 1
  category: Budget
  text: "Budget?"
  options:
    - value: 1
      text: "Free"
      weights: { selenium: 10, playwright: 10, testim: 5 }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(err.problems()[0].contains("mabl"));
    }

    #[test]
    fn test_max_weight() {
        let table = WeightTable::from([
            (Candidate::Selenium, 8),
            (Candidate::Playwright, 10),
            (Candidate::Testim, 5),
            (Candidate::Mabl, 4),
        ]);
        assert_eq!(table.max_weight(), 10);
        assert_eq!(WeightTable::default().max_weight(), 0);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let path = std::env::temp_dir().join("toolrank_test_missing_catalog.yaml");
        let _ = std::fs::remove_file(&path);
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
