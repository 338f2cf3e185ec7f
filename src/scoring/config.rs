use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiplier for categories missing from the table.
pub const NEUTRAL_CATEGORY_WEIGHT: f64 = 1.0;

const DEFAULT_CATEGORY_WEIGHTS: [(&str, f64); 12] = [
    ("Budget", 1.2),
    ("Execution", 1.15),
    ("Team", 1.1),
    ("Technical", 1.15),
    ("Learning", 1.05),
    ("Setup", 1.0),
    ("Interface", 1.0),
    ("Resources", 1.0),
    ("Support", 1.1),
    ("Performance", 1.15),
    ("Maintenance", 1.2),
    ("Scale", 1.15),
];

/// Per-category multipliers applied to strong matches.
///
/// Passed explicitly into every scoring call; there is no shared table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryWeights(BTreeMap<String, f64>);

impl Default for CategoryWeights {
    fn default() -> Self {
        Self(
            DEFAULT_CATEGORY_WEIGHTS
                .iter()
                .map(|(name, w)| (name.to_string(), *w))
                .collect(),
        )
    }
}

impl CategoryWeights {
    /// A table with no entries: every category is neutral.
    pub fn neutral() -> Self {
        Self(BTreeMap::new())
    }

    /// Multiplier for a category, neutral when absent
    pub fn get(&self, category: &str) -> f64 {
        self.0
            .get(category)
            .copied()
            .unwrap_or(NEUTRAL_CATEGORY_WEIGHT)
    }

    pub fn set(&mut self, category: impl Into<String>, weight: f64) {
        self.0.insert(category.into(), weight);
    }

    /// Lay `overrides` over this table
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, f64>) -> Self {
        for (category, weight) in overrides {
            self.0.insert(category.clone(), *weight);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(c, w)| (c.as_str(), *w))
    }
}

impl<const N: usize> From<[(&str, f64); N]> for CategoryWeights {
    fn from(entries: [(&str, f64); N]) -> Self {
        Self(entries.iter().map(|(c, w)| (c.to_string(), *w)).collect())
    }
}

/// Scoring section of the config file.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   category_weights:
///     Budget: 1.3
///     Scale: 1.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Overrides laid over the default category weights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_weights: Option<BTreeMap<String, f64>>,
}

impl ScoringConfig {
    /// Default table with this config's overrides applied
    pub fn effective_weights(&self) -> CategoryWeights {
        match &self.category_weights {
            Some(overrides) => CategoryWeights::default().with_overrides(overrides),
            None => CategoryWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = CategoryWeights::default();
        assert_eq!(weights.get("Budget"), 1.2);
        assert_eq!(weights.get("Learning"), 1.05);
        assert_eq!(weights.get("Setup"), 1.0);
        assert_eq!(weights.iter().count(), 12);
    }

    #[test]
    fn test_missing_category_is_neutral() {
        assert_eq!(CategoryWeights::default().get("Unheard of"), 1.0);
        assert_eq!(CategoryWeights::neutral().get("Budget"), 1.0);
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = ScoringConfig {
            category_weights: Some(BTreeMap::from([
                ("Budget".to_string(), 1.5),
                ("Security".to_string(), 1.3),
            ])),
        };
        let weights = config.effective_weights();
        assert_eq!(weights.get("Budget"), 1.5);
        assert_eq!(weights.get("Security"), 1.3);
        assert_eq!(weights.get("Scale"), 1.15);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.category_weights.is_none());
        assert_eq!(config.effective_weights(), CategoryWeights::default());
    }

    #[test]
    fn test_scoring_config_parse() {
        let yaml = r#"
category_weights:
  Budget: 2
  Team: 0.9
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let overrides = config.category_weights.unwrap();
        assert_eq!(overrides.get("Budget"), Some(&2.0));
        assert_eq!(overrides.get("Team"), Some(&0.9));
    }

    #[test]
    fn test_scoring_config_rejects_unknown_fields() {
        let yaml = "base_score: 100";
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
