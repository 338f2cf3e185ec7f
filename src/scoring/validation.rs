use super::config::ScoringConfig;

/// Largest accepted category multiplier. Keeps scores small enough that a
/// 0.01 tie-break step is still representable.
pub const MAX_CATEGORY_WEIGHT: f64 = 100.0;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.category_weights {
        for (category, weight) in weights {
            if category.trim().is_empty() {
                errors.push("scoring.category_weights: category name must not be empty".to_string());
            }
            if !weight.is_finite() || *weight <= 0.0 {
                errors.push(format!(
                    "scoring.category_weights.{}: must be a positive number, got {}",
                    category, weight
                ));
            } else if *weight > MAX_CATEGORY_WEIGHT {
                errors.push(format!(
                    "scoring.category_weights.{}: must be at most {}, got {}",
                    category, MAX_CATEGORY_WEIGHT, weight
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
