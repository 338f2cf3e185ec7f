use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::prompt::{prompt_with_default, prompt_yes_no};
use crate::scoring::{validate_scoring, CategoryWeights, ScoringConfig, MAX_CATEGORY_WEIGHT};

/// Parse a category weight entered at the prompt.
fn parse_weight(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 && v <= MAX_CATEGORY_WEIGHT => Ok(v),
        Ok(v) if v > MAX_CATEGORY_WEIGHT => Err(format!("must be at most {}", MAX_CATEGORY_WEIGHT)),
        Ok(_) => Err("must be a positive number".to_string()),
        Err(_) => Err("not a number".to_string()),
    }
}

/// Keep only the weights that differ from the defaults.
fn changed_weights(chosen: &CategoryWeights) -> BTreeMap<String, f64> {
    let defaults = CategoryWeights::default();
    chosen
        .iter()
        .filter(|(category, weight)| defaults.get(category) != *weight)
        .map(|(category, weight)| (category.to_string(), weight))
        .collect()
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("toolrank configuration");
    println!("======================");
    println!();
    println!("Each strong match adds its category weight to a tool's score.");
    println!("Raise a weight to make answers in that category count more.");
    println!();

    let configure = prompt_yes_no("Customise category weights? (n accepts defaults)", false)?;

    let scoring = if configure {
        let mut chosen = CategoryWeights::default();
        let categories: Vec<(String, f64)> = chosen
            .iter()
            .map(|(c, w)| (c.to_string(), w))
            .collect();
        for (category, default) in categories {
            let weight = loop {
                let input = prompt_with_default(&format!("  {}", category), &default.to_string())?;
                match parse_weight(&input) {
                    Ok(v) => break v,
                    Err(e) => println!("  Invalid: {}. Try again.", e),
                }
            };
            chosen.set(category, weight);
        }

        let overrides = changed_weights(&chosen);
        if overrides.is_empty() {
            None
        } else {
            Some(ScoringConfig {
                category_weights: Some(overrides),
            })
        }
    } else {
        None
    };

    if let Some(ref scoring) = scoring {
        if let Err(errors) = validate_scoring(scoring) {
            anyhow::bail!("Invalid scoring config: {}", errors.join("; "));
        }
    }

    let default_config_path = match default_path.or_else(get_config_path) {
        Some(p) => p,
        None => anyhow::bail!("Could not determine home directory; pass --path"),
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        catalog: None,
        scoring,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `toolrank ask` to answer the questionnaire.");

    Ok(())
}
