use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use toolrank::answers::{load_answers, save_answers};
use toolrank::candidate::Candidate;
use toolrank::catalog::Catalog;
use toolrank::config::Config;
use toolrank::evaluation::Evaluation;
use toolrank::output;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ANSWERS: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the candidates against a saved answer sheet
    Rank {
        /// Answer sheet (.yaml or .json)
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Fail instead of warning when the sheet has unknown or duplicate answers
        #[arg(long)]
        strict: bool,

        /// Only rank these candidates (comma-separated, e.g. selenium,playwright)
        #[arg(long, value_delimiter = ',')]
        candidates: Vec<Candidate>,
    },
    /// List the questionnaire with its options
    Questions,
    /// Answer the questionnaire interactively and rank the candidates
    Ask {
        /// Also save the collected answers to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Run the interactive config wizard
    Init {
        /// Write the config here instead of ~/.config/toolrank/config.yaml
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "toolrank")]
#[command(about = "Rank test automation tools from questionnaire answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/toolrank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    toolrank::logging::init(cli.verbose);

    if let Commands::Init { path } = &cli.command {
        if let Err(e) = toolrank::config::init::run_init_wizard(path.clone()) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_dir = cli
        .config
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .or_else(toolrank::config::get_config_dir);
    let config = match toolrank::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = toolrank::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let weights = effective_scoring.effective_weights();

    let catalog = match load_catalog(&config, config_dir.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        for (category, weight) in weights.iter() {
            tracing::debug!(category, weight, "category weight");
        }
    }

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Rank {
            answers,
            format,
            strict,
            candidates,
        } => {
            let sheet = match load_answers(&answers) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Answers error: {}", e);
                    std::process::exit(EXIT_ANSWERS);
                }
            };

            if let Err(problems) = sheet.validate(&catalog) {
                if strict {
                    eprintln!("Answer sheet errors in {}:", answers.display());
                    for problem in problems {
                        eprintln!("  - {}", problem);
                    }
                    std::process::exit(EXIT_ANSWERS);
                }
                for problem in problems {
                    tracing::warn!("{} (ignored)", problem);
                }
            }

            let candidates = if candidates.is_empty() {
                Candidate::ALL.to_vec()
            } else {
                candidates
            };
            let evaluation =
                Evaluation::build_for(&candidates, &sheet, &catalog, &weights, Utc::now());
            if let Err(e) = print_evaluation(&evaluation, format, cli.verbose, use_colors) {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_ANSWERS);
            }
        }
        Commands::Questions => {
            let total = catalog.len();
            let rendered: Vec<String> = catalog
                .questions()
                .iter()
                .enumerate()
                .map(|(i, q)| toolrank::questionnaire::format_question(q, i, total))
                .collect();
            println!("{}", rendered.join("\n\n"));
        }
        Commands::Ask { save } => {
            let sheet = match toolrank::questionnaire::run_questionnaire(&catalog) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Questionnaire aborted: {:#}", e);
                    std::process::exit(EXIT_ANSWERS);
                }
            };

            if let Some(path) = save {
                if let Err(e) = save_answers(&path, &sheet) {
                    eprintln!("Failed to save answers: {}", e);
                    std::process::exit(EXIT_ANSWERS);
                }
                eprintln!("Answers saved to {}", path.display());
            }

            println!();
            let evaluation = Evaluation::build(&sheet, &catalog, &weights, Utc::now());
            if let Err(e) = print_evaluation(&evaluation, Format::Table, cli.verbose, use_colors) {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_ANSWERS);
            }
        }
        // Runs before config loading
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_catalog(config: &Config, config_dir: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog = toolrank::config::resolve_catalog(config, config_dir)?;
    tracing::debug!(
        questions = catalog.len(),
        categories = catalog.categories().len(),
        "catalog ready"
    );
    Ok(catalog)
}

fn print_evaluation(
    evaluation: &Evaluation,
    format: Format,
    verbose: bool,
    use_colors: bool,
) -> serde_json::Result<()> {
    match format {
        Format::Json => println!("{}", evaluation.to_json()?),
        Format::Tsv => {
            let tsv = output::format_tsv(&evaluation.ranking);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        Format::Table => {
            println!(
                "{}",
                output::format_ranking_table(
                    &evaluation.ranking,
                    evaluation.project.as_deref(),
                    use_colors
                )
            );
            if let Some(rec) = &evaluation.recommendation {
                println!();
                println!("{}", output::format_recommendation(rec, use_colors));
            }
            if verbose {
                for scored in &evaluation.ranking {
                    println!();
                    println!("{}", output::format_breakdown(scored, use_colors));
                }
            }
        }
    }
    Ok(())
}
