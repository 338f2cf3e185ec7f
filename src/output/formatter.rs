use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{pitch, Recommendation, ScoredCandidate};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with exactly two decimals, the precision ties are broken at
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a ranking as a table with columns: Index, Score, Candidate
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 7 chars wide (fits "9999.99")
pub fn format_ranking_table(
    ranking: &[ScoredCandidate],
    project: Option<&str>,
    use_colors: bool,
) -> String {
    if ranking.is_empty() {
        return "No candidates to rank.".to_string();
    }

    let score_width = 7;
    let separator = "  ";
    let mut lines = Vec::with_capacity(ranking.len() + 1);

    if let Some(project) = project {
        let title = match get_terminal_width() {
            Some(width) if width > 20 => truncate_title(project, width),
            Some(_) => truncate_title(project, 20),
            None => project.to_string(),
        };
        lines.push(if use_colors {
            title.bold().to_string()
        } else {
            title
        });
    }

    for (idx, scored) in ranking.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let score_padded = format!(
            "{:>width$}",
            format_score(scored.final_score),
            width = score_width
        );
        let name = scored.candidate.name();

        lines.push(if use_colors {
            let name = if idx == 0 {
                name.green().bold().to_string()
            } else {
                name.to_string()
            };
            format!(
                "{} {}{}{}",
                index_str.dimmed(),
                score_padded.bold(),
                separator,
                name
            )
        } else {
            format!("{} {}{}{}", index_str, score_padded, separator, name)
        });
    }

    lines.join("\n")
}

/// Format a ranking as tab-separated values for scripting
/// Columns: rank, candidate, final_score, base_score (no headers, no colors)
pub fn format_tsv(ranking: &[ScoredCandidate]) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            format!(
                "{}\t{}\t{}\t{}",
                idx + 1,
                scored.candidate.key(),
                format_score(scored.final_score),
                format_score(scored.base_score)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one candidate's score breakdown (for verbose mode)
pub fn format_breakdown(scored: &ScoredCandidate, use_colors: bool) -> String {
    let name = if use_colors {
        scored.candidate.name().bold().to_string()
    } else {
        scored.candidate.name().to_string()
    };
    let plural = if scored.strong_matches == 1 { "" } else { "es" };
    format!(
        "{}\n  Score: {}\n  Base: {} ({} strong match{}, weighted {:.3})\n  Tie-break: +{}",
        name,
        format_score(scored.final_score),
        format_score(scored.base_score),
        scored.strong_matches,
        plural,
        scored.weighted_score,
        format_score(scored.tie_break)
    )
}

/// Format the recommendation with its pitch and aligned answers
pub fn format_recommendation(rec: &Recommendation, use_colors: bool) -> String {
    let headline = format!(
        "Recommended: {} ({}% match)",
        rec.candidate, rec.match_percentage
    );
    let mut lines = vec![if use_colors {
        headline.green().bold().to_string()
    } else {
        headline
    }];
    lines.push(pitch(rec.candidate).to_string());

    if !rec.reasons.is_empty() {
        lines.push(String::new());
        lines.push("Why:".to_string());
        for reason in &rec.reasons {
            lines.push(format!("  - {}", reason.sentence(rec.candidate)));
        }
    }

    lines.join("\n")
}
