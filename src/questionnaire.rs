//! Interactive questionnaire: walk the catalog and collect an answer sheet.

use anyhow::Result;

use crate::answers::{Answer, AnswerSheet};
use crate::catalog::{parse_option_text, Catalog, Question};
use crate::prompt::{parse_choice, prompt};

/// Render a question and its numbered options.
pub fn format_question(question: &Question, index: usize, total: usize) -> String {
    let mut lines = vec![format!(
        "[{}/{}] {}: {}",
        index + 1,
        total,
        question.category,
        question.text
    )];
    for (i, option) in question.options.iter().enumerate() {
        let parsed = parse_option_text(&option.text);
        if parsed.description.is_empty() {
            lines.push(format!("  {}. {}", i + 1, parsed.title));
        } else {
            lines.push(format!(
                "  {}. {} - {}",
                i + 1,
                parsed.title,
                parsed.description
            ));
        }
    }
    lines.join("\n")
}

/// Ask every catalog question in order.
///
/// An empty line skips a question; skipped questions contribute nothing.
pub fn run_questionnaire(catalog: &Catalog) -> Result<AnswerSheet> {
    println!();
    let project = prompt("Project name (optional): ")?;
    let project = (!project.is_empty()).then_some(project);

    let total = catalog.len();
    let mut answers = Vec::new();

    for (index, question) in catalog.questions().iter().enumerate() {
        println!();
        println!("{}", format_question(question, index, total));
        let choice = loop {
            let input = prompt("Choice (Enter to skip): ")?;
            match parse_choice(&input, question.options.len()) {
                Ok(choice) => break choice,
                Err(e) => println!("  Invalid: {}. Try again.", e),
            }
        };
        match choice {
            Some(i) => answers.push(Answer::new(question.id, question.options[i].value)),
            None => tracing::debug!(question = question.id, "question skipped"),
        }
    }

    Ok(AnswerSheet::new(project, answers))
}
