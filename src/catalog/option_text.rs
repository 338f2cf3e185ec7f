//! Split option text into a short title and a description for display.
//!
//! Presentation only: nothing here affects scoring.

use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionText {
    pub title: String,
    pub description: String,
}

impl OptionText {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        }
    }
}

static RANGE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+").expect("static regex"));

static TRAILING_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+?)\)$").expect("static regex"));

/// Parse option text into title and description.
///
/// Rules, first match wins:
/// 1. `;` splits at the first semicolon
/// 2. an em dash, en dash or hyphen splits at the first one (a leading
///    numeric range like "3-5" does not count as a hyphen separator)
/// 3. a trailing parenthetical becomes the description
/// 4. `:` splits at the first colon
/// 5. more than six words: split at an early comma, else after 40% of words
/// 6. otherwise the whole text is the title
pub fn parse_option_text(text: &str) -> OptionText {
    if let Some((title, rest)) = text.split_once(';') {
        return OptionText::new(title, rest);
    }

    let has_hyphen = text.contains('-') && !RANGE_PREFIX.is_match(text);
    let dash = ['—', '–']
        .into_iter()
        .find(|d| text.contains(*d))
        .or(has_hyphen.then_some('-'));
    if let Some((title, rest)) = dash.and_then(|d| text.split_once(d)) {
        return OptionText::new(title, rest);
    }

    if let Some(caps) = TRAILING_PARENTHETICAL.captures(text) {
        return OptionText::new(&caps[1], &caps[2]);
    }

    if let Some((title, rest)) = text.split_once(':') {
        return OptionText::new(title, rest);
    }

    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > 6 {
        let char_len = text.chars().count() as f64;
        if let Some(byte_idx) = text.find(',') {
            let char_idx = text[..byte_idx].chars().count();
            if char_idx > 0 && (char_idx as f64) < char_len * 0.6 {
                return OptionText::new(&text[..byte_idx], &text[byte_idx + 1..]);
            }
        }
        let split_point = (words.len() as f64 * 0.4).ceil() as usize;
        return OptionText::new(&words[..split_point].join(" "), &words[split_point..].join(" "));
    }

    OptionText::new(text, "")
}
