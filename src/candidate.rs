use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product being ranked.
///
/// Variants are declared in name order, so the derived `Ord` is the
/// alphabetical order used as the last tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candidate {
    Mabl,
    Playwright,
    Selenium,
    Testim,
}

impl Candidate {
    pub const ALL: [Candidate; 4] = [
        Candidate::Mabl,
        Candidate::Playwright,
        Candidate::Selenium,
        Candidate::Testim,
    ];

    /// Display name, e.g. "Playwright"
    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Mabl => "Mabl",
            Candidate::Playwright => "Playwright",
            Candidate::Selenium => "Selenium",
            Candidate::Testim => "Testim",
        }
    }

    /// Serialized name, e.g. "playwright"
    pub fn key(&self) -> &'static str {
        match self {
            Candidate::Mabl => "mabl",
            Candidate::Playwright => "playwright",
            Candidate::Selenium => "selenium",
            Candidate::Testim => "testim",
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown candidate '{0}' (expected one of: mabl, playwright, selenium, testim)")]
pub struct UnknownCandidate(pub String);

impl FromStr for Candidate {
    type Err = UnknownCandidate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Candidate::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCandidate(s.to_string()))
    }
}
