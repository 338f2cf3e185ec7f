//! Errors raised while loading catalogs and answer sheets.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// File could not be read or written
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid YAML/JSON for the expected shape
    #[error("Failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },

    /// Content parsed but broke one or more rules
    #[error("Invalid {what}: {}", .errors.join("; "))]
    Invalid {
        what: &'static str,
        errors: Vec<String>,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(what: &'static str, err: impl std::fmt::Display) -> Self {
        LoadError::Parse {
            what,
            message: err.to_string(),
        }
    }

    /// Individual validation messages, empty for IO/parse failures
    pub fn problems(&self) -> &[String] {
        match self {
            LoadError::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}
