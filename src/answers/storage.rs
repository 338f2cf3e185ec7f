use super::AnswerSheet;
use crate::error::LoadError;
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load an answer sheet.
///
/// `.json` files are read as JSON, everything else as YAML.
pub fn load_answers(path: &Path) -> Result<AnswerSheet, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

    let sheet = if is_json(path) {
        AnswerSheet::from_json(&content)?
    } else {
        AnswerSheet::from_yaml(&content)?
    };

    tracing::debug!(
        path = %path.display(),
        answers = sheet.answers.len(),
        "loaded answer sheet"
    );
    Ok(sheet)
}

/// Save an answer sheet atomically.
///
/// Writes JSON for `.json` paths and YAML otherwise. Parent directories are
/// created as needed; the target is never left half-written.
pub fn save_answers(path: &Path, sheet: &AnswerSheet) -> Result<(), LoadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LoadError::io(parent, e))?;
    }

    let content = if is_json(path) {
        serde_json::to_string_pretty(sheet).map_err(|e| LoadError::parse("answer sheet", e))?
    } else {
        serde_saphyr::to_string(sheet).map_err(|e| LoadError::parse("answer sheet", e))?
    };

    let mut file = AtomicWriteFile::open(path).map_err(|e| LoadError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| LoadError::io(path, e))?;
    file.commit().map_err(|e| LoadError::io(path, e))?;

    tracing::debug!(path = %path.display(), "saved answer sheet");
    Ok(())
}
