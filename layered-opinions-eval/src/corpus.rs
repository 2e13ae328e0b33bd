//! Annotated corpus loading.
//!
//! A corpus file is a JSON array of cases, each an annotated review and its
//! gold annotation:
//!
//! ```text
//! [{"reference": "(cold, bruschetta)", "document": {"text": ..., "tokens": [...]}}]
//! ```

use std::fs;
use std::path::Path;

use layered_opinions::Document;
use serde::Deserialize;

use crate::errors::{EvalError, EvalResult};

#[derive(Debug, Clone, Deserialize)]
pub struct EvalCase {
    /// Gold `(opinion, item)` pairs
    pub reference: String,
    pub document: Document,
}

/// Load a single corpus file.
pub fn load_corpus(path: &Path) -> EvalResult<Vec<EvalCase>> {
    let content = fs::read_to_string(path).map_err(|e| EvalError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| EvalError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load all corpus files under a directory (glob: **/*.json), in path order.
pub fn load_all_corpora(dir: &Path) -> EvalResult<Vec<(String, Vec<EvalCase>)>> {
    let mut corpora = Vec::new();
    load_corpora_recursive(dir, dir, &mut corpora)?;
    Ok(corpora)
}

fn load_corpora_recursive(
    base: &Path,
    dir: &Path,
    corpora: &mut Vec<(String, Vec<EvalCase>)>,
) -> EvalResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| EvalError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| EvalError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        paths.push(entry.path());
    }
    paths.sort();

    for path in paths {
        if path.is_dir() {
            load_corpora_recursive(base, &path, corpora)?;
        } else if path.extension().map_or(false, |e| e == "json") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let cases = load_corpus(&path)?;
            log::debug!("loaded {} cases from {}", cases.len(), relative.display());
            corpora.push((relative.display().to_string(), cases));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("corpus")
    }

    #[test]
    fn test_load_corpus() {
        let cases = load_corpus(&corpus_dir().join("restaurants.json")).unwrap();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases[2].document.text(), "They served cold & hard bruschetta.");
        assert_eq!(cases[2].reference, "(cold, bruschetta), (hard, bruschetta)");
    }

    #[test]
    fn test_load_all_corpora() {
        let corpora = load_all_corpora(&corpus_dir()).unwrap();
        let names: Vec<_> = corpora.iter().map(|(name, _)| name.replace('\\', "/")).collect();
        assert_eq!(names, vec!["more/extra.json", "restaurants.json"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        assert!(load_all_corpora(Path::new("/nonexistent/corpus")).unwrap().is_empty());
    }

    #[test]
    fn invalid_document_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"reference": "", "document": {{"text": "x", "tokens": [{{"text": "x", "pos": "NOUN", "dep": "ROOT", "head": 5}}]}}}}]"#
        )
        .unwrap();
        let err = load_corpus(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::Parse { .. }));
    }
}
