//! Evaluation configuration via TOML file.
//!
//! ```toml
//! corpus_dir = "corpus"
//! dedup_consecutive = true
//! lowercase_references = true
//! extractor = "extractor.ron"
//! ```
//!
//! Relative paths are resolved against the directory of the config file.

use std::fs;
use std::path::{Path, PathBuf};

use layered_opinions::ExtractorConfig;
use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, EvalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Directory searched recursively for `*.json` corpus files.
    pub corpus_dir: PathBuf,
    /// Drop a review whose text repeats the previous review's.
    pub dedup_consecutive: bool,
    pub lowercase_references: bool,
    /// RON extractor config; the default extractor when absent.
    pub extractor: Option<PathBuf>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("corpus"),
            dedup_consecutive: true,
            lowercase_references: true,
            extractor: None,
        }
    }
}

impl EvalConfig {
    pub fn from_toml_str(s: &str) -> EvalResult<Self> {
        toml::from_str(s).map_err(|e| EvalError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> EvalResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| EvalError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: EvalConfig = toml::from_str(&content).map_err(|e| EvalError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(base) = path.parent() {
            config.corpus_dir = base.join(&config.corpus_dir);
            config.extractor = config.extractor.map(|extractor| base.join(extractor));
        }
        Ok(config)
    }

    pub fn extractor_config(&self) -> EvalResult<ExtractorConfig> {
        match &self.extractor {
            Some(path) => Ok(ExtractorConfig::load(path)?),
            None => Ok(ExtractorConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_opinions::FallbackMode;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_keys() {
        let config = EvalConfig::from_toml_str("dedup_consecutive = false").unwrap();
        assert!(!config.dedup_consecutive);
        assert!(config.lowercase_references);
        assert_eq!(config.corpus_dir, PathBuf::from("corpus"));
        assert_eq!(config.extractor_config().unwrap(), ExtractorConfig::default());
    }

    #[test]
    fn paths_resolve_against_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut extractor = fs::File::create(dir.path().join("extractor.ron")).unwrap();
        writeln!(extractor, "(fallback: Disabled)").unwrap();
        fs::write(
            dir.path().join("eval.toml"),
            "corpus_dir = \"gold\"\nextractor = \"extractor.ron\"\n",
        )
        .unwrap();

        let config = EvalConfig::load(&dir.path().join("eval.toml")).unwrap();
        assert_eq!(config.corpus_dir, dir.path().join("gold"));
        assert_eq!(config.extractor_config().unwrap().fallback, FallbackMode::Disabled);
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = EvalConfig::from_toml_str("dedup_consecutive = \"yes\"").unwrap_err();
        assert!(matches!(err, EvalError::Parse { .. }));
    }
}
