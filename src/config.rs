//! Extractor configuration.
//!
//! ```ron
//! (
//!     mention_window: 2,
//!     fallback: Text,
//!     coref: Ignore,
//!     lowercase_phrases: true,
//! )
//! ```
//!
//! Omitted fields take their defaults; omitting `lexicon` selects the
//! standard five-dish lexicon.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anaphora::CorefPolicy;
use crate::error::ConfigError;
use crate::fallback::FallbackMode;
use crate::lexicon::Lexicon;
use crate::mention::DEFAULT_MENTION_WINDOW;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub lexicon: Lexicon,
    /// How many sentences back an anaphor may look, counting its own.
    pub mention_window: usize,
    pub fallback: FallbackMode,
    pub coref: CorefPolicy,
    pub lowercase_phrases: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::standard(),
            mention_window: DEFAULT_MENTION_WINDOW,
            fallback: FallbackMode::default(),
            coref: CorefPolicy::default(),
            lowercase_phrases: true,
        }
    }
}

impl ExtractorConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: ExtractorConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mention_window == 0 {
            return Err(ConfigError::ZeroMentionWindow);
        }
        Ok(())
    }

    pub fn with_fallback(mut self, fallback: FallbackMode) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_coref(mut self, coref: CorefPolicy) -> Self {
        self.coref = coref;
        self
    }
}
