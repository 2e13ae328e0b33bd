//! Shallow copular patterns: `<aspect> is|was|are|were <ADJ>`.
//!
//! Runs after the structural rules as a recall backstop for parses they
//! miss. The copula has to agree in number with the aspect form, and the
//! word after it has to be tagged ADJ.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::ConfigError;
use crate::lexicon::{AspectId, Lexicon};
use crate::token::PosTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FallbackMode {
    /// Match a compiled pattern against the raw text.
    #[default]
    Text,
    /// Match over consecutive tokens.
    Tokens,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceMatch {
    pub aspect: AspectId,
    /// Index of the adjective token
    pub token: usize,
}

#[derive(Debug, Clone)]
pub struct SurfacePatternMatcher {
    mode: FallbackMode,
    lexicon: Lexicon,
    pattern: Option<Regex>,
}

impl SurfacePatternMatcher {
    pub fn new(mode: FallbackMode, lexicon: &Lexicon) -> Result<Self, ConfigError> {
        let pattern = match mode {
            FallbackMode::Text if !lexicon.is_empty() => Some(Regex::new(&text_pattern(lexicon))?),
            _ => None,
        };
        Ok(Self {
            mode,
            lexicon: lexicon.clone(),
            pattern,
        })
    }

    pub fn mode(&self) -> FallbackMode {
        self.mode
    }

    pub fn find(&self, document: &Document) -> Vec<SurfaceMatch> {
        match self.mode {
            FallbackMode::Text => self.find_in_text(document),
            FallbackMode::Tokens => self.find_in_tokens(document),
            FallbackMode::Disabled => Vec::new(),
        }
    }

    fn find_in_text(&self, document: &Document) -> Vec<SurfaceMatch> {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return Vec::new(),
        };
        pattern
            .captures_iter(document.text())
            .filter_map(|caps| {
                let (surface, copula, adjective) = (caps.get(1)?, caps.get(2)?, caps.get(3)?);
                let entry = self.lexicon.entry(surface.as_str())?;
                if !entry.number.takes_copula(copula.as_str()) {
                    return None;
                }
                let token = document.token_at_offset(adjective.start())?;
                if token.pos != PosTag::Adj || token.text != adjective.as_str() {
                    return None;
                }
                Some(SurfaceMatch {
                    aspect: entry.aspect,
                    token: token.index,
                })
            })
            .collect()
    }

    fn find_in_tokens(&self, document: &Document) -> Vec<SurfaceMatch> {
        document
            .tokens()
            .windows(3)
            .filter_map(|window| {
                let (surface, copula, adjective) = (&window[0], &window[1], &window[2]);
                let entry = self.lexicon.entry(&surface.text)?;
                if !entry.number.takes_copula(&copula.text) || adjective.pos != PosTag::Adj {
                    return None;
                }
                Some(SurfaceMatch {
                    aspect: entry.aspect,
                    token: adjective.index,
                })
            })
            .collect()
    }
}

/// `(?i)\b(<forms, longest first>)\s+(is|was|are|were)\s+(\w+)\b`
fn text_pattern(lexicon: &Lexicon) -> String {
    let mut forms: Vec<&str> = lexicon
        .entries()
        .iter()
        .map(|entry| entry.surface.as_str())
        .collect();
    forms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = forms
        .iter()
        .map(|form| regex::escape(form))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b({})\s+(is|was|are|were)\s+(\w+)\b", alternation)
}
