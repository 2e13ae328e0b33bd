//! The document aggregator.
//!
//! One pass over the tokens dispatches each one to at most one resolver:
//! direct aspect mentions first, then pronouns and quantifiers, then numeral
//! subjects. Direct mentions are recorded in the mention log as they are
//! met. The surface-pattern fallback runs once the pass is complete.

use log::{debug, log_enabled, trace, Level};

use crate::anaphora::{is_numeral_subject, AnaphorKind, AnaphoraResolver};
use crate::config::ExtractorConfig;
use crate::display::DocumentDisplay;
use crate::document::Document;
use crate::error::ConfigError;
use crate::fallback::SurfacePatternMatcher;
use crate::mention::MentionTracker;
use crate::numeral::NumeralResolver;
use crate::opinion_map::AspectOpinionMap;
use crate::phrase::PhraseExtractor;
use crate::resolver::{
    AssignmentSource, DirectMentionResolver, OpinionAssignment, ResolutionContext, Resolver,
};

/// Sentence-start tokens that do not open a new sentence rank.
const STRAY_SENTENCE_STARTS: &[&str] = &["("];

/// Immutable, compiled extraction settings; share one across documents.
#[derive(Debug, Clone)]
pub struct OpinionExtractor {
    config: ExtractorConfig,
    phrases: PhraseExtractor,
    fallback: SurfacePatternMatcher,
}

impl OpinionExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            phrases: PhraseExtractor::new(config.lowercase_phrases),
            fallback: SurfacePatternMatcher::new(config.fallback, &config.lexicon)?,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the aspect → opinions map of one document.
    ///
    /// All state lives for this call only, so the result depends on nothing
    /// but `document` and the configuration.
    pub fn extract_document(&self, document: &Document) -> AspectOpinionMap {
        let lexicon = &self.config.lexicon;
        let direct = DirectMentionResolver::new(lexicon);
        let anaphora = AnaphoraResolver::new(lexicon, self.config.coref);
        let numeral = NumeralResolver::new();

        let mut mentions = MentionTracker::new(self.config.mention_window);
        let mut map = AspectOpinionMap::new();
        let mut rank = 0;

        if log_enabled!(Level::Trace) {
            trace!("document:\n{}", DocumentDisplay::new(document).with_syntax());
        }

        for token in document.tokens() {
            if token.is_sent_start && !STRAY_SENTENCE_STARTS.contains(&token.text.as_str()) {
                rank += 1;
            }

            let cx = ResolutionContext {
                document,
                mentions: &mentions,
                rank,
                phrases: &self.phrases,
            };
            // a direct mention always yields one assignment, even without phrases
            let direct_hits = direct.go(token, &cx);
            let assignments = if !direct_hits.is_empty() {
                direct_hits
            } else if AnaphorKind::classify(token).is_some() {
                anaphora.go(token, &cx)
            } else if is_numeral_subject(token) {
                numeral.go(token, &cx)
            } else {
                continue;
            };

            for assignment in assignments {
                trace!(
                    "token {} `{}` (rank {}): {} -> {} {:?}",
                    token.index,
                    token.text,
                    rank,
                    assignment.source,
                    assignment.aspect,
                    assignment.phrases
                );
                self.apply(&mut map, &mut mentions, rank, assignment);
            }
        }

        for hit in self.fallback.find(document) {
            let adjective = self.phrases.word(document.token(hit.token));
            if map.contains_phrase(hit.aspect, &adjective) {
                trace!("surface pattern {} `{}` already covered", hit.aspect, adjective);
                continue;
            }
            let assignment = OpinionAssignment {
                aspect: hit.aspect,
                phrases: vec![adjective],
                source: AssignmentSource::SurfacePattern,
            };
            trace!("surface pattern {} {:?}", assignment.aspect, assignment.phrases);
            self.apply(&mut map, &mut mentions, rank, assignment);
        }

        debug!(
            "{} tokens, {} mentions, {} phrases over {} aspects",
            document.len(),
            mentions.mentions().len(),
            map.phrase_count(),
            map.len()
        );
        map
    }

    fn apply(
        &self,
        map: &mut AspectOpinionMap,
        mentions: &mut MentionTracker,
        rank: usize,
        assignment: OpinionAssignment,
    ) {
        if assignment.source == AssignmentSource::Direct {
            mentions.record(rank, assignment.aspect);
        }
        map.extend(assignment.aspect, assignment.phrases);
    }

    /// One map per document, in input order.
    pub fn extract(&self, documents: &[Document]) -> Vec<AspectOpinionMap> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            documents
                .par_iter()
                .map(|document| self.extract_document(document))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|document| self.extract_document(document))
                .collect()
        }
    }
}

/// Compile `config` and extract every document, in input order.
pub fn extract(
    documents: &[Document],
    config: &ExtractorConfig,
) -> Result<Vec<AspectOpinionMap>, ConfigError> {
    Ok(OpinionExtractor::new(config)?.extract(documents))
}
