//! The resolver seam: per-token rules that attach opinion phrases to aspects.

use std::fmt;

use crate::document::Document;
use crate::lexicon::{AspectId, Lexicon};
use crate::mention::MentionTracker;
use crate::numeral::Take;
use crate::phrase::PhraseExtractor;
use crate::token::Token;

/// Read-only view of the extraction state at one token.
pub struct ResolutionContext<'a> {
    pub document: &'a Document,
    pub mentions: &'a MentionTracker,
    /// Sentence rank of the token being resolved
    pub rank: usize,
    pub phrases: &'a PhraseExtractor,
}

/// Which rule attached a set of phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSource {
    /// The token names the aspect itself
    Direct,
    SingularPronoun,
    PluralPronoun,
    Quantifier,
    Numeral { take: Take, count: usize },
    SurfacePattern,
}

impl fmt::Display for AssignmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentSource::Direct => f.write_str("direct"),
            AssignmentSource::SingularPronoun => f.write_str("singular pronoun"),
            AssignmentSource::PluralPronoun => f.write_str("plural pronoun"),
            AssignmentSource::Quantifier => f.write_str("quantifier"),
            AssignmentSource::Numeral { take, count } => write!(f, "numeral {:?} {}", take, count),
            AssignmentSource::SurfacePattern => f.write_str("surface pattern"),
        }
    }
}

/// Phrases to append to one aspect. `phrases` may be empty for direct
/// mentions, which still count as mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionAssignment {
    pub aspect: AspectId,
    pub phrases: Vec<String>,
    pub source: AssignmentSource,
}

pub trait Resolver {
    fn go(&self, token: &Token, cx: &ResolutionContext<'_>) -> Vec<OpinionAssignment>;
}

/// Tokens that are themselves lexicon surface forms.
pub struct DirectMentionResolver<'c> {
    lexicon: &'c Lexicon,
}

impl<'c> DirectMentionResolver<'c> {
    pub fn new(lexicon: &'c Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn aspect_of(&self, token: &Token) -> Option<AspectId> {
        self.lexicon.canonicalize(&token.text)
    }
}

impl<'c> Resolver for DirectMentionResolver<'c> {
    fn go(&self, token: &Token, cx: &ResolutionContext<'_>) -> Vec<OpinionAssignment> {
        self.aspect_of(token)
            .map(|aspect| OpinionAssignment {
                aspect,
                phrases: cx.phrases.extract(cx.document, token),
                source: AssignmentSource::Direct,
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TokenRecord;
    use crate::token::{DepRel, PosTag};

    #[test]
    fn direct_mentions_always_assign() {
        let doc = Document::from_records(
            "Pizzas arrived",
            vec![
                TokenRecord::new("Pizzas", PosTag::Noun, DepRel::Nsubj, 1),
                TokenRecord::new("arrived", PosTag::Verb, DepRel::Root, 1),
            ],
            vec![],
        )
        .unwrap();
        let lexicon = Lexicon::standard();
        let mentions = MentionTracker::default();
        let phrases = PhraseExtractor::default();
        let cx = ResolutionContext {
            document: &doc,
            mentions: &mentions,
            rank: 1,
            phrases: &phrases,
        };
        let resolver = DirectMentionResolver::new(&lexicon);
        assert_eq!(
            resolver.go(doc.token(0), &cx),
            vec![OpinionAssignment {
                aspect: AspectId::Pizza,
                phrases: vec![],
                source: AssignmentSource::Direct,
            }]
        );
        assert!(resolver.go(doc.token(1), &cx).is_empty());
    }
}
