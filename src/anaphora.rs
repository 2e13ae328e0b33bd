//! Pronoun and quantifier resolution by recency.
//!
//! An anaphor resolves to the most recent mention group, provided that group
//! sits in the same or the previous sentence. Anything further away is
//! treated as non-referential and left alone.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::resolver::{AssignmentSource, OpinionAssignment, ResolutionContext, Resolver};
use crate::token::{DepRel, PosTag, Token};

pub fn is_singular_item_pronoun(token: &Token) -> bool {
    token.pos == PosTag::Pron && token.text.eq_ignore_ascii_case("it")
}

pub fn is_plural_pronoun(token: &Token) -> bool {
    token.text.eq_ignore_ascii_case("they")
}

pub fn is_quantifier(token: &Token) -> bool {
    token.text.eq_ignore_ascii_case("every") || token.text.eq_ignore_ascii_case("everything")
}

/// A spelled-out number in subject position ("the first two were ok").
pub fn is_numeral_subject(token: &Token) -> bool {
    token.pos == PosTag::Num && token.dep == DepRel::Nsubj
}

pub fn starts_with_digit(text: &str) -> bool {
    text.chars().next().map_or(false, |c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnaphorKind {
    /// "it"
    Singular,
    /// "they"
    Plural,
    /// "every", "everything"
    Quantifier,
}

impl AnaphorKind {
    pub fn classify(token: &Token) -> Option<AnaphorKind> {
        if is_singular_item_pronoun(token) {
            Some(AnaphorKind::Singular)
        } else if is_plural_pronoun(token) {
            Some(AnaphorKind::Plural)
        } else if is_quantifier(token) {
            Some(AnaphorKind::Quantifier)
        } else {
            None
        }
    }

    fn source(&self) -> AssignmentSource {
        match self {
            AnaphorKind::Singular => AssignmentSource::SingularPronoun,
            AnaphorKind::Plural => AssignmentSource::PluralPronoun,
            AnaphorKind::Quantifier => AssignmentSource::Quantifier,
        }
    }
}

/// How coreference clusters take part in pronoun resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorefPolicy {
    /// Resolve by recency alone.
    #[default]
    Ignore,
    /// Drop a recency resolution when the anaphor's cluster names an aspect
    /// outside the resolved group. Anaphors without a cluster are unaffected.
    Corroborate,
}

pub struct AnaphoraResolver<'c> {
    lexicon: &'c Lexicon,
    coref: CorefPolicy,
}

impl<'c> AnaphoraResolver<'c> {
    pub fn new(lexicon: &'c Lexicon, coref: CorefPolicy) -> Self {
        Self { lexicon, coref }
    }
}

impl<'c> Resolver for AnaphoraResolver<'c> {
    fn go(&self, token: &Token, cx: &ResolutionContext<'_>) -> Vec<OpinionAssignment> {
        let kind = match AnaphorKind::classify(token) {
            Some(kind) => kind,
            None => return Vec::new(),
        };
        let group = match cx.mentions.neighboring_group(cx.rank) {
            Some(group) => group,
            None => {
                log::debug!(
                    "{:?} `{}` at token {} has no neighboring antecedent",
                    kind,
                    token.text,
                    token.index
                );
                return Vec::new();
            }
        };
        // a singular pronoun takes only the most recent mention
        let group = match kind {
            AnaphorKind::Singular => &group[group.len() - 1..],
            AnaphorKind::Plural | AnaphorKind::Quantifier => group,
        };

        if self.coref == CorefPolicy::Corroborate {
            if let Some(clustered) = cx.document.cluster_aspect(token.index, self.lexicon) {
                if !group.iter().any(|mention| mention.aspect == clustered) {
                    log::debug!(
                        "`{}` at token {} clusters with {}, outside its recency group",
                        token.text,
                        token.index,
                        clustered
                    );
                    return Vec::new();
                }
            }
        }

        let phrases = cx.phrases.extract(cx.document, token);
        if phrases.is_empty() {
            return Vec::new();
        }
        group
            .iter()
            .map(|mention| OpinionAssignment {
                aspect: mention.aspect,
                phrases: phrases.clone(),
                source: kind.source(),
            })
            .collect()
    }
}
