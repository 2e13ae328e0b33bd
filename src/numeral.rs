//! Numeral subjects: "the first two were ok".

use crate::anaphora::{is_numeral_subject, starts_with_digit};
use crate::document::Document;
use crate::mention::Mention;
use crate::resolver::{AssignmentSource, OpinionAssignment, ResolutionContext, Resolver};
use crate::token::Token;

/// Which end of a mention group a numeral selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Take {
    /// The earliest mentions ("the first two")
    Head,
    /// The most recent mentions ("the two")
    Tail,
}

impl Take {
    pub fn of(document: &Document, numeral: &Token) -> Take {
        if document
            .children_of(numeral)
            .any(|child| child.text.eq_ignore_ascii_case("first"))
        {
            Take::Head
        } else {
            Take::Tail
        }
    }

    /// At most `count` mentions from this end of `group`, in textual order.
    pub fn slice<'g>(&self, group: &'g [Mention], count: usize) -> &'g [Mention] {
        let count = count.min(group.len());
        match self {
            Take::Head => &group[..count],
            Take::Tail => &group[group.len() - count..],
        }
    }
}

/// Value of a spelled-out number; unknown words count as one.
pub fn number_word_value(word: &str) -> usize {
    match word.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        _ => 1,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NumeralResolver;

impl NumeralResolver {
    pub fn new() -> Self {
        NumeralResolver
    }
}

impl Resolver for NumeralResolver {
    fn go(&self, token: &Token, cx: &ResolutionContext<'_>) -> Vec<OpinionAssignment> {
        if !is_numeral_subject(token) || starts_with_digit(&token.text) {
            return Vec::new();
        }
        let group = match cx.mentions.neighboring_group(cx.rank) {
            Some(group) => group,
            None => {
                log::debug!("numeral `{}` at token {} has no neighboring group", token.text, token.index);
                return Vec::new();
            }
        };
        let take = Take::of(cx.document, token);
        let count = number_word_value(&token.text);
        let selected = take.slice(group, count);

        let phrases = cx.phrases.extract(cx.document, token);
        if phrases.is_empty() {
            return Vec::new();
        }
        selected
            .iter()
            .map(|mention| OpinionAssignment {
                aspect: mention.aspect,
                phrases: phrases.clone(),
                source: AssignmentSource::Numeral { take, count },
            })
            .collect()
    }
}
