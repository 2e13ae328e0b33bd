//! Opinion phrases from the dependency neighbourhood of an anchor token.
//!
//! Three templates, tried in order:
//!
//! ```text
//! subject:   pizza <-nsubj- was -acomp-> (very) good (and hot)
//! conjunct:  gelato -conj-> pizza <-nsubj- was -acomp-> great
//! modifier:  (cold & hard) <-amod- bruschetta
//!            (badly cooked) <-amod- lasagna
//! ```
//!
//! The first two read the predicate governing the anchor; the modifier
//! template only runs when they produce nothing.

use crate::document::Document;
use crate::token::{DepRel, PosTag, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseExtractor {
    lowercase: bool,
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl PhraseExtractor {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// All phrases describing `anchor`, in discovery order.
    pub fn extract(&self, document: &Document, anchor: &Token) -> Vec<String> {
        let governed = match anchor.dep {
            DepRel::Nsubj => self.governed_phrases(document, anchor),
            DepRel::Conj => self.governed_phrases(document, document.head_of(anchor)),
            _ => Vec::new(),
        };
        if !governed.is_empty() {
            return governed;
        }
        self.modifier_phrases(document, anchor)
    }

    /// Adjectival complements of the clause `subject` is the subject of.
    fn governed_phrases(&self, document: &Document, subject: &Token) -> Vec<String> {
        let predicate = document.head_of(subject);
        let negation = document
            .children_of(predicate)
            .find(|child| child.dep == DepRel::Neg);

        document
            .children_of(predicate)
            .filter(|child| {
                matches!(child.dep, DepRel::Acomp | DepRel::Attr) && child.pos == PosTag::Adj
            })
            .map(|adjective| {
                let mut words: Vec<&Token> = negation.into_iter().collect();
                words.extend(self.modified(document, adjective));
                self.join(&words)
            })
            .collect()
    }

    /// Modifiers hanging directly off the anchor.
    fn modifier_phrases(&self, document: &Document, anchor: &Token) -> Vec<String> {
        let mut phrases = Vec::new();
        for child in document.children_of(anchor) {
            match (&child.dep, child.pos) {
                (DepRel::Amod, PosTag::Adj) => {
                    phrases.push(self.join(&self.modified(document, child)));
                    // coordinated adjectives also stand on their own
                    for conjunct in document.children_of(child) {
                        if conjunct.dep == DepRel::Conj && conjunct.pos == PosTag::Adj {
                            phrases.push(self.join(&[conjunct]));
                        }
                    }
                }
                (DepRel::Amod, PosTag::Verb) => {
                    let mut words: Vec<&Token> = document
                        .children_of(child)
                        .filter(|grandchild| grandchild.dep == DepRel::Advmod)
                        .collect();
                    words.push(child);
                    phrases.push(self.join(&words));
                }
                (DepRel::Nsubj, PosTag::Adj) => phrases.push(self.join(&[child])),
                _ => {}
            }
        }
        phrases
    }

    /// `adjective` with its left and right phrase modifiers, in textual order.
    fn modified<'d>(&self, document: &'d Document, adjective: &'d Token) -> Vec<&'d Token> {
        let mut words: Vec<&Token> = document
            .lefts_of(adjective)
            .filter(|left| left.dep.is_phrase_modifier())
            .collect();
        words.push(adjective);
        words.extend(
            document
                .rights_of(adjective)
                .filter(|right| right.dep.is_phrase_modifier()),
        );
        words
    }

    /// A single token rendered as a phrase.
    pub fn word(&self, token: &Token) -> String {
        self.join(&[token])
    }

    fn join(&self, words: &[&Token]) -> String {
        let phrase = words
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if self.lowercase {
            phrase.to_lowercase()
        } else {
            phrase
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TokenRecord;

    fn doc(text: &str, records: Vec<TokenRecord>) -> Document {
        Document::from_records(text, records, vec![]).unwrap()
    }

    fn tok(text: &str, pos: PosTag, dep: &str, head: usize) -> TokenRecord {
        TokenRecord::new(text, pos, DepRel::from(dep), head)
    }

    #[test]
    fn subject_with_modified_complement() {
        // The pizza was very good and hot
        let d = doc(
            "The pizza was very good and hot",
            vec![
                tok("The", PosTag::Det, "det", 1),
                tok("pizza", PosTag::Noun, "nsubj", 2),
                tok("was", PosTag::Aux, "ROOT", 2),
                tok("very", PosTag::Adv, "advmod", 4),
                tok("good", PosTag::Adj, "acomp", 2),
                tok("and", PosTag::Cconj, "cc", 4),
                tok("hot", PosTag::Adj, "conj", 4),
            ],
        );
        let phrases = PhraseExtractor::default().extract(&d, d.token(1));
        assert_eq!(phrases, vec!["very good and hot"]);
    }

    #[test]
    fn negation_is_prepended() {
        // The lasagna was not bad
        let d = doc(
            "The lasagna was not bad",
            vec![
                tok("The", PosTag::Det, "det", 1),
                tok("lasagna", PosTag::Noun, "nsubj", 2),
                tok("was", PosTag::Aux, "ROOT", 2),
                tok("not", PosTag::Part, "neg", 2),
                tok("bad", PosTag::Adj, "acomp", 2),
            ],
        );
        let phrases = PhraseExtractor::default().extract(&d, d.token(1));
        assert_eq!(phrases, vec!["not bad"]);
    }

    #[test]
    fn non_adjective_complement_is_ignored() {
        // The pizza was a disaster
        let d = doc(
            "The pizza was a disaster",
            vec![
                tok("The", PosTag::Det, "det", 1),
                tok("pizza", PosTag::Noun, "nsubj", 2),
                tok("was", PosTag::Aux, "ROOT", 2),
                tok("a", PosTag::Det, "det", 4),
                tok("disaster", PosTag::Noun, "attr", 2),
            ],
        );
        assert!(PhraseExtractor::default().extract(&d, d.token(1)).is_empty());
    }

    #[test]
    fn conjunct_reads_the_coordinated_subject_clause() {
        // The pizza and gelato were great
        let d = doc(
            "The pizza and gelato were great",
            vec![
                tok("The", PosTag::Det, "det", 1),
                tok("pizza", PosTag::Noun, "nsubj", 4),
                tok("and", PosTag::Cconj, "cc", 1),
                tok("gelato", PosTag::Noun, "conj", 1),
                tok("were", PosTag::Aux, "ROOT", 4),
                tok("great", PosTag::Adj, "acomp", 4),
            ],
        );
        let extractor = PhraseExtractor::default();
        assert_eq!(extractor.extract(&d, d.token(1)), vec!["great"]);
        assert_eq!(extractor.extract(&d, d.token(3)), vec!["great"]);
    }

    #[test]
    fn coordinated_amod_adjectives() {
        // cold & hard bruschetta
        let d = doc(
            "cold & hard bruschetta",
            vec![
                tok("cold", PosTag::Adj, "amod", 3),
                tok("&", PosTag::Cconj, "cc", 0),
                tok("hard", PosTag::Adj, "conj", 0),
                tok("bruschetta", PosTag::Noun, "ROOT", 3),
            ],
        );
        let phrases = PhraseExtractor::default().extract(&d, d.token(3));
        assert_eq!(phrases, vec!["cold & hard", "hard"]);
    }

    #[test]
    fn participle_modifier_takes_adverbs() {
        // badly cooked lasagna
        let d = doc(
            "badly cooked lasagna",
            vec![
                tok("badly", PosTag::Adv, "advmod", 1),
                tok("cooked", PosTag::Verb, "amod", 2),
                tok("lasagna", PosTag::Noun, "ROOT", 2),
            ],
        );
        let phrases = PhraseExtractor::default().extract(&d, d.token(2));
        assert_eq!(phrases, vec!["badly cooked"]);
    }

    #[test]
    fn adjective_subject_child() {
        // pizza good
        let d = doc(
            "pizza good",
            vec![
                tok("pizza", PosTag::Noun, "ROOT", 0),
                tok("good", PosTag::Adj, "nsubj", 0),
            ],
        );
        assert_eq!(PhraseExtractor::default().extract(&d, d.token(0)), vec!["good"]);
    }

    #[test]
    fn subject_falls_back_to_modifiers() {
        // The horrible pizza arrived
        let d = doc(
            "The horrible pizza arrived",
            vec![
                tok("The", PosTag::Det, "det", 2),
                tok("horrible", PosTag::Adj, "amod", 2),
                tok("pizza", PosTag::Noun, "nsubj", 3),
                tok("arrived", PosTag::Verb, "ROOT", 3),
            ],
        );
        assert_eq!(PhraseExtractor::default().extract(&d, d.token(2)), vec!["horrible"]);
    }

    #[test]
    fn case_is_kept_when_asked() {
        let d = doc(
            "Cold bruschetta",
            vec![
                tok("Cold", PosTag::Adj, "amod", 1),
                tok("bruschetta", PosTag::Noun, "ROOT", 1),
            ],
        );
        assert_eq!(PhraseExtractor::new(false).extract(&d, d.token(1)), vec!["Cold"]);
        assert_eq!(PhraseExtractor::new(true).extract(&d, d.token(1)), vec!["cold"]);
    }
}
