//! Exact and inexact precision/recall.
//!
//! For every review and every aspect, phrases on each side are taken as a
//! set. An exact match is a phrase present on both sides; an inexact match is
//! any (hypothesis, reference) pair where one phrase contains the other.

use std::collections::BTreeSet;

use layered_opinions::{AspectId, AspectOpinionMap};
use serde::Serialize;

use crate::errors::{EvalError, EvalResult};

/// Corpus-wide counts for one match criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl MatchCounts {
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.false_negatives)
    }

    fn add_review(&mut self, matches: usize, hypotheses: usize, references: usize) {
        self.true_positives += matches;
        // inexact matches can outnumber the items on either side
        self.false_positives += hypotheses.saturating_sub(matches);
        self.false_negatives += references.saturating_sub(matches);
    }
}

/// `hits / (hits + misses)`, or 0 when both are 0.
fn ratio(hits: usize, misses: usize) -> f64 {
    if hits + misses > 0 {
        hits as f64 / (hits + misses) as f64
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Scores {
    pub exact_precision: f64,
    pub exact_recall: f64,
    pub inexact_precision: f64,
    pub inexact_recall: f64,
    pub exact: MatchCounts,
    pub inexact: MatchCounts,
}

impl Scores {
    fn from_counts(exact: MatchCounts, inexact: MatchCounts) -> Self {
        Self {
            exact_precision: exact.precision(),
            exact_recall: exact.recall(),
            inexact_precision: inexact.precision(),
            inexact_recall: inexact.recall(),
            exact,
            inexact,
        }
    }
}

/// Score hypotheses against references, pairing them by position.
pub fn score(
    hypotheses: &[AspectOpinionMap],
    references: &[AspectOpinionMap],
) -> EvalResult<Scores> {
    if hypotheses.len() != references.len() {
        return Err(EvalError::LengthMismatch {
            hypotheses: hypotheses.len(),
            references: references.len(),
        });
    }

    let mut exact = MatchCounts::default();
    let mut inexact = MatchCounts::default();

    for (hypothesis, reference) in hypotheses.iter().zip(references) {
        let mut exact_matches = 0;
        let mut inexact_matches = 0;
        let mut hypothesis_items = 0;
        let mut reference_items = 0;

        for aspect in AspectId::ALL {
            let hypothesis_phrases: BTreeSet<&str> =
                hypothesis.get(aspect).iter().map(String::as_str).collect();
            let reference_phrases: BTreeSet<&str> =
                reference.get(aspect).iter().map(String::as_str).collect();

            hypothesis_items += hypothesis_phrases.len();
            reference_items += reference_phrases.len();

            for h in &hypothesis_phrases {
                for r in &reference_phrases {
                    if h == r {
                        exact_matches += 1;
                    }
                    if h.contains(r) || r.contains(h) {
                        inexact_matches += 1;
                    }
                }
            }
        }

        exact.add_review(exact_matches, hypothesis_items, reference_items);
        inexact.add_review(inexact_matches, hypothesis_items, reference_items);
    }

    Ok(Scores::from_counts(exact, inexact))
}
