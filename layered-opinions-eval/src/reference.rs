//! Gold annotations.
//!
//! References are written as a list of `(opinion, item)` pairs:
//!
//! ```text
//! (incredible, pizza), (undercooked, lasagna)
//! ```
//!
//! An item names an aspect when it contains the aspect's canonical name
//! ("pizzas", "the pizza") or, failing that, when one of its words is a
//! lexicon form ("lasagne").

use layered_opinions::{AspectId, AspectOpinionMap, Lexicon};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::EvalCase;

static PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)").unwrap());

fn aspect_of(item: &str, lexicon: &Lexicon) -> Option<AspectId> {
    let item = item.to_lowercase();
    AspectId::ALL
        .iter()
        .copied()
        .find(|aspect| item.contains(aspect.as_str()))
        .or_else(|| item.split_whitespace().find_map(|word| lexicon.canonicalize(word)))
}

/// Parse a reference annotation. Malformed pairs and unknown items are
/// skipped with a warning.
///
/// Only exact repeats are dropped; a gold phrase contained in another gold
/// phrase for the same aspect is kept.
pub fn parse_reference(annotation: &str, lowercase: bool) -> AspectOpinionMap {
    let lexicon = Lexicon::standard();
    let mut map = AspectOpinionMap::new();
    for caps in PAIR.captures_iter(annotation) {
        let pair = &caps[1];
        let (opinion, item) = match pair.split_once(", ") {
            Some((opinion, item)) => (opinion.trim(), item.trim()),
            None => {
                log::warn!("skipping malformed reference pair `({})`", pair);
                continue;
            }
        };
        let aspect = match aspect_of(item, &lexicon) {
            Some(aspect) => aspect,
            None => {
                log::warn!("skipping reference pair with unknown item `{}`", item);
                continue;
            }
        };
        if lowercase {
            map.push_exact(aspect, opinion.to_lowercase());
        } else {
            map.push_exact(aspect, opinion);
        }
    }
    map
}

/// Drop cases whose review text repeats the one just before it.
pub fn dedup_consecutive(mut cases: Vec<EvalCase>) -> Vec<EvalCase> {
    let before = cases.len();
    cases.dedup_by(|later, earlier| later.document.text() == earlier.document.text());
    if cases.len() < before {
        log::debug!("dropped {} consecutive duplicate reviews", before - cases.len());
    }
    cases
}
