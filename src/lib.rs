#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Aspect-opinion extraction over dependency-parsed restaurant reviews.
//!
//! Given a review that an external annotator has tokenized, tagged and
//! parsed, the extractor finds which opinion phrases attach to which of a
//! fixed set of dishes, including dishes referred to as "it", "they",
//! "everything" or "the first two".
//!
//! ```text
//! The  pizza  was  incredible  while  the  lasagna  was  undercooked  .
//!      ╰───╯NOUN nsubj->was
//!                  ╰────────╯ADJ acomp->was
//!
//! pizza: "incredible"
//! lasagna: "undercooked"
//! ```
//!
//! ## Modules
//!
//! - [`token`], [`document`] - the annotated token graph
//! - [`conllu`], [`annotate`] - reading annotator output
//! - [`lexicon`] - the closed aspect vocabulary
//! - [`phrase`] - dependency templates producing opinion phrases
//! - [`mention`], [`anaphora`], [`numeral`] - mention tracking and resolution
//! - [`fallback`] - shallow copular patterns
//! - [`pipeline`] - the per-document aggregator

pub mod annotate;
pub mod anaphora;
pub mod config;
pub mod conllu;
mod display;
pub mod document;
mod error;
pub mod fallback;
pub mod lexicon;
pub mod mention;
pub mod numeral;
mod opinion_map;
pub mod phrase;
pub mod pipeline;
pub mod resolver;
pub mod token;

pub use annotate::{annotate_all, AnnotationStore, Annotator};
pub use anaphora::{AnaphorKind, AnaphoraResolver, CorefPolicy};
pub use config::ExtractorConfig;
pub use conllu::parse_conllu;
pub use display::DocumentDisplay;
pub use document::{CorefCluster, Document, TokenRecord};
pub use error::{AnnotateError, AnnotateResult, ConfigError};
pub use fallback::{FallbackMode, SurfaceMatch, SurfacePatternMatcher};
pub use lexicon::{AspectId, GrammaticalNumber, Lexicon, LexiconEntry};
pub use mention::{Mention, MentionTracker};
pub use numeral::{NumeralResolver, Take};
pub use opinion_map::AspectOpinionMap;
pub use phrase::PhraseExtractor;
pub use pipeline::{extract, OpinionExtractor};
pub use resolver::{
    AssignmentSource, DirectMentionResolver, OpinionAssignment, ResolutionContext, Resolver,
};
pub use token::{DepRel, PosTag, Token, TokenSpan};

#[cfg(test)]
mod tests {
    mod anaphora;
    mod fixtures;
    mod properties;
    mod scenarios;
}
