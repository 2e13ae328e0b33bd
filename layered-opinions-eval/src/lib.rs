#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Corpus evaluation for layered-opinions.
//!
//! Each corpus case pairs an annotated review with a gold annotation written
//! as `(opinion, item)` pairs. The extractor's maps are scored against the
//! gold maps with exact (equal phrase) and inexact (one phrase contains the
//! other) precision and recall.
//!
//! ## Modules
//!
//! - [`corpus`] - Loading annotated cases from `*.json` corpus files
//! - [`reference`] - Parsing gold annotations
//! - [`metrics`] - Match counting and precision/recall
//! - [`runner`] - Running an extractor over a corpus
//! - [`config`] - Evaluation settings via TOML
//! - [`formatter`] - Summary formatting
//! - [`errors`] - Error types for evaluation

pub mod config;
pub mod corpus;
pub mod errors;
pub mod formatter;
pub mod metrics;
pub mod reference;
pub mod runner;

pub use config::EvalConfig;
pub use corpus::{load_all_corpora, load_corpus, EvalCase};
pub use errors::{EvalError, EvalResult};
pub use formatter::{format_report, format_summary};
pub use metrics::{score, MatchCounts, Scores};
pub use reference::{dedup_consecutive, parse_reference};
pub use runner::{run, run_corpus};
