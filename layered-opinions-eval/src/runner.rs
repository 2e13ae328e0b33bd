//! Corpus runs: extract, parse references, score.

use layered_opinions::{AspectOpinionMap, Document, OpinionExtractor};

use crate::config::EvalConfig;
use crate::corpus::{load_all_corpora, EvalCase};
use crate::errors::EvalResult;
use crate::metrics::{score, Scores};
use crate::reference::{dedup_consecutive, parse_reference};

/// Score `extractor` over one set of cases.
pub fn run_corpus(
    cases: &[EvalCase],
    extractor: &OpinionExtractor,
    config: &EvalConfig,
) -> EvalResult<Scores> {
    let cases = if config.dedup_consecutive {
        dedup_consecutive(cases.to_vec())
    } else {
        cases.to_vec()
    };

    let documents: Vec<Document> = cases.iter().map(|case| case.document.clone()).collect();
    let hypotheses = extractor.extract(&documents);
    let references: Vec<AspectOpinionMap> = cases
        .iter()
        .map(|case| parse_reference(&case.reference, config.lowercase_references))
        .collect();

    score(&hypotheses, &references)
}

/// Load every corpus under `config.corpus_dir` and score them as one.
pub fn run(config: &EvalConfig) -> EvalResult<Scores> {
    let extractor = OpinionExtractor::new(&config.extractor_config()?)?;

    let mut cases = Vec::new();
    for (name, corpus) in load_all_corpora(&config.corpus_dir)? {
        log::info!("{}: {} cases", name, corpus.len());
        cases.extend(corpus);
    }

    run_corpus(&cases, &extractor, config)
}
