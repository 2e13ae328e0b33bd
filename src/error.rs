//! Error types for annotation input and extractor configuration.
//!
//! Extraction itself never fails: once a [`Document`](crate::Document) has
//! been built and an [`OpinionExtractor`](crate::OpinionExtractor) compiled,
//! every document yields a (possibly empty) map.

use thiserror::Error;

/// Errors raised while turning annotator output into a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// A token names a head outside the document.
    #[error("token {token} has head {head}, but the document has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// A coreference span falls outside the document or is empty.
    #[error("coreference span {start}..{end} is invalid for a document of {len} tokens")]
    SpanOutOfRange { start: usize, end: usize, len: usize },

    /// A POS tag outside the Universal POS inventory.
    #[error("line {line}: unknown part-of-speech tag `{tag}`")]
    UnknownPosTag { line: usize, tag: String },

    /// A malformed CoNLL-U line.
    #[error("line {line}: {message}")]
    Conll { line: usize, message: String },

    /// No annotation is available for the requested text.
    #[error("no annotation available for text: {preview:?}")]
    NotAnnotated { preview: String },

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading or compiling an [`ExtractorConfig`](crate::ExtractorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid extractor config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize extractor config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("failed to compile surface pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("mention window must be at least 1")]
    ZeroMentionWindow,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AnnotateResult<T> = Result<T, AnnotateError>;
