//! Error types for corpus evaluation.

use layered_opinions::ConfigError;
use thiserror::Error;

/// Errors that can occur while evaluating a corpus.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Hypotheses and references must pair up one to one.
    #[error("{hypotheses} hypotheses cannot be scored against {references} references")]
    LengthMismatch { hypotheses: usize, references: usize },

    /// A corpus or config file could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// A corpus or config file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
