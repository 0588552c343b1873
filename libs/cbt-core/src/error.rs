//! Error types for cbt-core.

use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors surfaced by the conversion pipeline.
///
/// The parser itself never fails on malformed text; unmatched paragraphs
/// are dropped by design. The single reportable condition is a document
/// that yields no question at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no questions found in document")]
    NoQuestionsFound,
}
