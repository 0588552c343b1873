//! Core conversion library for the CBT exam converter.
//!
//! Provides:
//! - Pattern matchers for option, numbered-question, and answer-key lines
//! - Streaming parser that rebuilds question records from a paragraph stream
//! - Generator for the fixed per-question table layout
//! - Shared types (Question, OptionLabel, TableBlock, TableRow)
//!
//! The core performs no I/O: the host hands it plain paragraph texts and
//! receives parsed records or generated table blocks.

pub mod error;
pub mod generator;
pub mod parser;
pub mod patterns;
pub mod types;

pub use error::{ConvertError, Result};
pub use generator::generate;
pub use parser::{parse, Parser};
pub use types::{OptionLabel, Question, TableBlock, TableRow};

/// Parse a paragraph stream and render table blocks in one step.
///
/// Fails with [`ConvertError::NoQuestionsFound`] when no numbered
/// question line was recognized anywhere in the input.
pub fn convert<I, S>(paragraphs: I) -> Result<Vec<TableBlock>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let questions = parse(paragraphs);
    if questions.is_empty() {
        return Err(ConvertError::NoQuestionsFound);
    }
    Ok(generate(&questions))
}
