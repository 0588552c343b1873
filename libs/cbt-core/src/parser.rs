//! Line-oriented parser that reconstructs question records from an
//! unstructured paragraph stream.
//!
//! # Format
//! ```text
//! 1. Apa ibukota provinsi Lampung?
//! A. Bandar Lampung
//! B. Metro
//! Kunci: A
//!
//! 2. ...
//! ```
//!
//! A numbered line opens a question; option and answer-key lines mutate
//! the open record until the next numbered line (or end of input) seals
//! it. Text matching no pattern is dropped without effect, which is the
//! intended behavior for messy real-world documents, not a fault.

use crate::patterns::{match_answer_key, match_numbered_line, match_option_line};
use crate::types::Question;

/// Parse an ordered paragraph stream into question records.
///
/// Never fails: the one degenerate outcome is an empty result, which
/// callers must treat as a validation condition, not a crash.
pub fn parse<I, S>(paragraphs: I) -> Vec<Question>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for paragraph in paragraphs {
        parser.feed(paragraph.as_ref());
    }
    parser.finish()
}

/// Parser state: between questions, or holding the in-progress record.
#[derive(Debug)]
enum State {
    NoOpenQuestion,
    QuestionOpen(Question),
}

/// Streaming parser over paragraph texts.
#[derive(Debug)]
pub struct Parser {
    state: State,
    questions: Vec<Question>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::NoOpenQuestion,
            questions: Vec::new(),
        }
    }

    /// Process one paragraph. Whitespace-only paragraphs have no effect.
    pub fn feed(&mut self, paragraph: &str) {
        let text = paragraph.trim();
        if text.is_empty() {
            return;
        }

        // An answer-key marker is consumed only while a question is open;
        // a stray key is never held back for a later question.
        if let Some(key) = match_answer_key(text) {
            if let State::QuestionOpen(question) = &mut self.state {
                question.answer_key = key;
                return;
            }
        }

        if let Some((number, stem)) = match_numbered_line(text) {
            self.seal();
            self.state = State::QuestionOpen(Question::new(number, stem));
        } else if let Some((label, option_text)) = match_option_line(text) {
            if let State::QuestionOpen(question) = &mut self.state {
                // Last occurrence of a label wins.
                question.options.insert(label, option_text.to_string());
            }
        }
    }

    /// Seal the remaining open question, if any, and return the records
    /// in the order their numbered lines appeared.
    pub fn finish(mut self) -> Vec<Question> {
        self.seal();
        self.questions
    }

    fn seal(&mut self) {
        let state = std::mem::replace(&mut self.state, State::NoOpenQuestion);
        if let State::QuestionOpen(question) = state {
            self.questions.push(question);
        }
    }
}
