//! Table-layout generator for the CBT import schema.
//!
//! Each question becomes one fixed block of label/value rows: four
//! metadata rows, the numbered stem row, then the five option rows A-E.
//! Missing options render as empty cells, never as an error.

use crate::types::{OptionLabel, Question, TableBlock, TableRow};

/// Question-type marker for multiple choice ("pilihan ganda").
const QUESTION_TYPE: &str = "PG";

/// Placeholder competency code expected by the import template.
const COMPETENCY_CODE: &str = "1.0.1";

/// Render one table block per question, in result order. Pure; no block
/// depends on its neighbors.
pub fn generate(questions: &[Question]) -> Vec<TableBlock> {
    questions.iter().map(block_for).collect()
}

fn block_for(question: &Question) -> TableBlock {
    let mut rows = vec![
        TableRow::new("TS", QUESTION_TYPE),
        TableRow::new("KD", COMPETENCY_CODE),
        TableRow::new("KJ", question.answer_key.as_str()),
        TableRow::new("ABS", ""),
        TableRow::new(format!("{}.", question.number), question.stem.clone()),
    ];
    for label in OptionLabel::ALL {
        rows.push(TableRow::new(label.as_str(), question.option_text(label)));
    }
    TableBlock { rows }
}
