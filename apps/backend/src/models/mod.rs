//! API response types

use serde::{Deserialize, Serialize};

use cbt_core::{OptionLabel, Question};

/// Summary of one parsed question, for the analyze endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub number: String,
    pub stem: String,
    /// Option labels that were actually present in the source.
    pub options: Vec<OptionLabel>,
    pub answer_key: OptionLabel,
}

impl QuestionSummary {
    pub fn from_question(question: &Question) -> Self {
        Self {
            number: question.number.clone(),
            stem: question.stem.clone(),
            options: question.options.keys().copied().collect(),
            answer_key: question.answer_key,
        }
    }
}

/// Response for POST /api/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub question_count: usize,
    pub questions: Vec<QuestionSummary>,
}
