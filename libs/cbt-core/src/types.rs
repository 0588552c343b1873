//! Core types for the CBT exam converter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Multiple-choice option label, one of the five fixed identifiers A-E.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
    E,
}

impl Default for OptionLabel {
    fn default() -> Self {
        Self::A
    }
}

impl OptionLabel {
    /// All labels in schema order.
    pub const ALL: [OptionLabel; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Parse from a single letter, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    /// Get the label as an uppercase letter.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Get the label as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

/// One parsed exam item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Numbering prefix captured verbatim. Descriptive text, not a unique
    /// key; two questions may share the same numeral.
    pub number: String,
    /// Question body text from the same line as the number.
    pub stem: String,
    /// Option texts keyed by label; any subset of A-E.
    pub options: BTreeMap<OptionLabel, String>,
    /// Designated correct option, `A` unless a key line said otherwise.
    pub answer_key: OptionLabel,
}

impl Question {
    /// Open a new question record with empty options and the default key.
    pub fn new(number: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            stem: stem.into(),
            options: BTreeMap::new(),
            answer_key: OptionLabel::default(),
        }
    }

    /// Option text for a label, empty if the label was never captured.
    pub fn option_text(&self, label: OptionLabel) -> &str {
        self.options.get(&label).map(String::as_str).unwrap_or("")
    }
}

/// One label/value row of a generated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The fixed two-column structure emitted per question, matching the CBT
/// import schema. Independently serializable; blocks relate to each other
/// only through output ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    pub rows: Vec<TableRow>,
}
