//! Text-pattern recognizers for exam paragraphs.
//!
//! Three independent, stateless matchers, each applied to a trimmed
//! paragraph text:
//!
//! ```text
//! 1. Siapakah presiden pertama Indonesia?   <- numbered question line
//! A. Soekarno                               <- option line
//! Kunci: A                                  <- answer-key marker
//! ```
//!
//! The option and numbered matchers are anchored to the start of the
//! paragraph; the answer-key matcher searches anywhere in the text, so a
//! key embedded in other words is still found.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::OptionLabel;

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Ea-e])\.\s*(.*)").unwrap());

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s*(.*)").unwrap());

static ANSWER_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Kunci|Jawaban)\s*[:=]\s*([A-Ea-e])").unwrap());

/// Match a leading option letter A-E (either case) followed by a period.
/// Returns the case-folded label and the remaining option text.
pub fn match_option_line(text: &str) -> Option<(OptionLabel, &str)> {
    let caps = OPTION_LINE.captures(text)?;
    let label = OptionLabel::from_char(caps.get(1)?.as_str().chars().next()?)?;
    Some((label, caps.get(2).map_or("", |m| m.as_str())))
}

/// Match a leading digit run followed by a period. Returns the digit run
/// verbatim and the remaining stem text.
pub fn match_numbered_line(text: &str) -> Option<(&str, &str)> {
    let caps = NUMBERED_LINE.captures(text)?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2).map_or("", |m| m.as_str()),
    ))
}

/// Find a `Kunci`/`Jawaban` answer-key marker anywhere in the text.
/// Returns the designated label, case-folded to uppercase.
pub fn match_answer_key(text: &str) -> Option<OptionLabel> {
    let caps = ANSWER_KEY.captures(text)?;
    OptionLabel::from_char(caps.get(1)?.as_str().chars().next()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_line_basic() {
        let (label, text) = match_option_line("A. Jakarta").unwrap();
        assert_eq!(label, OptionLabel::A);
        assert_eq!(text, "Jakarta");
    }

    #[test]
    fn option_line_lowercase_is_folded() {
        let (label, text) = match_option_line("c. Bandung").unwrap();
        assert_eq!(label, OptionLabel::C);
        assert_eq!(text, "Bandung");
    }

    #[test]
    fn option_line_requires_period_separator() {
        assert!(match_option_line("A) Jakarta").is_none());
        assert!(match_option_line("A Jakarta").is_none());
    }

    #[test]
    fn option_line_rejects_letters_outside_range() {
        assert!(match_option_line("F. Medan").is_none());
    }

    #[test]
    fn option_line_allows_empty_text() {
        let (label, text) = match_option_line("B.").unwrap();
        assert_eq!(label, OptionLabel::B);
        assert_eq!(text, "");
    }

    #[test]
    fn numbered_line_basic() {
        let (number, stem) = match_numbered_line("12. Apa ibukota Indonesia?").unwrap();
        assert_eq!(number, "12");
        assert_eq!(stem, "Apa ibukota Indonesia?");
    }

    #[test]
    fn numbered_line_keeps_digits_verbatim() {
        let (number, _) = match_numbered_line("007. Leading zeros stay").unwrap();
        assert_eq!(number, "007");
    }

    #[test]
    fn numbered_line_requires_leading_digits() {
        assert!(match_numbered_line("Soal 1. tidak cocok").is_none());
        assert!(match_numbered_line("1) wrong separator").is_none());
    }

    #[test]
    fn answer_key_colon_and_equals() {
        assert_eq!(match_answer_key("Kunci: A"), Some(OptionLabel::A));
        assert_eq!(match_answer_key("Jawaban = d"), Some(OptionLabel::D));
    }

    #[test]
    fn answer_key_is_found_anywhere() {
        assert_eq!(
            match_answer_key("catatan guru, Kunci:B, jangan disebar"),
            Some(OptionLabel::B)
        );
    }

    #[test]
    fn answer_key_keyword_is_case_insensitive() {
        assert_eq!(match_answer_key("KUNCI : e"), Some(OptionLabel::E));
        assert_eq!(match_answer_key("jawaban:c"), Some(OptionLabel::C));
    }

    #[test]
    fn answer_key_requires_separator() {
        assert!(match_answer_key("Kunci B").is_none());
    }

    #[test]
    fn answer_key_rejects_letters_outside_range() {
        assert!(match_answer_key("Kunci: F").is_none());
    }
}
