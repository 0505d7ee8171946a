use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::dictionaries::INTAKE_HEADINGS;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Lines shorter than this written in capitals count as candidate headings.
const MAX_CAPS_HEADING_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    /// 1-based.
    pub line_number: usize,
    pub is_standard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub total_lines: usize,
    pub total_chars: usize,
    pub headings: Vec<Heading>,
    pub has_standard_sections: bool,
}

/// LF line endings, at most one consecutive blank line, trimmed.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    BLANK_RUN_RE
        .replace_all(&unified, "\n\n")
        .trim()
        .to_string()
}

pub fn extract_structure(text: &str) -> DocumentMetadata {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut headings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        let key = trimmed.to_lowercase();
        let key = key.trim_end_matches(':');
        let is_standard = INTAKE_HEADINGS.contains(&key);

        if is_standard || is_caps_heading(trimmed) {
            headings.push(Heading {
                text: trimmed.to_string(),
                line_number: index + 1,
                is_standard,
            });
        }
    }

    DocumentMetadata {
        total_lines: lines.len(),
        total_chars: text.chars().count(),
        has_standard_sections: headings.iter().any(|h| h.is_standard),
        headings,
    }
}

/// Short, has letters, and none of them lower-case.
fn is_caps_heading(line: &str) -> bool {
    line.chars().count() < MAX_CAPS_HEADING_LEN
        && line.chars().any(char::is_alphabetic)
        && !line.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_blank_runs_and_line_endings() {
        assert_eq!(normalize_text("  a\r\nb\r\rc\n\n\n\n\nd  "), "a\nb\n\nc\n\nd");
    }

    #[test]
    fn test_structure_finds_standard_and_caps_headings() {
        let text = "Jane Doe\nEXPERIENCE\nAcme, 2020\nSkills:\nRust\nHOBBIES AND MORE\n2024";
        let meta = extract_structure(text);
        assert_eq!(meta.total_lines, 7);
        assert!(meta.has_standard_sections);

        let found: Vec<(&str, usize, bool)> = meta
            .headings
            .iter()
            .map(|h| (h.text.as_str(), h.line_number, h.is_standard))
            .collect();
        assert_eq!(
            found,
            vec![
                ("EXPERIENCE", 2, true),
                ("Skills:", 4, true),
                ("HOBBIES AND MORE", 6, false),
            ]
        );
    }
}
