//! Formatting & parseability: standard headings, length, decorative glyphs,
//! and table-layout hints. Starts at 100 and deducts.

use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};
use crate::lexicon::dictionaries::{
    DECORATIVE_GLYPHS, EDUCATION_HEADINGS, EXPERIENCE_HEADINGS, SKILLS_HEADINGS,
    STANDARD_SECTIONS,
};

const MISSING_EXPERIENCE_PENALTY: f64 = 25.0;
const MISSING_EDUCATION_PENALTY: f64 = 20.0;
const MISSING_SKILLS_PENALTY: f64 = 15.0;
const MAX_DECORATIVE_GLYPHS: usize = 5;
/// More tabs than this reads as a table-based layout.
const MAX_TABS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingDetails {
    pub sections_found: Vec<String>,
    pub word_count: usize,
    pub special_chars: usize,
    pub tab_count: usize,
}

/// Lines that, once trimmed, lower-cased and stripped of a trailing colon,
/// are standard section headings. In document order.
pub fn find_headings(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim().to_lowercase())
        .map(|line| line.trim_end_matches(':').to_string())
        .filter(|line| STANDARD_SECTIONS.contains(&line.as_str()))
        .collect()
}

pub fn analyze(text: &str) -> SectionResult {
    let mut score = 100.0;
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    let sections_found = find_headings(text);
    let has_family =
        |family: &[&str]| sections_found.iter().any(|s| family.contains(&s.as_str()));

    if has_family(EXPERIENCE_HEADINGS) {
        findings.push("✅ Work Experience section found".to_string());
    } else {
        findings.push("❌ No standard 'Work Experience' heading detected".to_string());
        recommendations.push(
            "Add a clear 'Work Experience' or 'Professional Experience' section heading."
                .to_string(),
        );
        score -= MISSING_EXPERIENCE_PENALTY;
    }

    if has_family(EDUCATION_HEADINGS) {
        findings.push("✅ Education section found".to_string());
    } else {
        findings.push("❌ No standard 'Education' heading detected".to_string());
        recommendations.push("Add a clear 'Education' section heading.".to_string());
        score -= MISSING_EDUCATION_PENALTY;
    }

    if has_family(SKILLS_HEADINGS) {
        findings.push("✅ Skills section found".to_string());
    } else {
        findings.push("❌ No standard 'Skills' heading detected".to_string());
        recommendations.push("Add a dedicated 'Skills' or 'Technical Skills' section.".to_string());
        score -= MISSING_SKILLS_PENALTY;
    }

    let word_count = text.split_whitespace().count();
    if word_count < 100 {
        findings.push(format!("⚠️ Resume is very short ({word_count} words)"));
        recommendations
            .push("Your resume seems too brief. Aim for at least 300-600 words.".to_string());
        score -= 20.0;
    } else if word_count < 300 {
        findings.push(format!("⚠️ Resume is somewhat short ({word_count} words)"));
        recommendations
            .push("Consider adding more detail to your experience and skills.".to_string());
        score -= 10.0;
    } else {
        findings.push(format!("✅ Good length ({word_count} words)"));
    }

    let special_chars = text
        .chars()
        .filter(|c| DECORATIVE_GLYPHS.contains(c))
        .count();
    if special_chars > MAX_DECORATIVE_GLYPHS {
        findings.push(format!(
            "⚠️ Found {special_chars} special/decorative characters"
        ));
        recommendations.push(
            "Remove decorative symbols and special characters that may confuse ATS parsers."
                .to_string(),
        );
        score -= 10.0;
    }

    let tab_count = text.matches('\t').count();
    if tab_count > MAX_TABS {
        findings
            .push("⚠️ Possible table-based layout detected (many tab characters)".to_string());
        recommendations
            .push("Avoid table-based layouts. Use a simple, linear format instead.".to_string());
        score -= 10.0;
    }

    findings.push(format!(
        "Detected {} standard section heading(s)",
        sections_found.len()
    ));

    SectionResult {
        name: "Formatting & Parseability".to_string(),
        score: finalize_score(score),
        icon: "📄".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Formatting(FormattingDetails {
            sections_found,
            word_count,
            special_chars,
            tab_count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_headings_are_normalized() {
        let text = "  WORK EXPERIENCE:  \nstuff\nEducation\nTechnical Skills:";
        assert_eq!(
            find_headings(text),
            vec!["work experience", "education", "technical skills"]
        );
    }

    #[test]
    fn test_no_headings_caps_score_at_40_before_length_penalties() {
        let text = words(400);
        let result = analyze(&text);
        assert_eq!(result.score, 40.0);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_all_headings_and_good_length_scores_100() {
        let text = format!("Experience\n{}\nEducation\nSkills\n", words(400));
        let result = analyze(&text);
        assert_eq!(result.score, 100.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_short_resume_penalties() {
        let very_short = format!("Experience\nEducation\nSkills\n{}", words(50));
        assert_eq!(analyze(&very_short).score, 80.0);

        let somewhat_short = format!("Experience\nEducation\nSkills\n{}", words(200));
        assert_eq!(analyze(&somewhat_short).score, 90.0);
    }

    #[test]
    fn test_decorative_glyphs_and_tabs_penalized() {
        let text = format!(
            "Experience\nEducation\nSkills\n{}\n★★★●●●\n{}",
            words(400),
            "\t".repeat(21)
        );
        let result = analyze(&text);
        assert_eq!(result.score, 80.0);
        match &result.details {
            SectionDetails::Formatting(d) => {
                assert_eq!(d.special_chars, 6);
                assert_eq!(d.tab_count, 21);
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_score_floors_at_zero() {
        let text = format!("★★★★★★{}", "\t".repeat(30));
        let result = analyze(&text);
        assert_eq!(result.score, 0.0);
    }
}
