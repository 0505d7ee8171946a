//! Resume Scoring Engine: six independent ATS checks over one resume text,
//! combined by a fixed-weight mean into a [`ResumeScoreReport`].
//!
//! Every check is a pure `&str -> SectionResult` function. Weak signal yields
//! a low sub-score plus a recommendation, never an error.

pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod semantic;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::DocumentMetadata;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Result of a single ATS check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub name: String,
    pub score: f64, // 0.0 – 100.0, one decimal
    pub icon: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub details: SectionDetails,
}

/// Raw values a check extracted, for display only. Checks never read each
/// other's details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionDetails {
    Keywords(keywords::KeywordDetails),
    Formatting(formatting::FormattingDetails),
    Contact(contact::ContactDetails),
    Experience(experience::ExperienceDetails),
    Education(education::EducationDetails),
    Semantic(semantic::SemanticDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeScoreReport {
    pub overall_score: f64, // 0.0 – 100.0, one decimal
    pub sections: Vec<SectionResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

type Analyzer = fn(&str) -> SectionResult;

/// Checks in report order with their aggregation weights.
const SECTION_WEIGHTS: &[(Analyzer, f64)] = &[
    (keywords::analyze, 25.0),
    (formatting::analyze, 15.0),
    (contact::analyze, 15.0),
    (experience::analyze, 20.0),
    (education::analyze, 15.0),
    (semantic::analyze, 10.0),
];

/// Runs all six checks and computes the weighted overall score.
///
/// `metadata` is accepted for callers that already extracted document
/// structure; the checks re-derive everything from `text`.
pub fn score_resume(text: &str, metadata: Option<&DocumentMetadata>) -> ResumeScoreReport {
    if let Some(meta) = metadata {
        debug!(
            "Scoring resume: {} lines, {} chars, {} candidate headings",
            meta.total_lines,
            meta.total_chars,
            meta.headings.len()
        );
    }

    let mut sections = Vec::with_capacity(SECTION_WEIGHTS.len());
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (analyze, weight) in SECTION_WEIGHTS {
        let section = analyze(text);
        weighted_sum += section.score * weight;
        total_weight += weight;
        sections.push(section);
    }

    let overall_score = if total_weight > 0.0 {
        round1(weighted_sum / total_weight).clamp(0.0, 100.0)
    } else {
        0.0
    };

    debug!("Resume overall score: {overall_score}");

    ResumeScoreReport {
        overall_score,
        sections,
    }
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds and clamps a raw check score into the reported range.
pub(crate) fn finalize_score(raw: f64) -> f64 {
    round1(raw).clamp(0.0, 100.0)
}
