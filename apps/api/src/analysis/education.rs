//! Education & certifications: highest degree, certifications, institution
//! names, GPA.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};
use crate::lexicon::dictionaries::{CERTIFICATIONS, DEGREE_LEVELS, INSTITUTION_KEYWORDS};
use crate::lexicon::{contains_any, scan, DegreeLevel};

static GPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:gpa|grade|cgpa)[\s:]*(\d\.\d+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    /// 0 when no degree keyword was found.
    pub degree_level: u8,
    pub degree_keywords: Vec<String>,
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

pub fn analyze(text: &str) -> SectionResult {
    let text_lower = text.to_lowercase();
    let mut score = 0.0;
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();
    let mut details = EducationDetails::default();

    let mut degree_keywords = BTreeSet::new();
    for (keyword, level) in DEGREE_LEVELS {
        if text_lower.contains(keyword) {
            degree_keywords.insert(*keyword);
            details.degree_level = details.degree_level.max(*level);
        }
    }

    match DegreeLevel::from_ordinal(details.degree_level) {
        Some(level) => {
            let keywords: Vec<&str> = degree_keywords.into_iter().collect();
            findings.push(format!(
                "✅ Highest education level detected: {}",
                level.resume_label()
            ));
            findings.push(format!("   Degree keywords found: {}", keywords.join(", ")));
            details.degree_keywords = keywords.iter().map(|k| k.to_string()).collect();
            score += 40.0;
        }
        None => {
            findings.push("⚠️ No degree keywords detected".to_string());
            recommendations.push(
                "Include your degree type (e.g., 'Bachelor of Science', 'MBA').".to_string(),
            );
        }
    }

    let certifications = scan(CERTIFICATIONS, &text_lower);
    if certifications.is_empty() {
        findings.push("ℹ️ No specific certifications detected".to_string());
        recommendations.push(
            "Add relevant certifications (e.g., PMP, AWS Certified, CPA) if you have them."
                .to_string(),
        );
        // certifications are optional for most roles
        score += 10.0;
    } else {
        findings.push(format!(
            "✅ {} certification(s) detected: {}",
            certifications.len(),
            certifications.iter().take(8).copied().collect::<Vec<_>>().join(", ")
        ));
        details.certifications = certifications.iter().map(|c| c.to_string()).collect();
        score += 35.0;
    }

    if contains_any(INSTITUTION_KEYWORDS, &text_lower) {
        findings.push("✅ Educational institution name found".to_string());
        score += 15.0;
    } else {
        findings.push("⚠️ No educational institution name detected".to_string());
        recommendations.push("Include the name of your university or college.".to_string());
    }

    if let Some(gpa) = GPA_RE.captures(&text_lower).and_then(|c| c.get(1)) {
        findings.push(format!("ℹ️ GPA mentioned: {}", gpa.as_str()));
        details.gpa = Some(gpa.as_str().to_string());
        score += 10.0;
    }

    SectionResult {
        name: "Education & Certifications".to_string(),
        score: finalize_score(score),
        icon: "🎓".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Education(details),
    }
}
