//! Semantic / contextual analysis: action verbs, results with context,
//! first-person voice, buzzwords, and bullet structure.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};
use crate::lexicon::dictionaries::{ACTION_VERBS, BUZZWORDS};
use crate::lexicon::{scan, scan_set};

/// Matched against lower-cased text.
static RESULT_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(
            r"(?:increased|decreased|reduced|improved|grew|boosted|cut|saved|generated|delivered|achieved)\s+.*?\d+",
        )
        .unwrap(),
        Regex::new(r"\d+%\s+(?:increase|decrease|improvement|growth|reduction)").unwrap(),
        Regex::new(r"\$[\d,.]+\s*(?:million|billion|k|m|b|revenue|savings|budget)").unwrap(),
        Regex::new(r"\d+\s*(?:clients|customers|users|projects|products|teams)").unwrap(),
    ]
});

/// Case-sensitive: only "I", "me", "my", "myself" as written.
static PRONOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:I|me|my|myself)\b").unwrap());

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[•\-\*▪▸►]\s").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticDetails {
    pub action_verbs: Vec<String>,
    pub contextual_achievements: Vec<String>,
    pub pronoun_count: usize,
    pub buzzwords: Vec<String>,
    pub bullet_lines: usize,
}

pub fn analyze(text: &str) -> SectionResult {
    let text_lower = text.to_lowercase();
    let mut score = 0.0;
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();
    let mut details = SemanticDetails::default();

    let verbs = scan_set(ACTION_VERBS, &text_lower);
    match verbs.len() {
        n if n >= 8 => {
            findings.push(format!("✅ Strong use of action verbs ({n} found)"));
            score += 30.0;
        }
        n if n >= 4 => {
            findings.push(format!("✅ Good use of action verbs ({n} found)"));
            score += 20.0;
        }
        0 => {
            findings.push("❌ No strong action verbs found".to_string());
            recommendations.push(
                "Start bullet points with powerful action verbs: 'Developed', 'Managed', 'Increased', etc."
                    .to_string(),
            );
        }
        n => {
            findings.push(format!("⚠️ Limited action verb usage ({n} found)"));
            recommendations.push(
                "Use more action verbs like 'achieved', 'implemented', 'led', 'optimized'."
                    .to_string(),
            );
            score += 10.0;
        }
    }
    details.action_verbs = verbs.iter().map(|v| v.to_string()).collect();

    let results: Vec<&str> = RESULT_RES
        .iter()
        .flat_map(|re| re.find_iter(&text_lower).map(|m| m.as_str()))
        .collect();
    if results.is_empty() {
        findings.push("⚠️ No contextual achievements with metrics detected".to_string());
        recommendations.push(
            "Provide context for your skills: 'Increased sales by 20%' instead of just listing 'Sales'."
                .to_string(),
        );
    } else {
        findings.push(format!(
            "✅ {} contextual achievement(s) with metrics found",
            results.len()
        ));
        details.contextual_achievements =
            results.iter().take(8).map(|r| r.to_string()).collect();
        score += 30.0;
    }

    let pronoun_count = PRONOUN_RE.find_iter(text).count();
    details.pronoun_count = pronoun_count;
    match pronoun_count {
        0 => {
            findings.push("✅ No first-person pronouns (good ATS practice)".to_string());
            score += 15.0;
        }
        1..=3 => {
            findings.push(format!("⚠️ {pronoun_count} first-person pronoun(s) found"));
            recommendations.push(
                "Minimize first-person pronouns (I, me, my). ATS resumes should use implied subject."
                    .to_string(),
            );
            score += 8.0;
        }
        _ => {
            findings.push(format!(
                "❌ {pronoun_count} first-person pronouns found — too many"
            ));
            recommendations.push(
                "Remove first-person pronouns. Instead of 'I managed a team', write 'Managed a team of...'"
                    .to_string(),
            );
        }
    }

    let buzzwords = scan(BUZZWORDS, &text_lower);
    if buzzwords.is_empty() {
        findings.push("✅ No excessive corporate buzzwords".to_string());
        score += 15.0;
    } else {
        findings.push(format!(
            "⚠️ {} corporate buzzword(s) detected: {}",
            buzzwords.len(),
            buzzwords.join(", ")
        ));
        recommendations
            .push("Replace vague buzzwords with specific, measurable language.".to_string());
        score += 5.0;
    }
    details.buzzwords = buzzwords.iter().map(|b| b.to_string()).collect();

    let bullet_lines = BULLET_RE.find_iter(text).count();
    details.bullet_lines = bullet_lines;
    if bullet_lines >= 5 {
        findings.push(format!("✅ Good use of bullet points ({bullet_lines} found)"));
        score += 10.0;
    } else if bullet_lines > 0 {
        findings.push(format!("ℹ️ Some bullet points found ({bullet_lines})"));
        score += 5.0;
    } else {
        findings.push("⚠️ No bullet points detected".to_string());
        recommendations.push(
            "Use bullet points (• or -) to organize your experience for better readability."
                .to_string(),
        );
    }

    SectionResult {
        name: "Semantic Analysis".to_string(),
        score: finalize_score(score),
        icon: "🧠".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Semantic(details),
    }
}
