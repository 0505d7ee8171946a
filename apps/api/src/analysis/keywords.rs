//! Keyword matching: how many recognisable hard and soft skills appear.
//!
//! 8+ distinct hard skills and 4+ distinct soft skills saturate the score.
//! Hard skills carry 70% of the weight.

use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};
use crate::lexicon::dictionaries::{HARD_SKILLS, SOFT_SKILLS};
use crate::lexicon::scan_set;

const HARD_SATURATION: f64 = 8.0;
const SOFT_SATURATION: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDetails {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub hard_count: usize,
    pub soft_count: usize,
}

pub fn analyze(text: &str) -> SectionResult {
    let text_lower = text.to_lowercase();

    let hard: Vec<String> = scan_set(HARD_SKILLS, &text_lower)
        .into_iter()
        .map(String::from)
        .collect();
    let soft: Vec<String> = scan_set(SOFT_SKILLS, &text_lower)
        .into_iter()
        .map(String::from)
        .collect();

    let hard_score = (hard.len() as f64 / HARD_SATURATION).min(1.0) * 100.0;
    let soft_score = (soft.len() as f64 / SOFT_SATURATION).min(1.0) * 100.0;
    let score = hard_score * 0.7 + soft_score * 0.3;

    let mut findings = Vec::new();
    if hard.is_empty() {
        findings.push(
            "No recognizable hard skills found. Add specific tools, technologies, and methodologies."
                .to_string(),
        );
    } else {
        findings.push(format!(
            "Found {} hard skill(s): {}",
            hard.len(),
            preview(&hard, 15)
        ));
    }
    if soft.is_empty() {
        findings.push(
            "No soft skills detected. Consider adding communication, leadership, or teamwork keywords."
                .to_string(),
        );
    } else {
        findings.push(format!(
            "Found {} soft skill(s): {}",
            soft.len(),
            preview(&soft, 10)
        ));
    }

    let mut recommendations = Vec::new();
    if hard.len() < 5 {
        recommendations.push(
            "Add more specific technical skills and tools relevant to your target role."
                .to_string(),
        );
    }
    if soft.len() < 3 {
        recommendations.push(
            "Include soft skills like 'collaboration', 'problem-solving', or 'leadership'."
                .to_string(),
        );
    }

    SectionResult {
        name: "Keyword Matching".to_string(),
        score: finalize_score(score),
        icon: "🔑".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Keywords(KeywordDetails {
            hard_count: hard.len(),
            soft_count: soft.len(),
            hard_skills: hard,
            soft_skills: soft,
        }),
    }
}

fn preview(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(result: &SectionResult) -> &KeywordDetails {
        match &result.details {
            SectionDetails::Keywords(d) => d,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_saturated_skills_score_100() {
        let text = "Python Docker Kubernetes Terraform PostgreSQL Linux Jenkins GraphQL. \
                    Communication, leadership, teamwork and mentoring.";
        let result = analyze(text);
        assert_eq!(result.score, 100.0);
        assert!(details(&result).hard_count >= 8);
        assert!(details(&result).soft_count >= 4);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_exactly_eight_hard_and_four_soft_saturate() {
        // seven tools plus the one-letter "r" hit from "docker"
        let text = "docker kubernetes terraform jenkins ansible linux bash\n\
                    leadership teamwork empathy coaching";
        let result = analyze(text);
        let d = details(&result);
        assert_eq!(d.hard_count, 8);
        assert_eq!(d.soft_count, 4);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_seven_hard_skills_fall_short_of_saturation() {
        let text = "docker kubernetes terraform jenkins ansible linux\n\
                    leadership teamwork empathy coaching";
        let result = analyze(text);
        let d = details(&result);
        assert_eq!(d.hard_count, 7);
        assert_eq!(d.soft_count, 4);
        // 7/8 of 70 plus the full 30
        assert_eq!(result.score, 91.3);
        assert!(result.score < 100.0);
    }

    #[test]
    fn test_no_skills_scores_zero_with_recommendations() {
        let result = analyze("Baking cakes daily");
        assert_eq!(result.score, 0.0);
        assert_eq!(details(&result).hard_count, 0);
        assert_eq!(result.recommendations.len(), 2);
        assert!(result.findings[0].starts_with("No recognizable hard skills"));
    }

    #[test]
    fn test_soft_only_weighted_30_percent() {
        // four soft skills, no hard skills; avoid letters that match one-char skills
        let text = "Communication, Leadership, Teamwork, Mentoring";
        let result = analyze(text);
        let d = details(&result);
        assert_eq!(d.soft_count, 4);
        let expected = (d.hard_count as f64 / 8.0).min(1.0) * 70.0 + 30.0;
        assert!((result.score - finalize_score(expected)).abs() < 1e-9);
    }

    #[test]
    fn test_skill_lists_are_alphabetical() {
        let result = analyze("terraform, docker, ansible");
        let hard = &details(&result).hard_skills;
        let mut sorted = hard.clone();
        sorted.sort();
        assert_eq!(hard, &sorted);
    }
}
