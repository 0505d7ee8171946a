//! Work experience & longevity: date ranges, career span, role progression,
//! job titles, and quantified achievements.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};
use crate::lexicon::dictionaries::JOB_TITLE_KEYWORDS;
use crate::lexicon::scan;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Month-name, numeric month/year, and bare-year ranges. All hits of all
/// three are kept, in this order.
static DATE_RANGE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(&format!(
            r"(?i){MONTH}\s*\.?\s*\d{{4}}\s*[-–—to]+\s*(?:{MONTH}\s*\.?\s*\d{{4}}|present|current)"
        ))
        .unwrap(),
        Regex::new(r"(?i)\d{1,2}/\d{4}\s*[-–—to]+\s*(?:\d{1,2}/\d{4}|present|current)").unwrap(),
        Regex::new(r"(?i)\d{4}\s*[-–—to]+\s*(?:\d{4}|present|current)").unwrap(),
    ]
});

pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());

static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+%|\$[\d,]+|\d+\+?\s*(?:year|month|client|customer|user|project|team|member|employee)",
    )
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetails {
    pub date_ranges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_years: Option<i32>,
    pub title_keywords: Vec<String>,
    pub quantified: Vec<String>,
}

/// Every "19xx"/"20xx" token in the text, in order of appearance.
pub(crate) fn four_digit_years(text: &str) -> Vec<i32> {
    YEAR_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

pub fn analyze(text: &str) -> SectionResult {
    let mut score = 0.0;
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();
    let mut details = ExperienceDetails::default();

    let date_ranges: Vec<&str> = DATE_RANGE_RES
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str()))
        .collect();

    if date_ranges.is_empty() {
        findings.push("❌ No date ranges found in work experience".to_string());
        recommendations.push(
            "Include clear start and end dates for each role (e.g., 'Jan 2020 - Present')."
                .to_string(),
        );
    } else {
        findings.push(format!(
            "✅ Found {} date range(s) in work history",
            date_ranges.len()
        ));
        details.date_ranges = date_ranges.iter().take(10).map(|s| s.to_string()).collect();
        score += 30.0;
    }

    let years = four_digit_years(text);
    if let (Some(&min_year), Some(&max_year)) = (years.iter().min(), years.iter().max()) {
        let span = max_year - min_year;
        details.estimated_years = Some(span);
        if span > 0 {
            findings.push(format!(
                "📊 Estimated ~{span} year(s) of experience span ({min_year}–{max_year})"
            ));
            score += 20.0;
        } else {
            findings.push("⚠️ Experience timeline appears very short".to_string());
            score += 5.0;
        }
    }

    match date_ranges.len() {
        0 => {}
        1 => {
            findings.push("⚠️ Only one role detected".to_string());
            recommendations.push(
                "If you have multiple roles, make sure each has clear date ranges.".to_string(),
            );
            score += 5.0;
        }
        _ => {
            findings.push("✅ Multiple roles detected — good for showing progression".to_string());
            score += 15.0;
        }
    }

    let text_lower = text.to_lowercase();
    let titles = scan(JOB_TITLE_KEYWORDS, &text_lower);
    if titles.is_empty() {
        findings.push("⚠️ No clear job title keywords detected".to_string());
        recommendations.push(
            "Use standard job titles (e.g., 'Software Engineer', 'Marketing Manager')."
                .to_string(),
        );
        score += 5.0;
    } else {
        findings.push(format!(
            "✅ Job title keywords detected: {}",
            titles.iter().take(8).copied().collect::<Vec<_>>().join(", ")
        ));
        details.title_keywords = titles.iter().map(|t| t.to_string()).collect();
        score += 15.0;
    }

    let quantified: Vec<&str> = QUANTIFIED_RE.find_iter(text).map(|m| m.as_str()).collect();
    if quantified.is_empty() {
        findings.push("⚠️ No quantified achievements found".to_string());
        recommendations.push(
            "Add measurable results (e.g., 'increased sales by 30%', 'managed team of 12')."
                .to_string(),
        );
    } else {
        findings.push(format!(
            "✅ {} quantified achievement(s) found",
            quantified.len()
        ));
        details.quantified = quantified.iter().take(8).map(|s| s.to_string()).collect();
        score += 20.0;
    }

    SectionResult {
        name: "Work Experience & Longevity".to_string(),
        score: finalize_score(score),
        icon: "💼".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Experience(details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(result: &SectionResult) -> &ExperienceDetails {
        match &result.details {
            SectionDetails::Experience(d) => d,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_full_history_scores_100() {
        let text = "Software Engineer\nJan 2019 - Present\n2015 - 2018\nIncreased revenue by 30%";
        let result = analyze(text);
        assert_eq!(result.score, 100.0);
        let d = details(&result);
        assert_eq!(d.estimated_years, Some(4));
        assert!(d.date_ranges.contains(&"Jan 2019 - Present".to_string()));
        assert!(d.date_ranges.contains(&"2015 - 2018".to_string()));
        assert_eq!(d.quantified, vec!["30%"]);
    }

    #[test]
    fn test_numeric_month_ranges() {
        let result = analyze("03/2019 – 06/2021");
        assert_eq!(details(&result).date_ranges[0], "03/2019 – 06/2021");
    }

    #[test]
    fn test_single_year_gives_short_timeline_points() {
        let result = analyze("Graduated 2020");
        let d = details(&result);
        assert_eq!(d.estimated_years, Some(0));
        assert!(d.date_ranges.is_empty());
        // short timeline 5 + no titles 5
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn test_nothing_found() {
        let result = analyze("hello world");
        assert_eq!(result.score, 5.0);
        assert_eq!(details(&result).estimated_years, None);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_quantified_patterns() {
        let result = analyze("Saved $12,000 for 40 clients over 3 years");
        let q = &details(&result).quantified;
        assert!(q.contains(&"$12,000".to_string()));
        assert!(q.contains(&"40 client".to_string()));
        assert!(q.contains(&"3 year".to_string()));
    }

    #[test]
    fn test_four_digit_years_ignores_other_numbers() {
        assert_eq!(four_digit_years("1999, 2024, 1850, 21000, 2101"), vec![1999, 2024]);
    }
}
