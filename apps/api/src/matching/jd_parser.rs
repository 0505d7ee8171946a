//! Signal extraction for job matching: skills, significant keywords,
//! experience years, and degree level, from either side of a comparison.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::experience::four_digit_years;
use crate::lexicon::dictionaries::{CV_DEGREE_LEVELS, JOB_DEGREE_LEVELS, JOB_SKILLS, STOP_WORDS};
use crate::lexicon::{highest_degree_first, max_degree, scan_set};

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").unwrap());

/// Tried in order; the first pattern that matches decides.
static YEARS_REQUIREMENT_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s+)?(?:experience|exp)").unwrap(),
        Regex::new(r"(?:minimum|at least|min)\s*(\d+)\s*years?").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s*(?:in|of|with)").unwrap(),
    ]
});

static REQUIREMENTS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:requirements?|qualifications?|must have|required|what you.?ll need)[ \t:]*\n((?:[^\n]+\n?)+)",
    )
    .unwrap()
});

/// Keywords occurring more often than this are treated as generic filler.
const MAX_KEYWORD_FREQUENCY: usize = 20;
const MIN_KEYWORD_LEN: usize = 4;

/// Signals pulled from a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJob {
    pub skills: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub years_required: Option<u32>,
    pub degree_required: Option<u8>,
    /// Bullet lines under a "Requirements"-style heading. Informational only.
    pub requirements: Vec<String>,
}

/// Signals pulled from a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCv {
    pub skills: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub years: Option<u32>,
    /// 0 when no degree keyword was found.
    pub degree: u8,
}

impl ParsedJob {
    pub fn parse(job_text: &str) -> Self {
        let lower = job_text.to_lowercase();
        Self {
            skills: extract_skills(&lower),
            keywords: extract_keywords(&lower),
            years_required: extract_years_requirement(&lower),
            degree_required: extract_degree_requirement(&lower),
            requirements: extract_requirements(&lower),
        }
    }
}

impl ParsedCv {
    pub fn parse(cv_text: &str) -> Self {
        let lower = cv_text.to_lowercase();
        Self {
            skills: extract_skills(&lower),
            keywords: extract_keywords(&lower),
            years: estimate_cv_years(&lower),
            degree: max_degree(CV_DEGREE_LEVELS, &lower),
        }
    }
}

pub fn extract_skills(lower_text: &str) -> BTreeSet<String> {
    scan_set(JOB_SKILLS, lower_text)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Alphabetic words longer than three letters, not stop words, appearing
/// between 1 and 20 times.
pub fn extract_keywords(lower_text: &str) -> BTreeSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in WORD_RE.find_iter(lower_text) {
        *counts.entry(word.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(word, count)| {
            (1..=MAX_KEYWORD_FREQUENCY).contains(count)
                && word.len() >= MIN_KEYWORD_LEN
                && !STOP_WORDS.contains(word)
        })
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Required years of experience stated in a posting. A stated requirement
/// of zero years is treated as no requirement; absurdly large values
/// saturate at `u32::MAX`.
pub fn extract_years_requirement(lower_text: &str) -> Option<u32> {
    YEARS_REQUIREMENT_RES
        .iter()
        .find_map(|re| re.captures(lower_text))
        .and_then(|caps| caps.get(1))
        // the capture is all digits, so parsing only fails on overflow
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .filter(|years| *years > 0)
}

/// Span between the earliest and latest year mentioned. Unknown unless at
/// least two distinct years appear.
pub fn estimate_cv_years(lower_text: &str) -> Option<u32> {
    let years: BTreeSet<i32> = four_digit_years(lower_text).into_iter().collect();
    if years.len() < 2 {
        return None;
    }
    let (first, last) = (years.first()?, years.last()?);
    u32::try_from(last - first).ok()
}

pub fn extract_degree_requirement(lower_text: &str) -> Option<u8> {
    highest_degree_first(JOB_DEGREE_LEVELS, lower_text)
}

/// Lines following a "Requirements:"-style heading, up to the next blank line.
pub fn extract_requirements(text: &str) -> Vec<String> {
    REQUIREMENTS_BLOCK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|block| {
            block
                .as_str()
                .split('\n')
                .map(|line| {
                    line.trim()
                        .trim_start_matches(['•', '-', '*', '▪', ' '])
                        .to_string()
                })
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_requirement_patterns_in_order() {
        assert_eq!(extract_years_requirement("5+ years of experience"), Some(5));
        assert_eq!(extract_years_requirement("at least 3 years in fintech"), Some(3));
        assert_eq!(extract_years_requirement("minimum 7 years"), Some(7));
        assert_eq!(extract_years_requirement("2 years with kubernetes"), Some(2));
        assert_eq!(extract_years_requirement("no tenure requirement"), None);
    }

    #[test]
    fn test_first_pattern_wins_over_later_mentions() {
        let text = "at least 2 years in sales. 6 years experience in engineering";
        assert_eq!(extract_years_requirement(text), Some(6));
    }

    #[test]
    fn test_oversized_years_requirement_saturates() {
        assert_eq!(
            extract_years_requirement("99999999999 years of experience"),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_zero_years_is_unknown() {
        assert_eq!(extract_years_requirement("0 years experience needed"), None);
    }

    #[test]
    fn test_cv_years_needs_two_distinct_years() {
        assert_eq!(estimate_cv_years("acme 2015 to 2022"), Some(7));
        assert_eq!(estimate_cv_years("2020 and again 2020"), None);
        assert_eq!(estimate_cv_years("no dates"), None);
    }

    #[test]
    fn test_degree_requirement_highest_wins() {
        assert_eq!(
            extract_degree_requirement("bachelor's required, phd a plus"),
            Some(5)
        );
        assert_eq!(extract_degree_requirement("master's degree required"), Some(4));
        assert_eq!(extract_degree_requirement("self-taught welcome"), None);
    }

    #[test]
    fn test_keywords_filter_stop_words_short_words_and_frequency() {
        let frequent = "widget ".repeat(21);
        let text = format!("the api team ships reliable services {frequent}");
        let keywords = extract_keywords(&text);
        assert!(keywords.contains("ships"));
        assert!(keywords.contains("reliable"));
        assert!(keywords.contains("services"));
        assert!(keywords.contains("team"));
        assert!(!keywords.contains("api"), "three-letter words are dropped");
        assert!(!keywords.contains("the"));
        assert!(!keywords.contains("widget"), "21 occurrences is too generic");
    }

    #[test]
    fn test_keywords_exclude_listed_stop_words() {
        let keywords = extract_keywords("required experience and excellent knowledge");
        assert!(keywords.is_empty(), "{keywords:?}");
    }

    #[test]
    fn test_requirements_block_extraction() {
        let text = "about us\nwe build things.\n\nrequirements:\n• 5+ years rust\n- distributed systems\n\nbenefits\n";
        assert_eq!(
            extract_requirements(text),
            vec!["5+ years rust", "distributed systems"]
        );
    }

    #[test]
    fn test_parsed_cv_degree_ignores_short_abbreviations() {
        let cv = ParsedCv::parse("Worked across many teams in Miami");
        assert_eq!(cv.degree, 0);
    }
}
