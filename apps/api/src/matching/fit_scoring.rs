//! Fit scoring: compares a CV to a job posting and explains the result.
//!
//! Default backend: `KeywordFitScorer`, set algebra over curated
//! dictionaries. Deterministic and explainable; paraphrased skills are
//! not recognised.
//!
//! `AppState` holds an `Arc<dyn FitScorer>` so the backend can be swapped
//! without touching handlers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::round1;
use crate::lexicon::DegreeLevel;
use crate::matching::jd_parser::{ParsedCv, ParsedJob};

/// Score used for a side of the comparison with nothing to compare.
const NEUTRAL_PCT: f64 = 50.0;
const SKILL_WEIGHT: f64 = 0.6;
const KEYWORD_WEIGHT: f64 = 0.4;
/// More unrelated skills than this suggests the CV is unfocused.
const MAX_EXTRA_SKILLS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationAction {
    Add,
    Remove,
    Enhance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub priority: Priority,
    pub text: String,
}

impl Recommendation {
    fn new(action: RecommendationAction, priority: Priority, text: impl Into<String>) -> Self {
        Self {
            action,
            priority,
            text: text.into(),
        }
    }
}

/// Sorted skill sets and keyword counts behind a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub job_skills: Vec<String>,
    pub cv_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub job_keywords_count: usize,
    pub matched_keywords_count: usize,
}

/// Full fit report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: f64, // 0.0 – 100.0, one decimal
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub keyword_analysis: KeywordAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the endpoint.
pub trait FitScorer: Send + Sync {
    fn score(&self, cv_text: &str, job_text: &str) -> MatchReport;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

pub struct KeywordFitScorer;

impl FitScorer for KeywordFitScorer {
    fn score(&self, cv_text: &str, job_text: &str) -> MatchReport {
        compare_cv_to_job(cv_text, job_text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core comparison
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate set algebra between the two documents.
struct Comparison<'a> {
    job: &'a ParsedJob,
    cv: &'a ParsedCv,
    matched_skills: BTreeSet<&'a str>,
    missing_skills: BTreeSet<&'a str>,
    extra_skills: BTreeSet<&'a str>,
    matched_keywords: BTreeSet<&'a str>,
    missing_keywords: BTreeSet<&'a str>,
}

impl<'a> Comparison<'a> {
    fn new(job: &'a ParsedJob, cv: &'a ParsedCv) -> Self {
        let as_strs = |set: &'a BTreeSet<String>| -> BTreeSet<&'a str> {
            set.iter().map(String::as_str).collect()
        };
        let (job_skills, cv_skills) = (as_strs(&job.skills), as_strs(&cv.skills));
        let (job_keywords, cv_keywords) = (as_strs(&job.keywords), as_strs(&cv.keywords));

        Self {
            job,
            cv,
            matched_skills: job_skills.intersection(&cv_skills).copied().collect(),
            missing_skills: job_skills.difference(&cv_skills).copied().collect(),
            extra_skills: cv_skills.difference(&job_skills).copied().collect(),
            matched_keywords: job_keywords.intersection(&cv_keywords).copied().collect(),
            missing_keywords: job_keywords.difference(&cv_keywords).copied().collect(),
        }
    }

    fn match_score(&self) -> f64 {
        let skill_pct = coverage_pct(self.matched_skills.len(), self.job.skills.len());
        let keyword_pct = coverage_pct(self.matched_keywords.len(), self.job.keywords.len());
        round1(skill_pct * SKILL_WEIGHT + keyword_pct * KEYWORD_WEIGHT).clamp(0.0, 100.0)
    }

    /// Both sides known and the CV meets the requirement.
    fn years_met(&self) -> Option<bool> {
        match (self.job.years_required, self.cv.years) {
            (Some(required), Some(cv_years)) => Some(cv_years >= required),
            _ => None,
        }
    }

    fn degree_met(&self) -> Option<bool> {
        self.job
            .degree_required
            .map(|required| self.cv.degree >= required)
    }
}

/// Compares a CV against a job posting. Total over any input text.
pub fn compare_cv_to_job(cv_text: &str, job_text: &str) -> MatchReport {
    let job = ParsedJob::parse(job_text);
    let cv = ParsedCv::parse(cv_text);

    debug!(
        "Job signals: {} skills, {} keywords, {} requirement lines, years={:?}, degree={:?}",
        job.skills.len(),
        job.keywords.len(),
        job.requirements.len(),
        job.years_required,
        job.degree_required
    );

    let comparison = Comparison::new(&job, &cv);
    let match_score = comparison.match_score();
    let pros = build_pros(&comparison);
    let cons = build_cons(&comparison);
    let recommendations = build_recommendations(&comparison, pros.is_empty(), job_text);

    let to_vec = |set: &BTreeSet<&str>| set.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    MatchReport {
        match_score,
        pros,
        cons,
        recommendations,
        keyword_analysis: KeywordAnalysis {
            job_skills: job.skills.iter().cloned().collect(),
            cv_skills: cv.skills.iter().cloned().collect(),
            matched_skills: to_vec(&comparison.matched_skills),
            missing_skills: to_vec(&comparison.missing_skills),
            extra_skills: to_vec(&comparison.extra_skills),
            job_keywords_count: job.keywords.len(),
            matched_keywords_count: comparison.matched_keywords.len(),
        },
    }
}

fn coverage_pct(matched: usize, total: usize) -> f64 {
    if total == 0 {
        NEUTRAL_PCT
    } else {
        matched as f64 / total as f64 * 100.0
    }
}

fn join_first(set: &BTreeSet<&str>, limit: usize) -> String {
    set.iter().take(limit).copied().collect::<Vec<_>>().join(", ")
}

fn degree_label(ordinal: u8, fallback: &'static str) -> &'static str {
    DegreeLevel::from_ordinal(ordinal).map_or(fallback, DegreeLevel::match_label)
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative assembly
// ────────────────────────────────────────────────────────────────────────────

fn build_pros(c: &Comparison) -> Vec<String> {
    let mut pros = Vec::new();

    if !c.matched_skills.is_empty() {
        pros.push(format!(
            "Your CV matches {} required skill(s): {}",
            c.matched_skills.len(),
            join_first(&c.matched_skills, 12)
        ));
    }
    if !c.matched_keywords.is_empty() {
        pros.push(format!(
            "{} job keyword(s) found in your CV",
            c.matched_keywords.len()
        ));
    }
    if let (Some(true), Some(required), Some(cv_years)) =
        (c.years_met(), c.job.years_required, c.cv.years)
    {
        pros.push(format!(
            "Your experience (~{cv_years} years) meets the {required}+ year requirement"
        ));
    }
    if c.degree_met() == Some(true) {
        pros.push(format!(
            "Your education level ({}) meets the requirement",
            degree_label(c.cv.degree, "Unknown")
        ));
    }
    if !c.extra_skills.is_empty() {
        pros.push(format!(
            "Additional skills you bring: {}",
            join_first(&c.extra_skills, 8)
        ));
    }

    pros
}

fn build_cons(c: &Comparison) -> Vec<String> {
    let mut cons = Vec::new();

    if !c.missing_skills.is_empty() {
        cons.push(format!(
            "Missing {} required skill(s): {}",
            c.missing_skills.len(),
            join_first(&c.missing_skills, 12)
        ));
    }
    if !c.missing_keywords.is_empty() {
        cons.push(format!(
            "Missing key terms from job description: {}",
            join_first(&c.missing_keywords, 8)
        ));
    }
    if let (Some(false), Some(required), Some(cv_years)) =
        (c.years_met(), c.job.years_required, c.cv.years)
    {
        cons.push(format!(
            "Experience gap: job requires {required}+ years, your CV shows ~{cv_years} years"
        ));
    }
    if let (Some(false), Some(required)) = (c.degree_met(), c.job.degree_required) {
        cons.push(format!(
            "Education gap: job requires {}, your CV shows {}",
            degree_label(required, "higher degree"),
            degree_label(c.cv.degree, "lower level")
        ));
    }

    cons
}

fn build_recommendations(c: &Comparison, no_pros: bool, job_text: &str) -> Vec<Recommendation> {
    use Priority::{High, Low, Medium};
    use RecommendationAction::{Add, Enhance, Remove};

    let mut recommendations = Vec::new();

    if !c.missing_skills.is_empty() {
        recommendations.push(Recommendation::new(
            Add,
            High,
            format!(
                "Add these skills to your CV if you have them: {}",
                join_first(&c.missing_skills, 10)
            ),
        ));
    }
    if !c.missing_keywords.is_empty() {
        recommendations.push(Recommendation::new(
            Add,
            Medium,
            format!(
                "Incorporate these keywords naturally into your CV: {}",
                join_first(&c.missing_keywords, 8)
            ),
        ));
    }
    if c.extra_skills.len() > MAX_EXTRA_SKILLS {
        recommendations.push(Recommendation::new(
            Remove,
            Low,
            "Consider removing irrelevant skills to keep your CV focused on this role.",
        ));
    }
    if no_pros {
        recommendations.push(Recommendation::new(
            Enhance,
            High,
            "Your CV has very low overlap with this job description. Consider tailoring it specifically for this role.",
        ));
    }

    let job_lower = job_text.to_lowercase();
    if job_lower.contains("cover letter") || job_lower.contains("letter of interest") {
        recommendations.push(Recommendation::new(
            Enhance,
            Medium,
            "The job listing mentions a cover letter — make sure to prepare one.",
        ));
    }

    recommendations.push(Recommendation::new(
        Enhance,
        Medium,
        "Mirror the job description's language. Use their exact terms where possible.",
    ));

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
