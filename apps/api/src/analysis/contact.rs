//! Contact information: email, phone, LinkedIn, name, location. Additive,
//! capped at 100.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{finalize_score, SectionDetails, SectionResult};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap());

/// Optional country code, then 2–4 digit area group and two 3–4 digit groups.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s\-.]?)?\(?\d{2,4}\)?[\s\-.]?\d{3,4}[\s\-.]?\d{3,4}").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").unwrap());

/// Tried in order: ZIP code, "City, ST", "City, Country".
static LOCATION_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap(),
        Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b").unwrap(),
        Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z][a-z]+\b").unwrap(),
    ]
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub fn analyze(text: &str) -> SectionResult {
    let mut score = 0.0;
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();
    let mut details = ContactDetails::default();

    if let Some(email) = EMAIL_RE.find(text) {
        findings.push(format!("✅ Email found: {}", email.as_str()));
        details.email = Some(email.as_str().to_string());
        score += 25.0;
    } else {
        findings.push("❌ No email address found".to_string());
        recommendations.push("Add your professional email address.".to_string());
    }

    if let Some(phone) = PHONE_RE.find(text) {
        let phone = phone.as_str().trim();
        findings.push(format!("✅ Phone number found: {phone}"));
        details.phone = Some(phone.to_string());
        score += 25.0;
    } else {
        findings.push("❌ No phone number found".to_string());
        recommendations.push("Add your phone number with country code.".to_string());
    }

    if let Some(linkedin) = LINKEDIN_RE.find(text) {
        findings.push("✅ LinkedIn profile found".to_string());
        details.linkedin = Some(linkedin.as_str().to_string());
        score += 25.0;
    } else {
        findings.push("⚠️ No LinkedIn URL found".to_string());
        recommendations
            .push("Add your LinkedIn profile URL (linkedin.com/in/yourname).".to_string());
        score += 5.0;
    }

    if let Some(first_line) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
        if looks_like_name(first_line) {
            findings.push(format!("✅ Name detected: {first_line}"));
            details.name = Some(first_line.to_string());
            score += 15.0;
        } else {
            findings
                .push("⚠️ Could not confidently detect name at the top of resume".to_string());
            recommendations.push(
                "Place your full name prominently at the top of your resume.".to_string(),
            );
            score += 5.0;
        }
    }

    if let Some(location) = LOCATION_RES.iter().find_map(|re| re.find(text)) {
        findings.push("✅ Location/address info found".to_string());
        details.location = Some(location.as_str().to_string());
        score += 10.0;
    } else {
        findings.push("⚠️ No location information detected".to_string());
        recommendations
            .push("Add your city and state/country for location-based filtering.".to_string());
    }

    SectionResult {
        name: "Contact Information".to_string(),
        score: finalize_score(score),
        icon: "📇".to_string(),
        findings,
        recommendations,
        details: SectionDetails::Contact(details),
    }
}

/// 1–5 words, and every purely alphabetic word starts with an uppercase letter.
fn looks_like_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    (1..=5).contains(&words.len())
        && words
            .iter()
            .filter(|w| w.chars().all(char::is_alphabetic))
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}
