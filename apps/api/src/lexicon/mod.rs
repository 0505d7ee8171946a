//! Lexical resource store: immutable dictionaries and the containment
//! scans both engines run against them.
//!
//! Membership is always substring containment of a stored phrase within
//! lower-cased text. Identical text yields identical hits.

pub mod dictionaries;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dictionary entries contained in `lower_text`, in dictionary order.
pub fn scan(dictionary: &'static [&'static str], lower_text: &str) -> Vec<&'static str> {
    dictionary
        .iter()
        .copied()
        .filter(|phrase| lower_text.contains(phrase))
        .collect()
}

/// Distinct dictionary entries contained in `lower_text`, sorted alphabetically.
pub fn scan_set(dictionary: &'static [&'static str], lower_text: &str) -> BTreeSet<&'static str> {
    dictionary
        .iter()
        .copied()
        .filter(|phrase| lower_text.contains(phrase))
        .collect()
}

pub fn contains_any(dictionary: &[&str], lower_text: &str) -> bool {
    dictionary.iter().any(|phrase| lower_text.contains(phrase))
}

/// Highest ordinal among all degree keywords present, or 0.
pub fn max_degree(map: &[(&str, u8)], lower_text: &str) -> u8 {
    map.iter()
        .filter(|(keyword, _)| lower_text.contains(keyword))
        .map(|(_, level)| *level)
        .max()
        .unwrap_or(0)
}

/// Evaluates degree keywords from the highest ordinal down and returns the
/// level of the first keyword found.
pub fn highest_degree_first(map: &[(&str, u8)], lower_text: &str) -> Option<u8> {
    let mut ranked: Vec<&(&str, u8)> = map.iter().collect();
    // stable: keywords of equal level keep their dictionary order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .find(|(keyword, _)| lower_text.contains(keyword))
        .map(|(_, level)| *level)
}

/// Credential level, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Diploma = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Doctorate = 5,
}

impl DegreeLevel {
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Diploma),
            2 => Some(Self::Associate),
            3 => Some(Self::Bachelor),
            4 => Some(Self::Master),
            5 => Some(Self::Doctorate),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Label used in resume education findings.
    pub fn resume_label(self) -> &'static str {
        match self {
            Self::Diploma => "Diploma/Certificate",
            Self::Associate => "Associate",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
        }
    }

    /// Label used in job-match pros and cons.
    pub fn match_label(self) -> &'static str {
        match self {
            Self::Diploma => "Diploma",
            Self::Associate => "Associate",
            Self::Bachelor => "Bachelor's",
            Self::Master => "Master's",
            Self::Doctorate => "Doctorate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dictionaries::{CV_DEGREE_LEVELS, DEGREE_LEVELS, HARD_SKILLS, JOB_DEGREE_LEVELS};
    use super::*;

    #[test]
    fn test_scan_is_substring_containment() {
        let hits = scan(HARD_SKILLS, "built reactive dashboards");
        assert!(hits.contains(&"react"), "react should match inside reactive");
    }

    #[test]
    fn test_scan_set_is_sorted_and_distinct() {
        let hits = scan_set(&["zeta", "alpha", "alpha"], "alpha and zeta");
        let ordered: Vec<_> = hits.into_iter().collect();
        assert_eq!(ordered, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_max_degree_picks_highest_level() {
        assert_eq!(max_degree(CV_DEGREE_LEVELS, "diploma, then a phd"), 5);
        assert_eq!(max_degree(CV_DEGREE_LEVELS, "no credentials listed"), 0);
    }

    #[test]
    fn test_highest_degree_first_prefers_higher_level() {
        let text = "bachelor's required, master's preferred";
        assert_eq!(highest_degree_first(JOB_DEGREE_LEVELS, text), Some(4));
        assert_eq!(highest_degree_first(JOB_DEGREE_LEVELS, "no degree needed"), None);
    }

    #[test]
    fn test_resume_degree_map_matches_short_abbreviations() {
        // "ms" is part of the resume map, so plain words can register a level
        assert_eq!(max_degree(DEGREE_LEVELS, "agile teams"), 4);
        assert_eq!(max_degree(JOB_DEGREE_LEVELS, "agile teams"), 0);
    }

    #[test]
    fn test_degree_level_round_trip_ordinal() {
        for ordinal in 1..=5 {
            let level = DegreeLevel::from_ordinal(ordinal).unwrap();
            assert_eq!(level.ordinal(), ordinal);
        }
        assert!(DegreeLevel::from_ordinal(0).is_none());
        assert!(DegreeLevel::Master < DegreeLevel::Doctorate);
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(DegreeLevel::Diploma.resume_label(), "Diploma/Certificate");
        assert_eq!(DegreeLevel::Master.match_label(), "Master's");
    }
}
