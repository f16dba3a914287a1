// Document structure signals plus the content-type and complexity labels.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::ScoredSentence;

// Anchored at the start of the whole document, not per line.
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z\s]+:").unwrap());
static BULLET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\-\*•]").unwrap());
static NUMBERED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub has_headers: bool,
    pub has_bullet_points: bool,
    pub has_numbered_lists: bool,
    pub paragraph_count: usize,
    pub avg_paragraph_length: f64,
}

impl DocumentStructure {
    pub fn analyze(text: &str, paragraphs: &[&str]) -> Self {
        let total_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
        let avg_paragraph_length = if paragraphs.is_empty() {
            0.0
        } else {
            total_chars as f64 / paragraphs.len() as f64
        };

        Self {
            has_headers: HEADER_PATTERN.is_match(text),
            has_bullet_points: BULLET_PATTERN.is_match(text),
            has_numbered_lists: NUMBERED_PATTERN.is_match(text),
            paragraph_count: paragraphs.len(),
            avg_paragraph_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Mathematical/Scientific")]
    MathematicalScientific,
    Historical,
    #[serde(rename = "Academic/Research")]
    AcademicResearch,
    #[serde(rename = "Procedural/Process")]
    ProceduralProcess,
    #[serde(rename = "General Academic")]
    GeneralAcademic,
}

impl ContentType {
    /// First rule that matches wins; match counts are irrelevant.
    pub fn classify(sentences: &[ScoredSentence]) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if has_any(&["equation", "formula", "calculate"]) {
            Self::MathematicalScientific
        } else if has_any(&["history", "century", "historical"]) {
            Self::Historical
        } else if has_any(&["theory", "hypothesis", "research"]) {
            Self::AcademicResearch
        } else if has_any(&["process", "step", "procedure"]) {
            Self::ProceduralProcess
        } else {
            Self::GeneralAcademic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MathematicalScientific => "Mathematical/Scientific",
            Self::Historical => "Historical",
            Self::AcademicResearch => "Academic/Research",
            Self::ProceduralProcess => "Procedural/Process",
            Self::GeneralAcademic => "General Academic",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Advanced,
    Intermediate,
    #[serde(rename = "Beginner-Friendly")]
    BeginnerFriendly,
}

impl Complexity {
    pub fn classify(keywords: &[String], technical_term_count: usize) -> Self {
        // No keywords means no average; both thresholds fail.
        let avg_len = if keywords.is_empty() {
            0.0
        } else {
            let total: usize = keywords.iter().map(|k| k.chars().count()).sum();
            total as f64 / keywords.len() as f64
        };

        if avg_len > 8.0 && technical_term_count > 5 {
            Self::Advanced
        } else if avg_len > 6.0 && technical_term_count > 3 {
            Self::Intermediate
        } else {
            Self::BeginnerFriendly
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::BeginnerFriendly => "Beginner-Friendly",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
