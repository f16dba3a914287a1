// Pattern-based extraction of named entities and technical terms.
// Entities are runs of capitalized words; technical terms are words with academic
// suffixes or simply long words. Both keep first-seen order, no frequency ranking.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::text::{dedup_preserving_order, title_case};

static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap()
});

static TECHNICAL_PATTERNS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        Regex::new(r"\b\w+tion\b").unwrap(),
        Regex::new(r"\b\w+ism\b").unwrap(),
        Regex::new(r"\b\w+ology\b").unwrap(),
        Regex::new(r"\b\w+graphy\b").unwrap(),
        Regex::new(r"\b\w{8,}\b").unwrap(),
    ]
});

// Capitalized function words that are never entities on their own
static COMMON_CAPITALIZED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "The", "This", "That", "These", "Those", "And", "But", "Or", "In", "On", "At",
        "To", "For", "Of", "With", "By",
    ]
    .iter()
    .copied()
    .collect()
});

// Long words too common to count as jargon
static COMMON_LONG: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "information", "important", "different", "understand", "including", "something",
        "everything", "anything",
    ]
    .iter()
    .copied()
    .collect()
});

const MAX_ENTITIES: usize = 8;
const MAX_TECHNICAL_TERMS: usize = 8;

pub fn extract_named_entities(text: &str) -> Vec<String> {
    let matches = ENTITY_PATTERN.find_iter(text).map(|m| m.as_str().to_string());

    dedup_preserving_order(matches)
        .into_iter()
        .filter(|e| !COMMON_CAPITALIZED.contains(e.as_str()) && e.chars().count() > 2)
        .take(MAX_ENTITIES)
        .collect()
}

/// Every pattern runs over the whole text; dedup happens on the concatenated
/// matches, before case normalization.
pub fn extract_technical_terms(text: &str) -> Vec<String> {
    let matches = TECHNICAL_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()));

    dedup_preserving_order(matches)
        .into_iter()
        .filter(|t| !COMMON_LONG.contains(t.to_lowercase().as_str()) && t.chars().count() > 5)
        .map(|t| title_case(&t))
        .take(MAX_TECHNICAL_TERMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities_multi_word() {
        let text = "Delegates of United Nations met in New York. Barack Obama spoke.";
        let entities = extract_named_entities(text);
        assert!(entities.contains(&"United Nations".to_string()));
        assert!(entities.contains(&"New York".to_string()));
        assert!(entities.contains(&"Barack Obama".to_string()));
    }

    #[test]
    fn test_named_entities_filters_stoplist_and_short() {
        let text = "The cat sat. This is fine. In time. Al went home. Paris is nice.";
        let entities = extract_named_entities(text);
        assert_eq!(entities, vec!["Paris"]);
    }

    #[test]
    fn test_named_entities_dedup_and_cap() {
        let text = "Alpha Alpha. Bravo. Charlie. Delta. Echo. Foxtrot. Golf. Hotel. India. Juliet.";
        let entities = extract_named_entities(text);
        // "Alpha Alpha" is one span
        assert_eq!(entities[0], "Alpha Alpha");
        assert_eq!(entities.len(), 8);
        assert!(!entities.contains(&"India".to_string()));
    }

    #[test]
    fn test_named_entities_empty() {
        assert!(extract_named_entities("").is_empty());
        assert!(extract_named_entities("all lowercase words only").is_empty());
    }

    #[test]
    fn test_technical_terms_patterns() {
        let text = "Photosynthesis drives respiration. Capitalism and biology shape geography.";
        let terms = extract_technical_terms(text);
        // -tion first, then -ism, -ology, -graphy, then long words
        assert_eq!(
            terms,
            vec!["Respiration", "Capitalism", "Biology", "Geography", "Photosynthesis"]
        );
    }

    #[test]
    fn test_technical_terms_dedup_across_patterns() {
        // "information" is excluded, "organization" matches both -tion and long-word passes
        let text = "The organization shares information about organization theory.";
        let terms = extract_technical_terms(text);
        assert_eq!(terms, vec!["Organization"]);
    }

    #[test]
    fn test_technical_terms_case_normalized() {
        let terms = extract_technical_terms("GLOBALISM matters");
        assert_eq!(terms, vec!["Globalism"]);
    }

    #[test]
    fn test_technical_terms_minimum_length() {
        // "nation" (6 chars) survives, "prism" (5 chars) does not
        let terms = extract_technical_terms("A nation; an ism; a prism.");
        assert_eq!(terms, vec!["Nation"]);
    }

    #[test]
    fn test_technical_terms_cap() {
        let text = (0..12)
            .map(|i| format!("longword{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_technical_terms(&text).len(), 8);
    }
}
