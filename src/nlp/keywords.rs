// Frequency-ranked keyword extraction.
// Two flavours: plain keywords (short stop list, tokens longer than 3 chars) and topic
// keywords (longer stop list, tokens longer than 4 chars, plus capitalized words taken
// straight from the raw text).
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::text::capitalize;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());

const MAX_KEYWORDS: usize = 15;
const MAX_TOPIC_KEYWORDS: usize = 12;
const TOPIC_FREQUENT: usize = 10;
const TOPIC_CAPITALIZED: usize = 5;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "a", "an", "is", "are", "was", "were", "be", "been", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might",
        "this", "that", "these", "those", "it", "they", "we", "you", "i", "me",
        "him", "her", "us", "them", "my", "your", "his", "our", "their",
    ]
    .iter()
    .copied()
    .collect()
});

static TOPIC_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    STOP_WORDS
        .iter()
        .copied()
        .chain([
            "can", "also", "use", "used", "using", "such", "most", "more", "than",
            "when", "where", "how", "what", "why", "which", "who", "some", "many",
        ])
        .collect()
});

/// Lowercase, blank out punctuation, and count the surviving tokens in first-seen order.
fn term_frequencies(text: &str, min_len: usize, stop_words: &HashSet<&str>) -> IndexMap<String, usize> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    let mut freq: IndexMap<String, usize> = IndexMap::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() > min_len && !stop_words.contains(word) {
            *freq.entry(word.to_string()).or_insert(0) += 1;
        }
    }
    freq
}

/// Highest count first; `sort_by` is stable so equal counts keep first-seen order.
fn ranked(freq: IndexMap<String, usize>, limit: usize) -> Vec<String> {
    let mut entries: Vec<(String, usize)> = freq.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(limit).map(|(word, _)| word).collect()
}

pub fn extract_keywords(text: &str) -> Vec<String> {
    ranked(term_frequencies(text, 3, &STOP_WORDS), MAX_KEYWORDS)
        .iter()
        .map(|w| capitalize(w))
        .collect()
}

pub fn extract_topic_keywords(text: &str) -> Vec<String> {
    let mut seen_capitalized = HashSet::new();
    let capitalized = CAPITALIZED_WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| seen_capitalized.insert(*w))
        .take(TOPIC_CAPITALIZED);

    let frequent = ranked(term_frequencies(text, 4, &TOPIC_STOP_WORDS), TOPIC_FREQUENT);

    let mut seen = HashSet::new();
    capitalized
        .map(str::to_lowercase)
        .chain(frequent)
        .filter(|w| seen.insert(w.clone()))
        .map(|w| capitalize(&w))
        .take(MAX_TOPIC_KEYWORDS)
        .collect()
}
