// Sentence / paragraph splitting and the small string helpers shared by the extractors.
use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Fragments at or below this many characters (after trimming) are not sentences.
const MIN_SENTENCE_CHARS: usize = 10;

const WORDS_PER_MINUTE: usize = 200;

/// A sentence fragment in document order. `raw` is the untrimmed fragment; the
/// scorer's length and marker tests run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub raw: &'a str,
    pub position: usize,
}

impl<'a> Sentence<'a> {
    pub fn text(&self) -> &'a str {
        self.raw.trim()
    }
}

pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(position, raw)| Sentence { raw, position })
        .collect()
}

pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes at 200 words per minute, rounded up.
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Insertion-ordered dedup on exact string equality.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
