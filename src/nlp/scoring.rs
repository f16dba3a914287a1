// Additive sentence-importance scoring.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text::Sentence;

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%|\d+\.\d+|\$\d+").unwrap());

const DEFINITION_MARKERS: [&str; 4] = [" is ", " are ", " means ", " refers to "];

const IMPORTANCE_MARKERS: [&str; 6] = ["important", "crucial", "essential", "key", "main", "primary"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: u32,
    pub position: usize,
}

/// Score one sentence. `total` is the number of sentences in the document.
pub fn score_sentence(
    sentence: &Sentence<'_>,
    keywords: &[String],
    topic_keywords: &[String],
    total: usize,
) -> u32 {
    let lower = sentence.raw.to_lowercase();
    let mut score = 0u32;

    for keyword in keywords {
        score += 3 * occurrences(&lower, &keyword.to_lowercase());
    }

    for keyword in topic_keywords {
        if lower.contains(&keyword.to_lowercase()) {
            score += 2;
        }
    }

    if sentence.position == 0 {
        score += 4;
    }
    if sentence.position + 1 == total {
        score += 2;
    }
    if sentence.position < 3 {
        score += 2;
    }

    let len = sentence.raw.chars().count();
    if len > 50 && len < 200 {
        score += 2;
    }

    if DEFINITION_MARKERS.iter().any(|m| lower.contains(m)) {
        score += 3;
    }

    if IMPORTANCE_MARKERS.iter().any(|m| lower.contains(m)) {
        score += 2;
    }

    if NUMERIC_PATTERN.is_match(sentence.raw) {
        score += 1;
    }

    score
}

/// Score every sentence and order by descending score. Ties keep document order.
pub fn rank_sentences(
    sentences: &[Sentence<'_>],
    keywords: &[String],
    topic_keywords: &[String],
) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|s| ScoredSentence {
            text: s.text().to_string(),
            score: score_sentence(s, keywords, topic_keywords, sentences.len()),
            position: s.position,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Simpler ranking used by the fallback summary. Only keyword hits, first/last
/// position, length and loose definition markers count. Returns up to `count`
/// trimmed sentences.
pub fn rank_sentences_basic(sentences: &[&str], keywords: &[String], count: usize) -> Vec<String> {
    let last = sentences.len().saturating_sub(1);
    let mut scored: Vec<(&str, u32)> = sentences
        .iter()
        .enumerate()
        .map(|(idx, sentence)| {
            let lower = sentence.to_lowercase();
            let mut score = 0u32;

            for keyword in keywords {
                score += 2 * occurrences(&lower, &keyword.to_lowercase());
            }
            if idx == 0 || idx == last {
                score += 1;
            }
            if sentence.chars().count() > 50 {
                score += 1;
            }
            if ["is ", "are ", "means", "refers to"].iter().any(|m| lower.contains(m)) {
                score += 2;
            }
            (*sentence, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(count)
        .map(|(s, _)| s.trim().to_string())
        .collect()
}

fn occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::keywords::{extract_keywords, extract_topic_keywords};
    use crate::nlp::text::split_sentences;

    fn sentence(raw: &str, position: usize) -> Sentence<'_> {
        Sentence { raw, position }
    }

    #[test]
    fn test_keyword_occurrences_are_multiplied() {
        let s = sentence("cell cell cell", 5);
        let score = score_sentence(&s, &["Cell".to_string()], &[], 10);
        assert_eq!(score, 9);
    }

    #[test]
    fn test_topic_keyword_counts_once_per_keyword() {
        let s = sentence("gravity gravity gravity", 5);
        let score = score_sentence(&s, &[], &["Gravity".to_string()], 10);
        assert_eq!(score, 2);
    }

    #[test]
    fn test_position_bonuses_stack() {
        // first: +4 and +2 for index < 3
        assert_eq!(score_sentence(&sentence("plain words here", 0), &[], &[], 10), 6);
        // second: +2
        assert_eq!(score_sentence(&sentence("plain words here", 1), &[], &[], 10), 2);
        // last and only: +4 +2 +2
        assert_eq!(score_sentence(&sentence("plain words here", 0), &[], &[], 1), 8);
        // last, far down
        assert_eq!(score_sentence(&sentence("plain words here", 9), &[], &[], 10), 2);
    }

    #[test]
    fn test_length_bonus_bounds() {
        let fifty = "x".repeat(50);
        let fifty_one = "x".repeat(51);
        let two_hundred = "x".repeat(200);
        assert_eq!(score_sentence(&sentence(&fifty, 5), &[], &[], 10), 0);
        assert_eq!(score_sentence(&sentence(&fifty_one, 5), &[], &[], 10), 2);
        assert_eq!(score_sentence(&sentence(&two_hundred, 5), &[], &[], 10), 0);
    }

    #[test]
    fn test_marker_bonuses() {
        // definition (+3) and importance (+2)
        let s = sentence(" this is the main idea", 5);
        assert_eq!(score_sentence(&s, &[], &[], 10), 5);
        // definition marker needs surrounding spaces
        let s = sentence("isotopes vary", 5);
        assert_eq!(score_sentence(&s, &[], &[], 10), 0);
    }

    #[test]
    fn test_numeric_bonus() {
        assert_eq!(score_sentence(&sentence("grew by 45% overall", 5), &[], &[], 10), 1);
        assert_eq!(score_sentence(&sentence("costs $300 total", 5), &[], &[], 10), 1);
        assert_eq!(score_sentence(&sentence("about 3 things", 5), &[], &[], 10), 0);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let text = "Alpha words go here today. Bravo words go here today. \
                    Charlie words go here today. Delta words go here today. \
                    Echo words go here today. Foxtrot words go here today";
        let sentences = split_sentences(text);
        let ranked = rank_sentences(&sentences, &[], &[]);
        // positions 3 and 4 score zero; the last sentence gets +2
        let tail: Vec<usize> = ranked.iter().skip(3).map(|s| s.position).collect();
        assert_eq!(tail, vec![5, 3, 4]);
        let head: Vec<usize> = ranked.iter().take(3).map(|s| s.position).collect();
        assert_eq!(head, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_mitochondria_example() {
        let text = "The mitochondria is the powerhouse of the cell. \
                    ATP production occurs here. This is important for cellular respiration.";
        let sentences = split_sentences(text);
        let keywords = extract_keywords(text);
        let topics = extract_topic_keywords(text);
        let ranked = rank_sentences(&sentences, &keywords, &topics);
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].position == 0 || ranked[0].position == 2);
        assert_eq!(ranked[0].text, "This is important for cellular respiration");
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_sentences_basic() {
        let sentences = vec![
            "Nothing to see",
            " Enzymes are proteins that speed up reactions in enzymes",
            " Filler text",
        ];
        let keywords = vec!["Enzymes".to_string()];
        let top = rank_sentences_basic(&sentences, &keywords, 2);
        assert_eq!(top[0], "Enzymes are proteins that speed up reactions in enzymes");
        assert_eq!(top.len(), 2);
    }
}
