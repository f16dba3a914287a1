// Full document analysis and the two report renderers (full and degraded).
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::classify::{Complexity, ContentType, DocumentStructure};
use super::keywords::{extract_keywords, extract_topic_keywords};
use super::ner::{extract_named_entities, extract_technical_terms};
use super::relations::{extract_concepts, find_relationships};
use super::scoring::{rank_sentences, rank_sentences_basic, ScoredSentence};
use super::strategy::{study_strategies, takeaways};
use super::text::{dedup_preserving_order, reading_time, split_paragraphs, split_sentences, word_count};

static FRAGMENT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

pub const REPORT_BANNER: &str = "🧠 **Smart Local AI Summary by StudyGenie**";
pub const FALLBACK_BANNER: &str = "🔧 **ENHANCED FALLBACK MODE - Advanced Text Analysis**";

const SUMMARY_SENTENCES: usize = 6;
const MAX_KEY_TERMS: usize = 10;

/// Every intermediate value the full report is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub word_count: usize,
    pub reading_time: usize,
    pub sentences: Vec<ScoredSentence>,
    pub keywords: Vec<String>,
    pub topic_keywords: Vec<String>,
    pub named_entities: Vec<String>,
    pub technical_terms: Vec<String>,
    pub structure: DocumentStructure,
    pub concepts: Vec<String>,
    pub relationships: Vec<String>,
    pub content_type: ContentType,
    pub complexity: Complexity,
}

impl DocumentAnalysis {
    pub fn analyze(text: &str) -> Self {
        let sentences = split_sentences(text);
        let paragraphs = split_paragraphs(text);

        let keywords = extract_keywords(text);
        let topic_keywords = extract_topic_keywords(text);
        let named_entities = extract_named_entities(text);
        let technical_terms = extract_technical_terms(text);

        let ranked = rank_sentences(&sentences, &keywords, &topic_keywords);
        let structure = DocumentStructure::analyze(text, &paragraphs);

        let concepts = extract_concepts(&keywords, &technical_terms);
        let relationships = find_relationships(text, &concepts);

        let content_type = ContentType::classify(&ranked);
        let complexity = Complexity::classify(&keywords, technical_terms.len());

        let words = word_count(text);
        Self {
            word_count: words,
            reading_time: reading_time(words),
            sentences: ranked,
            keywords,
            topic_keywords,
            named_entities,
            technical_terms,
            structure,
            concepts,
            relationships,
            content_type,
            complexity,
        }
    }

    /// Entities, technical terms and topic keywords, in that order.
    pub fn key_terms(&self) -> Vec<String> {
        let pool = self
            .named_entities
            .iter()
            .take(3)
            .chain(self.technical_terms.iter().take(4))
            .chain(self.topic_keywords.iter().take(5))
            .cloned();
        let mut terms = dedup_preserving_order(pool);
        terms.truncate(MAX_KEY_TERMS);
        terms
    }
}

fn push_section(out: &mut String, title: &str, items: &[String], empty: &str) {
    out.push_str(&format!("{}\n", title));
    if items.is_empty() {
        out.push_str(&format!("• {}\n", empty));
    }
    for item in items {
        out.push_str(&format!("• {}\n", item));
    }
}

pub fn render_report(analysis: &DocumentAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", REPORT_BANNER));

    out.push_str("📊 **Smart Document Analysis:**\n");
    out.push_str(&format!("• Word Count: {} words\n", analysis.word_count));
    out.push_str(&format!("• Reading Time: {} minutes\n", analysis.reading_time));
    out.push_str(&format!("• Content Type: {}\n", analysis.content_type));
    out.push_str(&format!("• Complexity Level: {}\n\n", analysis.complexity));

    push_section(
        &mut out,
        "🔑 **Key Topics & Concepts:**",
        &analysis.key_terms(),
        "No key topics detected",
    );

    let summary: Vec<String> = analysis
        .sentences
        .iter()
        .take(SUMMARY_SENTENCES)
        .filter(|s| s.text.chars().count() > 20)
        .map(|s| format!("{}.", s.text))
        .collect();
    out.push('\n');
    push_section(
        &mut out,
        "📝 **Intelligent Summary:**",
        &summary,
        "No substantial sentences found",
    );

    let strategies = study_strategies(analysis.content_type, analysis.complexity);
    out.push('\n');
    push_section(&mut out, "💡 **Personalized Study Strategies:**", &strategies, "");

    let key_takeaways = takeaways(&analysis.concepts, analysis.sentences.first());
    out.push('\n');
    push_section(&mut out, "🎯 **Essential Takeaways:**", &key_takeaways, "");

    let relationships: Vec<String> = analysis.relationships.iter().take(3).cloned().collect();
    out.push('\n');
    push_section(&mut out, "🔗 **Key Relationships:**", &relationships, "");

    out.push_str("\n✨ **Smart Analysis:** This summary uses advanced text processing algorithms\n");
    out.push_str("including semantic analysis, concept extraction, and relationship mapping!\n");
    out
}

const CONCLUSION_MARKERS: [&str; 6] = ["important", "key", "conclusion", "therefore", "thus", "essential"];

const GENERIC_TAKEAWAYS: [&str; 3] = [
    "Review the main concepts multiple times for better retention",
    "Connect new information to your existing knowledge base",
    "Practice active recall by summarizing key points from memory",
];

const FALLBACK_TAKEAWAYS: usize = 4;

fn fallback_takeaways(sentences: &[&str], keywords: &[String]) -> Vec<String> {
    let mut out: Vec<String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            CONCLUSION_MARKERS.iter().any(|m| lower.contains(m))
        })
        .take(2)
        .map(|s| format!("{}.", s.trim()))
        .collect();

    out.extend(
        keywords
            .iter()
            .take(3)
            .map(|k| format!("Understanding {} is crucial for mastering this material", k)),
    );

    let mut generic = GENERIC_TAKEAWAYS.iter().cycle();
    while out.len() < FALLBACK_TAKEAWAYS {
        if let Some(g) = generic.next() {
            out.push(g.to_string());
        }
    }

    out.truncate(FALLBACK_TAKEAWAYS);
    out
}

/// Degraded report that only needs keyword extraction and basic sentence ranking.
pub fn render_fallback_report(text: &str) -> String {
    let sentences: Vec<&str> = FRAGMENT_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect();
    let words = word_count(text);
    let keywords = extract_keywords(text);

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", FALLBACK_BANNER));

    out.push_str("📊 **Document Analysis:**\n");
    out.push_str(&format!("• Word Count: {} words\n", words));
    out.push_str(&format!("• Reading Time: {} minutes\n", reading_time(words)));
    out.push_str("• Processing: Basic text analysis (full analysis unavailable)\n\n");

    let topics: Vec<String> = keywords.iter().take(8).cloned().collect();
    push_section(&mut out, "🔑 **Key Topics & Concepts:**", &topics, "No key topics detected");

    let summary: Vec<String> = rank_sentences_basic(&sentences, &keywords, SUMMARY_SENTENCES)
        .into_iter()
        .map(|s| format!("{}.", s))
        .collect();
    out.push('\n');
    push_section(&mut out, "📝 **Intelligent Summary:**", &summary, "No sentences found");

    out.push_str("\n💡 **Smart Study Strategies:**\n");
    out.push_str("• Focus on the key topics and concepts identified above\n");
    out.push_str("• Create concept maps linking related terms and ideas\n");
    out.push_str("• Use spaced repetition to memorize important facts\n");
    out.push_str("• Practice explaining concepts in simple language\n");
    out.push_str("• Test your understanding with self-generated questions\n");

    out.push('\n');
    push_section(
        &mut out,
        "🎯 **Essential Takeaways:**",
        &fallback_takeaways(&sentences, &keywords),
        "",
    );

    out.push_str("\n🔗 **Key Relationships:**\n");
    out.push_str("• Look for connections between the main topics listed above\n");
    out.push_str("• Consider how different concepts build upon each other\n");
    out.push_str("• Identify cause-and-effect relationships in the material\n");

    out.push_str("\n⚠️ **NOTICE:** This is a simplified analysis produced because the full\n");
    out.push_str("analysis could not be completed for this document.\n");
    out
}
