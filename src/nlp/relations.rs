// Concept pooling and relationship hints.
use super::text::dedup_preserving_order;

const MAX_CONCEPTS: usize = 8;
const MAX_RELATIONSHIPS: usize = 3;

const CONNECTORS: [&str; 7] = [
    "causes",
    "leads to",
    "results in",
    "affects",
    "influences",
    "depends on",
    "relates to",
];

const FALLBACK_RELATIONSHIPS: [&str; 3] = [
    "All main concepts work together to form a comprehensive understanding",
    "Look for cause-and-effect patterns throughout the material",
    "Connect new information to concepts you already know",
];

/// First five keywords followed by the first five technical terms, deduplicated.
pub fn extract_concepts(keywords: &[String], technical_terms: &[String]) -> Vec<String> {
    let pool = keywords
        .iter()
        .take(5)
        .chain(technical_terms.iter().take(5))
        .cloned();

    let mut concepts = dedup_preserving_order(pool);
    concepts.truncate(MAX_CONCEPTS);
    concepts
}

/// Connector phrases are reported first, then co-occurring concept pairs, up to
/// three in total. Never empty: falls back to generic statements.
pub fn find_relationships(text: &str, concepts: &[String]) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut relationships: Vec<String> = CONNECTORS
        .iter()
        .filter(|c| lower.contains(*c))
        .map(|c| format!("Look for {} patterns in the material", c))
        .collect();

    'pairs: for (i, first) in concepts.iter().enumerate() {
        for second in &concepts[i + 1..] {
            if relationships.len() >= MAX_RELATIONSHIPS {
                break 'pairs;
            }
            if lower.contains(&first.to_lowercase()) && lower.contains(&second.to_lowercase()) {
                relationships.push(format!("{} and {} are interconnected topics", first, second));
            }
        }
    }

    if relationships.is_empty() {
        return FALLBACK_RELATIONSHIPS.iter().map(|s| s.to_string()).collect();
    }

    relationships.truncate(MAX_RELATIONSHIPS);
    relationships
}
