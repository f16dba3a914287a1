// Rule-table study strategies and takeaways.
use super::classify::{Complexity, ContentType};
use super::scoring::ScoredSentence;
use super::text::{dedup_preserving_order, truncate_chars};

const MAX_STRATEGIES: usize = 5;
const MAX_TAKEAWAYS: usize = 4;
const EXCERPT_CHARS: usize = 80;

const UNIVERSAL_STRATEGIES: [&str; 3] = [
    "Create concept maps linking related ideas",
    "Teach the material to someone else to test comprehension",
    "Use spaced repetition for long-term retention",
];

pub fn study_strategies(content_type: ContentType, complexity: Complexity) -> Vec<String> {
    let by_content: &[&str] = match content_type {
        ContentType::MathematicalScientific => &[
            "Practice solving problems step by step",
            "Create formula sheets for quick reference",
        ],
        ContentType::Historical => &[
            "Create timeline charts to visualize events",
            "Connect historical events to their causes and effects",
        ],
        ContentType::ProceduralProcess => &[
            "Break down processes into manageable steps",
            "Practice the process multiple times",
        ],
        ContentType::AcademicResearch | ContentType::GeneralAcademic => &[],
    };

    let by_complexity: &[&str] = match complexity {
        Complexity::Advanced => &[
            "Break complex concepts into smaller, simpler parts",
            "Use analogies to relate to familiar concepts",
        ],
        Complexity::Intermediate => &[
            "Build on foundational knowledge systematically",
            "Use active recall to test understanding",
        ],
        Complexity::BeginnerFriendly => &[],
    };

    let all = by_content
        .iter()
        .chain(by_complexity)
        .chain(UNIVERSAL_STRATEGIES.iter())
        .map(|s| s.to_string());

    let mut strategies = dedup_preserving_order(all);
    strategies.truncate(MAX_STRATEGIES);
    strategies
}

pub fn takeaways(concepts: &[String], top_sentence: Option<&ScoredSentence>) -> Vec<String> {
    let mut out: Vec<String> = concepts
        .iter()
        .take(3)
        .map(|c| format!("Master the concept of {} as it's central to this material", c))
        .collect();

    if let Some(sentence) = top_sentence.filter(|s| s.text.chars().count() > 30) {
        out.push(format!("Remember: {}...", truncate_chars(&sentence.text, EXCERPT_CHARS)));
    }

    out.push(
        "Focus on understanding relationships between concepts rather than memorizing isolated facts"
            .to_string(),
    );
    out.truncate(MAX_TAKEAWAYS);
    out
}
