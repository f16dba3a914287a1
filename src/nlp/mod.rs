// NLP module for StudyGenie
pub mod classify;
pub mod keywords;
pub mod ner;
pub mod relations;
pub mod report;
pub mod scoring;
pub mod strategy;
pub mod summarization;
pub mod text;

pub use summarization::{summarize, Summary, SummaryMode};
