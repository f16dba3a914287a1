// Engine entry point.
// Runs the full analysis; if that panics the simpler fallback report is produced
// instead, and only when both fail does the caller see an error.
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info, warn};

use super::report::{render_fallback_report, render_report, DocumentAnalysis};
use crate::error::SummaryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Full,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub report: String,
    pub mode: SummaryMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DocumentAnalysis>,
}

pub fn summarize(text: &str) -> Result<Summary, SummaryError> {
    summarize_with(text, |t| {
        let analysis = DocumentAnalysis::analyze(t);
        let report = render_report(&analysis);
        (analysis, report)
    })
}

/// Same as [`summarize`] with the full pipeline supplied by the caller.
fn summarize_with<F>(text: &str, pipeline: F) -> Result<Summary, SummaryError>
where
    F: FnOnce(&str) -> (DocumentAnalysis, String),
{
    if text.trim().is_empty() {
        return Err(SummaryError::EmptyDocument);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| pipeline(text))) {
        Ok((analysis, report)) => {
            info!(
                words = analysis.word_count,
                sentences = analysis.sentences.len(),
                "generated full summary"
            );
            Ok(Summary {
                report,
                mode: SummaryMode::Full,
                analysis: Some(analysis),
            })
        }
        Err(_) => {
            warn!("full analysis failed, falling back to basic summary");
            match panic::catch_unwind(|| render_fallback_report(text)) {
                Ok(report) => Ok(Summary {
                    report,
                    mode: SummaryMode::Fallback,
                    analysis: None,
                }),
                Err(_) => {
                    error!("fallback summary failed");
                    Err(SummaryError::Failed)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::report::{FALLBACK_BANNER, REPORT_BANNER};

    const CAUSAL: &str = "Smoking causes lung disease in many patients. \
        Research shows that early intervention leads to better outcomes. \
        Doctors recommend regular screening for high-risk groups.";

    #[test]
    fn test_summarize_full() {
        let summary = summarize(CAUSAL).unwrap();
        assert_eq!(summary.mode, SummaryMode::Full);
        assert!(summary.report.starts_with(REPORT_BANNER));
        let analysis = summary.analysis.unwrap();
        assert_eq!(
            analysis.relationships[0],
            "Look for causes patterns in the material"
        );
        assert_eq!(
            analysis.relationships[1],
            "Look for leads to patterns in the material"
        );
    }

    #[test]
    fn test_summarize_empty_is_rejected() {
        assert!(matches!(summarize(""), Err(SummaryError::EmptyDocument)));
        assert!(matches!(summarize("  \n\t "), Err(SummaryError::EmptyDocument)));
    }

    #[test]
    fn test_summarize_degenerate_input_still_succeeds() {
        let summary = summarize("!!! ???").unwrap();
        assert_eq!(summary.mode, SummaryMode::Full);
        assert!(summary.report.contains("Beginner-Friendly"));
    }

    #[test]
    fn test_pipeline_panic_uses_fallback() {
        let summary = summarize_with(CAUSAL, |_| panic!("boom")).unwrap();
        assert_eq!(summary.mode, SummaryMode::Fallback);
        assert!(summary.report.starts_with(FALLBACK_BANNER));
        assert!(summary.analysis.is_none());
    }

    #[test]
    fn test_summary_json_has_report_field() {
        let summary = summarize(CAUSAL).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["report"].is_string());
        assert_eq!(json["mode"], "full");
        assert!(json["analysis"]["keywords"].is_array());
        assert_eq!(json["analysis"]["content_type"], "Academic/Research");
    }

    #[test]
    fn test_report_fed_back_into_engine() {
        let first = summarize(CAUSAL).unwrap();
        let second = summarize(&first.report).unwrap();
        assert_eq!(second.mode, SummaryMode::Full);
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let a = summarize(CAUSAL).unwrap();
        let b = summarize(CAUSAL).unwrap();
        assert_eq!(a.report, b.report);
    }
}
