use crate::engine::weights::ModelSummary;
use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn weights_to_json(summary: &ModelSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
