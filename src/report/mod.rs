pub mod json;
pub mod md;
pub mod text;

use crate::engine::weights::ModelSummary;
use crate::error::RiskError;
use crate::types::config::DEFAULT_PROGRESS_WIDTH;
use crate::types::report::ScoreReport;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub progress_width: u32,
    pub explain: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            progress_width: DEFAULT_PROGRESS_WIDTH,
            explain: false,
        }
    }
}

pub fn render(
    report: &ScoreReport,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, RiskError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, options)),
        OutputFormat::Json => json::to_json(report).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, options)),
    }
}

pub fn render_weights(summary: &ModelSummary, format: OutputFormat) -> Result<String, RiskError> {
    match format {
        OutputFormat::Text => Ok(text::weights_to_text(summary)),
        OutputFormat::Json => json::weights_to_json(summary).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::weights_to_markdown(summary)),
    }
}

/// `"65.6%"`, one decimal place.
pub(crate) fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// A bar whose filled share equals `probability`.
pub(crate) fn progress_bar(probability: f64, width: u32) -> String {
    let width = width as usize;
    let filled = ((probability.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
