use crate::engine::tier::RiskTier;
use crate::record::Unrecognized;
use crate::types::applicant::Applicant;
use crate::types::scoring::{Contribution, ScoreResult};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub version: String,
    pub generated_at: String,
    pub applicant: Applicant,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub tier: RiskTier,
    pub contributions: Vec<Contribution>,
    pub unrecognized: Vec<Unrecognized>,
}

impl ScoreReport {
    pub fn new(
        applicant: Applicant,
        result: ScoreResult,
        contributions: Vec<Contribution>,
        unrecognized: Vec<Unrecognized>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            applicant,
            tier: result.tier(),
            result,
            contributions,
            unrecognized,
        }
    }
}
