use crate::engine::tier::RiskTier;
use serde::Serialize;

pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub log_odds: f64,
    pub probability_bad: f64,
    pub probability_good: f64,
    pub credit_score: Score,
}

impl ScoreResult {
    pub fn tier(&self) -> RiskTier {
        RiskTier::classify(self.credit_score)
    }
}

/// One additive term of the log-odds sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub term: &'static str,
    pub category: Option<&'static str>,
    pub weight: f64,
}

impl Contribution {
    pub fn new(term: &'static str, category: Option<&'static str>, weight: f64) -> Self {
        Self {
            term,
            category,
            weight,
        }
    }
}
