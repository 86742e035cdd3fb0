use crate::types::scoring::Score;
use serde::Serialize;
use std::fmt;

pub const LOW_RISK_ABOVE: Score = 720;
pub const MEDIUM_RISK_FROM: Score = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskTier {
    /// 720 itself is still Medium; 600 is the lowest Medium score.
    pub fn classify(credit_score: Score) -> Self {
        if credit_score > LOW_RISK_ABOVE {
            Self::Low
        } else if credit_score >= MEDIUM_RISK_FROM {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
