//! Credit-card applicant risk scoring.
//!
//! [`engine::compute_score`] is the whole model: a fixed additive log-odds
//! formula over an [`types::applicant::Applicant`], squashed through a
//! sigmoid and rescaled to a 300-850 credit score. Everything else in the
//! crate parses input for it or renders its output.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::{compute_score, contributions};
pub use engine::tier::RiskTier;
pub use error::{Result, RiskError};
pub use types::applicant::Applicant;
pub use types::scoring::ScoreResult;
