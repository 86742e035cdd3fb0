pub mod tier;
pub mod weights;

use crate::types::applicant::{Applicant, Category};
use crate::types::scoring::{Contribution, Score, ScoreResult};
use tracing::debug;

pub const SCORE_FLOOR: Score = 300;
pub const SCORE_CEILING: Score = 850;
const SCORE_SPAN: f64 = 550.0;

/// The additive log-odds terms for `applicant`, in summation order.
///
/// Absent categories contribute a zero weight. Family status is counted
/// twice: once through the household size bin and once on its own.
pub fn contributions(applicant: &Applicant) -> [Contribution; 10] {
    let bin = applicant.family_size_bin();
    [
        Contribution::new("intercept", None, weights::INTERCEPT),
        Contribution::new(
            "annual_income",
            None,
            applicant.annual_income * weights::INCOME_COEFFICIENT,
        ),
        Contribution::new(
            "years_employed",
            None,
            applicant.years_employed * weights::EMPLOYMENT_COEFFICIENT,
        ),
        Contribution::new(
            "family_size",
            Some(bin.label()),
            weights::family_size_weight(bin),
        ),
        categorical(applicant.income_type, weights::income_type_weight),
        categorical(applicant.education_type, weights::education_weight),
        categorical(applicant.family_status, weights::family_status_weight),
        categorical(applicant.housing_type, weights::housing_weight),
        categorical(applicant.occupation_type, weights::occupation_weight),
        categorical(applicant.age_group, weights::age_group_weight),
    ]
}

fn categorical<C: Category>(value: Option<C>, weight: fn(C) -> f64) -> Contribution {
    Contribution::new(
        C::FIELD,
        value.map(C::label),
        value.map_or(0.0, weight),
    )
}

pub fn sigmoid(log_odds: f64) -> f64 {
    1.0 / (1.0 + (-log_odds).exp())
}

/// Rescales the probability of a good outcome onto the 300-850 band.
///
/// Truncates like an integer cast, then caps at the ceiling.
pub fn credit_score(probability_good: f64) -> Score {
    let raw = f64::from(SCORE_FLOOR) + probability_good * SCORE_SPAN;
    let score = (raw.trunc() as Score).min(SCORE_CEILING);
    debug_assert!(
        score >= SCORE_FLOOR,
        "credit score {score} fell below the floor (p_good = {probability_good})"
    );
    score
}

pub fn compute_score(applicant: &Applicant) -> ScoreResult {
    let log_odds = contributions(applicant)
        .iter()
        .fold(0.0, |sum, term| sum + term.weight);
    let probability_bad = sigmoid(log_odds);
    let probability_good = 1.0 - probability_bad;
    let credit_score = credit_score(probability_good);

    debug!(
        log_odds,
        probability_good,
        credit_score,
        "scored applicant"
    );

    ScoreResult {
        log_odds,
        probability_bad,
        probability_good,
        credit_score,
    }
}
