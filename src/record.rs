//! Parsing of untyped applicant records into [`Applicant`].
//!
//! A record is a JSON object (or a TOML table converted to one) mapping
//! field names to values. Missing and `null` fields fall back to zero or
//! "no category". Category labels outside the known tables are kept as
//! [`Unrecognized`] notes and otherwise ignored. Only malformed value
//! types and negative or non-finite numbers are rejected.

use crate::error::{Result, RiskError};
use crate::types::applicant::{
    AgeGroup, Applicant, Category, EducationType, FamilyStatus, HousingType, IncomeType,
    OccupationType,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AnnualIncome,
    YearsEmployed,
    ChildCount,
    FamilyStatus,
    IncomeType,
    HousingType,
    EducationType,
    OccupationType,
    AgeGroup,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::AnnualIncome,
        Field::YearsEmployed,
        Field::ChildCount,
        Field::FamilyStatus,
        Field::IncomeType,
        Field::HousingType,
        Field::EducationType,
        Field::OccupationType,
        Field::AgeGroup,
    ];

    pub fn key(self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted record keys; the first one is canonical.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::AnnualIncome => &["annual_income", "AMT_INCOME_TOTAL"],
            Field::YearsEmployed => &["years_employed", "YEARS_EMPLOYED"],
            Field::ChildCount => &["child_count", "children", "CNT_CHILDREN"],
            Field::FamilyStatus => &["family_status", "FAMILY_STATUS"],
            Field::IncomeType => &["income_type", "INCOME_TYPE"],
            Field::HousingType => &["housing_type", "HOUSING_TYPE"],
            Field::EducationType => &["education_type", "EDUCATION_TYPE"],
            Field::OccupationType => &["occupation_type", "OCCUPATION_TYPE"],
            Field::AgeGroup => &["age_group", "AGE_GROUP"],
        }
    }

    fn owns(self, key: &str) -> bool {
        self.aliases().contains(&key)
    }
}

/// A categorical value that matched no known label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unrecognized {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedApplicant {
    pub applicant: Applicant,
    pub unrecognized: Vec<Unrecognized>,
}

pub fn load_record(path: &Path) -> Result<Record> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let malformed = |reason: String| RiskError::invalid_input(path.display().to_string(), reason);
    let value: Value = if is_toml {
        let table: toml::Value = toml::from_str(&content).map_err(|e| malformed(e.to_string()))?;
        serde_json::to_value(table)?
    } else {
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?
    };

    match value {
        Value::Object(record) => Ok(record),
        other => Err(malformed(format!(
            "expected an object of applicant fields, found {}",
            kind(&other)
        ))),
    }
}

/// Sets `field` to `value`, dropping any alias spellings already present.
pub fn overlay(record: &mut Record, field: Field, value: Value) {
    record.retain(|key, _| !field.owns(key));
    record.insert(field.key().to_string(), value);
}

pub fn parse_record(record: &Record) -> Result<ParsedApplicant> {
    for key in record.keys() {
        if !Field::ALL.iter().any(|field| field.owns(key)) {
            debug!(key = key.as_str(), "ignoring unknown applicant field");
        }
    }

    let mut unrecognized = Vec::new();
    let applicant = Applicant {
        annual_income: non_negative(record, Field::AnnualIncome)?,
        years_employed: non_negative(record, Field::YearsEmployed)?,
        child_count: count(record, Field::ChildCount)?,
        family_status: category::<FamilyStatus>(record, Field::FamilyStatus, &mut unrecognized)?,
        income_type: category::<IncomeType>(record, Field::IncomeType, &mut unrecognized)?,
        housing_type: category::<HousingType>(record, Field::HousingType, &mut unrecognized)?,
        education_type: category::<EducationType>(
            record,
            Field::EducationType,
            &mut unrecognized,
        )?,
        occupation_type: category::<OccupationType>(
            record,
            Field::OccupationType,
            &mut unrecognized,
        )?,
        age_group: category::<AgeGroup>(record, Field::AgeGroup, &mut unrecognized)?,
    };

    Ok(ParsedApplicant {
        applicant,
        unrecognized,
    })
}

fn lookup(record: &Record, field: Field) -> Option<&Value> {
    field
        .aliases()
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find(|value| !value.is_null())
}

fn non_negative(record: &Record, field: Field) -> Result<f64> {
    let Some(value) = lookup(record, field) else {
        return Ok(0.0);
    };
    let number = value.as_f64().ok_or_else(|| {
        RiskError::invalid_input(field.key(), format!("expected a number, found {}", kind(value)))
    })?;
    if !number.is_finite() {
        return Err(RiskError::invalid_input(field.key(), "must be finite"));
    }
    if number < 0.0 {
        return Err(RiskError::invalid_input(
            field.key(),
            format!("must not be negative (got {number})"),
        ));
    }
    Ok(number)
}

fn count(record: &Record, field: Field) -> Result<u32> {
    let Some(value) = lookup(record, field) else {
        return Ok(0);
    };
    if let Some(whole) = value.as_u64() {
        return u32::try_from(whole)
            .map_err(|_| RiskError::invalid_input(field.key(), format!("{whole} is too large")));
    }
    match value.as_f64() {
        Some(number) if number < 0.0 => Err(RiskError::invalid_input(
            field.key(),
            format!("must not be negative (got {number})"),
        )),
        Some(number) if number.fract() == 0.0 && number <= f64::from(u32::MAX) => {
            Ok(number as u32)
        }
        Some(number) => Err(RiskError::invalid_input(
            field.key(),
            format!("expected a whole number, found {number}"),
        )),
        None => Err(RiskError::invalid_input(
            field.key(),
            format!("expected a whole number, found {}", kind(value)),
        )),
    }
}

fn category<C: Category>(
    record: &Record,
    field: Field,
    unrecognized: &mut Vec<Unrecognized>,
) -> Result<Option<C>> {
    let Some(value) = lookup(record, field) else {
        return Ok(None);
    };
    let raw = value.as_str().ok_or_else(|| {
        RiskError::invalid_input(field.key(), format!("expected a label, found {}", kind(value)))
    })?;

    let parsed = C::parse(raw);
    if parsed.is_none() {
        info!(
            field = C::FIELD,
            value = raw,
            "unrecognized category contributes no weight"
        );
        unrecognized.push(Unrecognized {
            field: C::FIELD,
            value: raw.to_string(),
        });
    }
    Ok(parsed)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
