use crate::error::{Result, RiskError};
use crate::record::{self, Field, Record};
use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "riskscore",
    version,
    about = "Credit-card applicant risk scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one applicant
    Score(ScoreCommand),
    /// Score one applicant and show each term of the log-odds sum
    Explain(ScoreCommand),
    /// Print the model intercept, coefficients and category weights
    Weights(WeightsCommand),
    /// Classify a credit score into a risk tier
    Tier(TierCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub applicant: ApplicantArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TierCommand {
    /// Credit score between 300 and 850
    #[arg(value_parser = clap::value_parser!(u32).range(300..=850))]
    pub score: u32,
}

/// Applicant fields. Flags override values read from `--input`.
#[derive(Args, Default)]
pub struct ApplicantArgs {
    /// JSON or TOML file holding an applicant record
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Total annual income
    #[arg(long, allow_negative_numbers = true)]
    pub income: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub years_employed: Option<f64>,
    #[arg(long)]
    pub children: Option<u32>,
    /// e.g. "Married", "civil-marriage", "Single", "Widow", "Separated"
    #[arg(long)]
    pub family_status: Option<String>,
    /// e.g. "Working", "State servant", "pensioner"
    #[arg(long)]
    pub income_type: Option<String>,
    /// e.g. "House / apartment", "with-parents"
    #[arg(long)]
    pub housing_type: Option<String>,
    /// e.g. "Higher education", "lower-secondary"
    #[arg(long)]
    pub education_type: Option<String>,
    /// e.g. "Core staff", "it-staff"
    #[arg(long)]
    pub occupation_type: Option<String>,
    /// young_adults, adult, mid_age or senior
    #[arg(long)]
    pub age_group: Option<String>,
}

impl ApplicantArgs {
    /// Builds the untyped record: file contents first, then flag overrides.
    pub fn to_record(&self) -> Result<Record> {
        let mut fields = match &self.input {
            Some(path) => record::load_record(path)?,
            None => Record::new(),
        };

        let numbers = [
            (Field::AnnualIncome, self.income),
            (Field::YearsEmployed, self.years_employed),
        ];
        for (field, value) in numbers {
            if let Some(number) = value {
                let number = serde_json::Number::from_f64(number)
                    .ok_or_else(|| RiskError::invalid_input(field.key(), "must be finite"))?;
                record::overlay(&mut fields, field, Value::Number(number));
            }
        }
        if let Some(children) = self.children {
            record::overlay(&mut fields, Field::ChildCount, Value::from(children));
        }

        let labels = [
            (Field::FamilyStatus, &self.family_status),
            (Field::IncomeType, &self.income_type),
            (Field::HousingType, &self.housing_type),
            (Field::EducationType, &self.education_type),
            (Field::OccupationType, &self.occupation_type),
            (Field::AgeGroup, &self.age_group),
        ];
        for (field, label) in labels {
            if let Some(label) = label {
                record::overlay(&mut fields, field, Value::String(label.clone()));
            }
        }

        Ok(fields)
    }
}
