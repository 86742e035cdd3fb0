//! Fitted weight tables of the applicant risk model.
//!
//! Each table is an exhaustive match over its category, so a missing
//! entry is a compile error rather than a silent zero. Absence of a
//! category on the applicant is handled by the caller.

use crate::types::applicant::{
    AgeGroup, Category, EducationType, FamilySizeBin, FamilyStatus, HousingType, IncomeType,
    OccupationType,
};
use serde::Serialize;

pub const INTERCEPT: f64 = 0.2983;
pub const INCOME_COEFFICIENT: f64 = -0.000_000_35;
/// Positive as fitted: longer employment nudges risk up slightly.
pub const EMPLOYMENT_COEFFICIENT: f64 = 0.001_810;

pub fn family_size_weight(bin: FamilySizeBin) -> f64 {
    match bin {
        FamilySizeBin::Large => 0.6830,
        FamilySizeBin::Singleton => -0.4090,
        FamilySizeBin::Small => 0.0228,
    }
}

pub fn income_type_weight(income_type: IncomeType) -> f64 {
    match income_type {
        IncomeType::Pensioner => 1.685,
        IncomeType::StateServant => -0.721,
        IncomeType::Working => -0.342,
        IncomeType::CommercialAssociate => -0.300,
        IncomeType::Student => -0.023,
    }
}

pub fn education_weight(education: EducationType) -> f64 {
    match education {
        EducationType::LowerSecondary => 0.441,
        EducationType::IncompleteHigher => 0.142,
        EducationType::SecondarySpecial => -0.134,
        EducationType::HigherEducation => -0.069,
        EducationType::AcademicDegree => -0.083,
    }
}

pub fn family_status_weight(status: FamilyStatus) -> f64 {
    match status {
        FamilyStatus::Widow => 0.827,
        FamilyStatus::Single => 0.252,
        FamilyStatus::Separated => -0.208,
        FamilyStatus::Married => -0.273,
        FamilyStatus::CivilMarriage => -0.300,
    }
}

pub fn housing_weight(housing: HousingType) -> f64 {
    match housing {
        HousingType::MunicipalApartment => 0.517,
        HousingType::OfficeApartment => 0.384,
        HousingType::HouseApartment => -0.101,
        HousingType::CoOpApartment => -0.075,
        HousingType::RentedApartment => -0.055,
        HousingType::WithParents => -0.372,
    }
}

pub fn occupation_weight(occupation: OccupationType) -> f64 {
    match occupation {
        OccupationType::LowSkillLaborers => 0.606,
        OccupationType::HighSkillTech => 0.554,
        OccupationType::Drivers => 0.460,
        OccupationType::ItStaff => 0.462,
        OccupationType::SecurityStaff => 0.394,
        OccupationType::CoreStaff => 0.240,
        OccupationType::Laborers => 0.061,
        OccupationType::Accountants => 0.056,
        OccupationType::Managers => 0.051,
        OccupationType::SalesStaff => -0.131,
        OccupationType::RealtyAgents => -0.189,
        OccupationType::CookingStaff => -0.387,
        OccupationType::CleaningStaff => -0.465,
        OccupationType::MedicineStaff => -0.548,
        OccupationType::PrivateServiceStaff => -0.663,
    }
}

pub fn age_group_weight(age_group: AgeGroup) -> f64 {
    match age_group {
        AgeGroup::YoungAdults => 0.224,
        AgeGroup::Adult => 0.051,
        AgeGroup::MidAge => 0.010,
        AgeGroup::Senior => 0.010,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightEntry {
    pub label: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightTable {
    pub field: &'static str,
    pub entries: Vec<WeightEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub intercept: f64,
    pub income_coefficient: f64,
    pub employment_coefficient: f64,
    pub tables: Vec<WeightTable>,
}

fn category_table<C: Category>(weight: fn(C) -> f64) -> WeightTable {
    WeightTable {
        field: C::FIELD,
        entries: C::ALL
            .iter()
            .map(|category| WeightEntry {
                label: category.label(),
                weight: weight(*category),
            })
            .collect(),
    }
}

pub fn summary() -> ModelSummary {
    let family_size = WeightTable {
        field: "family_size",
        entries: [
            FamilySizeBin::Singleton,
            FamilySizeBin::Small,
            FamilySizeBin::Large,
        ]
        .into_iter()
        .map(|bin| WeightEntry {
            label: bin.label(),
            weight: family_size_weight(bin),
        })
        .collect(),
    };

    ModelSummary {
        intercept: INTERCEPT,
        income_coefficient: INCOME_COEFFICIENT,
        employment_coefficient: EMPLOYMENT_COEFFICIENT,
        tables: vec![
            family_size,
            category_table(income_type_weight),
            category_table(education_weight),
            category_table(family_status_weight),
            category_table(housing_weight),
            category_table(occupation_weight),
            category_table(age_group_weight),
        ],
    }
}
